//! Named token patterns and the tokens they produce.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::automaton::Automaton;

/// A name bound to an automaton: the unit the scanner reasons about.
///
/// Equality and hashing consider the name only. Two classes with the same
/// name are interchangeable even if constructed separately, which is what
/// lets downstream consumers look up emitted classes by name.
#[derive(Debug, Clone)]
pub struct TokenClass {
    name: String,
    automaton: Automaton,
}

impl TokenClass {
    /// Bind `name` to `automaton`. Classes are shared between the scanner
    /// configuration and every token they accept.
    pub fn new(name: impl Into<String>, automaton: Automaton) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            automaton,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }
}

impl PartialEq for TokenClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TokenClass {}

impl Hash for TokenClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A scanned token: the class that accepted it and the matched lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    class: Arc<TokenClass>,
    lexeme: String,
}

impl Token {
    pub fn new(class: Arc<TokenClass>, lexeme: impl Into<String>) -> Self {
        Self {
            class,
            lexeme: lexeme.into(),
        }
    }

    pub fn class(&self) -> &TokenClass {
        &self.class
    }

    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn into_lexeme(self) -> String {
        self.lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.class, self.lexeme)
    }
}
