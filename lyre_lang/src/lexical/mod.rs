//! The standard Lyre lexicon.
//!
//! Binds the language's token classes to a [`Scanner`] in priority order
//! and classifies the scanner's output into typed [`Token`]s for the
//! parser. Whitespace is scanned like any other class and then discarded.

use log::debug;

use lyre_automata::builders::{char_range, union_of_chars};
use lyre_automata::scan::{LexicalError, Scanner, TokenClass};
use lyre_automata::{Automaton, ConfigurationError};

use crate::tokens::{Token, TokenKind};

/// Class names, in match-priority order. The parser identifies classes by
/// these names, never by automaton instance.
pub const NUMBER: &str = "number";
pub const SYMBOL: &str = "symbol";
pub const QUOTE: &str = "quote";
pub const OPEN_PARENTHESIS: &str = "open_parenthesis";
pub const CLOSE_PARENTHESIS: &str = "close_parenthesis";
pub const WHITESPACE: &str = "whitespace";

/// Errors from tokenizing Lyre source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error(transparent)]
    Scan(#[from] LexicalError),

    #[error("scanner committed to unknown token class '{name}'")]
    UnknownClass { name: String },
}

/// The ordered token classes of the Lyre language, bound to a scanner.
#[derive(Debug, Clone)]
pub struct Lexicon {
    scanner: Scanner,
}

impl Lexicon {
    /// Build the standard lexicon. Listing order is match priority.
    pub fn standard() -> Result<Self, ConfigurationError> {
        let number = Automaton::repetition(char_range('0', '9')?);

        let alphabet = Automaton::union(vec![
            char_range('a', 'z')?,
            char_range('A', 'Z')?,
            union_of_chars("?_+-*/")?,
        ])?;
        let symbol_tail = Automaton::repetition(Automaton::union(vec![
            char_range('0', '9')?,
            alphabet.clone(),
        ])?);
        let symbol = Automaton::concatenation(vec![alphabet, symbol_tail])?;

        let whitespace = Automaton::repetition(union_of_chars(" \t\n")?);

        let classes = vec![
            TokenClass::new(NUMBER, number),
            TokenClass::new(SYMBOL, symbol),
            TokenClass::new(QUOTE, Automaton::single('\'')),
            TokenClass::new(OPEN_PARENTHESIS, Automaton::single('(')),
            TokenClass::new(CLOSE_PARENTHESIS, Automaton::single(')')),
            TokenClass::new(WHITESPACE, whitespace),
        ];

        Ok(Self {
            scanner: Scanner::new(classes).with_discard(WHITESPACE),
        })
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Tokenize `source` into typed tokens, whitespace already discarded.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        for scanned in self.scanner.scan(source) {
            let scanned = scanned?;
            let kind = TokenKind::from_class_name(scanned.class_name()).ok_or_else(|| {
                LexerError::UnknownClass {
                    name: scanned.class_name().to_string(),
                }
            })?;
            tokens.push(Token::new(kind, scanned.lexeme()));
        }
        debug!("scanned {} tokens", tokens.len());
        Ok(tokens)
    }
}
