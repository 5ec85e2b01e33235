use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexical;

/// The token categories of the Lyre language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Number,
    Symbol,
    Quote,
    OpenParenthesis,
    CloseParenthesis,
}

impl TokenKind {
    /// Map a scanner class name onto a kind. Returns `None` for names the
    /// parser has no use for (such as the discarded whitespace class).
    pub fn from_class_name(name: &str) -> Option<Self> {
        match name {
            lexical::NUMBER => Some(Self::Number),
            lexical::SYMBOL => Some(Self::Symbol),
            lexical::QUOTE => Some(Self::Quote),
            lexical::OPEN_PARENTHESIS => Some(Self::OpenParenthesis),
            lexical::CLOSE_PARENTHESIS => Some(Self::CloseParenthesis),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => lexical::NUMBER,
            Self::Symbol => lexical::SYMBOL,
            Self::Quote => lexical::QUOTE,
            Self::OpenParenthesis => lexical::OPEN_PARENTHESIS,
            Self::CloseParenthesis => lexical::CLOSE_PARENTHESIS,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified token: its kind and the matched source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
