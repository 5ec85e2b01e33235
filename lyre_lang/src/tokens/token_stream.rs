//! Token stream navigation for the parser.

use super::token::{Token, TokenKind};

/// Errors from token stream navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenStreamError {
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken { expected: TokenKind, found: String },

    #[error("expected {expected}, but reached end of input")]
    UnexpectedEndOfStream { expected: TokenKind },
}

/// A forward-only cursor over classified tokens.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The token under the cursor, if any.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Peek `n` tokens past the cursor without advancing.
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    /// Consume and return the token under the cursor.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Whether the token under the cursor has the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().map(Token::kind) == Some(kind)
    }

    /// Consume the token under the cursor if it has the expected kind.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, TokenStreamError> {
        match self.current() {
            Some(token) if token.kind() == expected => {
                let token = token.clone();
                self.position += 1;
                Ok(token)
            }
            Some(token) => Err(TokenStreamError::UnexpectedToken {
                expected,
                found: token.text().to_string(),
            }),
            None => Err(TokenStreamError::UnexpectedEndOfStream { expected }),
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining_count(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}
