//! Errors from token-to-AST transformation.

use crate::tokens::TokenStreamError;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Stream(#[from] TokenStreamError),

    #[error("unexpected token '{found}'")]
    UnexpectedToken { found: String },

    #[error("unmatched open parenthesis")]
    UnmatchedOpenParenthesis,

    #[error("quotation is missing an expression to quote")]
    DanglingQuote,

    #[error("empty input, expected an expression")]
    EmptyInput,

    #[error("{count} top-level expressions, expected exactly one")]
    MultipleExpressions { count: usize },

    #[error("number literal '{text}' does not fit a 64-bit integer")]
    NumberOutOfRange { text: String },

    #[error("maximum expression nesting depth {max} exceeded")]
    MaxDepthExceeded { max: usize },
}
