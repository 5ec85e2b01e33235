//! Typed tokens for the Lyre parser.
//!
//! The scanner identifies token classes by name; this module maps those
//! names onto [`TokenKind`] and provides the [`TokenStream`] the parser
//! navigates. Tokens carry a kind and the matched text only — no
//! positions or spans.

mod token;
mod token_stream;

pub use token::{Token, TokenKind};
pub use token_stream::{TokenStream, TokenStreamError};
