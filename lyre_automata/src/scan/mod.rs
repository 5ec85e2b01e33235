//! Longest-match token scanning over parallel automata.
//!
//! A [`Scanner`] owns an ordered list of named [`TokenClass`]es. For each
//! token it drives every class's automaton in parallel over the input,
//! records the furthest position at which any class accepts, and commits
//! to that acceptance once no automaton can advance further
//! (maximal munch). When several classes accept a prefix of the same
//! maximal length, the first class in the configured order wins.
//!
//! One class may be designated the *discard* class (typically
//! whitespace); its tokens are consumed but never emitted.

mod error;
mod scanner;
mod token_class;

pub use error::LexicalError;
pub use scanner::{Scanner, Step, Tokens};
pub use token_class::{Token, TokenClass};
