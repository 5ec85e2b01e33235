//! Construction-time errors for automaton combinators.

/// Raised when a combinator is built with fewer operands than its arity
/// requires. Indicates a bug in the caller's grammar definition; no
/// partial automaton is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("union requires at least 2 automata, got {got}")]
    TooFewUnionBranches { got: usize },

    #[error("concatenation requires at least 2 automata, got {got}")]
    TooFewConcatenationParts { got: usize },

    #[error("character union requires at least 1 character")]
    EmptyCharacterSet,

    #[error("character range '{start}'..'{end}' contains no characters")]
    EmptyCharacterRange { start: char, end: char },

    #[error("literal '{literal}' needs at least 2 characters to concatenate")]
    LiteralTooShort { literal: String },
}
