//! The Lyre language library.
//!
//! Builds the language front end on top of [`lyre_automata`]: the
//! standard lexicon ([`lexical`]), typed tokens ([`tokens`]), the
//! recursive-descent parser ([`syntax`]), the tree-walking evaluator
//! ([`eval`]), and the pipeline tying the stages together
//! ([`pipeline`]).

pub mod config;
pub mod eval;
pub mod lexical;
pub mod pipeline;
pub mod syntax;
pub mod tokens;

// Re-export key types for library consumers
pub use eval::Value;
pub use lyre_automata::ConfigurationError;
pub use pipeline::{Interpreter, PipelineError};
pub use syntax::Expr;
