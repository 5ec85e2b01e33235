//! Composable finite automata and a longest-match scanner built on them.
//!
//! The crate has two layers:
//!
//! - **Automata** ([`Automaton`], [`State`]): two primitives (`Empty`,
//!   `Single`) and three combinators (`Union`, `Concatenation`,
//!   `Repetition`) that simulate every live alternative in parallel.
//!   Concatenation and repetition perform on-the-fly subset construction,
//!   so from the caller's viewpoint every automaton is deterministic: one
//!   state in, at most one state out.
//! - **Scanning** ([`scan`]): named token classes driven in parallel over
//!   an input string with maximal-munch semantics and configured-order
//!   priority on ties.
//!
//! All transition functions are pure; states are plain values with
//! structural equality and no interior mutation.

pub mod automaton;
pub mod builders;
pub mod error;
pub mod scan;
pub mod state;

pub use automaton::Automaton;
pub use error::ConfigurationError;
pub use state::State;
