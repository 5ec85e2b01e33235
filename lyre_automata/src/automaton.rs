//! The five automaton variants and their transition functions.
//!
//! An automaton exposes a [start state](Automaton::start_state) and a pure
//! transition function [`next`](Automaton::next) from `(state, char)` to
//! either a successor state or "no transition". Dead branches are dropped
//! from composite states immediately, never retained, so composite-state
//! size is bounded by the branching structure rather than input length.

use std::collections::BTreeSet;

use crate::error::ConfigurationError;
use crate::state::State;

/// A deterministic finite automaton over characters.
///
/// `Union` and `Concatenation` are built through the validating
/// constructors [`Automaton::union`] and [`Automaton::concatenation`],
/// which reject fewer than two operands.
#[derive(Debug, Clone)]
pub enum Automaton {
    /// Accepts exactly the empty input.
    Empty,
    /// Accepts exactly one given character.
    Single(char),
    /// Accepts anything any branch accepts; all branches advance in
    /// parallel.
    Union(Vec<Automaton>),
    /// Accepts the parts in sequence. Whenever part `k` accepts, a fresh
    /// start for part `k + 1` is forked alongside it, so an ambiguous
    /// prefix can stay live in several positions at once.
    Concatenation(Vec<Automaton>),
    /// Accepts zero or more repetitions of the inner automaton.
    Repetition(Box<Automaton>),
}

impl Automaton {
    /// Alternation over `branches`. At least two are required.
    pub fn union(branches: Vec<Automaton>) -> Result<Self, ConfigurationError> {
        if branches.len() < 2 {
            return Err(ConfigurationError::TooFewUnionBranches {
                got: branches.len(),
            });
        }
        Ok(Automaton::Union(branches))
    }

    /// Sequencing of `parts`. At least two are required.
    pub fn concatenation(parts: Vec<Automaton>) -> Result<Self, ConfigurationError> {
        if parts.len() < 2 {
            return Err(ConfigurationError::TooFewConcatenationParts {
                got: parts.len(),
            });
        }
        Ok(Automaton::Concatenation(parts))
    }

    /// Zero-or-more repetitions of `inner`.
    pub fn repetition(inner: Automaton) -> Self {
        Automaton::Repetition(Box::new(inner))
    }

    /// Accepts exactly `ch`.
    pub fn single(ch: char) -> Self {
        Automaton::Single(ch)
    }

    /// The state before any input has been consumed.
    pub fn start_state(&self) -> State {
        match self {
            Automaton::Empty => State::Accept,
            Automaton::Single(_) => State::Start,
            Automaton::Union(branches) => {
                State::Union(branches.iter().map(|fa| Some(fa.start_state())).collect())
            }
            Automaton::Concatenation(parts) => {
                let live = parts
                    .first()
                    .map(|fa| (0, fa.start_state()))
                    .into_iter()
                    .collect();
                State::Concat(live, false)
            }
            Automaton::Repetition(inner) => {
                // Zero repetitions are a valid match.
                State::Repeat(BTreeSet::from([inner.start_state()]), true)
            }
        }
    }

    /// Advance `state` by `input`.
    ///
    /// Returns `None` when no branch of the automaton can consume `input`
    /// from `state`; callers must drop such branches rather than feed the
    /// result back in. The function is referentially transparent: equal
    /// arguments always yield equal results.
    pub fn next(&self, state: &State, input: char) -> Option<State> {
        match (self, state) {
            (Automaton::Empty, _) => None,
            (Automaton::Single(expected), State::Start) if *expected == input => {
                Some(State::Accept)
            }
            (Automaton::Single(_), _) => None,
            (Automaton::Union(branches), State::Union(subs)) if branches.len() == subs.len() => {
                let nexts: Vec<Option<State>> = branches
                    .iter()
                    .zip(subs)
                    .map(|(fa, sub)| sub.as_ref().and_then(|s| fa.next(s, input)))
                    .collect();
                if nexts.iter().all(Option::is_none) {
                    None
                } else {
                    Some(State::Union(nexts))
                }
            }
            (Automaton::Concatenation(parts), State::Concat(live, _)) => {
                let last = parts.len().checked_sub(1)?;
                let mut survivors = BTreeSet::new();
                for (index, sub) in live {
                    let index = *index;
                    let Some(fa) = parts.get(index) else { continue };
                    if let Some(next) = fa.next(sub, input) {
                        if next.is_final() {
                            if let Some(successor) = parts.get(index + 1) {
                                survivors.insert((index + 1, successor.start_state()));
                            }
                        }
                        survivors.insert((index, next));
                    }
                }
                if survivors.is_empty() {
                    return None;
                }
                let is_final = survivors
                    .iter()
                    .any(|(index, sub)| *index == last && sub.is_final());
                Some(State::Concat(survivors, is_final))
            }
            (Automaton::Repetition(inner), State::Repeat(live, _)) => {
                let mut survivors: BTreeSet<State> = live
                    .iter()
                    .filter_map(|sub| inner.next(sub, input))
                    .collect();
                if survivors.is_empty() {
                    return None;
                }
                let is_final = survivors.iter().any(State::is_final);
                if is_final {
                    // Restart on acceptance: the next repetition may begin
                    // with the very next character.
                    survivors.insert(inner.start_state());
                }
                Some(State::Repeat(survivors, is_final))
            }
            // A state that does not belong to this automaton has no
            // transitions.
            _ => None,
        }
    }
}
