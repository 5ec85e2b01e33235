//! Scanning failures.

/// Characters of the unconsumed remainder reproduced in error messages.
const REMAINDER_SNIPPET_CHARS: usize = 32;

/// Raised when no configured token class can accept any prefix of the
/// remaining input. Carries the character offset where scanning stopped
/// and a bounded snippet of what was left.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    #[error("no token class matches the input at character {position}, near '{remainder}'")]
    UnrecognizedInput { position: usize, remainder: String },
}

impl LexicalError {
    pub(crate) fn unrecognized(position: usize, rest: &str) -> Self {
        let remainder = rest.chars().take(REMAINDER_SNIPPET_CHARS).collect();
        LexicalError::UnrecognizedInput {
            position,
            remainder,
        }
    }

    /// Shift the reported offset by `base` characters, for callers that
    /// scanned a suffix of a larger input.
    pub(crate) fn offset_by(self, base: usize) -> Self {
        match self {
            LexicalError::UnrecognizedInput {
                position,
                remainder,
            } => LexicalError::UnrecognizedInput {
                position: position + base,
                remainder,
            },
        }
    }

    /// Character offset (0-based) at which scanning failed.
    pub fn position(&self) -> usize {
        match self {
            LexicalError::UnrecognizedInput { position, .. } => *position,
        }
    }
}
