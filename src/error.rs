use thiserror::Error;

/// Errors reported by the word ladder solver before or during graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Start or end word is unusable.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A word's length differs from the start word's.
    #[error("word {word:?} has length {found}, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
}

impl LadderError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
