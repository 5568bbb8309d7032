//! Search engine error module.

use thiserror::Error;

use crate::data_structures::TrieError;

/// Errors returned by prefix-search backends.
///
/// An unmatched prefix is not an error, and neither is removing a word that
/// is not stored: both are ordinary outcomes reported through return values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The word cannot be stored.
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] TrieError),

    /// The requested result limit is not positive.
    #[error("Invalid result limit {0}: must be greater than 0")]
    InvalidLimit(usize),

    /// The engine has not completed its first build.
    #[error("Search engine is not ready")]
    NotReady,
}

impl SearchError {
    /// Whether the error stems from caller input rather than engine state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidWord(_) | Self::InvalidLimit(_))
    }
}
