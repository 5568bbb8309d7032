//! Dictionary store error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the dictionary store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The word is already present in the dictionary.
    #[error("Word already exists: {0}")]
    AlreadyExists(String),

    /// Error when reading or writing the backing file.
    #[error("Dictionary file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when encoding or decoding dictionary entries.
    #[error("Dictionary serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file does not exist and may not be created.
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),

    /// The backing data violates a store invariant.
    #[error("Dictionary data is corrupted: {0}")]
    Corrupted(String),
}
