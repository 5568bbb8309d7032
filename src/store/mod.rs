// Copyright (c) 2025 Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary store: the authoritative word set.
//!
//! The search engine is a derived cache of what a [`DictionaryStore`] holds.
//! Callers write to the store first and only then notify the engine, so the
//! store never depends on the engine.

mod json_file;
mod memory;

pub use json_file::JsonFileDictionaryStore;
pub use memory::InMemoryDictionaryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Result type for dictionary store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A dictionary entry: a word and its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Identifier assigned by the store
    pub id: u64,

    /// The word itself, unique within the store
    pub word: String,

    /// Free-form description of the word
    pub description: String,
}

/// Persisted source of truth for dictionary words.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DictionaryStore: Send + Sync {
    /// Returns every stored word, in ascending order.
    async fn list_words(&self) -> StoreResult<Vec<String>>;

    /// Returns every stored entry, ordered by word.
    async fn list_entries(&self) -> StoreResult<Vec<DictionaryEntry>>;

    /// Looks up the entry for a single word.
    async fn get_entry(&self, word: &str) -> StoreResult<Option<DictionaryEntry>>;

    /// Durably stores a new word.
    ///
    /// # Returns
    ///
    /// * `Ok(DictionaryEntry)` - The stored entry, with its assigned id.
    /// * `Err(StoreError::AlreadyExists)` - If the word is already stored.
    async fn add_entry(&self, word: &str, description: &str) -> StoreResult<DictionaryEntry>;

    /// Durably removes a word. Returns `true` if the word was stored.
    async fn remove_word(&self, word: &str) -> StoreResult<bool>;
}
