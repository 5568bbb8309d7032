// Copyright (c) 2025 Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix search for dictionary autocomplete.
//!
//! [`PrefixSearchBackend`] is the capability the rest of the service relies
//! on. [`TrieSearchEngine`] implements it over an in-memory [`WordTrie`]
//! guarded by a reader-writer lock; another backend (an external index, say)
//! can be substituted without touching callers as long as it honors the same
//! contract:
//!
//! * `search` never mutates and returns at most `limit` words in ascending order
//! * `insert_word` is idempotent
//! * `remove_word` on an absent word returns `Ok(false)`
//! * every call other than `rebuild` fails with [`SearchError::NotReady`]
//!   until the first build has completed
//!
//! [`WordTrie`]: crate::data_structures::WordTrie

mod engine;

pub use engine::{BuildReport, EngineStats, RejectedWord, TrieSearchEngine};

use crate::data_structures::PrefixMatches;
use crate::error::SearchError;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// A prefix-search backend serving dictionary autocomplete.
pub trait PrefixSearchBackend: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs.
    fn backend_name(&self) -> &'static str;

    /// Whether the first build has completed.
    fn is_ready(&self) -> bool;

    /// Checks that `word` would be accepted by `insert_word`, without
    /// storing it.
    fn validate_word(&self, word: &str) -> SearchResult<()>;

    /// Returns up to `limit` stored words starting with `prefix`, in
    /// ascending order. `None` selects the backend's default limit.
    fn search(&self, prefix: &str, limit: Option<usize>) -> SearchResult<Vec<String>>;

    /// Same as `search`, with traversal statistics.
    fn search_stats(&self, prefix: &str, limit: Option<usize>) -> SearchResult<PrefixMatches>;

    /// Checks if a word is stored.
    fn contains(&self, word: &str) -> SearchResult<bool>;

    /// Stores a word. Returns `true` if it was not stored before.
    fn insert_word(&self, word: &str) -> SearchResult<bool>;

    /// Removes a word. Returns `true` if it was stored.
    fn remove_word(&self, word: &str) -> SearchResult<bool>;

    /// Replaces the whole word set. Malformed words are skipped and listed
    /// in the report.
    fn rebuild(&self, words: &[String]) -> BuildReport;

    /// Snapshot of the backend's size.
    fn stats(&self) -> EngineStats;
}
