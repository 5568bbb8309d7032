// Copyright (c) 2025 Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary service: keeps the search backend in step with the store.
//!
//! Every write goes to the [`DictionaryStore`] first. Only once it has been
//! persisted is the [`PrefixSearchBackend`] notified, so the backend may lag
//! behind the store but never holds a word the store has not accepted.
//! [`DictionaryService::resync`] reconciles the two by rebuilding the
//! backend from the store's full word list.
//!
//! Writes through the service and resyncs exclude each other: a resync
//! holds the write gate from its store snapshot until the rebuilt backend
//! is published, so a word persisted in between is never lost from search.

mod rebuild;

pub use rebuild::spawn_periodic_rebuild;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{report_error, ErrorContext, LexiconError, LexiconResult};
use crate::search::{BuildReport, PrefixSearchBackend};
use crate::store::{DictionaryEntry, DictionaryStore};

const COMPONENT: &str = "dictionary_service";

/// Write-through coordinator between the dictionary store and the search
/// backend.
pub struct DictionaryService {
    store: Arc<dyn DictionaryStore>,
    search: Arc<dyn PrefixSearchBackend>,
    // Shared by writes, exclusive for resync
    write_gate: RwLock<()>,
}

impl std::fmt::Debug for DictionaryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryService")
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

impl DictionaryService {
    /// Loads every word from `store` into `search` and returns a service
    /// ready to answer requests.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - Once the backend has been built. Malformed words are
    ///   skipped and logged, they do not prevent startup.
    /// * `Err(LexiconError)` - If the store cannot be read. Startup must not
    ///   proceed without the initial build.
    pub async fn start(
        store: Arc<dyn DictionaryStore>,
        search: Arc<dyn PrefixSearchBackend>,
    ) -> LexiconResult<Self> {
        let service = Self {
            store,
            search,
            write_gate: RwLock::new(()),
        };
        let report = service.resync().await?;

        info!(
            backend = service.search.backend_name(),
            words = report.inserted,
            rejected = report.rejected.len(),
            "Dictionary service started"
        );
        Ok(service)
    }

    /// The search backend this service keeps up to date.
    pub fn search_backend(&self) -> &Arc<dyn PrefixSearchBackend> {
        &self.search
    }

    /// Adds a word to the dictionary and makes it searchable.
    ///
    /// The word is validated against the backend's bounds before anything is
    /// written, so the store never accepts a word the backend would reject.
    pub async fn add_word(&self, word: &str, description: &str) -> LexiconResult<DictionaryEntry> {
        self.search.validate_word(word)?;

        let gate = self.write_gate.read().await;
        let entry = self.store.add_entry(word, description).await?;

        if let Err(e) = self.search.insert_word(word) {
            drop(gate);
            warn!(word = %word, error = %e, "Search backend rejected a persisted word, resynchronizing");
            report_error(
                ErrorContext::new(LexiconError::Search(e), COMPONENT)
                    .with_details(format!("insert of '{word}' after persist")),
            );
            self.resync().await?;
        }

        debug!(word = %word, id = entry.id, "Word added");
        Ok(entry)
    }

    /// Deletes words from the dictionary and from the search backend.
    ///
    /// # Returns
    ///
    /// The words that were stored and have been deleted, in input order.
    pub async fn delete_words(&self, words: &[String]) -> LexiconResult<Vec<String>> {
        let mut deleted = Vec::with_capacity(words.len());
        let _gate = self.write_gate.read().await;

        for word in words {
            if !self.store.remove_word(word).await? {
                continue;
            }

            if let Err(e) = self.search.remove_word(word) {
                report_error(
                    ErrorContext::new(LexiconError::Search(e), COMPONENT)
                        .with_details(format!("removal of '{word}' after persist")),
                );
            }
            deleted.push(word.clone());
        }

        debug!(requested = words.len(), deleted = deleted.len(), "Words deleted");
        Ok(deleted)
    }

    /// Looks up the stored entry for a word.
    pub async fn lookup(&self, word: &str) -> LexiconResult<Option<DictionaryEntry>> {
        Ok(self.store.get_entry(word).await?)
    }

    /// Returns every stored entry, ordered by word.
    pub async fn all_entries(&self) -> LexiconResult<Vec<DictionaryEntry>> {
        Ok(self.store.list_entries().await?)
    }

    /// Autocomplete: up to `limit` words starting with `prefix`.
    pub fn search(&self, prefix: &str, limit: Option<usize>) -> LexiconResult<Vec<String>> {
        Ok(self.search.search(prefix, limit)?)
    }

    /// Rebuilds the search backend from the store's full word list.
    pub async fn resync(&self) -> LexiconResult<BuildReport> {
        let _gate = self.write_gate.write().await;
        let words = self.store.list_words().await?;
        Ok(self.search.rebuild(&words))
    }
}
