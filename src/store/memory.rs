//! In-memory dictionary store, for tests and ephemeral deployments.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{DictionaryEntry, DictionaryStore, StoreResult};
use crate::error::StoreError;

/// Dictionary store kept entirely in memory.
#[derive(Debug)]
pub struct InMemoryDictionaryStore {
    entries: RwLock<BTreeMap<String, DictionaryEntry>>,
    next_id: AtomicU64,
}

impl InMemoryDictionaryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a store holding `words`, each with an empty description.
    /// Repeated words are stored once.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        {
            let mut entries = store.entries.write();
            for word in words {
                let word = word.into();
                if entries.contains_key(&word) {
                    continue;
                }
                let id = store.next_id.fetch_add(1, Ordering::Relaxed);
                entries.insert(
                    word.clone(),
                    DictionaryEntry {
                        id,
                        word,
                        description: String::new(),
                    },
                );
            }
        }
        store
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for InMemoryDictionaryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DictionaryStore for InMemoryDictionaryStore {
    async fn list_words(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.read().keys().cloned().collect())
    }

    async fn list_entries(&self) -> StoreResult<Vec<DictionaryEntry>> {
        Ok(self.entries.read().values().cloned().collect())
    }

    async fn get_entry(&self, word: &str) -> StoreResult<Option<DictionaryEntry>> {
        Ok(self.entries.read().get(word).cloned())
    }

    async fn add_entry(&self, word: &str, description: &str) -> StoreResult<DictionaryEntry> {
        let mut entries = self.entries.write();
        if entries.contains_key(word) {
            return Err(StoreError::AlreadyExists(word.to_string()));
        }

        let entry = DictionaryEntry {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            word: word.to_string(),
            description: description.to_string(),
        };
        entries.insert(entry.word.clone(), entry.clone());
        Ok(entry)
    }

    async fn remove_word(&self, word: &str) -> StoreResult<bool> {
        Ok(self.entries.write().remove(word).is_some())
    }
}
