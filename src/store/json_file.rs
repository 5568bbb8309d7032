// Copyright (c) 2025 Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary store persisted as a JSON array of entries.
//!
//! Every mutation rewrites the whole file: the new content goes to a sibling
//! temporary file which is synced and then renamed over the original, so a
//! crash leaves either the old or the new dictionary on disk, never a torn
//! one.

use std::collections::{btree_map, BTreeMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{DictionaryEntry, DictionaryStore, StoreResult};
use crate::error::StoreError;

/// Dictionary store backed by a JSON file.
#[derive(Debug)]
pub struct JsonFileDictionaryStore {
    path: PathBuf,
    // Held across file writes, which serializes mutations
    entries: Mutex<BTreeMap<String, DictionaryEntry>>,
}

impl JsonFileDictionaryStore {
    /// Opens the dictionary stored at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the JSON dictionary file.
    /// * `create_if_missing` - Treat a missing file as an empty dictionary.
    ///   The file is created on the first mutation.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - If the file was loaded (or may be created).
    /// * `Err(StoreError)` - If the file is missing, unreadable, or not a
    ///   JSON array of entries.
    pub async fn open<P: AsRef<Path>>(path: P, create_if_missing: bool) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) => Self::decode(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if !create_if_missing {
                    return Err(StoreError::NotFound(path));
                }
                debug!(path = %path.display(), "Dictionary file missing, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        info!(path = %path.display(), entries = entries.len(), "Dictionary store opened");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows that cannot be read as entries are skipped, and of rows sharing
    /// a word only the first is kept. Rows with empty or over-long words are
    /// loaded as-is; the search engine rejects and reports them at build.
    fn decode(content: &str) -> StoreResult<BTreeMap<String, DictionaryEntry>> {
        let serde_json::Value::Array(rows) = serde_json::from_str(content)? else {
            return Err(StoreError::Corrupted(
                "expected a JSON array of entries".to_string(),
            ));
        };
        let mut entries = BTreeMap::new();

        for (index, row) in rows.into_iter().enumerate() {
            let entry: DictionaryEntry = match serde_json::from_value(row) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(index, error = %e, "Skipping unreadable dictionary row");
                    continue;
                }
            };

            match entries.entry(entry.word.clone()) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                btree_map::Entry::Occupied(existing) => warn!(
                    word = %entry.word,
                    kept_id = existing.get().id,
                    skipped_id = entry.id,
                    "Skipping duplicate dictionary row"
                ),
            }
        }

        Ok(entries)
    }

    async fn persist(&self, entries: &BTreeMap<String, DictionaryEntry>) -> StoreResult<()> {
        let list: Vec<&DictionaryEntry> = entries.values().collect();
        let content = serde_json::to_vec_pretty(&list)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let mut file = tokio::fs::File::create(&tmp_path).await?;
        file.write_all(&content).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp_path, &self.path).await?;
        debug!(path = %self.path.display(), entries = entries.len(), "Dictionary persisted");
        Ok(())
    }
}

#[async_trait]
impl DictionaryStore for JsonFileDictionaryStore {
    async fn list_words(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.lock().await.keys().cloned().collect())
    }

    async fn list_entries(&self) -> StoreResult<Vec<DictionaryEntry>> {
        Ok(self.entries.lock().await.values().cloned().collect())
    }

    async fn get_entry(&self, word: &str) -> StoreResult<Option<DictionaryEntry>> {
        Ok(self.entries.lock().await.get(word).cloned())
    }

    async fn add_entry(&self, word: &str, description: &str) -> StoreResult<DictionaryEntry> {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(word) {
            return Err(StoreError::AlreadyExists(word.to_string()));
        }

        let id = entries.values().map(|e| e.id).max().unwrap_or(0) + 1;
        let entry = DictionaryEntry {
            id,
            word: word.to_string(),
            description: description.to_string(),
        };
        entries.insert(entry.word.clone(), entry.clone());

        if let Err(e) = self.persist(&entries).await {
            entries.remove(word);
            return Err(e);
        }
        Ok(entry)
    }

    async fn remove_word(&self, word: &str) -> StoreResult<bool> {
        let mut entries = self.entries.lock().await;
        let Some(removed) = entries.remove(word) else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&entries).await {
            entries.insert(removed.word.clone(), removed);
            return Err(e);
        }
        Ok(true)
    }
}
