// Copyright (c) 2025 Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie-backed prefix-search engine.
//!
//! # Concurrency Safety
//!
//! The engine owns a single [`WordTrie`] behind a `parking_lot::RwLock`:
//!
//! * **Readers**: any number of `search`/`contains` calls run in parallel
//!   under the shared lock.
//! * **Writers**: `insert_word` and `remove_word` take the exclusive lock,
//!   so concurrent mutations are serialized and never lose updates.
//! * **Rebuild**: the replacement trie is built before the lock is taken;
//!   the exclusive section only swaps it in, and the old trie is dropped
//!   after the lock has been released.
//!
//! No operation performs I/O or suspends, so the lock is never held across
//! an `.await`.

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::{PrefixSearchBackend, SearchResult};
use crate::config::SearchConfig;
use crate::data_structures::word_trie::check_word;
use crate::data_structures::{PrefixMatches, TrieError, WordTrie};
use crate::error::SearchError;

/// Longest prefix of a rejected word kept in a [`BuildReport`].
const REJECTED_PREVIEW_CHARS: usize = 64;

/// Lifecycle of the engine. There is no terminal state.
#[derive(Debug)]
enum EngineState {
    /// No build has completed yet
    Initializing,

    /// Serving queries from the contained trie
    Ready(WordTrie),
}

/// A word skipped during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedWord {
    /// The word, truncated for very long input
    pub word: String,

    /// Why the word was skipped
    pub reason: TrieError,
}

/// Summary of a build or rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Distinct words stored
    pub inserted: usize,

    /// Words that were already stored earlier in the same input
    pub duplicates: usize,

    /// Malformed words that were skipped
    pub rejected: Vec<RejectedWord>,
}

impl BuildReport {
    /// Whether every input word was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Size snapshot of a search backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Whether the first build has completed
    pub ready: bool,

    /// Number of stored words
    pub words: usize,

    /// Number of trie nodes, the root included
    pub nodes: usize,
}

/// Prefix-search engine over an in-memory trie.
///
/// Constructed in the initializing state; [`TrieSearchEngine::build`] (or
/// [`TrieSearchEngine::from_words`]) makes it ready. Share it between request
/// handlers through an `Arc`.
#[derive(Debug)]
pub struct TrieSearchEngine {
    state: RwLock<EngineState>,
    config: SearchConfig,
}

impl TrieSearchEngine {
    /// Creates an engine that is not ready yet.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            state: RwLock::new(EngineState::Initializing),
            config,
        }
    }

    /// Creates an engine and builds it from `words`.
    pub fn from_words<I, S>(words: I, config: SearchConfig) -> (Self, BuildReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let engine = Self::new(config);
        let report = engine.build(words);
        (engine, report)
    }

    /// The configuration the engine was created with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Builds a fresh trie from `words` and publishes it, making the engine
    /// ready.
    ///
    /// A malformed word never fails the build; it is skipped and listed in
    /// the returned report.
    pub fn build<I, S>(&self, words: I) -> BuildReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (trie, report) = self.build_trie(words);
        let previous = std::mem::replace(&mut *self.state.write(), EngineState::Ready(trie));

        let was_ready = matches!(previous, EngineState::Ready(_));
        drop(previous);

        info!(
            inserted = report.inserted,
            duplicates = report.duplicates,
            rejected = report.rejected.len(),
            rebuild = was_ready,
            "Search engine built"
        );
        report
    }

    fn build_trie<I, S>(&self, words: I) -> (WordTrie, BuildReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = WordTrie::with_max_word_length(self.config.max_word_length);
        let mut report = BuildReport::default();

        for word in words {
            let word = word.as_ref();
            match trie.insert(word) {
                Ok(true) => report.inserted += 1,
                Ok(false) => report.duplicates += 1,
                Err(reason) => {
                    debug!(word = %word, error = %reason, "Skipping malformed word");
                    report.rejected.push(RejectedWord {
                        word: word.chars().take(REJECTED_PREVIEW_CHARS).collect(),
                        reason,
                    });
                }
            }
        }

        if !report.is_clean() {
            warn!(
                rejected = report.rejected.len(),
                words = ?report.rejected.iter().map(|r| r.word.as_str()).collect::<Vec<_>>(),
                "Skipped malformed words while building search engine"
            );
        }

        (trie, report)
    }

    fn resolve_limit(&self, limit: Option<usize>) -> SearchResult<usize> {
        match limit {
            None => Ok(self.config.default_limit),
            Some(0) => Err(SearchError::InvalidLimit(0)),
            Some(limit) => Ok(limit.min(self.config.max_limit)),
        }
    }

    fn with_trie<T>(&self, f: impl FnOnce(&WordTrie) -> T) -> SearchResult<T> {
        match &*self.state.read() {
            EngineState::Ready(trie) => Ok(f(trie)),
            EngineState::Initializing => Err(SearchError::NotReady),
        }
    }

    fn with_trie_mut<T>(&self, f: impl FnOnce(&mut WordTrie) -> T) -> SearchResult<T> {
        match &mut *self.state.write() {
            EngineState::Ready(trie) => Ok(f(trie)),
            EngineState::Initializing => Err(SearchError::NotReady),
        }
    }
}

impl PrefixSearchBackend for TrieSearchEngine {
    fn backend_name(&self) -> &'static str {
        "trie"
    }

    fn is_ready(&self) -> bool {
        matches!(&*self.state.read(), EngineState::Ready(_))
    }

    fn validate_word(&self, word: &str) -> SearchResult<()> {
        check_word(word, self.config.max_word_length).map_err(SearchError::from)
    }

    fn search(&self, prefix: &str, limit: Option<usize>) -> SearchResult<Vec<String>> {
        self.search_stats(prefix, limit).map(|matches| matches.words)
    }

    fn search_stats(&self, prefix: &str, limit: Option<usize>) -> SearchResult<PrefixMatches> {
        let limit = self.resolve_limit(limit)?;
        let matches = self.with_trie(|trie| trie.collect_with_prefix_stats(prefix, limit))?;

        debug!(
            prefix = %prefix,
            limit,
            results = matches.words.len(),
            nodes_visited = matches.nodes_visited,
            "Prefix search"
        );
        Ok(matches)
    }

    fn contains(&self, word: &str) -> SearchResult<bool> {
        self.with_trie(|trie| trie.contains(word))
    }

    fn insert_word(&self, word: &str) -> SearchResult<bool> {
        let inserted = self.with_trie_mut(|trie| trie.insert(word))??;
        debug!(word = %word, inserted, "Inserted word");
        Ok(inserted)
    }

    fn remove_word(&self, word: &str) -> SearchResult<bool> {
        let removed = self.with_trie_mut(|trie| trie.remove(word))?;
        debug!(word = %word, removed, "Removed word");
        Ok(removed)
    }

    fn rebuild(&self, words: &[String]) -> BuildReport {
        self.build(words)
    }

    fn stats(&self) -> EngineStats {
        match &*self.state.read() {
            EngineState::Ready(trie) => EngineStats {
                ready: true,
                words: trie.len(),
                nodes: trie.node_count(),
            },
            EngineState::Initializing => EngineStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_engine(words: &[&str]) -> TrieSearchEngine {
        let (engine, report) = TrieSearchEngine::from_words(words, SearchConfig::default());
        assert!(report.is_clean());
        engine
    }

    #[test]
    fn test_operations_fail_before_first_build() {
        let engine = TrieSearchEngine::new(SearchConfig::default());

        assert!(!engine.is_ready());
        assert_eq!(engine.search("a", None), Err(SearchError::NotReady));
        assert_eq!(engine.insert_word("apple"), Err(SearchError::NotReady));
        assert_eq!(engine.remove_word("apple"), Err(SearchError::NotReady));
        assert_eq!(engine.contains("apple"), Err(SearchError::NotReady));
        assert_eq!(engine.stats(), EngineStats::default());

        engine.build(["apple"]);
        assert!(engine.is_ready());
        assert_eq!(engine.search("a", None).unwrap(), vec!["apple"]);
    }

    #[test]
    fn test_sample_dictionary_scenario() {
        let engine = ready_engine(&["hello", "working", "sleeping", "eating", "eatingea"]);

        assert_eq!(engine.search("eat", Some(10)).unwrap(), vec!["eating", "eatingea"]);
        assert_eq!(engine.search("", Some(2)).unwrap(), vec!["eating", "eatingea"]);

        assert!(engine.remove_word("eating").unwrap());
        assert!(!engine.contains("eating").unwrap());
        assert_eq!(engine.search("eat", Some(10)).unwrap(), vec!["eatingea"]);
    }

    #[test]
    fn test_limit_defaults_and_clamping() {
        let config = SearchConfig {
            default_limit: 3,
            max_limit: 5,
            ..Default::default()
        };
        let words: Vec<String> = (0..20).map(|i| format!("word{i:02}")).collect();
        let (engine, _) = TrieSearchEngine::from_words(&words, config);

        assert_eq!(engine.search("word", None).unwrap().len(), 3);
        assert_eq!(engine.search("word", Some(4)).unwrap().len(), 4);
        assert_eq!(engine.search("word", Some(500)).unwrap().len(), 5);
        assert_eq!(engine.search("word", Some(0)), Err(SearchError::InvalidLimit(0)));
    }

    #[test]
    fn test_build_collects_rejected_words() {
        let config = SearchConfig {
            max_word_length: 8,
            ..Default::default()
        };
        let long_word = "x".repeat(200);
        let words = vec!["apple", "", "apple", long_word.as_str(), "banana"];
        let (engine, report) = TrieSearchEngine::from_words(words, config);

        assert!(engine.is_ready());
        assert_eq!(report.inserted, 2);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].reason, TrieError::EmptyWord);
        assert_eq!(report.rejected[1].word.chars().count(), REJECTED_PREVIEW_CHARS);
        assert_eq!(
            report.rejected[1].reason,
            TrieError::WordTooLong {
                length: 200,
                max_length: 8
            }
        );
        assert_eq!(engine.stats().words, 2);
    }

    #[test]
    fn test_insert_word_validates_input() {
        let engine = ready_engine(&[]);

        let err = engine.insert_word("").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err, SearchError::InvalidWord(TrieError::EmptyWord));
        assert!(engine.validate_word("fine").is_ok());
        assert!(engine.validate_word(&"y".repeat(51)).is_err());
    }

    #[test]
    fn test_insert_word_is_idempotent() {
        let engine = ready_engine(&["hello"]);

        assert!(engine.insert_word("help").unwrap());
        let stats = engine.stats();
        assert!(!engine.insert_word("help").unwrap());
        assert_eq!(engine.stats(), stats);
    }

    #[test]
    fn test_rebuild_replaces_word_set() {
        let engine = ready_engine(&["alpha", "beta"]);

        let report = engine.rebuild(&["gamma".to_string(), "delta".to_string()]);
        assert_eq!(report.inserted, 2);
        assert!(!engine.contains("alpha").unwrap());
        assert_eq!(engine.search("", None).unwrap(), vec!["delta", "gamma"]);
    }

    #[test]
    fn test_search_stats_reports_visits() {
        let engine = ready_engine(&["car", "cart", "carton"]);

        let matches = engine.search_stats("car", Some(1)).unwrap();
        assert_eq!(matches.words, vec!["car"]);
        assert_eq!(matches.nodes_visited, 1);
    }
}
