//! Lexicon Dictionary Service Library
//!
//! This library contains the core of the Lexicon dictionary service: the
//! concurrent prefix-search engine that serves autocomplete, the dictionary
//! store it is derived from, and the service that keeps the two in step.
//!
//! # Architecture
//!
//! - [`data_structures::WordTrie`]: single-threaded prefix tree with bounded,
//!   ordered prefix collection
//! - [`search::TrieSearchEngine`]: the trie behind a reader-writer lock, with
//!   an explicit initializing/ready lifecycle
//! - [`store::DictionaryStore`]: the persisted, authoritative word set
//! - [`service::DictionaryService`]: persist first, then update the engine
//!
//! Components are constructed explicitly and shared through `Arc`; there is
//! no global engine.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod search;
pub mod service;
pub mod store;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lexicon service.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
