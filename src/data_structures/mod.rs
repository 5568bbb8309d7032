//! Data structures for the Lexicon dictionary service.
//!
//! These are plain, single-threaded structures. Synchronization is the job
//! of the components that share them (see [`crate::search`]).

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{PrefixMatches, TrieError, TrieResult, WordTrie};
