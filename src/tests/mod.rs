//! Test modules for the Lexicon dictionary service.
//!
//! Component unit tests live next to their code; this module holds the
//! cross-cutting ones:
//! - Configuration loading and layering
//! - Error types and reporting
//! - Concurrent access to the search engine
//! - Shared fixtures and proptest strategies

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, generated_words, word_strategy, TestFixture};
