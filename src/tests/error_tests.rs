//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::TrieError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, ErrorReporting, LexiconError,
    SearchError, StoreError, TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = LexiconError::Store(StoreError::Corrupted("test error".to_string()));
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let lexicon_error: LexiconError = StoreError::from(io_error).into();
    assert!(format!("{lexicon_error}").contains("file not found"));

    let search_error: SearchError = TrieError::WordTooLong {
        length: 60,
        max_length: 50,
    }
    .into();
    let lexicon_error: LexiconError = search_error.into();
    let message = format!("{lexicon_error}");
    assert!(message.starts_with("Search error"));
    assert!(message.contains("60 characters"));

    let lexicon_error: LexiconError = StoreError::AlreadyExists("hello".to_string()).into();
    assert!(format!("{lexicon_error}").contains("hello"));
}

/// Test that only malformed input counts as invalid input.
#[test]
fn test_search_error_classification() {
    assert!(SearchError::InvalidWord(TrieError::EmptyWord).is_invalid_input());
    assert!(SearchError::InvalidLimit(0).is_invalid_input());
    assert!(!SearchError::NotReady.is_invalid_input());
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that an error reporting instance dispatches to its reporter.
#[test]
fn test_error_reporting_dispatch() {
    let reporter = Arc::new(MockErrorReporter::default());
    let mut reporting = ErrorReporting::default();
    reporting.set_reporter(reporter.clone());

    reporting.report(ErrorContext::new(
        LexiconError::Search(SearchError::NotReady),
        "test_component",
    ));
    reporting.report(ErrorContext::new(
        LexiconError::Search(SearchError::InvalidLimit(0)),
        "test_component",
    ));

    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the global error reporter receives reports.
///
/// Other tests may report through the global reporter concurrently, so
/// only a lower bound is asserted.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    report_error(ErrorContext::new(
        LexiconError::Search(SearchError::NotReady),
        "test_component",
    ));

    assert!(reporter.reported_count() >= 1);
    set_error_reporter(Arc::new(TracingErrorReporter));
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = LexiconError::Search(SearchError::NotReady);
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
