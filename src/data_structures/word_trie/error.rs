//! Error types for the word trie.

/// Errors raised when a word cannot be stored in the trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// An empty word was provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// The word is longer than the configured bound.
    #[error("Word of {length} characters exceeds maximum length of {max_length}")]
    WordTooLong {
        /// Length of the rejected word, in characters.
        length: usize,
        /// The maximum allowed length.
        max_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrieError::EmptyWord;
        assert_eq!(err.to_string(), "Empty word not allowed");

        let err = TrieError::WordTooLong {
            length: 72,
            max_length: 50,
        };
        assert_eq!(
            err.to_string(),
            "Word of 72 characters exceeds maximum length of 50"
        );
    }
}
