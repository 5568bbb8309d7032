//! Word Trie Implementation
//!
//! This module provides the prefix tree that backs dictionary autocomplete.
//! Words are stored one character per edge; children are kept in ascending
//! code-point order so every traversal is deterministic.
//!
//! The trie itself is single-threaded. Concurrency control lives one layer
//! up, in [`crate::search::TrieSearchEngine`].
//!
//! # Example
//!
//! ```
//! use lexicon_lib::data_structures::word_trie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! for word in ["hello", "working", "sleeping", "eating", "eatingea"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! assert_eq!(trie.collect_with_prefix("eat", 10), vec!["eating", "eatingea"]);
//! assert!(trie.remove("eating"));
//! assert_eq!(trie.collect_with_prefix("eat", 10), vec!["eatingea"]);
//! ```
//!
//! # Complexity
//!
//! * `insert`, `contains`, `remove`: O(length of word)
//! * `collect_with_prefix`: O(length of prefix + nodes visited before `limit`
//!   words are found), at most O(length of prefix + limit * max word length)

mod error;
mod node;

#[cfg(test)]
mod tests;

pub use error::TrieError;
pub use node::TrieNode;

/// Result type for word trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// Default bound on stored word length, in characters.
///
/// Matches the width of the `word` column in the dictionary table.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 50;

/// Checks that `word` is non-empty and at most `max_word_length` characters.
///
/// # Returns
///
/// * `Ok(())` - If the word may be stored.
/// * `Err(TrieError)` - Otherwise.
pub fn check_word(word: &str, max_word_length: usize) -> TrieResult<()> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord);
    }

    let length = word.chars().count();
    if length > max_word_length {
        return Err(TrieError::WordTooLong {
            length,
            max_length: max_word_length,
        });
    }

    Ok(())
}

/// Outcome of a bounded prefix collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMatches {
    /// Matching words in ascending order
    pub words: Vec<String>,

    /// Nodes of the prefix subtree visited while collecting
    pub nodes_visited: usize,
}

/// Prefix tree over dictionary words.
#[derive(Debug)]
pub struct WordTrie {
    /// Root node, representing the empty string
    root: TrieNode,

    /// Number of terminal nodes reachable from the root
    len: usize,

    /// Longest accepted word, in characters
    max_word_length: usize,
}

impl WordTrie {
    /// Creates a new empty `WordTrie` accepting words up to
    /// [`DEFAULT_MAX_WORD_LENGTH`] characters.
    pub fn new() -> Self {
        Self::with_max_word_length(DEFAULT_MAX_WORD_LENGTH)
    }

    /// Creates a new empty `WordTrie` with the given word length bound.
    ///
    /// # Arguments
    ///
    /// * `max_word_length` - Longest accepted word, in characters.
    pub fn with_max_word_length(max_word_length: usize) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            max_word_length,
        }
    }

    /// Longest accepted word, in characters.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Checks that `word` may be stored without touching the trie.
    pub fn validate(&self, word: &str) -> TrieResult<()> {
        check_word(word, self.max_word_length)
    }

    /// Inserts a word into the trie.
    ///
    /// Inserting a word that is already present is a no-op.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the word was newly stored.
    /// * `Ok(false)` - If the word was already present.
    /// * `Err(TrieError)` - If the word is empty or too long.
    pub fn insert(&mut self, word: &str) -> TrieResult<bool> {
        let node = self.descend_or_create(word)?;
        let is_new = !node.is_terminal;
        node.is_terminal = true;

        if is_new {
            self.len += 1;
        }
        Ok(is_new)
    }

    /// Inserts a word and attaches `payload` to it, replacing any payload
    /// previously stored for the same word.
    ///
    /// # Returns
    ///
    /// Same as [`WordTrie::insert`].
    pub fn insert_with_payload(&mut self, word: &str, payload: u64) -> TrieResult<bool> {
        let node = self.descend_or_create(word)?;
        let is_new = !node.is_terminal;
        node.is_terminal = true;
        node.payload = Some(payload);

        if is_new {
            self.len += 1;
        }
        Ok(is_new)
    }

    fn descend_or_create(&mut self, word: &str) -> TrieResult<&mut TrieNode> {
        self.validate(word)?;

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        Ok(node)
    }

    fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// Checks if a word is stored in the trie.
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word).is_some_and(|node| node.is_terminal)
    }

    /// Returns the payload attached to a stored word, if any.
    pub fn payload(&self, word: &str) -> Option<u64> {
        self.descend(word)
            .filter(|node| node.is_terminal)
            .and_then(|node| node.payload)
    }

    /// Collects up to `limit` stored words starting with `prefix`, in
    /// ascending order.
    ///
    /// An empty prefix matches every word. A prefix with no path in the trie
    /// yields an empty result.
    pub fn collect_with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.collect_with_prefix_stats(prefix, limit).words
    }

    /// Same as [`WordTrie::collect_with_prefix`], also reporting how many
    /// nodes of the prefix subtree were visited.
    ///
    /// Traversal stops as soon as `limit` words are collected, so the visit
    /// count stays proportional to the result size rather than to the size of
    /// the subtree.
    pub fn collect_with_prefix_stats(&self, prefix: &str, limit: usize) -> PrefixMatches {
        let mut matches = PrefixMatches::default();
        if limit == 0 {
            return matches;
        }

        let Some(start) = self.descend(prefix) else {
            return matches;
        };

        let mut path = String::from(prefix);
        Self::collect_into(start, &mut path, limit, &mut matches);
        matches
    }

    /// Depth-first, children in code-point order. Recursion depth is bounded
    /// by `max_word_length`.
    fn collect_into(node: &TrieNode, path: &mut String, limit: usize, matches: &mut PrefixMatches) {
        matches.nodes_visited += 1;

        if node.is_terminal {
            matches.words.push(path.clone());
        }

        for (&c, child) in &node.children {
            if matches.words.len() >= limit {
                return;
            }
            path.push(c);
            Self::collect_into(child, path, limit, matches);
            path.pop();
        }
    }

    /// Removes a word from the trie, pruning nodes that no longer lead to
    /// any stored word.
    ///
    /// # Returns
    ///
    /// `true` if the word was stored and has been removed, `false` otherwise.
    pub fn remove(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let chars: Vec<char> = word.chars().collect();
        let removed = Self::remove_below(&mut self.root, &chars);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// The node passed in is never pruned by this call, only its children,
    /// which keeps the root in place.
    fn remove_below(node: &mut TrieNode, rest: &[char]) -> bool {
        let Some((c, tail)) = rest.split_first() else {
            if !node.is_terminal {
                return false;
            }
            node.is_terminal = false;
            node.payload = None;
            return true;
        };

        let Some(child) = node.children.get_mut(c) else {
            return false;
        };

        let removed = Self::remove_below(child, tail);
        if removed && child.is_prunable() {
            node.children.remove(c);
        }
        removed
    }

    /// Returns every stored word in ascending order.
    pub fn words(&self) -> Vec<String> {
        self.collect_with_prefix("", usize::MAX)
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the trie, the root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}
