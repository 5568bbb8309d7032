//! Node implementation for the word trie.
//!
//! Each node owns its children outright, so a node is reachable from the root
//! by exactly one path and the structure can never contain cycles.

use std::collections::BTreeMap;

/// A node in the word trie.
///
/// Each node represents one character of a stored word. Terminal nodes mark
/// the end of a complete word and may carry a payload (the word identifier
/// from the dictionary store).
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child nodes, ordered by ascending code point
    pub children: BTreeMap<char, TrieNode>,

    /// Whether the path to this node is a stored word
    pub is_terminal: bool,

    /// Payload of the stored word, only ever set on terminal nodes
    pub payload: Option<u64>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// A node with no children that does not end a word carries no
    /// information and can be detached from its parent.
    pub fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted at this node, itself included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::subtree_size)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_prunable() {
        let node = TrieNode::new();
        assert!(node.is_prunable());
        assert_eq!(node.subtree_size(), 1);
    }

    #[test]
    fn test_terminal_or_parent_is_not_prunable() {
        let mut node = TrieNode::new();
        node.is_terminal = true;
        assert!(!node.is_prunable());

        let mut parent = TrieNode::new();
        parent.children.insert('a', TrieNode::new());
        assert!(!parent.is_prunable());
        assert_eq!(parent.subtree_size(), 2);
    }
}
