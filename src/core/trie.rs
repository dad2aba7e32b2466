//! Prefix tree over the code points of the dictionary entries.
//!
//! Nodes live in a single arena and refer to their children by [`NodeId`], so
//! building the tree costs one push per new code point and scanning never
//! chases boxed pointers. Each node keeps an [`FxHashMap`] from code point to
//! child handle; leaf nodes keep an empty map, which does not allocate.
//!
//! The tree is built once and is immutable afterwards. Any number of scans
//! may read it concurrently.

use rustc_hash::FxHashMap;

/// Handle to a node inside a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The empty-prefix node every walk starts from.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: FxHashMap<char, NodeId>,
    terminal: bool,
}

/// Immutable prefix tree keyed by Unicode code point.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    entries: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            entries: 0,
        }
    }
}

impl Trie {
    /// Build a trie from dictionary entries.
    ///
    /// Inserting the same entry twice is a no-op. The empty string marks the
    /// root as terminal, which the scanner never looks at.
    pub fn build<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for entry in entries {
            trie.insert(entry.as_ref());
        }
        trie
    }

    fn insert(&mut self, entry: &str) {
        let mut node = NodeId::ROOT;
        for ch in entry.chars() {
            node = match self.nodes[node.index()].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::default());
                    self.nodes[node.index()].children.insert(ch, child);
                    child
                }
            };
        }

        let terminal = &mut self.nodes[node.index()].terminal;
        if !*terminal {
            *terminal = true;
            self.entries += 1;
        }
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow the transition on `ch` out of `node`, if there is one.
    #[inline]
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&ch).copied()
    }

    /// Whether the path from the root to `node` spells a complete entry.
    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.index()].terminal
    }

    /// Exact membership test for a dictionary entry.
    pub fn contains(&self, entry: &str) -> bool {
        let mut node = NodeId::ROOT;
        for ch in entry.chars() {
            match self.child(node, ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.is_terminal(node)
    }

    /// Number of distinct entries inserted.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
