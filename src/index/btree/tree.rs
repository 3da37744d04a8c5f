//! The [`BTree`] type: construction, search and insertion.
//!
//! Deletion lives in `delete.rs`, traversal in `iter.rs` and the invariant
//! checker in `validate.rs`; all of them are `impl` blocks on the same type.

use std::collections::VecDeque;
use std::fmt;

use crate::common::{BTreeConfig, Error, Result};
use crate::index::btree::node::Node;
use crate::index::btree::stats::{BTreeStats, StatsSnapshot};

/// An in-memory B-tree of minimum degree `t`.
///
/// # Structure
/// ```text
///                     ┌──────────┐
///                     │   [15]   │            root: 1..=2t-1 keys
///                     └──────────┘
///              ┌───────────┴───────────┐
///         ┌────────┐              ┌────────┐
///         │  [10]  │              │  [20]  │   internal: t-1..=2t-1 keys
///         └────────┘              └────────┘
///        ┌────┴────┐             ┌────┴────┐
///     [3, 5]     [13]         [18]       [24]  all leaves at one depth
/// ```
///
/// Keys may repeat; every inserted key is kept.
///
/// # Example
/// ```
/// use pagetree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for k in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(k);
/// }
/// assert!(tree.contains(&6));
/// assert!(tree.delete(&6).is_ok());
/// assert!(!tree.contains(&6));
/// assert_eq!(tree.traverse(), vec![&5, &7, &10, &12, &17, &20, &30]);
/// ```
#[derive(Debug)]
pub struct BTree<K> {
    pub(crate) root: Option<Box<Node<K>>>,
    pub(crate) config: BTreeConfig,
    pub(crate) len: usize,
    pub(crate) stats: BTreeStats,
}

/// Location of a key found by [`BTree::search`].
///
/// Borrows the tree, so the position stays valid for as long as it is held.
#[derive(Debug)]
pub struct SearchHit<'a, K> {
    node: &'a Node<K>,
    index: usize,
}

impl<'a, K> SearchHit<'a, K> {
    /// The node holding the key.
    pub fn node(&self) -> &'a Node<K> {
        self.node
    }

    /// Position of the key inside [`SearchHit::node`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// The stored key.
    pub fn key(&self) -> &'a K {
        &self.node.keys[self.index]
    }
}

impl<K: Ord> BTree<K> {
    /// Create an empty tree with minimum degree `min_degree`.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `min_degree < 2`
    pub fn new(min_degree: usize) -> Result<Self> {
        Self::with_config(BTreeConfig::new(min_degree))
    }

    /// Create an empty tree from a validated config.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `config.min_degree < 2`
    pub fn with_config(config: BTreeConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            target: "btree::tree",
            min_degree = config.min_degree,
            "created B-tree"
        );
        Ok(Self {
            root: None,
            config,
            len: 0,
            stats: BTreeStats::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The minimum degree `t`.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.config.min_degree
    }

    #[inline]
    pub fn config(&self) -> BTreeConfig {
        self.config
    }

    /// Total number of keys, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of levels; 0 for an empty tree, 1 for a lone leaf root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            height += 1;
            node = n.children.first();
        }
        height
    }

    /// Smallest key (leftmost key of the leftmost leaf).
    pub fn first(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(child) = node.children.first() {
            node = child;
        }
        node.keys.first()
    }

    /// Largest key (rightmost key of the rightmost leaf).
    pub fn last(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(child) = node.children.last() {
            node = child;
        }
        node.keys.last()
    }

    /// Drop every node. Statistics are kept.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Copy of the structural counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Keys of every node, level by level, left to right.
    ///
    /// Level 0 is the root. Empty for an empty tree.
    pub fn levels(&self) -> Vec<Vec<&[K]>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<(&Node<K>, usize)> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back((root, 0));
        }
        while let Some((node, depth)) = queue.pop_front() {
            if levels.len() == depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node.keys());
            for child in &node.children {
                queue.push_back((child, depth + 1));
            }
        }
        levels
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Find a key.
    ///
    /// Descends from the root, binary-searching each node for the first key
    /// `>= key`. Never modifies the tree (only the visit counter moves).
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree has no keys
    /// - `Error::KeyNotFound` if `key` is absent
    pub fn search(&self, key: &K) -> Result<SearchHit<'_, K>> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        loop {
            BTreeStats::bump(&self.stats.node_visits);
            let index = node.lower_bound(key);
            if node.keys.get(index) == Some(key) {
                return Ok(SearchHit { node, index });
            }
            if node.is_leaf {
                return Err(Error::KeyNotFound);
            }
            node = node
                .children
                .get(index)
                .ok_or_else(|| Error::invariant(format!("internal node missing child {index}")))?;
        }
    }

    /// Whether at least one copy of `key` is stored.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Insert a key. Always succeeds; an equal key already present is kept
    /// and the new one is stored alongside it.
    ///
    /// Full nodes met on the way down are split before being entered, so the
    /// leaf reached at the bottom always has room and nothing propagates
    /// back up. The tree grows a level only when the root itself is full.
    pub fn insert(&mut self, key: K) {
        let t = self.config.min_degree;

        let mut root = match self.root.take() {
            Some(root) => root,
            None => Box::new(Node::new(true, t)),
        };

        if root.is_full(t) {
            // Hang the old root under a fresh one and split it there
            let mut new_root = Box::new(Node::new(false, t));
            new_root.children.push(*root);
            new_root.split_child(0, t);
            BTreeStats::bump(&self.stats.splits);
            BTreeStats::bump(&self.stats.root_grows);
            tracing::trace!(target: "btree::split", "split full root, tree grows a level");
            root = new_root;
        }

        self.insert_non_full(&mut root, key);
        self.root = Some(root);
        self.len += 1;
    }

    /// Insert into the subtree at `node`, which is known not to be full.
    fn insert_non_full(&self, node: &mut Node<K>, key: K) {
        let t = self.config.min_degree;

        if node.is_leaf {
            node.insert_into_leaf(key);
            return;
        }

        let mut index = node.lower_bound(&key);
        if node.children[index].is_full(t) {
            node.split_child(index, t);
            BTreeStats::bump(&self.stats.splits);
            tracing::trace!(target: "btree::split", child = index, "split full child");

            // The promoted median now sits at `index`
            if node.keys[index] < key {
                index += 1;
            }
        }
        self.insert_non_full(&mut node.children[index], key);
    }
}

impl<K: Ord> Default for BTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            config: BTreeConfig::default(),
            len: 0,
            stats: BTreeStats::new(),
        }
    }
}

impl<K: Ord> FromIterator<K> for BTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = BTree::default();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// One line per level, each node printed as `[k0, k1, ...]`.
///
/// ```text
/// [15]
/// [10] [20]
/// [3, 5] [13] [18] [24]
/// ```
impl<K: Ord + fmt::Display> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = self.levels();
        if levels.is_empty() {
            return write!(f, "(empty)");
        }
        for (depth, level) in levels.iter().enumerate() {
            if depth > 0 {
                writeln!(f)?;
            }
            for (i, keys) in level.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "[")?;
                for (j, key) in keys.iter().enumerate() {
                    if j > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", key)?;
                }
                write!(f, "]")?;
            }
        }
        Ok(())
    }
}
