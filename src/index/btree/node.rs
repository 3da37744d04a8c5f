//! B-tree node: one "page" worth of keys and child links.
//!
//! # Layout
//! ```text
//!   keys:      k0    k1    k2   ...  k(n-1)
//!   children: c0 c1    c2    c3 ... c(n-1) cn      (internal nodes only)
//! ```
//! Every key in `c[i]` is `<= k[i]`, and every key in `c[i+1]` is `>= k[i]`.
//!
//! The vector lengths are the only counters. A node never holds more than
//! `2t - 1` keys; the split/merge/rotate primitives below are written for a
//! parent whose children are known to be in the right state, and the tree
//! code is responsible for calling them only then.

use crate::common::{Error, Result};

/// A single B-tree node.
///
/// Nodes are owned by their parent (or by the tree, for the root); there are
/// no parent or sibling pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) keys: Vec<K>,
    pub(crate) children: Vec<Node<K>>,
    pub(crate) is_leaf: bool,
}

impl<K: Ord> Node<K> {
    /// Create an empty node with room for a full page of keys.
    pub(crate) fn new(is_leaf: bool, min_degree: usize) -> Self {
        let children = if is_leaf {
            Vec::new()
        } else {
            Vec::with_capacity(2 * min_degree)
        };
        Self {
            keys: Vec::with_capacity(2 * min_degree - 1),
            children,
            is_leaf,
        }
    }

    /// Number of keys stored in this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the node has no keys. Only a freshly emptied root can be.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// The node's keys, in non-decreasing order.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The node's children; empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    /// Key at `index`, if any.
    pub fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Child at `index`, if any.
    pub fn child(&self, index: usize) -> Option<&Node<K>> {
        self.children.get(index)
    }

    /// Index of the first key that is `>= key`, or `len()` if there is none.
    ///
    /// This is both the position of `key` when present and the child to
    /// descend into when it is not.
    pub fn lower_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Index of the first key that is `> key`.
    pub(crate) fn upper_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }

    /// Whether the node holds `2t - 1` keys and must be split before use.
    #[inline]
    pub(crate) fn is_full(&self, min_degree: usize) -> bool {
        self.keys.len() == 2 * min_degree - 1
    }

    /// Whether the node can give up a key and stay at or above `t - 1`.
    #[inline]
    pub(crate) fn can_lend(&self, min_degree: usize) -> bool {
        self.keys.len() >= min_degree
    }

    /// Insert into a leaf, after any keys equal to `key`.
    pub(crate) fn insert_into_leaf(&mut self, key: K) {
        debug_assert!(self.is_leaf);
        let pos = self.upper_bound(&key);
        self.keys.insert(pos, key);
    }

    /// Split the full child at `index` around its median.
    ///
    /// ```text
    /// before:  parent [.. p ..]          child [k0 .. k(t-2) | k(t-1) | kt .. k(2t-2)]
    /// after:   parent [.. k(t-1) p ..]   child [k0 .. k(t-2)]   sibling [kt .. k(2t-2)]
    /// ```
    /// The child keeps children `[0, t-1]`, the new right sibling takes
    /// `[t, 2t-1]` and lands at `index + 1`.
    pub(crate) fn split_child(&mut self, index: usize, min_degree: usize) {
        let t = min_degree;
        let child = &mut self.children[index];
        debug_assert!(child.is_full(t), "split of a non-full child");

        let mut sibling = Node::new(child.is_leaf, t);
        sibling.keys.extend(child.keys.drain(t..));
        if !child.is_leaf {
            sibling.children.extend(child.children.drain(t..));
        }
        let median = child.keys.remove(t - 1);

        self.keys.insert(index, median);
        self.children.insert(index + 1, sibling);
    }

    /// Move one key from `children[index - 1]` through the parent into
    /// `children[index]` (the child gains a new first key).
    pub(crate) fn rotate_from_left(&mut self, index: usize) -> Result<()> {
        if index == 0 || index >= self.children.len() {
            return Err(Error::invariant(format!("no left sibling for child {index}")));
        }
        let (before, after) = self.children.split_at_mut(index);
        let left = &mut before[index - 1];
        let child = &mut after[0];

        let lent = left
            .keys
            .pop()
            .ok_or_else(|| Error::invariant("left sibling has no key to lend"))?;
        let separator = std::mem::replace(&mut self.keys[index - 1], lent);
        child.keys.insert(0, separator);

        if !left.is_leaf {
            let moved = left
                .children
                .pop()
                .ok_or_else(|| Error::invariant("left sibling has no child to lend"))?;
            child.children.insert(0, moved);
        }
        Ok(())
    }

    /// Move one key from `children[index + 1]` through the parent into
    /// `children[index]` (the child gains a new last key).
    pub(crate) fn rotate_from_right(&mut self, index: usize) -> Result<()> {
        if index + 1 >= self.children.len() {
            return Err(Error::invariant(format!("no right sibling for child {index}")));
        }
        let (before, after) = self.children.split_at_mut(index + 1);
        let child = &mut before[index];
        let right = &mut after[0];

        if right.keys.is_empty() {
            return Err(Error::invariant("right sibling has no key to lend"));
        }
        let lent = right.keys.remove(0);
        let separator = std::mem::replace(&mut self.keys[index], lent);
        child.keys.push(separator);

        if !right.is_leaf {
            if right.children.is_empty() {
                return Err(Error::invariant("right sibling has no child to lend"));
            }
            child.children.push(right.children.remove(0));
        }
        Ok(())
    }

    /// Fold `keys[index]` and `children[index + 1]` into `children[index]`.
    ///
    /// The parent loses one key and one child; the right node is dropped.
    pub(crate) fn merge_children(&mut self, index: usize) -> Result<()> {
        if index + 1 >= self.children.len() {
            return Err(Error::invariant(format!("no right sibling to merge into child {index}")));
        }
        let right = self.children.remove(index + 1);
        let separator = self.keys.remove(index);

        let child = &mut self.children[index];
        child.keys.push(separator);
        child.keys.extend(right.keys);
        child.children.extend(right.children);
        Ok(())
    }
}
