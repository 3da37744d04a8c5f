//! Deletion with proactive top-down rebalancing.
//!
//! The dual of insert's proactive split: before stepping into a child that
//! holds only `t - 1` keys, give it one more key so that whatever happens
//! below can never leave it under-full.
//!
//! ```text
//!   child state     action before descending
//!   -----------     ------------------------------------------------
//!   n >= t          none (SAFE)
//!   n == t - 1      1. rotate from left sibling, if it has >= t keys
//!                   2. rotate from right sibling, if it has >= t keys
//!                   3. merge with a sibling around their separator
//! ```

use crate::common::{Error, Result};
use crate::index::btree::node::Node;
use crate::index::btree::stats::BTreeStats;
use crate::index::btree::BTree;

/// Which end of a subtree to remove from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    First,
    Last,
}

impl<K: Ord> BTree<K> {
    /// Remove one occurrence of `key`.
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree has no keys
    /// - `Error::KeyNotFound` if `key` is absent
    ///
    /// Either way the tree is left exactly as it was: presence is checked
    /// with a read-only descent before any rebalancing starts.
    pub fn delete(&mut self, key: &K) -> Result<()> {
        self.search(key)?;

        let mut root = self.root.take().ok_or(Error::EmptyTree)?;
        let result = self.remove_from(&mut root, key);

        if root.is_empty() {
            if root.is_leaf {
                // Last key gone
                self.root = None;
            } else {
                // A merge pulled the root's only key down
                self.root = root.children.pop().map(Box::new);
                BTreeStats::bump(&self.stats.root_shrinks);
                tracing::trace!(target: "btree::merge", "root emptied, tree shrinks a level");
            }
        } else {
            self.root = Some(root);
        }

        result?;
        self.len -= 1;
        Ok(())
    }

    /// Remove `key` from the subtree at `node`.
    ///
    /// `node` is the root or holds at least `t` keys.
    fn remove_from(&self, node: &mut Node<K>, key: &K) -> Result<()> {
        let index = node.lower_bound(key);

        if node.keys.get(index) == Some(key) {
            if node.is_leaf {
                node.keys.remove(index);
                return Ok(());
            }
            return self.remove_from_internal(node, index, key);
        }

        if node.is_leaf {
            return Err(Error::KeyNotFound);
        }

        let index = self.ensure_child_can_lend(node, index)?;
        self.remove_from(&mut node.children[index], key)
    }

    /// Remove `keys[index]` of an internal node.
    fn remove_from_internal(&self, node: &mut Node<K>, index: usize, key: &K) -> Result<()> {
        let t = self.config.min_degree;

        if node.children[index].can_lend(t) {
            let predecessor = self.remove_edge(&mut node.children[index], Edge::Last)?;
            node.keys[index] = predecessor;
            Ok(())
        } else if node.children[index + 1].can_lend(t) {
            let successor = self.remove_edge(&mut node.children[index + 1], Edge::First)?;
            node.keys[index] = successor;
            Ok(())
        } else {
            // Both neighbours at t - 1: pull the key down between them
            node.merge_children(index)?;
            self.note_merge(index);
            self.remove_from(&mut node.children[index], key)
        }
    }

    /// Remove and return the smallest or largest key of the subtree at
    /// `node`, which holds at least `t` keys.
    fn remove_edge(&self, node: &mut Node<K>, edge: Edge) -> Result<K> {
        if node.is_leaf {
            let key = match edge {
                Edge::First if !node.keys.is_empty() => Some(node.keys.remove(0)),
                Edge::First => None,
                Edge::Last => node.keys.pop(),
            };
            return key.ok_or_else(|| Error::invariant("edge removal reached an empty leaf"));
        }

        let index = match edge {
            Edge::First => 0,
            Edge::Last => node.len(),
        };
        let index = self.ensure_child_can_lend(node, index)?;
        self.remove_edge(&mut node.children[index], edge)
    }

    /// Make sure `node.children[index]` holds at least `t` keys before the
    /// caller descends into it.
    ///
    /// Returns the index to descend into; it moves one to the left when the
    /// child was merged into its left sibling.
    fn ensure_child_can_lend(&self, node: &mut Node<K>, index: usize) -> Result<usize> {
        let t = self.config.min_degree;

        let child = node
            .children
            .get(index)
            .ok_or_else(|| Error::invariant(format!("internal node missing child {index}")))?;
        if child.can_lend(t) {
            return Ok(index);
        }

        let has_left = index > 0;
        let has_right = index < node.len();

        if has_left && node.children[index - 1].can_lend(t) {
            node.rotate_from_left(index)?;
            BTreeStats::bump(&self.stats.rotations);
            tracing::trace!(target: "btree::rotate", child = index, "borrowed key from left sibling");
            Ok(index)
        } else if has_right && node.children[index + 1].can_lend(t) {
            node.rotate_from_right(index)?;
            BTreeStats::bump(&self.stats.rotations);
            tracing::trace!(target: "btree::rotate", child = index, "borrowed key from right sibling");
            Ok(index)
        } else if has_right {
            node.merge_children(index)?;
            self.note_merge(index);
            Ok(index)
        } else if has_left {
            node.merge_children(index - 1)?;
            self.note_merge(index - 1);
            Ok(index - 1)
        } else {
            Err(Error::invariant("internal node with a single child"))
        }
    }

    fn note_merge(&self, index: usize) {
        BTreeStats::bump(&self.stats.merges);
        tracing::trace!(target: "btree::merge", left = index, right = index + 1, "merged siblings");
    }
}
