//! In-order traversal.

use std::iter::FusedIterator;

use crate::index::btree::node::Node;
use crate::index::btree::BTree;

#[derive(Debug)]
struct Cursor<'a, K> {
    node: &'a Node<K>,
    /// Next key to emit from `node`.
    pos: usize,
}

/// Ascending iterator over the keys of a [`BTree`].
///
/// Walks `child[0], key[0], child[1], key[1], ..., child[n]` with an explicit
/// stack of ancestors, so it needs no parent pointers and no recursion.
/// Equal keys are all yielded.
#[derive(Debug)]
pub struct Iter<'a, K> {
    /// Ancestors of the current node, each positioned at the key to emit
    /// once the subtree below it is exhausted.
    stack: Vec<Cursor<'a, K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        if let Some(root) = root {
            iter.descend_leftmost(root);
        }
        iter
    }

    /// Push `node` and its leftmost spine down to a leaf.
    fn descend_leftmost(&mut self, mut node: &'a Node<K>) {
        loop {
            self.stack.push(Cursor { node, pos: 0 });
            match node.children.first() {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cursor = self.stack.last_mut()?;
            let node = cursor.node;
            let pos = cursor.pos;

            if pos < node.keys.len() {
                cursor.pos += 1;
                if let Some(child) = node.children.get(pos + 1) {
                    self.descend_leftmost(child);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(&node.keys[pos]);
            }

            // Node exhausted: resume at the parent
            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<K: Ord> BTree<K> {
    /// Iterate over all keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// All keys in ascending order, duplicates included.
    pub fn traverse(&self) -> Vec<&K> {
        self.iter().collect()
    }
}

impl<'a, K: Ord> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
