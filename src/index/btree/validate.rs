//! Structural invariant checks.
//!
//! Used by tests after every mutation, and available to callers that want to
//! assert a tree is healthy (e.g. after loading it from an external page
//! store).

use crate::common::{Error, Result};
use crate::index::btree::node::Node;
use crate::index::btree::BTree;

impl<K: Ord> BTree<K> {
    /// Check every B-tree invariant.
    ///
    /// - structure: internal nodes have `n + 1` children, leaves none
    /// - order: keys are non-decreasing, in-node and across separators
    /// - balance: all leaves at the same depth
    /// - occupancy: `t - 1 <= n <= 2t - 1` for non-root nodes,
    ///   `1 <= n <= 2t - 1` for the root
    /// - the cached key count matches the stored keys
    ///
    /// # Errors
    /// - `Error::InvariantViolation` describing the first broken rule
    pub fn validate(&self) -> Result<()> {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None if self.len == 0 => return Ok(()),
            None => {
                return Err(Error::invariant(format!(
                    "empty tree reports {} keys",
                    self.len
                )))
            }
        };

        let mut walk = Walk {
            min_degree: self.config.min_degree,
            leaf_depth: None,
            keys: 0,
        };
        walk.node(root, 0, None, None)?;

        if walk.keys != self.len {
            return Err(Error::invariant(format!(
                "tree reports {} keys but holds {}",
                self.len, walk.keys
            )));
        }
        Ok(())
    }
}

struct Walk {
    min_degree: usize,
    leaf_depth: Option<usize>,
    keys: usize,
}

impl Walk {
    fn node<K: Ord>(
        &mut self,
        node: &Node<K>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<()> {
        let t = self.min_degree;
        let n = node.len();

        let min_keys = if depth == 0 { 1 } else { t - 1 };
        if n < min_keys || n > 2 * t - 1 {
            return Err(Error::invariant(format!(
                "node at depth {depth} holds {n} keys, allowed {min_keys}..={}",
                2 * t - 1
            )));
        }

        if node.keys.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::invariant(format!(
                "keys out of order in node at depth {depth}"
            )));
        }
        let below_lower = lower.is_some_and(|lo| node.keys.first().is_some_and(|k| k < lo));
        let above_upper = upper.is_some_and(|hi| node.keys.last().is_some_and(|k| k > hi));
        if below_lower || above_upper {
            return Err(Error::invariant(format!(
                "node at depth {depth} escapes its separator range"
            )));
        }

        self.keys += n;

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(Error::invariant(format!("leaf at depth {depth} has children")));
            }
            return match self.leaf_depth {
                None => {
                    self.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(Error::invariant(format!(
                    "leaf at depth {depth}, expected {expected}"
                ))),
            };
        }

        if node.children.len() != n + 1 {
            return Err(Error::invariant(format!(
                "internal node at depth {depth} has {n} keys and {} children",
                node.children.len()
            )));
        }

        for (i, child) in node.children.iter().enumerate() {
            let lo = if i == 0 { lower } else { node.keys.get(i - 1) };
            let hi = node.keys.get(i).or(upper);
            self.node(child, depth + 1, lo, hi)?;
        }
        Ok(())
    }
}
