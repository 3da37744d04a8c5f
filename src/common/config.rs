//! Configuration for pagetree.

use crate::common::{Error, Result};

/// Smallest legal minimum degree.
///
/// With `t = 2` every node holds 1 to 3 keys (a 2-3-4 tree).
pub const MIN_DEGREE: usize = 2;

/// Minimum degree used by [`BTreeConfig::default`].
///
/// A node then holds up to 63 keys, which keeps a node's keys within a
/// handful of cache lines for small key types.
pub const DEFAULT_MIN_DEGREE: usize = 32;

/// Shape parameters of a B-tree, fixed for the lifetime of the tree.
///
/// # Example
/// ```
/// use pagetree::BTreeConfig;
///
/// let config = BTreeConfig::new(3);
/// assert_eq!(config.max_keys(), 5);
/// assert_eq!(config.max_children(), 6);
/// assert_eq!(config.min_keys(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BTreeConfig {
    /// The minimum degree `t`.
    pub min_degree: usize,
}

impl BTreeConfig {
    /// Create a config with the given minimum degree.
    ///
    /// The value is not checked here; see [`BTreeConfig::validate`].
    pub fn new(min_degree: usize) -> Self {
        Self { min_degree }
    }

    /// Check that the degree is usable.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `min_degree < 2`
    pub fn validate(&self) -> Result<()> {
        if self.min_degree < MIN_DEGREE {
            return Err(Error::InvalidDegree(self.min_degree));
        }
        Ok(())
    }

    /// Maximum keys in any node (`2t - 1`).
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.min_degree - 1
    }

    /// Maximum children of an internal node (`2t`).
    #[inline]
    pub fn max_children(&self) -> usize {
        2 * self.min_degree
    }

    /// Minimum keys in any non-root node (`t - 1`).
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.min_degree - 1
    }
}

impl Default for BTreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DEGREE)
    }
}
