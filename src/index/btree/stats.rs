//! Structural statistics for a B-tree.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing how much rebalancing work a tree has done.
///
/// All fields are atomic so that read-only operations (`search` takes
/// `&self`) can still count node visits without a lock.
///
/// # Memory Ordering
/// Every access uses `Ordering::Relaxed`: the counters are independent and
/// only need to be individually atomic.
///
/// # Example
/// ```
/// use pagetree::BTreeStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = BTreeStats::new();
/// stats.splits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.snapshot().splits, 1);
/// ```
#[derive(Debug)]
pub struct BTreeStats {
    /// Number of node splits performed on insert (root splits included).
    pub splits: AtomicU64,

    /// Number of sibling merges performed on delete.
    pub merges: AtomicU64,

    /// Number of key rotations through a parent on delete.
    pub rotations: AtomicU64,

    /// Number of times the tree gained a level.
    pub root_grows: AtomicU64,

    /// Number of times the tree lost a level.
    pub root_shrinks: AtomicU64,

    /// Number of nodes visited by `search`.
    pub node_visits: AtomicU64,
}

impl BTreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            splits: AtomicU64::new(0),
            merges: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            root_grows: AtomicU64::new(0),
            root_shrinks: AtomicU64::new(0),
            node_visits: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            splits: self.splits.load(Ordering::Relaxed),
            merges: self.merges.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            root_grows: self.root_grows.load(Ordering::Relaxed),
            root_shrinks: self.root_shrinks.load(Ordering::Relaxed),
            node_visits: self.node_visits.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.splits.store(0, Ordering::Relaxed);
        self.merges.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
        self.root_grows.store(0, Ordering::Relaxed);
        self.root_shrinks.store(0, Ordering::Relaxed);
        self.node_visits.store(0, Ordering::Relaxed);
    }
}

impl Default for BTreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of [`BTreeStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub splits: u64,
    pub merges: u64,
    pub rotations: u64,
    pub root_grows: u64,
    pub root_shrinks: u64,
    pub node_visits: u64,
}

impl StatsSnapshot {
    /// Total rebalancing steps taken by deletes.
    pub fn delete_fixups(&self) -> u64 {
        self.merges + self.rotations
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {}, merges: {}, rotations: {}, grows: {}, shrinks: {}, visits: {} }}",
            self.splits,
            self.merges,
            self.rotations,
            self.root_grows,
            self.root_shrinks,
            self.node_visits
        )
    }
}
