//! B-tree index implementation.
//!
//! # Components
//! - [`Node`] - One page worth of keys and child links
//! - [`BTree`] - The tree: search and insert (`tree.rs`), delete
//!   (`delete.rs`), in-order [`Iter`] (`iter.rs`), invariant checks
//!   (`validate.rs`)
//! - [`BTreeStats`] - Split / merge / rotation counters
//!
//! Insert and delete are both single-pass and top-down: each fixes the next
//! child before stepping into it, so no node ever needs to look back at its
//! parent.

mod delete;
mod iter;
mod node;
mod stats;
mod tree;
mod validate;

pub use iter::Iter;
pub use node::Node;
pub use stats::{BTreeStats, StatsSnapshot};
pub use tree::{BTree, SearchHit};
