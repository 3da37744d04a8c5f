//! Index structures.
//!
//! - [`btree`] - In-memory B-tree with proactive split/merge rebalancing

pub mod btree;
