//! pagetree - an in-memory B-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           pagetree                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Index Layer (index/)                     │   │
//! │  │   BTree: search | insert (split) | delete (rotate/merge) │   │
//! │  │          in-order Iter | validate | BTreeStats           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Node model (index/btree/node)           │   │
//! │  │      keys: Vec<K> (<= 2t-1)   children: Vec<Node> (<= 2t) │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                   Common (common/)                       │   │
//! │  │            BTreeConfig + Error / Result                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence, page caching and concurrency control are left to the host:
//! the tree only maintains its in-memory structural invariants.
//!
//! # Modules
//! - [`common`] - Shared primitives (config, Error)
//! - [`index`] - Index structures (B-tree)
//!
//! # Logging
//! Structural events (splits, rotations, merges, height changes) are emitted
//! as `tracing` events under the `btree::*` targets. Install any subscriber
//! to see them.
//!
//! # Quick Start
//! ```
//! use pagetree::{BTree, Error};
//!
//! let mut tree = BTree::new(2)?;
//! for k in [1, 3, 7, 10, 11, 13, 14, 15] {
//!     tree.insert(k);
//! }
//!
//! assert_eq!(*tree.search(&10)?.key(), 10);
//! assert_eq!(tree.delete(&4), Err(Error::KeyNotFound));
//! tree.delete(&10)?;
//! tree.validate()?;
//! # Ok::<(), pagetree::Error>(())
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE};
pub use common::{BTreeConfig, Error, Result};

pub use index::btree::{BTree, BTreeStats, Iter, Node, SearchHit, StatsSnapshot};
