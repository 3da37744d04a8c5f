//! Common types and utilities shared across pagetree.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (minimum degree and derived node bounds)
//! - Error types

pub mod config;
pub mod error;

pub use config::BTreeConfig;
pub use error::{Error, Result};
