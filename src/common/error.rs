//! Error types for pagetree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagetree.
///
/// None of these are transient: retrying the same call on the same tree
/// always yields the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key is not present in the tree.
    ///
    /// Returned by `search` and `delete`. The tree is left untouched.
    #[error("key not found")]
    KeyNotFound,

    /// The tree holds no keys at all.
    #[error("tree is empty")]
    EmptyTree,

    /// The tree was configured with a minimum degree below 2.
    ///
    /// Checked once at construction time.
    #[error("invalid minimum degree {0}: must be >= 2")]
    InvalidDegree(usize),

    /// A structural invariant does not hold.
    ///
    /// This indicates a bug - a correctly maintained tree never reports it.
    #[error("B-tree invariant violated: {0}")]
    InvariantViolation(String),
}

impl Error {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", Error::KeyNotFound), "key not found");
        assert_eq!(format!("{}", Error::EmptyTree), "tree is empty");
        assert_eq!(
            format!("{}", Error::InvalidDegree(1)),
            "invalid minimum degree 1: must be >= 2"
        );
    }

    #[test]
    fn test_invariant_helper() {
        let err = Error::invariant("leaf depth mismatch");
        assert_eq!(
            err,
            Error::InvariantViolation("leaf depth mismatch".to_string())
        );
        assert!(format!("{}", err).contains("leaf depth mismatch"));
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
