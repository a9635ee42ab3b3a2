//! Error taxonomy shared by every container in the crate.
//!
//! All fallible container operations report failures to their immediate
//! caller through [`Result`]; nothing is clamped, retried or defaulted
//! inside a container. Non-fallible lookups (`index_of`, `find_node`,
//! `middle`) use `Option` instead.

use thiserror::Error;

/// Errors produced by container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index-taking operation (`get`, `set`, `insert`, `remove`) was
    /// given an index outside its valid bound.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// A peek/pop/dequeue-style operation was invoked on an empty container.
    #[error("container is empty")]
    Empty,

    /// A bulk removal requested more elements than the container holds.
    #[error("insufficient elements: requested {requested}, available {available}")]
    Insufficient {
        /// How many elements the caller asked for.
        requested: usize,
        /// How many were actually present.
        available: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::OutOfRange { index: 5, len: 3 };
        assert_eq!(e.to_string(), "index 5 out of range for length 3");
        assert_eq!(Error::Empty.to_string(), "container is empty");
        let e = Error::Insufficient {
            requested: 4,
            available: 2,
        };
        assert_eq!(
            e.to_string(),
            "insufficient elements: requested 4, available 2"
        );
    }
}
