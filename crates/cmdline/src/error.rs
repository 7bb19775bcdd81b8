//! Error types for command line splitting.

use thiserror::Error;

/// Errors returned by the splitting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The raw string holds a NUL, which no OS-delivered command line can contain.
    #[error("command line contains an embedded NUL at byte offset {offset}")]
    EmbeddedNul { offset: usize },

    /// A tail was requested from a negative argument index.
    #[error("argument index must not be negative (got {index})")]
    NegativeIndex { index: i64 },
}
