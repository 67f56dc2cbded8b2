//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Every fallible operation validates its arguments before touching the
/// backing buffer, so an `Err` always leaves the array exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A constructor or policy parameter was rejected
    /// (negative capacity, missing copy source, bad growth factor).
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// An index fell outside the legal range for the operation.
    ///
    /// `get` and `remove_at` accept `0..len`; `insert_at` accepts `0..=len`.
    IndexOutOfBounds {
        /// The offending index as supplied by the caller.
        index: isize,
        /// Number of occupied slots at the time of the call.
        len: usize,
    },
    /// A removal was attempted on an array with no occupied slots.
    EmptyContainer,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::EmptyContainer => write!(f, "array is empty"),
        }
    }
}

impl Error for ArrayError {}
