//! Error type for the raising operations.
//!
//! Only the array insert/delete pair raises; every other operation reports
//! failure through a boolean or a not-found sentinel. See the individual
//! operation docs for which policy applies.

use thiserror::Error;

/// Errors raised by the index-validated array operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpsError {
    /// The provided index was outside the valid range for the sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Index the caller asked for.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

/// Result type alias for the raising operations.
pub type Result<T> = std::result::Result<T, OpsError>;
