//! Error types for the path/key model
//!
//! This module defines the crate-wide error type.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Two classes are kept apart:
//! - `InvalidArgument`: malformed input, usually from outside the process
//! - `InvariantViolation`: a caller handed a non-document path to a key
//!   constructor, which is a logic error

use crate::limits::LimitError;
use crate::model::PathError;
use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the path/key model
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed path string or segment
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] PathError),

    /// Document key built from a path with an odd segment count
    #[error("Invariant violation: document key path \"{path}\" has {segments} segments, expected an even count")]
    InvariantViolation {
        /// Canonical string of the rejected path
        path: String,
        /// Segment count of the rejected path
        segments: usize,
    },

    /// Path exceeds configured limits
    #[error("Limit exceeded: {0}")]
    LimitExceeded(#[from] LimitError),
}

impl Error {
    /// Check if this is a recoverable input error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is a logic error
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::InvariantViolation { .. })
    }

    /// Get the reason code for wire protocol and logs
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(e) => e.reason_code(),
            Error::InvariantViolation { .. } => "odd_segment_count",
            Error::LimitExceeded(e) => e.reason_code(),
        }
    }
}
