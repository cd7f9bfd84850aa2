//! Size limits for resource paths
//!
//! This module defines configurable limits on path depth and segment size.
//! Parsing and construction never consult these limits; callers that forward
//! paths to storage or the network opt in with `ResourcePath::validate_limits`
//! or `DocumentKey::validate_limits`.
//!
//! ## Contract
//!
//! The default limits mirror the hosted service: 100 nested
//! collection/document levels, 1500-byte segments and 6 KiB path names.

use crate::model::ResourcePath;
use thiserror::Error;

/// Size limits for resource paths
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum number of segments (default: 200)
    pub max_path_depth: usize,

    /// Maximum segment length in bytes (default: 1500)
    pub max_segment_bytes: usize,

    /// Maximum canonical string length in bytes (default: 6 KiB)
    pub max_path_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_path_depth: 200,
            max_segment_bytes: 1500,
            max_path_bytes: 6 * 1024,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_path_depth: 4,
            max_segment_bytes: 16,
            max_path_bytes: 32,
        }
    }

    /// Validate a path against these limits
    ///
    /// Checks depth first, then each segment, then the total encoded length.
    pub fn validate_path(&self, path: &ResourcePath) -> Result<(), LimitError> {
        if path.len() > self.max_path_depth {
            return Err(LimitError::PathTooDeep {
                actual: path.len(),
                max: self.max_path_depth,
            });
        }

        for (index, segment) in path.iter().enumerate() {
            if segment.len() > self.max_segment_bytes {
                return Err(LimitError::SegmentTooLong {
                    index,
                    actual: segment.len(),
                    max: self.max_segment_bytes,
                });
            }
        }

        // Joined length without allocating the canonical string
        let encoded = path.iter().map(str::len).sum::<usize>() + path.len().saturating_sub(1);
        if encoded > self.max_path_bytes {
            return Err(LimitError::PathTooLong {
                actual: encoded,
                max: self.max_path_bytes,
            });
        }

        Ok(())
    }
}

/// Limit violation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Path has too many segments
    #[error("path too deep: {actual} segments exceeds maximum {max}")]
    PathTooDeep {
        /// Actual segment count
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A segment is too long
    #[error("segment {index} too long: {actual} bytes exceeds maximum {max}")]
    SegmentTooLong {
        /// Index of the segment
        index: usize,
        /// Actual length in bytes
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Canonical string is too long
    #[error("path too long: {actual} bytes exceeds maximum {max}")]
    PathTooLong {
        /// Actual length in bytes
        actual: usize,
        /// Maximum allowed
        max: usize,
    },
}

impl LimitError {
    /// Get the reason code for wire protocol and logs
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::PathTooDeep { .. } => "path_too_deep",
            LimitError::SegmentTooLong { .. } => "segment_too_long",
            LimitError::PathTooLong { .. } => "path_too_long",
        }
    }
}
