//! Resource path type
//!
//! A `ResourcePath` is an ordered sequence of segments naming a location in
//! the collection/document hierarchy, e.g. `rooms/firestore/messages/1`.
//!
//! ## Canonical String
//!
//! Segments are joined with a single `/`. No escaping is performed: segments
//! can never contain the delimiter, so the encoding is unambiguous and
//! `parse(p.canonical_string()) == p` holds for every non-empty path.
//!
//! ## Ordering
//!
//! Paths compare segment by segment using byte-wise string order. When one
//! path is a strict prefix of the other, the shorter one sorts first, which
//! makes the empty path the unique minimum.

use crate::limits::{LimitError, Limits};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Delimiter between segments in the canonical string
pub const DELIMITER: char = '/';

/// Error type for building or parsing a resource path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path string was empty
    #[error("path string cannot be empty")]
    EmptyString,

    /// A segment was empty (leading, trailing or doubled delimiter)
    #[error("empty segment at index {index} in path \"{input}\"")]
    EmptySegment {
        /// Index of the empty segment
        index: usize,
        /// The offending input, joined for display
        input: String,
    },

    /// A segment contained the path delimiter
    #[error("segment {index} (\"{segment}\") contains the path delimiter '/'")]
    SegmentContainsDelimiter {
        /// Index of the segment
        index: usize,
        /// The offending segment
        segment: String,
    },

    /// Path parsed fine but does not name a document
    #[error("path \"{path}\" has {segments} segments; a document path needs an even count")]
    NotADocumentPath {
        /// Canonical string of the path
        path: String,
        /// Segment count of the path
        segments: usize,
    },
}

impl PathError {
    /// Get the reason code for wire protocol and logs
    pub fn reason_code(&self) -> &'static str {
        match self {
            PathError::EmptyString => "empty_path",
            PathError::EmptySegment { .. } => "empty_segment",
            PathError::SegmentContainsDelimiter { .. } => "segment_contains_delimiter",
            PathError::NotADocumentPath { .. } => "not_a_document_path",
        }
    }
}

/// Hierarchical location made of delimiter-free segments
///
/// ## Invariants
///
/// - No segment is empty
/// - No segment contains [`DELIMITER`]
/// - Immutable: every "modifying" operation returns a new path
///
/// The default value is the empty path. `std::mem::take` moves a path out
/// and leaves the empty path behind.
///
/// # Examples
///
/// ```
/// use firestore_core::ResourcePath;
///
/// let path = ResourcePath::parse("rooms/firestore/messages/1").unwrap();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.last_segment(), Some("1"));
/// assert_eq!(path.canonical_string(), "rooms/firestore/messages/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create the empty path
    pub fn empty() -> Self {
        ResourcePath {
            segments: Vec::new(),
        }
    }

    /// Create a path from an ordered list of segments
    ///
    /// Segments are kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `PathError` if a segment is empty or contains the delimiter.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        Self::validate_segments(&segments)?;
        Ok(ResourcePath { segments })
    }

    /// Parse a path from its canonical string
    ///
    /// # Errors
    ///
    /// - `PathError::EmptyString` for `""`
    /// - `PathError::EmptySegment` for a leading, trailing or doubled `/`
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::EmptyString);
        }

        let mut segments = Vec::new();
        for (index, segment) in s.split(DELIMITER).enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment {
                    index,
                    input: s.to_string(),
                });
            }
            segments.push(segment.to_string());
        }

        Ok(ResourcePath { segments })
    }

    fn validate_segments(segments: &[String]) -> Result<(), PathError> {
        for (index, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment {
                    index,
                    input: segments.join("/"),
                });
            }
            if segment.contains(DELIMITER) {
                return Err(PathError::SegmentContainsDelimiter {
                    index,
                    segment: segment.clone(),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Iterate over the segments as string slices
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(String::as_str)
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the empty path
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the segment at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// First segment (None if empty)
    pub fn first_segment(&self) -> Option<&str> {
        self.get(0)
    }

    /// Last segment (None if empty)
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    // =========================================================================
    // Derived paths
    // =========================================================================

    /// Return a new path with `segment` appended
    ///
    /// # Errors
    ///
    /// Returns `PathError` if the segment is empty or contains the delimiter.
    pub fn append(&self, segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();
        let index = self.segments.len();
        if segment.is_empty() {
            return Err(PathError::EmptySegment {
                index,
                input: format!("{}/", self.canonical_string()),
            });
        }
        if segment.contains(DELIMITER) {
            return Err(PathError::SegmentContainsDelimiter { index, segment });
        }

        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(ResourcePath { segments })
    }

    /// Return a new path with all segments of `other` appended
    pub fn append_path(&self, other: &ResourcePath) -> Self {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        ResourcePath { segments }
    }

    /// Path without its first segment (None if empty)
    pub fn pop_first(&self) -> Option<Self> {
        self.pop_first_n(1)
    }

    /// Path without its first `n` segments (None if fewer than `n` exist)
    pub fn pop_first_n(&self, n: usize) -> Option<Self> {
        if n > self.segments.len() {
            return None;
        }
        Some(ResourcePath {
            segments: self.segments[n..].to_vec(),
        })
    }

    /// Path without its last segment (None if empty)
    pub fn pop_last(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(ResourcePath {
            segments: rest.to_vec(),
        })
    }

    /// Parent path; same as [`pop_last`](Self::pop_last)
    pub fn parent(&self) -> Option<Self> {
        self.pop_last()
    }

    // =========================================================================
    // Relationships
    // =========================================================================

    /// Check if this path is a prefix of `other` (equal paths included)
    pub fn is_prefix_of(&self, other: &ResourcePath) -> bool {
        self.len() <= other.len()
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|(a, b)| a == b)
    }

    /// Check if `other` is exactly one segment below this path
    pub fn is_immediate_parent_of(&self, other: &ResourcePath) -> bool {
        self.len() + 1 == other.len() && self.is_prefix_of(other)
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Join the segments with `/`
    ///
    /// The empty path encodes as `""`.
    pub fn canonical_string(&self) -> String {
        self.segments.join("/")
    }

    /// Check this path against configured limits
    pub fn validate_limits(&self, limits: &Limits) -> Result<(), LimitError> {
        limits.validate_path(self)
    }
}

// Segment-wise comparison; a strict prefix sorts before the longer path
impl Ord for ResourcePath {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.segments.iter().zip(other.segments.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.segments.len().cmp(&other.segments.len())
    }
}

impl PartialOrd for ResourcePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Index<usize> for ResourcePath {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.segments[index]
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}

impl FromStr for ResourcePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourcePath::parse(s)
    }
}

impl TryFrom<Vec<String>> for ResourcePath {
    type Error = PathError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        ResourcePath::from_segments(segments)
    }
}

impl From<ResourcePath> for Vec<String> {
    fn from(path: ResourcePath) -> Self {
        path.segments
    }
}

impl<'a> IntoIterator for &'a ResourcePath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
