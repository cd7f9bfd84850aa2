//! Document key type
//!
//! A `DocumentKey` wraps a [`ResourcePath`] that is guaranteed to name a
//! document: its segment count is even, alternating collection and document
//! levels (`rooms/firestore/messages/1`).
//!
//! ## Construction
//!
//! | Entry point | Odd segment count | Malformed input |
//! |-------------|-------------------|-----------------|
//! | `new`, `from_segments` | `Error::InvariantViolation` | `Error::InvalidArgument` |
//! | `from_path_string` | `Error::InvalidArgument` | `Error::InvalidArgument` |
//! | `new_unchecked` | panic | n/a |
//!
//! The empty path is a valid key (the default key), but `from_path_string("")`
//! is rejected: an empty string is never a well-formed path string.
//!
//! ## The Empty Key
//!
//! `DocumentKey::empty()` returns a process-wide instance, created on first
//! use. Every call returns the same reference.

use super::resource_path::{PathError, ResourcePath};
use crate::error::{Error, Result};
use crate::limits::Limits;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static EMPTY_KEY: Lazy<DocumentKey> = Lazy::new(|| {
    tracing::trace!("initializing canonical empty document key");
    DocumentKey::default()
});

/// Key identifying a single document
///
/// ## Invariants
///
/// - `path().len()` is even (zero included)
/// - Ordering and equality are exactly those of the wrapped path
///
/// # Examples
///
/// ```
/// use firestore_core::DocumentKey;
///
/// let key = DocumentKey::from_path_string("rooms/firestore/messages/1").unwrap();
/// assert_eq!(key.document_id(), Some("1"));
/// assert_eq!(key.to_string(), "rooms/firestore/messages/1");
///
/// assert!(DocumentKey::from_path_string("rooms/firestore/messages").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ResourcePath", into = "ResourcePath")]
pub struct DocumentKey {
    path: ResourcePath,
}

impl DocumentKey {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a key from a path, validating the segment count
    ///
    /// Pass `path.clone()` to keep the input, or `std::mem::take(&mut path)`
    /// to move it out and leave the empty path behind.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` if the path has an odd segment count.
    pub fn new(path: ResourcePath) -> Result<Self> {
        if !Self::is_document_key(&path) {
            return Err(Error::InvariantViolation {
                segments: path.len(),
                path: path.canonical_string(),
            });
        }
        Ok(DocumentKey { path })
    }

    /// Create a key without returning an error
    ///
    /// For call sites that already checked the path with
    /// [`is_document_key`](Self::is_document_key).
    ///
    /// # Panics
    ///
    /// Panics if the path has an odd segment count.
    pub fn new_unchecked(path: ResourcePath) -> Self {
        if !Self::is_document_key(&path) {
            tracing::error!(
                path = %path,
                segments = path.len(),
                "document key constructed from a non-document path"
            );
            panic!(
                "invalid document key path \"{}\": {} segments, expected an even count",
                path,
                path.len()
            );
        }
        DocumentKey { path }
    }

    /// Create a key from an ordered list of segments
    ///
    /// # Errors
    ///
    /// - `Error::InvalidArgument` if a segment is empty or contains `/`
    /// - `Error::InvariantViolation` if the segment count is odd
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ResourcePath::from_segments(segments)?)
    }

    /// Create a key by parsing its canonical string
    ///
    /// Intended for untrusted input, so every rejection is
    /// `Error::InvalidArgument`, including an odd segment count.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for an empty string, an empty
    /// segment, or a path that does not name a document.
    pub fn from_path_string(s: &str) -> Result<Self> {
        let path = ResourcePath::parse(s).map_err(|e| {
            tracing::debug!(input = s, reason = e.reason_code(), "rejected document path");
            e
        })?;

        if !Self::is_document_key(&path) {
            let err = PathError::NotADocumentPath {
                segments: path.len(),
                path: path.canonical_string(),
            };
            tracing::debug!(input = s, reason = err.reason_code(), "rejected document path");
            return Err(err.into());
        }

        Ok(DocumentKey { path })
    }

    /// The canonical empty key, shared for the life of the process
    pub fn empty() -> &'static DocumentKey {
        &EMPTY_KEY
    }

    /// Check whether a path can be used as a document key
    ///
    /// True iff the segment count is even; the empty path qualifies.
    pub fn is_document_key(path: &ResourcePath) -> bool {
        path.len() % 2 == 0
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The wrapped path
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Consume the key and return its path
    pub fn into_path(self) -> ResourcePath {
        self.path
    }

    /// Check if this key wraps the empty path
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Document ID, the last segment (None for the empty key)
    pub fn document_id(&self) -> Option<&str> {
        self.path.last_segment()
    }

    /// Path of the collection containing this document
    ///
    /// The empty key yields the empty path.
    pub fn collection_path(&self) -> ResourcePath {
        self.path.pop_last().unwrap_or_default()
    }

    /// ID of the immediate parent collection (None for the empty key)
    pub fn collection_group(&self) -> Option<&str> {
        let len = self.path.len();
        if len < 2 {
            return None;
        }
        self.path.get(len - 2)
    }

    /// Check if the immediate parent collection has the given ID
    pub fn has_collection_id(&self, collection_id: &str) -> bool {
        self.collection_group() == Some(collection_id)
    }

    /// Check the wrapped path against configured limits
    pub fn validate_limits(&self, limits: &Limits) -> Result<()> {
        self.path.validate_limits(limits)?;
        Ok(())
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl FromStr for DocumentKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocumentKey::from_path_string(s)
    }
}

impl TryFrom<ResourcePath> for DocumentKey {
    type Error = Error;

    fn try_from(path: ResourcePath) -> Result<Self> {
        DocumentKey::new(path)
    }
}

impl From<DocumentKey> for ResourcePath {
    fn from(key: DocumentKey) -> Self {
        key.path
    }
}

impl AsRef<ResourcePath> for DocumentKey {
    fn as_ref(&self) -> &ResourcePath {
        &self.path
    }
}

// ============================================================================
// Tests
// ============================================================================
