//! Path and key model
//!
//! - `resource_path`: ordered segment paths and their canonical string form
//! - `document_key`: paths that name a document (even segment count)
//!
//! ## Usage
//!
//! ```
//! use firestore_core::model::{DocumentKey, ResourcePath};
//!
//! let path = ResourcePath::parse("rooms/firestore").unwrap();
//! assert!(DocumentKey::is_document_key(&path));
//! let key = DocumentKey::new(path).unwrap();
//! assert_eq!(key.collection_group(), Some("rooms"));
//! ```

pub mod document_key;
pub mod resource_path;

// Re-exports
pub use document_key::DocumentKey;
pub use resource_path::{PathError, ResourcePath, DELIMITER};
