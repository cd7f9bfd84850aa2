//! firestore-model - Resource paths and document keys
//!
//! Every document in the database is identified by a [`DocumentKey`]: a
//! slash-delimited [`ResourcePath`] with an even number of segments,
//! alternating collection and document levels.
//!
//! # Quick Start
//!
//! ```
//! use firestore_model::{DocumentKey, ResourcePath};
//!
//! let key = DocumentKey::from_path_string("rooms/firestore/messages/1")?;
//! assert_eq!(key.document_id(), Some("1"));
//!
//! let collection = key.collection_path();
//! assert!(!DocumentKey::is_document_key(&collection));
//! assert_eq!(collection, ResourcePath::parse("rooms/firestore/messages")?);
//! # Ok::<(), firestore_model::Error>(())
//! ```
//!
//! # Architecture
//!
//! The model lives in `firestore-core`; this crate re-exports it.

// Re-export the public API from firestore-core
pub use firestore_core::*;
