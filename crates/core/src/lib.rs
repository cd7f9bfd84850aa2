//! Core types for the document database client model
//!
//! This crate defines how documents are identified:
//! - ResourcePath: Slash-delimited hierarchical path of segments
//! - DocumentKey: ResourcePath with an even segment count, naming a document
//! - Error: Error type hierarchy (InvalidArgument vs InvariantViolation)
//! - Limits: Configurable path depth and size limits

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types
pub use error::{Error, Result};
pub use limits::{LimitError, Limits};
pub use model::{DocumentKey, PathError, ResourcePath, DELIMITER};
