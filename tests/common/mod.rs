//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

pub use firestore_model::{DocumentKey, Error, LimitError, Limits, PathError, ResourcePath};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Output goes through the test writer, so it is captured by the harness.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}

// ============================================================================
// Builders
// ============================================================================

/// Build a path from known-good segments.
pub fn path(segments: &[&str]) -> ResourcePath {
    ResourcePath::from_segments(segments.iter().copied()).unwrap()
}

/// Build a key from known-good, even-length segments.
pub fn key(segments: &[&str]) -> DocumentKey {
    DocumentKey::from_segments(segments.iter().copied()).unwrap()
}

/// The key used throughout the suite.
pub const MESSAGE_PATH: &str = "rooms/firestore/messages/1";

/// Segments of [`MESSAGE_PATH`].
pub const MESSAGE_SEGMENTS: [&str; 4] = ["rooms", "firestore", "messages", "1"];
