//! Content Store: the canonical demo dataset and lookups against it.
//!
//! The store is read-only after construction. It backs the client's fallback
//! path and the demo content server.

pub mod seed;
pub mod store;

pub use store::{ContentStore, InMemoryContentStore, ensure_unique_slugs};
