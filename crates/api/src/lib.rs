//! Demo content server.
//!
//! Serves the seeded catalog over the same HTTP contract the client facade
//! consumes (`/products`, `/blog`, `/team`, `/contact`). Useful for running the
//! site against a live remote and for exercising the client's live path.

pub mod app;
pub mod config;

pub use config::{BIND_ENV, DEFAULT_BIND, ServerConfig};
