//! `ecosprout-client`: data access facade.
//!
//! **Responsibility:** fetch catalog content from the remote API, falling back
//! to the local [`ContentStore`](ecosprout_store::ContentStore) when the remote
//! is unavailable or answers with something unusable.
//!
//! This crate provides:
//! - [`ApiClient`]: one method per content type, never failing for reads
//! - [`Fetched`]: tells live data apart from fallback data
//! - [`RequestScope`]: cancels a view's in-flight requests when it goes away

pub mod client;
pub mod config;
pub mod error;
pub mod fetched;
pub mod scope;

pub use client::ApiClient;
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL, DEFAULT_FALLBACK_DELAY};
pub use error::{Cancelled, ConfigError, RemoteError};
pub use fetched::Fetched;
pub use scope::{RequestScope, ScopeHandle};
