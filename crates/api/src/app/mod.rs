//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: handlers, one file per content area
//! - `errors.rs`: consistent JSON error bodies

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use ecosprout_store::ContentStore;

use crate::config::API_PREFIX;

pub mod errors;
pub mod routes;

/// Shared, read-only content for handlers.
pub type SharedStore = Arc<dyn ContentStore>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Content routes live under `/api`; `/health` sits at the root.
pub fn build_app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest(API_PREFIX, routes::router())
        .layer(ServiceBuilder::new().layer(Extension(store)))
}
