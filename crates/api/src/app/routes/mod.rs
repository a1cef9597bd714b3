use axum::{Router, routing::get, routing::post};

pub mod blog;
pub mod contact;
pub mod products;
pub mod system;

/// Router for the content endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/blog", blog::router())
        .route("/team", get(system::list_team))
        .route("/contact", post(contact::submit))
}
