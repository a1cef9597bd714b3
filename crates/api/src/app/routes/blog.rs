use axum::{
    Json, Router,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
};

use ecosprout_core::DomainError;
use ecosprout_store::ContentStore;

use crate::app::{SharedStore, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_posts))
        .route("/:slug", get(get_post))
}

pub async fn list_posts(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    Json(store.list_blog_posts()).into_response()
}

pub async fn get_post(
    Extension(store): Extension<SharedStore>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    match store.get_blog_post_by_slug(&slug) {
        Some(post) => Json(post).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
