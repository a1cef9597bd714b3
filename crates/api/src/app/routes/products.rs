use axum::{
    Json, Router,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
};

use ecosprout_core::{DomainError, ProductId};
use ecosprout_store::ContentStore;

use crate::app::{SharedStore, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub async fn list_products(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    Json(store.list_products()).into_response()
}

pub async fn get_product(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match store.get_product(&ProductId::new(id)) {
        Some(product) => Json(product).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
