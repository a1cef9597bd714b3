use axum::{Json, extract::Extension, http::StatusCode};

use ecosprout_content::TeamMember;
use ecosprout_store::ContentStore;

use crate::app::SharedStore;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn list_team(Extension(store): Extension<SharedStore>) -> Json<Vec<TeamMember>> {
    Json(store.list_team_members())
}
