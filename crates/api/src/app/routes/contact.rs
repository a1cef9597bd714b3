use axum::{Json, response::IntoResponse};

use ecosprout_contact::{ApiResponse, ContactSubmission};

use crate::app::errors;

pub const RECEIVED_MESSAGE: &str =
    "Thank you for contacting EcoSprout! Our team will reply within one business day.";

/// Accept a contact submission. Nothing is stored; the submission is logged
/// (without personal data) and acknowledged.
pub async fn submit(Json(body): Json<ContactSubmission>) -> axum::response::Response {
    let submission = match body.validate() {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(
        inquiry_type = submission.get().inquiry_type.as_str(),
        has_company = submission.get().company.is_some(),
        "contact submission received"
    );

    Json(ApiResponse {
        data: None::<()>,
        message: RECEIVED_MESSAGE.to_string(),
        success: true,
    })
    .into_response()
}
