use axum::{http::StatusCode, Json};
use contracts::domain::waiting_list::{ApiError, ApiMessage, SignupForm};

use crate::domain::waiting_list::service;

/// POST /api/waiting-list
///
/// Validates the submission, then appends it to the configured spreadsheet.
/// Every server-side failure collapses to one generic message; detail goes
/// to the log only.
pub async fn submit(
    Json(form): Json<SignupForm>,
) -> Result<Json<ApiMessage>, (StatusCode, Json<ApiError>)> {
    if !form.is_complete() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: "All fields are required".to_string(),
            }),
        ));
    }

    match service::submit(&form).await {
        Ok(()) => Ok(Json(ApiMessage {
            message: "Successfully added to waiting list".to_string(),
        })),
        Err(e) => {
            tracing::error!("Waiting-list submission failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError {
                    error: "Failed to submit to waiting list".to_string(),
                }),
            ))
        }
    }
}
