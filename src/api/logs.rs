//! Error log retrieval endpoint
//!
//! Lets support look up the original message behind a 500's opaque id.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Retrieve a logged internal error message by its id
#[utoipa::path(
    get,
    path = "/logs/{log_id}",
    tag = "logs",
    params(
        ("log_id" = String, Path, description = "Log entry ID issued by a 500 response")
    ),
    responses(
        (status = 200, description = "The logged message", body = [String]),
        (status = 404, description = "Unknown log id", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn get_log(
    State(state): State<crate::AppState>,
    Path(log_id): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let message = Uuid::try_parse(&log_id)
        .ok()
        .and_then(|id| state.services.error_log.get(id))
        .ok_or_else(|| AppError::NotFound("log not found".to_string()))?;

    Ok(Json(vec![message]))
}
