//! Session endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::session::{CreateSession, SessionResponse},
    validation::schemas,
};

/// Create a session (log in) and receive a short-lived access token
#[utoipa::path(
    post,
    path = "/sessions",
    tag = "sessions",
    request_body = CreateSession,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorEnvelope),
        (status = 401, description = "Bad credentials", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn create_session(
    State(state): State<crate::AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let payload: CreateSession = schemas::CREATE_SESSION.parse(&body)?;

    let access_token = state
        .services
        .sessions
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(SessionResponse { access_token })))
}
