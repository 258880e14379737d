//! Publisher endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::publisher::{CreatePublisher, Publisher},
    validation::schemas,
};

use super::AuthenticatedUser;

/// List all publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of publishers", body = [Publisher]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Publisher>>> {
    let publishers = state.services.publishers.list().await?;
    Ok(Json(publishers))
}

/// Create a new publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    security(("bearer_auth" = [])),
    request_body = CreatePublisher,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Invalid input or duplicate name", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let payload: CreatePublisher = schemas::CREATE_PUBLISHER.parse(&body)?;

    let created = state.services.publishers.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a publisher.
///
/// Fails with 400 while any book still references the publisher.
#[utoipa::path(
    delete,
    path = "/publishers/{publisher_id}",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(
        ("publisher_id" = String, Path, description = "Publisher ID (UUID)")
    ),
    responses(
        (status = 204, description = "Publisher deleted"),
        (status = 400, description = "Publisher still has books", body = crate::error::ErrorEnvelope),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn delete_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(publisher_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = schemas::uuid_param(&publisher_id, "the publisher id must be a valid UUID")?;

    state.services.publishers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
