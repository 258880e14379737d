//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User},
    validation::schemas,
};

use super::AuthenticatedUser;

/// Register a new user. Open: this is how accounts are created.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input or duplicate email", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<User>)> {
    let payload: CreateUser = schemas::CREATE_USER.parse(&body)?;

    let created = state.services.users.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = [User]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list().await?;
    Ok(Json(users))
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = String, Path, description = "User ID (UUID)")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<User>> {
    let id = schemas::uuid_param(&user_id, "the user id must be a valid UUID")?;

    let user = state.services.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = String, Path, description = "User ID (UUID)")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<User>> {
    let id = schemas::uuid_param(&user_id, "the user id must be a valid UUID")?;
    let payload: UpdateUser = schemas::UPDATE_USER.parse(&body)?;

    let updated = state.services.users.update(id, payload).await?;
    Ok(Json(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = String, Path, description = "User ID (UUID)")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(user_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = schemas::uuid_param(&user_id, "the user id must be a valid UUID")?;

    state.services.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
