//! Category endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::category::{Category, CreateCategory},
    validation::schemas,
};

use super::AuthenticatedUser;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of categories", body = [Category]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.list().await?;
    Ok(Json(categories))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid input or duplicate name", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let payload: CreateCategory = schemas::CREATE_CATEGORY.parse(&body)?;

    let created = state.services.categories.create(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{category_id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(
        ("category_id" = String, Path, description = "Category ID (UUID)")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(category_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = schemas::uuid_param(&category_id, "the category id must be a valid UUID")?;

    state.services.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
