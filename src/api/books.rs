//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
    services::books::IncludeRelations,
    validation::schemas,
};

use super::AuthenticatedUser;

/// Relation expansion flags. Presence-based: any non-empty value counts
/// as true, mirroring `?include_author=1` style callers.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct IncludeQuery {
    pub include_author: Option<String>,
    pub include_publisher: Option<String>,
    pub include_category: Option<String>,
}

fn flag(value: &Option<String>) -> bool {
    matches!(value, Some(s) if !s.is_empty())
}

impl From<&IncludeQuery> for IncludeRelations {
    fn from(query: &IncludeQuery) -> Self {
        IncludeRelations {
            author: flag(&query.include_author),
            publisher: flag(&query.include_publisher),
            category: flag(&query.include_category),
        }
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(IncludeQuery),
    responses(
        (status = 200, description = "List of books", body = [Book]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<IncludeQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list((&query).into()).await?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("book_id" = String, Path, description = "Book ID (UUID)"),
        IncludeQuery
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(book_id): Path<String>,
    Query(query): Query<IncludeQuery>,
) -> AppResult<Json<Book>> {
    let id = schemas::uuid_param(&book_id, "the book id must be a valid UUID")?;

    let book = state.services.books.get_by_id(id, (&query).into()).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input, duplicate ISBN or missing reference", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let payload: BookPayload = schemas::BOOK_PAYLOAD.parse(&body)?;

    let created = state.services.books.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("book_id" = String, Path, description = "Book ID (UUID)")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Duplicate ISBN or missing reference", body = crate::error::ErrorEnvelope),
        (status = 404, description = "Book not found", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(book_id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Book>> {
    let id = schemas::uuid_param(&book_id, "the book id must be a valid UUID")?;
    let payload: BookPayload = schemas::BOOK_PAYLOAD.parse(&body)?;

    let updated = state.services.books.update(id, payload).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("book_id" = String, Path, description = "Book ID (UUID)")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorEnvelope)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(book_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = schemas::uuid_param(&book_id, "the book id must be a valid UUID")?;

    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_value_enables_a_flag() {
        assert!(flag(&Some("1".to_string())));
        assert!(flag(&Some("true".to_string())));
        assert!(flag(&Some("no".to_string())));
        assert!(!flag(&Some(String::new())));
        assert!(!flag(&None));
    }
}
