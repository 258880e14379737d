//! Book model, joined row mapping and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::publisher::Publisher;
use super::category::Category;

/// Author as embedded in book responses. Deliberately has no password
/// field at the type level.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookAuthor {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Book as returned by the API. The embedded relations are serialized only
/// when the caller asked for them via include flags.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub year: i32,
    pub pages: i32,
    pub isbn: String,
    pub author_id: Uuid,
    pub publisher_id: Uuid,
    pub category_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<BookAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Flat book row without relations, used for precondition checks
#[derive(Debug, Clone, FromRow)]
pub struct BookRecord {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub year: i32,
    pub pages: i32,
    pub isbn: String,
    pub author_id: Uuid,
    pub publisher_id: Uuid,
    pub category_id: Uuid,
}

/// Internal row structure for joined book queries
#[derive(Debug, FromRow)]
pub struct BookRow {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub year: i32,
    pub pages: i32,
    pub isbn: String,
    pub author_id: Uuid,
    pub publisher_id: Uuid,
    pub category_id: Uuid,
    pub author_name: String,
    pub author_surname: String,
    pub author_email: String,
    pub publisher_name: String,
    pub publisher_address: String,
    pub publisher_cellphone: String,
    pub category_name: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            summary: row.summary,
            year: row.year,
            pages: row.pages,
            isbn: row.isbn,
            author_id: row.author_id,
            publisher_id: row.publisher_id,
            category_id: row.category_id,
            author: Some(BookAuthor {
                id: row.author_id,
                name: row.author_name,
                surname: row.author_surname,
                email: row.author_email,
            }),
            publisher: Some(Publisher {
                id: row.publisher_id,
                name: row.publisher_name,
                address: row.publisher_address,
                cellphone: row.publisher_cellphone,
            }),
            category: Some(Category {
                id: row.category_id,
                name: row.category_name,
            }),
        }
    }
}

/// Create/update book request; create and update share the same shape
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookPayload {
    pub title: String,
    pub summary: String,
    pub year: i32,
    pub pages: i32,
    pub isbn: String,
    pub author_id: Uuid,
    pub publisher_id: Uuid,
    pub category_id: Uuid,
}
