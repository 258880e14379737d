//! Books repository for database operations
//!
//! Reads come back joined with author, publisher and category so the
//! service layer can expand relations without extra round trips.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload, BookRecord, BookRow},
};

const BOOK_SELECT: &str = r#"
    SELECT b.id, b.title, b.summary, b.year, b.pages, b.isbn,
           b.author_id, b.publisher_id, b.category_id,
           u.name AS author_name, u.surname AS author_surname, u.email AS author_email,
           p.name AS publisher_name, p.address AS publisher_address, p.cellphone AS publisher_cellphone,
           c.name AS category_name
    FROM books b
    JOIN users u ON u.id = b.author_id
    JOIN publishers p ON p.id = b.publisher_id
    JOIN categories c ON c.id = b.category_id
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a book with its relations joined
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let query = format!("{} WHERE b.id = $1", BOOK_SELECT);
        let row = sqlx::query_as::<_, BookRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Book::from))
    }

    /// Get the flat book record, used for changed-value guards on update
    pub async fn get_record(&self, id: Uuid) -> AppResult<Option<BookRecord>> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT id, title, summary, year, pages, isbn,
                   author_id, publisher_id, category_id
            FROM books WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Lookup by ISBN, the uniqueness key
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Option<BookRecord>> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT id, title, summary, year, pages, isbn,
                   author_id, publisher_id, category_id
            FROM books WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// List all books with their relations joined
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let query = format!("{} ORDER BY b.title", BOOK_SELECT);
        let rows = sqlx::query_as::<_, BookRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Number of books referencing a publisher, for the delete guard
    pub async fn count_by_publisher(&self, publisher_id: Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE publisher_id = $1")
            .bind(publisher_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Create a new book and return it with relations expanded
    pub async fn create(&self, book: &BookPayload) -> AppResult<Book> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO books (id, title, summary, year, pages, isbn,
                               author_id, publisher_id, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&book.title)
        .bind(&book.summary)
        .bind(book.year)
        .bind(book.pages)
        .bind(&book.isbn)
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(book.category_id)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("created book vanished".to_string()))
    }

    /// Full update of an existing book, returning it with relations expanded
    pub async fn update(&self, id: Uuid, book: &BookPayload) -> AppResult<Book> {
        sqlx::query(
            r#"
            UPDATE books
            SET title = $2, summary = $3, year = $4, pages = $5, isbn = $6,
                author_id = $7, publisher_id = $8, category_id = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&book.title)
        .bind(&book.summary)
        .bind(book.year)
        .bind(book.pages)
        .bind(&book.isbn)
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(book.category_id)
        .execute(&self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| crate::error::AppError::Internal("updated book vanished".to_string()))
    }

    /// Delete a book
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
