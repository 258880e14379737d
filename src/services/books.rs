//! Book management service
//!
//! Creation and update run their precondition checks in a fixed declared
//! order (ISBN uniqueness, then author, publisher, category existence);
//! only the first failing check is reported. On update, a check is skipped
//! when the new value equals the stored one, so re-submitting the current
//! ISBN never reads as a duplicate.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::Repository,
};

/// Which relations to expand in the response, decoded from the
/// presence-based `include_*` query flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeRelations {
    pub author: bool,
    pub publisher: bool,
    pub category: bool,
}

impl IncludeRelations {
    fn apply(&self, book: &mut Book) {
        if !self.author {
            book.author = None;
        }
        if !self.publisher {
            book.publisher = None;
        }
        if !self.category {
            book.category = None;
        }
    }
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books, expanding the requested relations
    pub async fn list(&self, include: IncludeRelations) -> AppResult<Vec<Book>> {
        let mut books = self.repository.books.list().await?;
        for book in &mut books {
            include.apply(book);
        }
        Ok(books)
    }

    /// Get a book by ID, expanding the requested relations
    pub async fn get_by_id(&self, id: Uuid, include: IncludeRelations) -> AppResult<Book> {
        let mut book = self
            .repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("book not found".to_string()))?;

        include.apply(&mut book);
        Ok(book)
    }

    /// Create a book after the ordered precondition checks
    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        if self.repository.books.get_by_isbn(&payload.isbn).await?.is_some() {
            return Err(AppError::Conflict("ISBN is already in use".to_string()));
        }

        if self
            .repository
            .users
            .get_by_id(payload.author_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("author not found".to_string()));
        }

        if self
            .repository
            .publishers
            .get_by_id(payload.publisher_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("publisher not found".to_string()));
        }

        if self
            .repository
            .categories
            .get_by_id(payload.category_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("category not found".to_string()));
        }

        self.repository.books.create(&payload).await
    }

    /// Update a book; checks only run for values that actually changed
    pub async fn update(&self, id: Uuid, payload: BookPayload) -> AppResult<Book> {
        let current = self
            .repository
            .books
            .get_record(id)
            .await?
            .ok_or_else(|| AppError::NotFound("book not found".to_string()))?;

        if payload.isbn != current.isbn
            && self.repository.books.get_by_isbn(&payload.isbn).await?.is_some()
        {
            return Err(AppError::Conflict("new ISBN is already in use".to_string()));
        }

        if payload.author_id != current.author_id
            && self
                .repository
                .users
                .get_by_id(payload.author_id)
                .await?
                .is_none()
        {
            return Err(AppError::BadRequest("author not found".to_string()));
        }

        if payload.publisher_id != current.publisher_id
            && self
                .repository
                .publishers
                .get_by_id(payload.publisher_id)
                .await?
                .is_none()
        {
            return Err(AppError::BadRequest("publisher not found".to_string()));
        }

        if payload.category_id != current.category_id
            && self
                .repository
                .categories
                .get_by_id(payload.category_id)
                .await?
                .is_none()
        {
            return Err(AppError::BadRequest("category not found".to_string()));
        }

        self.repository.books.update(id, &payload).await
    }

    /// Delete a book
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.books.get_record(id).await?.is_none() {
            return Err(AppError::NotFound("book not found".to_string()));
        }

        self.repository.books.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::BookAuthor;

    fn sample_book() -> Book {
        let author_id = Uuid::new_v4();
        Book {
            id: Uuid::new_v4(),
            title: "Dune".to_string(),
            summary: "Spice".to_string(),
            year: 1965,
            pages: 412,
            isbn: "9780441172719".to_string(),
            author_id,
            publisher_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            author: Some(BookAuthor {
                id: author_id,
                name: "Frank".to_string(),
                surname: "Herbert".to_string(),
                email: "frank@example.com".to_string(),
            }),
            publisher: None,
            category: None,
        }
    }

    #[test]
    fn include_flags_strip_unrequested_relations() {
        let mut book = sample_book();
        IncludeRelations::default().apply(&mut book);
        assert!(book.author.is_none());

        let mut book = sample_book();
        IncludeRelations {
            author: true,
            ..Default::default()
        }
        .apply(&mut book);
        assert!(book.author.is_some());
        assert!(book.publisher.is_none());
    }
}
