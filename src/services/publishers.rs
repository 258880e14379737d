//! Publisher management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::publisher::{CreatePublisher, Publisher},
    repository::Repository,
};

#[derive(Clone)]
pub struct PublishersService {
    repository: Repository,
}

impl PublishersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all publishers
    pub async fn list(&self) -> AppResult<Vec<Publisher>> {
        self.repository.publishers.list().await
    }

    /// Create a publisher; names are unique case-insensitively
    pub async fn create(&self, publisher: CreatePublisher) -> AppResult<Publisher> {
        if self
            .repository
            .publishers
            .get_by_name(&publisher.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("publisher already exists".to_string()));
        }

        self.repository.publishers.create(&publisher).await
    }

    /// Delete a publisher.
    ///
    /// Refused while any book still references it; the check lives here so
    /// the failure is a descriptive message rather than a raw foreign-key
    /// constraint error.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.publishers.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("publisher not found".to_string()));
        }

        let book_count = self.repository.books.count_by_publisher(id).await?;
        if book_count > 0 {
            return Err(AppError::Conflict(
                "you cannot delete a publisher that has books associated with it".to_string(),
            ));
        }

        self.repository.publishers.delete(id).await
    }
}
