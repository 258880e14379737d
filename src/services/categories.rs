//! Category management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::category::Category,
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all categories
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    /// Create a category; names are unique case-insensitively
    pub async fn create(&self, name: &str) -> AppResult<Category> {
        if self.repository.categories.get_by_name(name).await?.is_some() {
            return Err(AppError::Conflict("category already exists".to_string()));
        }

        self.repository.categories.create(name).await
    }

    /// Delete a category
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.categories.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("category not found".to_string()));
        }

        self.repository.categories.delete(id).await
    }
}
