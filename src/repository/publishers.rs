//! Publishers repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::publisher::{CreatePublisher, Publisher},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get publisher by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Publisher>> {
        let publisher = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, address, cellphone FROM publishers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(publisher)
    }

    /// Case-insensitive lookup by name, used for the uniqueness check
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Publisher>> {
        let publisher = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, address, cellphone FROM publishers WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(publisher)
    }

    /// List all publishers
    pub async fn list(&self) -> AppResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, address, cellphone FROM publishers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }

    /// Create a new publisher
    pub async fn create(&self, publisher: &CreatePublisher) -> AppResult<Publisher> {
        let created = sqlx::query_as::<_, Publisher>(
            r#"
            INSERT INTO publishers (id, name, address, cellphone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, cellphone
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&publisher.name)
        .bind(&publisher.address)
        .bind(&publisher.cellphone)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a publisher
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
