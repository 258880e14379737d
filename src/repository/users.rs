//! Users repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, surname, email, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by email, the uniqueness key
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, surname, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, surname, email, password FROM users ORDER BY surname, name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Create a new user with an already-hashed password
    pub async fn create(&self, user: &CreateUser, password_hash: &str) -> AppResult<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, surname, email, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, surname, email, password
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update an existing user
    pub async fn update(&self, id: Uuid, user: &UpdateUser) -> AppResult<User> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET name = $2, surname = $3, email = $4
            WHERE id = $1
            RETURNING id, name, surname, email, password
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
