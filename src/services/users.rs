//! User management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
};

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repository
            .users
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    /// Create a new user; the email is the uniqueness key
    pub async fn create(&self, user: CreateUser) -> AppResult<User> {
        if self.repository.users.get_by_email(&user.email).await?.is_some() {
            return Err(AppError::Conflict("email is already in use".to_string()));
        }

        let password_hash = hash_password(&user.password)?;
        self.repository.users.create(&user, &password_hash).await
    }

    /// Update an existing user
    pub async fn update(&self, id: Uuid, user: UpdateUser) -> AppResult<User> {
        if self.repository.users.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("user was not found".to_string()));
        }

        self.repository.users.update(id, &user).await
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.users.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        self.repository.users.delete(id).await
    }
}
