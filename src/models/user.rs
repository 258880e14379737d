//! User model and request payloads
//!
//! Users double as book authors; the stored credential hash never leaves
//! the process.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Full user model from the database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    /// Hashed password (argon2), excluded from every response
    #[serde(skip_serializing)]
    pub password: String,
}

/// Create user request (validated upstream by the user schema)
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

/// Update user request; credentials are not updatable here
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: String,
    pub surname: String,
    pub email: String,
}
