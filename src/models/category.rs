//! Category model and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

/// Create category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategory {
    pub name: String,
}
