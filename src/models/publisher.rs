//! Publisher model and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub cellphone: String,
}

/// Create publisher request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublisher {
    pub name: String,
    pub address: String,
    pub cellphone: String,
}
