//! API handlers for Folio REST endpoints

pub mod books;
pub mod categories;
pub mod health;
pub mod logs;
pub mod openapi;
pub mod publishers;
pub mod sessions;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::session::Claims, AppState};

/// Extractor gating protected handlers on a valid bearer token.
///
/// A missing or empty token and a token that fails verification (bad
/// signature, expired) are reported with distinct messages, both 401.
pub struct AuthenticatedUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        if token.is_empty() {
            return Err(AppError::Authentication("no token was provided".to_string()));
        }

        let claims = Claims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::Authentication("unauthorized".to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}
