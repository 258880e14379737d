//! Session service: credential verification and token issuing

use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::session::Claims,
    repository::Repository,
    services::users::verify_password,
};

const BAD_CREDENTIALS: &str = "user/password combination does not match";

#[derive(Clone)]
pub struct SessionsService {
    repository: Repository,
    config: AuthConfig,
}

impl SessionsService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Verify an email/password pair and issue a short-lived access token.
    ///
    /// Unknown email and wrong password produce the same message so the
    /// response does not reveal which part failed.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<String> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication(BAD_CREDENTIALS.to_string()))?;

        if !verify_password(&user.password, password)? {
            return Err(AppError::Authentication(BAD_CREDENTIALS.to_string()));
        }

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name,
            email: user.email,
            exp: now + self.config.token_expiry_secs,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}
