//! Session token claims and payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for an authenticated session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub name: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Create a new signed access token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify an access token (signature and expiry)
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        // Tokens only live for about a minute, so the default 60-second
        // clock leeway would double their lifetime. Expiry is exact.
        let mut validation = Validation::default();
        validation.leeway = 0;
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;
        Ok(token_data.claims)
    }
}

/// Create session request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSession {
    pub email: String,
    pub password: String,
}

/// Successful session response
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn claims_with_exp(exp: i64) -> Claims {
        Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            exp,
            iat: Utc::now().timestamp(),
        }
    }

    #[test]
    fn token_round_trips() {
        let now = Utc::now().timestamp();
        let claims = claims_with_exp(now + 60);

        let token = claims.create_token("secret").unwrap();
        let decoded = Claims::from_token(&token, "secret").unwrap();
        assert_eq!(decoded.email, claims.email);
        assert_eq!(decoded.sub, claims.sub);
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = claims_with_exp(now - 120);

        let token = claims.create_token("secret").unwrap();
        assert!(Claims::from_token(&token, "secret").is_err());
    }

    #[test]
    fn recently_expired_token_gets_no_leeway() {
        // Expired well inside the decoder's default 60-second leeway; with
        // 60-second tokens any leeway would double the lifetime.
        let now = Utc::now().timestamp();
        let claims = claims_with_exp(now - 5);

        let token = claims.create_token("secret").unwrap();
        assert!(Claims::from_token(&token, "secret").is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = claims_with_exp(now + 60);

        let token = claims.create_token("secret").unwrap();
        assert!(Claims::from_token(&token, "other-secret").is_err());
    }
}
