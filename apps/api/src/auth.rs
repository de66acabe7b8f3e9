//! Bearer-token identification of the calling recruiter.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// JWT claims carried by recruiter tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub recruiter_id: Uuid,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

/// Signs and verifies HS256 recruiter tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    pub fn create_token(
        &self,
        recruiter_id: Uuid,
        username: &str,
        ttl: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: recruiter_id.to_string(),
            recruiter_id,
            username: username.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Returns the claims if the token is well-signed, unexpired and ours.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation).map(|data| data.claims)
    }
}

/// The authenticated recruiter. Rejects with 401 when the
/// `Authorization` header is missing or its token does not verify.
#[derive(Debug, Clone)]
pub struct AuthRecruiter {
    pub id: Uuid,
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthRecruiter {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        // Accept both "Bearer <token>" and a bare token
        let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();

        let claims = state.jwt.verify_token(token).map_err(|e| {
            debug!("Rejected bearer token: {e}");
            AppError::Unauthorized
        })?;

        Ok(AuthRecruiter {
            id: claims.recruiter_id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let recruiter_id = Uuid::new_v4();

        let token = service
            .create_token(recruiter_id, "demo", chrono::Duration::hours(1))
            .unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.recruiter_id, recruiter_id);
        assert_eq!(claims.username, "demo");
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let signer = JwtService::new("secret1", "test_issuer".to_string());
        let verifier = JwtService::new("secret2", "test_issuer".to_string());
        let token = signer
            .create_token(Uuid::new_v4(), "demo", chrono::Duration::hours(1))
            .unwrap();

        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let signer = JwtService::new("secret", "someone-else".to_string());
        let verifier = JwtService::new("secret", "test_issuer".to_string());
        let token = signer
            .create_token(Uuid::new_v4(), "demo", chrono::Duration::hours(1))
            .unwrap();

        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtService::new("secret", "test_issuer".to_string());
        // Past the default 60s validation leeway
        let token = service
            .create_token(Uuid::new_v4(), "demo", chrono::Duration::minutes(-5))
            .unwrap();

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = JwtService::new("secret", "test_issuer".to_string());
        assert!(service.verify_token("not-a-jwt").is_err());
    }
}
