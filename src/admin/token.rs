use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error, instrument};

use super::types::AdminClaims;
use crate::shared::AppError;

pub const ADMIN_SUBJECT: &str = "admin";

/// Configuration for admin JWT operations
#[derive(Clone)]
pub struct AdminTokenConfig {
    secret: String,
    pub token_hours: i64,
}

impl AdminTokenConfig {
    pub fn new(secret: String, token_hours: i64) -> Self {
        Self {
            secret,
            token_hours,
        }
    }

    /// Creates a signed admin token, returning it with its expiry
    #[instrument(skip(self))]
    pub fn create_token(&self) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.token_hours);

        debug!(
            token_hours = self.token_hours,
            exp_timestamp = expires_at.timestamp(),
            "Creating admin token"
        );

        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| {
            error!(error = %e, "Failed to encode admin token");
            AppError::Internal
        })?;

        Ok((token, expires_at))
    }

    /// Validates signature, expiry and subject
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let claims = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            debug!(error = %e, "Failed to decode admin token");
            AppError::JwtError(e.to_string())
        })?;

        if claims.sub != ADMIN_SUBJECT {
            return Err(AppError::Unauthorized("Token is not an admin token".to_string()));
        }

        Ok(claims)
    }
}
