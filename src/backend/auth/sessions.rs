/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * Tokens are stateless: nothing is stored server-side, a token is accepted
 * if its HS256 signature checks out and it has not expired.
 *
 * A token issued at `iat` is valid for `iat <= now < iat + 48h`.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Lifetime of a session token
pub const TOKEN_TTL_HOURS: i64 = 48;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signing and verification keys derived from the configured secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    /// Build keys from the shared HS256 secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a token for `user_id`, valid for 48 hours from now
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, BackendError> {
        self.issue_token_at(user_id, Utc::now())
    }

    /// Create a token as if issued at `issued_at`
    pub fn issue_token_at(
        &self,
        user_id: Uuid,
        issued_at: DateTime<Utc>,
    ) -> Result<String, BackendError> {
        let expires_at = issued_at + Duration::hours(TOKEN_TTL_HOURS);
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify a token and return the user ID it was issued for
    ///
    /// # Errors
    ///
    /// `AuthError` if the token is malformed, signed with another key,
    /// expired, or names a subject that is not a user ID.
    pub fn verify_token(&self, token: &str) -> Result<Uuid, BackendError> {
        self.verify_token_at(token, Utc::now())
    }

    /// Verify a token against the clock value `now`
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, BackendError> {
        let claims = self.decode_claims(token)?;

        if now.timestamp() < claims.iat {
            tracing::debug!("Token issued in the future: iat={}", claims.iat);
            return Err(BackendError::unauthorized("Invalid token"));
        }
        if now.timestamp() >= claims.exp {
            return Err(BackendError::unauthorized("Token expired"));
        }

        Uuid::parse_str(&claims.sub)
            .map_err(|_| BackendError::unauthorized("Invalid token subject"))
    }

    /// Check the signature and decode the claims, without checking expiry
    pub fn decode_claims(&self, token: &str) -> Result<Claims, BackendError> {
        // Expiry is checked against an explicit clock by the caller.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                BackendError::unauthorized("Invalid token")
            })
    }
}
