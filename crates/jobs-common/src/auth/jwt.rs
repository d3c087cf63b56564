//! Session claims and JWT utilities
//!
//! Claims are built per login and signed with HS256 using the `jsonwebtoken` crate.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Issuer written into every session claim
pub const ISSUER: &str = "service project";

/// Audience written into every session claim
pub const AUDIENCE: &str = "users";

/// Lifetime of a session claim in seconds
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Registered JWT claims issued at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// Subject (user ID)
    pub sub: String,
    /// Audience
    pub aud: Vec<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build the claims for a user issued at the given instant
    #[must_use]
    pub fn new(user_id: i64, issued_at: DateTime<Utc>) -> Self {
        Self {
            iss: ISSUER.to_string(),
            sub: user_id.to_string(),
            aud: vec![AUDIENCE.to_string()],
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(TOKEN_LIFETIME_SECS)).timestamp(),
        }
    }

    /// Build the claims for a user issued now
    #[must_use]
    pub fn issue(user_id: i64) -> Self {
        Self::new(user_id, Utc::now())
    }

    /// Get the user ID from the subject
    ///
    /// # Errors
    /// Returns an error if the subject is not a numeric ID
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the claims are expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for signing and verifying session claims
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the given secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_audience(&[AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign claims into a compact JWT
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate a JWT
    ///
    /// # Errors
    /// Returns an error if the token is malformed, has the wrong issuer or
    /// audience, or is expired
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}
