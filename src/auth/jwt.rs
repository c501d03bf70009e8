//! JWT Token Service
//!
//! Handles session token creation and validation for cookie-based authentication.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::models::IdentityClaims;

/// Session token lifetime in hours.
pub const TOKEN_TTL_HOURS: i64 = 2;

/// JWT claims embedded in a session token: the caller-supplied identity
/// plus the timestamps stamped at issuance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Identity field used for ownership checks
    pub email: String,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
    /// Any additional identity claims the caller included at login
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Token issuance/verification failures.
///
/// A token is trusted only if its signature verifies against the server
/// secret and it has not expired; decode failures other than expiry are
/// collapsed into `InvalidSignature` since no other trust path exists.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature does not verify")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("failed to encode token")]
    Encoding,
}

/// JWT service for token operations
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a new token service with the provided secret
    pub fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let validation = Validation::default();

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Sign a session token for the given identity, expiring in 2 hours.
    ///
    /// The identity claims are embedded as-is; the caller is responsible
    /// for supplying a stable identity field.
    pub fn issue(&self, identity: IdentityClaims) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        // The service stamps email/iat/exp itself; client-supplied copies
        // would serialize as duplicate keys and the token would never
        // verify again.
        let mut extra = identity.extra;
        for reserved in ["email", "iat", "exp"] {
            extra.remove(reserved);
        }

        let claims = Claims {
            email: identity.email,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            extra,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| TokenError::Encoding)
    }

    /// Validate a session token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::InvalidSignature,
            })
    }
}
