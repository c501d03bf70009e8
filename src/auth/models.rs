//! Authentication Models
//!
//! Data structures for login payloads and the authenticated identity
//! attached to requests after token verification.

use serde::{Deserialize, Serialize};

use crate::auth::jwt::Claims;

/// Identity claims supplied at login and embedded into the session token.
///
/// `email` is the identity field the ownership guard compares against;
/// anything else the client sends along is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Authenticated user extracted from a verified session token.
///
/// Inserted into request extensions by the auth middleware; read-only for
/// the remainder of request handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
        }
    }
}
