//! Authentication error taxonomy
//!
//! Missing and invalid credentials deliberately produce the same 401
//! response body so a caller cannot tell which check failed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// No session cookie was presented
    #[error("unauthorized access")]
    MissingCredential,
    /// The presented token failed verification (bad signature or expired)
    #[error("unauthorized access")]
    InvalidCredential,
    /// Authenticated identity does not match the requested identity
    #[error("Forbidden Access")]
    OwnershipMismatch,
}

impl AuthError {
    fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential | AuthError::InvalidCredential => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::OwnershipMismatch => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}
