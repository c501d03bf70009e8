//! Ownership guard
//!
//! Applied after the auth middleware on routes that filter by a
//! caller-supplied identity: a caller may only read their own records.

use crate::auth::error::AuthError;
use crate::auth::models::AuthUser;

/// Allow the request only if the requested identity exactly equals the
/// authenticated one. An absent requested identity also denies; there is
/// no wildcard or admin override.
pub fn check_ownership(user: &AuthUser, requested: Option<&str>) -> Result<(), AuthError> {
    match requested {
        Some(email) if email == user.email => Ok(()),
        _ => Err(AuthError::OwnershipMismatch),
    }
}
