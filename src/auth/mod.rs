//! # Authentication Module
//!
//! Cookie-based JWT authentication: token issuance and verification, the
//! session cookie policy, the per-route middleware, and the ownership
//! guard that limits callers to their own records.

pub mod cookie;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod ownership;
