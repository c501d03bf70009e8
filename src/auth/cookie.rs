//! Session cookie policy
//!
//! Decides cookie attributes from the deployment environment, resolved once
//! at startup. In production the API and the front-end run on different
//! origins, so the cookie must be `SameSite=None` and therefore `Secure`.

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::auth::jwt::TOKEN_TTL_HOURS;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Deployment environment flag driving cookie attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything other than "production" counts as development.
    pub fn from_env_value(value: &str) -> Self {
        match value {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Builds session cookies with environment-appropriate attributes.
///
/// Pure and deterministic: same environment, same attributes.
#[derive(Debug, Clone)]
pub struct CookiePolicy {
    environment: Environment,
}

impl CookiePolicy {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Cookie carrying a freshly issued session token.
    ///
    /// Always HTTP-only; `Secure` and `SameSite=None` only in production,
    /// `SameSite=Strict` otherwise. Max-age matches the token lifetime.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = self.base_cookie(token);
        cookie.set_max_age(time::Duration::hours(TOKEN_TTL_HOURS));
        cookie
    }

    /// Overwrites the session cookie with an immediately-expiring one.
    /// Used on logout to invalidate the client-side credential.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base_cookie(String::new());
        cookie.set_max_age(time::Duration::ZERO);
        cookie
    }

    fn base_cookie(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE, value);
        cookie.set_http_only(true);
        cookie.set_secure(self.environment.is_production());
        cookie.set_same_site(if self.environment.is_production() {
            SameSite::None
        } else {
            SameSite::Strict
        });
        cookie.set_path("/");
        cookie
    }
}
