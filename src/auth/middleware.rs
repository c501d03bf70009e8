//! Authentication Middleware
//!
//! Axum middleware validating the session cookie and injecting the
//! authenticated user into request extensions. Applied per-route; routes
//! not wired to it bypass authentication entirely.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::auth::cookie::SESSION_COOKIE;
use crate::auth::error::AuthError;
use crate::auth::jwt::TokenService;
use crate::auth::models::AuthUser;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// Verify the session cookie and attach the authenticated user.
    ///
    /// Two terminal outcomes: authorized (claims attached, request
    /// continues) or rejected with 401. Why verification failed is not
    /// surfaced to the caller.
    pub async fn require_session(
        State(token_service): State<Arc<TokenService>>,
        jar: CookieJar,
        mut req: Request,
        next: Next,
    ) -> Result<Response, AuthError> {
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| {
                tracing::warn!("{} {}: no session cookie", req.method(), req.uri());
                AuthError::MissingCredential
            })?;

        let claims = token_service.verify(&token).map_err(|e| {
            tracing::warn!("{} {}: session token rejected: {e}", req.method(), req.uri());
            AuthError::InvalidCredential
        })?;

        req.extensions_mut().insert(AuthUser::from(claims));

        Ok(next.run(req).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::IdentityClaims;
    use crate::auth::ownership::check_ownership;
    use axum::body::Body;
    use axum::extract::Query;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Extension, Router};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct OwnerQuery {
        email: Option<String>,
    }

    async fn whoami(
        Extension(user): Extension<AuthUser>,
        Query(query): Query<OwnerQuery>,
    ) -> Result<String, AuthError> {
        check_ownership(&user, query.email.as_deref())?;
        Ok(user.email)
    }

    fn protected_app(secret: &str) -> Router {
        let token_service = Arc::new(TokenService::new(secret));
        Router::new().route("/private", get(whoami)).route_layer(
            middleware::from_fn_with_state(token_service, AuthMiddleware::require_session),
        )
    }

    fn issue_cookie(secret: &str, email: &str) -> String {
        let token = TokenService::new(secret)
            .issue(IdentityClaims {
                email: email.to_string(),
                extra: serde_json::Map::new(),
            })
            .unwrap();
        format!("{SESSION_COOKIE}={token}")
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn missing_cookie_is_unauthorized() {
        let response = protected_app("secret")
            .oneshot(
                Request::builder()
                    .uri("/private?email=a@x.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_text(response).await.contains("unauthorized access"));
    }

    #[tokio::test]
    async fn invalid_cookie_gets_the_same_body_as_missing() {
        let missing = protected_app("secret")
            .oneshot(
                Request::builder()
                    .uri("/private?email=a@x.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Token signed with a different secret
        let invalid = protected_app("secret")
            .oneshot(
                Request::builder()
                    .uri("/private?email=a@x.com")
                    .header(header::COOKIE, issue_cookie("other_secret", "a@x.com"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(missing).await, body_text(invalid).await);
    }

    #[tokio::test]
    async fn valid_cookie_reaches_the_handler() {
        let response = protected_app("secret")
            .oneshot(
                Request::builder()
                    .uri("/private?email=a@x.com")
                    .header(header::COOKIE, issue_cookie("secret", "a@x.com"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "a@x.com");
    }

    #[tokio::test]
    async fn mismatched_identity_is_forbidden() {
        let response = protected_app("secret")
            .oneshot(
                Request::builder()
                    .uri("/private?email=b@x.com")
                    .header(header::COOKIE, issue_cookie("secret", "a@x.com"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_text(response).await.contains("Forbidden Access"));
    }
}
