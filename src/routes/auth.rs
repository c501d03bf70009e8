//! Auth routes for session issuance and logout
//!
//! The token itself is the session: `POST /auth/jwt` signs the caller's
//! identity claims into a cookie, `POST /auth/logout` overwrites that
//! cookie with an immediately-expiring one. No server-side session state.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::CookieJar;
use serde_json::json;

use crate::auth::models::IdentityClaims;
use crate::server::{AppState, AuthState};

/// Issue a session token for the supplied identity claims and set it as
/// the session cookie.
pub async fn issue_token(
    State(state): State<AuthState>,
    jar: CookieJar,
    Json(identity): Json<IdentityClaims>,
) -> Result<impl IntoResponse, StatusCode> {
    tracing::info!("issuing session token for {}", identity.email);

    let token = state.token_service.issue(identity).map_err(|e| {
        tracing::error!("failed to issue session token: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let jar = jar.add(state.cookie_policy.session_cookie(token));
    Ok((jar, Json(json!({ "success": true }))))
}

/// Clear the session cookie. The token is stateless, so logout is purely
/// a client-side invalidation.
pub async fn logout(State(state): State<AuthState>, jar: CookieJar) -> impl IntoResponse {
    tracing::info!("user logout");
    let jar = jar.add(state.cookie_policy.removal_cookie());
    (jar, Json(json!({ "success": true })))
}

pub fn create_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/jwt", post(issue_token))
        .route("/auth/logout", post(logout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::cookie::{CookiePolicy, Environment};
    use crate::auth::jwt::TokenService;
    use crate::auth::middleware::AuthMiddleware;
    use crate::auth::models::AuthUser;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Extension};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn session_app(secret: &str) -> Router {
        let token_service = Arc::new(TokenService::new(secret));
        let auth_state = AuthState {
            token_service: token_service.clone(),
            cookie_policy: CookiePolicy::new(Environment::Development),
        };

        let auth_routes = Router::new()
            .route("/auth/jwt", post(issue_token))
            .route("/auth/logout", post(logout))
            .with_state(auth_state);

        let protected = Router::new()
            .route(
                "/api/bookings",
                get(|Extension(user): Extension<AuthUser>| async move { user.email }),
            )
            .route_layer(middleware::from_fn_with_state(
                token_service,
                AuthMiddleware::require_session,
            ));

        Router::new().merge(auth_routes).merge(protected)
    }

    fn set_cookie(response: &axum::response::Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn login_then_logout_invalidates_the_session() {
        let app = session_app("secret");

        // Log in and capture the session cookie
        let login = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/jwt")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"email":"a@x.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(login.status(), StatusCode::OK);
        let session = set_cookie(&login);
        let cookie_pair = session.split(';').next().unwrap().to_string();
        assert!(cookie_pair.starts_with("token="));
        assert!(cookie_pair.len() > "token=".len());

        // The cookie authenticates a protected request
        let listed = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/bookings")
                    .header(header::COOKIE, cookie_pair.clone())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(listed.status(), StatusCode::OK);

        // Logout overwrites the cookie with an immediately-expiring one,
        // so the client drops it
        let logout = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/logout")
                    .header(header::COOKIE, cookie_pair)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(logout.status(), StatusCode::OK);
        let cleared = set_cookie(&logout);
        assert!(cleared.starts_with("token=;"));
        assert!(cleared.contains("Max-Age=0"));

        // A subsequent protected request without a new login is rejected
        let denied = app
            .oneshot(
                Request::builder()
                    .uri("/api/bookings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
    }
}
