//! # Server Module
//!
//! HTTP server setup and route configuration.

use anyhow::{Context, Result};
use axum::extract::{FromRef, Request};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::auth::cookie::CookiePolicy;
use crate::auth::jwt::TokenService;
use crate::auth::middleware::AuthMiddleware;
use crate::config::Config;
use crate::database::{migrations, DatabaseConfig, DatabaseConnection};
use crate::routes::{auth, bookings, health, services};

/// Application state shared across all route handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatabaseConnection>,
    pub token_service: Arc<TokenService>,
    pub cookie_policy: CookiePolicy,
}

/// The slice of state the session routes need; they never touch the store.
#[derive(Clone)]
pub struct AuthState {
    pub token_service: Arc<TokenService>,
    pub cookie_policy: CookiePolicy,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            token_service: state.token_service.clone(),
            cookie_policy: state.cookie_policy.clone(),
        }
    }
}

/// Request-line logging applied to every route.
async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!("{} {}", req.method(), req.uri());
    next.run(req).await
}

/// Starts the HTTP server.
///
/// Constructs the token service, cookie policy, and database handle from
/// the given configuration, wires the routes, and serves until the process
/// is terminated.
pub async fn start(config: Config) -> Result<()> {
    let token_service = Arc::new(TokenService::new(&config.jwt_secret));
    let cookie_policy = CookiePolicy::new(config.environment);

    let db_config = DatabaseConfig::from_url(&config.database_url)
        .context("Failed to parse database URL")?;
    let store = Arc::new(
        DatabaseConnection::new(db_config)
            .await
            .context("Failed to connect to DB")?,
    );
    migrations::run_migrations(store.pool()).await?;

    let app_state = AppState {
        store,
        token_service: token_service.clone(),
        cookie_policy,
    };

    // Reading bookings requires authentication; the rest of the booking
    // surface and the services catalogue are open, as is session issuance.
    let protected_routes = Router::new()
        .route("/api/bookings", get(bookings::list_bookings))
        .route_layer(middleware::from_fn_with_state(
            token_service,
            AuthMiddleware::require_session,
        ));

    let open_routes = Router::new()
        .route("/", get(health::welcome))
        .route("/ping", get(health::ping))
        .route("/api/services", get(services::list_services))
        .route("/api/services/{id}", get(services::get_service))
        .route("/api/bookings", post(bookings::create_booking))
        .route(
            "/api/bookings/{id}",
            delete(bookings::delete_booking).patch(bookings::update_booking_status),
        )
        .merge(auth::create_auth_routes());

    let cors_origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let app = Router::new()
        .merge(open_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_origin(AllowOrigin::list(cors_origins))
                        .allow_methods([
                            axum::http::Method::GET,
                            axum::http::Method::POST,
                            axum::http::Method::PATCH,
                            axum::http::Method::DELETE,
                            axum::http::Method::OPTIONS,
                        ])
                        .allow_headers([
                            axum::http::header::ORIGIN,
                            axum::http::header::CONTENT_TYPE,
                            axum::http::header::ACCEPT,
                        ])
                        // Session cookies must survive cross-origin requests
                        .allow_credentials(true),
                )
                .layer(middleware::from_fn(log_request)),
        )
        .with_state(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Listening on http://{addr}");
    tracing::info!("Health check available at http://{addr}/ping");

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")
}
