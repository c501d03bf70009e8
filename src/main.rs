//! # Car Doctor Server
//!
//! Backend for a car-service booking application: a services catalogue,
//! booking CRUD, and cookie-based JWT authentication limiting each user
//! to their own bookings.
//!
//! ## Architecture
//! - `server`: server construction and route wiring
//! - `config`: environment variable configuration, resolved once at startup
//! - `auth`: token service, cookie policy, middleware, ownership guard
//! - `database`: PostgreSQL store behind an injected connection handle
//! - `routes`: HTTP handlers organized by functionality
//!
//! ## Running the Server
//! ```bash
//! JWT_SECRET=... DATABASE_URL=postgres://... cargo run
//! ```

mod auth;
mod config;
mod database;
mod routes;
mod server;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = config::Config::from_env()?;
    server::start(config).await
}
