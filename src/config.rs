//! Configuration module for environment variables and application settings
//!
//! Resolved once at startup and passed explicitly into server construction;
//! nothing re-reads the environment per request.

use anyhow::{anyhow, Result};
use std::env;

use crate::auth::cookie::Environment;

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,

    /// Connection string for the postgres store
    pub database_url: String,

    /// Deployment environment flag driving cookie attributes
    pub environment: Environment,

    /// Origins allowed to send credentialed cross-origin requests
    pub cors_origins: Vec<String>,

    /// Server configuration
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow!("JWT_SECRET environment variable is required"))?,

            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow!("DATABASE_URL environment variable is required"))?,

            environment: Environment::from_env_value(
                &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            ),

            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:5173,http://localhost:5174".to_string()
                })
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),

            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
        })
    }
}
