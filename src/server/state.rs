//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! through Axum's state extraction. All fields are cheap to clone; the
//! database connection is a pooled handle.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::auth::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies the bearer tokens used for ownership checks.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenService::new(&config.jwt_secret),
        }
    }
}
