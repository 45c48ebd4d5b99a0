//! Shared application state.
//!
//! Handlers and middleware receive this via Axum's `State` extractor.
//! Cloning is cheap: the pool is internally reference-counted and the
//! configuration sits behind an `Arc`.

use std::sync::Arc;

use crate::{config::Config, db::DbPool};

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: DbPool,

    /// Application configuration (JWT settings, policies)
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
