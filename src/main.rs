//! Restaurant Service - Main Application Entry Point
//!
//! This is a REST API server exposing restaurants, ratings, events, and user
//! authentication. Listing endpoints are public; submitting ratings, creating
//! events, and the current-user endpoint require a bearer token obtained from
//! the login endpoint.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: JWT bearer tokens (HS256) with bcrypt-hashed passwords
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let server_port = config.server_port;
    let state = AppState::new(pool, config);

    // Create authenticated routes (bearer token required)
    let authenticated_routes = Router::new()
        .route(
            "/restaurants/{id}/ratings",
            post(handlers::ratings::rate_restaurant),
        )
        .route("/me", get(handlers::me::current_user))
        .route("/events", post(handlers::events::create_event))
        .route("/events/{id}", get(handlers::events::get_event))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    // Combine public routes with the authenticated group
    let app = Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .route(
            "/restaurants",
            get(handlers::restaurants::list_restaurants),
        )
        .route(
            "/restaurants/{id}",
            get(handlers::restaurants::get_restaurant),
        )
        .route(
            "/restaurants/{id}/ratings",
            get(handlers::ratings::list_ratings),
        )
        .route(
            "/restaurants/{id}/ratings/{rating_id}",
            get(handlers::ratings::get_rating),
        )
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/events", get(handlers::events::list_events))
        // Merge authenticated routes
        .merge(authenticated_routes)
        // Browser clients may call from any origin
        .layer(CorsLayer::permissive())
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share pool and configuration with all handlers via State extraction
        .with_state(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{server_port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
