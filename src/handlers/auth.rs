//! Authentication HTTP handlers.
//!
//! This module implements the authentication endpoints:
//! - POST /auth/register - Sign up a new user
//! - POST /auth/login - Obtain a bearer token

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    models::user::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse},
    services::auth_service,
    state::AppState,
};

/// Sign up a new user.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "maria.rossi@example.com",
///   "password": "s3cret!",
///   "first_name": "Maria",
///   "last_name": "Rossi"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the new identity's id and email
/// - **Error (400)**: every field violation and uniqueness conflict,
///   reported together in one `errors` list
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let created = auth_service::register(&state.pool, &state.config, request).await?;

    Ok(Json(created))
}

/// Perform a login and obtain a new bearer token.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "maria.rossi@example.com",
///   "password": "s3cret!"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{token, expires_at}`
/// - **Error (400)**: generic authentication failure; the body does not
///   say whether the account exists or the password was wrong
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response =
        auth_service::login(&state.pool, &state.config, &request.email, &request.password).await?;

    Ok(Json(response))
}
