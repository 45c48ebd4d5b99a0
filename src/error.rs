//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Infrastructure Errors**: database, password hashing, or token signing failures
/// - **Authentication Errors**: failed logins and missing/invalid bearer tokens
/// - **Resource Errors**: requested resources not found
/// - **Validation Errors**: invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failed.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing failed during issuance.
    ///
    /// Decode failures on incoming requests are reported as `Unauthorized`
    /// instead; this variant only covers the encoding path.
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Bearer token is missing, malformed, expired, or has a bad signature.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid or missing bearer token")]
    Unauthorized,

    /// Login failed: unknown identity or wrong password.
    ///
    /// Returns HTTP 400 Bad Request with a deliberately generic message.
    /// The response never reveals which of the two checks failed.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Requested resource does not exist, or exists under a different parent.
    ///
    /// Returns HTTP 404 Not Found with an empty body. A rating that exists
    /// globally but under another restaurant is reported identically to a
    /// missing one.
    #[error("Resource not found")]
    NotFound,

    /// Request input violated one or more field constraints.
    ///
    /// Returns HTTP 400 Bad Request carrying every violation description,
    /// not just the first one.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// `NotFound` returns a bare 404 with no body. All other errors return JSON:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
/// `Validation` additionally carries an `errors` array with every violation.
///
/// # Status Code Mapping
///
/// - `Unauthorized` → 401 Unauthorized
/// - `AuthenticationFailed` → 400 Bad Request (generic)
/// - `NotFound` → 404 Not Found (empty body)
/// - `Validation` / `InvalidRequest` → 400 Bad Request
/// - `Database` / `PasswordHash` / `Token` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Not-found responses carry no body at all
        if matches!(self, AppError::NotFound) {
            return StatusCode::NOT_FOUND.into_response();
        }

        // Map each error variant to (HTTP status, error code, message, details)
        let (status, code, message, errors) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                self.to_string(),
                None,
            ),
            AppError::AuthenticationFailed => (
                StatusCode::BAD_REQUEST,
                "authentication_failed",
                self.to_string(),
                None,
            ),
            AppError::Validation(ref descriptions) => (
                StatusCode::BAD_REQUEST,
                "validation_failed",
                "One or more validation errors occurred".to_string(),
                Some(descriptions.clone()),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone(), None)
            }
            AppError::Database(_) | AppError::PasswordHash(_) | AppError::Token(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
                None,
            ),
            AppError::NotFound => unreachable!("handled above"),
        };

        // Build JSON response body
        let body = match errors {
            Some(errors) => Json(json!({
                "error": {
                    "code": code,
                    "message": message,
                    "errors": errors
                }
            })),
            None => Json(json!({
                "error": {
                    "code": code,
                    "message": message
                }
            })),
        };

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
