//! User identity models and authentication API types.
//!
//! This module defines:
//! - `User`: database entity for a stored identity
//! - `AuthenticatedPrincipal`: the request-scoped projection built at login
//! - Register/login request bodies and their responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. The password is stored as a bcrypt hash;
/// the plaintext never touches the database.
///
/// # Username and Email
///
/// The two are interchangeable: registration stores the email in both
/// columns, and projections treat a missing username as equal to the email
/// (and vice versa).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Stable unique identifier, embedded in tokens as the subject id
    pub id: Uuid,

    pub email: String,

    /// Login name; falls back to the email when absent
    pub username: Option<String>,

    /// bcrypt hash of the user's password
    pub password_hash: String,

    /// Required, at most 256 characters
    pub first_name: String,

    /// Optional, at most 256 characters
    pub last_name: Option<String>,
}

/// The verified identity of a caller, assembled fresh per login.
///
/// Never persisted: this is a projection over the stored user record plus
/// its role assignments and supplemental claims, consumed by token
/// issuance.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub id: Uuid,

    /// Always present: the stored username, or the email when unset
    pub username: String,

    /// Always present: the stored email, or the username when unset
    pub email: String,

    pub first_name: String,

    pub last_name: Option<String>,

    /// Assigned role names, zero or more
    pub roles: Vec<String>,

    /// Supplemental claims attached to the identity, passed through
    /// verbatim into issued tokens
    pub claims: Vec<(String, String)>,
}

impl AuthenticatedPrincipal {
    /// Project a stored user into a principal, applying the
    /// username/email coalescing rule.
    pub fn from_user(user: &User, roles: Vec<String>, claims: Vec<(String, String)>) -> Self {
        let username = user.username.clone().unwrap_or_else(|| user.email.clone());

        Self {
            id: user.id,
            username,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            roles,
            claims,
        }
    }
}

/// Request body for registering a new identity.
///
/// # JSON Example
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
/// # Validation
///
/// - `email`: required, must look like an e-mail address, must be unused
/// - `password`: at least the configured minimum length
/// - `first_name`: required, at most 256 characters
/// - `last_name`: optional, at most 256 characters
///
/// All violations are collected and reported together.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,

    pub password: String,

    pub first_name: String,

    pub last_name: Option<String>,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Identifier assigned to the new identity
    pub id: Uuid,

    pub email: String,
}

/// Request body for logging in.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "maria.rossi@example.com",
///   "password": "s3cret!"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email or username, matched case-insensitively
    pub email: String,

    pub password: String,
}

/// Response body for a successful login.
///
/// # JSON Example
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIs...",
///   "expires_at": "2025-06-10T20:30:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Encoded bearer token for the `Authorization` header
    pub token: String,

    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Response body for the current-user endpoint.
///
/// Built entirely from the verified token's claims; no database round-trip.
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub user_name: String,
    pub first_name: String,

    /// Empty string when the user has no last name
    pub last_name: String,

    pub email: String,

    /// Role names carried by the presented token
    pub roles: Vec<String>,
}

impl From<CurrentUser> for CurrentUserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            id: user.id,
            user_name: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            roles: user.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user(username: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "maria@example.com".to_string(),
            username: username.map(str::to_string),
            password_hash: "$2b$10$hash".to_string(),
            first_name: "Maria".to_string(),
            last_name: None,
        }
    }

    #[test]
    fn missing_username_falls_back_to_email() {
        let principal = AuthenticatedPrincipal::from_user(&stored_user(None), vec![], vec![]);

        assert_eq!(principal.username, "maria@example.com");
        assert_eq!(principal.email, "maria@example.com");
    }

    #[test]
    fn stored_username_is_preserved() {
        let principal =
            AuthenticatedPrincipal::from_user(&stored_user(Some("maria")), vec![], vec![]);

        assert_eq!(principal.username, "maria");
        assert_eq!(principal.email, "maria@example.com");
    }
}
