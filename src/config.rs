//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `JWT_SECURITY_KEY` (required): symmetric key used to sign bearer tokens
/// - `JWT_ISSUER` (required): `iss` value stamped into and expected from tokens
/// - `JWT_AUDIENCE` (required): `aud` value stamped into and expected from tokens
/// - `JWT_EXPIRATION_MINUTES` (optional): token lifetime, defaults to 60
/// - `MIN_PASSWORD_LENGTH` (optional): registration password policy, defaults to 6
/// - `REQUIRE_UNIQUE_EMAIL` (optional): registration uniqueness pre-check, defaults to true
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    pub jwt_security_key: String,

    pub jwt_issuer: String,

    pub jwt_audience: String,

    #[serde(default = "default_expiration_minutes")]
    pub jwt_expiration_minutes: i64,

    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    #[serde(default = "default_require_unique_email")]
    pub require_unique_email: bool,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

/// Default token lifetime in minutes.
fn default_expiration_minutes() -> i64 {
    60
}

/// Default minimum password length enforced at registration.
fn default_min_password_length() -> usize {
    6
}

/// Registration rejects already-used email addresses unless disabled.
fn default_require_unique_email() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: jwt_issuer -> JWT_ISSUER
        envy::from_env::<Config>()
    }
}
