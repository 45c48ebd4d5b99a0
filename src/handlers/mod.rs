//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Registration and login endpoints
pub mod auth;
/// Event endpoints
pub mod events;
/// Health check endpoint
pub mod health;
/// Current-user endpoint
pub mod me;
/// Rating endpoints
pub mod ratings;
/// Restaurant endpoints
pub mod restaurants;
