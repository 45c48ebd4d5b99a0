//! Data models representing database entities and API types.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response projections exposed over HTTP.

/// JWT claim set for issued tokens
pub mod claims;
/// Event model
pub mod event;
/// Paginated list envelope and query parameters
pub mod list_result;
/// Rating model and author projection
pub mod rating;
/// Restaurant model with owned address
pub mod restaurant;
/// User identity model and auth request/response types
pub mod user;
