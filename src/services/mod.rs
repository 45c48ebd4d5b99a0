//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! Each is a set of explicit query functions over the injected pool,
//! returning plain data; there is no shared session or tracking state.

pub mod auth_service;
pub mod rating_service;
pub mod restaurant_service;
