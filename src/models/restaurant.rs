//! Restaurant data models and API response types.
//!
//! Restaurants are read-only through the API: rows are created by
//! migrations, and the endpoints only list and fetch them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents a restaurant record from the database.
///
/// # Database Table
///
/// Maps to the `restaurants` table. The address is owned by the restaurant
/// and stored flattened in `address_*` columns; it is re-nested in the
/// response projection.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Restaurant {
    /// Unique identifier for this restaurant
    pub id: Uuid,

    /// Display name
    pub name: String,

    pub address_street: String,

    pub address_city: String,

    pub address_postal_code: String,

    pub address_country: String,

    /// Timestamp when the restaurant was created
    pub created_at: DateTime<Utc>,
}

/// A postal address owned by a single restaurant.
#[derive(Debug, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Response body for restaurant endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Trattoria del Ponte",
///   "address": {
///     "street": "Via Roma 12",
///     "city": "Torino",
///     "postal_code": "10121",
///     "country": "Italy"
///   },
///   "created_at": "2025-06-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct RestaurantResponse {
    pub id: Uuid,

    pub name: String,

    /// The restaurant's address as a nested object
    pub address: Address,

    pub created_at: DateTime<Utc>,
}

/// Convert a database Restaurant to the API response shape.
impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: Address {
                street: restaurant.address_street,
                city: restaurant.address_city,
                postal_code: restaurant.address_postal_code,
                country: restaurant.address_country,
            },
            created_at: restaurant.created_at,
        }
    }
}
