//! Restaurant HTTP handlers.
//!
//! This module implements the restaurant-related API endpoints:
//! - GET /restaurants - Paginated restaurant list
//! - GET /restaurants/:id - Get a single restaurant

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        list_result::{ListQuery, ListResult},
        restaurant::RestaurantResponse,
    },
    services::restaurant_service,
    state::AppState,
};

/// Get the paginated restaurants list.
///
/// # Endpoint
///
/// `GET /restaurants?page=0&size=20`
///
/// # Response (200)
///
/// ```json
/// {
///   "items": [
///     {
///       "id": "550e8400-...",
///       "name": "Trattoria del Ponte",
///       "address": {
///         "street": "Via Roma 12",
///         "city": "Torino",
///         "postal_code": "10121",
///         "country": "Italy"
///       },
///       "created_at": "2025-06-01T10:00:00Z"
///     }
///   ],
///   "total_count": 3,
///   "has_more": false
/// }
/// ```
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResult<RestaurantResponse>>, AppError> {
    query.validate()?;

    let result =
        restaurant_service::list_restaurants(&state.pool, query.page, query.size).await?;

    Ok(Json(result))
}

/// Get a specific restaurant.
///
/// # Endpoint
///
/// `GET /restaurants/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: the restaurant
/// - **Error (404)**: no restaurant with that id
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<Uuid>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = restaurant_service::get_restaurant(&state.pool, restaurant_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(restaurant))
}
