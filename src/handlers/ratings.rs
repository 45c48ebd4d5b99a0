//! Rating HTTP handlers.
//!
//! This module implements the rating-related API endpoints:
//! - GET /restaurants/:id/ratings - Paginated ratings for a restaurant
//! - GET /restaurants/:id/ratings/:ratingId - Get a single rating
//! - POST /restaurants/:id/ratings - Submit a rating (authenticated)

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::auth::CurrentUser,
    models::{
        list_result::{ListQuery, ListResult},
        rating::{NewRatingResponse, RatingRequest, RatingResponse},
    },
    services::rating_service,
    state::AppState,
};

/// Get the paginated ratings of a restaurant.
///
/// # Endpoint
///
/// `GET /restaurants/{id}/ratings?page=0&size=20`
///
/// # Response (200)
///
/// ```json
/// {
///   "items": [
///     {
///       "id": "770e8400-...",
///       "score": 4.5,
///       "comment": "Great pasta",
///       "created_at": "2025-06-10T19:30:00Z",
///       "user": "Maria Rossi"
///     }
///   ],
///   "total_count": 57,
///   "has_more": true
/// }
/// ```
///
/// A page index past the end returns an empty `items` array with
/// `has_more: false` and the correct `total_count`. Invalid paging
/// parameters (negative page, non-positive size) are rejected with 400.
pub async fn list_ratings(
    State(state): State<AppState>,
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResult<RatingResponse>>, AppError> {
    query.validate()?;

    let result =
        rating_service::list_ratings(&state.pool, restaurant_id, query.page, query.size).await?;

    Ok(Json(result))
}

/// Get a single rating of a restaurant.
///
/// # Endpoint
///
/// `GET /restaurants/{id}/ratings/{ratingId}`
///
/// # Security Note
///
/// The lookup filters by BOTH the rating id AND the restaurant id. A
/// rating that exists under a different restaurant returns the same 404
/// as a missing one, so callers cannot probe for ratings across
/// restaurants.
pub async fn get_rating(
    State(state): State<AppState>,
    Path((restaurant_id, rating_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<RatingResponse>, AppError> {
    let rating = rating_service::get_rating(&state.pool, restaurant_id, rating_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(rating))
}

/// Submit a new rating for a restaurant.
///
/// # Endpoint
///
/// `POST /restaurants/{id}/ratings`
///
/// # Authentication
///
/// Requires a valid bearer token; the authoring user is taken from the
/// token, never from the request body.
///
/// # Request Body
///
/// ```json
/// {
///   "score": 4.5,
///   "comment": "Great pasta"
/// }
/// ```
///
/// # Response (200)
///
/// The restaurant's recomputed average, including this rating:
///
/// ```json
/// {
///   "restaurant_id": "550e8400-...",
///   "average_score": 4.13
/// }
/// ```
///
/// # Validation
///
/// - Score must be between 0 and 5 (boundary check here, CHECK constraint
///   in the database)
/// - Restaurant must exist (404 otherwise)
pub async fn rate_restaurant(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(restaurant_id): Path<Uuid>,
    Json(request): Json<RatingRequest>,
) -> Result<Json<NewRatingResponse>, AppError> {
    // Score bounds are a caller-boundary precondition
    if !(0.0..=5.0).contains(&request.score) {
        return Err(AppError::InvalidRequest(
            "Score must be between 0 and 5".to_string(),
        ));
    }

    let result = rating_service::submit_rating(
        &state.pool,
        restaurant_id,
        user.id,
        request.score,
        request.comment,
    )
    .await?;

    Ok(Json(result))
}
