//! Rating service - listing, lookup, and submission logic.
//!
//! This service handles:
//! - Paginated rating listings with overflow detection
//! - Parent-scoped single-rating lookup
//! - Rating submission with average recomputation
//!
//! # Pagination
//!
//! Listings run two queries on purpose: an exact COUNT for UI pagination
//! controls, and a fetch of one row more than the page size to detect
//! whether a next page exists without a separate existence query. Do not
//! collapse either one into the other; the total-count contract requires
//! the exact number.

use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        list_result::ListResult,
        rating::{NewRatingResponse, RatingResponse, RatingWithAuthor},
    },
};

/// Fetch one page of ratings for a restaurant, newest first.
///
/// # Algorithm
///
/// 1. Count all ratings for the restaurant (the exact total)
/// 2. Fetch `items_per_page + 1` rows ordered by `created_at DESC`,
///    skipping `page_index * items_per_page`
/// 3. If the extra row came back, drop it and set `has_more`
/// 4. Project each row to its public shape (author reduced to a display
///    name)
///
/// Ordering ties on `created_at` resolve in storage-native order, which is
/// unspecified but stable within a running process.
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `restaurant_id` - Parent restaurant
/// * `page_index` - Zero-based page number (validated by the caller)
/// * `items_per_page` - Page size, must be positive (validated by the caller)
pub async fn list_ratings(
    pool: &DbPool,
    restaurant_id: Uuid,
    page_index: i64,
    items_per_page: i64,
) -> Result<ListResult<RatingResponse>, AppError> {
    tracing::debug!(%restaurant_id, page_index, items_per_page, "listing ratings");

    let total_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM ratings WHERE restaurant_id = $1")
            .bind(restaurant_id)
            .fetch_one(pool)
            .await?;

    // Fetch one row beyond the page size to detect a next page
    let rows = sqlx::query_as::<_, RatingWithAuthor>(
        r#"
        SELECT r.id, r.score, r.comment, r.created_at, u.first_name, u.last_name
        FROM ratings r
        JOIN users u ON u.id = r.user_id
        WHERE r.restaurant_id = $1
        ORDER BY r.created_at DESC
        OFFSET $2
        LIMIT $3
        "#,
    )
    .bind(restaurant_id)
    .bind(page_index * items_per_page)
    .bind(items_per_page + 1)
    .fetch_all(pool)
    .await?;

    let result = ListResult::from_overfetch(rows, items_per_page as usize, total_count);

    Ok(ListResult {
        items: result.items.into_iter().map(Into::into).collect(),
        total_count: result.total_count,
        has_more: result.has_more,
    })
}

/// Fetch a single rating scoped to its restaurant.
///
/// The rating must belong to the given restaurant: a rating that exists
/// under a different restaurant is reported as absent, exactly like a
/// non-existent id.
pub async fn get_rating(
    pool: &DbPool,
    restaurant_id: Uuid,
    rating_id: Uuid,
) -> Result<Option<RatingResponse>, AppError> {
    let row = sqlx::query_as::<_, RatingWithAuthor>(
        r#"
        SELECT r.id, r.score, r.comment, r.created_at, u.first_name, u.last_name
        FROM ratings r
        JOIN users u ON u.id = r.user_id
        WHERE r.id = $1 AND r.restaurant_id = $2
        "#,
    )
    .bind(rating_id)
    .bind(restaurant_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

/// Persist a new rating and return the recomputed average.
///
/// # Process
///
/// 1. Verify the restaurant exists (404 otherwise)
/// 2. Insert the rating with a server-assigned id and timestamp; the
///    creation time is NOW() at the database, never client-supplied
/// 3. Recompute the arithmetic mean over ALL ratings for the restaurant
///    with a fresh aggregate query, including the row just inserted
/// 4. Round to 2 decimals and return it with the restaurant id
///
/// The average is deliberately not maintained incrementally: the fresh
/// aggregate is always consistent with the persisted state at read time.
/// Two concurrent submissions may each observe a different committed
/// snapshot; no extra locking is added here, the storage engine's
/// isolation (read-committed or stronger) is the contract.
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `restaurant_id` - Restaurant being rated
/// * `user_id` - Authoring user, taken from the verified token
/// * `score` - Score between 0 and 5 (validated by the caller)
/// * `comment` - Optional free-text comment
pub async fn submit_rating(
    pool: &DbPool,
    restaurant_id: Uuid,
    user_id: Uuid,
    score: f64,
    comment: Option<String>,
) -> Result<NewRatingResponse, AppError> {
    let restaurant_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM restaurants WHERE id = $1)")
            .bind(restaurant_id)
            .fetch_one(pool)
            .await?;

    if !restaurant_exists {
        return Err(AppError::NotFound);
    }

    sqlx::query(
        r#"
        INSERT INTO ratings (restaurant_id, user_id, score, comment)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(restaurant_id)
    .bind(user_id)
    .bind(score)
    .bind(comment)
    .execute(pool)
    .await?;

    // Fresh aggregate over the full set, including the new row
    let average: Option<f64> =
        sqlx::query_scalar("SELECT AVG(score) FROM ratings WHERE restaurant_id = $1")
            .bind(restaurant_id)
            .fetch_one(pool)
            .await?;

    // At least the just-inserted row exists, so NULL cannot happen here;
    // fall back to the submitted score rather than panic
    let average_score = round_score(average.unwrap_or(score));

    tracing::debug!(%restaurant_id, average_score, "rating submitted");

    Ok(NewRatingResponse {
        restaurant_id,
        average_score,
    })
}

/// Round a score to 2 decimal places.
///
/// Ties round half away from zero (`f64::round` semantics): 4.125 becomes
/// 4.13. This tie-break rule is fixed; changing it changes the API contract.
pub fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_known_scores_rounds_to_two_decimals() {
        // Restaurant with ratings [5, 4, 3], then a 4 is submitted
        let average = (5.0 + 4.0 + 3.0 + 4.0) / 4.0;
        assert_eq!(round_score(average), 4.0);
    }

    #[test]
    fn ties_round_half_away_from_zero() {
        // 4.125 is exactly representable, so this pins the tie-break rule
        assert_eq!(round_score(4.125), 4.13);
    }

    #[test]
    fn extra_digits_are_dropped() {
        assert_eq!(round_score(3.14159), 3.14);
        assert_eq!(round_score(4.666666666), 4.67);
    }

    #[test]
    fn whole_numbers_are_unchanged() {
        assert_eq!(round_score(5.0), 5.0);
        assert_eq!(round_score(0.0), 0.0);
    }
}
