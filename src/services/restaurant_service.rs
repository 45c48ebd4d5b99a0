//! Restaurant service - read-only listing and lookup.

use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        list_result::ListResult,
        restaurant::{Restaurant, RestaurantResponse},
    },
};

/// Fetch one page of restaurants, ordered by name.
///
/// Same two-query shape as the ratings listing: an exact COUNT, then an
/// overfetch of one extra row for the has-more flag.
pub async fn list_restaurants(
    pool: &DbPool,
    page_index: i64,
    items_per_page: i64,
) -> Result<ListResult<RestaurantResponse>, AppError> {
    let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, Restaurant>(
        r#"
        SELECT id, name, address_street, address_city, address_postal_code, address_country, created_at
        FROM restaurants
        ORDER BY name ASC
        OFFSET $1
        LIMIT $2
        "#,
    )
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

/// Fetch a single restaurant by id.
pub async fn get_restaurant(
    pool: &DbPool,
    restaurant_id: Uuid,
) -> Result<Option<RestaurantResponse>, AppError> {
    let row = sqlx::query_as::<_, Restaurant>(
        r#"
        SELECT id, name, address_street, address_city, address_postal_code, address_country, created_at
        FROM restaurants
        WHERE id = $1
        "#,
    )
    .bind(restaurant_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}
