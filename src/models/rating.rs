//! Rating data models and API request/response types.
//!
//! This module defines:
//! - `RatingWithAuthor`: database row joined with the authoring user's name
//! - `RatingRequest`: request body for submitting a rating
//! - `RatingResponse`: public projection returned to clients
//! - `NewRatingResponse`: the recomputed average returned after a submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rating row joined with its author's name columns.
///
/// # Database Table
///
/// Maps to `ratings` joined with `users`. Once persisted, a rating's
/// restaurant, author, and timestamp never change; there are no update or
/// delete operations.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RatingWithAuthor {
    /// Unique identifier for this rating
    pub id: Uuid,

    /// Score between 0 and 5 (validated at the handler boundary and by a
    /// database CHECK constraint)
    pub score: f64,

    /// Optional free-text comment
    pub comment: Option<String>,

    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,

    /// Author's first name, from the joined user row
    pub first_name: String,

    /// Author's last name, may be absent
    pub last_name: Option<String>,
}

/// Request body for submitting a rating.
///
/// # JSON Example
///
/// ```json
/// {
///   "score": 4.5,
///   "comment": "Great pasta"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    /// Score between 0 and 5
    pub score: f64,

    /// Optional free-text comment
    pub comment: Option<String>,
}

/// Public projection of a rating.
///
/// The authoring user is reduced to a single display string; their id and
/// email are never exposed.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "score": 4.5,
///   "comment": "Great pasta",
///   "created_at": "2025-06-10T19:30:00Z",
///   "user": "Maria Rossi"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub id: Uuid,
    pub score: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,

    /// Author's display name; empty string when both name parts are blank
    pub user: String,
}

impl From<RatingWithAuthor> for RatingResponse {
    fn from(rating: RatingWithAuthor) -> Self {
        let user = display_name(&rating.first_name, rating.last_name.as_deref());

        Self {
            id: rating.id,
            score: rating.score,
            comment: rating.comment,
            created_at: rating.created_at,
            user,
        }
    }
}

/// Response returned after a rating submission.
///
/// # JSON Example
///
/// ```json
/// {
///   "restaurant_id": "550e8400-e29b-41d4-a716-446655440000",
///   "average_score": 4.13
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct NewRatingResponse {
    /// The rated restaurant
    pub restaurant_id: Uuid,

    /// Arithmetic mean of all scores for the restaurant, including the one
    /// just submitted, rounded to 2 decimals
    pub average_score: f64,
}

/// Join a user's first and last name into a single trimmed display string.
///
/// A missing or blank name yields an empty string, never null.
pub fn display_name(first_name: &str, last_name: Option<&str>) -> String {
    format!("{} {}", first_name, last_name.unwrap_or_default())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_first_and_last() {
        assert_eq!(display_name("Maria", Some("Rossi")), "Maria Rossi");
    }

    #[test]
    fn display_name_without_last_name_is_trimmed() {
        assert_eq!(display_name("Maria", None), "Maria");
        assert_eq!(display_name("Maria", Some("")), "Maria");
    }

    #[test]
    fn blank_names_yield_empty_string() {
        assert_eq!(display_name("", None), "");
        assert_eq!(display_name(" ", Some(" ")), "");
    }
}
