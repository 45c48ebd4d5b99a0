//! Event data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority values accepted for an event.
pub const EVENT_PRIORITIES: [&str; 3] = ["low", "standard", "high"];

/// Represents an event record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Event {
    pub id: Uuid,

    pub name: String,

    /// When the event takes place
    pub starts_at: DateTime<Utc>,

    /// "low", "standard", or "high"; may be absent
    pub priority: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Request body for creating an event.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Wine tasting",
///   "starts_at": "2025-07-01T18:00:00Z",
///   "priority": "standard"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,

    pub starts_at: DateTime<Utc>,

    /// Optional; must be one of `EVENT_PRIORITIES` when present
    pub priority: Option<String>,
}

/// Response body for event endpoints.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub priority: Option<String>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            starts_at: event.starts_at,
            priority: event.priority,
        }
    }
}
