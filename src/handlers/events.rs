//! Event HTTP handlers.
//!
//! This module implements the event endpoints:
//! - GET /events - The most recent events (public)
//! - GET /events/:id - Get a single event (authenticated)
//! - POST /events - Create an event (authenticated)

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::event::{CreateEventRequest, EVENT_PRIORITIES, Event, EventResponse},
    state::AppState,
};

/// How many events the list endpoint returns.
const EVENT_LIST_LIMIT: i64 = 42;

/// Get the events list.
///
/// # Endpoint
///
/// `GET /events`
///
/// Returns the last 42 events, most recent start time first.
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = sqlx::query_as::<_, Event>(
        r#"
        SELECT id, name, starts_at, priority, created_at
        FROM events
        ORDER BY starts_at DESC
        LIMIT $1
        "#,
    )
    .bind(EVENT_LIST_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// Get a specific event.
///
/// # Endpoint
///
/// `GET /events/{id}` (bearer required)
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<EventResponse>, AppError> {
    let event = sqlx::query_as::<_, Event>(
        "SELECT id, name, starts_at, priority, created_at FROM events WHERE id = $1",
    )
    .bind(event_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(event.into()))
}

/// Create an event.
///
/// # Endpoint
///
/// `POST /events` (bearer required)
///
/// # Response
///
/// 204 No Content on success.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<StatusCode, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Event name must not be empty".to_string(),
        ));
    }

    if let Some(priority) = &request.priority {
        if !EVENT_PRIORITIES.contains(&priority.as_str()) {
            return Err(AppError::InvalidRequest(format!(
                "Priority must be one of: {}",
                EVENT_PRIORITIES.join(", ")
            )));
        }
    }

    sqlx::query("INSERT INTO events (name, starts_at, priority) VALUES ($1, $2, $3)")
        .bind(&request.name)
        .bind(request.starts_at)
        .bind(&request.priority)
        .execute(&state.pool)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
