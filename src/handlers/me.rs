//! Current-user endpoint.

use axum::{Extension, Json};

use crate::{middleware::auth::CurrentUser, models::user::CurrentUserResponse};

/// Return information about the currently logged user.
///
/// # Endpoint
///
/// `GET /me` (bearer required)
///
/// The response is built entirely from the verified token's claims; no
/// database query runs.
pub async fn current_user(Extension(user): Extension<CurrentUser>) -> Json<CurrentUserResponse> {
    Json(user.into())
}
