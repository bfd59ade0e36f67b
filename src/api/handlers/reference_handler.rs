//! Read-only reference data: user types and assignment statuses.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use super::parse_id;
use crate::api::AppState;
use crate::domain::Entity;
use crate::errors::AppResult;
use crate::types::{Envelope, ErrorResponse};

/// Create user type routes
pub fn user_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_user_types))
        .route("/:id", get(get_user_type))
}

/// Create status routes
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_statuses))
        .route("/:id", get(get_status))
}

/// List user types
#[utoipa::path(
    get,
    path = "/api/user-types",
    tag = "Reference data",
    responses(
        (status = 200, description = "Array of user types"),
        (status = 404, description = "No user types", body = ErrorResponse)
    )
)]
pub async fn list_user_types(State(state): State<AppState>) -> Envelope {
    state.clinic.fetch(Entity::UserTypes, None, None).await
}

/// Get user type by ID
#[utoipa::path(
    get,
    path = "/api/user-types/{id}",
    tag = "Reference data",
    params(
        ("id" = i64, Path, description = "User type ID")
    ),
    responses(
        (status = 200, description = "Array holding the user type"),
        (status = 400, description = "Invalid user type id", body = ErrorResponse),
        (status = 404, description = "User type not found", body = ErrorResponse)
    )
)]
pub async fn get_user_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "user type")?;
    Ok(state.clinic.fetch(Entity::UserTypes, Some(id), None).await)
}

/// List assignment statuses
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Reference data",
    responses(
        (status = 200, description = "Array of statuses"),
        (status = 404, description = "No statuses", body = ErrorResponse)
    )
)]
pub async fn list_statuses(State(state): State<AppState>) -> Envelope {
    state.clinic.fetch(Entity::Status, None, None).await
}

/// Get status by ID
#[utoipa::path(
    get,
    path = "/api/status/{id}",
    tag = "Reference data",
    params(
        ("id" = i64, Path, description = "Status ID")
    ),
    responses(
        (status = 200, description = "Array holding the status"),
        (status = 400, description = "Invalid status id", body = ErrorResponse),
        (status = 404, description = "Status not found", body = ErrorResponse)
    )
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "status")?;
    Ok(state.clinic.fetch(Entity::Status, Some(id), None).await)
}
