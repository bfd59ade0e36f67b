//! User handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use super::parse_id;
use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{Entity, NewUser};
use crate::errors::AppResult;
use crate::types::{Envelope, ErrorResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List all users with their user type name
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Array of users"),
        (status = 404, description = "No users", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Envelope {
    state.clinic.fetch(Entity::Users, None, None).await
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Array holding the user"),
        (status = 400, description = "Invalid user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "user")?;
    Ok(state.clinic.fetch(Entity::Users, Some(id), None).await)
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "Array holding the stored user"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Insert or read-back failed", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> Envelope {
    state.clinic.create_user(payload).await
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "user")?;
    Ok(state.clinic.delete(Entity::Users, id).await)
}
