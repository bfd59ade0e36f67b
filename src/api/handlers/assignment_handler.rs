//! Assignment handlers.
//!
//! An assignment links a therapist to a patient and carries a lifecycle
//! status. Besides lookup by id, assignments can be listed per therapist,
//! per patient or per status.

use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Router,
};

use super::parse_id;
use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{Entity, StatusChange};
use crate::errors::AppResult;
use crate::types::{Envelope, ErrorResponse};

/// Create assignment routes
pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments))
        .route("/therapist/:id", get(assignments_by_therapist))
        .route("/patient/:id", get(assignments_by_patient))
        .route("/status/:id", get(assignments_by_status))
        .route("/:id", get(get_assignment).delete(delete_assignment))
        .route("/:id/status", patch(update_assignment_status))
}

/// List all assignments with therapist, patient and status names
#[utoipa::path(
    get,
    path = "/api/assignments",
    tag = "Assignments",
    responses(
        (status = 200, description = "Array of assignments"),
        (status = 404, description = "No assignments", body = ErrorResponse)
    )
)]
pub async fn list_assignments(State(state): State<AppState>) -> Envelope {
    state.clinic.fetch(Entity::Assignments, None, None).await
}

/// Get assignment by ID
#[utoipa::path(
    get,
    path = "/api/assignments/{id}",
    tag = "Assignments",
    params(
        ("id" = i64, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Array holding the assignment"),
        (status = 400, description = "Invalid assignment id", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    )
)]
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "assignment")?;
    Ok(state.clinic.fetch(Entity::Assignments, Some(id), None).await)
}

/// Assignments held by a therapist
#[utoipa::path(
    get,
    path = "/api/assignments/therapist/{id}",
    tag = "Assignments",
    params(
        ("id" = i64, Path, description = "Therapist user ID")
    ),
    responses(
        (status = 200, description = "Array of assignments"),
        (status = 400, description = "Invalid therapist id", body = ErrorResponse),
        (status = 404, description = "No assignments for the therapist", body = ErrorResponse)
    )
)]
pub async fn assignments_by_therapist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "therapist")?;
    Ok(state
        .clinic
        .fetch(Entity::Assignments, Some(id), Some("therapist"))
        .await)
}

/// Assignments of a patient
#[utoipa::path(
    get,
    path = "/api/assignments/patient/{id}",
    tag = "Assignments",
    params(
        ("id" = i64, Path, description = "Patient user ID")
    ),
    responses(
        (status = 200, description = "Array of assignments"),
        (status = 400, description = "Invalid patient id", body = ErrorResponse),
        (status = 404, description = "No assignments for the patient", body = ErrorResponse)
    )
)]
pub async fn assignments_by_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "patient")?;
    Ok(state
        .clinic
        .fetch(Entity::Assignments, Some(id), Some("patient"))
        .await)
}

/// Assignments currently in a status
#[utoipa::path(
    get,
    path = "/api/assignments/status/{id}",
    tag = "Assignments",
    params(
        ("id" = i64, Path, description = "Status ID")
    ),
    responses(
        (status = 200, description = "Array of assignments"),
        (status = 400, description = "Invalid status id", body = ErrorResponse),
        (status = 404, description = "No assignments in the status", body = ErrorResponse)
    )
)]
pub async fn assignments_by_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "status")?;
    Ok(state
        .clinic
        .fetch(Entity::Assignments, Some(id), Some("status"))
        .await)
}

/// Change the status of an assignment
#[utoipa::path(
    patch,
    path = "/api/assignments/{id}/status",
    tag = "Assignments",
    params(
        ("id" = i64, Path, description = "Assignment ID")
    ),
    request_body = StatusChange,
    responses(
        (status = 200, description = "Array holding the updated assignment"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 500, description = "Update or read-back failed", body = ErrorResponse)
    )
)]
pub async fn update_assignment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<StatusChange>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "assignment")?;
    Ok(state.clinic.update_assignment_status(id, payload).await)
}

/// Delete assignment by ID
#[utoipa::path(
    delete,
    path = "/api/assignments/{id}",
    tag = "Assignments",
    params(
        ("id" = i64, Path, description = "Assignment ID")
    ),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 400, description = "Invalid assignment id", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    )
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope> {
    let id = parse_id(&id, "assignment")?;
    Ok(state.clinic.delete(Entity::Assignments, id).await)
}
