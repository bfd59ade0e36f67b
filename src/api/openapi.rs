//! OpenAPI documentation served through Swagger UI.

use utoipa::OpenApi;

use crate::api::handlers::{assignment_handler, reference_handler, user_handler};
use crate::domain::{NewUser, StatusChange};
use crate::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MindLog API",
        version = "0.1.0",
        description = "Users, reference data and therapist/patient assignments for the MindLog clinic"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::delete_user,
        reference_handler::list_user_types,
        reference_handler::get_user_type,
        reference_handler::list_statuses,
        reference_handler::get_status,
        assignment_handler::list_assignments,
        assignment_handler::get_assignment,
        assignment_handler::assignments_by_therapist,
        assignment_handler::assignments_by_patient,
        assignment_handler::assignments_by_status,
        assignment_handler::update_assignment_status,
        assignment_handler::delete_assignment,
    ),
    components(schemas(NewUser, StatusChange, ErrorResponse)),
    tags(
        (name = "Users", description = "Clinic users"),
        (name = "Reference data", description = "User types and assignment statuses"),
        (name = "Assignments", description = "Therapist/patient assignments")
    )
)]
pub struct ApiDoc;
