//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database (schema) name
pub const DEFAULT_DB_NAME: &str = "mindlog";

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default MySQL port
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Default database user
pub const DEFAULT_DB_USER: &str = "root";

/// Upper bound for a single statement, in milliseconds
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Accessor messages
// =============================================================================

/// Read returned zero rows
pub const MSG_NO_RECORDS: &str = "No record(s) found";

/// Read returned one or more rows
pub const MSG_RECORDS_RECOVERED: &str = "Record(s) successfully recovered";

/// Mutation applied and the canonical row was read back
pub const MSG_RECORD_RECOVERED: &str = "Record successfully recovered";

/// Delete applied
pub const MSG_RECORD_DELETED: &str = "Record successfully deleted";

/// Prefix for storage-engine failures
pub const MSG_QUERY_FAILED: &str = "Failed to execute query";

/// Prefix for a failed user delete
pub const MSG_USER_DELETE_FAILED: &str = "Failed to delete user";

/// Prefix for a failed assignment delete
pub const MSG_ASSIGNMENT_DELETE_FAILED: &str = "Failed to delete assignment";

/// Envelope message for rejected input
pub const MSG_VALIDATION_FAILED: &str = "Validation failed";

/// Targeted update/delete hit no assignment row
pub const MSG_ASSIGNMENT_NOT_FOUND: &str = "Assignment not found";

/// Targeted delete hit no user row
pub const MSG_USER_NOT_FOUND: &str = "User not found";
