//! Query result envelope - the uniform outcome of every accessor call.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::JsonValue;
use serde::Serialize;

use super::response::ErrorResponse;
use crate::config::{MSG_NO_RECORDS, MSG_QUERY_FAILED, MSG_RECORDS_RECOVERED, MSG_VALIDATION_FAILED};
use crate::infra::QueryError;

/// Terminal state an accessor call ended in.
///
/// Not serialized; the request adapter uses it to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read returned one or more rows
    Recovered,
    /// Insert applied and read back
    Created,
    /// Update applied and read back
    Updated,
    /// Delete applied
    Deleted,
    /// Zero rows read, or zero rows affected by a targeted write
    NotFound,
    /// Input rejected before any statement was built
    ValidationFailure,
    /// Storage engine rejected or could not run the statement
    ExecutionFailure,
    /// Statement exceeded the configured query timeout
    Timeout,
    /// Write applied but the canonical re-read failed
    ReadbackInconsistency,
}

impl Outcome {
    /// HTTP status the adapter answers with.
    pub fn status_code(self) -> StatusCode {
        match self {
            Outcome::Recovered | Outcome::Updated => StatusCode::OK,
            Outcome::Created => StatusCode::CREATED,
            Outcome::Deleted => StatusCode::NO_CONTENT,
            Outcome::NotFound => StatusCode::NOT_FOUND,
            Outcome::ValidationFailure => StatusCode::BAD_REQUEST,
            Outcome::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Outcome::ExecutionFailure | Outcome::ReadbackInconsistency => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the write reached the store and should be committed.
    pub fn write_applied(self) -> bool {
        matches!(
            self,
            Outcome::Created | Outcome::Updated | Outcome::Deleted | Outcome::ReadbackInconsistency
        )
    }
}

/// `{ isSuccess, result, message }` returned by every accessor call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub is_success: bool,
    pub result: Option<Vec<JsonValue>>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip)]
    pub outcome: Outcome,
}

impl Envelope {
    fn failure(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            result: None,
            message: message.into(),
            errors: Vec::new(),
            outcome,
        }
    }

    /// Rows were found. An empty row set is classified as not found.
    pub fn recovered(rows: Vec<JsonValue>) -> Self {
        if rows.is_empty() {
            return Self::not_found(MSG_NO_RECORDS);
        }
        Self {
            is_success: true,
            result: Some(rows),
            message: MSG_RECORDS_RECOVERED.to_string(),
            errors: Vec::new(),
            outcome: Outcome::Recovered,
        }
    }

    /// A write applied; `rows` is its read-back (empty for deletes).
    pub fn mutated(outcome: Outcome, rows: Option<Vec<JsonValue>>, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            result: rows,
            message: message.into(),
            errors: Vec::new(),
            outcome,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(Outcome::NotFound, message)
    }

    pub fn validation_failure(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Self::failure(Outcome::ValidationFailure, MSG_VALIDATION_FAILED)
        }
    }

    /// The write went through but re-reading it did not.
    pub fn readback_failure(action: &str, inner: &str) -> Self {
        Self::failure(
            Outcome::ReadbackInconsistency,
            format!("Failed to recover the {} record: {}", action, inner),
        )
    }

    /// Wrap an executor error, keeping the driver message.
    pub fn from_query_error(err: &QueryError) -> Self {
        Self::from_query_error_with(MSG_QUERY_FAILED, err)
    }

    /// Like [`Envelope::from_query_error`] with a caller-chosen prefix for
    /// driver failures. Timeouts keep their own message.
    pub fn from_query_error_with(prefix: &str, err: &QueryError) -> Self {
        match err {
            QueryError::Driver(e) => {
                Self::failure(Outcome::ExecutionFailure, format!("{}: {}", prefix, e))
            }
            QueryError::Timeout(_) => Self::failure(Outcome::Timeout, err.to_string()),
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = self.outcome.status_code();

        if !self.is_success {
            let body = ErrorResponse {
                message: self.message,
                errors: self.errors,
            };
            return (status, Json(body)).into_response();
        }

        match self.result {
            Some(rows) if status != StatusCode::NO_CONTENT => (status, Json(rows)).into_response(),
            _ => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_rows_are_not_found() {
        let envelope = Envelope::recovered(vec![]);
        assert!(!envelope.is_success);
        assert!(envelope.result.is_none());
        assert_eq!(envelope.message, "No record(s) found");
        assert_eq!(envelope.outcome, Outcome::NotFound);
    }

    #[test]
    fn test_rows_are_recovered() {
        let envelope = Envelope::recovered(vec![json!({"statusID": 1}), json!({"statusID": 2})]);
        assert!(envelope.is_success);
        assert_eq!(envelope.result.as_ref().map(Vec::len), Some(2));
        assert_eq!(envelope.message, "Record(s) successfully recovered");
    }

    #[test]
    fn test_serializes_camel_case_without_outcome() {
        let envelope = Envelope::not_found("Assignment not found");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"isSuccess": false, "result": null, "message": "Assignment not found"})
        );
    }

    #[test]
    fn test_validation_failure_lists_errors() {
        let envelope = Envelope::validation_failure(vec!["email is required".to_string()]);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["message"], "Validation failed");
        assert_eq!(value["errors"], json!(["email is required"]));
        assert_eq!(envelope.outcome.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_driver_error_keeps_message() {
        let err = QueryError::Driver(sea_orm::DbErr::Custom("unknown column".to_string()));
        let envelope = Envelope::from_query_error(&err);
        assert_eq!(envelope.outcome, Outcome::ExecutionFailure);
        assert!(envelope.message.starts_with("Failed to execute query: "));
        assert!(envelope.message.contains("unknown column"));
    }

    #[test]
    fn test_timeout_is_distinct() {
        let err = QueryError::Timeout(Duration::from_millis(250));
        let envelope = Envelope::from_query_error(&err);
        assert_eq!(envelope.outcome, Outcome::Timeout);
        assert_eq!(envelope.message, "Query timed out after 250 ms");
        assert_eq!(envelope.outcome.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_readback_failure_embeds_inner_message() {
        let envelope = Envelope::readback_failure("inserted", "No record(s) found");
        assert_eq!(
            envelope.message,
            "Failed to recover the inserted record: No record(s) found"
        );
        assert!(envelope.outcome.write_applied());
    }

    #[test]
    fn test_failed_writes_are_not_committed() {
        assert!(!Outcome::ExecutionFailure.write_applied());
        assert!(!Outcome::NotFound.write_applied());
        assert!(!Outcome::Timeout.write_applied());
    }
}
