//! HTTP request handlers.

pub mod assignment_handler;
pub mod reference_handler;
pub mod user_handler;

pub use assignment_handler::assignment_routes;
pub use reference_handler::{status_routes, user_type_routes};
pub use user_handler::user_routes;

use crate::errors::{AppError, AppResult};

/// Parse a path identifier. Anything but a positive integer is rejected
/// before it can reach a query.
pub(crate) fn parse_id(raw: &str, label: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request(format!("Invalid {} id", label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("42", "user").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        for raw in ["", "abc", "1; DROP TABLE Users", "0", "-3", "4.5"] {
            let err = parse_id(raw, "assignment").unwrap_err();
            assert_eq!(err.to_string(), "Invalid assignment id");
        }
    }
}
