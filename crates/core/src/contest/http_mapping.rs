//! Pure functions for mapping contest errors to HTTP status codes.

use super::ContestError;

/// Maps a [`ContestError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `StoreUnavailable` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use picker_core::contest::{contest_error_to_status_code, ContestError, ValidationError};
///
/// let error = ContestError::from(ValidationError::MissingPickFields);
/// assert_eq!(contest_error_to_status_code(&error), 400);
/// ```
pub fn contest_error_to_status_code(error: &ContestError) -> u16 {
    match error {
        ContestError::Validation(_) => 400,
        ContestError::StoreUnavailable(_) => 500,
    }
}

/// Message safe to return to API callers.
///
/// Validation messages are passed through; store failures are reduced to a
/// generic message.
pub fn contest_error_message(error: &ContestError) -> String {
    match error {
        ContestError::Validation(err) => err.to_string(),
        ContestError::StoreUnavailable(_) => "Internal server error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contest::ValidationError;
    use crate::storage::RepositoryError;

    #[test]
    fn test_validation_maps_to_400() {
        let error = ContestError::from(ValidationError::MissingResultFields);
        assert_eq!(contest_error_to_status_code(&error), 400);
        assert_eq!(
            contest_error_message(&error),
            "Missing required fields: week, results"
        );
    }

    #[test]
    fn test_connection_failure_maps_to_500() {
        let error = ContestError::from(RepositoryError::ConnectionFailed(
            "dial tcp: refused".to_string(),
        ));
        assert_eq!(contest_error_to_status_code(&error), 500);
        assert_eq!(contest_error_message(&error), "Internal server error");
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = ContestError::from(RepositoryError::InvalidData("bad item".to_string()));
        assert_eq!(contest_error_to_status_code(&error), 500);
    }
}
