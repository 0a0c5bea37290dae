use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use picker_core::contest::{
    contest_error_message, contest_error_to_status_code, ContestError, ErrorResponse,
};

/// Error returned by every API handler.
///
/// Contest errors map to their status code and public message; anything else
/// is reported as a 500 with the generic message.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self.0.downcast_ref::<ContestError>() {
            Some(contest_error) => {
                let code = contest_error_to_status_code(contest_error);
                (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    contest_error_message(contest_error),
                )
            }
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        if status_code.is_server_error() {
            // Debug formatting includes the source chain
            tracing::error!(error = ?self.0, "Request failed");
        } else {
            tracing::warn!(error = %self.0, "Request rejected");
        }

        (status_code, Json(ErrorResponse::new(message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
