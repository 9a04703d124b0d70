use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use safeguard::ModerationError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// Every failure surfaces to the caller as a non-2xx response carrying a
/// human-readable `{ "error": ... }` message; the proxy makes a single
/// attempt per request and the caller decides whether to resubmit.
pub enum AppError {
    /// Errors originating from the moderation pipeline.
    Moderation(ModerationError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<ModerationError> for AppError {
    fn from(err: ModerationError) -> Self {
        AppError::Moderation(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match self {
            AppError::Moderation(err) => {
                // Log the original error for diagnostics; the upstream body
                // stays server-side except for the summary message.
                error!("ModerationError: {err:?}");
                match err {
                    ModerationError::EmptyResponse => err.to_string(),
                    ModerationError::AiRequest(e) => {
                        format!("Request to the moderation model failed: {e}")
                    }
                    ModerationError::AiDeserialization(e) => {
                        format!("Failed to deserialize the moderation model response: {e}")
                    }
                    ModerationError::AiApi(e) => format!("Moderation model error: {e}"),
                    ModerationError::ResultParse(e) => {
                        format!("Model output is not a valid analysis result: {e}")
                    }
                    other => other.to_string(),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                "An internal server error occurred.".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
