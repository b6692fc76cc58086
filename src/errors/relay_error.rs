use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::core::stt::STTError;

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

/// Failures that end a transcription request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The inbound request body could not be read as bytes.
    #[error("Failed to read audio from request body: {message}")]
    BodyRead { message: String, status: StatusCode },

    /// The provider failed during upload or transcription.
    #[error(transparent)]
    Provider(#[from] STTError),
}

impl RelayError {
    /// HTTP status reported to the client.
    ///
    /// Unreadable input is a client error; provider failures are 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BodyRead { status, .. } if status.is_client_error() => *status,
            RelayError::BodyRead { .. } => StatusCode::BAD_REQUEST,
            RelayError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
