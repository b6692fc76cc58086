//! `POST /api/transcribe`
//!
//! Accepts a raw audio body, relays it to the configured provider and answers
//! with exactly one JSON shape: `{"transcript": ...}` on success or
//! `{"error": ...}` with a non-2xx status.

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::relay::TranscriptResult;
use crate::core::stt::AudioPayload;
use crate::errors::RelayError;
use crate::state::AppState;

/// Successful transcription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TranscribeResponse {
    /// Transcribed text. Empty when the audio contained no speech.
    #[cfg_attr(feature = "openapi", schema(example = "hello world"))]
    pub transcript: String,
}

/// Failed transcription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TranscribeErrorResponse {
    /// Human-readable failure description
    #[cfg_attr(
        feature = "openapi",
        schema(example = "Upload failed: Upload body is empty")
    )]
    pub error: String,
}

impl IntoResponse for TranscriptResult {
    fn into_response(self) -> Response {
        match self {
            TranscriptResult::Success { text } => {
                Json(TranscribeResponse { transcript: text }).into_response()
            }
            TranscriptResult::Failure { message, status } => {
                (status, Json(TranscribeErrorResponse { error: message })).into_response()
            }
        }
    }
}

/// Transcribe a recorded audio clip.
///
/// The body is forwarded to the provider as-is; no content-type checks are made.
#[cfg_attr(
    feature = "openapi",
    utoipa::path(
        post,
        path = "/api/transcribe",
        request_body(
            content = Vec<u8>,
            description = "Raw audio bytes (any container the provider accepts, e.g. audio/webm)",
            content_type = "application/octet-stream"
        ),
        responses(
            (status = 200, description = "Audio transcribed", body = TranscribeResponse),
            (status = 400, description = "Request body could not be read", body = TranscribeErrorResponse),
            (status = 413, description = "Audio exceeds the configured size limit", body = TranscribeErrorResponse),
            (status = 500, description = "Upload or transcription failed", body = TranscribeErrorResponse)
        ),
        tag = "transcription"
    )
)]
pub async fn transcribe_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> TranscriptResult {
    match body {
        Ok(bytes) => state.relay.relay(AudioPayload::from(bytes)).await,
        Err(rejection) => state.relay.reject(RelayError::BodyRead {
            message: rejection.body_text(),
            status: rejection.status(),
        }),
    }
}
