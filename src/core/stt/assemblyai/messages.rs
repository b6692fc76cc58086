//! REST message types for the AssemblyAI batch transcription API.
//!
//! - [`UploadResponse`]: reply to `POST /v2/upload`
//! - [`TranscriptRequest`]: body of `POST /v2/transcript`
//! - [`TranscriptResponse`]: transcript job as returned by create and poll calls
//! - [`ErrorResponse`]: error body returned with non-success statuses

use serde::{Deserialize, Serialize};

// =============================================================================
// Upload
// =============================================================================

/// Response to a successful upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Temporary URL of the uploaded audio, usable only by the transcript API.
    pub upload_url: String,
}

// =============================================================================
// Transcript Jobs
// =============================================================================

/// Request body for creating a transcript job.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptRequest<'a> {
    pub audio_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_model: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<&'a str>,
}

/// Lifecycle of a transcript job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

impl TranscriptStatus {
    /// Whether the job has reached a final state.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

/// Transcript job. Only the fields the relay reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResponse {
    pub id: String,
    pub status: TranscriptStatus,
    /// Transcript text; `null` until completed, and for audio without speech.
    #[serde(default)]
    pub text: Option<String>,
    /// Failure reason when `status` is `error`.
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Errors
// =============================================================================

/// Error body returned by the API alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
