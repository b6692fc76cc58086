//! Transcription relay.
//!
//! Drives a [`TranscriptionProvider`] through its two-step protocol for a
//! single request and reduces the outcome to a [`TranscriptResult`]:
//!
//! ```text
//! Received ──▶ Uploading ──▶ Transcribing ──▶ Succeeded
//!     │            │               │
//!     └────────────┴───────────────┴────────▶ Failed
//! ```
//!
//! The relay holds no per-request state, so one instance is shared by all
//! requests.

use axum::http::StatusCode;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::stt::{AudioPayload, TranscriptionProvider};
use crate::errors::{RelayError, RelayResult};
use crate::utils::RetryPolicy;

/// Position of a request in the relay state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStage {
    Received,
    Uploading,
    Transcribing,
    Succeeded,
    Failed,
}

impl RelayStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RelayStage::Succeeded | RelayStage::Failed)
    }
}

impl fmt::Display for RelayStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelayStage::Received => "received",
            RelayStage::Uploading => "uploading",
            RelayStage::Transcribing => "transcribing",
            RelayStage::Succeeded => "succeeded",
            RelayStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Terminal outcome of one relay request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptResult {
    Success { text: String },
    Failure { message: String, status: StatusCode },
}

impl TranscriptResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TranscriptResult::Success { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            TranscriptResult::Success { .. } => StatusCode::OK,
            TranscriptResult::Failure { status, .. } => *status,
        }
    }
}

impl From<RelayError> for TranscriptResult {
    fn from(err: RelayError) -> Self {
        TranscriptResult::Failure {
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

impl From<RelayResult<String>> for TranscriptResult {
    fn from(result: RelayResult<String>) -> Self {
        match result {
            Ok(text) => TranscriptResult::Success { text },
            Err(err) => err.into(),
        }
    }
}

/// Turns one audio payload into one transcript outcome.
pub struct TranscriptionRelay {
    provider: Arc<dyn TranscriptionProvider>,
    upload_retry: RetryPolicy,
}

impl TranscriptionRelay {
    pub fn new(provider: Arc<dyn TranscriptionProvider>, upload_retry: RetryPolicy) -> Self {
        Self {
            provider,
            upload_retry,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Run the full upload → transcribe sequence for one payload.
    ///
    /// Exactly one terminal outcome is produced. `transcribe` is only called
    /// after a successful upload, and the upload reference is handed to it once.
    pub async fn relay(&self, payload: AudioPayload) -> TranscriptResult {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        debug!(%request_id, stage = %RelayStage::Received, bytes = payload.len(), "Audio received");

        let result = self.run(request_id, payload).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(text) => info!(
                %request_id,
                stage = %RelayStage::Succeeded,
                provider = self.provider_name(),
                elapsed_ms,
                chars = text.len(),
                "Transcription relay succeeded"
            ),
            Err(e) => warn!(
                %request_id,
                stage = %RelayStage::Failed,
                provider = self.provider_name(),
                elapsed_ms,
                error = %e,
                "Transcription relay failed"
            ),
        }

        result.into()
    }

    /// Terminal outcome for a request whose body never became a payload.
    pub fn reject(&self, err: RelayError) -> TranscriptResult {
        warn!(stage = %RelayStage::Failed, error = %err, "Rejected transcription request");
        err.into()
    }

    async fn run(&self, request_id: Uuid, payload: AudioPayload) -> RelayResult<String> {
        debug!(%request_id, stage = %RelayStage::Uploading, "Uploading audio");
        let provider = self.provider.clone();
        let reference = self
            .upload_retry
            .execute(move || {
                let provider = provider.clone();
                let payload = payload.clone();
                async move { provider.upload(payload).await }
            })
            .await?;

        debug!(%request_id, stage = %RelayStage::Transcribing, "Upload complete, transcribing");
        let text = self.provider.transcribe(reference).await?;
        Ok(text)
    }
}
