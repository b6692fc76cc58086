//! AssemblyAI batch transcription client.
//!
//! Turning bytes into text takes two remote operations:
//!
//! 1. `POST /v2/upload` with the raw audio, which returns a temporary `upload_url`
//! 2. `POST /v2/transcript` with that URL, followed by `GET /v2/transcript/{id}`
//!    polls until the job is `completed` or `error`
//!
//! Each call is attempted once. Provider failures are surfaced as [`STTError`]
//! with the provider's own text as detail.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::config::{AssemblyAIConfig, DEFAULT_CONNECT_TIMEOUT_SECS};
use super::messages::{
    ErrorResponse, TranscriptRequest, TranscriptResponse, TranscriptStatus, UploadResponse,
};
use crate::core::stt::base::{
    AudioPayload, FailureKind, STTError, TranscriptionProvider, UploadReference,
};

/// User-Agent header value for API requests.
const USER_AGENT: &str = concat!("transcribe-relay/", env!("CARGO_PKG_VERSION"));

const OCTET_STREAM: &str = "application/octet-stream";

// =============================================================================
// AssemblyAIClient
// =============================================================================

/// HTTP client for the AssemblyAI upload and transcript APIs.
///
/// Holds a pooled `reqwest::Client`; share one instance across requests.
pub struct AssemblyAIClient {
    config: AssemblyAIConfig,
    http_client: Client,
}

impl AssemblyAIClient {
    /// Create a client after validating `config`.
    pub fn new(config: AssemblyAIConfig) -> Result<Self, String> {
        config.validate()?;

        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &AssemblyAIConfig {
        &self.config
    }

    /// Create the transcript job for an uploaded clip.
    async fn create_transcript(
        &self,
        reference: UploadReference,
    ) -> Result<TranscriptResponse, STTError> {
        let audio_url = reference.into_inner();
        let request = TranscriptRequest {
            audio_url: &audio_url,
            speech_model: self.config.speech_model.as_deref(),
            language_code: self.config.language_code.as_deref(),
        };

        let response = self
            .http_client
            .post(self.config.transcript_url())
            .header(AUTHORIZATION, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                STTError::transcribe(format!("Request failed: {e}"), FailureKind::Transport)
            })?;

        Self::read_transcript(response).await
    }

    async fn fetch_transcript(&self, transcript_id: &str) -> Result<TranscriptResponse, STTError> {
        let response = self
            .http_client
            .get(self.config.transcript_status_url(transcript_id))
            .header(AUTHORIZATION, &self.config.api_key)
            .send()
            .await
            .map_err(|e| {
                STTError::transcribe(format!("Request failed: {e}"), FailureKind::Transport)
            })?;

        Self::read_transcript(response).await
    }

    /// Decode a transcript job from a create or poll response.
    async fn read_transcript(response: reqwest::Response) -> Result<TranscriptResponse, STTError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            STTError::transcribe(
                format!("Failed to read response: {e}"),
                FailureKind::Transport,
            )
        })?;

        if !status.is_success() {
            debug!("AssemblyAI transcript error body: {}", body);
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .map(|e| e.error)
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| describe_failure(status, &body));
            return Err(STTError::transcribe(
                detail,
                FailureKind::Status(status.as_u16()),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            STTError::transcribe(
                format!("Failed to parse transcript response: {e}"),
                FailureKind::Decode,
            )
        })
    }

    /// Poll until the job reaches a terminal status.
    async fn wait_for_completion(
        &self,
        mut transcript: TranscriptResponse,
    ) -> Result<TranscriptResponse, STTError> {
        while !transcript.status.is_terminal() {
            debug!(
                "Transcript {} is {:?}, polling again in {:?}",
                transcript.id, transcript.status, self.config.poll_interval
            );
            tokio::time::sleep(self.config.poll_interval).await;
            transcript = self.fetch_transcript(&transcript.id).await?;
        }
        Ok(transcript)
    }
}

/// Raw provider text when there is any, otherwise the HTTP status line.
fn describe_failure(status: reqwest::StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}

#[async_trait]
impl TranscriptionProvider for AssemblyAIClient {
    async fn upload(&self, payload: AudioPayload) -> Result<UploadReference, STTError> {
        debug!("Uploading {} bytes of audio to AssemblyAI", payload.len());

        let response = self
            .http_client
            .post(self.config.upload_url())
            .header(AUTHORIZATION, &self.config.api_key)
            .header(CONTENT_TYPE, OCTET_STREAM)
            .body(payload.into_bytes())
            .send()
            .await
            .map_err(|e| STTError::upload(format!("Request failed: {e}"), FailureKind::Transport))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            STTError::upload(
                format!("Failed to read response: {e}"),
                FailureKind::Transport,
            )
        })?;

        if !status.is_success() {
            warn!("AssemblyAI upload rejected with status {}", status);
            return Err(STTError::upload(
                describe_failure(status, &body),
                FailureKind::Status(status.as_u16()),
            ));
        }

        let upload: UploadResponse = serde_json::from_str(&body).map_err(|e| {
            STTError::upload(
                format!("Failed to parse upload response: {e}"),
                FailureKind::Decode,
            )
        })?;

        Ok(UploadReference::new(upload.upload_url))
    }

    async fn transcribe(&self, reference: UploadReference) -> Result<String, STTError> {
        let job = self.create_transcript(reference).await?;
        let transcript_id = job.id.clone();
        info!("Created AssemblyAI transcript {}", transcript_id);

        let transcript = match self.config.poll_timeout {
            Some(limit) => tokio::time::timeout(limit, self.wait_for_completion(job))
                .await
                .map_err(|_| {
                    STTError::transcribe(
                        format!(
                            "Polling timeout: transcript {} did not complete within {}ms",
                            transcript_id,
                            limit.as_millis()
                        ),
                        FailureKind::Timeout,
                    )
                })??,
            None => self.wait_for_completion(job).await?,
        };

        match transcript.status {
            TranscriptStatus::Completed => {
                let text = transcript.text.unwrap_or_default();
                info!(
                    "Transcript {} completed: {} characters",
                    transcript_id,
                    text.len()
                );
                Ok(text)
            }
            _ => {
                let detail = transcript
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| format!("Transcript {transcript_id} failed"));
                warn!("Transcript {} failed: {}", transcript_id, detail);
                Err(STTError::transcribe(detail, FailureKind::JobFailed))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "AssemblyAI"
    }
}
