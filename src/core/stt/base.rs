//! Provider-agnostic types for batch speech-to-text.
//!
//! A batch provider turns a complete audio clip into text in two steps: the
//! raw bytes are uploaded first, and the reference returned by that upload is
//! then submitted for transcription. [`TranscriptionProvider`] is the seam the
//! relay drives; concrete providers live in sibling modules.

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use thiserror::Error;

/// Raw audio bytes received from a client.
///
/// The content type is implicitly binary audio; no format is inspected or
/// converted. Cloning is cheap (reference counted) and never copies the audio.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioPayload {
    data: Bytes,
}

impl AudioPayload {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

impl fmt::Debug for AudioPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioPayload")
            .field("len", &self.data.len())
            .finish()
    }
}

impl From<Bytes> for AudioPayload {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for AudioPayload {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Opaque handle to an uploaded clip, valid for a single transcription.
///
/// `transcribe` takes the reference by value, so a reference can be consumed
/// at most once. The value is redacted from `Debug` output to keep it out of
/// logs.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadReference(String);

impl UploadReference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UploadReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UploadReference(<redacted>)")
    }
}

/// What went wrong underneath an [`STTError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced an HTTP response (connect, TLS, I/O).
    Transport,
    /// The provider answered with a non-success HTTP status.
    Status(u16),
    /// The provider accepted the job but reported it as failed.
    JobFailed,
    /// The provider answered successfully with a body we could not decode.
    Decode,
    /// The polling deadline elapsed before the job reached a terminal state.
    Timeout,
}

impl FailureKind {
    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FailureKind::Transport => true,
            FailureKind::Status(code) => *code == 429 || (500..=599).contains(code),
            FailureKind::JobFailed | FailureKind::Decode | FailureKind::Timeout => false,
        }
    }
}

/// Provider-level failures, surfaced without interpretation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum STTError {
    /// The upload step was rejected or the provider was unreachable.
    #[error("Upload failed: {detail}")]
    Upload { detail: String, kind: FailureKind },

    /// The transcription step was rejected, failed, or timed out.
    #[error("{detail}")]
    Transcribe { detail: String, kind: FailureKind },
}

impl STTError {
    pub fn upload(detail: impl Into<String>, kind: FailureKind) -> Self {
        STTError::Upload {
            detail: detail.into(),
            kind,
        }
    }

    pub fn transcribe(detail: impl Into<String>, kind: FailureKind) -> Self {
        STTError::Transcribe {
            detail: detail.into(),
            kind,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            STTError::Upload { kind, .. } | STTError::Transcribe { kind, .. } => *kind,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            STTError::Upload { detail, .. } | STTError::Transcribe { detail, .. } => detail,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }
}

/// Two-step batch transcription.
///
/// Implementations perform exactly one remote attempt per call; retry policy
/// belongs to the caller.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Upload raw audio and return the provider's reference to it.
    async fn upload(&self, payload: AudioPayload) -> Result<UploadReference, STTError>;

    /// Transcribe a previously uploaded clip, waiting for the provider to
    /// resolve the job. An empty string is a valid transcript.
    async fn transcribe(&self, reference: UploadReference) -> Result<String, STTError>;

    /// Human readable provider name for logs.
    fn provider_name(&self) -> &'static str;
}
