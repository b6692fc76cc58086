//! Configuration types for the AssemblyAI batch transcription API.
//!
//! This module contains:
//! - Regional endpoint selection
//! - Optional transcription parameters (speech model, language)
//! - Polling behavior for transcript jobs

use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// Constants
// =============================================================================

/// Upload endpoint path (raw bytes in, `upload_url` out).
pub const UPLOAD_PATH: &str = "/v2/upload";

/// Transcript job endpoint path.
pub const TRANSCRIPT_PATH: &str = "/v2/transcript";

/// Interval between transcript status polls, matching the provider SDK.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Regional Endpoints
// =============================================================================

/// AssemblyAI regional endpoints for the REST API.
///
/// Choose the EU endpoint for data residency requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssemblyAIRegion {
    /// Default global endpoint (US-based)
    #[default]
    Default,
    /// EU endpoint for European data residency
    Eu,
}

impl AssemblyAIRegion {
    /// Get the REST base URL for this region.
    #[inline]
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Default => "https://api.assemblyai.com",
            Self::Eu => "https://api.eu.assemblyai.com",
        }
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Eu => "eu",
        }
    }
}

impl FromStr for AssemblyAIRegion {
    type Err = String;

    /// Parse from region string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "default" | "us" | "global" => Ok(Self::Default),
            "eu" | "europe" => Ok(Self::Eu),
            other => Err(format!(
                "Unsupported AssemblyAI region: {other}. Supported regions: default, eu"
            )),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Configuration for [`AssemblyAIClient`](super::AssemblyAIClient).
#[derive(Clone)]
pub struct AssemblyAIConfig {
    /// API key sent verbatim in the `authorization` header.
    pub api_key: String,

    /// Regional endpoint selection.
    pub region: AssemblyAIRegion,

    /// Overrides the regional base URL (self-hosted proxies, tests).
    pub base_url: Option<String>,

    /// Speech model requested for the transcript job, e.g. `universal`.
    /// When unset the provider default is used.
    pub speech_model: Option<String>,

    /// Language of the audio, e.g. `en_us`. When unset the provider default is used.
    pub language_code: Option<String>,

    /// Delay between transcript status polls.
    pub poll_interval: Duration,

    /// Upper bound on how long to wait for a transcript job.
    /// `None` waits until the provider resolves the job.
    pub poll_timeout: Option<Duration>,
}

impl std::fmt::Debug for AssemblyAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyAIConfig")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .field("base_url", &self.base_url)
            .field("speech_model", &self.speech_model)
            .field("language_code", &self.language_code)
            .field("poll_interval", &self.poll_interval)
            .field("poll_timeout", &self.poll_timeout)
            .finish()
    }
}

impl Default for AssemblyAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: AssemblyAIRegion::default(),
            base_url: None,
            speech_model: None,
            language_code: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: None,
        }
    }
}

impl AssemblyAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Effective base URL without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or_else(|| self.region.rest_base_url())
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_base_url(), UPLOAD_PATH)
    }

    pub fn transcript_url(&self) -> String {
        format!("{}{}", self.api_base_url(), TRANSCRIPT_PATH)
    }

    pub fn transcript_status_url(&self, transcript_id: &str) -> String {
        format!("{}{}/{}", self.api_base_url(), TRANSCRIPT_PATH, transcript_id)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("AssemblyAI API key is required".to_string());
        }
        if self.poll_interval.is_zero() {
            return Err("Transcript poll interval must be greater than zero".to_string());
        }
        let parsed = url::Url::parse(self.api_base_url())
            .map_err(|e| format!("Invalid AssemblyAI base URL: {e}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!(
                "AssemblyAI base URL must use http or https, got: {}",
                parsed.scheme()
            ));
        }
        Ok(())
    }
}
