use super::ServerConfig;
use super::merge;
use super::utils::{env_var, parse_env};

/// Raw values read from the process environment before defaults are applied.
#[derive(Default)]
pub(super) struct EnvConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls_cert_path: Option<String>,
    pub tls_key_path: Option<String>,
    pub stt_provider: Option<String>,
    pub assemblyai_api_key: Option<String>,
    pub assemblyai_region: Option<String>,
    pub assemblyai_base_url: Option<String>,
    pub speech_model: Option<String>,
    pub language_code: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub poll_timeout_seconds: Option<u64>,
    pub retry_max_attempts: Option<u32>,
    pub retry_initial_backoff_ms: Option<u64>,
    pub retry_max_backoff_ms: Option<u64>,
    pub max_body_bytes: Option<usize>,
    pub cors_allowed_origins: Option<String>,
    pub rate_limit_requests_per_second: Option<u32>,
    pub rate_limit_burst_size: Option<u32>,
}

impl EnvConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            host: env_var("HOST"),
            port: parse_env("PORT")?,
            tls_cert_path: env_var("TLS_CERT_PATH"),
            tls_key_path: env_var("TLS_KEY_PATH"),
            stt_provider: env_var("STT_PROVIDER"),
            assemblyai_api_key: env_var("ASSEMBLYAI_API_KEY"),
            assemblyai_region: env_var("ASSEMBLYAI_REGION"),
            assemblyai_base_url: env_var("ASSEMBLYAI_BASE_URL"),
            speech_model: env_var("ASSEMBLYAI_SPEECH_MODEL"),
            language_code: env_var("ASSEMBLYAI_LANGUAGE_CODE"),
            poll_interval_ms: parse_env("TRANSCRIPT_POLL_INTERVAL_MS")?,
            poll_timeout_seconds: parse_env("TRANSCRIPT_POLL_TIMEOUT_SECONDS")?,
            retry_max_attempts: parse_env("UPLOAD_RETRY_MAX_ATTEMPTS")?,
            retry_initial_backoff_ms: parse_env("UPLOAD_RETRY_INITIAL_BACKOFF_MS")?,
            retry_max_backoff_ms: parse_env("UPLOAD_RETRY_MAX_BACKOFF_MS")?,
            max_body_bytes: parse_env("MAX_AUDIO_BYTES")?,
            cors_allowed_origins: env_var("CORS_ALLOWED_ORIGINS"),
            rate_limit_requests_per_second: parse_env("RATE_LIMIT_REQUESTS_PER_SECOND")?,
            rate_limit_burst_size: parse_env("RATE_LIMIT_BURST_SIZE")?,
        })
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads every setting from the process environment (which includes values
    /// loaded from `.env` at startup), applies defaults and validates the result.
    ///
    /// # Errors
    /// Returns an error if `ASSEMBLYAI_API_KEY` is missing, a variable has an
    /// invalid format, or validation fails.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = merge::merge_config(None)?;
        config.validate()?;
        Ok(config)
    }
}
