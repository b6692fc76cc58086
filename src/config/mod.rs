//! Configuration module for the transcription relay
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//! - `utils`: Utility functions for configuration parsing
//!
//! # Example
//! ```rust,no_run
//! use transcribe_relay::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::core::stt::STTProvider;
use crate::core::stt::assemblyai::{AssemblyAIConfig, AssemblyAIRegion};
use crate::utils::RetryPolicy;

mod env;
mod merge;
mod utils;
mod validation;
mod yaml;

pub use yaml::{
    ProvidersYaml, RetryYaml, SecurityYaml, ServerYaml, TlsYaml, TranscriptionYaml, YamlConfig,
};

/// TLS configuration for HTTPS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Contains all configuration needed to run the relay, including:
/// - Server settings (host, port, TLS)
/// - Provider selection and AssemblyAI credentials
/// - Transcript job options and polling
/// - Upload retry policy
/// - Security settings (CORS, rate limiting, body size)
#[derive(Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Provider settings
    pub stt_provider: STTProvider,
    /// AssemblyAI API key, sent verbatim in the `authorization` header
    pub assemblyai_api_key: String,
    pub assemblyai_region: AssemblyAIRegion,
    /// Overrides the regional base URL (used for proxies and mock servers)
    pub assemblyai_base_url: Option<String>,

    // Transcript job options
    pub speech_model: Option<String>,
    pub language_code: Option<String>,
    pub poll_interval_ms: u64,
    /// Upper bound on transcript polling. `None` polls until the job finishes.
    pub poll_timeout_seconds: Option<u64>,

    // Upload retry
    pub retry_max_attempts: u32,
    pub retry_initial_backoff_ms: u64,
    pub retry_max_backoff_ms: u64,

    // Security settings
    /// Maximum accepted audio body in bytes. `None` disables the limit.
    pub max_body_bytes: Option<usize>,
    /// CORS allowed origins (comma-separated list or "*" for all)
    pub cors_allowed_origins: Option<String>,
    pub rate_limit_requests_per_second: u32,
    pub rate_limit_burst_size: u32,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .field("stt_provider", &self.stt_provider)
            .field("assemblyai_api_key", &"[REDACTED]")
            .field("assemblyai_region", &self.assemblyai_region)
            .field("assemblyai_base_url", &self.assemblyai_base_url)
            .field("speech_model", &self.speech_model)
            .field("language_code", &self.language_code)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("poll_timeout_seconds", &self.poll_timeout_seconds)
            .field("retry_max_attempts", &self.retry_max_attempts)
            .field("retry_initial_backoff_ms", &self.retry_initial_backoff_ms)
            .field("retry_max_backoff_ms", &self.retry_max_backoff_ms)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field(
                "rate_limit_requests_per_second",
                &self.rate_limit_requests_per_second,
            )
            .field("rate_limit_burst_size", &self.rate_limit_burst_size)
            .finish()
    }
}

/// Zeroize the provider key when the config is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.assemblyai_api_key.zeroize();
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// After loading and merging, performs validation on the final configuration.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        // .env is loaded into the process environment by main.rs before this runs
        let yaml_config = yaml::YamlConfig::from_file(path)?;

        let config = merge::merge_config(Some(yaml_config))?;
        config.validate()?;

        Ok(config)
    }

    /// Run every startup check against the merged configuration.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        validation::validate_api_key(&self.assemblyai_api_key)?;
        validation::validate_base_url(self.assemblyai_base_url.as_deref())?;
        validation::validate_poll_interval(self.poll_interval_ms)?;
        validation::validate_poll_timeout(self.poll_timeout_seconds)?;
        validation::validate_retry(
            self.retry_max_attempts,
            self.retry_initial_backoff_ms,
            self.retry_max_backoff_ms,
        )?;
        validation::validate_max_body_bytes(self.max_body_bytes)?;
        Ok(())
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Build the AssemblyAI client configuration.
    pub fn assemblyai_config(&self) -> AssemblyAIConfig {
        AssemblyAIConfig {
            api_key: self.assemblyai_api_key.clone(),
            region: self.assemblyai_region,
            base_url: self.assemblyai_base_url.clone(),
            speech_model: self.speech_model.clone(),
            language_code: self.language_code.clone(),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            poll_timeout: self.poll_timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Retry policy applied to the upload step.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry_max_attempts,
            initial_backoff: Duration::from_millis(self.retry_initial_backoff_ms),
            max_backoff: Duration::from_millis(self.retry_max_backoff_ms),
            ..RetryPolicy::default()
        }
    }
}
