use std::path::PathBuf;

use super::env::EnvConfig;
use super::yaml::YamlConfig;
use super::{ServerConfig, TlsConfig};
use crate::core::stt::STTProvider;
use crate::core::stt::assemblyai::{AssemblyAIRegion, DEFAULT_POLL_INTERVAL};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_POLL_INTERVAL_MS: u64 = DEFAULT_POLL_INTERVAL.as_millis() as u64;
const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 1;
const DEFAULT_RETRY_INITIAL_BACKOFF_MS: u64 = 500;
const DEFAULT_RETRY_MAX_BACKOFF_MS: u64 = 30_000;
const DEFAULT_RATE_LIMIT_RPS: u32 = 60;
const DEFAULT_RATE_LIMIT_BURST: u32 = 10;

/// Build a `ServerConfig` from the environment, with YAML values taking precedence.
///
/// Validation of value ranges is left to `ServerConfig::validate`; this step only
/// fails on values that cannot be represented (unknown region or provider,
/// half-configured or path-less enabled TLS, missing API key).
pub(super) fn merge_config(
    yaml: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let env = EnvConfig::load()?;
    let yaml = yaml.unwrap_or_default();

    let server = yaml.server.unwrap_or_default();
    let providers = yaml.providers.unwrap_or_default();
    let transcription = yaml.transcription.unwrap_or_default();
    let retry = yaml.retry.unwrap_or_default();
    let security = yaml.security.unwrap_or_default();

    let tls = match server.tls {
        Some(tls_yaml) if tls_yaml.enabled == Some(false) => None,
        Some(tls_yaml) => {
            let tls = resolve_tls(
                tls_yaml.cert_path.or(env.tls_cert_path),
                tls_yaml.key_path.or(env.tls_key_path),
            )?;
            if tls_yaml.enabled == Some(true) && tls.is_none() {
                return Err(
                    "server.tls.enabled is true but cert_path and key_path are not set".into(),
                );
            }
            tls
        }
        None => resolve_tls(env.tls_cert_path, env.tls_key_path)?,
    };

    let stt_provider: STTProvider = providers
        .stt_provider
        .or(env.stt_provider)
        .map(|name| name.parse())
        .transpose()?
        .unwrap_or_default();

    let assemblyai_region: AssemblyAIRegion = providers
        .assemblyai_region
        .or(env.assemblyai_region)
        .map(|name| name.parse())
        .transpose()?
        .unwrap_or_default();

    let assemblyai_api_key = providers
        .assemblyai_api_key
        .or(env.assemblyai_api_key)
        .ok_or("ASSEMBLYAI_API_KEY is required (or providers.assemblyai_api_key in YAML)")?;

    Ok(ServerConfig {
        host: server
            .host
            .or(env.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: server.port.or(env.port).unwrap_or(DEFAULT_PORT),
        tls,
        stt_provider,
        assemblyai_api_key,
        assemblyai_region,
        assemblyai_base_url: providers.assemblyai_base_url.or(env.assemblyai_base_url),
        speech_model: transcription.speech_model.or(env.speech_model),
        language_code: transcription.language_code.or(env.language_code),
        poll_interval_ms: transcription
            .poll_interval_ms
            .or(env.poll_interval_ms)
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        poll_timeout_seconds: transcription
            .poll_timeout_seconds
            .or(env.poll_timeout_seconds),
        retry_max_attempts: retry
            .max_attempts
            .or(env.retry_max_attempts)
            .unwrap_or(DEFAULT_RETRY_MAX_ATTEMPTS),
        retry_initial_backoff_ms: retry
            .initial_backoff_ms
            .or(env.retry_initial_backoff_ms)
            .unwrap_or(DEFAULT_RETRY_INITIAL_BACKOFF_MS),
        retry_max_backoff_ms: retry
            .max_backoff_ms
            .or(env.retry_max_backoff_ms)
            .unwrap_or(DEFAULT_RETRY_MAX_BACKOFF_MS),
        max_body_bytes: security.max_body_bytes.or(env.max_body_bytes),
        cors_allowed_origins: security
            .cors_allowed_origins
            .or(env.cors_allowed_origins),
        rate_limit_requests_per_second: security
            .rate_limit_requests_per_second
            .or(env.rate_limit_requests_per_second)
            .unwrap_or(DEFAULT_RATE_LIMIT_RPS),
        rate_limit_burst_size: security
            .rate_limit_burst_size
            .or(env.rate_limit_burst_size)
            .unwrap_or(DEFAULT_RATE_LIMIT_BURST),
    })
}

/// TLS needs both paths or neither.
fn resolve_tls(
    cert_path: Option<String>,
    key_path: Option<String>,
) -> Result<Option<TlsConfig>, String> {
    match (cert_path, key_path) {
        (Some(cert), Some(key)) => Ok(Some(TlsConfig {
            cert_path: PathBuf::from(cert),
            key_path: PathBuf::from(key),
        })),
        (None, None) => Ok(None),
        (Some(_), None) => Err("TLS_CERT_PATH is set but TLS_KEY_PATH is missing".to_string()),
        (None, Some(_)) => Err("TLS_KEY_PATH is set but TLS_CERT_PATH is missing".to_string()),
    }
}
