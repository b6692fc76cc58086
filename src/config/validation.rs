/// Validate the provider API key.
pub(super) fn validate_api_key(api_key: &str) -> Result<(), String> {
    if api_key.trim().is_empty() {
        return Err("ASSEMBLYAI_API_KEY must not be blank".to_string());
    }
    Ok(())
}

/// Validate an optional base URL override: it must parse and use http or https.
pub(super) fn validate_base_url(base_url: Option<&str>) -> Result<(), String> {
    let Some(base_url) = base_url else {
        return Ok(());
    };

    let parsed =
        url::Url::parse(base_url).map_err(|e| format!("Invalid ASSEMBLYAI_BASE_URL '{base_url}': {e}"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "ASSEMBLYAI_BASE_URL must use http or https, got: {}",
            parsed.scheme()
        ));
    }
    Ok(())
}

pub(super) fn validate_poll_interval(poll_interval_ms: u64) -> Result<(), String> {
    if poll_interval_ms == 0 {
        return Err("poll_interval_ms must be greater than zero".to_string());
    }
    Ok(())
}

/// A zero deadline would fail every job that is not finished on creation.
pub(super) fn validate_poll_timeout(poll_timeout_seconds: Option<u64>) -> Result<(), String> {
    if poll_timeout_seconds == Some(0) {
        return Err("poll_timeout_seconds must be greater than zero when set".to_string());
    }
    Ok(())
}

/// Validate the upload retry policy.
pub(super) fn validate_retry(
    max_attempts: u32,
    initial_backoff_ms: u64,
    max_backoff_ms: u64,
) -> Result<(), String> {
    if max_attempts == 0 {
        return Err("retry max_attempts must be at least 1".to_string());
    }
    if initial_backoff_ms > max_backoff_ms {
        return Err(format!(
            "retry initial_backoff_ms ({initial_backoff_ms}) must not exceed max_backoff_ms ({max_backoff_ms})"
        ));
    }
    Ok(())
}

pub(super) fn validate_max_body_bytes(max_body_bytes: Option<usize>) -> Result<(), String> {
    if max_body_bytes == Some(0) {
        return Err("max_body_bytes must be greater than zero when set".to_string());
    }
    Ok(())
}
