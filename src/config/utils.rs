use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Read an environment variable, treating unset and whitespace-only values alike.
pub(super) fn env_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read and parse an environment variable.
///
/// Unset variables yield `Ok(None)`; values that fail to parse are errors
/// naming the variable.
pub(super) fn parse_env<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    env_var(name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| format!("Invalid value for {name}: '{raw}' ({e})"))
        })
        .transpose()
}
