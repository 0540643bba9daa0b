use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{RetryPolicy, DEFAULT_API_URL};
use crate::resume::extractor::DEFAULT_MAX_UPLOAD_BYTES;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_url: String,
    /// Profiles are kept in process memory when unset.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub llm_retry: RetryPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = RetryPolicy::default();

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_url: optional_env("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            redis_url: optional_env("REDIS_URL"),
            port: parse_env("PORT", 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            llm_retry: RetryPolicy {
                max_attempts: parse_env("LLM_MAX_ATTEMPTS", defaults.max_attempts)?,
                base_delay: Duration::from_millis(parse_env(
                    "LLM_RETRY_BASE_MS",
                    defaults.base_delay.as_millis() as u64,
                )?),
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values both count as missing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>()))
}
