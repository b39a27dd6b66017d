use std::fmt;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Startup fails if the provider credential is missing.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub provider_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider_timeout_secs = match std::env::var("PROVIDER_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_PROVIDER_TIMEOUT_SECS,
        };

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            provider_timeout: Duration::from_secs(provider_timeout_secs),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

// The API key must never reach a log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_base_url", &self.gemini_base_url)
            .field("provider_timeout", &self.provider_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn parse_timeout_secs(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("PROVIDER_TIMEOUT_SECS must be greater than zero");
    }
    Ok(secs)
}

#[cfg(test)]
pub(crate) fn test_config(base_url: &str) -> Config {
    Config {
        gemini_api_key: "test-secret-key".to_string(),
        gemini_base_url: base_url.to_string(),
        provider_timeout: Duration::from_secs(5),
        port: 0,
        rust_log: "debug".to_string(),
    }
}
