use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_DIRECTORY_TIMEOUT_SECS: u64 = 10;
const MAX_DIRECTORY_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub candidate_directory_url: String,
    pub candidate_directory_api_key: Option<String>,
    pub directory_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = match std::env::var("CANDIDATE_DIRECTORY_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("CANDIDATE_DIRECTORY_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_DIRECTORY_TIMEOUT_SECS,
        };
        if timeout_secs == 0 || timeout_secs > MAX_DIRECTORY_TIMEOUT_SECS {
            bail!(
                "CANDIDATE_DIRECTORY_TIMEOUT_SECS must be between 1 and {MAX_DIRECTORY_TIMEOUT_SECS}, got {timeout_secs}"
            );
        }

        Ok(Config {
            candidate_directory_url: require_env("CANDIDATE_DIRECTORY_URL")?,
            candidate_directory_api_key: std::env::var("CANDIDATE_DIRECTORY_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            directory_timeout: Duration::from_secs(timeout_secs),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
