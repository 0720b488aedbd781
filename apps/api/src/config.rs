use anyhow::{anyhow, Context, Result};

use crate::analysis::RoundAugmentation;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, analyses live in process memory only.
    pub redis_url: Option<String>,
    pub store_key_prefix: String,
    pub round_augmentation: RoundAugmentation,
    /// Minimum trimmed JD length accepted at submission.
    pub min_jd_chars: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            store_key_prefix: std::env::var("STORE_KEY_PREFIX").unwrap_or_else(|_| "prp:".to_string()),
            round_augmentation: match optional_env("ROUND_AUGMENTATION") {
                Some(mode) => mode.parse().map_err(|e: String| anyhow!(e))?,
                None => RoundAugmentation::default(),
            },
            min_jd_chars: std::env::var("MIN_JD_CHARS")
                .unwrap_or_else(|_| "200".to_string())
                .parse::<usize>()
                .context("MIN_JD_CHARS must be a non-negative integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
