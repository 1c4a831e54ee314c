use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODELS;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Ordered model identifiers for the provider's first-success-wins loop.
    pub models: Vec<String>,
    /// Per-attempt timeout for a single backend call.
    pub llm_timeout_secs: u64,
    /// How many catalog questions are blended into a generated set.
    /// Empirically tuned; not a derived invariant.
    pub blend_catalog_count: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let models = match std::env::var("GEMINI_MODELS") {
            Ok(raw) => raw
                .split(',')
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
            Err(_) => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        };

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            models,
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            blend_catalog_count: std::env::var("BLEND_CATALOG_COUNT")
                .unwrap_or_else(|_| "4".to_string())
                .parse::<usize>()
                .context("BLEND_CATALOG_COUNT must be a non-negative integer")?,
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
