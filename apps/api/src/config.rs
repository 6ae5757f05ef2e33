use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::feed::scorer::ScorerKind;
use crate::matching::engine::DEFAULT_TEMPERATURE;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Used when a request omits its temperature.
    pub default_temperature: f64,
    /// JSON catalog of job records. The built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Backend for `POST /api/v1/feed/score`: `title` (default) or `vector`.
    pub similarity_scorer: ScorerKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_temperature = match optional_env("DEFAULT_TEMPERATURE") {
            Some(raw) => raw
                .parse::<f64>()
                .context("DEFAULT_TEMPERATURE must be a number")?,
            None => DEFAULT_TEMPERATURE,
        };
        if !(0.0..=1.0).contains(&default_temperature) {
            bail!("DEFAULT_TEMPERATURE must be between 0 and 1, got {default_temperature}");
        }

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            default_temperature,
            catalog_path: optional_env("CATALOG_PATH").map(PathBuf::from),
            similarity_scorer: optional_env("SIMILARITY_SCORER")
                .map(|raw| raw.parse::<ScorerKind>())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_temperature: DEFAULT_TEMPERATURE,
            catalog_path: None,
            similarity_scorer: ScorerKind::default(),
        }
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
