use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every key has a safe default — the engine runs with zero configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where rendered PDFs are stored as flat files.
    pub output_dir: PathBuf,
    /// Hard wall-clock budget for one render, launch to PDF extraction.
    pub render_timeout_secs: u64,
    /// Maximum concurrent Chromium instances; further requests queue.
    pub render_pool_size: usize,
    /// Artifacts older than this are deleted by the retention sweeper.
    pub retention_max_age_hours: u64,
    /// Cadence of the background retention sweep.
    pub sweep_interval_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            output_dir: PathBuf::from(env_or("PDF_OUTPUT_DIR", "temp/pdfs")),
            render_timeout_secs: parse_env("RENDER_TIMEOUT_SECS", 30)?,
            render_pool_size: parse_env("RENDER_POOL_SIZE", 2)?,
            retention_max_age_hours: parse_env("PDF_MAX_AGE_HOURS", 24)?,
            sweep_interval_secs: parse_env("SWEEP_INTERVAL_SECS", 3600)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    pub fn retention_max_age(&self) -> Duration {
        Duration::from_secs(self.retention_max_age_hours * 3600)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}
