use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional JSON file overriding the built-in reference tables.
    pub reference_tables: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            reference_tables: std::env::var("ATS_REFERENCE_TABLES")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(8080),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{value}'")),
    }
}
