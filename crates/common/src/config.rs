//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables. Loading never
//! terminates the process; the binary decides what to do with an error.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Deployment environment, drives cookie hardening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => AppEnv::Production,
            _ => AppEnv::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, AppEnv::Production)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON output, anything else is pretty
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,

    /// HS256 secret used to sign session tokens
    #[serde(skip_serializing)]
    pub jwt_secret: String,

    /// Runtime configuration
    pub app_env: AppEnv,
    pub port: u16,
    pub database_max_connections: u32,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required and must be non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("{key} is required"))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| anyhow!("DATABASE_MAX_CONNECTIONS must be a positive integer"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let log_format = LogFormat::parse(lookup("LOG_FORMAT").as_deref());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            app_env: AppEnv::parse(lookup("APP_ENV")),
            port,
            database_max_connections,
            log_format,
        })
    }
}
