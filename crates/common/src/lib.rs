//! Shared utilities, configuration, and error handling for Second Brain
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - The validating JSON extractor

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{AppEnv, Config, LogFormat};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
