//! Configuration module for Formput
//!
//! Handles loading and parsing of YAML configuration files with support for
//! environment variable expansion and validation.

use crate::upload::OutputKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

/// Validate that a URL starts with http:// or https://
fn is_valid_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base endpoint URL, no trailing slash.
    pub endpoint: String,
    /// Per-call deadline in seconds, covering the whole request lifecycle.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub upload: UploadJob,
}

/// The single upload the driver performs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadJob {
    pub file: PathBuf,
    pub destination: String,
    #[serde(default = "default_output")]
    pub output: OutputKind,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_output() -> OutputKind {
    OutputKind::Mp4
}

impl Config {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        ConfigLoader::load(path)
    }

    /// Per-call upload deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_http_url(&self.endpoint) {
            return Err(ConfigError::ValidationError(
                "Invalid endpoint: must start with http:// or https://".into(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than zero".into(),
            ));
        }

        if self.upload.destination.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Upload destination cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
