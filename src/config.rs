//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_FILE_NAME: &str = "Contacts";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the contacts file (default: "data")
    pub data_dir: PathBuf,

    /// Base name of the contacts file, without extension (default: "Contacts")
    pub file_name: String,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_DIR`: Directory for the contacts file (default: "data")
    /// - `CONTACTS_FILE_NAME`: Base file name (default: "Contacts")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let data_dir = env::var("CONTACTS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let file_name = match env::var("CONTACTS_FILE_NAME") {
            Ok(val) => Self::parse_file_name("CONTACTS_FILE_NAME", val)?,
            Err(_) => DEFAULT_FILE_NAME.to_string(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_dir,
            file_name,
            log_level,
        })
    }

    /// Replace the base file name, validating it like `CONTACTS_FILE_NAME`.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> ConfigResult<Self> {
        self.file_name = Self::parse_file_name("file name", file_name.into())?;
        Ok(self)
    }

    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    /// Location of the contacts file: `<data_dir>/<file_name>.json`.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.file_name))
    }

    /// A base file name must be a single non-blank path component.
    fn parse_file_name(var_name: &str, val: String) -> ConfigResult<String> {
        let trimmed = val.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        if trimmed.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must not contain a path separator, got: {}", val),
            });
        }
        Ok(trimmed.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
