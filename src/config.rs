//! Normalizer configuration
//!
//! The defaults reproduce the stock header names and the 422 validation
//! status. A TOML file may override them:
//!
//! ```toml
//! validation_status = 422
//! paging_presence = "any-header"
//!
//! [headers]
//! paging_start = "x-paging-start"
//! flash_message = "x-flash-message"
//! ```
//!
//! Stored at `~/.service-result/config.toml` unless a path is given.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors that can occur while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading or writing the config file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A configured header name is empty or malformed
    #[error("invalid header name: {0:?}")]
    InvalidHeaderName(String),

    /// Explicitly requested config file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
}

/// When a paging record is produced from the paging headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PagingPresence {
    /// At least one value is a non-zero integer (a lone `start: 0` is ignored)
    #[default]
    Truthy,
    /// At least one value parses as an integer, zero included
    AnyHeader,
}

impl std::fmt::Display for PagingPresence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truthy => write!(f, "truthy"),
            Self::AnyHeader => write!(f, "any-header"),
        }
    }
}

impl std::str::FromStr for PagingPresence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truthy" => Ok(Self::Truthy),
            "any-header" => Ok(Self::AnyHeader),
            _ => Err(format!("Invalid paging presence: {s}. Use: truthy, any-header")),
        }
    }
}

/// Header names read by the extractors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderNames {
    /// Paging offset header
    #[serde(default = "default_paging_start")]
    pub paging_start: String,
    /// Paging size header
    #[serde(default = "default_paging_limit")]
    pub paging_limit: String,
    /// Paging total header
    #[serde(default = "default_paging_total")]
    pub paging_total: String,
    /// Flash kind header
    #[serde(default = "default_flash_type")]
    pub flash_type: String,
    /// Flash text header
    #[serde(default = "default_flash_message")]
    pub flash_message: String,
}

fn default_paging_start() -> String {
    "x-paging-start".to_string()
}

fn default_paging_limit() -> String {
    "x-paging-limit".to_string()
}

fn default_paging_total() -> String {
    "x-paging-total".to_string()
}

fn default_flash_type() -> String {
    "x-flash-type".to_string()
}

fn default_flash_message() -> String {
    "x-flash-message".to_string()
}

impl Default for HeaderNames {
    fn default() -> Self {
        Self {
            paging_start: default_paging_start(),
            paging_limit: default_paging_limit(),
            paging_total: default_paging_total(),
            flash_type: default_flash_type(),
            flash_message: default_flash_message(),
        }
    }
}

impl HeaderNames {
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut String> {
        [
            &mut self.paging_start,
            &mut self.paging_limit,
            &mut self.paging_total,
            &mut self.flash_type,
            &mut self.flash_message,
        ]
        .into_iter()
    }
}

/// Settings applied by [`crate::Normalizer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Status whose body is reported as validation errors
    #[serde(default = "default_validation_status")]
    pub validation_status: u16,
    /// Paging presence policy
    #[serde(default)]
    pub paging_presence: PagingPresence,
    /// Header names
    #[serde(default)]
    pub headers: HeaderNames,
}

const fn default_validation_status() -> u16 {
    422
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            validation_status: default_validation_status(),
            paging_presence: PagingPresence::default(),
            headers: HeaderNames::default(),
        }
    }
}

impl NormalizerConfig {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Parse config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.normalized()
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded normalizer config from {}", path.display());
        Ok(config)
    }

    /// Load an explicit config file, or the default one if it exists
    ///
    /// An explicit path must exist. A missing default file yields the
    /// built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = Self::config_path();
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            log::debug!("no config at {}, using defaults", default_path.display());
            Ok(Self::default())
        }
    }

    /// Render config as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Validate header names and lower-case them
    fn normalized(mut self) -> Result<Self, ConfigError> {
        for name in self.headers.iter_mut() {
            let invalid = name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == ':');
            if invalid {
                return Err(ConfigError::InvalidHeaderName(name.clone()));
            }
            name.make_ascii_lowercase();
        }
        Ok(self)
    }
}
