//! Centralized path definitions for service-result
//!
//! ```text
//! ~/.service-result/
//! └── config.toml               # Normalizer settings (header names, policies)
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".service-result";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global service-result directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get path to the global `config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
