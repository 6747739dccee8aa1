mod config;
pub mod database;

pub use config::{Config, DefaultsConfig, SessionConfig, ShareConfig};
pub use database::{Database, WorkoutRecord};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/walkr[-dev]/` based on WALKR_ENV.
///
/// Set WALKR_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WALKR_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("walkr-dev")
    } else {
        base_dir.join("walkr")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
