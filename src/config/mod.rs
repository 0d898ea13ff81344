//! Configuration module
//!
//! Handles loading and saving of council-report.toml configuration files.
//! Defines Config, Layout, and Branding types.

mod types;

pub use types::{Branding, Config, Layout};

use crate::error::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "council-report.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReportError::Config(format!(
            "Cannot read config from '{}': {}. Run 'council-report config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Load an explicitly requested config, or the default file if it exists.
///
/// Without an explicit path, a missing default file yields `Config::default()`.
pub fn resolve(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load(&path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(&default_path)
            } else {
                debug!("no {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| ReportError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    let layout = &config.layout;

    if layout.content_width() <= 0.0 {
        return Err(ReportError::Config(
            "margins leave no horizontal space on the page".to_string(),
        ));
    }
    if layout.content_bottom() <= layout.margin_mm {
        return Err(ReportError::Config(
            "margins and footer buffer leave no vertical space on the page".to_string(),
        ));
    }
    if layout.line_height_factor <= 0.0 {
        return Err(ReportError::Config(
            "line_height_factor must be positive".to_string(),
        ));
    }

    Ok(())
}
