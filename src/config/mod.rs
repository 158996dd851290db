//! Configuration module
//!
//! Handles loading and saving of litemark.toml configuration files.
//! Defines Config, Output, Html and PreferencesLocation types.

mod types;

pub use types::{Config, Html, Output, OutputFormat, PreferencesLocation};

use crate::error::{LitemarkError, Result};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "litemark.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        LitemarkError::Config(format!(
            "Cannot read config from '{}': {}. Run 'litemark config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Load an explicit config, or litemark.toml if present, or defaults
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        log::info!("Using config file {}", fallback.display());
        load(fallback)
    } else {
        log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
        Ok(Config::default())
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    if !config.html.has_valid_heading_tag() {
        return Err(LitemarkError::Config(format!(
            "Invalid html.heading_tag '{}': expected one of h1..h6",
            config.html.heading_tag
        )));
    }
    Ok(())
}
