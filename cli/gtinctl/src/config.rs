//! Configuration management.
//!
//! Handles:
//! - Saved defaults (output format, formatting layout)
//! - Environment overrides (`GTIN_FORMAT`, `GTIN_LAYOUT`)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use gtin::Layout;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the output format.
pub const FORMAT_ENV: &str = "GTIN_FORMAT";

/// Environment variable overriding the default layout.
pub const LAYOUT_ENV: &str = "GTIN_LAYOUT";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "gtin", "gtin")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Path of the config file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Layout used by `gtin format` when no template is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_layout: Option<Layout>,

    /// Output format (table or json).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Load config from disk, or return default, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&config_path()?)?;
        config.apply_overrides(
            std::env::var(FORMAT_ENV).ok(),
            std::env::var(LAYOUT_ENV).ok(),
        )?;
        Ok(config)
    }

    /// Like [`Config::load`], but falls back to defaults when the file or the
    /// environment is invalid.
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    /// Like [`Config::load_from`], but falls back to defaults on a malformed file.
    pub fn load_from_or_default(path: &Path) -> Self {
        Self::or_default(Self::load_from(path))
    }

    fn or_default(loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring invalid config");
            Self::default()
        })
    }

    /// Load config from a specific file, or return default if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())).into())
    }

    fn apply_overrides(&mut self, format: Option<String>, layout: Option<String>) -> Result<()> {
        if let Some(format) = format {
            self.format = Some(format);
        }

        if let Some(layout) = layout {
            let layout = layout
                .parse::<Layout>()
                .map_err(|e| CliError::Config(format!("{LAYOUT_ENV}: {e}")))?;
            self.default_layout = Some(layout);
        }

        Ok(())
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    /// Save config to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))
    }
}
