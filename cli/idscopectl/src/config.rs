//! Configuration management.
//!
//! Handles:
//! - Region order used to resolve national-format phone numbers
//! - Default output format
//! - Optional fixed reference date for identifier decoding

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use idscope_phone::{Region, DEFAULT_REGIONS};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::OutputFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Comma-separated region codes overriding the saved order.
pub const REGIONS_ENV: &str = "IDSCOPE_REGIONS";

/// Output format override.
pub const FORMAT_ENV: &str = "IDSCOPE_FORMAT";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "idscope", "ids")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Path of the config file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Locale contexts in resolution order.
    #[serde(default = "default_regions")]
    pub regions: Vec<Region>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Decode identifiers as of this date instead of today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

fn default_regions() -> Vec<Region> {
    DEFAULT_REGIONS.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            regions: default_regions(),
            format: OutputFormat::default(),
            reference_date: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return default, then apply env overrides.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load config from a specific file, or return default if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Applies `IDSCOPE_REGIONS` and `IDSCOPE_FORMAT` from `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(REGIONS_ENV).filter(|v| !v.trim().is_empty()) {
            self.regions = Region::parse_list(&value)
                .with_context(|| format!("Invalid {REGIONS_ENV} value '{value}'"))?;
        }
        if let Some(value) = lookup(FORMAT_ENV).filter(|v| !v.trim().is_empty()) {
            self.format = value
                .parse()
                .with_context(|| format!("Invalid {FORMAT_ENV} value '{value}'"))?;
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
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// Removes the config file if present.
    pub fn remove(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path).with_context(|| format!("Failed to remove config {:?}", path))?;
        Ok(true)
    }
}
