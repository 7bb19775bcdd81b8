//! Demo settings, read from an optional TOML file.
//!
//! Lookup order: an explicit `--config` path, then
//! `<config dir>/wargcv/config.toml` if it exists, then defaults.
//! Command line flags override whatever the file says.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{i} - [{arg}]` lines followed by the tail line.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    /// Argument index the printed tail starts at (default: 2).
    #[serde(default = "default_tail_index")]
    pub tail_index: i64,
    /// Output format (default: text).
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_tail_index() -> i64 {
    2
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tail_index: default_tail_index(),
            format: OutputFormat::default(),
        }
    }
}

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl DemoConfig {
    /// Default location: `<config dir>/wargcv/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wargcv").join("config.toml"))
    }

    /// Load from `explicit` if given (it must exist), else from the default
    /// location if a file is there, else fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Apply command line overrides on top of the loaded values.
    pub fn with_overrides(mut self, tail_index: Option<i64>, format: Option<OutputFormat>) -> Self {
        if let Some(tail_index) = tail_index {
            self.tail_index = tail_index;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
