//! Configuration model for strut.
//!
//! This module defines the Config struct that represents the optional user
//! config file at `{config_dir}/strut/config.yaml`. It supports
//! forward-compatible YAML parsing (unknown fields are ignored) and sensible
//! defaults for every field, so a missing file simply yields the default
//! configuration.
//!
//! Config only supplies *defaults*; command-line flags always win. The merge
//! happens in the command layer, and the generator receives fully-resolved
//! paths.

use crate::error::{Result, StrutError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for strut.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default directory under which new projects are created.
    #[serde(default = "default_target_dir")]
    pub target_dir: String,

    /// Default template repository directory.
    #[serde(default = "default_template_repo")]
    pub template_repo: String,
}

// Default value functions for serde
fn default_target_dir() -> String {
    ".".to_string()
}
fn default_template_repo() -> String {
    "~/.strut/templates".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            template_repo: default_template_repo(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            StrutError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| StrutError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the user config file, falling back to defaults when absent.
    ///
    /// A missing file is not an error; a present-but-invalid file is.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Path of the user config file, if a config directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("strut").join("config.yaml"))
    }

    /// Validate config values and return error on invalid values.
    pub fn validate(&self) -> Result<()> {
        if self.target_dir.is_empty() {
            return Err(StrutError::UserError(
                "config validation failed: target_dir must be non-empty".to_string(),
            ));
        }

        if self.template_repo.is_empty() {
            return Err(StrutError::UserError(
                "config validation failed: template_repo must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Expand a leading tilde in a configured or flag-supplied path.
    pub fn expand_path(raw: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(raw).into_owned())
    }
}
