//! User configuration and preferences

use crate::cli::{AppConfig, DEFAULT_OUTPUT};
use crate::error::{NumsortError, Result};
use crate::numbers::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Output file name used when the output prompt is left empty
    pub default_output: String,
    /// Delimiter assumed for input files
    pub default_delimiter: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            default_output: DEFAULT_OUTPUT.to_string(),
            default_delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl UserConfig {
    /// Get the config file path (~/.config/numsort/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("numsort").join("config.json"))
    }

    /// Load config from file, or create default if doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            NumsortError::ConfigError("Could not determine config directory".to_string())
        })?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            NumsortError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            NumsortError::ConfigError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Takes the delimiter and output name given on the command line as new defaults
    pub fn remember(&mut self, config: &AppConfig) {
        if let Some(ref delimiter) = config.delimiter {
            self.default_delimiter = delimiter.clone();
        }
        if let Some(ref output) = config.output {
            self.default_output = output.to_string_lossy().into_owned();
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            NumsortError::ConfigError("Could not determine config directory".to_string())
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                NumsortError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            NumsortError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, contents).map_err(|e| {
            NumsortError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }
}
