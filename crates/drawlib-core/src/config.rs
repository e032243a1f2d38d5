//! Panel configuration.
//!
//! Settings are stored as JSON or TOML, chosen by file extension. Missing
//! keys fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LibraryError, LibraryResult};

/// Configuration for instancing and drag export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Assign a fresh stroke seed to every instanced element.
    pub randomize_seed: bool,
    /// Value written to the `source` field of exported documents.
    pub payload_source: String,
    /// Pretty-print exported documents.
    pub pretty_payload: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            randomize_seed: true,
            payload_source: "drawlib".to_string(),
            pretty_payload: false,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> LibraryResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> LibraryResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(LibraryError::UnsupportedFormat(path.display().to_string()));
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded panel config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> LibraryResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(LibraryError::UnsupportedFormat(path.display().to_string()));
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.payload_source.trim().is_empty() {
            return Err(LibraryError::InvalidSetting {
                key: "payload_source".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.payload_source.chars().any(char::is_control) {
            return Err(LibraryError::InvalidSetting {
                key: "payload_source".to_string(),
                reason: "must not contain control characters".to_string(),
            });
        }

        Ok(())
    }
}
