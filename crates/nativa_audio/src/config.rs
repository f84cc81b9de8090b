//! Audio configuration
//!
//! Read from the `[audio]` table of a TOML file:
//!
//! ```toml
//! [audio]
//! library = "/opt/openal/lib/libopenal.so.1"
//! default_device = "OpenAL Soft"
//! ```

use crate::error::{AudioError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for loading OpenAL and picking a device
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AudioConfig {
    /// OpenAL library to try before the system defaults
    #[serde(default)]
    pub library: Option<PathBuf>,
    /// Device opened when the host asks for the default one
    #[serde(default)]
    pub default_device: Option<String>,
}

impl AudioConfig {
    /// Parse a standalone audio table
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| AudioError::Config(e.to_string()))
    }

    /// Load OpenAL from a specific path first
    pub fn library(mut self, path: impl Into<PathBuf>) -> Self {
        self.library = Some(path.into());
        self
    }

    /// Open this device instead of the driver default
    pub fn default_device(mut self, name: impl Into<String>) -> Self {
        self.default_device = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_table() {
        let config = AudioConfig::from_toml_str("").unwrap();
        assert_eq!(config, AudioConfig::default());
    }

    #[test]
    fn test_parse() {
        let config = AudioConfig::from_toml_str(
            "library = \"/opt/libopenal.so\"\ndefault_device = \"Speakers\"\n",
        )
        .unwrap();
        assert_eq!(config.library, Some(PathBuf::from("/opt/libopenal.so")));
        assert_eq!(config.default_device.as_deref(), Some("Speakers"));
    }

    #[test]
    fn test_parse_error() {
        let err = AudioConfig::from_toml_str("library = 3").unwrap_err();
        assert!(matches!(err, AudioError::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = AudioConfig::default().library("libopenal.so").default_device("Out");
        assert_eq!(config.library, Some(PathBuf::from("libopenal.so")));
        assert_eq!(config.default_device.as_deref(), Some("Out"));
    }
}
