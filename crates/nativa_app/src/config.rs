//! Nativa configuration file
//!
//! Every table is optional:
//!
//! ```toml
//! log_filter = "nativa_platform=debug,info"
//!
//! [platform]
//! display = ":0"
//! activate = true
//!
//! [audio]
//! default_device = "OpenAL Soft"
//! ```

use crate::error::{NativaError, Result};
use nativa_audio::AudioConfig;
use nativa_platform::PlatformConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name looked up by hosts
pub const CONFIG_FILE: &str = "nativa.toml";

/// Top-level configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NativaConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for NativaConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            platform: PlatformConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl NativaConfig {
    /// Parse a configuration document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| NativaError::Config(e.to_string()))
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| NativaError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = NativaConfig::from_toml_str("").unwrap();
        assert_eq!(config, NativaConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_full_document() {
        let config = NativaConfig::from_toml_str(
            r#"
log_filter = "nativa_platform=trace"

[platform]
display = ":2"
activate = false

[audio]
library = "/usr/lib/libopenal.so.1"
default_device = "Headset"
"#,
        )
        .unwrap();

        assert_eq!(config.log_filter, "nativa_platform=trace");
        assert_eq!(config.platform.display.as_deref(), Some(":2"));
        assert!(!config.platform.activate);
        assert_eq!(
            config.audio.library,
            Some(PathBuf::from("/usr/lib/libopenal.so.1"))
        );
        assert_eq!(config.audio.default_device.as_deref(), Some("Headset"));
    }

    #[test]
    fn test_partial_tables_keep_defaults() {
        let config = NativaConfig::from_toml_str("[platform]\ndisplay = \":1\"\n").unwrap();
        assert!(config.platform.activate);
        assert_eq!(config.audio, AudioConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = NativaConfig::default();
        config.platform.display = Some(":9".to_string());
        let text = config.to_toml_string().unwrap();
        assert_eq!(NativaConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_document() {
        let err = NativaConfig::from_toml_str("[platform\n").unwrap_err();
        assert!(matches!(err, NativaError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = NativaConfig::load("/nonexistent/nativa/nativa.toml").unwrap_err();
        assert!(matches!(err, NativaError::Io(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("nativa-{}.toml", std::process::id()));
        fs::write(&path, "log_filter = \"debug\"\n").unwrap();
        let config = NativaConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.log_filter, "debug");
    }
}
