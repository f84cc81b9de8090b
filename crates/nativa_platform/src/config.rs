//! Platform configuration
//!
//! Read from the `[platform]` table of a TOML file:
//!
//! ```toml
//! [platform]
//! display = ":1"
//! activate = false
//! ```

use crate::error::{PlatformError, Result};
use serde::{Deserialize, Serialize};

/// Settings consumed when the native application context is created
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlatformConfig {
    /// X11 display name; `None` uses `$DISPLAY`
    #[serde(default)]
    pub display: Option<String>,
    /// Bring the application to the foreground on launch (macOS)
    #[serde(default = "default_activate")]
    pub activate: bool,
}

fn default_activate() -> bool {
    true
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            display: None,
            activate: default_activate(),
        }
    }
}

impl PlatformConfig {
    /// Parse a standalone platform table
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| PlatformError::Config(e.to_string()))
    }

    /// Use a specific X11 display
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Set whether to activate the application on launch
    pub fn activate(mut self, activate: bool) -> Self {
        self.activate = activate;
        self
    }
}
