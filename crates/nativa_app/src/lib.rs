//! Nativa Application Facade
//!
//! Picks the native windowing backend for the build target and bundles it
//! with audio devices, configuration and logging.
//!
//! | Target                  | Backend        |
//! |-------------------------|----------------|
//! | macOS                   | `CocoaBackend` |
//! | Linux, BSDs, other Unix | `X11Backend`   |
//!
//! # Example
//!
//! ```ignore
//! use nativa_app::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = NativaConfig::load(nativa_app::CONFIG_FILE)?;
//!     nativa_app::init_logging(&config.log_filter);
//!
//!     let mut app = nativa_app::application(&config);
//!     let window = app.create_window(&WindowDescriptor::new(800.0, 600.0))?;
//!     app.warp_pointer(window, 100, 100)?;
//!
//!     let mut audio = nativa_app::audio(&config)?;
//!     let device = audio.open(None)?;
//!
//!     app.run_blocking()?;
//!     audio.close(device);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod logging;

pub use config::{NativaConfig, CONFIG_FILE};
pub use error::{NativaError, Result};
pub use logging::init_logging;

pub use nativa_audio as audio_devices;
pub use nativa_platform as platform;

use nativa_audio::{DeviceManager, OpenAl};

/// Native backend of this target
#[cfg(target_os = "macos")]
pub type NativeBackend = nativa_platform_cocoa::CocoaBackend;

/// Native backend of this target
#[cfg(all(unix, not(target_os = "macos")))]
pub type NativeBackend = nativa_platform_x11::X11Backend;

/// Application context over the native backend
#[cfg(unix)]
pub type NativeApplication = nativa_platform::Application<NativeBackend>;

/// Create the application context for this target
///
/// The native context itself is created lazily by the first operation.
#[cfg(unix)]
pub fn application(config: &NativaConfig) -> NativeApplication {
    NativeApplication::new(config.platform.clone())
}

/// Load OpenAL and return a device manager
pub fn audio(config: &NativaConfig) -> Result<DeviceManager<OpenAl>> {
    Ok(DeviceManager::from_config(&config.audio)?)
}

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::NativaConfig;
    pub use crate::error::{NativaError, Result};

    #[cfg(unix)]
    pub use crate::{NativeApplication, NativeBackend};

    pub use nativa_audio::{DeviceErrorCode, DeviceHandle, DeviceManager};
    pub use nativa_platform::prelude::*;
}
