//! Nativa Audio Devices
//!
//! Opens, closes and queries audio output devices through OpenAL's ALC
//! layer. The library is loaded at run time; nothing links against OpenAL.
//!
//! # Example
//!
//! ```ignore
//! use nativa_audio::{AudioConfig, DeviceErrorCode, DeviceManager};
//!
//! let mut audio = DeviceManager::from_config(&AudioConfig::default())?;
//! let device = audio.open(None)?;
//! assert_eq!(audio.error(device), DeviceErrorCode::NoError);
//! assert!(audio.close(device));
//! ```

mod code;
mod config;
mod driver;
mod error;
mod manager;
mod openal;

pub use code::{
    DeviceErrorCode, ALC_INVALID_CONTEXT, ALC_INVALID_DEVICE, ALC_INVALID_ENUM,
    ALC_INVALID_VALUE, ALC_NO_ERROR, ALC_OUT_OF_MEMORY,
};
pub use config::AudioConfig;
pub use driver::AlcDriver;
pub use error::{AudioError, Result};
pub use manager::{DeviceHandle, DeviceManager};
pub use openal::{AlcDevice, OpenAl, DEFAULT_LIBRARIES};
