//! Error types for nativa_app

use nativa_audio::AudioError;
use nativa_platform::PlatformError;
use thiserror::Error;

/// Errors surfaced by the facade
#[derive(Error, Debug)]
pub enum NativaError {
    /// Windowing, event loop or pointer failure
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Audio device failure
    #[error(transparent)]
    Audio(#[from] AudioError),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for nativa_app operations
pub type Result<T> = std::result::Result<T, NativaError>;
