//! Audio error types

use thiserror::Error;

/// Audio device errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// No OpenAL library could be loaded
    #[error("OpenAL library unavailable: {0}")]
    LibraryUnavailable(String),

    /// The driver returned no device
    #[error("Audio device unavailable: {}", .0.as_deref().unwrap_or("<default>"))]
    DeviceUnavailable(Option<String>),

    /// Device names are passed as C strings and cannot contain NUL
    #[error("Invalid device name: {0:?}")]
    InvalidDeviceName(String),

    /// Handle was never issued, or its device has been closed
    #[error("Stale or unknown device handle")]
    StaleHandle,

    /// The driver reported an error value outside the ALC table
    #[error("Unmapped native audio error: {0:#x}")]
    UnmappedNativeError(i32),

    /// Configuration could not be parsed or read
    #[error("Invalid audio configuration: {0}")]
    Config(String),
}

/// Result type for audio operations
pub type Result<T> = std::result::Result<T, AudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_display() {
        let err = AudioError::DeviceUnavailable(None);
        assert_eq!(err.to_string(), "Audio device unavailable: <default>");

        let err = AudioError::DeviceUnavailable(Some("Speakers".to_string()));
        assert_eq!(err.to_string(), "Audio device unavailable: Speakers");
    }

    #[test]
    fn test_unmapped_shows_hex() {
        let err = AudioError::UnmappedNativeError(0xA0FF);
        assert_eq!(err.to_string(), "Unmapped native audio error: 0xa0ff");
    }
}
