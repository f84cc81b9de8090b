//! Platform error types

use thiserror::Error;

/// Broad failure category of a [`PlatformError`]
///
/// Hosts that marshal errors across a language boundary usually only need
/// the category; the variant carries the detail for logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller described something the platform cannot express
    Configuration,
    /// A native resource could not be created
    Resource,
    /// The operation does not fit the current state (stale handle, wrong thread)
    State,
    /// The native layer itself failed or lacks the capability
    Platform,
}

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// A style flag ordinal outside the fixed enumeration
    #[error("Unknown style flag: {0}")]
    UnknownStyleFlag(u32),

    /// Window geometry that is not finite or not positive
    #[error("Invalid window geometry: {0}")]
    InvalidGeometry(String),

    /// Backing mode the backend does not define
    #[error("Unsupported backing mode: {0}")]
    UnsupportedBacking(u32),

    /// Configuration could not be parsed or read
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to create the native application context
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// Failed to create window
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// Handle was never issued, or its window has been closed
    #[error("Stale or unknown window handle")]
    InvalidHandle,

    /// Called from a thread that does not own the native UI context
    #[error("Called from a thread that does not own the UI context")]
    WrongThread,

    /// A native call failed after the context was established
    #[error("Native call failed: {0}")]
    Native(String),

    /// Platform not supported on this OS
    #[error("Platform not supported: {0}")]
    Unsupported(String),
}

impl PlatformError {
    /// The failure category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownStyleFlag(_)
            | Self::InvalidGeometry(_)
            | Self::UnsupportedBacking(_)
            | Self::Config(_) => ErrorKind::Configuration,
            Self::InitFailed(_) | Self::WindowCreation(_) => ErrorKind::Resource,
            Self::InvalidHandle | Self::WrongThread => ErrorKind::State,
            Self::Native(_) | Self::Unsupported(_) => ErrorKind::Platform,
        }
    }
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            PlatformError::UnknownStyleFlag(9).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            PlatformError::WindowCreation("nil".into()).kind(),
            ErrorKind::Resource
        );
        assert_eq!(PlatformError::InvalidHandle.kind(), ErrorKind::State);
        assert_eq!(PlatformError::WrongThread.kind(), ErrorKind::State);
        assert_eq!(
            PlatformError::Native("BadWindow".into()).kind(),
            ErrorKind::Platform
        );
    }

    #[test]
    fn test_error_display() {
        let err = PlatformError::UnknownStyleFlag(42);
        assert_eq!(err.to_string(), "Unknown style flag: 42");
    }
}
