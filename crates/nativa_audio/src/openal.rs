//! OpenAL loaded at run time
//!
//! The library is resolved with `libloading` so the crate builds and links
//! without OpenAL development files. Only the device entry points are bound.

use crate::config::AudioConfig;
use crate::driver::AlcDriver;
use crate::error::{AudioError, Result};
use libloading::Library;
use std::ffi::{c_char, c_void, CStr, OsString};
use std::ptr::{self, NonNull};
use tracing::debug;

type AlcOpenDevice = unsafe extern "C" fn(*const c_char) -> *mut c_void;
type AlcCloseDevice = unsafe extern "C" fn(*mut c_void) -> u8;
type AlcGetError = unsafe extern "C" fn(*mut c_void) -> i32;

/// Library names tried after the configured path
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARIES: &[&str] = &["/System/Library/Frameworks/OpenAL.framework/OpenAL"];

/// Library names tried after the configured path
#[cfg(windows)]
pub const DEFAULT_LIBRARIES: &[&str] = &["OpenAL32.dll", "soft_oal.dll"];

/// Library names tried after the configured path
#[cfg(all(unix, not(target_os = "macos")))]
pub const DEFAULT_LIBRARIES: &[&str] = &["libopenal.so.1", "libopenal.so"];

/// Library names tried after the configured path
#[cfg(not(any(unix, windows)))]
pub const DEFAULT_LIBRARIES: &[&str] = &[];

/// An open `ALCdevice*`
#[derive(Debug, PartialEq, Eq)]
pub struct AlcDevice(NonNull<c_void>);

// ALC device pointers are not tied to the thread that opened them
unsafe impl Send for AlcDevice {}

/// The system OpenAL library
pub struct OpenAl {
    open: AlcOpenDevice,
    close: AlcCloseDevice,
    get_error: AlcGetError,
    // Keeps the function pointers above valid
    _library: Library,
}

impl OpenAl {
    /// Load OpenAL, trying `config.library` and then [`DEFAULT_LIBRARIES`]
    pub fn load(config: &AudioConfig) -> Result<Self> {
        let mut failures = Vec::new();
        for candidate in candidates(config) {
            match Self::load_from(&candidate) {
                Ok(openal) => {
                    debug!(library = ?candidate, "OpenAL loaded");
                    return Ok(openal);
                }
                Err(e) => {
                    debug!(library = ?candidate, error = %e, "OpenAL candidate rejected");
                    failures.push(format!("{}: {e}", candidate.to_string_lossy()));
                }
            }
        }

        if failures.is_empty() {
            return Err(AudioError::LibraryUnavailable(
                "no OpenAL library known for this platform".to_string(),
            ));
        }
        Err(AudioError::LibraryUnavailable(failures.join("; ")))
    }

    fn load_from(path: &OsString) -> std::result::Result<Self, libloading::Error> {
        // SAFETY: OpenAL has no load-time initializers with preconditions,
        // and the symbol types match the ALC 1.1 declarations.
        unsafe {
            let library = Library::new(path)?;
            let open = *library.get::<AlcOpenDevice>(b"alcOpenDevice\0")?;
            let close = *library.get::<AlcCloseDevice>(b"alcCloseDevice\0")?;
            let get_error = *library.get::<AlcGetError>(b"alcGetError\0")?;
            Ok(Self {
                open,
                close,
                get_error,
                _library: library,
            })
        }
    }
}

fn candidates(config: &AudioConfig) -> Vec<OsString> {
    config
        .library
        .iter()
        .map(|path| path.clone().into_os_string())
        .chain(DEFAULT_LIBRARIES.iter().map(OsString::from))
        .collect()
}

impl AlcDriver for OpenAl {
    type Device = AlcDevice;

    fn open_device(&mut self, name: Option<&CStr>) -> Option<AlcDevice> {
        let name = name.map_or(ptr::null(), CStr::as_ptr);
        // SAFETY: `name` is null or a NUL-terminated string that outlives the call
        NonNull::new(unsafe { (self.open)(name) }).map(AlcDevice)
    }

    fn close_device(&mut self, device: &AlcDevice) -> bool {
        // SAFETY: the manager closes each opened device exactly once
        unsafe { (self.close)(device.0.as_ptr()) != 0 }
    }

    fn last_error(&self, device: &AlcDevice) -> i32 {
        // SAFETY: `device` is open; the manager drops its handle on close
        unsafe { (self.get_error)(device.0.as_ptr()) }
    }
}
