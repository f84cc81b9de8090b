//! ALC driver abstraction

use std::ffi::CStr;

/// The three ALC entry points the device manager needs
///
/// [`OpenAl`](crate::OpenAl) forwards to the system library; tests use an
/// in-memory driver.
pub trait AlcDriver {
    /// Native device reference
    type Device;

    /// `alcOpenDevice`; `None` name selects the default device
    fn open_device(&mut self, name: Option<&CStr>) -> Option<Self::Device>;

    /// `alcCloseDevice`; `true` when the driver released the device
    fn close_device(&mut self, device: &Self::Device) -> bool;

    /// `alcGetError`, as the raw native value
    fn last_error(&self, device: &Self::Device) -> i32;
}
