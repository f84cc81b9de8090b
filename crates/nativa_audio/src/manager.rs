//! Audio device manager
//!
//! Owns every open device behind a generation-checked [`DeviceHandle`]. A
//! handle stops resolving the moment its device is closed, so double closes
//! and queries on closed devices are answered without touching the driver.

use crate::code::DeviceErrorCode;
use crate::config::AudioConfig;
use crate::driver::AlcDriver;
use crate::error::{AudioError, Result};
use crate::openal::OpenAl;
use slotmap::SlotMap;
use std::ffi::CString;
use tracing::{debug, trace, warn};

slotmap::new_key_type! {
    /// Opaque reference to an open audio output device
    pub struct DeviceHandle;
}

/// Open audio devices of one driver
pub struct DeviceManager<D: AlcDriver> {
    driver: D,
    devices: SlotMap<DeviceHandle, D::Device>,
    default_device: Option<String>,
}

impl DeviceManager<OpenAl> {
    /// Load OpenAL and apply the configured default device
    pub fn from_config(config: &AudioConfig) -> Result<Self> {
        let driver = OpenAl::load(config)?;
        Ok(Self::new(driver).with_default_device(config.default_device.clone()))
    }
}

impl<D: AlcDriver> DeviceManager<D> {
    /// Manage devices of `driver`
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            devices: SlotMap::with_key(),
            default_device: None,
        }
    }

    /// Device name used by `open(None)`; `None` keeps the driver default
    pub fn with_default_device(mut self, name: Option<String>) -> Self {
        self.default_device = name;
        self
    }

    /// Get the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Open the named device, or the default one
    pub fn open(&mut self, name: Option<&str>) -> Result<DeviceHandle> {
        let name = name.or(self.default_device.as_deref());
        let c_name = name
            .map(|n| CString::new(n).map_err(|_| AudioError::InvalidDeviceName(n.to_string())))
            .transpose()?;

        let device = self
            .driver
            .open_device(c_name.as_deref())
            .ok_or_else(|| AudioError::DeviceUnavailable(name.map(str::to_string)))?;

        let handle = self.devices.insert(device);
        debug!(?handle, device = name.unwrap_or("<default>"), "audio device opened");
        Ok(handle)
    }

    /// Close a device
    ///
    /// Returns `false` for handles that are unknown or already closed, and
    /// otherwise what the driver reports. The handle is invalid afterwards
    /// either way.
    pub fn close(&mut self, handle: DeviceHandle) -> bool {
        let Some(device) = self.devices.remove(handle) else {
            trace!(?handle, "close on stale device handle");
            return false;
        };

        let closed = self.driver.close_device(&device);
        if closed {
            debug!(?handle, "audio device closed");
        } else {
            warn!(?handle, "driver refused to close audio device");
        }
        closed
    }

    /// Last error of a device, mapped through the ALC table
    ///
    /// Values outside the table read as [`DeviceErrorCode::NoError`]; a stale
    /// handle reads as [`DeviceErrorCode::InvalidDevice`].
    pub fn error(&self, handle: DeviceHandle) -> DeviceErrorCode {
        match self.error_strict(handle) {
            Ok(code) => code,
            Err(AudioError::StaleHandle) => DeviceErrorCode::InvalidDevice,
            Err(_) => DeviceErrorCode::NoError,
        }
    }

    /// Last error of a device, surfacing what [`error`](Self::error) hides
    pub fn error_strict(&self, handle: DeviceHandle) -> Result<DeviceErrorCode> {
        let device = self.devices.get(handle).ok_or(AudioError::StaleHandle)?;
        let value = self.driver.last_error(device);
        DeviceErrorCode::try_from_native(value).ok_or_else(|| {
            trace!(?handle, value, "unmapped native audio error");
            AudioError::UnmappedNativeError(value)
        })
    }

    /// Check if a handle refers to an open device
    pub fn is_open(&self, handle: DeviceHandle) -> bool {
        self.devices.contains_key(handle)
    }

    /// Number of open devices
    pub fn open_count(&self) -> usize {
        self.devices.len()
    }
}

impl<D: AlcDriver> Drop for DeviceManager<D> {
    fn drop(&mut self) {
        for (handle, device) in self.devices.drain() {
            if !self.driver.close_device(&device) {
                warn!(?handle, "audio device left open at shutdown");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{ALC_INVALID_VALUE, ALC_NO_ERROR};
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::ffi::CStr;
    use std::rc::Rc;

    /// In-memory driver; devices are numbered from 1
    #[derive(Default)]
    struct FakeDriver {
        names: HashMap<u32, Option<String>>,
        next: u32,
        available: Option<Vec<&'static str>>,
        error: i32,
        refuse_close: bool,
        closes: Rc<Cell<usize>>,
    }

    impl AlcDriver for FakeDriver {
        type Device = u32;

        fn open_device(&mut self, name: Option<&CStr>) -> Option<u32> {
            let name = name.map(|n| n.to_string_lossy().into_owned());
            if let (Some(available), Some(n)) = (&self.available, &name) {
                if !available.contains(&n.as_str()) {
                    return None;
                }
            }
            self.next += 1;
            self.names.insert(self.next, name);
            Some(self.next)
        }

        fn close_device(&mut self, device: &u32) -> bool {
            self.closes.set(self.closes.get() + 1);
            self.names.remove(device);
            !self.refuse_close
        }

        fn last_error(&self, _device: &u32) -> i32 {
            self.error
        }
    }

    fn manager() -> DeviceManager<FakeDriver> {
        DeviceManager::new(FakeDriver::default())
    }

    #[test]
    fn test_open_default_query_close() {
        let mut audio = manager();
        let device = audio.open(None).unwrap();
        assert_eq!(audio.error(device), DeviceErrorCode::NoError);
        assert!(audio.close(device));
        assert_eq!(audio.open_count(), 0);
    }

    #[test]
    fn test_named_device_passed_through() {
        let mut audio = manager();
        let device = audio.open(Some("Speakers")).unwrap();
        assert!(audio.is_open(device));
        assert_eq!(
            audio.driver().names.values().next().unwrap().as_deref(),
            Some("Speakers")
        );
    }

    #[test]
    fn test_configured_default_device() {
        let mut audio = manager().with_default_device(Some("Headset".to_string()));
        audio.open(None).unwrap();
        audio.open(Some("Speakers")).unwrap();

        let mut names: Vec<_> = audio
            .driver()
            .names
            .values()
            .map(|n| n.clone().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, ["Headset", "Speakers"]);
    }

    #[test]
    fn test_unavailable_device_yields_no_handle() {
        let mut audio = DeviceManager::new(FakeDriver {
            available: Some(vec!["Speakers"]),
            ..FakeDriver::default()
        });
        let err = audio.open(Some("Missing")).unwrap_err();
        assert!(matches!(err, AudioError::DeviceUnavailable(Some(ref n)) if n == "Missing"));
        assert_eq!(audio.open_count(), 0);
    }

    #[test]
    fn test_interior_nul_rejected() {
        let mut audio = manager();
        let err = audio.open(Some("bad\0name")).unwrap_err();
        assert!(matches!(err, AudioError::InvalidDeviceName(_)));
        assert!(audio.driver().names.is_empty());
    }

    #[test]
    fn test_close_twice_returns_false() {
        let closes = Rc::new(Cell::new(0));
        let mut audio = DeviceManager::new(FakeDriver {
            closes: closes.clone(),
            ..FakeDriver::default()
        });
        let device = audio.open(None).unwrap();
        assert!(audio.close(device));
        assert!(!audio.close(device));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_close_never_opened_returns_false() {
        let mut audio = manager();
        assert!(!audio.close(DeviceHandle::default()));
    }

    #[test]
    fn test_refused_close_still_invalidates() {
        let mut audio = DeviceManager::new(FakeDriver {
            refuse_close: true,
            ..FakeDriver::default()
        });
        let device = audio.open(None).unwrap();
        assert!(!audio.close(device));
        assert!(!audio.is_open(device));
    }

    #[test]
    fn test_mapped_error() {
        let mut audio = DeviceManager::new(FakeDriver {
            error: ALC_INVALID_VALUE,
            ..FakeDriver::default()
        });
        let device = audio.open(None).unwrap();
        assert_eq!(audio.error(device), DeviceErrorCode::InvalidValue);
        assert_eq!(
            audio.error_strict(device).unwrap(),
            DeviceErrorCode::InvalidValue
        );
    }

    #[test]
    fn test_unmapped_error_reads_as_no_error() {
        for value in [1, 0xA006, -7, 0x7FFF_FFFF] {
            let mut audio = DeviceManager::new(FakeDriver {
                error: value,
                ..FakeDriver::default()
            });
            let device = audio.open(None).unwrap();
            assert_eq!(audio.error(device), DeviceErrorCode::NoError);
            assert!(matches!(
                audio.error_strict(device),
                Err(AudioError::UnmappedNativeError(v)) if v == value
            ));
        }
    }

    #[test]
    fn test_stale_handle_error() {
        let mut audio = DeviceManager::new(FakeDriver {
            error: ALC_NO_ERROR,
            ..FakeDriver::default()
        });
        let device = audio.open(None).unwrap();
        audio.close(device);
        assert_eq!(audio.error(device), DeviceErrorCode::InvalidDevice);
        assert!(matches!(
            audio.error_strict(device),
            Err(AudioError::StaleHandle)
        ));
    }

    #[test]
    fn test_drop_closes_open_devices() {
        let closes = Rc::new(Cell::new(0));
        {
            let mut audio = DeviceManager::new(FakeDriver {
                closes: closes.clone(),
                ..FakeDriver::default()
            });
            audio.open(None).unwrap();
            audio.open(None).unwrap();
            let third = audio.open(None).unwrap();
            audio.close(third);
        }
        assert_eq!(closes.get(), 3);
    }
}
