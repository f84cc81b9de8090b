//! Device error codes
//!
//! The six codes a host sees, and the ALC values they come from.

/// Native `ALC_NO_ERROR`
pub const ALC_NO_ERROR: i32 = 0;
/// Native `ALC_INVALID_DEVICE`
pub const ALC_INVALID_DEVICE: i32 = 0xA001;
/// Native `ALC_INVALID_CONTEXT`
pub const ALC_INVALID_CONTEXT: i32 = 0xA002;
/// Native `ALC_INVALID_ENUM`
pub const ALC_INVALID_ENUM: i32 = 0xA003;
/// Native `ALC_INVALID_VALUE`
pub const ALC_INVALID_VALUE: i32 = 0xA004;
/// Native `ALC_OUT_OF_MEMORY`
pub const ALC_OUT_OF_MEMORY: i32 = 0xA005;

/// Last error of an audio device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DeviceErrorCode {
    #[default]
    NoError = 0,
    InvalidDevice = 1,
    InvalidContext = 2,
    InvalidEnum = 3,
    InvalidValue = 4,
    OutOfMemory = 5,
}

impl DeviceErrorCode {
    /// All codes in literal order
    pub const ALL: [DeviceErrorCode; 6] = [
        DeviceErrorCode::NoError,
        DeviceErrorCode::InvalidDevice,
        DeviceErrorCode::InvalidContext,
        DeviceErrorCode::InvalidEnum,
        DeviceErrorCode::InvalidValue,
        DeviceErrorCode::OutOfMemory,
    ];

    /// Map a native value, `None` when it is not in the ALC table
    pub fn try_from_native(value: i32) -> Option<Self> {
        match value {
            ALC_NO_ERROR => Some(Self::NoError),
            ALC_INVALID_DEVICE => Some(Self::InvalidDevice),
            ALC_INVALID_CONTEXT => Some(Self::InvalidContext),
            ALC_INVALID_ENUM => Some(Self::InvalidEnum),
            ALC_INVALID_VALUE => Some(Self::InvalidValue),
            ALC_OUT_OF_MEMORY => Some(Self::OutOfMemory),
            _ => None,
        }
    }

    /// Map a native value; anything outside the table reads as `NoError`
    pub fn from_native(value: i32) -> Self {
        Self::try_from_native(value).unwrap_or_default()
    }

    /// The ALC value of this code
    pub fn native(self) -> i32 {
        match self {
            Self::NoError => ALC_NO_ERROR,
            Self::InvalidDevice => ALC_INVALID_DEVICE,
            Self::InvalidContext => ALC_INVALID_CONTEXT,
            Self::InvalidEnum => ALC_INVALID_ENUM,
            Self::InvalidValue => ALC_INVALID_VALUE,
            Self::OutOfMemory => ALC_OUT_OF_MEMORY,
        }
    }

    /// Literal value, 0..=5
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code)
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }
}
