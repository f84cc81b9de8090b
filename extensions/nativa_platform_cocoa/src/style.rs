//! `NSWindowStyleMask` bit positions

use nativa_platform::{PlatformError, StyleFlag, StyleTable};

/// Flag → `NSWindowStyleMask` bit table
pub const STYLE_TABLE: StyleTable = StyleTable::new(&[
    (StyleFlag::Titled, 0),
    (StyleFlag::Closable, 1),
    (StyleFlag::Miniaturizable, 2),
    (StyleFlag::Resizable, 3),
    (StyleFlag::Utility, 4),
    (StyleFlag::FullScreen, 14),
]);

/// Validate a backing mode: `0` Retained, `1` Nonretained, `2` Buffered
pub fn check_backing(mode: u32) -> Result<usize, PlatformError> {
    match mode {
        0..=2 => Ok(mode as usize),
        other => Err(PlatformError::UnsupportedBacking(other)),
    }
}
