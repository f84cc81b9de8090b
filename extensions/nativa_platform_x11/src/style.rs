//! X11 style layout
//!
//! X11 has no single style mask, so the backend defines one: bits 0-7 hold
//! Motif decoration bits, bits 8-15 Motif function bits, and bits from 16
//! up EWMH window type and state requests. [`WindowHints`] expands a mask
//! into the properties the window manager actually reads.

use nativa_platform::{NativeStyleMask, StyleFlag, StyleTable};

const FUNCTION_SHIFT: u32 = 8;
const EWMH_SHIFT: u32 = 16;

/// `_MOTIF_WM_HINTS.flags`: the functions field is valid
pub const MWM_HINTS_FUNCTIONS: u32 = 1 << 0;
/// `_MOTIF_WM_HINTS.flags`: the decorations field is valid
pub const MWM_HINTS_DECORATIONS: u32 = 1 << 1;

pub const MWM_FUNC_RESIZE: u32 = 1 << 1;
pub const MWM_FUNC_MOVE: u32 = 1 << 2;
pub const MWM_FUNC_MINIMIZE: u32 = 1 << 3;
pub const MWM_FUNC_MAXIMIZE: u32 = 1 << 4;
pub const MWM_FUNC_CLOSE: u32 = 1 << 5;

pub const MWM_DECOR_BORDER: u32 = 1 << 1;
pub const MWM_DECOR_RESIZEH: u32 = 1 << 2;
pub const MWM_DECOR_TITLE: u32 = 1 << 3;
pub const MWM_DECOR_MINIMIZE: u32 = 1 << 5;
pub const MWM_DECOR_MAXIMIZE: u32 = 1 << 6;

const UTILITY_BIT: u32 = EWMH_SHIFT;
const FULL_SCREEN_BIT: u32 = EWMH_SHIFT + 1;

/// Flag → bit table of the X11 backend
pub const STYLE_TABLE: StyleTable = StyleTable::new(&[
    (StyleFlag::Titled, MWM_DECOR_TITLE.trailing_zeros()),
    (StyleFlag::Closable, FUNCTION_SHIFT + MWM_FUNC_CLOSE.trailing_zeros()),
    (StyleFlag::Miniaturizable, MWM_DECOR_MINIMIZE.trailing_zeros()),
    (StyleFlag::Resizable, MWM_DECOR_RESIZEH.trailing_zeros()),
    (StyleFlag::Utility, UTILITY_BIT),
    (StyleFlag::FullScreen, FULL_SCREEN_BIT),
]);

/// Window manager hints derived from a resolved style
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowHints {
    /// Motif function bits
    pub functions: u32,
    /// Motif decoration bits
    pub decorations: u32,
    /// Whether the size may change; otherwise min = max size is requested
    pub resizable: bool,
    /// `_NET_WM_WINDOW_TYPE_UTILITY` instead of `_NORMAL`
    pub utility: bool,
    /// Request `_NET_WM_STATE_FULLSCREEN`
    pub fullscreen: bool,
}

impl WindowHints {
    /// Expand a native mask into complete hints
    pub fn from_mask(mask: NativeStyleMask) -> Self {
        let bits = mask.bits();
        let mut decorations = (bits & 0xff) as u32;
        let mut functions = ((bits >> FUNCTION_SHIFT) & 0xff) as u32 | MWM_FUNC_MOVE;

        let resizable = decorations & MWM_DECOR_RESIZEH != 0;
        if resizable {
            functions |= MWM_FUNC_RESIZE | MWM_FUNC_MAXIMIZE;
            decorations |= MWM_DECOR_MAXIMIZE;
        }
        if decorations & MWM_DECOR_MINIMIZE != 0 {
            functions |= MWM_FUNC_MINIMIZE;
        }
        if decorations != 0 {
            decorations |= MWM_DECOR_BORDER;
        }

        Self {
            functions,
            decorations,
            resizable,
            utility: mask.is_set(UTILITY_BIT),
            fullscreen: mask.is_set(FULL_SCREEN_BIT),
        }
    }

    /// Payload of the `_MOTIF_WM_HINTS` property
    pub fn motif_property(&self) -> [u32; 5] {
        [
            MWM_HINTS_FUNCTIONS | MWM_HINTS_DECORATIONS,
            self.functions,
            self.decorations,
            0,
            0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nativa_platform::StyleFlags;

    #[test]
    fn test_table_bits_are_distinct_and_complete() {
        let entries = STYLE_TABLE.entries();
        for (i, (_, a)) in entries.iter().enumerate() {
            for (_, b) in &entries[i + 1..] {
                assert_ne!(a, b);
            }
        }
        for flag in &StyleFlag::ALL[1..] {
            assert!(STYLE_TABLE.bit(*flag).is_some(), "{flag:?} has no bit");
        }
    }

    #[test]
    fn test_decode_inverts_resolve() {
        for bits in 0u32..1 << 6 {
            let flags = StyleFlags::from_bits_truncate(bits);
            assert_eq!(STYLE_TABLE.decode(STYLE_TABLE.resolve_set(flags)), flags);
        }
    }

    #[test]
    fn test_standard_window_hints() {
        let mask = STYLE_TABLE.resolve([
            StyleFlag::Titled,
            StyleFlag::Closable,
            StyleFlag::Resizable,
        ]);
        let hints = WindowHints::from_mask(mask);
        assert!(hints.resizable);
        assert!(!hints.utility);
        assert_eq!(
            hints.decorations,
            MWM_DECOR_TITLE | MWM_DECOR_RESIZEH | MWM_DECOR_MAXIMIZE | MWM_DECOR_BORDER
        );
        assert_eq!(
            hints.functions,
            MWM_FUNC_CLOSE | MWM_FUNC_MOVE | MWM_FUNC_RESIZE | MWM_FUNC_MAXIMIZE
        );
    }

    #[test]
    fn test_borderless_hints() {
        let hints = WindowHints::from_mask(STYLE_TABLE.resolve([StyleFlag::Borderless]));
        assert_eq!(hints.decorations, 0);
        assert_eq!(hints.functions, MWM_FUNC_MOVE);
        assert!(!hints.resizable);
        assert_eq!(
            hints.motif_property(),
            [MWM_HINTS_FUNCTIONS | MWM_HINTS_DECORATIONS, MWM_FUNC_MOVE, 0, 0, 0]
        );
    }

    #[test]
    fn test_ewmh_bits() {
        let hints = WindowHints::from_mask(
            STYLE_TABLE.resolve([StyleFlag::Utility, StyleFlag::FullScreen]),
        );
        assert!(hints.utility);
        assert!(hints.fullscreen);
        assert_eq!(hints.decorations, 0);
    }

    #[test]
    fn test_miniaturizable_allows_minimize() {
        let hints = WindowHints::from_mask(STYLE_TABLE.resolve([StyleFlag::Miniaturizable]));
        assert_ne!(hints.functions & MWM_FUNC_MINIMIZE, 0);
        assert_ne!(hints.decorations & MWM_DECOR_BORDER, 0);
    }
}
