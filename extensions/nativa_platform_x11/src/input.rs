//! X11 pointer queries (QueryPointer -> nativa_platform)

use nativa_platform::{MouseButton, PointerState};

/// `KeyButMask` bit of `button` (`Button1Mask` is `1 << 8`)
pub fn button_mask(button: MouseButton) -> u16 {
    1 << (button.index() + 7)
}

/// Convert a `QueryPointer` reply to a snapshot
///
/// When the pointer is on another screen the server reports `(0, 0)`,
/// which is passed through unchanged.
pub fn pointer_state(win_x: i16, win_y: i16, mask: u16) -> PointerState {
    MouseButton::ALL.iter().fold(
        PointerState::new(win_x.into(), win_y.into()),
        |state, &button| state.with_button(button, mask & button_mask(button) != 0),
    )
}

/// Clamp a host coordinate to the X11 wire range
pub fn to_wire(value: i32) -> i16 {
    value.clamp(i16::MIN.into(), i16::MAX.into()) as i16
}

#[cfg(unix)]
mod native {
    use super::{pointer_state, to_wire};
    use crate::{native_error, X11Backend};
    use nativa_platform::{PlatformError, PointerState};
    use x11rb::connection::Connection;
    use x11rb::protocol::xproto::{ConnectionExt as _, Window};

    impl X11Backend {
        pub(crate) fn query(&self, window: Window) -> Result<PointerState, PlatformError> {
            let reply = self
                .conn
                .query_pointer(window)
                .map_err(native_error)?
                .reply()
                .map_err(native_error)?;
            Ok(pointer_state(reply.win_x, reply.win_y, u16::from(reply.mask)))
        }

        pub(crate) fn warp(&mut self, window: Window, x: i32, y: i32) -> Result<(), PlatformError> {
            self.conn
                .warp_pointer(x11rb::NONE, window, 0, 0, 0, 0, to_wire(x), to_wire(y))
                .map_err(native_error)?;
            self.conn.flush().map_err(native_error)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON1_MASK: u16 = 1 << 8;
    const BUTTON3_MASK: u16 = 1 << 10;
    const BUTTON5_MASK: u16 = 1 << 12;
    const SHIFT_MASK: u16 = 1 << 0;

    #[test]
    fn test_button_masks_match_protocol() {
        assert_eq!(button_mask(MouseButton::Left), BUTTON1_MASK);
        assert_eq!(button_mask(MouseButton::Right), BUTTON3_MASK);
        assert_eq!(button_mask(MouseButton::Forward), BUTTON5_MASK);
    }

    #[test]
    fn test_pointer_state_from_mask() {
        let state = pointer_state(100, -20, BUTTON1_MASK | BUTTON3_MASK | SHIFT_MASK);
        assert_eq!(state.position(), (100, -20));
        assert!(state.button_down(1));
        assert!(!state.button_down(2));
        assert!(state.button_down(3));
        assert!(!state.button_down(4));
        assert!(!state.button_down(0));
        assert!(!state.button_down(6));
    }

    #[test]
    fn test_modifier_bits_are_not_buttons() {
        let state = pointer_state(0, 0, 0x00ff);
        assert!((1..=5).all(|b| !state.button_down(b)));
    }

    #[test]
    fn test_to_wire_clamps() {
        assert_eq!(to_wire(100), 100);
        assert_eq!(to_wire(70_000), i16::MAX);
        assert_eq!(to_wire(-70_000), i16::MIN);
    }
}
