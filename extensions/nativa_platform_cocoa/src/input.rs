//! Cocoa pointer queries (AppKit -> nativa_platform)
//!
//! AppKit measures from the bottom-left corner; the contract measures from
//! the top-left of the content area, so every y coordinate is flipped
//! against a height.

use nativa_platform::{MouseButton, PointerState};

/// `NSEvent.pressedMouseButtons` bit of `button`
///
/// AppKit numbers buttons 0 (left), 1 (right), 2 (middle), then extras.
pub fn pressed_bit(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => 1 << 0,
        MouseButton::Right => 1 << 1,
        MouseButton::Middle => 1 << 2,
        MouseButton::Back => 1 << 3,
        MouseButton::Forward => 1 << 4,
    }
}

/// Convert between bottom-left and top-left origins
pub fn flip_y(y: f64, height: f64) -> f64 {
    height - y
}

/// Build a snapshot from a window-relative location and the pressed buttons
///
/// `location` is in window base coordinates, `content_height` the height of
/// the content rect.
pub fn pointer_state(location: (f64, f64), content_height: f64, pressed: usize) -> PointerState {
    let x = location.0.floor() as i32;
    let y = flip_y(location.1, content_height).floor() as i32;
    MouseButton::ALL
        .iter()
        .fold(PointerState::new(x, y), |state, &button| {
            state.with_button(button, pressed & pressed_bit(button) != 0)
        })
}

#[cfg(target_os = "macos")]
mod native {
    use super::{flip_y, pointer_state};
    use crate::CocoaBackend;
    use nativa_platform::{PlatformError, PointerState};
    use objc2::rc::Retained;
    use objc2_app_kit::{NSEvent, NSScreen, NSWindow};
    use objc2_foundation::{CGPoint, NSPoint};

    #[link(name = "CoreGraphics", kind = "framework")]
    extern "C" {
        fn CGWarpMouseCursorPosition(new_cursor_position: CGPoint) -> i32;
        fn CGAssociateMouseAndMouseCursorPosition(connected: u32) -> i32;
    }

    impl CocoaBackend {
        pub(crate) fn query(&self, window: &Retained<NSWindow>) -> Result<PointerState, PlatformError> {
            let location = window.mouseLocationOutsideOfEventStream();
            let content = window.contentRectForFrameRect(window.frame());
            Ok(pointer_state(
                (location.x, location.y),
                content.size.height,
                NSEvent::pressedMouseButtons(),
            ))
        }

        pub(crate) fn warp(
            &mut self,
            window: &Retained<NSWindow>,
            x: i32,
            y: i32,
        ) -> Result<(), PlatformError> {
            let content = window.contentRectForFrameRect(window.frame());
            let base = NSPoint::new(f64::from(x), flip_y(f64::from(y), content.size.height));
            let on_screen = window.convertPointToScreen(base);

            // Global display coordinates start at the top-left of the primary screen
            let primary_height = NSScreen::screens(self.context.mtm)
                .firstObject()
                .map(|screen| screen.frame().size.height)
                .ok_or_else(|| PlatformError::Native("no screen attached".to_string()))?;
            let global = CGPoint::new(on_screen.x, flip_y(on_screen.y, primary_height));

            let status = unsafe { CGWarpMouseCursorPosition(global) };
            if status != 0 {
                return Err(PlatformError::Native(format!(
                    "CGWarpMouseCursorPosition failed with {status}"
                )));
            }
            unsafe { CGAssociateMouseAndMouseCursorPosition(1) };
            Ok(())
        }
    }
}
