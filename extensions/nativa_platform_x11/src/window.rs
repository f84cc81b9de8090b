//! X11 window factory

use nativa_platform::PlatformError;

/// Backing store modes understood by the X11 backend
///
/// `0` NotUseful, `1` WhenMapped, `2` Always.
pub const BACKING_MODES: std::ops::RangeInclusive<u32> = 0..=2;

/// Validate a backing mode
pub fn check_backing(mode: u32) -> Result<u8, PlatformError> {
    if BACKING_MODES.contains(&mode) {
        Ok(mode as u8)
    } else {
        Err(PlatformError::UnsupportedBacking(mode))
    }
}

/// Round a position to the X11 wire range
pub fn wire_position(value: f64) -> i16 {
    value.round().clamp(i16::MIN.into(), i16::MAX.into()) as i16
}

/// Round a size to the X11 wire range; X11 rejects zero sizes
pub fn wire_size(value: f64) -> u16 {
    value.round().clamp(1.0, u16::MAX.into()) as u16
}

/// Pass `result` through, running `release` first when it is an error
///
/// Used once the server has allocated a window, so a failed setup step does
/// not leave it behind.
pub fn release_on_error<T, E>(result: Result<T, E>, release: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        release();
    }
    result
}

#[cfg(unix)]
mod native {
    use super::{check_backing, release_on_error, wire_position, wire_size};
    use crate::style::WindowHints;
    use crate::X11Backend;
    use nativa_platform::{NativeStyleMask, PlatformError, WindowDescriptor};
    use tracing::{debug, warn};
    use x11rb::connection::Connection;
    use x11rb::properties::WmSizeHints;
    use x11rb::protocol::xproto::{
        AtomEnum, BackingStore, ClientMessageEvent, ConfigureWindowAux, ConnectionExt as _,
        CreateWindowAux, EventMask, PropMode, StackMode, Window, WindowClass,
    };
    use x11rb::wrapper::ConnectionExt as _;

    fn creation_failed(e: impl std::fmt::Display) -> PlatformError {
        PlatformError::WindowCreation(e.to_string())
    }

    impl X11Backend {
        pub(crate) fn create(
            &mut self,
            descriptor: &WindowDescriptor,
            style: NativeStyleMask,
        ) -> Result<Window, PlatformError> {
            let backing = match check_backing(descriptor.backing)? {
                0 => BackingStore::NOT_USEFUL,
                1 => BackingStore::WHEN_MAPPED,
                _ => BackingStore::ALWAYS,
            };
            let hints = WindowHints::from_mask(style);
            let width = wire_size(descriptor.width);
            let height = wire_size(descriptor.height);

            let conn = &self.conn;
            let screen = &conn.setup().roots[self.screen_num];
            let window = conn.generate_id().map_err(creation_failed)?;

            let aux = CreateWindowAux::new()
                .background_pixel(screen.white_pixel)
                .backing_store(backing)
                .event_mask(EventMask::STRUCTURE_NOTIFY);
            conn.create_window(
                x11rb::COPY_DEPTH_FROM_PARENT,
                window,
                screen.root,
                wire_position(descriptor.x),
                wire_position(descriptor.y),
                width,
                height,
                0,
                WindowClass::INPUT_OUTPUT,
                x11rb::COPY_FROM_PARENT,
                &aux,
            )
            .map_err(creation_failed)?
            .check()
            .map_err(creation_failed)?;

            let root = screen.root;
            let configured = self.configure(window, root, &hints, (width, height));
            release_on_error(configured, || {
                let destroyed = self.conn.destroy_window(window).map(|_| ());
                if let Err(e) = destroyed.and_then(|()| self.conn.flush()) {
                    warn!(window, error = %e, "failed to destroy half-created window");
                }
            })?;

            self.windows.insert(window);
            debug!(window, ?hints, "X11 window mapped");
            Ok(window)
        }

        /// Set properties, map, raise and activate a freshly created window
        fn configure(
            &self,
            window: Window,
            root: Window,
            hints: &WindowHints,
            (width, height): (u16, u16),
        ) -> Result<(), PlatformError> {
            let conn = &self.conn;
            let atoms = &self.atoms;

            conn.change_property32(
                PropMode::REPLACE,
                window,
                atoms.WM_PROTOCOLS,
                AtomEnum::ATOM,
                &[atoms.WM_DELETE_WINDOW],
            )
            .map_err(creation_failed)?;
            conn.change_property32(
                PropMode::REPLACE,
                window,
                atoms._MOTIF_WM_HINTS,
                atoms._MOTIF_WM_HINTS,
                &hints.motif_property(),
            )
            .map_err(creation_failed)?;

            let window_type = if hints.utility {
                atoms._NET_WM_WINDOW_TYPE_UTILITY
            } else {
                atoms._NET_WM_WINDOW_TYPE_NORMAL
            };
            conn.change_property32(
                PropMode::REPLACE,
                window,
                atoms._NET_WM_WINDOW_TYPE,
                AtomEnum::ATOM,
                &[window_type],
            )
            .map_err(creation_failed)?;

            if hints.fullscreen {
                conn.change_property32(
                    PropMode::REPLACE,
                    window,
                    atoms._NET_WM_STATE,
                    AtomEnum::ATOM,
                    &[atoms._NET_WM_STATE_FULLSCREEN],
                )
                .map_err(creation_failed)?;
            }

            if !hints.resizable {
                let size = (i32::from(width), i32::from(height));
                WmSizeHints {
                    min_size: Some(size),
                    max_size: Some(size),
                    ..Default::default()
                }
                .set_normal_hints(conn, window)
                .map_err(creation_failed)?;
            }

            // Visible, raised, and asked to become the active window
            conn.map_window(window).map_err(creation_failed)?;
            conn.configure_window(window, &ConfigureWindowAux::new().stack_mode(StackMode::ABOVE))
                .map_err(creation_failed)?;
            let activate = ClientMessageEvent::new(
                32,
                window,
                atoms._NET_ACTIVE_WINDOW,
                [1, x11rb::CURRENT_TIME, 0, 0, 0],
            );
            conn.send_event(
                false,
                root,
                EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
                activate,
            )
            .map_err(creation_failed)?;
            conn.flush().map_err(creation_failed)?;
            Ok(())
        }

        pub(crate) fn alive(&self, window: Window) -> bool {
            self.windows.contains(&window)
                && self
                    .conn
                    .get_window_attributes(window)
                    .ok()
                    .and_then(|cookie| cookie.reply().ok())
                    .is_some()
        }

        pub(crate) fn destroy(&mut self, window: Window) -> Result<(), PlatformError> {
            self.conn
                .destroy_window(window)
                .map_err(crate::native_error)?;
            self.conn.flush().map_err(crate::native_error)?;
            self.windows.remove(&window);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_modes() {
        assert_eq!(check_backing(0).unwrap(), 0);
        assert_eq!(check_backing(2).unwrap(), 2);
        assert!(matches!(
            check_backing(3),
            Err(PlatformError::UnsupportedBacking(3))
        ));
    }

    #[test]
    fn test_failed_setup_releases_window() {
        let mut released = 0;
        let result: Result<(), PlatformError> = release_on_error(
            Err(PlatformError::WindowCreation("connection lost".to_string())),
            || released += 1,
        );
        assert!(result.is_err());
        assert_eq!(released, 1);
    }

    #[test]
    fn test_successful_setup_keeps_window() {
        let mut released = 0;
        let result: Result<u32, PlatformError> = release_on_error(Ok(7), || released += 1);
        assert_eq!(result.unwrap(), 7);
        assert_eq!(released, 0);
    }

    #[test]
    fn test_wire_geometry() {
        assert_eq!(wire_position(-10.4), -10);
        assert_eq!(wire_position(1e9), i16::MAX);
        assert_eq!(wire_size(0.2), 1);
        assert_eq!(wire_size(800.0), 800);
        assert_eq!(wire_size(1e9), u16::MAX);
    }
}
