//! Nativa X11 Platform
//!
//! Windowing and pointer queries for X11 using x11rb.
//!
//! This crate implements the `nativa_platform` [`Backend`] trait over a
//! pure-Rust X11 connection: no Xlib is linked. Window styles are expressed
//! through `_MOTIF_WM_HINTS`, EWMH window types and states, and
//! `WM_NORMAL_HINTS`; see [`style`] for the bit layout.
//!
//! # Example
//!
//! ```ignore
//! use nativa_platform::prelude::*;
//! use nativa_platform_x11::X11Backend;
//!
//! fn main() -> Result<(), PlatformError> {
//!     let mut app = Application::<X11Backend>::new(PlatformConfig::default());
//!     let window = app.create_window(&WindowDescriptor::new(800.0, 600.0))?;
//!     app.warp_pointer(window, 100, 100)?;
//!     assert_eq!(app.position(window)?, (100, 100));
//!     app.run_blocking()
//! }
//! ```

pub mod event_loop;
pub mod input;
pub mod style;
pub mod window;

pub use style::{WindowHints, STYLE_TABLE};

use nativa_platform::PlatformError;

#[cfg(unix)]
pub(crate) fn native_error(e: impl std::fmt::Display) -> PlatformError {
    PlatformError::Native(e.to_string())
}

#[cfg(unix)]
pub use native::{Atoms, X11Backend};

#[cfg(unix)]
mod native {
    use super::*;
    use nativa_platform::{
        Backend, BackendEvent, NativeStyleMask, PlatformConfig, PointerState, StyleTable, Timeout,
        WindowDescriptor,
    };
    use std::collections::HashSet;
    use tracing::debug;
    use x11rb::connection::Connection;
    use x11rb::protocol::xproto::Window;
    use x11rb::rust_connection::RustConnection;

    x11rb::atom_manager! {
        pub Atoms: AtomsCookie {
            WM_PROTOCOLS,
            WM_DELETE_WINDOW,
            _MOTIF_WM_HINTS,
            _NET_WM_WINDOW_TYPE,
            _NET_WM_WINDOW_TYPE_NORMAL,
            _NET_WM_WINDOW_TYPE_UTILITY,
            _NET_WM_STATE,
            _NET_WM_STATE_FULLSCREEN,
            _NET_ACTIVE_WINDOW,
        }
    }

    /// X11 application context: one server connection and the windows it created
    pub struct X11Backend {
        pub(crate) conn: RustConnection,
        pub(crate) screen_num: usize,
        pub(crate) atoms: Atoms,
        pub(crate) windows: HashSet<Window>,
    }

    impl X11Backend {
        /// The underlying server connection
        pub fn connection(&self) -> &RustConnection {
            &self.conn
        }

        /// Index of the default screen
        pub fn screen_num(&self) -> usize {
            self.screen_num
        }
    }

    fn init_failed(e: impl std::fmt::Display) -> PlatformError {
        PlatformError::InitFailed(e.to_string())
    }

    impl Backend for X11Backend {
        type Window = Window;

        const NAME: &'static str = "x11";
        const STYLE_TABLE: StyleTable = crate::style::STYLE_TABLE;

        fn connect(config: &PlatformConfig) -> Result<Self, PlatformError> {
            let (conn, screen_num) =
                x11rb::connect(config.display.as_deref()).map_err(init_failed)?;
            let atoms = Atoms::new(&conn)
                .map_err(init_failed)?
                .reply()
                .map_err(init_failed)?;
            debug!(
                screen = screen_num,
                vendor = %String::from_utf8_lossy(&conn.setup().vendor),
                "connected to X server"
            );
            Ok(Self {
                conn,
                screen_num,
                atoms,
                windows: HashSet::new(),
            })
        }

        fn create_window(
            &mut self,
            descriptor: &WindowDescriptor,
            style: NativeStyleMask,
        ) -> Result<Window, PlatformError> {
            self.create(descriptor, style)
        }

        fn is_window_alive(&self, window: &Window) -> bool {
            self.alive(*window)
        }

        fn close_window(&mut self, window: Window) -> Result<(), PlatformError> {
            self.destroy(window)
        }

        fn pump_events(
            &mut self,
            timeout: Timeout,
            notices: &mut Vec<BackendEvent<Window>>,
        ) -> Result<usize, PlatformError> {
            self.pump(timeout, notices)
        }

        fn query_pointer(&self, window: &Window) -> Result<PointerState, PlatformError> {
            self.query(*window)
        }

        fn warp_pointer(&mut self, window: &Window, x: i32, y: i32) -> Result<(), PlatformError> {
            self.warp(*window, x, y)
        }
    }
}

#[cfg(not(unix))]
pub struct X11Backend {
    _private: (),
}

#[cfg(not(unix))]
impl X11Backend {
    /// X11 is only reachable from Unix-like systems
    pub fn unavailable() -> PlatformError {
        PlatformError::Unsupported("X11 backend only available on Unix".to_string())
    }
}
