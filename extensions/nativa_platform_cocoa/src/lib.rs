//! Nativa macOS Platform
//!
//! AppKit integration for macOS.
//!
//! This crate implements the `nativa_platform` `Backend` trait with
//! `NSApplication` and `NSWindow` through objc2. The application context is
//! the shared `NSApplication`, configured with a regular activation policy
//! and a delegate that applies the platform termination policy.
//!
//! All AppKit calls require the main thread: creating the context anywhere
//! else fails with `PlatformError::WrongThread`.
//!
//! The style table and the pointer conversions are plain data and build on
//! every target, so they are tested everywhere.

pub mod app;
pub mod event_loop;
pub mod input;
pub mod style;
pub mod window;

pub use style::STYLE_TABLE;

#[cfg(target_os = "macos")]
pub use app::AppDelegate;

#[cfg(target_os = "macos")]
mod native {
    use crate::app::AppContext;
    use nativa_platform::{
        Backend, BackendEvent, NativeStyleMask, PlatformConfig, PlatformError, PointerState,
        StyleTable, Timeout, WindowDescriptor,
    };
    use objc2::rc::Retained;
    use objc2_app_kit::{NSApplication, NSWindow};

    /// Cocoa application context: the shared NSApplication and our windows
    pub struct CocoaBackend {
        pub(crate) context: AppContext,
        pub(crate) windows: Vec<Retained<NSWindow>>,
    }

    impl CocoaBackend {
        /// The shared application object
        pub fn application(&self) -> &NSApplication {
            &self.context.app
        }
    }

    impl Backend for CocoaBackend {
        type Window = Retained<NSWindow>;

        const NAME: &'static str = "cocoa";
        const STYLE_TABLE: StyleTable = crate::style::STYLE_TABLE;

        fn connect(config: &PlatformConfig) -> Result<Self, PlatformError> {
            Ok(Self {
                context: AppContext::new(config)?,
                windows: Vec::new(),
            })
        }

        fn create_window(
            &mut self,
            descriptor: &WindowDescriptor,
            style: NativeStyleMask,
        ) -> Result<Self::Window, PlatformError> {
            self.create(descriptor, style)
        }

        fn is_window_alive(&self, window: &Self::Window) -> bool {
            self.alive(window)
        }

        fn close_window(&mut self, window: Self::Window) -> Result<(), PlatformError> {
            self.destroy(window);
            Ok(())
        }

        fn pump_events(
            &mut self,
            timeout: Timeout,
            notices: &mut Vec<BackendEvent<Self::Window>>,
        ) -> Result<usize, PlatformError> {
            self.pump(timeout, notices)
        }

        fn query_pointer(&self, window: &Self::Window) -> Result<PointerState, PlatformError> {
            self.query(window)
        }

        fn warp_pointer(
            &mut self,
            window: &Self::Window,
            x: i32,
            y: i32,
        ) -> Result<(), PlatformError> {
            self.warp(window, x, y)
        }
    }
}

#[cfg(target_os = "macos")]
pub use native::CocoaBackend;

/// Placeholder for non-macOS builds
#[cfg(not(target_os = "macos"))]
pub struct CocoaBackend {
    _private: (),
}

#[cfg(not(target_os = "macos"))]
impl CocoaBackend {
    /// AppKit is only reachable on macOS
    pub fn unavailable() -> nativa_platform::PlatformError {
        nativa_platform::PlatformError::Unsupported(
            "Cocoa backend only available on macOS".to_string(),
        )
    }
}
