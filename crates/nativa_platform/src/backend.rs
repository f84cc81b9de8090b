//! Backend trait and abstraction

use crate::config::PlatformConfig;
use crate::error::PlatformError;
use crate::event::{BackendEvent, Timeout};
use crate::pointer::PointerState;
use crate::style::{NativeStyleMask, StyleTable};
use crate::window::WindowDescriptor;

/// Native windowing backend
///
/// Implemented once per native toolkit (X11, Cocoa). A value of the
/// implementing type *is* the native application context: it exists at most
/// once per [`Application`](crate::Application) and is created lazily by
/// [`Backend::connect`].
pub trait Backend: Sized {
    /// Native window reference kept in the application's handle table
    type Window: Clone + PartialEq + std::fmt::Debug;

    /// Backend name, e.g. "x11" or "cocoa"
    const NAME: &'static str;

    /// Flag → native bit table of this backend
    const STYLE_TABLE: StyleTable;

    /// Establish the native application context
    fn connect(config: &PlatformConfig) -> Result<Self, PlatformError>;

    /// Construct a window and make it visible, key and main
    ///
    /// Implementations must report failure as an error rather than hand back
    /// a window the native side never created.
    fn create_window(
        &mut self,
        descriptor: &WindowDescriptor,
        style: NativeStyleMask,
    ) -> Result<Self::Window, PlatformError>;

    /// Validity probe for a window the backend returned
    fn is_window_alive(&self, window: &Self::Window) -> bool;

    /// Close and release a window
    fn close_window(&mut self, window: Self::Window) -> Result<(), PlatformError>;

    /// Dequeue and dispatch native events
    ///
    /// Dispatches every queued event in queue order, each one before the next
    /// is fetched. With [`Timeout::Infinite`] the call first waits for one
    /// event. Lifecycle notices are appended to `notices`. Returns the number
    /// of events dispatched.
    fn pump_events(
        &mut self,
        timeout: Timeout,
        notices: &mut Vec<BackendEvent<Self::Window>>,
    ) -> Result<usize, PlatformError>;

    /// Read pointer position and buttons relative to `window` in one query
    fn query_pointer(&self, window: &Self::Window) -> Result<PointerState, PlatformError>;

    /// Move the pointer to `(x, y)` relative to `window`'s content origin
    fn warp_pointer(&mut self, window: &Self::Window, x: i32, y: i32)
        -> Result<(), PlatformError>;
}
