//! Nativa Platform Contract
//!
//! This crate provides the platform-independent half of Nativa: the types a
//! host uses to describe windows and read the pointer, and the [`Backend`]
//! trait every native toolkit implements.
//!
//! # Architecture
//!
//! - [`StyleTable`] - Translates [`StyleFlag`]s into a backend's native bitmask
//! - [`Application`] - Owns the lazily created native context and its windows
//! - [`Backend`] - Window factory, event pump and pointer query of one toolkit
//!
//! # Backend Implementations
//!
//! - `nativa_platform_x11` - X11 on Linux and the BSDs, via x11rb
//! - `nativa_platform_cocoa` - AppKit on macOS, via objc2
//!
//! # Example
//!
//! ```ignore
//! use nativa_platform::prelude::*;
//! use nativa_platform_x11::X11Backend;
//!
//! fn main() -> Result<(), PlatformError> {
//!     let mut app = Application::<X11Backend>::new(PlatformConfig::default());
//!     let window = app.create_window(
//!         &WindowDescriptor::new(800.0, 600.0)
//!             .style([StyleFlag::Titled, StyleFlag::Closable, StyleFlag::Resizable]),
//!     )?;
//!
//!     loop {
//!         if app.process_pending_events()? == ControlFlow::Exit {
//!             break;
//!         }
//!         let (x, y) = app.position(window)?;
//!         if app.button_down(window, 1)? {
//!             println!("click at {x},{y}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod application;
mod backend;
mod config;
mod error;
mod event;
mod pointer;
mod style;
mod window;

// Re-export all public types
pub use application::Application;
pub use backend::Backend;
pub use config::PlatformConfig;
pub use error::{ErrorKind, PlatformError, Result};
pub use event::{
    terminate_after_last_window_closed, termination_reply, BackendEvent, ControlFlow,
    TerminateReply, Timeout,
};
pub use pointer::{MouseButton, PointerState, MAX_BUTTON, MIN_BUTTON};
pub use style::{NativeStyleMask, StyleFlag, StyleFlags, StyleTable};
pub use window::{WindowDescriptor, WindowHandle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::Application;
    pub use crate::backend::Backend;
    pub use crate::config::PlatformConfig;
    pub use crate::error::{ErrorKind, PlatformError, Result};
    pub use crate::event::{ControlFlow, Timeout};
    pub use crate::pointer::{MouseButton, PointerState};
    pub use crate::style::{StyleFlag, StyleFlags};
    pub use crate::window::{WindowDescriptor, WindowHandle};
}
