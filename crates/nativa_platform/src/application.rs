//! The native application context
//!
//! [`Application`] owns the lazily created backend context together with the
//! table of live windows. Every windowing, event-loop and pointer operation
//! goes through it, so the context is created exactly once no matter which
//! operation the host calls first.

use crate::backend::Backend;
use crate::config::PlatformConfig;
use crate::error::{PlatformError, Result};
use crate::event::{
    terminate_after_last_window_closed, termination_reply, BackendEvent, ControlFlow,
    TerminateReply, Timeout,
};
use crate::pointer::PointerState;
use crate::window::{WindowDescriptor, WindowHandle};
use slotmap::SlotMap;
use std::thread::{self, ThreadId};
use tracing::{debug, trace, warn};

/// Native application context plus its windows
///
/// Bound to the thread that created it: native UI toolkits require every
/// call to come from the thread owning the UI, and any other thread gets
/// [`PlatformError::WrongThread`]. No locking is done.
pub struct Application<B: Backend> {
    config: PlatformConfig,
    backend: Option<B>,
    windows: SlotMap<WindowHandle, B::Window>,
    owner: ThreadId,
    last_window_closed: bool,
}

impl<B: Backend> Application<B> {
    /// Create an application bound to the current thread
    ///
    /// No native call is made until the first operation that needs one.
    pub fn new(config: PlatformConfig) -> Self {
        Self {
            config,
            backend: None,
            windows: SlotMap::with_key(),
            owner: thread::current().id(),
            last_window_closed: false,
        }
    }

    /// Configuration used for the native context
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Whether the native context exists yet
    pub fn is_initialized(&self) -> bool {
        self.backend.is_some()
    }

    /// Create the native context if absent and return it
    ///
    /// Calling this any number of times leaves the same state as calling it once.
    pub fn ensure_context(&mut self) -> Result<&mut B> {
        self.check_thread()?;
        let backend = match self.backend.take() {
            Some(backend) => backend,
            None => {
                let backend = B::connect(&self.config)?;
                debug!(backend = B::NAME, "native application context created");
                backend
            }
        };
        Ok(self.backend.insert(backend))
    }

    /// The native context, if it was created
    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Mutable access to the native context, if it was created
    pub fn backend_mut(&mut self) -> Option<&mut B> {
        self.backend.as_mut()
    }

    /// Create a native window
    ///
    /// The window is visible, key and main when this returns.
    pub fn create_window(&mut self, descriptor: &WindowDescriptor) -> Result<WindowHandle> {
        descriptor.validate()?;
        let style = B::STYLE_TABLE.resolve_set(descriptor.style);
        let backend = self.ensure_context()?;
        let window = backend.create_window(descriptor, style)?;
        if !backend.is_window_alive(&window) {
            // Release whatever the backend still tracks for it
            if let Err(e) = backend.close_window(window) {
                warn!(error = %e, "failed to release dead window");
            }
            return Err(PlatformError::WindowCreation(format!(
                "{} backend returned a window that does not exist",
                B::NAME
            )));
        }

        let handle = self.windows.insert(window);
        self.last_window_closed = false;
        debug!(
            ?handle,
            width = descriptor.width,
            height = descriptor.height,
            style = ?descriptor.style,
            native_style = style.bits(),
            "window created"
        );
        Ok(handle)
    }

    /// Close a window and invalidate its handle
    pub fn close_window(&mut self, handle: WindowHandle) -> Result<()> {
        self.check_thread()?;
        let window = self
            .windows
            .get(handle)
            .ok_or(PlatformError::InvalidHandle)?
            .clone();
        let backend = self.backend.as_mut().ok_or(PlatformError::InvalidHandle)?;
        backend.close_window(window)?;

        // The handle stays valid until the native close succeeded
        self.windows.remove(handle);
        if self.windows.is_empty() {
            self.last_window_closed = true;
        }
        debug!(?handle, "window closed");
        Ok(())
    }

    /// Whether `handle` still refers to an open window
    pub fn is_open(&self, handle: WindowHandle) -> bool {
        self.windows.contains_key(handle)
    }

    /// Number of open windows
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Handles of all open windows
    pub fn windows(&self) -> impl Iterator<Item = WindowHandle> + '_ {
        self.windows.keys()
    }

    /// Native window behind `handle`
    pub fn native_window(&self, handle: WindowHandle) -> Result<&B::Window> {
        self.windows.get(handle).ok_or(PlatformError::InvalidHandle)
    }

    /// Dispatch every queued native event without blocking
    pub fn process_pending_events(&mut self) -> Result<ControlFlow> {
        self.pump(Timeout::Immediate)
    }

    /// Dispatch events until the application terminates
    ///
    /// Returns once the last window has closed or termination was requested.
    /// Returns immediately when no window is open.
    pub fn run_blocking(&mut self) -> Result<()> {
        self.ensure_context()?;
        while !self.windows.is_empty() {
            if self.pump(Timeout::Infinite)? == ControlFlow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// One pass of the event pump
    pub fn pump(&mut self, timeout: Timeout) -> Result<ControlFlow> {
        let mut notices = Vec::new();
        let dispatched = self.ensure_context()?.pump_events(timeout, &mut notices)?;
        trace!(dispatched, ?timeout, "pumped native events");

        let mut flow = if std::mem::take(&mut self.last_window_closed) {
            ControlFlow::Exit
        } else {
            ControlFlow::Continue
        };
        for notice in notices {
            match notice {
                BackendEvent::WindowClosed(window) => {
                    let Some(handle) = self.handle_of(&window) else {
                        continue;
                    };
                    self.windows.remove(handle);
                    debug!(?handle, "window closed natively");
                    if self.windows.is_empty() && terminate_after_last_window_closed() {
                        flow = ControlFlow::Exit;
                    }
                }
                BackendEvent::QuitRequested => {
                    if termination_reply() == TerminateReply::Now {
                        debug!("termination requested");
                        flow = ControlFlow::Exit;
                    }
                }
            }
        }
        Ok(flow)
    }

    /// Pointer position and buttons relative to a window, from one native query
    pub fn pointer(&self, handle: WindowHandle) -> Result<PointerState> {
        self.check_thread()?;
        let window = self.native_window(handle)?;
        let backend = self.backend.as_ref().ok_or(PlatformError::InvalidHandle)?;
        backend.query_pointer(window)
    }

    /// Pointer position relative to a window's content origin
    pub fn position(&self, handle: WindowHandle) -> Result<(i32, i32)> {
        Ok(self.pointer(handle)?.position())
    }

    /// Whether button `button` (1..=5) is held; other indices report `false`
    pub fn button_down(&self, handle: WindowHandle, button: i32) -> Result<bool> {
        Ok(self.pointer(handle)?.button_down(button))
    }

    /// Move the pointer to `(x, y)` relative to a window's content origin
    pub fn warp_pointer(&mut self, handle: WindowHandle, x: i32, y: i32) -> Result<()> {
        self.check_thread()?;
        let window = self
            .windows
            .get(handle)
            .ok_or(PlatformError::InvalidHandle)?;
        let backend = self.backend.as_mut().ok_or(PlatformError::InvalidHandle)?;
        backend.warp_pointer(window, x, y)
    }

    fn handle_of(&self, window: &B::Window) -> Option<WindowHandle> {
        self.windows
            .iter()
            .find(|(_, candidate)| *candidate == window)
            .map(|(handle, _)| handle)
    }

    fn check_thread(&self) -> Result<()> {
        if thread::current().id() == self.owner {
            Ok(())
        } else {
            Err(PlatformError::WrongThread)
        }
    }
}
