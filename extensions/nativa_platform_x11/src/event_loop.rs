//! X11 event pump
//!
//! X11 has no dispatch of its own: the backend is the native target for
//! every event it selected. `WM_DELETE_WINDOW` destroys the window, and the
//! resulting `DestroyNotify` is what reports the window closed, so a window
//! closed by the user and one destroyed by another client take the same path.

#![cfg(unix)]

use crate::{native_error, X11Backend};
use nativa_platform::{BackendEvent, PlatformError, Timeout};
use tracing::{trace, warn};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt as _, Window};
use x11rb::protocol::Event;

impl X11Backend {
    pub(crate) fn pump(
        &mut self,
        timeout: Timeout,
        notices: &mut Vec<BackendEvent<Window>>,
    ) -> Result<usize, PlatformError> {
        let mut next = match timeout {
            Timeout::Immediate => self.conn.poll_for_event().map_err(native_error)?,
            Timeout::Infinite => Some(self.conn.wait_for_event().map_err(native_error)?),
        };

        let mut dispatched = 0;
        while let Some(event) = next {
            self.dispatch(event, notices)?;
            dispatched += 1;
            next = self.conn.poll_for_event().map_err(native_error)?;
        }

        self.conn.flush().map_err(native_error)?;
        Ok(dispatched)
    }

    fn dispatch(
        &mut self,
        event: Event,
        notices: &mut Vec<BackendEvent<Window>>,
    ) -> Result<(), PlatformError> {
        match event {
            Event::ClientMessage(message) if message.type_ == self.atoms.WM_PROTOCOLS => {
                let [protocol, ..] = message.data.as_data32();
                if protocol == self.atoms.WM_DELETE_WINDOW && self.windows.contains(&message.window)
                {
                    trace!(window = message.window, "delete requested");
                    self.conn
                        .destroy_window(message.window)
                        .map_err(native_error)?;
                }
            }
            Event::DestroyNotify(notify) => {
                if self.windows.remove(&notify.window) {
                    trace!(window = notify.window, "window destroyed");
                    notices.push(BackendEvent::WindowClosed(notify.window));
                }
            }
            Event::Error(error) => {
                warn!(?error, "X11 protocol error");
            }
            other => {
                trace!(event = ?other, "event ignored");
            }
        }
        Ok(())
    }
}
