//! Cocoa event pump
//!
//! Events are pulled with `nextEventMatchingMask:untilDate:inMode:dequeue:`
//! and handed to `sendEvent:`, which routes them to their window. The
//! timeout only decides the date of the first fetch; once one event has
//! arrived the rest of the queue is drained without waiting.

#![cfg(target_os = "macos")]

use crate::CocoaBackend;
use nativa_platform::{BackendEvent, PlatformError, Timeout};
use objc2::rc::Retained;
use objc2_app_kit::{NSEventMask, NSWindow};
use objc2_foundation::{NSDate, NSDefaultRunLoopMode};
use tracing::trace;

impl CocoaBackend {
    pub(crate) fn pump(
        &mut self,
        timeout: Timeout,
        notices: &mut Vec<BackendEvent<Retained<NSWindow>>>,
    ) -> Result<usize, PlatformError> {
        let app = &self.context.app;
        let mut until = match timeout {
            Timeout::Immediate => NSDate::distantPast(),
            Timeout::Infinite => NSDate::distantFuture(),
        };

        let mut dispatched = 0;
        loop {
            let event = unsafe {
                app.nextEventMatchingMask_untilDate_inMode_dequeue(
                    NSEventMask::Any,
                    Some(&until),
                    NSDefaultRunLoopMode,
                    true,
                )
            };
            let Some(event) = event else {
                break;
            };
            app.sendEvent(&event);
            dispatched += 1;
            until = NSDate::distantPast();
        }
        app.updateWindows();

        // AppKit closes windows itself; a window that is neither on screen
        // nor in the Dock is gone
        self.windows.retain(|window| {
            let open = window.isVisible() || window.isMiniaturized();
            if !open {
                trace!(?window, "window closed");
                notices.push(BackendEvent::WindowClosed(window.clone()));
            }
            open
        });

        Ok(dispatched)
    }
}
