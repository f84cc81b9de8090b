//! NSWindow factory

#![cfg(target_os = "macos")]

use crate::style::check_backing;
use crate::CocoaBackend;
use nativa_platform::{NativeStyleMask, PlatformError, WindowDescriptor};
use objc2::rc::Retained;
use objc2::MainThreadOnly;
use objc2_app_kit::{NSBackingStoreType, NSWindow, NSWindowStyleMask};
use objc2_foundation::{NSPoint, NSRect, NSSize};
use tracing::debug;

impl CocoaBackend {
    pub(crate) fn create(
        &mut self,
        descriptor: &WindowDescriptor,
        style: NativeStyleMask,
    ) -> Result<Retained<NSWindow>, PlatformError> {
        let backing = check_backing(descriptor.backing)?;
        let style_bits = usize::try_from(style.bits()).map_err(|_| {
            PlatformError::WindowCreation(format!("style mask {:#x} too wide", style.bits()))
        })?;
        let rect = NSRect::new(
            NSPoint::new(descriptor.x, descriptor.y),
            NSSize::new(descriptor.width, descriptor.height),
        );

        let window = unsafe {
            NSWindow::initWithContentRect_styleMask_backing_defer(
                NSWindow::alloc(self.context.mtm),
                rect,
                NSWindowStyleMask(style_bits),
                NSBackingStoreType(backing),
                false,
            )
        };
        // The handle table owns the window; AppKit must not free it on close
        unsafe { window.setReleasedWhenClosed(false) };

        window.makeKeyAndOrderFront(None);
        window.makeMainWindow();

        self.windows.push(window.clone());
        debug!(style = style_bits, backing, "NSWindow ordered front");
        Ok(window)
    }

    pub(crate) fn alive(&self, window: &Retained<NSWindow>) -> bool {
        self.windows.contains(window) && window.isVisible()
    }

    pub(crate) fn destroy(&mut self, window: Retained<NSWindow>) {
        self.windows.retain(|candidate| *candidate != window);
        window.close();
    }
}
