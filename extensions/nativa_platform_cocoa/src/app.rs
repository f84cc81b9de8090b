//! NSApplication context and its delegate
//!
//! Termination follows AppKit: closing the last window or a Quit request
//! ends the process inside `nextEventMatchingMask`, not by returning
//! `ControlFlow::Exit` to the host.

#![cfg(target_os = "macos")]

use nativa_platform::{
    terminate_after_last_window_closed, termination_reply, PlatformConfig, PlatformError,
    TerminateReply,
};
use objc2::rc::Retained;
use objc2::runtime::ProtocolObject;
use objc2::{define_class, msg_send, MainThreadOnly};
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate,
    NSApplicationTerminateReply,
};
use objc2_foundation::{MainThreadMarker, NSObject, NSObjectProtocol};
use tracing::debug;

define_class!(
    // SAFETY:
    // - NSObject has no subclassing requirements.
    // - AppDelegate does not implement Drop.
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "NativaApplicationDelegate"]
    pub struct AppDelegate;

    unsafe impl NSObjectProtocol for AppDelegate {}

    // Both answers let AppKit run `terminate:`, which exits the process from
    // inside the event pump. `Application::run_blocking` does not return on
    // this path and no destructors run.
    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationShouldTerminate:))]
        fn should_terminate(&self, _sender: &NSApplication) -> NSApplicationTerminateReply {
            match termination_reply() {
                TerminateReply::Now => NSApplicationTerminateReply::TerminateNow,
            }
        }

        #[unsafe(method(applicationShouldTerminateAfterLastWindowClosed:))]
        fn should_terminate_after_last_window_closed(&self, _sender: &NSApplication) -> bool {
            terminate_after_last_window_closed()
        }
    }
);

impl AppDelegate {
    fn new(mtm: MainThreadMarker) -> Retained<Self> {
        let this = Self::alloc(mtm).set_ivars(());
        unsafe { msg_send![super(this), init] }
    }
}

/// The shared application with our delegate installed
pub(crate) struct AppContext {
    pub(crate) mtm: MainThreadMarker,
    pub(crate) app: Retained<NSApplication>,
    // NSApplication only keeps a weak reference to its delegate
    _delegate: Retained<AppDelegate>,
}

impl AppContext {
    pub(crate) fn new(config: &PlatformConfig) -> Result<Self, PlatformError> {
        let mtm = MainThreadMarker::new().ok_or(PlatformError::WrongThread)?;

        let app = NSApplication::sharedApplication(mtm);
        app.setActivationPolicy(NSApplicationActivationPolicy::Regular);
        let delegate = AppDelegate::new(mtm);
        app.setDelegate(Some(ProtocolObject::from_ref(&*delegate)));
        app.finishLaunching();

        if config.activate {
            #[allow(deprecated)]
            app.activateIgnoringOtherApps(true);
        }
        debug!(activate = config.activate, "NSApplication ready");

        Ok(Self {
            mtm,
            app,
            _delegate: delegate,
        })
    }
}
