//! Event pump types and the termination policy

/// How long one pump may wait for the first native event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timeout {
    /// Never wait: dispatch what is already queued
    Immediate,
    /// Wait until at least one event arrives, then dispatch what is queued
    Infinite,
}

/// Control flow after a pump
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Windows remain open; keep pumping
    #[default]
    Continue,
    /// The application was told to terminate
    Exit,
}

/// What a backend reports to the application while dispatching
///
/// These are lifecycle notices the application needs to keep its handle
/// table honest, not input events.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendEvent<W> {
    /// The native window was closed (by the user or the window manager)
    WindowClosed(W),
    /// The native side asked the application to quit
    ///
    /// Neither the X11 nor the Cocoa backend emits this: X11 has no quit
    /// request, and AppKit answers `applicationShouldTerminate:` in the
    /// delegate and ends the process itself. Backends that forward a quit
    /// request to the host instead of exiting report it here.
    QuitRequested,
}

/// Answer to a native "may the application terminate?" query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminateReply {
    /// Terminate right away
    Now,
}

/// Reply to every explicit termination request
///
/// There is no veto at this layer; collaborators that want one must
/// intercept before the request reaches the platform.
pub fn termination_reply() -> TerminateReply {
    TerminateReply::Now
}

/// Whether closing the last window terminates the application
pub fn terminate_after_last_window_closed() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_default() {
        assert_eq!(ControlFlow::default(), ControlFlow::Continue);
    }

    #[test]
    fn test_termination_policy() {
        assert_eq!(termination_reply(), TerminateReply::Now);
        assert!(terminate_after_last_window_closed());
    }
}
