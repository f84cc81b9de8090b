//! Window and pointer round trip against the real display
//!
//! Needs an X server (or a macOS session); run with `cargo test -- --ignored`.

#![cfg(unix)]

use nativa_app::prelude::*;

fn standard_window() -> WindowDescriptor {
    WindowDescriptor::new(800.0, 600.0)
        .origin(0.0, 0.0)
        .style([StyleFlag::Titled, StyleFlag::Closable, StyleFlag::Resizable])
        .backing(0)
}

#[test]
#[ignore = "needs a display"]
fn warped_pointer_reads_back() {
    let mut app = nativa_app::application(&NativaConfig::default());
    let window = app.create_window(&standard_window()).unwrap();
    app.process_pending_events().unwrap();

    app.warp_pointer(window, 100, 100).unwrap();
    app.process_pending_events().unwrap();
    assert_eq!(app.position(window).unwrap(), (100, 100));

    for button in [0, 6, -1, 42] {
        assert!(!app.button_down(window, button).unwrap());
    }
}

#[test]
#[ignore = "needs a display"]
fn closing_last_window_exits() {
    let mut app = nativa_app::application(&NativaConfig::default());
    let window = app.create_window(&standard_window()).unwrap();
    app.close_window(window).unwrap();

    assert!(!app.is_open(window));
    assert!(matches!(
        app.position(window),
        Err(PlatformError::InvalidHandle)
    ));
    assert_eq!(app.process_pending_events().unwrap(), ControlFlow::Exit);
}

#[test]
#[ignore = "needs a display"]
fn unsupported_backing_creates_nothing() {
    let mut app = nativa_app::application(&NativaConfig::default());
    let err = app
        .create_window(&standard_window().backing(7))
        .unwrap_err();
    assert!(matches!(err, PlatformError::UnsupportedBacking(7)));
    assert_eq!(app.window_count(), 0);
}
