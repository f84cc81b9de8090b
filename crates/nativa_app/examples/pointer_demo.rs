//! Pointer Demo
//!
//! Opens a standard window and logs the pointer whenever a button state
//! changes. Close the window to quit.
//!
//! Run with: cargo run -p nativa_app --example pointer_demo

#[cfg(unix)]
use nativa_app::prelude::*;
#[cfg(unix)]
use nativa_app::platform::{MAX_BUTTON, MIN_BUTTON};

#[cfg(not(unix))]
fn main() {
    eprintln!("pointer_demo needs X11 or AppKit");
}

#[cfg(unix)]
fn main() -> Result<()> {
    let config = NativaConfig::load(nativa_app::CONFIG_FILE).unwrap_or_default();
    nativa_app::init_logging(&config.log_filter);

    let mut app = nativa_app::application(&config);
    let window = app.create_window(
        &WindowDescriptor::new(800.0, 600.0)
            .origin(100.0, 100.0)
            .style([
                StyleFlag::Titled,
                StyleFlag::Closable,
                StyleFlag::Miniaturizable,
                StyleFlag::Resizable,
            ]),
    )?;

    let mut last_pressed = Vec::new();
    while app.process_pending_events()? == ControlFlow::Continue {
        if !app.is_open(window) {
            break;
        }
        let state = app.pointer(window)?;
        let pressed: Vec<i32> = (MIN_BUTTON..=MAX_BUTTON)
            .filter(|&b| state.button_down(b))
            .collect();
        if pressed != last_pressed {
            let (x, y) = state.position();
            tracing::info!(x, y, ?pressed, "pointer");
            last_pressed = pressed;
        }
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
    Ok(())
}
