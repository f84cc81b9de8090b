//! Audio device round trip against the system OpenAL
//!
//! Needs OpenAL and an output device; run with `cargo test -- --ignored`.

use nativa_app::prelude::*;

#[test]
#[ignore = "needs OpenAL and an audio device"]
fn default_device_round_trip() {
    let mut audio = nativa_app::audio(&NativaConfig::default()).unwrap();
    let device = audio.open(None).unwrap();
    assert_eq!(audio.error(device), DeviceErrorCode::NoError);
    assert!(audio.close(device));
    assert!(!audio.close(device));
    assert_eq!(audio.error(device), DeviceErrorCode::InvalidDevice);
}
