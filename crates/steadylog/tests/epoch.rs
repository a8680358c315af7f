//! The elapsed-time epoch is pinned by the first initialization, not by the
//! first log call.

use std::thread;
use std::time::Duration;

use steadylog::{elapsed_millis, init_logging, is_initialized};

#[test]
fn early_init_pins_the_epoch() {
    assert!(!is_initialized());
    init_logging();

    thread::sleep(Duration::from_millis(300));

    let elapsed = elapsed_millis();
    assert!(elapsed >= 300, "epoch moved past init: {elapsed}ms");
}
