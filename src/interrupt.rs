//! SIGINT handling. The handler only trips a process-wide flag; the
//! report and exit happen on the main flow once the wait loop observes
//! it.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the SIGINT handler. Must be called after registration so the
/// report can never observe a pre-registration state.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(set)
}

pub fn set() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn pending() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
