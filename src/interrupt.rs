//! The single interruption flag named in the resource model: set by an
//! external signal (Ctrl-C) and polled by the reduction driver between
//! redex rewrites. No repo in the retrieved pack installs a signal
//! handler, so this reaches for `ctrlc`, a small and widely used crate
//! that does exactly this one thing.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the SIGINT handler. Call once, at startup.
pub fn install() {
    let _ = ctrlc::set_handler(|| {
        interrupt();
    });
}

/// Raise the flag, as if a SIGINT had just arrived. Shared by the real
/// signal handler and by tests that need to simulate one without
/// installing an actual OS handler.
pub fn interrupt() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Clear the flag before starting a new top-level reduction, so a prior
/// interrupted reduction doesn't immediately abort the next one.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}
