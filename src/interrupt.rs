//! Ctrl-C handling for long batches.
//!
//! The handler only raises a flag; batch loops check it between files so a
//! file is never left half-moved.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared interrupt flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// Create a flag and register it as the process Ctrl-C handler.
    ///
    /// If a handler is already installed, a warning is logged and the returned
    /// flag simply never fires.
    pub fn install() -> Self {
        let interrupt = Self::default();
        let flag = Arc::clone(&interrupt.flag);
        if let Err(e) = ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        }) {
            tracing::warn!("Could not install Ctrl-C handler: {}", e);
        }
        interrupt
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
