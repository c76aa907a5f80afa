//! Readiness flag shared between the probe handlers.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether the service should currently receive traffic. Starts ready.
///
/// Any state is reachable from any other; setting the current value again is a no-op.
#[derive(Debug)]
pub struct ProbeState {
    ready: AtomicBool,
}

impl ProbeState {
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(true),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    /// Returns the previous value.
    pub fn set_ready(&self, ready: bool) -> bool {
        self.ready.swap(ready, Ordering::Relaxed)
    }
}

impl Default for ProbeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_ready_and_toggles_without_history() {
        let p = ProbeState::default();
        assert!(p.is_ready());
        p.set_ready(false);
        assert!(!p.is_ready());
        p.set_ready(false);
        assert!(!p.is_ready());
        assert!(!p.set_ready(true));
        assert!(p.is_ready());
    }
}
