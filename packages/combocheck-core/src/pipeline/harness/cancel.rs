//! Cooperative halt token
//!
//! Workers poll the flag between items; an item already started always runs
//! to completion. Clones share the same flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cooperative halt flag
#[derive(Debug, Clone, Default)]
pub struct HaltFlag {
    raised: Arc<AtomicBool>,
}

impl HaltFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every worker to stop after its current item
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Lower the flag before a new run
    pub fn clear(&self) {
        self.raised.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = HaltFlag::new();
        let observer = flag.clone();
        assert!(!observer.is_raised());
        flag.raise();
        assert!(observer.is_raised());
        observer.clear();
        assert!(!flag.is_raised());
    }
}
