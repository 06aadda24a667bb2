//! Shared progress state
//!
//! One `ProgressState` lives for as long as its engine. Workers bump the
//! completed counter after every item; pollers on other threads read the
//! current phase and percent at any time.
//!
//! The phase label and the counters sit behind a single mutex. Nothing is
//! ever called while it is held.

use super::cancel::HaltFlag;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct PhaseCounters {
    phase: String,
    completed: usize,
    total: usize,
}

/// Point-in-time view of the progress state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    pub phase: String,
    pub completed: usize,
    pub total: usize,
    pub phases_completed: usize,
}

impl ProgressSnapshot {
    /// `100 * completed / total`, with an empty phase counting as complete
    pub fn percent(&self) -> u32 {
        percent_of(self.completed, self.total)
    }
}

fn percent_of(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let percent = (completed.min(total) as u128 * 100) / total as u128;
    percent as u32
}

/// Progress, phase label and halt flag shared by every worker of a run
#[derive(Debug, Default)]
pub struct ProgressState {
    counters: Mutex<PhaseCounters>,
    phases_completed: AtomicUsize,
    halt: HaltFlag,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the phase counters and the halt flag before a new run.
    ///
    /// The completed-phase counter is cumulative and only cleared by `reset_phases_completed`.
    pub fn reset(&self) {
        {
            let mut counters = self.counters.lock();
            counters.phase.clear();
            counters.completed = 0;
            counters.total = 0;
        }
        self.halt.clear();
    }

    /// Enter a new phase with `total` items
    pub fn begin_phase(&self, phase: &str, total: usize) {
        let mut counters = self.counters.lock();
        counters.phase.clear();
        counters.phase.push_str(phase);
        counters.completed = 0;
        counters.total = total;
    }

    /// Record one finished item of the current phase
    pub fn record_item(&self) {
        let mut counters = self.counters.lock();
        counters.completed += 1;
    }

    /// Count the current phase as fully completed
    pub fn finish_phase(&self) {
        self.phases_completed.fetch_add(1, Ordering::SeqCst);
    }

    /// Current phase name and percent complete (0-100)
    pub fn poll_progress(&self) -> (String, u32) {
        let counters = self.counters.lock();
        (
            counters.phase.clone(),
            percent_of(counters.completed, counters.total),
        )
    }

    /// Number of phases that ran every one of their items since the last reset
    pub fn poll_phases_completed(&self) -> usize {
        self.phases_completed.load(Ordering::SeqCst)
    }

    pub fn reset_phases_completed(&self) {
        self.phases_completed.store(0, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let counters = self.counters.lock();
        ProgressSnapshot {
            phase: counters.phase.clone(),
            completed: counters.completed,
            total: counters.total,
            phases_completed: self.phases_completed.load(Ordering::SeqCst),
        }
    }

    /// Request a cooperative halt of the running phase
    pub fn halt(&self) {
        self.halt.raise();
    }

    pub fn is_halted(&self) -> bool {
        self.halt.is_raised()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_percent_tracks_items() {
        let progress = ProgressState::new();
        progress.begin_phase("Winnowing preprocessing", 4);
        assert_eq!(progress.poll_progress(), ("Winnowing preprocessing".to_string(), 0));
        progress.record_item();
        assert_eq!(progress.poll_progress().1, 25);
        progress.record_item();
        progress.record_item();
        progress.record_item();
        assert_eq!(progress.poll_progress().1, 100);
    }

    #[test]
    fn test_empty_phase_reports_complete() {
        let progress = ProgressState::new();
        progress.begin_phase("Keyword comparisons", 0);
        assert_eq!(progress.poll_progress().1, 100);
    }

    #[test]
    fn test_phase_counter_reset() {
        let progress = ProgressState::new();
        progress.finish_phase();
        progress.finish_phase();
        assert_eq!(progress.poll_phases_completed(), 2);
        progress.reset_phases_completed();
        assert_eq!(progress.poll_phases_completed(), 0);
    }

    #[test]
    fn test_reset_clears_halt() {
        let progress = ProgressState::new();
        progress.halt();
        assert!(progress.is_halted());
        progress.reset();
        assert!(!progress.is_halted());
        assert_eq!(progress.snapshot(), ProgressSnapshot::default());
    }

    #[test]
    fn test_concurrent_record_is_exact() {
        let progress = Arc::new(ProgressState::new());
        progress.begin_phase("p", 8_000);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let progress = Arc::clone(&progress);
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        progress.record_item();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let snapshot = progress.snapshot();
        assert_eq!(snapshot.completed, 8_000);
        assert_eq!(snapshot.percent(), 100);
    }
}
