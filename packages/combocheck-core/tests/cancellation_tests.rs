//! Halt and fatal-error behavior of the harness, driven through the engine

mod common;

use combocheck_core::errors::CombocheckError;
use combocheck_core::pipeline::{CheckContext, PairwiseCheck, PhaseOutput};
use combocheck_core::{CheckKind, Score};
use common::*;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const PHASE: &str = "Synthetic comparisons";

/// Scores `item_count` items as their own index and raises the halt flag at `halt_at`
struct HaltingCheck {
    item_count: usize,
    halt_at: usize,
    executed: Mutex<Vec<usize>>,
}

impl HaltingCheck {
    fn new(item_count: usize, halt_at: usize) -> Self {
        Self {
            item_count,
            halt_at,
            executed: Mutex::new(Vec::new()),
        }
    }
}

impl PairwiseCheck for HaltingCheck {
    fn name(&self) -> &'static str {
        "halting"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> combocheck_core::Result<PhaseOutput<Score>> {
        ctx.runner.run(PHASE, self.item_count, |index| {
            if index == self.halt_at {
                ctx.runner.progress().halt();
            }
            self.executed.lock().push(index);
            Ok(index as Score)
        })
    }
}

#[test]
fn test_halt_mid_batch_leaves_undispatched_items_undefined() {
    let engine = engine_over(&[], 4);
    let check = HaltingCheck::new(100, 50);

    let sheet = engine.run_check(&check).unwrap();
    assert!(sheet.is_halted());
    assert_eq!(sheet.len(), 100);

    let mut executed = check.executed.lock().clone();
    executed.sort_unstable();
    let defined: Vec<usize> = (0..100).filter(|&i| sheet.get(i).is_some()).collect();
    assert_eq!(defined, executed);

    // the halting item itself completes; its stripe stops right after it
    assert_eq!(sheet.get(50), Some(50));
    assert_eq!(sheet.get(54), None);
    assert!(defined.len() < 100);
    for index in defined {
        assert_eq!(sheet.get(index), Some(index as Score));
    }

    assert_eq!(engine.poll_phases_completed(), 0);
    assert_eq!(sheet.into_raw(), None);
}

#[test]
fn test_halt_from_another_thread() {
    let engine = Arc::new(engine_over(&[], 4));
    let progress = engine.progress_handle();
    let processed = Arc::new(AtomicUsize::new(0));

    struct SlowCheck(Arc<AtomicUsize>);

    impl PairwiseCheck for SlowCheck {
        fn name(&self) -> &'static str {
            "slow"
        }

        fn run(&self, ctx: &CheckContext<'_>) -> combocheck_core::Result<PhaseOutput<Score>> {
            ctx.runner.run(PHASE, 400, |index| {
                thread::sleep(Duration::from_millis(2));
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(index as Score)
            })
        }
    }

    let watcher = {
        let processed = Arc::clone(&processed);
        thread::spawn(move || {
            while processed.load(Ordering::SeqCst) < 20 {
                thread::sleep(Duration::from_millis(1));
            }
            progress.halt();
        })
    };

    let sheet = engine.run_check(&SlowCheck(Arc::clone(&processed))).unwrap();
    watcher.join().unwrap();

    assert!(sheet.is_halted());
    let defined = sheet.scores().iter().filter(|s| s.is_some()).count();
    assert_eq!(defined, processed.load(Ordering::SeqCst));
    assert!(defined >= 20);
    assert!(defined < 400);
}

#[test]
fn test_halt_before_run_is_cleared() {
    let engine = engine_over(&["abc", "abd"], 2);
    engine.halt();
    let sheet = engine.run(CheckKind::EditDistance).unwrap();
    assert!(!sheet.is_halted());
    assert_eq!(sheet.into_raw(), Some(vec![1]));
}

#[test]
fn test_fatal_error_fails_whole_run() {
    struct FailingCheck;

    impl PairwiseCheck for FailingCheck {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn run(&self, ctx: &CheckContext<'_>) -> combocheck_core::Result<PhaseOutput<Score>> {
            ctx.runner.run(PHASE, 64, |index| {
                if index == 7 {
                    return Err(CombocheckError::exhausted(PHASE, usize::MAX));
                }
                Ok(0)
            })
        }
    }

    let engine = engine_over(&[], 4);
    let err = engine.run_check(&FailingCheck).unwrap_err();
    assert!(matches!(err, CombocheckError::ResourceExhausted { .. }));
    assert!(!err.is_validation());
    assert_eq!(engine.poll_phases_completed(), 0);
}
