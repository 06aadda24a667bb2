//! Striped phase runner
//!
//! A phase is `item_count` independent items. Worker `k` of `n` handles items
//! `k, k + n, k + 2n, ...`, so item `i` always lands on worker `i mod n`.
//! Each worker collects its own results; they are merged into index order
//! only after every worker has returned, which gives every slot exactly one
//! writer without any locking on the results.
//!
//! ```text
//! begin_phase ─► build pool(n) ─► broadcast ─┬─ worker 0: 0, n, 2n, ...
//!                                             ├─ worker 1: 1, n+1, ...
//!                                             └─ worker n-1 ...
//!                              barrier ◄──────┘
//! merge ─► drop pool ─► finish_phase (only if nothing was skipped)
//! ```

use super::progress::ProgressState;
use crate::errors::{CombocheckError, Result};
use crate::shared::worker_pool::{build_pool, stripes_for};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Results of one phase, one slot per item
#[derive(Debug)]
pub struct PhaseOutput<T> {
    /// `None` for items never dispatched because of a halt
    pub items: Vec<Option<T>>,
    pub halted: bool,
}

impl<T> PhaseOutput<T> {
    pub fn completed(&self) -> usize {
        self.items.iter().filter(|item| item.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Runs phases over a fixed worker count, reporting into shared progress
#[derive(Debug, Clone)]
pub struct StripedRunner {
    workers: usize,
    progress: Arc<ProgressState>,
}

impl StripedRunner {
    pub fn new(workers: usize, progress: Arc<ProgressState>) -> Self {
        Self {
            workers: workers.max(1),
            progress,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// Run `work` for every index in `0..item_count` on a dedicated pool.
    ///
    /// `work` returns `Err` only for batch-fatal conditions. The first such
    /// error stops every worker at its next halt check and is returned once
    /// the pool has joined; partial results are dropped.
    pub fn run<T, F>(&self, phase: &str, item_count: usize, work: F) -> Result<PhaseOutput<T>>
    where
        T: Send,
        F: Fn(usize) -> Result<T> + Sync,
    {
        self.progress.begin_phase(phase, item_count);
        let start = Instant::now();

        if item_count == 0 {
            self.progress.finish_phase();
            return Ok(PhaseOutput {
                items: Vec::new(),
                halted: false,
            });
        }

        let stripes = stripes_for(self.workers, item_count);
        info!(phase, items = item_count, workers = stripes, "phase started");

        let pool = build_pool(stripes, phase)?;
        let abort = AtomicBool::new(false);
        let failure: Mutex<Option<CombocheckError>> = Mutex::new(None);

        let per_worker: Vec<Vec<(usize, T)>> = pool.broadcast(|ctx| {
            let stride = ctx.num_threads();
            let mut local = Vec::with_capacity(item_count / stride + 1);
            let mut index = ctx.index();

            while index < item_count {
                if self.progress.is_halted() || abort.load(Ordering::Acquire) {
                    break;
                }
                match work(index) {
                    Ok(value) => local.push((index, value)),
                    Err(err) => {
                        abort.store(true, Ordering::Release);
                        let mut slot = failure.lock();
                        if slot.is_none() {
                            *slot = Some(err);
                        }
                        break;
                    }
                }
                self.progress.record_item();
                index += stride;
            }

            debug!(phase, worker = ctx.index(), processed = local.len(), "worker finished");
            local
        });
        drop(pool);

        if let Some(err) = failure.into_inner() {
            error!(phase, error = %err, "phase aborted");
            return Err(err);
        }

        let mut items: Vec<Option<T>> = std::iter::repeat_with(|| None).take(item_count).collect();
        for (index, value) in per_worker.into_iter().flatten() {
            items[index] = Some(value);
        }

        let output = PhaseOutput {
            halted: items.iter().any(|item| item.is_none()),
            items,
        };
        self.conclude(phase, &output, start);
        Ok(output)
    }

    /// Run `work` for every index on the calling thread.
    ///
    /// Used for steps that mutate shared state and must not run concurrently.
    /// Progress and halt behave as in [`StripedRunner::run`].
    pub fn run_sequential<F>(&self, phase: &str, item_count: usize, mut work: F) -> Result<bool>
    where
        F: FnMut(usize) -> Result<()>,
    {
        self.progress.begin_phase(phase, item_count);
        let start = Instant::now();
        info!(phase, items = item_count, workers = 1, "phase started");

        let mut processed = 0;
        for index in 0..item_count {
            if self.progress.is_halted() {
                break;
            }
            if let Err(err) = work(index) {
                error!(phase, error = %err, "phase aborted");
                return Err(err);
            }
            self.progress.record_item();
            processed += 1;
        }

        let halted = processed < item_count;
        if halted {
            info!(phase, processed, items = item_count, "phase halted");
        } else {
            self.progress.finish_phase();
            info!(phase, elapsed_ms = start.elapsed().as_millis() as u64, "phase finished");
        }
        Ok(halted)
    }

    fn conclude<T>(&self, phase: &str, output: &PhaseOutput<T>, start: Instant) {
        let elapsed_ms = start.elapsed().as_millis() as u64;
        if output.halted {
            info!(
                phase,
                processed = output.completed(),
                items = output.len(),
                elapsed_ms,
                "phase halted"
            );
        } else {
            self.progress.finish_phase();
            info!(phase, items = output.len(), elapsed_ms, "phase finished");
        }
    }
}
