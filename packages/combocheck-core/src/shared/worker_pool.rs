//! Worker pool sizing and construction
//!
//! Every parallel phase builds its own Rayon pool with exactly the requested
//! number of threads and drops it when the phase ends. The global Rayon pool
//! is never touched, so a library caller's own pool configuration survives.

use crate::errors::{CombocheckError, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Upper bound on worker threads per phase
pub const MAX_WORKERS: usize = 256;

/// Stack size per worker; tree canonicalization recurses once per tree level
const WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Resolve a configured worker count: `0` means one per logical CPU.
///
/// The result is always in `1..=MAX_WORKERS`.
pub fn resolve_workers(requested: usize) -> usize {
    let workers = if requested == 0 {
        num_cpus::get()
    } else {
        requested
    };
    workers.clamp(1, MAX_WORKERS)
}

/// Number of stripes actually worth starting for `total` items
///
/// Never zero, and never more threads than there are items.
pub fn stripes_for(workers: usize, total: usize) -> usize {
    workers.min(total).max(1)
}

/// Build a dedicated pool for one phase
pub fn build_pool(workers: usize, phase: &str) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .stack_size(WORKER_STACK_SIZE)
        .thread_name(|i| format!("combocheck-worker-{}", i))
        .build()
        .map_err(|e| CombocheckError::Pool(format!("{}: {}", phase, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_zero_is_auto() {
        let workers = resolve_workers(0);
        assert!(workers >= 1);
        assert!(workers <= MAX_WORKERS);
    }

    #[test]
    fn test_resolve_clamps() {
        assert_eq!(resolve_workers(1), 1);
        assert_eq!(resolve_workers(8), 8);
        assert_eq!(resolve_workers(10_000), MAX_WORKERS);
    }

    #[test]
    fn test_stripes_for_small_workloads() {
        assert_eq!(stripes_for(8, 3), 3);
        assert_eq!(stripes_for(8, 0), 1);
        assert_eq!(stripes_for(4, 100), 4);
    }

    #[test]
    fn test_build_pool_thread_count() {
        let pool = build_pool(3, "test").unwrap();
        assert_eq!(pool.current_num_threads(), 3);
    }
}
