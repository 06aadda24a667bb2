//! Feature modules - one per comparison engine
//!
//! Each feature contains:
//! - domain      - Pure algorithm (no I/O, no threads)
//! - application - The `PairwiseCheck` that drives it through the harness

pub mod edit_distance;
pub mod keyword;
pub mod tree_canon;
pub mod winnowing;
