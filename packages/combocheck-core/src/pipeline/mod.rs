//! Pipeline orchestration
//!
//! - batch   : validated corpus + pair list
//! - harness : striped phase runner, progress counters, halt flag
//! - check   : per-run context and the `PairwiseCheck` trait
//! - engine  : entry point tying batch, provider, config and progress together

pub mod batch;
pub mod check;
pub mod engine;
pub mod harness;

pub use batch::{Batch, FilePair};
pub use check::{CheckContext, DerivedData, PairwiseCheck};
pub use engine::{CheckKind, ComparisonEngine, ScoreSheet};
pub use harness::{HaltFlag, PhaseOutput, ProgressSnapshot, ProgressState, StripedRunner};
