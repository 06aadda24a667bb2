//! Work distribution harness
//!
//! Striped per-phase thread pools, shared progress, cooperative halt.

pub mod cancel;
pub mod progress;
pub mod runner;

pub use cancel::HaltFlag;
pub use progress::{ProgressSnapshot, ProgressState};
pub use runner::{PhaseOutput, StripedRunner};
