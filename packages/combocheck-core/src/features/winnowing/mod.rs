//! Winnowing Fingerprint Engine
//!
//! K-gram hashing plus windowed-minimum selection. Fingerprints are compared
//! with the edit distance engine.

pub mod application;
pub mod domain;

pub use application::WinnowingCheck;
pub use domain::{fingerprint, kgram_hash, kgram_hashes, winnow};
