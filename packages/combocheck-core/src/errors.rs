//! Error types for combocheck-core
//!
//! Only batch-fatal conditions are errors. A file that cannot be read or
//! analyzed is recorded as an unavailable score and never reaches this type.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for combocheck-core operations
#[derive(Debug, Error)]
pub enum CombocheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A pair references a file index outside the corpus, or a file against itself
    #[error("Invalid pair #{pair}: ({left}, {right}) with {file_count} files in corpus")]
    InvalidPair {
        pair: usize,
        left: usize,
        right: usize,
        file_count: usize,
    },

    /// Flat pair data does not describe whole pairs
    #[error("Pair data has odd length {0}; expected two indices per pair")]
    PairDataLength(usize),

    /// An allocation for a comparison buffer could not be satisfied
    #[error("Resource exhausted in '{phase}': could not allocate {requested} elements")]
    ResourceExhausted { phase: String, requested: usize },

    /// The worker pool for a phase could not be started
    #[error("Worker pool error: {0}")]
    Pool(String),
}

impl CombocheckError {
    /// Create a resource-exhaustion error for a phase
    pub fn exhausted(phase: impl Into<String>, requested: usize) -> Self {
        CombocheckError::ResourceExhausted {
            phase: phase.into(),
            requested,
        }
    }

    /// Whether the error was raised before any worker started
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CombocheckError::InvalidPair { .. }
                | CombocheckError::PairDataLength(_)
                | CombocheckError::Config(_)
        )
    }
}

/// Result type alias for combocheck operations
pub type Result<T> = std::result::Result<T, CombocheckError>;
