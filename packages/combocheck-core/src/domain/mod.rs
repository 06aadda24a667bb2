/*
 * Domain Layer - Batch entities and external ports
 *
 * HEXAGONAL ARCHITECTURE:
 * - No knowledge of how sources are parsed or tokenized
 * - Only scores, pairs and the provider interface
 * - Testable without infrastructure
 */

pub mod models;
pub mod ports;

pub use models::{clamp_score, NormalizationMode, Score, MAX_SCORE, UNAVAILABLE};
pub use ports::{ProviderError, SourceAnalysisProvider, TreeNode};
