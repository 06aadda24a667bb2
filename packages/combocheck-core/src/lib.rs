/*
 * Combocheck Core - Pairwise Source Similarity Engine
 *
 * Feature-First Hexagonal Architecture:
 * - domain/      : Scores, normalization modes, provider port
 * - shared/      : Chained hash map, linked list, worker pool
 * - features/    : Vertical slices (edit distance → winnowing → tree canon → keyword)
 * - pipeline/    : Batch, striped harness, progress, engine
 * - adapters/    : Filesystem and in-memory providers
 *
 * Performance:
 * - One rayon pool per phase, every worker striding over the items
 * - Per-file preprocessing done once, shared read-only by comparisons
 */

// Crate-level lint configuration
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Domain types and ports
pub mod domain;

/// Shared containers and worker pool
pub mod shared;

/// Similarity checks
pub mod features;

/// Batch, harness and engine
pub mod pipeline;

/// Configuration system
pub mod config;

/// Source-analysis providers
pub mod adapters;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use adapters::{FileSystemProvider, MemoryProvider, SyntaxTree};
pub use config::EngineConfig;
pub use domain::{
    NormalizationMode, ProviderError, Score, SourceAnalysisProvider, TreeNode, MAX_SCORE,
    UNAVAILABLE,
};
pub use errors::{CombocheckError, Result};
pub use pipeline::{Batch, CheckKind, ComparisonEngine, FilePair, PairwiseCheck, ScoreSheet};
