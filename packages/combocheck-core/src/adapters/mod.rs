//! Adapters - SourceAnalysisProvider implementations
//!
//! HEXAGONAL ARCHITECTURE:
//! - Filesystem adapter reads real files, bytes only
//! - In-memory adapter serves pre-registered bytes, tokens and trees

pub mod fs_provider;
pub mod memory_provider;
pub mod text_normalizer;

pub use fs_provider::FileSystemProvider;
pub use memory_provider::{MemoryProvider, SyntaxTree};
pub use text_normalizer::normalize_text;
