//! Configuration System
//!
//! One `EngineConfig` with a section per concern:
//! - `parallel`      - worker count per phase
//! - `edit_distance` - normalization for byte-level edit distance
//! - `winnowing`     - K, W and normalization for fingerprints
//! - `keyword`       - normalization for the keyword tokenizer
//!
//! # Examples
//!
//! ```rust
//! use combocheck_core::config::EngineConfig;
//!
//! let config = EngineConfig::from_yaml_str("version: 1\nparallel:\n  num_workers: 4\n")?;
//! assert_eq!(config.parallel.num_workers, 4);
//! # Ok::<(), combocheck_core::config::ConfigError>(())
//! ```

pub mod engine_config;
pub mod error;
pub mod io;
pub mod stage_configs;
pub mod validation;

// Re-exports
pub use engine_config::{EngineConfig, SUPPORTED_VERSIONS, WORKERS_ENV};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use stage_configs::{
    EditDistanceConfig, KeywordConfig, ParallelConfig, WinnowingConfig, DEFAULT_K, DEFAULT_W,
    DEFAULT_WORKERS,
};
pub use validation::Validatable;
