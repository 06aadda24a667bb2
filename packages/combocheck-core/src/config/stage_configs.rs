//! Per-check configuration types
//!
//! Each check has its own configuration struct with validation.
//! All configs implement `Validatable` and deserialize with per-field defaults,
//! so a YAML file only needs to name the fields it changes.

use super::error::{ConfigError, ConfigResult};
use super::validation::{check_range, Validatable};
use crate::domain::NormalizationMode;
use crate::shared::worker_pool::MAX_WORKERS;
use serde::{Deserialize, Serialize};

/// Default worker count
pub const DEFAULT_WORKERS: usize = 8;

/// Default K-gram width
pub const DEFAULT_K: usize = 5;

/// Default winnowing window
pub const DEFAULT_W: usize = 4;

/// Upper bound for K and W
pub const MAX_WINNOWING_PARAM: usize = 1024;

// ============================================================================
// Parallelism Configuration
// ============================================================================

/// Parallelism Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Number of workers per phase (0=auto, 1..=256)
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: DEFAULT_WORKERS,
        }
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range(
            "num_workers",
            self.num_workers,
            0,
            MAX_WORKERS,
            "Number of workers must be reasonable (0=auto)",
        )
    }

    fn config_name(&self) -> &'static str {
        "ParallelConfig"
    }
}

// ============================================================================
// Edit Distance Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditDistanceConfig {
    /// Normalization requested from the provider (default: whitespace_only)
    pub normalization: NormalizationMode,
}

impl Default for EditDistanceConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationMode::WhitespaceOnly,
        }
    }
}

impl Validatable for EditDistanceConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "EditDistanceConfig"
    }
}

// ============================================================================
// Winnowing Configuration
// ============================================================================

/// Winnowing Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinnowingConfig {
    /// K-gram width (1..=1024)
    pub k: usize,

    /// Window width in K-grams (1..=1024)
    pub w: usize,

    /// Normalization requested from the provider (default: full)
    pub normalization: NormalizationMode,
}

impl Default for WinnowingConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            w: DEFAULT_W,
            normalization: NormalizationMode::Full,
        }
    }
}

impl WinnowingConfig {
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn w(mut self, w: usize) -> Self {
        self.w = w;
        self
    }
}

impl Validatable for WinnowingConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range("k", self.k, 1, MAX_WINNOWING_PARAM, "K-gram width must be positive")?;
        check_range("w", self.w, 1, MAX_WINNOWING_PARAM, "Window width must be positive")
    }

    fn config_name(&self) -> &'static str {
        "WinnowingConfig"
    }
}

// ============================================================================
// Keyword Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Normalization requested from the provider (default: none)
    pub normalization: NormalizationMode,
}

impl Validatable for KeywordConfig {
    fn validate(&self) -> ConfigResult<()> {
        // `full` rewrites identifiers, which would leave nothing to compare
        if self.normalization == NormalizationMode::Full {
            return Err(ConfigError::Validation(
                "keyword.normalization: 'full' replaces every identifier, nothing is left to compare"
                    .to_string(),
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "KeywordConfig"
    }
}
