//! Configuration I/O (YAML schema)
//!
//! Defines the on-disk schema. Loading and saving live on `EngineConfig`.

use super::stage_configs::{EditDistanceConfig, KeywordConfig, ParallelConfig, WinnowingConfig};
use serde::{Deserialize, Serialize};

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// parallel:
///   num_workers: 4
/// winnowing:
///   k: 5
///   w: 4
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1); optional only so that a missing
    /// field gets its own error
    pub version: Option<u32>,

    #[serde(default)]
    pub parallel: ParallelConfig,

    #[serde(default)]
    pub edit_distance: EditDistanceConfig,

    #[serde(default)]
    pub winnowing: WinnowingConfig,

    #[serde(default)]
    pub keyword: KeywordConfig,
}
