//! Engine configuration
//!
//! Sources, lowest to highest precedence:
//! 1. Defaults
//! 2. YAML file (`version: 1` required)
//! 3. Environment (`COMBOCHECK_WORKERS`)
//!
//! The result is validated after every step that can change it.

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigExportV1;
use super::stage_configs::{EditDistanceConfig, KeywordConfig, ParallelConfig, WinnowingConfig};
use super::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `parallel.num_workers`
pub const WORKERS_ENV: &str = "COMBOCHECK_WORKERS";

/// Supported YAML schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub parallel: ParallelConfig,
    pub edit_distance: EditDistanceConfig,
    pub winnowing: WinnowingConfig,
    pub keyword: KeywordConfig,
}

impl EngineConfig {
    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            parallel: export.parallel,
            edit_distance: export.edit_distance,
            winnowing: export.winnowing,
            keyword: export.keyword,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            parallel: self.parallel,
            edit_distance: self.edit_distance,
            winnowing: self.winnowing,
            keyword: self.keyword,
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from any variable source
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        if let Some(raw) = lookup(WORKERS_ENV) {
            let workers = raw.trim().parse::<usize>().map_err(|_| ConfigError::InvalidEnv {
                var: WORKERS_ENV,
                value: raw.clone(),
            })?;
            self.parallel.num_workers = workers;
        }
        self.validate()?;
        Ok(self)
    }

    /// Builder: set the worker count
    pub fn workers(mut self, num_workers: usize) -> Self {
        self.parallel.num_workers = num_workers;
        self
    }

    /// Builder: adjust the winnowing section
    pub fn winnowing(mut self, f: impl FnOnce(WinnowingConfig) -> WinnowingConfig) -> Self {
        self.winnowing = f(self.winnowing);
        self
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.parallel.validate()?;
        self.edit_distance.validate()?;
        self.winnowing.validate()?;
        self.keyword.validate()
    }

    fn config_name(&self) -> &'static str {
        "EngineConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NormalizationMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = EngineConfig::default().workers(3).winnowing(|w| w.k(7));
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("num_workers: 3"));
        assert!(yaml.contains("k: 7"));
        assert_eq!(EngineConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_yaml_loading_from_file() {
        let yaml_content = r#"
version: 1
parallel:
  num_workers: 2
edit_distance:
  normalization: none
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = EngineConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.parallel.num_workers, 2);
        assert_eq!(config.edit_distance.normalization, NormalizationMode::None);
        assert_eq!(config.winnowing, WinnowingConfig::default());
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = EngineConfig::from_yaml_str("parallel:\n  num_workers: 2\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = EngineConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_section_rejected() {
        let result = EngineConfig::from_yaml_str("version: 1\nmoss: {}\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_out_of_range_rejected() {
        let result = EngineConfig::from_yaml_str("version: 1\nwinnowing:\n  w: 0\n");
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = EngineConfig::from_yaml("/nonexistent/combocheck.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_worker_override() {
        let config = EngineConfig::default()
            .with_overrides(|var| (var == WORKERS_ENV).then(|| " 12 ".to_string()))
            .unwrap();
        assert_eq!(config.parallel.num_workers, 12);

        let untouched = EngineConfig::default().with_overrides(|_| None).unwrap();
        assert_eq!(untouched.parallel.num_workers, 8);
    }

    #[test]
    fn test_worker_override_invalid() {
        let result = EngineConfig::default().with_overrides(|_| Some("many".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidEnv { .. })));

        let result = EngineConfig::default().with_overrides(|_| Some("999".to_string()));
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }
}
