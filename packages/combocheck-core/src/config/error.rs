//! Configuration errors
//!
//! Everything that can go wrong between a YAML file (or the environment) and
//! a validated `EngineConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric field is outside its accepted range
    #[error("{field} = {value} is outside {min}..={max} ({hint})")]
    Range {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
        hint: &'static str,
    },

    #[error("configuration has no 'version' field; add 'version: 1' at the top")]
    MissingVersion,

    #[error("configuration version {found} is not supported (supported: {})", list_versions(supported))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Environment override could not be parsed
    #[error("{var}={value:?} is not a valid worker count")]
    InvalidEnv { var: &'static str, value: String },

    /// Value is in range but not usable together with the rest of the section
    #[error("invalid configuration: {0}")]
    Validation(String),

    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn list_versions(versions: &[u32]) -> String {
    versions
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigError {
    pub fn out_of_range(
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
        hint: &'static str,
    ) -> Self {
        ConfigError::Range {
            field,
            value,
            min,
            max,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message_names_field_and_bounds() {
        let err = ConfigError::out_of_range("k", 0, 1, 1024, "K-gram width must be positive");
        assert_eq!(
            err.to_string(),
            "k = 0 is outside 1..=1024 (K-gram width must be positive)"
        );
    }

    #[test]
    fn test_unsupported_version_lists_supported() {
        let err = ConfigError::UnsupportedVersion {
            found: 7,
            supported: vec![1, 2],
        };
        assert_eq!(
            err.to_string(),
            "configuration version 7 is not supported (supported: 1, 2)"
        );
    }

    #[test]
    fn test_invalid_env_quotes_value() {
        let err = ConfigError::InvalidEnv {
            var: "COMBOCHECK_WORKERS",
            value: "many".to_string(),
        };
        assert_eq!(err.to_string(), "COMBOCHECK_WORKERS=\"many\" is not a valid worker count");
    }
}
