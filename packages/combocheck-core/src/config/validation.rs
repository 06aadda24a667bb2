//! Configuration validation
//!
//! Every configuration section implements `Validatable`; `EngineConfig`
//! validates each section in turn.

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use combocheck_core::config::Validatable;
///
/// fn apply<C: Validatable>(config: C) -> Result<C, ConfigError> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Check that `value` lies in `min..=max`, producing a range error otherwise
pub(crate) fn check_range(
    field: &'static str,
    value: usize,
    min: usize,
    max: usize,
    hint: &'static str,
) -> ConfigResult<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::out_of_range(field, value, min, max, hint));
    }
    Ok(())
}
