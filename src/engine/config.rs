//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// What happens when a component assigns the same property twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePropertyPolicy {
    /// Fail with [`AutoconfigError::DuplicateProperty`](crate::AutoconfigError::DuplicateProperty).
    #[default]
    Reject,
    /// Keep the last assignment and log a warning.
    Overwrite,
}

/// Configuration for [`Autoconfig`](super::Autoconfig).
///
/// # Examples
///
/// ```
/// use u_autoconfig::engine::{DuplicatePropertyPolicy, EngineConfig};
///
/// let config = EngineConfig::from_toml_str(r#"
///     duplicate_properties = "overwrite"
///     max_depth = 16
/// "#).unwrap();
/// assert_eq!(config.duplicate_properties, DuplicatePropertyPolicy::Overwrite);
/// assert_eq!(config.max_depth, 16);
/// assert!(config.coerce_integers);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Policy for repeated property names within one component.
    pub duplicate_properties: DuplicatePropertyPolicy,

    /// Maximum component nesting depth. `0` leaves only the hard ceiling
    /// [`MAX_NESTING_DEPTH`](crate::syntax::MAX_NESTING_DEPTH), which also
    /// caps larger values.
    pub max_depth: usize,

    /// Whether integer literals are accepted for `float`/`double` parameters.
    pub coerce_integers: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            duplicate_properties: DuplicatePropertyPolicy::Reject,
            max_depth: 64,
            coerce_integers: true,
        }
    }
}

impl EngineConfig {
    /// Sets the duplicate property policy.
    pub fn with_duplicate_properties(mut self, policy: DuplicatePropertyPolicy) -> Self {
        self.duplicate_properties = policy;
        self
    }

    /// Sets the maximum nesting depth (0 for the hard ceiling only).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enables or disables integer-to-float coercion.
    pub fn with_coerce_integers(mut self, enabled: bool) -> Self {
        self.coerce_integers = enabled;
        self
    }

    /// Nesting limit actually enforced by the parser and the builder.
    pub fn nesting_limit(&self) -> usize {
        crate::syntax::nesting_limit(self.max_depth)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
