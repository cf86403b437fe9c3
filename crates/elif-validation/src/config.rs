//! Engine configuration

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on how deep the walker descends into nested values
pub const DEFAULT_MAX_DEPTH: usize = 128;

pub const MAX_DEPTH_ENV: &str = "ELIF_VALIDATION_MAX_DEPTH";
pub const ABSENT_VALUES_ENV: &str = "ELIF_VALIDATION_ABSENT_VALUES";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: '{value}', expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Validation failed for {field}: {reason}")]
    ValidationFailed { field: String, reason: String },
}

/// What to do when a tagged site holds no value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentValuePolicy {
    /// Report `UnreadableValue`
    #[default]
    Reject,
    /// Leave the site unvalidated
    Skip,
}

impl FromStr for AbsentValuePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "error" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::InvalidValue {
                field: "absent_values".to_string(),
                value: s.to_string(),
                expected: "reject or skip".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deepest nesting level visited before traversal aborts
    pub max_depth: usize,
    pub absent_values: AbsentValuePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            absent_values: AbsentValuePolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum traversal depth
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the policy for absent values at tagged sites
    pub fn absent_values(mut self, policy: AbsentValuePolicy) -> Self {
        self.absent_values = policy;
        self
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Ok(depth_str) = env::var(MAX_DEPTH_ENV) {
            config.max_depth = depth_str.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "max_depth".to_string(),
                value: depth_str.clone(),
                expected: "a positive integer".to_string(),
            })?;
        }

        if let Ok(policy_str) = env::var(ABSENT_VALUES_ENV) {
            config.absent_values = policy_str.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.absent_values, AbsentValuePolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_and_validation() {
        let config = EngineConfig::new().max_depth(0).absent_values(AbsentValuePolicy::Skip);
        assert_eq!(config.absent_values, AbsentValuePolicy::Skip);
        assert!(matches!(config.validate(), Err(ConfigError::ValidationFailed { .. })));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("Skip".parse::<AbsentValuePolicy>(), Ok(AbsentValuePolicy::Skip));
        assert_eq!(" error ".parse::<AbsentValuePolicy>(), Ok(AbsentValuePolicy::Reject));
        assert!("ignore".parse::<AbsentValuePolicy>().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig = serde_json::from_str(r#"{"absent_values": "skip"}"#).unwrap();
        assert_eq!(config.absent_values, AbsentValuePolicy::Skip);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env() {
        env::set_var(MAX_DEPTH_ENV, "16");
        env::set_var(ABSENT_VALUES_ENV, "skip");
        let config = EngineConfig::from_env();
        env::remove_var(MAX_DEPTH_ENV);
        env::remove_var(ABSENT_VALUES_ENV);

        let config = config.unwrap();
        assert_eq!(config.max_depth, 16);
        assert_eq!(config.absent_values, AbsentValuePolicy::Skip);
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_rejects_bad_depth() {
        env::set_var(MAX_DEPTH_ENV, "deep");
        let result = EngineConfig::from_env();
        env::remove_var(MAX_DEPTH_ENV);

        assert!(
            matches!(result, Err(ConfigError::InvalidValue { field, .. }) if field == "max_depth")
        );
    }
}
