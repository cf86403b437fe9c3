//! Validation error types and handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::tag::TargetType;

/// Outcome of a single validator call
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Failure reported by a validator for the value it inspected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Error)]
pub struct ValidationError {
    /// Human-readable error message
    pub message: String,
    /// Error code for programmatic handling
    pub code: String,
    /// Additional context or hints
    pub context: Option<serde_json::Value>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "validation_failed".to_string(),
            context: None,
        }
    }

    /// Create a validation error with a specific code
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            context: None,
        }
    }

    /// Set the error code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Set additional context
    pub fn context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors surfaced by the validation engine
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("tag '{tag}' at {path} has no validator for type {observed}")]
    NoValidatorForType {
        tag: String,
        observed: TargetType,
        path: String,
    },

    #[error("tag '{tag}' at {path} declares more than one validator for type {observed}: {}", .candidates.join(", "))]
    AmbiguousValidator {
        tag: String,
        observed: TargetType,
        candidates: Vec<&'static str>,
        path: String,
    },

    /// Raised by the validator itself; carried unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not read value at {path}: {reason}")]
    UnreadableValue { path: String, reason: String },

    #[error("cycle detected at {path}: {type_name} is already being validated")]
    CycleDetected { path: String, type_name: &'static str },

    #[error("maximum traversal depth {max_depth} exceeded at {path}")]
    DepthExceeded { path: String, max_depth: usize },
}

impl EngineError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &str {
        match self {
            Self::NoValidatorForType { .. } => "no_validator_for_type",
            Self::AmbiguousValidator { .. } => "ambiguous_validator",
            Self::Validation(error) => &error.code,
            Self::UnreadableValue { .. } => "unreadable_value",
            Self::CycleDetected { .. } => "cycle_detected",
            Self::DepthExceeded { .. } => "depth_exceeded",
        }
    }

    /// Whether this error aborts traversal even when collecting
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CycleDetected { .. } | Self::DepthExceeded { .. })
    }

    /// The validator-reported failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            _ => None,
        }
    }
}

/// A single problem recorded at one site while collecting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    /// Path of the site, e.g. `$.address.city`
    pub path: String,
    pub code: String,
    pub message: String,
    pub context: Option<serde_json::Value>,
}

impl Violation {
    pub(crate) fn from_error(path: impl Into<String>, error: &EngineError) -> Self {
        let context = error.as_validation().and_then(|e| e.context.clone());
        Self {
            path: path.into(),
            code: error.code().to_string(),
            message: error.to_string(),
            context,
        }
    }
}

/// Ordered collection of violations gathered over a full traversal
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Total number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Violations recorded at a specific path
    pub fn at_path<'r>(&'r self, path: &'r str) -> impl Iterator<Item = &'r Violation> + 'r {
        self.violations.iter().filter(move |v| v.path == path)
    }

    /// Check if a specific path has violations
    pub fn has_violations_at(&self, path: &str) -> bool {
        self.at_path(path).next().is_some()
    }

    /// Convert into `Ok(())` when empty
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "violations": self.violations
            }
        })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed with {} violation(s):", self.violations.len())?;
            for violation in &self.violations {
                write!(f, "\n  {}: {}", violation.path, violation.message)?;
            }
            Ok(())
        }
    }
}

impl std::error::Error for ValidationReport {}
