//! Public entry points of the validation engine

use crate::config::EngineConfig;
use crate::error::{EngineError, ValidationReport};
use crate::traits::Validatable;
use crate::walker::{Mode, Walker};

/// Validation engine holding only its configuration.
///
/// Each call walks its own graph with its own traversal state, so one engine
/// can be shared across threads validating independent values. The graph must
/// not be mutated while it is being walked.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: EngineConfig,
}

impl ValidationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configured from `ELIF_VALIDATION_*` environment variables
    pub fn from_env() -> Result<Self, crate::config::ConfigError> {
        EngineConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate `root` and everything reachable from it, stopping at the first failure
    pub fn validate(&self, root: &dyn Validatable) -> Result<(), EngineError> {
        tracing::debug!(type_name = root.target_type().name(), "running validation");
        Walker::new(&self.config, Mode::FailFast).run(root).map(|_| ())
    }

    /// Validate the whole graph, gathering every site failure into a report.
    ///
    /// Cycles and depth overruns still abort the traversal with an error.
    pub fn collect(&self, root: &dyn Validatable) -> Result<ValidationReport, EngineError> {
        tracing::debug!(type_name = root.target_type().name(), "collecting validation report");
        Walker::new(&self.config, Mode::Collect).run(root)
    }
}

/// Run validation on `root` with the default configuration.
///
/// The class-level tag of `root` is checked first, then its fields in
/// declaration order; the first failure is returned.
pub fn run_validation_on_bean(root: &dyn Validatable) -> Result<(), EngineError> {
    ValidationEngine::default().validate(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::tag::{ValidationTag, Validator};
    use crate::traits::FieldSite;
    use std::any::Any;

    #[derive(Default)]
    struct Even;

    impl Validator for Even {
        type Target = u64;

        fn validate(&self, input: &u64) -> Result<(), ValidationError> {
            if input % 2 == 0 {
                Ok(())
            } else {
                Err(ValidationError::new(format!("{input} is odd")))
            }
        }
    }

    struct Counter {
        value: u64,
    }

    impl Validatable for Counter {
        fn fields(&self) -> Vec<FieldSite<'_>> {
            vec![FieldSite::value("value", &self.value)
                .tagged(ValidationTag::new("Even").with::<Even>())]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Untagged {
        _name: String,
    }

    impl Validatable for Untagged {
        fn fields(&self) -> Vec<FieldSite<'_>> {
            Vec::new()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_untagged_graph_is_noop() {
        assert!(run_validation_on_bean(&Untagged { _name: "x".into() }).is_ok());
    }

    #[test]
    fn test_boxed_dyn_root() {
        let root: Box<dyn Validatable> = Box::new(Counter { value: 3 });
        let err = run_validation_on_bean(root.as_ref()).unwrap_err();
        assert_eq!(err.to_string(), "3 is odd");
    }

    #[test]
    fn test_collect_on_passing_graph_is_empty() {
        let engine = ValidationEngine::default();
        assert!(engine.collect(&Counter { value: 4 }).unwrap().is_empty());
    }

    #[test]
    fn test_shared_engine_across_threads() {
        let engine = ValidationEngine::default();
        let results: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8u64)
                .map(|value| {
                    let engine = &engine;
                    scope.spawn(move || engine.validate(&Counter { value }).is_ok())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results, vec![true, false, true, false, true, false, true, false]);
    }
}
