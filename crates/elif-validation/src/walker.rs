//! Depth-first traversal of a validatable object graph

use std::any::{Any, TypeId};

use crate::config::{AbsentValuePolicy, EngineConfig};
use crate::error::{EngineError, ValidationReport, Violation};
use crate::resolver::resolve;
use crate::tag::{TargetType, ValidationTag};
use crate::traits::{FieldSite, SiteValue, Validatable};

/// Root of every rendered path
pub const ROOT_PATH: &str = "$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Stop at the first error
    FailFast,
    /// Record site errors and keep walking
    Collect,
}

/// Identity of a value currently being walked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Identity {
    address: usize,
    type_id: TypeId,
}

impl Identity {
    fn of(bean: &dyn Validatable) -> Self {
        let value = bean.as_any();
        Self {
            address: value as *const dyn Any as *const () as usize,
            type_id: Any::type_id(value),
        }
    }
}

pub(crate) struct Walker<'c> {
    config: &'c EngineConfig,
    mode: Mode,
    report: ValidationReport,
    ancestors: Vec<Identity>,
    path: String,
}

impl<'c> Walker<'c> {
    pub(crate) fn new(config: &'c EngineConfig, mode: Mode) -> Self {
        Self {
            config,
            mode,
            report: ValidationReport::new(),
            ancestors: Vec::new(),
            path: ROOT_PATH.to_string(),
        }
    }

    /// Walk `root`, returning what was collected along the way
    pub(crate) fn run(mut self, root: &dyn Validatable) -> Result<ValidationReport, EngineError> {
        self.walk_bean(root, 1)?;
        Ok(self.report)
    }

    fn walk_bean(&mut self, bean: &dyn Validatable, depth: usize) -> Result<(), EngineError> {
        if depth > self.config.max_depth {
            return Err(EngineError::DepthExceeded {
                path: self.path.clone(),
                max_depth: self.config.max_depth,
            });
        }

        let identity = Identity::of(bean);
        if self.ancestors.contains(&identity) {
            tracing::warn!(
                path = %self.path,
                type_name = bean.target_type().name(),
                "cycle in validated graph"
            );
            return Err(EngineError::CycleDetected {
                path: self.path.clone(),
                type_name: bean.target_type().name(),
            });
        }

        self.ancestors.push(identity);
        let result = self.visit_bean(bean, depth);
        self.ancestors.pop();
        result
    }

    fn visit_bean(&mut self, bean: &dyn Validatable, depth: usize) -> Result<(), EngineError> {
        tracing::trace!(path = %self.path, type_name = bean.target_type().name(), "visiting value");

        if let Some(tag) = bean.type_tag() {
            self.dispatch(&tag, Some((bean.as_any(), bean.target_type())))?;
        }

        for site in bean.fields() {
            let mark = self.enter(site.name());
            let result = self.visit_field(&site, depth);
            self.path.truncate(mark);
            result?;
        }

        Ok(())
    }

    fn visit_field(&mut self, site: &FieldSite<'_>, depth: usize) -> Result<(), EngineError> {
        let value = site.value_ref();

        // nested values are walked whether or not the field itself is tagged
        if let SiteValue::Bean(nested) = value {
            self.walk_bean(nested, depth + 1)?;
        }

        match site.tag() {
            Some(tag) => self.dispatch(tag, value.observe()),
            None => Ok(()),
        }
    }

    fn dispatch(
        &mut self,
        tag: &ValidationTag,
        observed: Option<(&dyn Any, TargetType)>,
    ) -> Result<(), EngineError> {
        let outcome = match observed {
            Some((value, observed_type)) => resolve(tag, observed_type, &self.path)
                .and_then(|validator| validator.invoke(value, &self.path)),
            None => match self.config.absent_values {
                AbsentValuePolicy::Skip => {
                    tracing::trace!(path = %self.path, tag = tag.name(), "skipping absent value");
                    return Ok(());
                }
                AbsentValuePolicy::Reject => Err(EngineError::UnreadableValue {
                    path: self.path.clone(),
                    reason: format!("tag '{}' has no value to validate", tag.name()),
                }),
            },
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(error) => self.record(error),
        }
    }

    fn record(&mut self, error: EngineError) -> Result<(), EngineError> {
        tracing::debug!(path = %self.path, code = error.code(), %error, "validation failed");

        if self.mode == Mode::FailFast || error.is_fatal() {
            return Err(error);
        }
        self.report.add(Violation::from_error(self.path.clone(), &error));
        Ok(())
    }

    /// Append `name` to the current path, returning the length to restore
    fn enter(&mut self, name: &str) -> usize {
        let mark = self.path.len();
        if !name.starts_with('[') {
            self.path.push('.');
        }
        self.path.push_str(name);
        mark
    }
}
