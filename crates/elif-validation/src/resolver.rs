//! Exact-type resolution of a tag's candidates against an observed value

use crate::error::EngineError;
use crate::tag::{ResolvedValidator, TargetType, ValidationTag};

/// Select the single candidate of `tag` whose target type is exactly `observed`.
///
/// Subtype or conversion matches are never considered. Two candidates
/// declaring the same target type is a configuration defect and is reported
/// even if either validator would have passed.
pub fn resolve<'t>(
    tag: &'t ValidationTag,
    observed: TargetType,
    path: &str,
) -> Result<ResolvedValidator<'t>, EngineError> {
    let mut matching = tag.matching(observed);

    let Some(first) = matching.next() else {
        tracing::debug!(
            tag = tag.name(),
            observed = observed.name(),
            path,
            "no validator declared for observed type"
        );
        return Err(EngineError::NoValidatorForType {
            tag: tag.name().to_string(),
            observed,
            path: path.to_string(),
        });
    };

    let rest: Vec<_> = matching.collect();
    if !rest.is_empty() {
        let candidates: Vec<&'static str> = std::iter::once(first)
            .chain(rest)
            .map(|c| c.name())
            .collect();
        tracing::warn!(
            tag = tag.name(),
            observed = observed.name(),
            path,
            ?candidates,
            "ambiguous validators declared for one type"
        );
        return Err(EngineError::AmbiguousValidator {
            tag: tag.name().to_string(),
            observed,
            candidates,
            path: path.to_string(),
        });
    }

    tracing::debug!(
        tag = tag.name(),
        validator = first.name(),
        path,
        "resolved validator"
    );
    Ok(ResolvedValidator::new(tag, *first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::tag::Validator;

    #[derive(Default)]
    struct PassString;

    impl Validator for PassString {
        type Target = String;

        fn validate(&self, _input: &String) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FailString;

    impl Validator for FailString {
        type Target = String;

        fn validate(&self, _input: &String) -> Result<(), ValidationError> {
            Err(ValidationError::new("always fails"))
        }
    }

    #[derive(Default)]
    struct PassInt;

    impl Validator for PassInt {
        type Target = i32;

        fn validate(&self, _input: &i32) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_single_match_resolves() {
        let tag = ValidationTag::new("Mixed").with::<PassInt>().with::<FailString>();
        let resolved = resolve(&tag, TargetType::of::<String>(), "$.name").unwrap();

        assert!(resolved.validator().name().ends_with("FailString"));
        let err = resolved.invoke(&"x".to_string(), "$.name").unwrap_err();
        assert_eq!(err.to_string(), "always fails");
    }

    #[test]
    fn test_no_match_names_tag_and_type() {
        let tag = ValidationTag::new("OnlyInt").with::<PassInt>();
        let err = resolve(&tag, TargetType::of::<i64>(), "$.count").unwrap_err();

        match err {
            EngineError::NoValidatorForType { tag, observed, path } => {
                assert_eq!(tag, "OnlyInt");
                assert!(observed.is::<i64>());
                assert_eq!(path, "$.count");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_target_is_ambiguous_even_if_both_pass() {
        let tag = ValidationTag::new("Dup").with::<PassString>().with::<PassString>();
        let err = resolve(&tag, TargetType::of::<String>(), "$").unwrap_err();

        match err {
            EngineError::AmbiguousValidator { candidates, .. } => assert_eq!(candidates.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicates_for_other_types_do_not_matter() {
        let tag = ValidationTag::new("Dup")
            .with::<PassString>()
            .with::<FailString>()
            .with::<PassInt>();
        assert!(resolve(&tag, TargetType::of::<i32>(), "$").is_ok());
    }

    #[test]
    fn test_empty_tag_never_resolves() {
        let tag = ValidationTag::new("Empty");
        assert!(matches!(
            resolve(&tag, TargetType::of::<i32>(), "$"),
            Err(EngineError::NoValidatorForType { .. })
        ));
    }
}
