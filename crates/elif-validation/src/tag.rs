//! Validator contract and the metadata attached to value sites

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{EngineError, ValidationResult};

/// Contract implemented by every concrete validator.
///
/// A validator targets exactly one type through `Target`; the engine builds a
/// fresh instance with `Default` for each invocation, so implementations should
/// not rely on state carried between calls.
pub trait Validator: Default + 'static {
    /// The exact type this validator accepts
    type Target: Any;

    /// Inspect `input`, returning an error when it does not pass
    fn validate(&self, input: &Self::Target) -> ValidationResult<()>;
}

/// Explicit record of a type, compared by `TypeId` only
#[derive(Debug, Clone, Copy)]
pub struct TargetType {
    id: TypeId,
    name: &'static str,
}

impl TargetType {
    /// Record the type `T`
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this record describes `T`
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TargetType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TargetType {}

impl Hash for TargetType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

type Invoker = fn(&dyn Any) -> Option<ValidationResult<()>>;

fn invoke<V: Validator>(value: &dyn Any) -> Option<ValidationResult<()>> {
    let target = value.downcast_ref::<V::Target>()?;
    Some(V::default().validate(target))
}

/// Identifier of a validator implementation inside a tag
#[derive(Clone, Copy)]
pub struct ValidatorRef {
    name: &'static str,
    target: TargetType,
    invoker: Invoker,
}

impl ValidatorRef {
    /// Identify validator `V`, recording its target type
    pub fn of<V: Validator>() -> Self {
        Self {
            name: std::any::type_name::<V>(),
            target: TargetType::of::<V::Target>(),
            invoker: invoke::<V>,
        }
    }

    /// Type name of the validator
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn target(&self) -> TargetType {
        self.target
    }

    /// Instantiate the validator and run it against `value`.
    ///
    /// Returns `None` when `value` is not of the target type.
    pub(crate) fn call(&self, value: &dyn Any) -> Option<ValidationResult<()>> {
        (self.invoker)(value)
    }
}

impl fmt::Debug for ValidatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRef")
            .field("name", &self.name)
            .field("target", &self.target.name)
            .finish()
    }
}

/// Metadata attached to a field or a type: the ordered candidate validators
#[derive(Debug, Clone)]
pub struct ValidationTag {
    name: String,
    candidates: Vec<ValidatorRef>,
}

impl ValidationTag {
    /// Create a tag with no candidates yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            candidates: Vec::new(),
        }
    }

    /// Append validator `V` to the candidates.
    ///
    /// Duplicated target types are accepted here and reported when a value
    /// of that type is resolved against the tag.
    pub fn with<V: Validator>(mut self) -> Self {
        self.candidates.push(ValidatorRef::of::<V>());
        self
    }

    /// Append an already built validator identifier
    pub fn with_ref(mut self, validator: ValidatorRef) -> Self {
        self.candidates.push(validator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidates in declaration order
    pub fn candidates(&self) -> &[ValidatorRef] {
        &self.candidates
    }

    /// Candidates whose target type is exactly `observed`
    pub fn matching(&self, observed: TargetType) -> impl Iterator<Item = &ValidatorRef> + '_ {
        self.candidates.iter().filter(move |c| c.target == observed)
    }
}

/// A validator selected for one observed value
#[derive(Debug, Clone, Copy)]
pub struct ResolvedValidator<'t> {
    tag: &'t ValidationTag,
    validator: ValidatorRef,
}

impl<'t> ResolvedValidator<'t> {
    pub(crate) fn new(tag: &'t ValidationTag, validator: ValidatorRef) -> Self {
        Self { tag, validator }
    }

    pub fn tag(&self) -> &'t ValidationTag {
        self.tag
    }

    pub fn validator(&self) -> ValidatorRef {
        self.validator
    }

    /// Build a fresh validator instance and run it on `value`.
    ///
    /// Validator failures are returned unchanged inside `EngineError::Validation`.
    pub fn invoke(&self, value: &dyn Any, path: &str) -> Result<(), EngineError> {
        match self.validator.call(value) {
            Some(result) => result.map_err(EngineError::Validation),
            None => Err(EngineError::NoValidatorForType {
                tag: self.tag.name.clone(),
                observed: self.validator.target,
                path: path.to_string(),
            }),
        }
    }
}
