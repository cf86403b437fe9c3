//! Introspection traits exposing an object graph to the engine

use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::tag::{TargetType, ValidationTag};

/// A type whose fields and class-level metadata can be walked.
///
/// Usually implemented with `#[derive(Validatable)]`.
pub trait Validatable: Any {
    /// Class-level tag, validated against the whole value
    fn type_tag(&self) -> Option<ValidationTag> {
        None
    }

    /// Value sites in declaration order
    fn fields(&self) -> Vec<FieldSite<'_>>;

    /// The value as seen by validators
    fn as_any(&self) -> &dyn Any;

    /// Runtime type of the value returned by `as_any`
    fn target_type(&self) -> TargetType {
        TargetType::of::<Self>()
    }
}

/// What a site holds when the engine reads it
#[derive(Clone, Copy)]
pub enum SiteValue<'a> {
    /// A leaf value together with its exact type
    Value(&'a dyn Any, TargetType),
    /// A value with fields of its own
    Bean(&'a dyn Validatable),
    /// Nothing to read, e.g. `None`
    Absent,
}

impl<'a> SiteValue<'a> {
    /// The readable value and its runtime type
    pub fn observe(&self) -> Option<(&'a dyn Any, TargetType)> {
        match *self {
            SiteValue::Value(value, ty) => Some((value, ty)),
            SiteValue::Bean(bean) => Some((bean.as_any(), bean.target_type())),
            SiteValue::Absent => None,
        }
    }
}

impl std::fmt::Debug for SiteValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteValue::Value(_, ty) => write!(f, "Value({ty})"),
            SiteValue::Bean(bean) => write!(f, "Bean({})", bean.target_type()),
            SiteValue::Absent => f.write_str("Absent"),
        }
    }
}

/// A named field considered as a place that may carry validation metadata
#[derive(Debug, Clone)]
pub struct FieldSite<'a> {
    name: Cow<'static, str>,
    value: SiteValue<'a>,
    tag: Option<ValidationTag>,
}

impl<'a> FieldSite<'a> {
    /// Leaf field holding `value`
    pub fn value<T: Any>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Self {
        Self::new(name, SiteValue::Value(value, TargetType::of::<T>()))
    }

    /// Optional leaf field; `None` becomes an absent value
    pub fn optional<T: Any>(name: impl Into<Cow<'static, str>>, value: Option<&'a T>) -> Self {
        match value {
            Some(value) => Self::value(name, value),
            None => Self::new(name, SiteValue::Absent),
        }
    }

    /// Field whose value is walked recursively
    pub fn bean(name: impl Into<Cow<'static, str>>, value: &'a dyn Validatable) -> Self {
        Self::new(name, SiteValue::Bean(value))
    }

    /// Optional nested field; `None` becomes an absent value
    pub fn optional_bean(
        name: impl Into<Cow<'static, str>>,
        value: Option<&'a dyn Validatable>,
    ) -> Self {
        match value {
            Some(value) => Self::bean(name, value),
            None => Self::new(name, SiteValue::Absent),
        }
    }

    pub fn new(name: impl Into<Cow<'static, str>>, value: SiteValue<'a>) -> Self {
        Self {
            name: name.into(),
            value,
            tag: None,
        }
    }

    /// Attach a tag to this site
    pub fn tagged(mut self, tag: ValidationTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_ref(&self) -> SiteValue<'a> {
        self.value
    }

    pub fn tag(&self) -> Option<&ValidationTag> {
        self.tag.as_ref()
    }
}

macro_rules! impl_validatable_for_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Validatable + ?Sized> Validatable for $ptr<T> {
                fn type_tag(&self) -> Option<ValidationTag> {
                    (**self).type_tag()
                }

                fn fields(&self) -> Vec<FieldSite<'_>> {
                    (**self).fields()
                }

                fn as_any(&self) -> &dyn Any {
                    (**self).as_any()
                }

                fn target_type(&self) -> TargetType {
                    (**self).target_type()
                }
            }
        )*
    };
}

impl_validatable_for_pointer!(Box, Rc, Arc);

impl<T: Validatable> Validatable for Vec<T> {
    fn fields(&self) -> Vec<FieldSite<'_>> {
        self.iter()
            .enumerate()
            .map(|(index, item)| FieldSite::bean(format!("[{index}]"), item))
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        value: i32,
        label: Option<String>,
    }

    impl Validatable for Leaf {
        fn fields(&self) -> Vec<FieldSite<'_>> {
            vec![
                FieldSite::value("value", &self.value),
                FieldSite::optional("label", self.label.as_ref()),
            ]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_value_site_records_exact_type() {
        let leaf = Leaf { value: 3, label: None };
        let fields = leaf.fields();

        let (value, ty) = fields[0].value_ref().observe().unwrap();
        assert!(ty.is::<i32>());
        assert_eq!(value.downcast_ref::<i32>(), Some(&3));
        assert!(fields[1].value_ref().observe().is_none());
        assert!(fields[0].tag().is_none());
    }

    #[test]
    fn test_box_delegates_to_pointee() {
        let boxed: Box<Leaf> = Box::new(Leaf { value: 1, label: Some("a".into()) });
        assert!(boxed.target_type().is::<Leaf>());
        assert!(boxed.as_any().downcast_ref::<Leaf>().is_some());
        assert_eq!(boxed.fields().len(), 2);
    }

    #[test]
    fn test_vec_exposes_elements_as_nested_sites() {
        let items = vec![
            Leaf { value: 1, label: None },
            Leaf { value: 2, label: None },
        ];
        let fields = items.fields();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].name(), "[1]");
        assert!(matches!(fields[0].value_ref(), SiteValue::Bean(_)));
        assert!(items.type_tag().is_none());
    }
}
