//! Site construction used by `#[derive(Validatable)]`. Not a stable API.
//!
//! The derive wraps each field in a probe and calls `.site(name)` on a
//! reference to it. Method resolution prefers the [`NestedSite`] impl, which
//! applies only when the field type implements [`Validatable`]; every other
//! field falls through to [`ValueSite`] on the extra reference and becomes a
//! plain value site.

use std::any::Any;

use crate::traits::{FieldSite, Validatable};

/// Probe over a field read by reference
pub struct FieldProbe<'a, T>(pub &'a T);

/// Probe over an `Option` field, already turned into `Option<&T>`
pub struct OptionProbe<'a, T>(pub Option<&'a T>);

pub trait NestedSite<'a> {
    fn site(&self, name: &'static str) -> FieldSite<'a>;
}

pub trait ValueSite<'a> {
    fn site(&self, name: &'static str) -> FieldSite<'a>;
}

impl<'a, T: Validatable> NestedSite<'a> for FieldProbe<'a, T> {
    fn site(&self, name: &'static str) -> FieldSite<'a> {
        FieldSite::bean(name, self.0)
    }
}

impl<'a, T: Any> ValueSite<'a> for &FieldProbe<'a, T> {
    fn site(&self, name: &'static str) -> FieldSite<'a> {
        FieldSite::value(name, self.0)
    }
}

impl<'a, T: Validatable> NestedSite<'a> for OptionProbe<'a, T> {
    fn site(&self, name: &'static str) -> FieldSite<'a> {
        FieldSite::optional_bean(name, self.0.map(|value| value as &dyn Validatable))
    }
}

impl<'a, T: Any> ValueSite<'a> for &OptionProbe<'a, T> {
    fn site(&self, name: &'static str) -> FieldSite<'a> {
        FieldSite::optional(name, self.0)
    }
}
