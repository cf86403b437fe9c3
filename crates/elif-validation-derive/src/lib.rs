//! # elif-validation-derive
//!
//! Derive macros for the elif-validation engine.
//!
//! - `#[derive(Validatable)]`: expose a struct's tagged and nested fields to the engine

use proc_macro::TokenStream;

mod validatable;

/// Implement `elif_validation::Validatable` for a struct with named fields.
///
/// Container attributes:
/// - `#[validate(with(A, B))]` validates the whole value with one of `A`, `B`
/// - `#[validate(tag = path::to::tag_fn)]` uses a tag built by a function
///
/// Field attributes accept `with(...)` and `tag = ...` as well as
/// `nested` (walk into the field's value) and `skip`.
#[proc_macro_derive(Validatable, attributes(validate))]
pub fn derive_validatable(input: TokenStream) -> TokenStream {
    validatable::derive_validatable_impl(input)
}
