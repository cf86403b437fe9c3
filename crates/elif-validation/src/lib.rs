//! # elif-validation
//!
//! Metadata-driven validation for the elif framework.
//!
//! Types expose their fields through [`Validatable`] (usually via
//! `#[derive(Validatable)]`). Fields and types carry a [`ValidationTag`]
//! listing candidate [`Validator`]s; for each value the engine picks the one
//! candidate whose target type is exactly the value's type and runs it.
//!
//! ```ignore
//! use elif_validation::{run_validation_on_bean, Validatable};
//!
//! #[derive(Validatable)]
//! struct Signup {
//!     #[validate(tag = elif_validation::validators::email)]
//!     email: String,
//!     #[validate(tag = elif_validation::validators::positive)]
//!     age: u32,
//! }
//!
//! run_validation_on_bean(&signup)?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod tag;
pub mod traits;
pub mod validators;
mod walker;

#[doc(hidden)]
pub mod derive_support;

// Re-exports for easy access
pub use config::{AbsentValuePolicy, ConfigError, EngineConfig};
pub use engine::{run_validation_on_bean, ValidationEngine};
pub use error::{EngineError, ValidationError, ValidationReport, ValidationResult, Violation};
pub use resolver::resolve;
pub use tag::{ResolvedValidator, TargetType, ValidationTag, Validator, ValidatorRef};
pub use traits::{FieldSite, SiteValue, Validatable};
pub use walker::ROOT_PATH;

pub use elif_validation_derive::Validatable;
