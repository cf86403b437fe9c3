//! Numeric validators

use crate::error::ValidationError;
use crate::tag::{ValidationTag, Validator};

fn not_positive(value: impl std::fmt::Display) -> ValidationError {
    ValidationError::with_code("value must be greater than zero", "not_positive")
        .context(serde_json::json!({ "value": value.to_string() }))
}

macro_rules! positive_validator {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Requires a `", stringify!($ty), "` greater than zero")]
            #[derive(Debug, Default)]
            pub struct $name;

            impl Validator for $name {
                type Target = $ty;

                fn validate(&self, input: &$ty) -> Result<(), ValidationError> {
                    if *input > 0 {
                        Ok(())
                    } else {
                        Err(not_positive(input))
                    }
                }
            }
        )*
    };
}

positive_validator!(
    PositiveI32 => i32,
    PositiveI64 => i64,
    PositiveU32 => u32,
    PositiveU64 => u64,
);

/// Requires a finite `f64` greater than zero
#[derive(Debug, Default)]
pub struct PositiveF64;

impl Validator for PositiveF64 {
    type Target = f64;

    fn validate(&self, input: &f64) -> Result<(), ValidationError> {
        if input.is_finite() && *input > 0.0 {
            Ok(())
        } else {
            Err(not_positive(input))
        }
    }
}

pub fn positive() -> ValidationTag {
    ValidationTag::new("positive")
        .with::<PositiveI32>()
        .with::<PositiveI64>()
        .with::<PositiveU32>()
        .with::<PositiveU64>()
        .with::<PositiveF64>()
}
