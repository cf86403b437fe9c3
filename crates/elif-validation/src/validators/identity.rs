//! Identifier validators

use uuid::Uuid;

use crate::error::ValidationError;
use crate::tag::{ValidationTag, Validator};

/// Rejects the nil UUID
#[derive(Debug, Default)]
pub struct NonNilUuid;

impl Validator for NonNilUuid {
    type Target = Uuid;

    fn validate(&self, input: &Uuid) -> Result<(), ValidationError> {
        if input.is_nil() {
            Err(ValidationError::with_code("identifier must not be nil", "nil_uuid"))
        } else {
            Ok(())
        }
    }
}

pub fn non_nil() -> ValidationTag {
    ValidationTag::new("non_nil").with::<NonNilUuid>()
}
