use elif_validation::{Validatable, ValidationError, ValidationTag, Validator};

#[derive(Default)]
struct RangeOrdered;

impl Validator for RangeOrdered {
    type Target = Range;

    fn validate(&self, input: &Range) -> Result<(), ValidationError> {
        if input.start <= input.end {
            Ok(())
        } else {
            Err(ValidationError::new("start must not exceed end"))
        }
    }
}

fn ordered() -> ValidationTag {
    ValidationTag::new("ordered").with::<RangeOrdered>()
}

#[derive(Validatable)]
#[validate(tag = ordered)]
struct Range {
    start: i64,
    end: i64,
}

#[derive(Validatable)]
#[validate(with(RangeOrdered))]
struct Unrelated {}

fn main() {
    let range = Range { start: 1, end: 2 };
    assert_eq!(range.type_tag().map(|t| t.name().to_string()), Some("ordered".to_string()));
    assert!(Unrelated {}.type_tag().is_some());
}
