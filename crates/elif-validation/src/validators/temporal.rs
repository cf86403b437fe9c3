//! Date and time validators

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ValidationError;
use crate::tag::{ValidationTag, Validator};

fn in_future(value: impl std::fmt::Display) -> ValidationError {
    ValidationError::with_code("value must not be in the future", "in_future")
        .context(serde_json::json!({ "value": value.to_string() }))
}

/// Rejects calendar dates after today (UTC)
#[derive(Debug, Default)]
pub struct NotInFutureDate;

impl Validator for NotInFutureDate {
    type Target = NaiveDate;

    fn validate(&self, input: &NaiveDate) -> Result<(), ValidationError> {
        if *input <= Utc::now().date_naive() {
            Ok(())
        } else {
            Err(in_future(input))
        }
    }
}

/// Rejects instants later than now
#[derive(Debug, Default)]
pub struct NotInFutureDateTime;

impl Validator for NotInFutureDateTime {
    type Target = DateTime<Utc>;

    fn validate(&self, input: &DateTime<Utc>) -> Result<(), ValidationError> {
        if *input <= Utc::now() {
            Ok(())
        } else {
            Err(in_future(input))
        }
    }
}

pub fn not_in_future() -> ValidationTag {
    ValidationTag::new("not_in_future")
        .with::<NotInFutureDate>()
        .with::<NotInFutureDateTime>()
}
