//! String validators

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::tag::{ValidationTag, Validator};

/// ASCII-only with TLD requirement (no consecutive dots)
const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9]([a-zA-Z0-9._%+-]*[a-zA-Z0-9])?@[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?\.[a-zA-Z]{2,}$";

fn email_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

fn check_not_blank(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        Err(ValidationError::with_code("value must not be blank", "blank"))
    } else {
        Ok(())
    }
}

/// Rejects empty or whitespace-only `String`s
#[derive(Debug, Default)]
pub struct NotBlank;

impl Validator for NotBlank {
    type Target = String;

    fn validate(&self, input: &String) -> Result<(), ValidationError> {
        check_not_blank(input)
    }
}

/// Rejects empty or whitespace-only string literals
#[derive(Debug, Default)]
pub struct NotBlankStr;

impl Validator for NotBlankStr {
    type Target = &'static str;

    fn validate(&self, input: &&'static str) -> Result<(), ValidationError> {
        check_not_blank(input)
    }
}

/// Checks email address format
#[derive(Debug, Default)]
pub struct Email;

impl Email {
    fn is_valid(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return false;
        }
        // RFC 5321 limits
        if local.len() > 64 || domain.len() > 255 {
            return false;
        }
        email_regex().is_some_and(|regex| regex.is_match(email))
    }
}

impl Validator for Email {
    type Target = String;

    fn validate(&self, input: &String) -> Result<(), ValidationError> {
        if Self::is_valid(input) {
            Ok(())
        } else {
            Err(ValidationError::with_code("value must be a valid email address", "invalid_email")
                .context(serde_json::json!({ "value": input })))
        }
    }
}

pub fn not_blank() -> ValidationTag {
    ValidationTag::new("not_blank")
        .with::<NotBlank>()
        .with::<NotBlankStr>()
}

pub fn email() -> ValidationTag {
    ValidationTag::new("email").with::<Email>()
}
