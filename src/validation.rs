use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HolocronError, HolocronResult};

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9]+[._-])*[A-Za-z0-9]+@[A-Za-z0-9-]+(\.[A-Za-z]{2,})+$")
        .expect("valid email regex")
});

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> HolocronResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(HolocronError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Exactly ten ASCII digits.
pub fn is_phone_number(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `DD.MM.YYYY`. Single-digit days or months are rejected even though
/// chrono alone would accept them.
pub fn parse_birthday(value: &str) -> Option<NaiveDate> {
    if !BIRTHDAY_SHAPE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
