use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HolocronError, HolocronResult};
use crate::validation;

/// Contact name. Non-blank, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> HolocronResult<Self> {
        validation::non_blank(raw, "Name").map(Self)
    }

    pub fn is_valid(raw: &str) -> bool {
        !raw.trim().is_empty()
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Ten-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> HolocronResult<Self> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(HolocronError::InvalidPhone {
                value: raw.to_string(),
            })
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        validation::is_phone_number(raw)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Free-form postal address. Only blank input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> HolocronResult<Self> {
        validation::non_blank(raw, "Address").map(Self)
    }

    pub fn is_valid(raw: &str) -> bool {
        !raw.trim().is_empty()
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Birthday in `DD.MM.YYYY` form. Keeps the raw text alongside the parsed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(raw: &str) -> HolocronResult<Self> {
        validation::parse_birthday(raw)
            .map(|date| Self {
                raw: raw.to_string(),
                date,
            })
            .ok_or_else(|| HolocronError::InvalidBirthday {
                value: raw.to_string(),
            })
    }

    pub fn is_valid(raw: &str) -> bool {
        validation::parse_birthday(raw).is_some()
    }

    pub fn value(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> HolocronResult<Self> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(HolocronError::InvalidEmail {
                value: raw.to_string(),
            })
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        validation::is_email(raw)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field {
    ($($ty:ident),+) => {$(
        impl TryFrom<String> for $ty {
            type Error = HolocronError;

            fn try_from(raw: String) -> HolocronResult<Self> {
                Self::new(&raw)
            }
        }

        impl From<$ty> for String {
            fn from(field: $ty) -> String {
                field.value().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }
    )+};
}

string_field!(Name, Phone, Address, Birthday, Email);
