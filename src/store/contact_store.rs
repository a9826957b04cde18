use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{HolocronError, HolocronResult};
use crate::model::{Address, Birthday, Email, Name, Phone, Record};
use crate::queries::birthday_queries::{self, BirthdayBucket};
use crate::queries::contact_queries;
use crate::validation::trim_optional;

pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Contacts keyed by exact (case-sensitive) name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    records: BTreeMap<String, Record>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record, or merges into the existing one with the same name.
    ///
    /// Every supplied value is validated before anything is written, so a bad
    /// email never leaves a half-applied merge behind. Blank optional values
    /// count as absent.
    pub fn add_record(
        &mut self,
        name: &str,
        phone: &str,
        address: Option<&str>,
        birthday: Option<&str>,
        email: Option<&str>,
    ) -> HolocronResult<&Record> {
        let name = Name::new(name)?;
        let phone = Phone::new(phone)?;
        let address = trim_optional(address)
            .map(|a| Address::new(&a))
            .transpose()?;
        let birthday = trim_optional(birthday)
            .map(|b| Birthday::new(&b))
            .transpose()?;
        let email = trim_optional(email).map(|e| Email::new(&e)).transpose()?;

        let record = match self.records.entry(name.value().to_string()) {
            Entry::Occupied(entry) => {
                let record = entry.into_mut();
                record.insert_phone(phone);
                record
            }
            Entry::Vacant(entry) => entry.insert(Record::with_phone(name, phone)),
        };
        if let Some(address) = address {
            record.set_address(address);
        }
        if let Some(birthday) = birthday {
            record.set_birthday(birthday);
        }
        if let Some(email) = email {
            record.set_email(email);
        }
        Ok(&*record)
    }

    /// Inserts a fully built record. Fails if the name is taken.
    pub fn insert(&mut self, record: Record) -> HolocronResult<()> {
        match self.records.entry(record.name().to_string()) {
            Entry::Occupied(entry) => Err(HolocronError::AlreadyExists {
                entity_type: "Contact".into(),
                identifier: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    pub fn find(&self, name: &str) -> HolocronResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| HolocronError::not_found("Contact", name))
    }

    pub fn find_mut(&mut self, name: &str) -> HolocronResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| HolocronError::not_found("Contact", name))
    }

    pub fn delete(&mut self, name: &str) -> HolocronResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| HolocronError::not_found("Contact", name))
    }

    pub fn count_records(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn find_by_criteria(&self, criteria: &str) -> Vec<String> {
        contact_queries::find_by_criteria(self, criteria)
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<BirthdayBucket> {
        birthday_queries::upcoming_birthdays(self, today, days)
    }

    pub fn birthdays_per_week(&self, today: NaiveDate) -> Vec<BirthdayBucket> {
        self.upcoming_birthdays(today, DEFAULT_BIRTHDAY_WINDOW)
    }
}
