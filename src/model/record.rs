use std::collections::BTreeSet;
use std::fmt;

use super::fields::{Address, Birthday, Email, Name, Phone};
use crate::error::{HolocronError, HolocronResult};

/// One contact: a name, at least one phone, and optional address, birthday
/// and email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: BTreeSet<Phone>,
    address: Option<Address>,
    birthday: Option<Birthday>,
    email: Option<Email>,
}

impl Record {
    pub fn new(name: &str, phone: &str) -> HolocronResult<Self> {
        let name = Name::new(name)?;
        let phone = Phone::new(phone)?;
        Ok(Self::with_phone(name, phone))
    }

    pub(crate) fn with_phone(name: Name, phone: Phone) -> Self {
        Self {
            name,
            phones: BTreeSet::from([phone]),
            address: None,
            birthday: None,
            email: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    /// Phones in ascending order.
    pub fn phones(&self) -> impl Iterator<Item = &Phone> {
        self.phones.iter()
    }

    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_ref().map(Address::value)
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(Email::value)
    }

    pub fn add_phone(&mut self, phone: &str) -> HolocronResult<()> {
        self.phones.insert(Phone::new(phone)?);
        Ok(())
    }

    /// Replaces `old` with `new`. The new number is validated before the old
    /// one is looked up.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> HolocronResult<()> {
        let new = Phone::new(new)?;
        let old = self.find_phone(old)?.clone();
        self.phones.remove(&old);
        self.phones.insert(new);
        Ok(())
    }

    pub fn remove_phone(&mut self, phone: &str) -> HolocronResult<()> {
        let found = self.find_phone(phone)?.clone();
        if self.phones.len() == 1 {
            return Err(HolocronError::CannotRemoveLastPhone {
                name: self.name().to_string(),
            });
        }
        self.phones.remove(&found);
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> HolocronResult<&Phone> {
        self.phones
            .iter()
            .find(|p| p.value() == phone)
            .ok_or_else(|| HolocronError::not_found("Phone", phone))
    }

    pub fn add_address(&mut self, address: &str) -> HolocronResult<()> {
        self.address = Some(Address::new(address)?);
        Ok(())
    }

    /// Blank input leaves the current birthday untouched.
    pub fn add_birthday(&mut self, birthday: &str) -> HolocronResult<()> {
        if birthday.trim().is_empty() {
            return Ok(());
        }
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    pub fn add_email(&mut self, email: &str) -> HolocronResult<()> {
        self.email = Some(Email::new(email)?);
        Ok(())
    }

    pub(crate) fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub(crate) fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub(crate) fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    pub(crate) fn insert_phone(&mut self, phone: Phone) {
        self.phones.insert(phone);
    }

    /// Name, phones, address, birthday and email run together. Absent fields
    /// contribute nothing.
    pub fn search_text(&self) -> String {
        let mut text = self.name().to_string();
        for phone in &self.phones {
            text.push_str(phone.value());
        }
        text.push_str(self.address().unwrap_or_default());
        text.push_str(self.birthday.as_ref().map(Birthday::value).unwrap_or_default());
        text.push_str(self.email().unwrap_or_default());
        text
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::value).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join(","))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        if let Some(address) = &self.address {
            write!(f, ", address: {}", address)?;
        }
        if let Some(email) = &self.email {
            write!(f, ", email: {}", email)?;
        }
        Ok(())
    }
}
