use std::fmt;

use super::*;
pub use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const BIRTHDAY_INPUT_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> Result<Self, AppError> {
        let number = number.into();

        // Exactly 10 ASCII digits, nothing else
        let re = Regex::new(r"^[0-9]{10}$")?;
        if !re.is_match(&number) {
            return Err(AppError::InvalidFormat(ValidationReq::phone_req()));
        }

        Ok(Self(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PhoneNumber::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a `DD.MM.YYYY` date. Impossible dates such as `31.02.2000` are rejected too.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let re = Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$")?;
        if !re.is_match(value) {
            return Err(AppError::InvalidFormat(ValidationReq::birthday_req()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_INPUT_FORMAT)
            .map(Birthday)
            .map_err(|_| AppError::InvalidFormat(ValidationReq::birthday_req()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<String> for Birthday {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Birthday::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_INPUT_FORMAT))
    }
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn phone_req() -> String {
        "Invalid phone number format. Must be 10 digits.".to_string()
    }

    pub fn birthday_req() -> String {
        "Invalid date format. Use DD.MM.YYYY".to_string()
    }
}

/// Outcome of [`Contact::add_birthday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayUpdate {
    Added,
    AlreadySet(Birthday),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    pub phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, number: &str) -> Result<(), AppError> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, number: &str) -> Result<PhoneNumber, AppError> {
        match self.phones.iter().position(|p| p.as_str() == number) {
            Some(index) => Ok(self.phones.remove(index)),
            None => Err(AppError::NotFound("Phone".to_string())),
        }
    }

    /// Overwrites every phone on the record with `new_number`, keeping the count.
    /// This is not a targeted single-number edit.
    pub fn edit_phone(&mut self, new_number: &str) -> Result<(), AppError> {
        let phone = PhoneNumber::new(new_number)?;
        for existing in self.phones.iter_mut() {
            *existing = phone.clone();
        }
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    pub fn add_birthday(&mut self, birthday: Birthday) -> BirthdayUpdate {
        match self.birthday {
            Some(existing) => BirthdayUpdate::AlreadySet(existing),
            None => {
                self.birthday = Some(birthday);
                BirthdayUpdate::Added
            }
        }
    }

    pub fn joined_phones(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<&str>>()
            .join(", ")
    }
}
