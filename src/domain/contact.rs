use super::*;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Contact name must not be empty".to_string()
    }

    pub fn phone_req() -> String {
        "The phone number must contain 10 digits".to_string()
    }

    pub fn date_req() -> String {
        "Invalid date format. Use DD.MM.YYYY".to_string()
    }
}

/// A phone number made of exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(number: &str) -> Result<Self, AppError> {
        // `\d` would also accept non-ASCII digits
        let re = Regex::new(r"^[0-9]{10}$")?;
        if !re.is_match(number) {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }
        Ok(Self(number.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar birthday, written and parsed as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Birthday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Birthday)
            .map_err(|_| AppError::Validation(ValidationReq::date_req()))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// One person in the contact book. The name is the identity key and never changes
/// once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(
        default,
        serialize_with = "serialize_birthday",
        deserialize_with = "deserialize_birthday"
    )]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }

        Ok(Self {
            name: name.to_string(),
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, number: &str) -> Result<(), AppError> {
        let phone = Phone::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces the first phone equal to `old`. Returns `false` and leaves the
    /// record untouched when `old` is not one of its phones.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, AppError> {
        let new_phone = Phone::new(new)?;

        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                *phone = new_phone;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn delete_phone(&mut self, number: &str) -> Option<Phone> {
        let index = self.phones.iter().position(|p| p.as_str() == number)?;
        Some(self.phones.remove(index))
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    pub fn set_birthday(&mut self, date: &str) -> Result<(), AppError> {
        self.birthday = Some(date.parse()?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<&str>>()
            .join("; ");

        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "None".to_string());

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if name.trim().is_empty() {
        return Err(serde::de::Error::custom(ValidationReq::name_req()));
    }
    Ok(name)
}

fn serialize_birthday<S>(birthday: &Option<Birthday>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match birthday {
        Some(b) => serializer.serialize_some(&b.to_string()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_birthday<'de, D>(deserializer: D) -> Result<Option<Birthday>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt {
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
