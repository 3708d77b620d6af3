pub mod birthdays;
pub mod book;
pub mod contact;

use crate::errors::AppError;
pub use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub use birthdays::{DEFAULT_WINDOW_DAYS, UpcomingBirthday};
pub use book::ContactStore;
pub use contact::{Birthday, Phone, Record};
