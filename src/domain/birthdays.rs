use super::*;
use super::contact::DATE_FORMAT;
use std::fmt;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Birthday occurrence moved off the weekend.
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'s birthday on {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

impl ContactStore {
    /// Contacts whose next birthday falls within `window_days` of `today`, in store
    /// order.
    ///
    /// The window test uses the real birthday. A Saturday or Sunday birthday is
    /// then reported on the following Monday, which may land past the window.
    pub fn upcoming_birthdays(&self, window_days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();

                let mut next = occurrence_in(birthday, today.year())?;
                if next < today {
                    next = occurrence_in(birthday, today.year() + 1)?;
                }

                let days_until = (next - today).num_days();
                if !(0..=window_days).contains(&days_until) {
                    return None;
                }

                if matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
                    next = find_next_weekday(next, Weekday::Mon);
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: next,
                })
            })
            .collect()
    }
}

// 29 February falls back to 28 February outside leap years.
fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Closest date strictly after `date` that falls on `weekday`.
pub fn find_next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(date.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date + Duration::days(days_ahead)
}
