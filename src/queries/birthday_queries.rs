use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::queries::contact_queries;
use crate::store::ContactStore;

/// Longest window scanned: one full year, leap day included.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Contacts celebrating on one calendar day of the scan window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayBucket {
    pub date: NaiveDate,
    pub weekday_label: &'static str,
    pub names: Vec<String>,
}

/// Scans `days` consecutive days starting at `today` and groups contacts
/// whose birthday falls on each day, ignoring the birth year.
///
/// Buckets are ordered by date and only exist for days with at least one
/// match. A 29 February birthday only matches in leap years. `days` is capped
/// at [`MAX_WINDOW_DAYS`].
pub fn upcoming_birthdays(store: &ContactStore, today: NaiveDate, days: u32) -> Vec<BirthdayBucket> {
    let birthdays = contact_queries::with_birthday(store);
    let mut buckets = Vec::new();

    for offset in 0..days.min(MAX_WINDOW_DAYS) {
        let date = match today.checked_add_days(Days::new(u64::from(offset))) {
            Some(d) => d,
            None => break,
        };
        let names: Vec<String> = birthdays
            .iter()
            .filter(|(_, born)| born.day() == date.day() && born.month() == date.month())
            .map(|(name, _)| name.to_string())
            .collect();

        if !names.is_empty() {
            buckets.push(BirthdayBucket {
                date,
                weekday_label: weekday_label(date.weekday()),
                names,
            });
        }
    }

    buckets
}

/// English day name used in birthday listings. Saturday birthdays are
/// announced as Monday.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon | Weekday::Sat => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sun => "Sunday",
    }
}
