//! Shared helpers for unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::LocalizedDateTime;

pub fn naive(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .unwrap_or_else(|| panic!("invalid test datetime {year}-{month}-{day} {hour}:{minute}:{second}"))
}

pub fn at(year: i32, month: u32, day: u32) -> LocalizedDateTime {
    at_hms(year, month, day, 0, 0, 0)
}

pub fn at_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> LocalizedDateTime {
    LocalizedDateTime::from(naive(year, month, day, hour, minute, second))
}

pub fn flatten_dates(weeks: &[Vec<LocalizedDateTime>]) -> Vec<NaiveDate> {
    weeks.iter().flatten().map(LocalizedDateTime::date).collect()
}
