use std::cmp::Ordering;
use std::fmt::Write as _;

use chrono::format::{Parsed, StrftimeItems};
use chrono::{
    DateTime, Datelike, Days, Locale, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    Timelike, Weekday,
};

use super::{DateEngine, PatternFields};
use crate::consts::{DAYS_PER_WEEK, DECEMBER, JANUARY, MONTHS_PER_YEAR};
use crate::prelude::*;
use crate::{DateInput, Error, Result, Unit};

/// A wall-clock date and time tagged with the locale it renders with.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{datetime}")]
pub struct LocalizedDateTime {
    datetime: NaiveDateTime,
    locale:   Locale,
}

impl LocalizedDateTime {
    pub const fn new(datetime: NaiveDateTime, locale: Locale) -> Self {
        Self { datetime, locale }
    }

    /// Returns the wall-clock date and time
    pub const fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Returns the calendar date
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    /// Returns the locale tag
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    const fn with_datetime(self, datetime: NaiveDateTime) -> Self {
        Self { datetime, ..self }
    }
}

impl From<NaiveDateTime> for LocalizedDateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime, Locale::default())
    }
}

impl From<NaiveDate> for LocalizedDateTime {
    fn from(date: NaiveDate) -> Self {
        Self::from(date.and_time(NaiveTime::MIN))
    }
}

/// [`DateEngine`] backed by chrono's naive date and time types.
///
/// Instants are wall-clock values without a time zone. Locale data comes
/// from chrono's `unstable-locales` tables; the first day of the week is not
/// part of those tables and is configured here instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronoEngine {
    week_start: Weekday,
}

impl Default for ChronoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChronoEngine {
    /// Creates an engine whose weeks start on Sunday
    pub const fn new() -> Self {
        Self { week_start: Weekday::Sun }
    }

    /// Returns a copy of this engine whose weeks start on `week_start`
    pub const fn with_week_start(self, week_start: Weekday) -> Self {
        Self { week_start }
    }

    /// Returns the configured first day of the week
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Days between the start of the week and `weekday`, in `0..7`
    fn days_into_week(&self, weekday: Weekday) -> u32 {
        (weekday.num_days_from_monday() + 7 - self.week_start.num_days_from_monday()) % 7
    }

    fn from_text(text: &str) -> Result<NaiveDateTime> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput);
        }
        if let Ok(datetime) = trimmed.parse::<NaiveDateTime>() {
            return Ok(datetime);
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(datetime.naive_local());
        }
        trimmed
            .parse::<NaiveDate>()
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|_| Error::InvalidInput(text.to_owned()))
    }

    fn truncate(&self, datetime: NaiveDateTime, unit: Unit) -> Option<NaiveDateTime> {
        let date = datetime.date();
        match unit {
            Unit::Second => datetime.with_nanosecond(0),
            Unit::Minute => date.and_hms_opt(datetime.hour(), datetime.minute(), 0),
            Unit::Hour => date.and_hms_opt(datetime.hour(), 0, 0),
            Unit::Day => Some(date.and_time(NaiveTime::MIN)),
            Unit::Week => {
                let offset = u64::from(self.days_into_week(date.weekday()));
                date.checked_sub_days(Days::new(offset))
                    .map(|start| start.and_time(NaiveTime::MIN))
            }
            Unit::Month => date.with_day(1).map(|start| start.and_time(NaiveTime::MIN)),
            Unit::Year => date.with_ordinal(1).map(|start| start.and_time(NaiveTime::MIN)),
        }
    }

    fn shift(datetime: NaiveDateTime, count: i64, unit: Unit) -> Option<NaiveDateTime> {
        let delta = match unit {
            Unit::Second => TimeDelta::try_seconds(count),
            Unit::Minute => TimeDelta::try_minutes(count),
            Unit::Hour => TimeDelta::try_hours(count),
            Unit::Day => TimeDelta::try_days(count),
            Unit::Week => TimeDelta::try_weeks(count),
            Unit::Month => return Self::shift_months(datetime, count),
            Unit::Year => {
                let months = count.checked_mul(i64::try_from(MONTHS_PER_YEAR).ok()?)?;
                return Self::shift_months(datetime, months);
            }
        };
        datetime.checked_add_signed(delta?)
    }

    // Month arithmetic clamps to the last day of a shorter target month.
    fn shift_months(datetime: NaiveDateTime, count: i64) -> Option<NaiveDateTime> {
        let months = Months::new(u32::try_from(count.unsigned_abs()).ok()?);
        if count < 0 {
            datetime.checked_sub_months(months)
        } else {
            datetime.checked_add_months(months)
        }
    }

    fn with_month(datetime: NaiveDateTime, month: u32) -> Option<NaiveDateTime> {
        if !(JANUARY..=DECEMBER).contains(&month) {
            return None;
        }
        Self::shift_months(datetime, i64::from(month) - i64::from(datetime.month()))
    }

    fn with_year(datetime: NaiveDateTime, year: i64) -> Option<NaiveDateTime> {
        let years = year.checked_sub(i64::from(datetime.year()))?;
        Self::shift(datetime, years, Unit::Year)
    }

    /// Bucket index of `datetime` for `unit`; equal buckets mean the same unit.
    fn bucket(&self, datetime: &NaiveDateTime, unit: Unit) -> i64 {
        let days = i64::from(datetime.num_days_from_ce());
        let hours = days * 24 + i64::from(datetime.hour());
        let minutes = hours * 60 + i64::from(datetime.minute());
        match unit {
            Unit::Second => minutes * 60 + i64::from(datetime.second()),
            Unit::Minute => minutes,
            Unit::Hour => hours,
            Unit::Day => days,
            Unit::Week => days - i64::from(self.days_into_week(datetime.weekday())),
            Unit::Month => i64::from(datetime.year()) * 12 + i64::from(datetime.month0()),
            Unit::Year => i64::from(datetime.year()),
        }
    }
}

impl DateEngine for ChronoEngine {
    type Instant = LocalizedDateTime;
    type Locale = Locale;

    fn construct(&self, input: DateInput<'_>) -> Result<LocalizedDateTime> {
        let datetime = match input {
            DateInput::Text(text) => Self::from_text(text)?,
            DateInput::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .map(|datetime| datetime.naive_utc())
                .ok_or_else(|| Error::InvalidInput(millis.to_string()))?,
        };
        Ok(LocalizedDateTime::from(datetime))
    }

    fn parse_strict(&self, text: &str, pattern: &str) -> Result<LocalizedDateTime> {
        let fields = PatternFields::inspect(pattern)?;
        let parse_error = |source| Error::Parse {
            text: text.to_owned(),
            pattern: pattern.to_owned(),
            source,
        };

        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, text, StrftimeItems::new(pattern)).map_err(parse_error)?;
        fields.fill_defaults(&mut parsed).map_err(parse_error)?;

        let date = parsed.to_naive_date().map_err(parse_error)?;
        let time = parsed.to_naive_time().map_err(parse_error)?;
        let datetime = date.and_time(time);

        // chrono accepts unpadded numbers and stray spaces; only text that
        // reads back unchanged is an exact match.
        let mut rendered = String::new();
        write!(rendered, "{}", datetime.format(pattern))
            .map_err(|_| Error::InvalidPattern(pattern.to_owned()))?;
        if rendered != text {
            return Err(Error::Inexact {
                text: text.to_owned(),
                pattern: pattern.to_owned(),
                rendered,
            });
        }
        Ok(LocalizedDateTime::from(datetime))
    }

    fn add(&self, instant: &LocalizedDateTime, count: i64, unit: Unit) -> Result<LocalizedDateTime> {
        Self::shift(instant.datetime, count, unit)
            .map(|datetime| instant.with_datetime(datetime))
            .ok_or(Error::OutOfRange { unit, count })
    }

    fn start_of(&self, instant: &LocalizedDateTime, unit: Unit) -> Result<LocalizedDateTime> {
        self.truncate(instant.datetime, unit)
            .map(|datetime| instant.with_datetime(datetime))
            .ok_or(Error::OutOfRange { unit, count: 0 })
    }

    fn end_of(&self, instant: &LocalizedDateTime, unit: Unit) -> Result<LocalizedDateTime> {
        self.truncate(instant.datetime, unit)
            .and_then(|start| Self::shift(start, 1, unit))
            .and_then(|next| next.checked_sub_signed(TimeDelta::nanoseconds(1)))
            .map(|datetime| instant.with_datetime(datetime))
            .ok_or(Error::OutOfRange { unit, count: 1 })
    }

    fn get(&self, instant: &LocalizedDateTime, unit: Unit) -> i64 {
        let datetime = instant.datetime;
        match unit {
            Unit::Second => i64::from(datetime.second()),
            Unit::Minute => i64::from(datetime.minute()),
            Unit::Hour => i64::from(datetime.hour()),
            Unit::Day => i64::from(datetime.day()),
            Unit::Week => i64::from(datetime.iso_week().week()),
            Unit::Month => i64::from(datetime.month()),
            Unit::Year => i64::from(datetime.year()),
        }
    }

    fn set(&self, instant: &LocalizedDateTime, unit: Unit, value: i64) -> Result<LocalizedDateTime> {
        let invalid = || Error::InvalidField { unit, value };
        let datetime = instant.datetime;
        let field = u32::try_from(value).map_err(|_| invalid());

        let updated = match unit {
            Unit::Second => datetime.with_second(field?),
            Unit::Minute => datetime.with_minute(field?),
            Unit::Hour => datetime.with_hour(field?),
            Unit::Day => datetime.with_day(field?),
            Unit::Week => {
                let current = self.get(instant, Unit::Week);
                let weeks = value.checked_sub(current).ok_or_else(invalid)?;
                Self::shift(datetime, weeks, Unit::Week)
            }
            Unit::Month => Self::with_month(datetime, field?),
            Unit::Year => Self::with_year(datetime, value),
        };
        updated.map(|datetime| instant.with_datetime(datetime)).ok_or_else(invalid)
    }

    fn compare(&self, a: &LocalizedDateTime, b: &LocalizedDateTime, unit: Option<Unit>) -> Ordering {
        match unit {
            None => a.datetime.cmp(&b.datetime),
            Some(unit) => self.bucket(&a.datetime, unit).cmp(&self.bucket(&b.datetime, unit)),
        }
    }

    fn diff_millis(&self, a: &LocalizedDateTime, b: &LocalizedDateTime) -> i64 {
        a.datetime.signed_duration_since(b.datetime).num_milliseconds()
    }

    fn format(&self, instant: &LocalizedDateTime, pattern: &str) -> Result<String> {
        PatternFields::inspect(pattern)?;
        let mut rendered = String::new();
        write!(
            rendered,
            "{}",
            instant.datetime.and_utc().format_localized(pattern, instant.locale)
        )
        .map_err(|_| Error::InvalidPattern(pattern.to_owned()))?;
        Ok(rendered)
    }

    fn locale_of(&self, instant: &LocalizedDateTime) -> Locale {
        instant.locale
    }

    fn with_locale(&self, instant: &LocalizedDateTime, locale: &Locale) -> LocalizedDateTime {
        LocalizedDateTime { locale: *locale, ..*instant }
    }

    fn short_weekdays(&self, locale: &Locale, adjust_to_locale_start: bool) -> Vec<String> {
        let first = if adjust_to_locale_start { self.week_start } else { Weekday::Sun };
        let mut week: Vec<NaiveDate> = NaiveDate::default().iter_days().take(DAYS_PER_WEEK).collect();
        week.sort_by_key(|day| {
            (day.weekday().num_days_from_monday() + 7 - first.num_days_from_monday()) % 7
        });
        week.iter()
            .map(|day| day.format_localized("%a", *locale).to_string())
            .collect()
    }
}
