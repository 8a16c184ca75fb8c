use crate::compare;
use crate::formats::{FormatKey, FormatOverrides, FormatTable, FormatTableBuilder};
use crate::grid::{self, Week};
use crate::range;
use crate::{DateEngine, DateInput, Meridiem, Result, Unit};

/// The calendar operations a date picker needs, bound to one engine, one
/// locale and one format table.
///
/// Configuration is fixed at construction and every method takes `&self`, so
/// a single `DateUtils` can be shared freely between threads when its engine
/// allows it. Instants passed in are never modified; formatting re-tags a
/// copy with the configured locale.
#[derive(Debug, Clone)]
pub struct DateUtils<E: DateEngine> {
    engine:  E,
    locale:  E::Locale,
    formats: FormatTable,
}

/// Builder for [`DateUtils`].
#[derive(Debug, Clone)]
pub struct DateUtilsBuilder<E: DateEngine> {
    engine:  E,
    locale:  E::Locale,
    formats: FormatTableBuilder,
}

impl<E: DateEngine> DateUtilsBuilder<E> {
    /// Locale every constructed or formatted instant is tagged with
    pub fn locale(mut self, locale: E::Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Swaps the explicit time and keyboard patterns for locale-driven ones
    pub fn localized_formats(mut self, localized: bool) -> Self {
        self.formats = self.formats.localized(localized);
        self
    }

    /// Overrides the pattern of one format key
    pub fn format(mut self, key: FormatKey, pattern: impl Into<String>) -> Self {
        self.formats = self.formats.set(key, pattern);
        self
    }

    /// Overrides the patterns of several format keys
    pub fn formats(mut self, overrides: FormatOverrides) -> Self {
        self.formats = self.formats.overrides(overrides);
        self
    }

    pub fn build(self) -> DateUtils<E> {
        DateUtils {
            engine:  self.engine,
            locale:  self.locale,
            formats: self.formats.build(),
        }
    }
}

impl<E: DateEngine + Default> Default for DateUtils<E> {
    fn default() -> Self {
        Self::builder(E::default()).build()
    }
}

impl<E: DateEngine> DateUtils<E> {
    /// Starts configuring utilities over `engine` with the engine's default
    /// locale and the explicit format preset.
    pub fn builder(engine: E) -> DateUtilsBuilder<E> {
        DateUtilsBuilder {
            engine,
            locale: E::Locale::default(),
            formats: FormatTable::builder(),
        }
    }

    pub const fn engine(&self) -> &E {
        &self.engine
    }

    pub const fn locale(&self) -> &E::Locale {
        &self.locale
    }

    pub const fn formats(&self) -> &FormatTable {
        &self.formats
    }

    fn localize(&self, instant: &E::Instant) -> E::Instant {
        self.engine.with_locale(instant, &self.locale)
    }

    // --- construction and validation ---

    /// Builds an instant tagged with the configured locale.
    ///
    /// No value in gives no value out; input the engine rejects also gives
    /// no value.
    pub fn date(&self, input: Option<DateInput<'_>>) -> Option<E::Instant> {
        let input = input?;
        match self.engine.construct(input) {
            Ok(instant) => Some(self.localize(&instant)),
            Err(err) => {
                log::debug!("rejected date input {input:?}: {err}");
                None
            }
        }
    }

    /// Strictly parses `text` against `pattern`.
    ///
    /// Empty text, and text that does not match the pattern exactly, give no
    /// value. Use [`try_parse`](Self::try_parse) to keep the reason.
    pub fn parse(&self, text: &str, pattern: &str) -> Option<E::Instant> {
        match self.try_parse(text, pattern) {
            Ok(instant) => instant,
            Err(err) => {
                log::debug!("{err}");
                None
            }
        }
    }

    /// Strictly parses `text` against `pattern`; empty text is `Ok(None)`.
    ///
    /// # Errors
    /// Returns `Error::Parse` or `Error::Inexact` when the text does not match
    /// and `Error::InvalidPattern` when the pattern is malformed.
    pub fn try_parse(&self, text: &str, pattern: &str) -> Result<Option<E::Instant>> {
        if text.is_empty() {
            return Ok(None);
        }
        let instant = self.engine.parse_strict(text, pattern)?;
        Ok(Some(self.localize(&instant)))
    }

    /// True if the engine accepts `input` as a real instant
    pub fn is_valid(&self, input: DateInput<'_>) -> bool {
        self.engine.construct(input).is_ok()
    }

    /// True only for the explicit "no value" marker
    pub const fn is_null(&self, date: Option<&E::Instant>) -> bool {
        compare::is_null(date)
    }

    // --- comparison ---

    pub fn is_equal(&self, value: Option<&E::Instant>, comparing: Option<&E::Instant>) -> bool {
        compare::is_equal(&self.engine, value, comparing)
    }

    /// Milliseconds from `comparing` to `date`
    pub fn get_diff(&self, date: &E::Instant, comparing: &E::Instant) -> i64 {
        self.engine.diff_millis(date, comparing)
    }

    pub fn is_after(&self, date: &E::Instant, value: &E::Instant) -> bool {
        compare::is_after(&self.engine, date, value, None)
    }

    pub fn is_before(&self, date: &E::Instant, value: &E::Instant) -> bool {
        compare::is_before(&self.engine, date, value, None)
    }

    /// `date` falls on a later calendar day than `value`
    pub fn is_after_day(&self, date: &E::Instant, value: &E::Instant) -> bool {
        compare::is_after(&self.engine, date, value, Some(Unit::Day))
    }

    /// `date` falls on an earlier calendar day than `value`
    pub fn is_before_day(&self, date: &E::Instant, value: &E::Instant) -> bool {
        compare::is_before(&self.engine, date, value, Some(Unit::Day))
    }

    pub fn is_after_year(&self, date: &E::Instant, value: &E::Instant) -> bool {
        compare::is_after(&self.engine, date, value, Some(Unit::Year))
    }

    pub fn is_before_year(&self, date: &E::Instant, value: &E::Instant) -> bool {
        compare::is_before(&self.engine, date, value, Some(Unit::Year))
    }

    pub fn is_same_day(&self, date: &E::Instant, comparing: &E::Instant) -> bool {
        compare::is_same(&self.engine, date, comparing, Unit::Day)
    }

    pub fn is_same_month(&self, date: &E::Instant, comparing: &E::Instant) -> bool {
        compare::is_same(&self.engine, date, comparing, Unit::Month)
    }

    pub fn is_same_year(&self, date: &E::Instant, comparing: &E::Instant) -> bool {
        compare::is_same(&self.engine, date, comparing, Unit::Year)
    }

    pub fn is_same_hour(&self, date: &E::Instant, comparing: &E::Instant) -> bool {
        compare::is_same(&self.engine, date, comparing, Unit::Hour)
    }

    // --- fields ---

    pub fn get_year(&self, date: &E::Instant) -> i64 {
        self.engine.get(date, Unit::Year)
    }

    /// # Errors
    /// Returns `Error::InvalidField` for years the engine cannot represent.
    pub fn set_year(&self, date: &E::Instant, year: i64) -> Result<E::Instant> {
        self.engine.set(date, Unit::Year, year)
    }

    /// Month number, January is 1
    pub fn get_month(&self, date: &E::Instant) -> i64 {
        self.engine.get(date, Unit::Month)
    }

    /// Moves to month `month` (January is 1) of the same year, clamping the
    /// day to the new month's length.
    ///
    /// # Errors
    /// Returns `Error::InvalidField` when `month` is outside `1..=12`.
    pub fn set_month(&self, date: &E::Instant, month: i64) -> Result<E::Instant> {
        self.engine.set(date, Unit::Month, month)
    }

    pub fn get_hours(&self, date: &E::Instant) -> i64 {
        self.engine.get(date, Unit::Hour)
    }

    /// # Errors
    /// Returns `Error::InvalidField` when `hours` is outside `0..24`.
    pub fn set_hours(&self, date: &E::Instant, hours: i64) -> Result<E::Instant> {
        self.engine.set(date, Unit::Hour, hours)
    }

    pub fn get_minutes(&self, date: &E::Instant) -> i64 {
        self.engine.get(date, Unit::Minute)
    }

    /// # Errors
    /// Returns `Error::InvalidField` when `minutes` is outside `0..60`.
    pub fn set_minutes(&self, date: &E::Instant, minutes: i64) -> Result<E::Instant> {
        self.engine.set(date, Unit::Minute, minutes)
    }

    pub fn get_seconds(&self, date: &E::Instant) -> i64 {
        self.engine.get(date, Unit::Second)
    }

    /// # Errors
    /// Returns `Error::InvalidField` when `seconds` is outside `0..60`.
    pub fn set_seconds(&self, date: &E::Instant, seconds: i64) -> Result<E::Instant> {
        self.engine.set(date, Unit::Second, seconds)
    }

    // --- arithmetic and normalization ---

    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    pub fn add_days(&self, date: &E::Instant, count: i64) -> Result<E::Instant> {
        self.engine.add(date, count, Unit::Day)
    }

    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    pub fn start_of_day(&self, date: &E::Instant) -> Result<E::Instant> {
        self.engine.start_of(date, Unit::Day)
    }

    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    pub fn end_of_day(&self, date: &E::Instant) -> Result<E::Instant> {
        self.engine.end_of(date, Unit::Day)
    }

    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    pub fn start_of_month(&self, date: &E::Instant) -> Result<E::Instant> {
        self.engine.start_of(date, Unit::Month)
    }

    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    pub fn end_of_month(&self, date: &E::Instant) -> Result<E::Instant> {
        self.engine.end_of(date, Unit::Month)
    }

    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    pub fn get_next_month(&self, date: &E::Instant) -> Result<E::Instant> {
        self.engine.add(date, 1, Unit::Month)
    }

    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    pub fn get_previous_month(&self, date: &E::Instant) -> Result<E::Instant> {
        self.engine.add(date, -1, Unit::Month)
    }

    /// `date` with its hour and then its minute taken from `time`; seconds
    /// and below are kept from `date`.
    ///
    /// # Errors
    /// Propagates `Error::InvalidField` from the engine.
    pub fn merge_date_and_time(&self, date: &E::Instant, time: &E::Instant) -> Result<E::Instant> {
        let with_hours = self.set_hours(date, self.get_hours(time))?;
        self.set_minutes(&with_hours, self.get_minutes(time))
    }

    // --- formatting ---

    /// Renders `date` with the pattern the table holds for `key`.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` when the configured pattern is malformed.
    pub fn format(&self, date: &E::Instant, key: FormatKey) -> Result<String> {
        self.format_by_string(date, self.formats.get(key))
    }

    /// Renders `date` with `pattern` in the configured locale. The locale tag
    /// of `date` itself is left as it was.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` when `pattern` is malformed.
    pub fn format_by_string(&self, date: &E::Instant, pattern: &str) -> Result<String> {
        self.engine.format(&self.localize(date), pattern)
    }

    /// Hook for numeral-system localization; returns its input unchanged
    pub const fn format_number<'a>(&self, number: &'a str) -> &'a str {
        number
    }

    pub const fn get_meridiem_text(&self, meridiem: Meridiem) -> &'static str {
        meridiem.text()
    }

    /// Abbreviated weekday names in the configured locale, starting with the
    /// engine's first day of the week.
    pub fn get_weekdays(&self) -> Vec<String> {
        self.engine.short_weekdays(&self.locale, true)
    }

    // --- generators ---

    /// Week rows covering the month of `date`. See [`grid::week_array`].
    ///
    /// # Errors
    /// Propagates `Error::OutOfRange` from the engine.
    pub fn get_week_array(&self, date: &E::Instant) -> Result<Vec<Week<E::Instant>>> {
        grid::week_array(&self.engine, date)
    }

    /// First days of the twelve months of `date`'s year. See
    /// [`range::month_array`].
    ///
    /// # Errors
    /// Propagates `Error::OutOfRange` from the engine.
    pub fn get_month_array(&self, date: &E::Instant) -> Result<Vec<E::Instant>> {
        range::month_array(&self.engine, date)
    }

    /// Starts of the years from `start` through `end`. See
    /// [`range::year_range`].
    ///
    /// # Errors
    /// Propagates `Error::OutOfRange` from the engine.
    pub fn get_year_range(&self, start: &E::Instant, end: &E::Instant) -> Result<Vec<E::Instant>> {
        range::year_range(&self.engine, start, end)
    }
}
