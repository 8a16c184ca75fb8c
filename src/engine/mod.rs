//! The primitive surface every date engine has to provide.
//!
//! Everything else in the crate (comparisons, grids, ranges, the format
//! table) is written against [`DateEngine`] and never touches a concrete
//! date library directly.

mod naive;
mod pattern;

pub use naive::{ChronoEngine, LocalizedDateTime};
pub(crate) use pattern::PatternFields;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::{DateInput, Result, Unit};

/// Calendar primitives delegated to an underlying date library.
///
/// Instants are values: every method that derives an instant returns a new
/// one and leaves its argument untouched.
pub trait DateEngine {
    /// A point in time plus the locale it renders with
    type Instant: Clone + Debug;
    /// Locale tag carried by instants
    type Locale: Clone + Debug + Default;

    /// Builds an instant from explicit input.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` for empty text and `Error::InvalidInput`
    /// when the input does not describe an instant.
    fn construct(&self, input: DateInput<'_>) -> Result<Self::Instant>;

    /// Parses `text` that must match `pattern` exactly.
    ///
    /// # Errors
    /// Returns `Error::Parse` when the text does not match the pattern,
    /// `Error::Inexact` when it matches only loosely and does not read back
    /// unchanged, and `Error::InvalidPattern` when the pattern itself is
    /// malformed.
    fn parse_strict(&self, text: &str, pattern: &str) -> Result<Self::Instant>;

    /// Adds `count` units; a negative count subtracts.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    fn add(&self, instant: &Self::Instant, count: i64, unit: Unit) -> Result<Self::Instant>;

    /// First instant of the unit containing `instant`.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    fn start_of(&self, instant: &Self::Instant, unit: Unit) -> Result<Self::Instant>;

    /// Last instant of the unit containing `instant`.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` when the result is not representable.
    fn end_of(&self, instant: &Self::Instant, unit: Unit) -> Result<Self::Instant>;

    /// Reads one field. Months and days are 1-based.
    fn get(&self, instant: &Self::Instant, unit: Unit) -> i64;

    /// Replaces one field.
    ///
    /// # Errors
    /// Returns `Error::InvalidField` when `value` is not valid for `unit`.
    fn set(&self, instant: &Self::Instant, unit: Unit, value: i64) -> Result<Self::Instant>;

    /// Orders two instants, truncated to `unit` when one is given.
    fn compare(&self, a: &Self::Instant, b: &Self::Instant, unit: Option<Unit>) -> Ordering;

    /// Milliseconds from `b` to `a`.
    fn diff_millis(&self, a: &Self::Instant, b: &Self::Instant) -> i64;

    /// Renders `instant` with its own locale.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` when the pattern cannot be rendered.
    fn format(&self, instant: &Self::Instant, pattern: &str) -> Result<String>;

    /// Locale tag carried by `instant`.
    fn locale_of(&self, instant: &Self::Instant) -> Self::Locale;

    /// A copy of `instant` tagged with `locale`.
    fn with_locale(&self, instant: &Self::Instant, locale: &Self::Locale) -> Self::Instant;

    /// Abbreviated weekday names for `locale`, Sunday first unless
    /// `adjust_to_locale_start` asks for the engine's week start.
    fn short_weekdays(&self, locale: &Self::Locale, adjust_to_locale_start: bool) -> Vec<String>;
}
