//! Engine-agnostic date utilities for calendar pickers.
//!
//! UI components ask [`DateUtils`] for month grids, month and year ranges,
//! unit-aware comparisons and named formats, and never talk to a date
//! library directly. The library sits behind the [`DateEngine`] trait;
//! [`ChronoEngine`] is the bundled implementation.
//!
//! ```
//! use date_grid::{ChronoEngine, DateInput, DateUtils, FormatKey};
//!
//! let utils = DateUtils::builder(ChronoEngine::new()).build();
//! let date = utils.date(Some(DateInput::Text("2024-02-14"))).unwrap();
//!
//! let weeks = utils.get_week_array(&date).unwrap();
//! assert_eq!(weeks.len(), 5);
//! assert_eq!(utils.format(&weeks[0][0], FormatKey::KeyboardDate).unwrap(), "2024/01/28");
//! ```

pub mod compare;
mod consts;
mod engine;
mod formats;
pub mod grid;
mod prelude;
pub mod range;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use engine::{ChronoEngine, DateEngine, LocalizedDateTime};
pub use formats::{FormatKey, FormatOverrides, FormatTable, FormatTableBuilder, LOCALIZED_OVERLAY};
pub use types::{DateInput, Meridiem, Unit};
pub use utils::{DateUtils, DateUtilsBuilder};

/// Re-exported so callers can name locales and week starts without a direct
/// chrono dependency.
pub use chrono::{Locale, Weekday};

/// Errors reported by engines and propagated unchanged by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Construction from empty text.
    #[error("Empty date input")]
    EmptyInput,

    /// Input that does not describe an instant.
    #[error("Invalid date input: {0}")]
    InvalidInput(String),

    /// Pattern with an unknown or unterminated specifier.
    #[error("Invalid format pattern: {0:?}")]
    InvalidPattern(String),

    /// Text that does not match its pattern exactly.
    #[error("Text {text:?} does not match pattern {pattern:?}: {source}")]
    Parse {
        text:    String,
        pattern: String,
        source:  chrono::ParseError,
    },

    /// Text the parser accepted that does not read back unchanged, such as
    /// unpadded numbers or abbreviated month names.
    #[error("Text {text:?} does not match pattern {pattern:?} exactly, expected {rendered:?}")]
    Inexact {
        text:     String,
        pattern:  String,
        rendered: String,
    },

    /// Arithmetic or truncation past the representable range.
    #[error("Date out of range: {count} {unit}")]
    OutOfRange { unit: Unit, count: i64 },

    /// Field value that is not valid for its unit.
    #[error("Invalid value {value} for {unit}")]
    InvalidField { unit: Unit, value: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
