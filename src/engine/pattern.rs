use chrono::format::{Fixed, Item, Numeric, ParseResult, Parsed, StrftimeItems};

use crate::consts::{DEFAULT_PARSE_YEAR, JANUARY};
use crate::{Error, Result};

/// Which calendar components a strftime pattern mentions.
///
/// Strict parsing fills the components a pattern leaves out with fixed
/// defaults (1970, January, the 1st, midnight, AM) instead of the current
/// date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PatternFields {
    pub year:     bool,
    pub month:    bool,
    pub day:      bool,
    pub hour:     bool,
    pub minute:   bool,
    /// The hour is read on a 12 hour clock
    pub hour12:   bool,
    pub meridiem: bool,
}

impl PatternFields {
    /// Scans `pattern` and records the components it carries.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` if the pattern has an unknown or
    /// unterminated specifier.
    pub fn inspect(pattern: &str) -> Result<Self> {
        let mut fields = Self::default();
        for item in StrftimeItems::new(pattern) {
            match item {
                Item::Error => return Err(Error::InvalidPattern(pattern.to_owned())),
                Item::Numeric(numeric, _) => fields.record_numeric(&numeric),
                Item::Fixed(fixed) => fields.record_fixed(&fixed),
                _ => {}
            }
        }
        Ok(fields)
    }

    fn record_numeric(&mut self, numeric: &Numeric) {
        match numeric {
            Numeric::Year
            | Numeric::YearDiv100
            | Numeric::YearMod100
            | Numeric::IsoYear
            | Numeric::IsoYearDiv100
            | Numeric::IsoYearMod100 => self.year = true,
            Numeric::Month => self.month = true,
            Numeric::Day => self.day = true,
            // Ordinal and week-based dates resolve month and day together.
            Numeric::Ordinal
            | Numeric::WeekFromSun
            | Numeric::WeekFromMon
            | Numeric::IsoWeek => {
                self.month = true;
                self.day = true;
            }
            Numeric::Hour => self.hour = true,
            Numeric::Hour12 => {
                self.hour = true;
                self.hour12 = true;
            }
            Numeric::Minute => self.minute = true,
            Numeric::Timestamp => self.set_all(),
            _ => {}
        }
    }

    fn record_fixed(&mut self, fixed: &Fixed) {
        match fixed {
            Fixed::ShortMonthName | Fixed::LongMonthName => self.month = true,
            Fixed::LowerAmPm | Fixed::UpperAmPm => self.meridiem = true,
            Fixed::RFC2822 | Fixed::RFC3339 => self.set_all(),
            _ => {}
        }
    }

    fn set_all(&mut self) {
        *self = Self {
            year:     true,
            month:    true,
            day:      true,
            hour:     true,
            minute:   true,
            hour12:   false,
            meridiem: false,
        };
    }

    /// Fills every component the pattern did not mention.
    pub(crate) fn fill_defaults(self, parsed: &mut Parsed) -> ParseResult<()> {
        if !self.year {
            parsed.set_year(i64::from(DEFAULT_PARSE_YEAR))?;
        }
        if !self.month {
            parsed.set_month(i64::from(JANUARY))?;
        }
        if !self.day {
            parsed.set_day(1)?;
        }
        if !self.hour {
            parsed.set_hour(0)?;
        }
        if !self.minute {
            parsed.set_minute(0)?;
        }
        // A 12 hour field without a meridiem reads as a morning hour.
        if self.hour12 && !self.meridiem {
            parsed.set_ampm(false)?;
        }
        Ok(())
    }
}
