use crate::consts::{AM_TEXT, PM_TEXT};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A calendar granularity used for arithmetic, truncation and comparison.
///
/// Units are ordered from the finest (`Second`) to the coarsest (`Year`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "day")]
    Day,
    /// A locale week; where it starts is engine configuration
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Unit {
    /// All units, finest first
    pub const ALL: [Self; 7] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
    ];
}

/// Half of the day on a 12 hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meridiem {
    #[display(fmt = "am")]
    Am,
    #[display(fmt = "pm")]
    Pm,
}

impl Meridiem {
    /// Label shown next to 12 hour times
    pub const fn text(self) -> &'static str {
        match self {
            Self::Am => AM_TEXT,
            Self::Pm => PM_TEXT,
        }
    }
}

/// Engine-neutral input accepted when constructing an instant.
///
/// Construction never consults the current clock: every input names its
/// instant explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum DateInput<'a> {
    /// ISO 8601 / RFC 3339 text, e.g. `2024-02-01` or `2024-02-01T10:30:00`
    Text(&'a str),
    /// Milliseconds since the Unix epoch
    Millis(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_order_finest_first() {
        let mut sorted = Unit::ALL;
        sorted.sort();
        assert_eq!(sorted, Unit::ALL);
        assert!(Unit::Day < Unit::Week);
        assert!(Unit::Month < Unit::Year);
    }

    #[test]
    fn test_unit_display_and_serde() {
        assert_eq!(Unit::Week.to_string(), "week");
        let json = serde_json::to_string(&Unit::Month).unwrap();
        assert_eq!(json, r#""month""#);
        let parsed: Unit = serde_json::from_str(r#""hour""#).unwrap();
        assert_eq!(parsed, Unit::Hour);
    }

    #[test]
    fn test_meridiem() {
        assert_eq!(Meridiem::Pm.to_string(), "pm");
        assert_eq!(serde_json::to_string(&Meridiem::Am).unwrap(), r#""am""#);
        assert_eq!(Meridiem::Am.text(), "AM");
        assert_eq!(Meridiem::Pm.text(), "PM");
    }

    #[test]
    fn test_date_input_from() {
        assert_eq!(DateInput::from("2024-01-01"), DateInput::Text("2024-01-01"));
        assert_eq!(DateInput::from(0_i64), DateInput::Millis(0));
    }
}
