//! Semantic format names and the pattern table they resolve through.

use std::collections::HashMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAY_OF_MONTH, FULL_DATE, FULL_DATE_TIME_12H, FULL_DATE_TIME_24H, FULL_TIME_12H, FULL_TIME_24H,
    HOURS_12H, HOURS_24H, KEYBOARD_DATE, KEYBOARD_DATE_TIME_12H, KEYBOARD_DATE_TIME_24H,
    LOCALE_DATE, LOCALE_DATE_TIME, LOCALE_TIME, MINUTES, MONTH, MONTH_AND_DATE, MONTH_AND_YEAR,
    MONTH_SHORT, NORMAL_DATE, SECONDS, SHORT_DATE, YEAR,
};
use crate::prelude::*;

/// A fixed, semantic name for a display format.
///
/// Serialized in camelCase (`"fullDate"`, `"keyboardDateTime24h"`), so
/// overrides can be kept in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatKey {
    #[display(fmt = "fullDate")]
    FullDate,
    #[display(fmt = "normalDate")]
    NormalDate,
    #[display(fmt = "shortDate")]
    ShortDate,
    #[display(fmt = "monthAndDate")]
    MonthAndDate,
    #[display(fmt = "dayOfMonth")]
    DayOfMonth,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "monthShort")]
    MonthShort,
    #[display(fmt = "monthAndYear")]
    MonthAndYear,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "hours12h")]
    Hours12h,
    #[display(fmt = "hours24h")]
    Hours24h,
    #[display(fmt = "seconds")]
    Seconds,
    #[display(fmt = "fullTime12h")]
    FullTime12h,
    #[display(fmt = "fullTime24h")]
    FullTime24h,
    #[display(fmt = "fullDateTime12h")]
    FullDateTime12h,
    #[display(fmt = "fullDateTime24h")]
    FullDateTime24h,
    #[display(fmt = "keyboardDate")]
    KeyboardDate,
    #[display(fmt = "keyboardDateTime12h")]
    KeyboardDateTime12h,
    #[display(fmt = "keyboardDateTime24h")]
    KeyboardDateTime24h,
}

impl FormatKey {
    /// Number of format keys
    pub const COUNT: usize = 20;

    /// Every key, in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::FullDate,
        Self::NormalDate,
        Self::ShortDate,
        Self::MonthAndDate,
        Self::DayOfMonth,
        Self::Year,
        Self::Month,
        Self::MonthShort,
        Self::MonthAndYear,
        Self::Minutes,
        Self::Hours12h,
        Self::Hours24h,
        Self::Seconds,
        Self::FullTime12h,
        Self::FullTime24h,
        Self::FullDateTime12h,
        Self::FullDateTime24h,
        Self::KeyboardDate,
        Self::KeyboardDateTime12h,
        Self::KeyboardDateTime24h,
    ];

    /// Pattern of the explicit default preset
    pub const fn default_pattern(self) -> &'static str {
        match self {
            Self::FullDate => FULL_DATE,
            Self::NormalDate => NORMAL_DATE,
            Self::ShortDate => SHORT_DATE,
            Self::MonthAndDate => MONTH_AND_DATE,
            Self::DayOfMonth => DAY_OF_MONTH,
            Self::Year => YEAR,
            Self::Month => MONTH,
            Self::MonthShort => MONTH_SHORT,
            Self::MonthAndYear => MONTH_AND_YEAR,
            Self::Minutes => MINUTES,
            Self::Hours12h => HOURS_12H,
            Self::Hours24h => HOURS_24H,
            Self::Seconds => SECONDS,
            Self::FullTime12h => FULL_TIME_12H,
            Self::FullTime24h => FULL_TIME_24H,
            Self::FullDateTime12h => FULL_DATE_TIME_12H,
            Self::FullDateTime24h => FULL_DATE_TIME_24H,
            Self::KeyboardDate => KEYBOARD_DATE,
            Self::KeyboardDateTime12h => KEYBOARD_DATE_TIME_12H,
            Self::KeyboardDateTime24h => KEYBOARD_DATE_TIME_24H,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Patterns the localized preset swaps in for explicit digit patterns.
pub const LOCALIZED_OVERLAY: [(FormatKey, &str); 5] = [
    (FormatKey::FullTime12h, LOCALE_TIME),
    (FormatKey::FullTime24h, LOCALE_TIME),
    (FormatKey::KeyboardDate, LOCALE_DATE),
    (FormatKey::KeyboardDateTime12h, LOCALE_DATE_TIME),
    (FormatKey::KeyboardDateTime24h, LOCALE_DATE_TIME),
];

/// Caller supplied per-key patterns.
pub type FormatOverrides = HashMap<FormatKey, String>;

/// Read-only mapping from every [`FormatKey`] to a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTable {
    patterns: [String; FormatKey::COUNT],
}

impl Default for FormatTable {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FormatTable {
    /// Starts a table from the explicit default preset
    pub fn builder() -> FormatTableBuilder {
        FormatTableBuilder::default()
    }

    /// Returns the pattern for `key`
    pub fn get(&self, key: FormatKey) -> &str {
        &self.patterns[key.index()]
    }

    /// Iterates over every key and its pattern
    pub fn iter(&self) -> impl Iterator<Item = (FormatKey, &str)> {
        FormatKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

impl Index<FormatKey> for FormatTable {
    type Output = str;

    fn index(&self, key: FormatKey) -> &str {
        self.get(key)
    }
}

/// Builds a [`FormatTable`] from three ordered layers: the default preset,
/// the optional localized overlay, then explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct FormatTableBuilder {
    localized: bool,
    overrides: FormatOverrides,
}

impl FormatTableBuilder {
    /// Selects the localized preset
    pub fn localized(mut self, localized: bool) -> Self {
        self.localized = localized;
        self
    }

    /// Overrides a single key
    pub fn set(mut self, key: FormatKey, pattern: impl Into<String>) -> Self {
        self.overrides.insert(key, pattern.into());
        self
    }

    /// Overrides several keys; later entries win
    pub fn overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (FormatKey, S)>,
        S: Into<String>,
    {
        self.overrides
            .extend(overrides.into_iter().map(|(key, pattern)| (key, pattern.into())));
        self
    }

    pub fn build(self) -> FormatTable {
        let mut patterns = FormatKey::ALL.map(|key| key.default_pattern().to_owned());

        let overlay: &[(FormatKey, &str)] = if self.localized { &LOCALIZED_OVERLAY } else { &[] };
        let layers = overlay
            .iter()
            .copied()
            .chain(self.overrides.iter().map(|(key, pattern)| (*key, pattern.as_str())));

        for (key, pattern) in layers {
            pattern.clone_into(&mut patterns[key.index()]);
        }
        log::trace!("built format table (localized: {})", self.localized);

        FormatTable { patterns }
    }
}
