/// Days in a calendar week, and so the width of every row in a week grid
pub const DAYS_PER_WEEK: usize = 7;

/// Months in a calendar year, and so the length of every month array
pub const MONTHS_PER_YEAR: usize = 12;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Year used when a parsed pattern carries no year component
pub const DEFAULT_PARSE_YEAR: i32 = 1970;

// Default pattern set, chrono strftime syntax.
pub const FULL_DATE: &str = "%Y, %B %-d";
pub const NORMAL_DATE: &str = "%a, %b %-d";
pub const SHORT_DATE: &str = "%b %-d";
pub const MONTH_AND_DATE: &str = "%B %-d";
pub const DAY_OF_MONTH: &str = "%-d";
pub const YEAR: &str = "%Y";
pub const MONTH: &str = "%B";
pub const MONTH_SHORT: &str = "%b";
pub const MONTH_AND_YEAR: &str = "%B %Y";
pub const MINUTES: &str = "%M";
pub const HOURS_12H: &str = "%I";
pub const HOURS_24H: &str = "%H";
pub const SECONDS: &str = "%S";
pub const FULL_TIME_12H: &str = "%I:%M %p";
pub const FULL_TIME_24H: &str = "%H:%M";
pub const FULL_DATE_TIME_12H: &str = "%Y, %b %-d %I:%M %p";
pub const FULL_DATE_TIME_24H: &str = "%Y, %b %-d %H:%M";
pub const KEYBOARD_DATE: &str = "%Y/%m/%d";
pub const KEYBOARD_DATE_TIME_12H: &str = "%Y/%m/%d %I:%M %p";
pub const KEYBOARD_DATE_TIME_24H: &str = "%Y/%m/%d %H:%M";

// Locale-driven replacements used by the localized preset.
/// The locale's preferred time representation
pub const LOCALE_TIME: &str = "%X";
/// The locale's preferred date representation
pub const LOCALE_DATE: &str = "%x";
/// The locale's preferred date followed by its preferred time
pub const LOCALE_DATE_TIME: &str = "%x %X";

/// Meridiem label before noon
pub const AM_TEXT: &str = "AM";
/// Meridiem label from noon on
pub const PM_TEXT: &str = "PM";
