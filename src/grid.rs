//! Month views padded out to whole weeks.

use crate::compare::is_before;
use crate::consts::DAYS_PER_WEEK;
use crate::{DateEngine, Result, Unit};

/// One row of a month view: seven consecutive days, week start first.
pub type Week<I> = Vec<I>;

/// Builds the week rows of the month containing `date`.
///
/// The first row starts on the week start on or before the 1st of the month
/// and the last row ends on the last day of the week containing the month's
/// final day, so leading and trailing days of the neighbouring months fill
/// partial weeks. Every row holds exactly seven days at the start of the day.
///
/// # Errors
/// Propagates `Error::OutOfRange` from the engine when the padded month runs
/// past the representable range.
pub fn week_array<E: DateEngine>(engine: &E, date: &E::Instant) -> Result<Vec<Week<E::Instant>>> {
    let start = engine.start_of(&engine.start_of(date, Unit::Month)?, Unit::Week)?;
    // Last instant of the final week; every day of that week is strictly before it.
    let end = engine.end_of(&engine.end_of(date, Unit::Month)?, Unit::Week)?;

    let mut weeks: Vec<Week<E::Instant>> = Vec::new();
    let mut current = start;
    let mut count = 0_usize;

    while is_before(engine, &current, &end, None) {
        let week = count / DAYS_PER_WEEK;
        if week == weeks.len() {
            weeks.push(Vec::with_capacity(DAYS_PER_WEEK));
        }
        let next = engine.add(&current, 1, Unit::Day)?;
        weeks[week].push(current);

        current = next;
        count += 1;
    }

    debug_assert!(weeks.iter().all(|week| week.len() == DAYS_PER_WEEK));
    log::trace!("built week grid of {} weeks", weeks.len());
    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChronoEngine;
    use crate::test_utils::{at, at_hms, flatten_dates};
    use chrono::{Datelike, Days, Months, NaiveDate, Timelike, Weekday};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_february_2024_sunday_start() {
        let engine = ChronoEngine::new();
        let weeks = week_array(&engine, &at(2024, 2, 14)).unwrap();

        assert_eq!(weeks.len(), 5);
        let days = flatten_dates(&weeks);
        assert_eq!(days.len(), 35);
        assert_eq!(days[0], ymd(2024, 1, 28));
        assert_eq!(days[34], ymd(2024, 3, 2));
        assert_eq!(days[0].weekday(), Weekday::Sun);
        assert_eq!(days[34].weekday(), Weekday::Sat);
    }

    #[test]
    fn test_week_row_counts() {
        struct TestCase {
            year:        i32,
            month:       u32,
            week_start:  Weekday,
            first:       NaiveDate,
            last:        NaiveDate,
            weeks:       usize,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                month:       9,
                week_start:  Weekday::Sun,
                first:       ymd(2024, 9, 1),
                last:        ymd(2024, 10, 5),
                weeks:       5,
                description: "month starts exactly on the week start",
            },
            TestCase {
                year:        2024,
                month:       4,
                week_start:  Weekday::Mon,
                first:       ymd(2024, 4, 1),
                last:        ymd(2024, 5, 5),
                weeks:       5,
                description: "month starts on Monday with Monday weeks",
            },
            TestCase {
                year:        2015,
                month:       2,
                week_start:  Weekday::Sun,
                first:       ymd(2015, 2, 1),
                last:        ymd(2015, 2, 28),
                weeks:       4,
                description: "February filling exactly four weeks",
            },
            TestCase {
                year:        2024,
                month:       3,
                week_start:  Weekday::Sun,
                first:       ymd(2024, 2, 25),
                last:        ymd(2024, 4, 6),
                weeks:       6,
                description: "six week month",
            },
            TestCase {
                year:        2024,
                month:       6,
                week_start:  Weekday::Mon,
                first:       ymd(2024, 5, 27),
                last:        ymd(2024, 6, 30),
                weeks:       5,
                description: "month ending on the last day of the week",
            },
        ];

        for case in &cases {
            let engine = ChronoEngine::new().with_week_start(case.week_start);
            let weeks = week_array(&engine, &at(case.year, case.month, 15)).unwrap();
            let days = flatten_dates(&weeks);

            assert_eq!(weeks.len(), case.weeks, "{}", case.description);
            assert_eq!(days.first(), Some(&case.first), "{}", case.description);
            assert_eq!(days.last(), Some(&case.last), "{}", case.description);
            assert_eq!(days[0].weekday(), case.week_start, "{}", case.description);
        }
    }

    #[test]
    fn test_days_are_midnight_and_reference_time_is_ignored() {
        let engine = ChronoEngine::new();
        let morning = week_array(&engine, &at_hms(2024, 7, 1, 0, 0, 0)).unwrap();
        let late = week_array(&engine, &at_hms(2024, 7, 31, 23, 59, 59)).unwrap();

        assert_eq!(flatten_dates(&morning), flatten_dates(&late));
        for day in late.iter().flatten() {
            assert_eq!(day.datetime().num_seconds_from_midnight(), 0);
        }
    }

    #[test]
    fn test_days_advance_by_one() {
        let engine = ChronoEngine::new();
        let days = flatten_dates(&week_array(&engine, &at(2023, 12, 25)).unwrap());
        for pair in days.windows(2) {
            assert_eq!(pair[0].checked_add_days(Days::new(1)), Some(pair[1]));
        }
    }

    #[test]
    fn test_reference_instant_is_untouched() {
        let engine = ChronoEngine::new();
        let reference = at_hms(2024, 2, 14, 9, 30, 0);
        let before = reference.datetime();
        week_array(&engine, &reference).unwrap();
        assert_eq!(reference.datetime(), before);
    }

    quickcheck::quickcheck! {
        fn prop_weeks_cover_month(year: u16, month: u8, monday: bool) -> quickcheck::TestResult {
            let month = u32::from(month % 12) + 1;
            let year = 1600 + i32::from(year % 1000);
            let week_start = if monday { Weekday::Mon } else { Weekday::Sun };
            let engine = ChronoEngine::new().with_week_start(week_start);

            let Ok(weeks) = week_array(&engine, &at(year, month, 1)) else {
                return quickcheck::TestResult::failed();
            };
            let days = flatten_dates(&weeks);
            let first_of_month = ymd(year, month, 1);
            let Some(last_of_month) = first_of_month
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
            else {
                return quickcheck::TestResult::discard();
            };

            let rows_full = weeks.iter().all(|week| week.len() == DAYS_PER_WEEK);
            let consecutive = days
                .windows(2)
                .all(|pair| pair[0].checked_add_days(Days::new(1)) == Some(pair[1]));
            let covers = days[0] <= first_of_month && last_of_month <= days[days.len() - 1];
            let tight = (4..=6).contains(&weeks.len())
                && days[0].weekday() == week_start
                && first_of_month.signed_duration_since(days[0]).num_days() < 7
                && days[days.len() - 1].signed_duration_since(last_of_month).num_days() < 7;

            quickcheck::TestResult::from_bool(rows_full && consecutive && covers && tight)
        }
    }
}
