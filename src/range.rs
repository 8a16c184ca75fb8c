use crate::compare::is_before;
use crate::consts::MONTHS_PER_YEAR;
use crate::{DateEngine, Result, Unit};

/// The first day of every month of the year containing `date`, January first.
///
/// The month `date` falls in does not matter: the result always has twelve
/// entries.
///
/// # Errors
/// Propagates `Error::OutOfRange` from the engine.
pub fn month_array<E: DateEngine>(engine: &E, date: &E::Instant) -> Result<Vec<E::Instant>> {
    let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
    let mut current = engine.start_of(date, Unit::Year)?;

    while months.len() < MONTHS_PER_YEAR - 1 {
        let next = engine.add(&current, 1, Unit::Month)?;
        months.push(current);
        current = next;
    }
    months.push(current);

    Ok(months)
}

/// One instant per year, at the start of the year, from `start`'s year through
/// `end`'s year inclusive.
///
/// When `start` falls in a later year than `end` the range is empty; that is
/// a valid result, not an error.
///
/// # Errors
/// Propagates `Error::OutOfRange` from the engine.
pub fn year_range<E: DateEngine>(
    engine: &E,
    start: &E::Instant,
    end: &E::Instant,
) -> Result<Vec<E::Instant>> {
    let end = engine.end_of(end, Unit::Year)?;
    let mut years = Vec::new();
    let mut current = engine.start_of(start, Unit::Year)?;

    while is_before(engine, &current, &end, None) {
        let next = engine.add(&current, 1, Unit::Year)?;
        years.push(current);
        current = next;
    }

    log::trace!("built year range of {} years", years.len());
    Ok(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChronoEngine;
    use crate::test_utils::{at, at_hms, naive};
    use chrono::{Datelike, NaiveDateTime};

    #[test]
    fn test_month_array_for_july() {
        let engine = ChronoEngine::new();
        let months = month_array(&engine, &at_hms(2024, 7, 19, 15, 0, 0)).unwrap();

        let expected: Vec<NaiveDateTime> = (1..=12).map(|month| naive(2024, month, 1, 0, 0, 0)).collect();
        let got: Vec<NaiveDateTime> = months.iter().map(|month| month.datetime()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_month_array_independent_of_month() {
        let engine = ChronoEngine::new();
        let january = month_array(&engine, &at(2023, 1, 1)).unwrap();
        let december = month_array(&engine, &at_hms(2023, 12, 31, 23, 59, 59)).unwrap();

        assert_eq!(january.len(), 12);
        for (a, b) in january.iter().zip(&december) {
            assert_eq!(a.datetime(), b.datetime());
        }
    }

    #[test]
    fn test_month_array_starts_are_first_of_month() {
        let engine = ChronoEngine::new();
        // Starting from the 31st must not drift through short months.
        let months = month_array(&engine, &at(2024, 1, 31)).unwrap();
        assert!(months.iter().all(|month| month.date().day() == 1));
    }

    #[test]
    fn test_month_array_at_last_representable_year() {
        let engine = ChronoEngine::new();
        let last = crate::LocalizedDateTime::from(NaiveDateTime::MAX);
        let months = month_array(&engine, &last).unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[11].date().month(), 12);
    }

    #[test]
    fn test_year_range_cases() {
        struct TestCase {
            start:       (i32, u32, u32),
            end:         (i32, u32, u32),
            expected:    &'static [i32],
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (2020, 6, 15),
                end:         (2022, 3, 1),
                expected:    &[2020, 2021, 2022],
                description: "partial years at both ends",
            },
            TestCase {
                start:       (2024, 1, 1),
                end:         (2024, 12, 31),
                expected:    &[2024],
                description: "same year",
            },
            TestCase {
                start:       (2024, 12, 31),
                end:         (2024, 1, 1),
                expected:    &[2024],
                description: "same year, reversed days",
            },
            TestCase {
                start:       (2025, 1, 1),
                end:         (2024, 12, 31),
                expected:    &[],
                description: "start after end",
            },
        ];

        let engine = ChronoEngine::new();
        for case in &cases {
            let start = at(case.start.0, case.start.1, case.start.2);
            let end = at(case.end.0, case.end.1, case.end.2);
            let years = year_range(&engine, &start, &end).unwrap();

            let got: Vec<i32> = years.iter().map(|year| year.date().year()).collect();
            assert_eq!(got, case.expected, "{}", case.description);
            for year in &years {
                assert_eq!(year.datetime(), naive(year.date().year(), 1, 1, 0, 0, 0), "{}", case.description);
            }
        }
    }

    quickcheck::quickcheck! {
        fn prop_year_range_length(start: u16, span: u8) -> bool {
            let engine = ChronoEngine::new();
            let first = 1000 + i32::from(start % 3000);
            let last = first + i32::from(span % 50);
            let Ok(years) = year_range(&engine, &at(first, 7, 4), &at(last, 2, 9)) else {
                return false;
            };
            let Ok(reversed) = year_range(&engine, &at(last + 1, 1, 1), &at(first, 12, 31)) else {
                return false;
            };
            years.len() == usize::from(span % 50) + 1
                && years.windows(2).all(|pair| pair[1].date().year() == pair[0].date().year() + 1)
                && reversed.is_empty()
        }

        fn prop_month_array_steps_one_month(year: u16, month: u8) -> bool {
            let engine = ChronoEngine::new();
            let year = i32::from(year % 4000);
            let date = at(year, u32::from(month % 12) + 1, 1);
            let Ok(months) = month_array(&engine, &date) else {
                return false;
            };
            months.len() == 12
                && months[0].datetime() == naive(year, 1, 1, 0, 0, 0)
                && months
                    .iter()
                    .enumerate()
                    .all(|(i, month)| month.date().month0() as usize == i && month.date().year() == year)
        }
    }
}
