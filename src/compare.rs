//! Null-safe equality and unit-aware ordering over any [`DateEngine`].
//!
//! None of these functions fail: a "no value" is modelled as `None` and is
//! never equal to a real instant.

use std::cmp::Ordering;

use crate::{DateEngine, Unit};

/// True if `value` is the explicit "no value" marker.
pub const fn is_null<I>(value: Option<&I>) -> bool {
    value.is_none()
}

/// Two missing values are equal; a missing value never equals a real one.
/// Real instants are compared at full precision.
pub fn is_equal<E: DateEngine>(
    engine: &E,
    value: Option<&E::Instant>,
    comparing: Option<&E::Instant>,
) -> bool {
    match (value, comparing) {
        (None, None) => true,
        (Some(value), Some(comparing)) => engine.compare(value, comparing, None) == Ordering::Equal,
        _ => false,
    }
}

/// `date` is strictly before `value` when both are truncated to `unit`.
pub fn is_before<E: DateEngine>(
    engine: &E,
    date: &E::Instant,
    value: &E::Instant,
    unit: Option<Unit>,
) -> bool {
    engine.compare(date, value, unit) == Ordering::Less
}

/// `date` is strictly after `value` when both are truncated to `unit`.
pub fn is_after<E: DateEngine>(
    engine: &E,
    date: &E::Instant,
    value: &E::Instant,
    unit: Option<Unit>,
) -> bool {
    engine.compare(date, value, unit) == Ordering::Greater
}

/// Both instants fall in the same `unit` bucket.
pub fn is_same<E: DateEngine>(engine: &E, date: &E::Instant, comparing: &E::Instant, unit: Unit) -> bool {
    engine.compare(date, comparing, Some(unit)) == Ordering::Equal
}
