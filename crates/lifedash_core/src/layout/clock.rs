//! Reference-time arithmetic.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Floor for days-from-now; keeps "due today" items off `log(0)`-adjacent
/// territory and gives past-due items the same placement as today.
pub const MIN_DAYS_FROM_NOW: f64 = 0.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days from `now` to the start of `date`, floored at
/// [`MIN_DAYS_FROM_NOW`].
pub fn days_from_now(date: NaiveDate, now: NaiveDateTime) -> f64 {
    let start_of_day = date.and_time(NaiveTime::default());
    let millis = (start_of_day - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).max(MIN_DAYS_FROM_NOW)
}

/// Whole-day offset of `date` relative to `today` (negative in the past).
pub fn day_offset(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}
