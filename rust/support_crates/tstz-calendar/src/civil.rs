use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

use super::*;

/// Splits a UTC epoch instant into its calendar date and time of day.
///
/// Instants before 1970 keep a non-negative time of day: -1 is
/// 1969-12-31 at 23:59:59.999.
///
/// # Examples
/// ```rust
/// # use chrono::{Datelike, Timelike};
/// # use tstz_calendar::to_naive_utc;
/// let before_epoch = to_naive_utc(-1).unwrap();
/// assert_eq!((before_epoch.year(), before_epoch.month(), before_epoch.day()), (1969, 12, 31));
/// assert_eq!(before_epoch.nanosecond(), 999_000_000);
/// ```
pub fn to_naive_utc(epoch_millis: i64) -> CalendarResult<NaiveDateTime> {
    DateTime::from_timestamp_millis(epoch_millis)
        .map(|dt| dt.naive_utc())
        .ok_or(CalendarError::CalendarOverflow)
}

/// Joins a naive UTC date-time back into epoch milliseconds, dropping any
/// sub-millisecond remainder.
pub fn from_naive_utc(naive: NaiveDateTime) -> i64 {
    naive.and_utc().timestamp_millis()
}

/// Epoch milliseconds of `millis_of_day` after midnight UTC of the given date.
///
/// Years are astronomical: the year before 0001 is 0000.
pub fn utc_epoch_millis(
    year: i32,
    month: u32,
    day: u32,
    millis_of_day: i64,
) -> CalendarResult<i64> {
    if !(0..MILLIS_PER_DAY).contains(&millis_of_day) {
        return Err(CalendarError::InvalidArgument(format!(
            "millis_of_day={millis_of_day}"
        )));
    }
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CalendarError::InvalidArgument(format!("date={year:04}-{month:02}-{day:02}"))
    })?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or(CalendarError::CalendarOverflow)?;
    let naive = midnight
        .checked_add_signed(TimeDelta::milliseconds(millis_of_day))
        .ok_or(CalendarError::CalendarOverflow)?;
    Ok(from_naive_utc(naive))
}
