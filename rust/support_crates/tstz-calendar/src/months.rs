use chrono::Months;

use super::*;

/// Advances a UTC epoch instant by a signed number of calendar months.
///
/// The date moves by `months` and its day-of-month is clamped to the target
/// month's length. The time of day is carried over unchanged.
///
/// # Returns
/// * `Ok(i64)` with the advanced instant in epoch milliseconds
/// * `Err(CalendarError::CalendarOverflow)` if the instant or the result lies
///   outside the supported range, or `months` does not fit in 32 bits
///
/// # Examples
/// ```rust
/// # use tstz_calendar::{add_months, MILLIS_PER_DAY};
/// // 1970-01-31 + 1 month = 1970-02-28
/// let jan31 = 30 * MILLIS_PER_DAY;
/// assert_eq!(add_months(jan31, 1).unwrap(), (31 + 27) * MILLIS_PER_DAY);
/// ```
pub fn add_months(epoch_millis: i64, months: i64) -> CalendarResult<i64> {
    if months == 0 {
        return Ok(epoch_millis);
    }
    let start = to_naive_utc(epoch_millis)?;
    let delta = u32::try_from(months.unsigned_abs())
        .map(Months::new)
        .map_err(|_| CalendarError::CalendarOverflow)?;
    let shifted = if months > 0 {
        start.checked_add_months(delta)
    } else {
        start.checked_sub_months(delta)
    };
    shifted
        .map(from_naive_utc)
        .ok_or(CalendarError::CalendarOverflow)
}
