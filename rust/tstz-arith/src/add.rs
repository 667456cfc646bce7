//! `timestamp + interval`, `interval + timestamp` and `timestamp - interval`.
//!
//! Adding an interval moves the instant and never touches the zone key or the
//! picosecond fraction. Day-to-second intervals shift the epoch milliseconds
//! directly; year-to-month intervals advance the UTC calendar date, clamping
//! the day-of-month at the end of shorter months.

use tstz_calendar::{CalendarError, add_months};
use tstz_common::{Result, error::Error, result::checked};

use crate::codec::PackedTimestampTz;
use crate::interval::{IntervalDayToSecond, IntervalYearToMonth, SignedInterval};
use crate::timestamp::{LongTimestampTz, TimestampTz};

/// Applies an interval of kind `I` to a timestamp.
pub trait IntervalArithmetic<I: SignedInterval>: Sized {
    /// `self + interval`
    fn plus(&self, interval: I) -> Result<Self>;

    /// `self - interval`, defined as `self + (-interval)`.
    fn minus(&self, interval: I) -> Result<Self> {
        self.plus(interval.negate()?)
    }
}

impl IntervalArithmetic<IntervalDayToSecond> for PackedTimestampTz {
    fn plus(&self, interval: IntervalDayToSecond) -> Result<PackedTimestampTz> {
        let (epoch_millis, zone_key) = self.unpack();
        let epoch_millis = plus_millis(epoch_millis, interval)?;
        PackedTimestampTz::pack(epoch_millis, zone_key)
    }
}

impl IntervalArithmetic<IntervalDayToSecond> for LongTimestampTz {
    fn plus(&self, interval: IntervalDayToSecond) -> Result<LongTimestampTz> {
        let epoch_millis = plus_millis(self.epoch_millis(), interval)?;
        Ok(self.with_epoch_millis(epoch_millis))
    }
}

impl IntervalArithmetic<IntervalYearToMonth> for PackedTimestampTz {
    fn plus(&self, interval: IntervalYearToMonth) -> Result<PackedTimestampTz> {
        let (epoch_millis, zone_key) = self.unpack();
        let epoch_millis = plus_months(epoch_millis, interval)?;
        PackedTimestampTz::pack(epoch_millis, zone_key)
    }
}

impl IntervalArithmetic<IntervalYearToMonth> for LongTimestampTz {
    fn plus(&self, interval: IntervalYearToMonth) -> Result<LongTimestampTz> {
        let epoch_millis = plus_months(self.epoch_millis(), interval)?;
        Ok(self.with_epoch_millis(epoch_millis))
    }
}

impl<I> IntervalArithmetic<I> for TimestampTz
where
    I: SignedInterval,
    PackedTimestampTz: IntervalArithmetic<I>,
    LongTimestampTz: IntervalArithmetic<I>,
{
    fn plus(&self, interval: I) -> Result<TimestampTz> {
        match self {
            TimestampTz::Short(packed) => packed.plus(interval).map(TimestampTz::Short),
            TimestampTz::Long(long) => long.plus(interval).map(TimestampTz::Long),
        }
    }
}

impl IntervalDayToSecond {
    /// `interval + timestamp`, the same as `timestamp + interval`.
    ///
    /// # Examples
    /// ```rust
    /// # use tstz_arith::{IntervalArithmetic, IntervalDayToSecond, PackedTimestampTz, ZoneKey};
    /// let ts = PackedTimestampTz::pack(0, ZoneKey::UTC).unwrap();
    /// let hour = IntervalDayToSecond::from_millis(3_600_000);
    /// assert_eq!(hour.plus_timestamp(&ts).unwrap(), ts.plus(hour).unwrap());
    /// ```
    pub fn plus_timestamp<T: IntervalArithmetic<Self>>(self, timestamp: &T) -> Result<T> {
        timestamp.plus(self)
    }
}

impl IntervalYearToMonth {
    /// `interval + timestamp`, the same as `timestamp + interval`.
    pub fn plus_timestamp<T: IntervalArithmetic<Self>>(self, timestamp: &T) -> Result<T> {
        timestamp.plus(self)
    }
}

fn plus_millis(epoch_millis: i64, interval: IntervalDayToSecond) -> Result<i64> {
    checked(
        epoch_millis.checked_add(interval.millis()),
        "timestamp with time zone + interval day to second",
    )
}

fn plus_months(epoch_millis: i64, interval: IntervalYearToMonth) -> Result<i64> {
    add_months(epoch_millis, interval.months()).map_err(|e| match e {
        CalendarError::CalendarOverflow => {
            Error::arithmetic_overflow("timestamp with time zone + interval year to month")
        }
        CalendarError::InvalidArgument(desc) => Error::invalid_arg("interval", desc),
    })
}
