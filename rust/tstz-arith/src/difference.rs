//! `timestamp - timestamp`, producing an `interval day to second`.

use tstz_common::{Result, error::Error, result::checked};

use crate::codec::PackedTimestampTz;
use crate::interval::IntervalDayToSecond;
use crate::rounding::rounds_to_whole_millisecond;
use crate::timestamp::{LongTimestampTz, TimestampTz};

/// Subtracts one timestamp from another of the same representation.
pub trait TimestampDifference {
    /// `self - other`, in whole milliseconds.
    fn difference(&self, other: &Self) -> Result<IntervalDayToSecond>;
}

impl TimestampDifference for PackedTimestampTz {
    fn difference(&self, other: &PackedTimestampTz) -> Result<IntervalDayToSecond> {
        let millis = checked(
            self.epoch_millis().checked_sub(other.epoch_millis()),
            "timestamp with time zone - timestamp with time zone",
        )?;
        Ok(IntervalDayToSecond::from_millis(millis))
    }
}

impl TimestampDifference for LongTimestampTz {
    fn difference(&self, other: &LongTimestampTz) -> Result<IntervalDayToSecond> {
        let delta_picos = self.picos_of_milli() as i64 - other.picos_of_milli() as i64;
        let millis = self
            .epoch_millis()
            .checked_sub(other.epoch_millis())
            .and_then(|millis| millis.checked_add(fraction_adjustment(delta_picos)));
        let millis = checked(
            millis,
            "timestamp with time zone - timestamp with time zone",
        )?;
        Ok(IntervalDayToSecond::from_millis(millis))
    }
}

impl TimestampDifference for TimestampTz {
    fn difference(&self, other: &TimestampTz) -> Result<IntervalDayToSecond> {
        match (self, other) {
            (TimestampTz::Short(left), TimestampTz::Short(right)) => left.difference(right),
            (TimestampTz::Long(left), TimestampTz::Long(right)) => left.difference(right),
            (left, right) => {
                log::debug!(
                    "rejecting difference of {:?} and {:?} timestamps",
                    left.representation(),
                    right.representation()
                );
                Err(Error::invalid_operation(format!(
                    "difference of {:?} and {:?} timestamp representations",
                    left.representation(),
                    right.representation()
                )))
            }
        }
    }
}

/// Whole milliseconds to add to the millisecond difference of two long-form
/// timestamps whose fractions differ by `delta_picos`.
///
/// A difference of at least half a millisecond rounds away from zero: a
/// negative one borrows a millisecond, a positive one rounds up. Smaller
/// remainders are dropped.
///
/// # Examples
/// ```rust
/// # use tstz_arith::difference::fraction_adjustment;
/// assert_eq!(fraction_adjustment(500_000_000), 1);
/// assert_eq!(fraction_adjustment(-500_000_000), -1);
/// assert_eq!(fraction_adjustment(499_999_999), 0);
/// ```
pub fn fraction_adjustment(delta_picos: i64) -> i64 {
    if delta_picos < 0 && rounds_to_whole_millisecond(-delta_picos) {
        -1
    } else if delta_picos > 0 && rounds_to_whole_millisecond(delta_picos) {
        1
    } else {
        0
    }
}
