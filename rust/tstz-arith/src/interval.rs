//! SQL interval types.
//!
//! An `interval day to second` is a fixed duration in milliseconds. An
//! `interval year to month` is a count of calendar months whose length
//! depends on the instant it is applied to.

use num_traits::CheckedNeg;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tstz_common::{Result, result::checked};

/// An interval whose sign can be flipped, turning `timestamp - interval`
/// into `timestamp + (-interval)`.
pub trait SignedInterval: Copy {
    /// Returns the interval with the opposite sign, failing for the one value
    /// (`i64::MIN`) that has no positive counterpart.
    fn negate(self) -> Result<Self>;
}

/// `interval day to second`: a signed number of milliseconds.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct IntervalDayToSecond {
    millis: i64,
}

impl IntervalDayToSecond {
    pub const fn from_millis(millis: i64) -> IntervalDayToSecond {
        IntervalDayToSecond { millis }
    }

    pub const fn millis(&self) -> i64 {
        self.millis
    }
}

impl SignedInterval for IntervalDayToSecond {
    fn negate(self) -> Result<IntervalDayToSecond> {
        checked(self.checked_neg(), "negating interval day to second")
    }
}

/// `interval year to month`: a signed number of months.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct IntervalYearToMonth {
    months: i64,
}

impl IntervalYearToMonth {
    pub const fn from_months(months: i64) -> IntervalYearToMonth {
        IntervalYearToMonth { months }
    }

    pub const fn months(&self) -> i64 {
        self.months
    }
}

impl SignedInterval for IntervalYearToMonth {
    fn negate(self) -> Result<IntervalYearToMonth> {
        checked(self.checked_neg(), "negating interval year to month")
    }
}

impl CheckedNeg for IntervalDayToSecond {
    fn checked_neg(&self) -> Option<IntervalDayToSecond> {
        self.millis.checked_neg().map(IntervalDayToSecond::from_millis)
    }
}

impl CheckedNeg for IntervalYearToMonth {
    fn checked_neg(&self) -> Option<IntervalYearToMonth> {
        self.months.checked_neg().map(IntervalYearToMonth::from_months)
    }
}
