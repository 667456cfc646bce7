#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tstz_common::{Result, error::Error, verify_arg};

/// Finest supported fractional-second precision (picoseconds).
pub const MAX_PRECISION: u8 = 12;
/// Finest precision stored in the packed short form (milliseconds).
pub const MAX_SHORT_PRECISION: u8 = 3;
/// Fractional-second digits of an `interval day to second`.
pub const INTERVAL_DAY_TO_SECOND_PRECISION: u8 = 3;

/// Count of fractional-second digits of a `timestamp(p) with time zone`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Precision(u8);

impl Precision {
    pub const SECONDS: Precision = Precision(0);
    pub const MILLIS: Precision = Precision(3);
    pub const MICROS: Precision = Precision(6);
    pub const NANOS: Precision = Precision(9);
    pub const PICOS: Precision = Precision(MAX_PRECISION);

    pub fn new(digits: u8) -> Result<Precision> {
        verify_arg!(digits, digits <= MAX_PRECISION);
        Ok(Precision(digits))
    }

    pub const fn digits(self) -> u8 {
        self.0
    }

    /// The representation a value of this precision is stored in.
    pub const fn representation(self) -> Representation {
        if self.0 <= MAX_SHORT_PRECISION {
            Representation::Short
        } else {
            Representation::Long
        }
    }

    /// Result precision `u = max(3, p)` of adding or subtracting a day-to-second
    /// interval: the result keeps at least the interval's millisecond resolution.
    ///
    /// # Examples
    /// ```rust
    /// # use tstz_arith::Precision;
    /// assert_eq!(Precision::SECONDS.with_day_to_second(), Precision::MILLIS);
    /// assert_eq!(Precision::NANOS.with_day_to_second(), Precision::NANOS);
    /// ```
    pub fn with_day_to_second(self) -> Precision {
        Precision(self.0.max(INTERVAL_DAY_TO_SECOND_PRECISION))
    }

    /// Result precision of adding or subtracting a year-to-month interval.
    pub fn with_year_to_month(self) -> Precision {
        self
    }
}

impl TryFrom<u8> for Precision {
    type Error = Error;

    fn try_from(digits: u8) -> Result<Precision> {
        Precision::new(digits)
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> u8 {
        precision.0
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical layout of a `timestamp(p) with time zone` value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Representation {
    /// [`crate::PackedTimestampTz`]: epoch millis and zone key in one word.
    Short,
    /// [`crate::LongTimestampTz`]: epoch millis, picosecond fraction and zone key.
    Long,
}
