use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tstz_common::{Result, result::checked, verify_arg};

use crate::PICOSECONDS_PER_MILLISECOND;
use crate::codec::{PackedTimestampTz, ZoneKey};
use crate::precision::Representation;
use crate::rounding::round_picos_to_millis;

/// The long form of `timestamp(p) with time zone`, used for `p > 3`.
///
/// `picos_of_milli` is the sub-millisecond remainder of the instant: it is never
/// negative and never reaches a whole millisecond. Instants before the epoch
/// keep a non-negative fraction, so `-0.25ms` is `epoch_millis = -1` with
/// `picos_of_milli = 750_000_000`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawLongTimestampTz")
)]
pub struct LongTimestampTz {
    epoch_millis: i64,
    picos_of_milli: u32,
    zone_key: ZoneKey,
}

impl LongTimestampTz {
    /// Creates a long-form timestamp, validating the picosecond fraction.
    ///
    /// # Examples
    /// ```rust
    /// # use tstz_arith::{LongTimestampTz, ZoneKey};
    /// let ts = LongTimestampTz::from_epoch_millis_and_fraction(1_000, 250_000_000, ZoneKey::UTC);
    /// assert!(ts.is_ok());
    ///
    /// let whole_milli = LongTimestampTz::from_epoch_millis_and_fraction(1_000, 1_000_000_000, ZoneKey::UTC);
    /// assert!(whole_milli.is_err());
    /// ```
    pub fn from_epoch_millis_and_fraction(
        epoch_millis: i64,
        picos_of_milli: u32,
        zone_key: ZoneKey,
    ) -> Result<LongTimestampTz> {
        verify_arg!(
            picos_of_milli,
            (picos_of_milli as i64) < PICOSECONDS_PER_MILLISECOND
        );
        Ok(LongTimestampTz {
            epoch_millis,
            picos_of_milli,
            zone_key,
        })
    }

    /// Widens a short-form value; the fraction is zero.
    pub fn from_short(packed: PackedTimestampTz) -> LongTimestampTz {
        let (epoch_millis, zone_key) = packed.unpack();
        LongTimestampTz {
            epoch_millis,
            picos_of_milli: 0,
            zone_key,
        }
    }

    /// Narrows to the short form, rounding the fraction half-up to the nearest
    /// millisecond.
    pub fn to_short_rounded(&self) -> Result<PackedTimestampTz> {
        let epoch_millis = checked(
            self.epoch_millis
                .checked_add(round_picos_to_millis(self.picos_of_milli)),
            "rounding timestamp to milliseconds",
        )?;
        PackedTimestampTz::pack(epoch_millis, self.zone_key)
    }

    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    pub const fn picos_of_milli(&self) -> u32 {
        self.picos_of_milli
    }

    pub const fn zone_key(&self) -> ZoneKey {
        self.zone_key
    }

    /// The same fraction and zone at a different millisecond.
    pub(crate) fn with_epoch_millis(&self, epoch_millis: i64) -> LongTimestampTz {
        LongTimestampTz {
            epoch_millis,
            ..*self
        }
    }

    /// Orders by the instant only; the zone key does not participate.
    pub fn instant_cmp(&self, other: &LongTimestampTz) -> Ordering {
        self.epoch_millis
            .cmp(&other.epoch_millis)
            .then(self.picos_of_milli.cmp(&other.picos_of_milli))
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawLongTimestampTz {
    epoch_millis: i64,
    picos_of_milli: u32,
    zone_key: ZoneKey,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLongTimestampTz> for LongTimestampTz {
    type Error = tstz_common::error::Error;

    fn try_from(raw: RawLongTimestampTz) -> Result<LongTimestampTz> {
        LongTimestampTz::from_epoch_millis_and_fraction(
            raw.epoch_millis,
            raw.picos_of_milli,
            raw.zone_key,
        )
    }
}

/// A `timestamp(p) with time zone` in whichever representation its precision
/// calls for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimestampTz {
    Short(PackedTimestampTz),
    Long(LongTimestampTz),
}

impl TimestampTz {
    pub fn representation(&self) -> Representation {
        match self {
            TimestampTz::Short(_) => Representation::Short,
            TimestampTz::Long(_) => Representation::Long,
        }
    }

    pub fn epoch_millis(&self) -> i64 {
        match self {
            TimestampTz::Short(packed) => packed.epoch_millis(),
            TimestampTz::Long(long) => long.epoch_millis(),
        }
    }

    /// The sub-millisecond fraction; always zero for the short form.
    pub fn picos_of_milli(&self) -> u32 {
        match self {
            TimestampTz::Short(_) => 0,
            TimestampTz::Long(long) => long.picos_of_milli(),
        }
    }

    pub fn zone_key(&self) -> ZoneKey {
        match self {
            TimestampTz::Short(packed) => packed.zone_key(),
            TimestampTz::Long(long) => long.zone_key(),
        }
    }

    /// Converts to `representation`, widening exactly or narrowing with rounding.
    pub fn to_representation(&self, representation: Representation) -> Result<TimestampTz> {
        match (self, representation) {
            (TimestampTz::Short(_), Representation::Short)
            | (TimestampTz::Long(_), Representation::Long) => Ok(*self),
            (TimestampTz::Short(packed), Representation::Long) => {
                Ok(TimestampTz::Long(LongTimestampTz::from_short(*packed)))
            }
            (TimestampTz::Long(long), Representation::Short) => {
                long.to_short_rounded().map(TimestampTz::Short)
            }
        }
    }
}

impl From<PackedTimestampTz> for TimestampTz {
    fn from(packed: PackedTimestampTz) -> TimestampTz {
        TimestampTz::Short(packed)
    }
}

impl From<LongTimestampTz> for TimestampTz {
    fn from(long: LongTimestampTz) -> TimestampTz {
        TimestampTz::Long(long)
    }
}
