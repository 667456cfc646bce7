//! Packing of short-form timestamps into a single 64-bit word.
//!
//! The upper 52 bits hold the signed UTC epoch milliseconds, the lower 12 bits
//! hold the zone key: `epoch_millis << 12 | zone_key`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tstz_common::{Result, error::Error, verify_arg};

pub const MILLIS_SHIFT: u32 = 12;
pub const ZONE_KEY_MASK: i64 = 0xFFF;
pub const MAX_ZONE_KEY: u16 = 0xFFF;

/// Smallest epoch milliseconds value that survives packing.
pub const MIN_PACKED_MILLIS: i64 = i64::MIN >> MILLIS_SHIFT;
/// Largest epoch milliseconds value that survives packing.
pub const MAX_PACKED_MILLIS: i64 = i64::MAX >> MILLIS_SHIFT;

/// Opaque reference to an entry of the time zone table.
///
/// The arithmetic never interprets a zone key; it is carried through every
/// operation unchanged. Only keys that fit the 12 bits of the packed
/// representation can be constructed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub struct ZoneKey(u16);

impl ZoneKey {
    pub const UTC: ZoneKey = ZoneKey(0);

    pub fn new(key: u16) -> Result<ZoneKey> {
        verify_arg!(key, key <= MAX_ZONE_KEY);
        Ok(ZoneKey(key))
    }

    pub const fn key(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for ZoneKey {
    type Error = Error;

    fn try_from(key: u16) -> Result<ZoneKey> {
        ZoneKey::new(key)
    }
}

impl From<ZoneKey> for u16 {
    fn from(key: ZoneKey) -> u16 {
        key.0
    }
}

/// The short form of `timestamp(p) with time zone`, used for `p <= 3`.
///
/// Every 64-bit word is a valid packed value, so decoding never fails;
/// encoding fails only when the milliseconds do not fit in 52 bits.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PackedTimestampTz(i64);

impl PackedTimestampTz {
    /// Packs UTC epoch milliseconds and a zone key.
    ///
    /// # Returns
    /// * `Ok(PackedTimestampTz)` if `epoch_millis` is within
    ///   `MIN_PACKED_MILLIS..=MAX_PACKED_MILLIS`
    /// * `Err` with an arithmetic overflow otherwise
    ///
    /// # Examples
    /// ```rust
    /// # use tstz_arith::{PackedTimestampTz, ZoneKey};
    /// let zone = ZoneKey::new(1017).unwrap();
    /// let packed = PackedTimestampTz::pack(-1, zone).unwrap();
    /// assert_eq!(packed.unpack(), (-1, zone));
    /// ```
    pub fn pack(epoch_millis: i64, zone_key: ZoneKey) -> Result<PackedTimestampTz> {
        if !(MIN_PACKED_MILLIS..=MAX_PACKED_MILLIS).contains(&epoch_millis) {
            return Err(Error::arithmetic_overflow(format!(
                "packing {epoch_millis} epoch millis"
            )));
        }
        Ok(PackedTimestampTz(
            (epoch_millis << MILLIS_SHIFT) | zone_key.key() as i64,
        ))
    }

    pub const fn from_bits(bits: i64) -> PackedTimestampTz {
        PackedTimestampTz(bits)
    }

    pub const fn to_bits(self) -> i64 {
        self.0
    }

    pub fn unpack(self) -> (i64, ZoneKey) {
        (self.epoch_millis(), self.zone_key())
    }

    pub const fn epoch_millis(self) -> i64 {
        self.0 >> MILLIS_SHIFT
    }

    pub const fn zone_key(self) -> ZoneKey {
        ZoneKey((self.0 & ZONE_KEY_MASK) as u16)
    }
}

pub fn pack(epoch_millis: i64, zone_key: ZoneKey) -> Result<PackedTimestampTz> {
    PackedTimestampTz::pack(epoch_millis, zone_key)
}

pub fn unpack(packed: PackedTimestampTz) -> (i64, ZoneKey) {
    packed.unpack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_key_bounds() {
        assert_eq!(ZoneKey::new(0).unwrap(), ZoneKey::UTC);
        assert_eq!(ZoneKey::new(MAX_ZONE_KEY).unwrap().key(), 0xFFF);
        assert!(ZoneKey::new(MAX_ZONE_KEY + 1).is_err());
        assert!(ZoneKey::try_from(u16::MAX).is_err());
    }

    #[test]
    fn test_pack_layout() {
        let zone = ZoneKey::new(0x123).unwrap();
        let packed = pack(5, zone).unwrap();
        assert_eq!(packed.to_bits(), (5 << 12) | 0x123);

        let packed = pack(-1, ZoneKey::new(MAX_ZONE_KEY).unwrap()).unwrap();
        assert_eq!(packed.to_bits(), -1);
    }

    #[test]
    fn test_pack_unpack_inverse() {
        let millis = [
            MIN_PACKED_MILLIS,
            MIN_PACKED_MILLIS + 1,
            -86_400_000,
            -1,
            0,
            1,
            1_600_000_000_123,
            MAX_PACKED_MILLIS - 1,
            MAX_PACKED_MILLIS,
        ];
        for key in [0, 1, 7, 1017, 2233, MAX_ZONE_KEY] {
            let zone = ZoneKey::new(key).unwrap();
            for epoch_millis in millis {
                let packed = pack(epoch_millis, zone).unwrap();
                assert_eq!(unpack(packed), (epoch_millis, zone));
            }
        }
    }

    #[test]
    fn test_pack_rejects_out_of_range_millis() {
        let err = pack(MAX_PACKED_MILLIS + 1, ZoneKey::UTC).unwrap_err();
        assert!(err.is_overflow());
        let err = pack(MIN_PACKED_MILLIS - 1, ZoneKey::UTC).unwrap_err();
        assert!(err.is_overflow());
        assert!(pack(i64::MAX, ZoneKey::UTC).is_err());
    }

    #[test]
    fn test_unpack_is_total() {
        for bits in [i64::MIN, -1, 0, 1, i64::MAX] {
            let packed = PackedTimestampTz::from_bits(bits);
            let (epoch_millis, zone) = packed.unpack();
            assert!(zone.key() <= MAX_ZONE_KEY);
            assert_eq!(pack(epoch_millis, zone).unwrap(), packed);
        }
    }
}
