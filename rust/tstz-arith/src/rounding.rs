use crate::PICOSECONDS_PER_MILLISECOND;

/// Rounds a non-negative `value` to the nearest multiple of `factor`, with ties
/// rounding up.
///
/// `value + factor / 2` must not overflow; callers pass sub-millisecond fractions.
///
/// # Examples
/// ```rust
/// # use tstz_arith::rounding::round_to_nearest;
/// assert_eq!(round_to_nearest(499_999_999, 1_000_000_000), 0);
/// assert_eq!(round_to_nearest(500_000_000, 1_000_000_000), 1_000_000_000);
/// ```
#[inline]
pub fn round_to_nearest(value: i64, factor: i64) -> i64 {
    debug_assert!(value >= 0 && factor > 0);
    (value + factor / 2) / factor * factor
}

/// Returns `true` if a picosecond magnitude in `[0, 1ms)` rounds up to a whole
/// millisecond, which happens from 500,000,000 picoseconds on.
#[inline]
pub fn rounds_to_whole_millisecond(picos: i64) -> bool {
    round_to_nearest(picos, PICOSECONDS_PER_MILLISECOND) == PICOSECONDS_PER_MILLISECOND
}

/// Whole milliseconds (0 or 1) a picosecond-of-millisecond fraction rounds to.
#[inline]
pub(crate) fn round_picos_to_millis(picos_of_milli: u32) -> i64 {
    round_to_nearest(picos_of_milli as i64, PICOSECONDS_PER_MILLISECOND)
        / PICOSECONDS_PER_MILLISECOND
}
