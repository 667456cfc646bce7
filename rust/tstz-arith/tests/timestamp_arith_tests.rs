use tstz_arith::codec::{MAX_PACKED_MILLIS, MAX_ZONE_KEY, MIN_PACKED_MILLIS};
use tstz_arith::{
    IntervalArithmetic, IntervalDayToSecond, IntervalYearToMonth, LongTimestampTz,
    PackedTimestampTz, TimestampDifference, TimestampTz, ZoneKey,
};
use tstz_calendar::{MILLIS_PER_DAY, utc_epoch_millis};

const ITERATIONS: usize = 10_000;

// About +/- 31,000 years around the epoch.
const MILLIS_RANGE: i64 = 1_000_000_000_000_000;

fn random_zone() -> ZoneKey {
    ZoneKey::new(fastrand::u16(0..=MAX_ZONE_KEY)).unwrap()
}

fn random_short() -> PackedTimestampTz {
    PackedTimestampTz::pack(fastrand::i64(-MILLIS_RANGE..=MILLIS_RANGE), random_zone()).unwrap()
}

fn random_long() -> LongTimestampTz {
    LongTimestampTz::from_epoch_millis_and_fraction(
        fastrand::i64(-MILLIS_RANGE..=MILLIS_RANGE),
        fastrand::u32(0..1_000_000_000),
        random_zone(),
    )
    .unwrap()
}

fn random_day_to_second() -> IntervalDayToSecond {
    IntervalDayToSecond::from_millis(fastrand::i64(-MILLIS_RANGE / 100..=MILLIS_RANGE / 100))
}

/// A UTC instant whose day-of-month survives any month shift without clamping.
fn random_millis_early_in_month() -> i64 {
    utc_epoch_millis(
        fastrand::i32(-5_000..=5_000),
        fastrand::u32(1..=12),
        fastrand::u32(1..=28),
        fastrand::i64(0..MILLIS_PER_DAY),
    )
    .unwrap()
}

#[test]
fn test_one_hour_after_epoch() {
    let ts = PackedTimestampTz::pack(0, ZoneKey::UTC).unwrap();
    let result = ts.plus(IntervalDayToSecond::from_millis(3_600_000)).unwrap();
    assert_eq!(result.unpack(), (3_600_000, ZoneKey::UTC));
    assert_eq!(result.to_bits(), 3_600_000 << 12);
}

#[test]
fn test_day_to_second_round_trip() {
    fastrand::seed(5_137_720);
    for _ in 0..ITERATIONS {
        let interval = random_day_to_second();

        let short = random_short();
        let back = short.plus(interval).unwrap().minus(interval).unwrap();
        assert_eq!(back, short);

        let long = random_long();
        let back = long.plus(interval).unwrap().minus(interval).unwrap();
        assert_eq!(back, long);
    }
}

#[test]
fn test_year_to_month_round_trip_without_clamping() {
    fastrand::seed(86_400_017);
    for _ in 0..ITERATIONS {
        let months = IntervalYearToMonth::from_months(fastrand::i64(-24_000..=24_000));
        let zone = random_zone();

        let short = PackedTimestampTz::pack(random_millis_early_in_month(), zone).unwrap();
        let back = short.plus(months).unwrap().minus(months).unwrap();
        assert_eq!(back, short);

        let long = LongTimestampTz::from_epoch_millis_and_fraction(
            random_millis_early_in_month(),
            fastrand::u32(0..1_000_000_000),
            zone,
        )
        .unwrap();
        let back = long.plus(months).unwrap().minus(months).unwrap();
        assert_eq!(back, long);
    }
}

#[test]
fn test_year_to_month_clamping_breaks_round_trip() {
    let millis = utc_epoch_millis(2021, 3, 31, 0).unwrap();
    let ts = PackedTimestampTz::pack(millis, ZoneKey::UTC).unwrap();
    let month = IntervalYearToMonth::from_months(1);

    let back = ts.minus(month).unwrap().plus(month).unwrap();
    let expected = utc_epoch_millis(2021, 3, 28, 0).unwrap();
    assert_eq!(back.epoch_millis(), expected);
}

#[test]
fn test_addition_commutes() {
    fastrand::seed(1_414_213);
    for _ in 0..ITERATIONS {
        let dts = random_day_to_second();
        let ytm = IntervalYearToMonth::from_months(fastrand::i64(-1_200..=1_200));

        let short = random_short();
        assert_eq!(dts.plus_timestamp(&short).unwrap(), short.plus(dts).unwrap());
        assert_eq!(ytm.plus_timestamp(&short).unwrap(), short.plus(ytm).unwrap());

        let long = TimestampTz::Long(random_long());
        assert_eq!(dts.plus_timestamp(&long).unwrap(), long.plus(dts).unwrap());
        assert_eq!(ytm.plus_timestamp(&long).unwrap(), long.plus(ytm).unwrap());
    }
}

#[test]
fn test_interval_arithmetic_preserves_zone_and_fraction() {
    fastrand::seed(2_718_281);
    for _ in 0..ITERATIONS {
        let long = random_long();
        let ytm = IntervalYearToMonth::from_months(fastrand::i64(-1_200..=1_200));
        let dts = random_day_to_second();

        for result in [long.plus(ytm).unwrap(), long.minus(dts).unwrap()] {
            assert_eq!(result.zone_key(), long.zone_key());
            assert_eq!(result.picos_of_milli(), long.picos_of_milli());
        }

        let short = random_short();
        assert_eq!(short.plus(ytm).unwrap().zone_key(), short.zone_key());
        assert_eq!(short.plus(dts).unwrap().zone_key(), short.zone_key());
    }
}

#[test]
fn test_difference_identities() {
    fastrand::seed(1_732_050);
    for _ in 0..ITERATIONS {
        let (a, b) = (random_short(), random_short());
        assert_eq!(a.difference(&a).unwrap().millis(), 0);
        assert_eq!(
            a.difference(&b).unwrap().millis(),
            -b.difference(&a).unwrap().millis()
        );
        assert_eq!(
            a.difference(&b).unwrap().millis(),
            a.epoch_millis() - b.epoch_millis()
        );

        let (a, b) = (random_long(), random_long());
        assert_eq!(a.difference(&a).unwrap().millis(), 0);
        assert_eq!(
            a.difference(&b).unwrap().millis(),
            -b.difference(&a).unwrap().millis()
        );
    }
}

#[test]
fn test_difference_inverts_addition() {
    fastrand::seed(6_180_339);
    for _ in 0..ITERATIONS {
        let interval = random_day_to_second();

        let short = random_short();
        let shifted = short.plus(interval).unwrap();
        assert_eq!(shifted.difference(&short).unwrap(), interval);

        let long = random_long();
        let shifted = long.plus(interval).unwrap();
        assert_eq!(shifted.difference(&long).unwrap(), interval);
    }
}

#[test]
fn test_long_difference_rounds_half_up() {
    let at = |millis, picos| {
        LongTimestampTz::from_epoch_millis_and_fraction(millis, picos, ZoneKey::UTC).unwrap()
    };
    let cases = [
        // (left, right, expected)
        ((0, 500_000_000), (0, 0), 1),
        ((0, 499_999_999), (0, 0), 0),
        ((0, 0), (0, 500_000_000), -1),
        ((0, 0), (0, 499_999_999), 0),
        ((1, 0), (0, 500_000_000), 0),
        ((1, 0), (0, 499_999_999), 1),
        ((-3, 750_000_000), (-5, 250_000_000), 3),
        ((-5, 250_000_000), (-3, 750_000_000), -3),
    ];
    for ((lm, lp), (rm, rp), expected) in cases {
        let diff = at(lm, lp).difference(&at(rm, rp)).unwrap().millis();
        assert_eq!(diff, expected, "({lm}, {lp}) - ({rm}, {rp})");
    }
}

#[test]
fn test_short_form_range_edges() {
    let zone = ZoneKey::new(MAX_ZONE_KEY).unwrap();
    let max = PackedTimestampTz::pack(MAX_PACKED_MILLIS, zone).unwrap();
    let min = PackedTimestampTz::pack(MIN_PACKED_MILLIS, zone).unwrap();
    let one = IntervalDayToSecond::from_millis(1);

    assert_eq!(max.minus(one).unwrap().epoch_millis(), MAX_PACKED_MILLIS - 1);
    assert!(max.plus(one).unwrap_err().is_overflow());
    assert!(min.minus(one).unwrap_err().is_overflow());
    assert_eq!(
        max.difference(&min).unwrap().millis(),
        MAX_PACKED_MILLIS - MIN_PACKED_MILLIS
    );
}

#[test]
fn test_mixed_representations() {
    let short = TimestampTz::Short(PackedTimestampTz::pack(0, ZoneKey::UTC).unwrap());
    let long = TimestampTz::Long(LongTimestampTz::from_short(
        PackedTimestampTz::pack(0, ZoneKey::UTC).unwrap(),
    ));
    let err = short.difference(&long).unwrap_err();
    assert!(!err.is_overflow());
    assert!(err.to_string().contains("invalid operation"));
}
