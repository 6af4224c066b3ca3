use alloc::string::ToString;
use core::str::FromStr;

use crate::{
    builtins::core::Instant,
    error::ErrorKind,
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::{PartsOptions, RoundingMode, Unit},
    partial::PartialPeriod,
    primitive::FiniteF64,
    Sign,
};

use super::{Period, PeriodLike, PeriodSlots};

fn value(v: i32) -> Option<FiniteF64> {
    Some(FiniteF64::from(v))
}

fn period(text: &str) -> Period {
    Period::from_str(text).unwrap()
}

fn instant(year: i32, month: u8, day: u8, hour: u8) -> Instant {
    let date = IsoDate::try_new(year, month, day).unwrap();
    let time = IsoTime::try_new(hour, 0, 0, 0, 0, 0).unwrap();
    Instant::from_iso(IsoDateTime::try_new(date, time).unwrap()).unwrap()
}

// ==== Normalization ====

#[test]
fn components_are_normalized() {
    let result = Period::from_components(1.0, 25.0, 3.5, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(
        result.to_slots(),
        PeriodSlots {
            years: 3,
            months: 1,
            days: 4,
            hours: 18,
            ..Default::default()
        }
    );

    let again = Period::from_partial(PartialPeriod::from(result.to_slots())).unwrap();
    assert_eq!(again, result);
}

#[test]
fn zero_period() {
    let zero = Period::zero();
    assert_eq!(zero, Period::default());
    assert_eq!(zero.sign(), Sign::Zero);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.to_string(), "PT0S");

    let empty = Period::from_partial(PartialPeriod::default()).unwrap();
    assert!(empty.is_zero());
}

#[test]
fn of_ninety_minutes() {
    let result = Period::of(90.0, Unit::Minute).unwrap();
    assert_eq!(
        result.to_slots(),
        PeriodSlots {
            hours: 1,
            minutes: 30,
            ..Default::default()
        }
    );
}

#[test]
fn of_calendar_units() {
    assert_eq!(Period::of(1.5, Unit::Month).unwrap().months(), 2);
    assert_eq!(Period::of(-1.5, Unit::Month).unwrap().months(), -2);
    assert_eq!(Period::of(0.5, Unit::Year).unwrap().months(), 6);

    let quarters = Period::of(5.0, Unit::Quarter).unwrap();
    assert_eq!((quarters.years(), quarters.months()), (1, 3));
    assert_eq!(quarters.days(), 0);

    let weeks = Period::of(2.0, Unit::Week).unwrap();
    assert_eq!((weeks.years(), weeks.months(), weeks.days()), (0, 0, 14));
}

#[test]
fn seconds_and_nanoseconds() {
    let result = Period::from_seconds_and_nanos(1.0, 1_500_000_000.0).unwrap();
    assert_eq!((result.seconds(), result.milliseconds()), (2, 500));

    let result = Period::from_seconds_and_nanos(-1.0, 1.0).unwrap();
    assert_eq!(
        result.to_slots(),
        PeriodSlots {
            milliseconds: -999,
            microseconds: -999,
            nanoseconds: -999,
            ..Default::default()
        }
    );
}

#[test]
fn tier_independence() {
    let base = period("P1Y2M");
    let changed = base.with_days(-5.0).unwrap().with_hours(3.0).unwrap();
    assert_eq!((changed.years(), changed.months()), (1, 2));
    assert_eq!((changed.days(), changed.hours()), (-4, -21));

    let clock = period("PT5H");
    let changed = clock.add_unit(-30.0, Unit::Month).unwrap();
    assert_eq!((changed.years(), changed.months()), (-2, -6));
    assert_eq!(changed.hours(), 5);
}

#[test]
fn sign_of_fields() {
    assert_eq!(period("-PT1S").sign(), Sign::Negative);
    assert_eq!(period("P1D").sign(), Sign::Positive);

    let mixed = period("P1M-3D");
    assert_eq!(mixed.sign(), Sign::Negative);
    assert!(mixed.is_negative());
}

// ==== Setters and arithmetic ====

#[test]
fn with_setters() {
    let base = period("P1Y2M3DT4H");
    let result = base.with_months(14.0).unwrap();
    assert_eq!((result.years(), result.months()), (2, 2));
    assert_eq!((result.days(), result.hours()), (3, 4));

    let result = base.with_nanoseconds(1_500.0).unwrap();
    assert_eq!((result.microseconds(), result.nanoseconds()), (1, 500));

    let err = base.with_seconds(f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Amount);
    assert_eq!(err.message(), "The seconds must be a finite number");
}

#[test]
fn add_and_subtract() {
    let base = period("P1DT12H");
    assert_eq!(base.add("PT12H").unwrap(), period("P2D"));
    assert_eq!(base.add(period("P1M")).unwrap(), period("P1M1DT12H"));
    assert_eq!(
        base.subtract(core::time::Duration::from_secs(60)).unwrap(),
        period("P1DT11H59M")
    );
    assert_eq!(base.subtract_unit(2.0, Unit::Day).unwrap(), period("-PT12H"));
    assert_eq!(base.add_unit(1.0, Unit::Year).unwrap(), period("P1Y1DT12H"));
    assert_eq!(base.subtract(&base).unwrap(), Period::zero());
}

#[test]
fn multiply_and_negate() {
    let base = period("P1Y2M3DT4H");
    assert_eq!(base.multiply(-1.0).unwrap(), base.negated());
    assert_eq!(base.multiply(2.9).unwrap(), period("P2Y4M6DT8H"));
    assert_eq!(base.negated().negated(), base);

    let mixed = period("P1M-3D");
    assert_eq!(mixed.multiply(-1.0).unwrap(), mixed.negated());
    assert_eq!(mixed.negated().to_string(), "P-1M3D");
}

#[test]
fn invalid_multiplier() {
    let base = period("P1D");
    for multiplier in [0.5, -0.3, 0.0] {
        let err = base.multiply(multiplier).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Multiplier);
        assert_eq!(
            err.message(),
            "The multiplier must be greater or less than zero"
        );
    }
    for multiplier in [f64::NAN, f64::INFINITY] {
        let err = base.multiply(multiplier).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Multiplier);
        assert_eq!(err.message(), "The multiplier must be a finite number");
    }
}

#[test]
fn invalid_amounts() {
    let err = Period::of(f64::INFINITY, Unit::Day).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Amount);
    assert_eq!(err.message(), "The amount must be a finite number");

    let err =
        Period::from_components(0.0, 0.0, f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap_err();
    assert_eq!(err.message(), "The days must be a finite number");

    for text in ["", "garbage", "inf", "P1X"] {
        let err = Period::from_str(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Amount, "{text:?}");
        assert_eq!(err.message(), "The period must be a finite number");
    }
}

#[test]
fn out_of_range() {
    let err = Period::of(1e300, Unit::Year).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err =
        Period::from_components(0.0, 0.0, 1e20, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let big = Period::of(1e15, Unit::Second).unwrap();
    assert_eq!(big.multiply(1e10).unwrap_err().kind(), ErrorKind::Range);
}

// ==== Text ====

#[test]
fn canonical_string() {
    let result = period("P1Y2M10DT2H30M");
    assert_eq!(
        result.to_slots(),
        PeriodSlots {
            years: 1,
            months: 2,
            days: 10,
            hours: 2,
            minutes: 30,
            ..Default::default()
        }
    );
    assert_eq!(result.to_string(), "P1Y2M10DT2H30M");
}

#[test]
fn mixed_sign_strings() {
    let result = Period::from_components(0.0, 1.0, -3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(result.to_string(), "P1M-3D");
    assert_eq!(period("P1M-3D"), result);

    let result = Period::from_components(0.0, -1.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(result.to_string(), "P-1M3D");
    assert_eq!(period("P-1M3D"), result);

    let result = Period::from_components(0.0, -1.0, -3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(result.to_string(), "-P1M3D");

    let result = Period::from_components(0.0, 1.0, 0.0, 0.0, 0.0, -1.5, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(result.to_string(), "P1MT-1.5S");
    assert_eq!(period("P1MT-1.5S"), result);
}

#[test]
fn display_matches_default_projection() {
    for text in ["P1Y2M3DT4H5M6.007S", "P1M-3D", "-P2YT0.5S", "PT0S", "P-1MT1H"] {
        let result = period(text);
        assert_eq!(
            result.to_string(),
            result.as_period_string(PartsOptions::default()).unwrap()
        );
    }
}

#[test]
fn string_round_trip() {
    for text in [
        "P1Y",
        "-P2Y3M",
        "PT0.000000001S",
        "P3DT4H5M6.789S",
        "-PT1M",
        "P1Y-1D",
        "P-1YT1S",
        "P12DT23H59M59.999999999S",
    ] {
        let result = period(text);
        assert_eq!(result.to_string(), text);
        assert_eq!(period(&result.to_string()), result);
    }

    // Unbalanced input is written in canonical form.
    assert_eq!(period("PT90M").to_string(), "PT1H30M");
    assert_eq!(period("P2Q").to_string(), "P6M");
    assert_eq!(period("p1w").to_string(), "P7D");
}

#[test]
fn seconds_fallback() {
    let result = period(" 90.5 ");
    assert_eq!(
        (result.minutes(), result.seconds(), result.milliseconds()),
        (1, 30, 500)
    );
    assert_eq!(period("-2").to_string(), "-PT2S");
}

#[test]
fn zero_designators() {
    let zero = Period::zero();
    let with_smallest = |unit| PartsOptions::new().with_smallest_unit(unit);

    assert_eq!(zero.as_period_string(PartsOptions::default()).unwrap(), "PT0S");
    assert_eq!(
        zero.as_period_string(with_smallest(Unit::Millisecond)).unwrap(),
        "PT0S"
    );
    assert_eq!(
        zero.as_period_string(with_smallest(Unit::Minute)).unwrap(),
        "PT0M"
    );
    assert_eq!(zero.as_period_string(with_smallest(Unit::Hour)).unwrap(), "PT0H");
    assert_eq!(zero.as_period_string(with_smallest(Unit::Day)).unwrap(), "P0D");

    let half_hour = period("PT30M");
    assert_eq!(
        half_hour.as_period_string(with_smallest(Unit::Hour)).unwrap(),
        "PT0H"
    );
}

#[test]
fn projected_strings() {
    let base = period("P1Y5M17D");
    let options = PartsOptions::new().with_quarters(true).with_weeks(true);
    assert_eq!(base.as_period_string(options).unwrap(), "P1Y1Q2M2W3D");

    let options = PartsOptions::new().with_largest_unit(Unit::Month);
    assert_eq!(base.as_period_string(options).unwrap(), "P17M17D");

    let options = PartsOptions::new()
        .with_smallest_unit(Unit::Second)
        .with_rounding_mode(RoundingMode::HalfExpand);
    assert_eq!(
        period("PT1.5S").as_period_string(options).unwrap(),
        "PT2S"
    );
}

// ==== Projection ====

#[test]
fn default_parts() {
    let parts = period("P1Y5M17DT5H30M").to_parts(PartsOptions::default()).unwrap();
    assert_eq!(parts.years, value(1));
    assert_eq!(parts.quarters, None);
    assert_eq!(parts.months, value(5));
    assert_eq!(parts.weeks, None);
    assert_eq!(parts.days, value(17));
    assert_eq!(parts.hours, value(5));
    assert_eq!(parts.minutes, value(30));
    assert_eq!(parts.seconds, value(0));
    assert_eq!(parts.milliseconds, value(0));
    assert_eq!(parts.microseconds, value(0));
    assert_eq!(parts.nanoseconds, value(0));
}

#[test]
fn parts_with_options() {
    let base = period("P1Y5M17DT5H30M");

    let options = PartsOptions::new().with_quarters(true).with_weeks(true);
    let parts = base.to_parts(options).unwrap();
    assert_eq!(parts.years, value(1));
    assert_eq!(parts.quarters, value(1));
    assert_eq!(parts.months, value(2));
    assert_eq!(parts.weeks, value(2));
    assert_eq!(parts.days, value(3));

    let options = PartsOptions::new().with_largest_unit(Unit::Month);
    let parts = base.to_parts(options).unwrap();
    assert_eq!(parts.years, None);
    assert_eq!(parts.months, value(17));

    let options = PartsOptions::new().with_smallest_unit(Unit::Hour);
    let parts = base.to_parts(options).unwrap();
    assert_eq!(parts.hours, value(5));
    assert_eq!(parts.minutes, None);
    assert_eq!(parts.nanoseconds, None);

    let parts = base
        .to_parts(options.with_rounding_mode(RoundingMode::HalfExpand))
        .unwrap();
    assert_eq!(parts.hours, value(6));

    // Calendar units cannot subdivide the clock tier.
    let options = PartsOptions::new().with_smallest_unit(Unit::Month);
    let parts = base.to_parts(options).unwrap();
    assert_eq!(parts.days, value(17));
    assert_eq!(parts.hours, None);
}

#[test]
fn round_period() {
    let base = period("P1Y5M17DT5H30M");
    let options = PartsOptions::new()
        .with_smallest_unit(Unit::Hour)
        .with_rounding_mode(RoundingMode::HalfExpand);
    assert_eq!(base.round(options).unwrap(), period("P1Y5M17DT6H"));

    let options = PartsOptions::new().with_largest_unit(Unit::Month);
    assert_eq!(base.round(options).unwrap(), base);

    let options = PartsOptions::new()
        .with_smallest_unit(Unit::Hour)
        .with_rounding_mode(RoundingMode::HalfExpand);
    assert_eq!(period("PT23H59M").round(options).unwrap(), period("P1D"));

    let mixed = period("P1M-3D");
    assert_eq!(mixed.round(PartsOptions::default()).unwrap(), mixed);
}

// ==== Parse functions ====

#[test]
fn parse_entry_points() {
    let options = PartsOptions::default();

    let parts = Period::parse("P1Q2W", options).unwrap().unwrap();
    assert_eq!(parts.quarters, None);
    assert_eq!(parts.months, value(3));
    assert_eq!(parts.days, value(14));
    assert_eq!(Period::parse("nonsense", options).unwrap(), None);
    assert_eq!(Period::parse("90", options).unwrap(), None);

    assert!(Period::parse_units("P2Y3D", options).unwrap().is_some());
    assert_eq!(Period::parse_units("PT1.5S", options).unwrap(), None);

    let parts = Period::parse_time("PT1H30M", options).unwrap().unwrap();
    assert_eq!((parts.hours, parts.minutes), (value(1), value(30)));
    assert_eq!(Period::parse_time("P1D", options).unwrap(), None);

    let parts = Period::parse_duration("P2W3DT1.5S", PartsOptions::new().with_weeks(true))
        .unwrap()
        .unwrap();
    assert_eq!((parts.weeks, parts.days), (value(2), value(3)));
    assert_eq!((parts.seconds, parts.milliseconds), (value(1), value(500)));
    assert_eq!(Period::parse_duration("P1Y", options).unwrap(), None);

    let parts = Period::parse("-P1Y", PartsOptions::new().with_largest_unit(Unit::Month))
        .unwrap()
        .unwrap();
    assert_eq!(parts.months, value(-12));
}

// ==== Period-like values ====

#[test]
fn period_like_values() {
    let base = period("P1DT1H");
    assert_eq!(Period::from_period_like(base).unwrap(), base);
    assert_eq!(Period::from_period_like("P1DT1H").unwrap(), base);
    assert_eq!(
        Period::from_period_like(PeriodLike::Seconds(90_000.0)).unwrap(),
        base
    );

    let partial = PartialPeriod {
        hours: Some(FiniteF64(1.5)),
        ..Default::default()
    };
    let result = Period::from_period_like(partial).unwrap();
    assert_eq!((result.hours(), result.minutes()), (1, 30));

    let result = Period::from_period_like(core::time::Duration::from_millis(1_500)).unwrap();
    assert_eq!((result.seconds(), result.milliseconds()), (1, 500));

    let since_epoch = Instant::from_epoch_seconds(90_000).unwrap();
    assert_eq!(Period::from_period_like(since_epoch).unwrap(), base);

    let err = Period::from_period_like(f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Amount);
}

// ==== Calendar difference ====

#[test]
fn between_identity() {
    let a = instant(2023, 6, 15, 12);
    let result = Period::between(&a, &a).unwrap();
    assert!(result.is_zero());
    assert_eq!(result.sign(), Sign::Zero);
}

#[test]
fn between_antisymmetry() {
    let pairs = [
        (instant(2023, 1, 15, 0), instant(2023, 3, 20, 6)),
        (instant(2022, 11, 15, 0), instant(2023, 2, 10, 0)),
        (instant(2020, 2, 29, 23), instant(2021, 2, 28, 1)),
        (instant(1969, 12, 31, 0), instant(1970, 1, 1, 0)),
    ];
    for (a, b) in pairs {
        let forward = Period::between(&a, &b).unwrap();
        let backward = Period::between(&b, &a).unwrap();
        assert_eq!(forward.negated(), backward);
        assert!(!forward.is_negative());
        assert!(backward.is_negative());
    }
}

#[test]
fn between_borrows() {
    let result = Period::between(&instant(2022, 11, 15, 0), &instant(2023, 2, 10, 0)).unwrap();
    assert_eq!(result.to_string(), "P2M26D");

    let result = Period::between(&instant(2023, 1, 15, 18), &instant(2023, 1, 16, 6)).unwrap();
    assert_eq!(result.to_string(), "PT12H");

    let later = Instant::from_epoch_seconds(1_704_067_200).unwrap();
    let earlier = Instant::try_new(later.epoch_nanoseconds() - 1).unwrap();
    assert_eq!(Period::between(&earlier, &later).unwrap().to_string(), "PT0.000000001S");
}

#[test]
fn between_end_of_month() {
    // January 31st does not exist in February, so the day borrow takes
    // February's length and carries the shortfall into the day count. This
    // gives one month and one day rather than zero months and twenty-nine
    // days, the result of the field by field borrow in `between`.
    for year in [2023, 2024] {
        let start = instant(year, 1, 31, 0);
        let end = instant(year, 3, 1, 0);
        let result = Period::between(&start, &end).unwrap();
        assert_eq!(
            result.to_slots(),
            PeriodSlots {
                months: 1,
                days: 1,
                ..Default::default()
            },
            "{year}"
        );
    }

    let result = Period::between(&instant(2023, 1, 31, 0), &instant(2023, 3, 30, 0)).unwrap();
    assert_eq!((result.months(), result.days()), (1, 30));
}

#[test]
fn between_instant_like_values() {
    let start = IsoDateTime::try_new(
        IsoDate::try_new(2023, 1, 15).unwrap(),
        IsoTime::default(),
    )
    .unwrap();
    // 2023-03-20T06:00:00Z
    let end_ms: i64 = 1_679_292_000_000;

    let result = Period::between(start, end_ms).unwrap();
    assert_eq!(result.to_string(), "P2M5DT6H");
    assert_eq!(Period::between(end_ms, start).unwrap(), result.negated());

    let end = Instant::from_epoch_milliseconds(end_ms).unwrap();
    assert_eq!(Period::between(start, end).unwrap(), result);
    assert_eq!(Period::between(instant(2023, 1, 15, 0), &end).unwrap(), result);

    let err = Period::between(start, i64::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

// ==== Serde ====

#[cfg(feature = "serde")]
#[test]
fn serde_text() {
    let result = period("P1M-3D");
    assert_eq!(serde_json::to_string(&result).unwrap(), "\"P1M-3D\"");

    let parsed: Period = serde_json::from_str("\"P1Y2M10DT2H30M\"").unwrap();
    assert_eq!(parsed, period("P1Y2M10DT2H30M"));

    let parsed: Period = serde_json::from_str("90").unwrap();
    assert_eq!((parsed.minutes(), parsed.seconds()), (1, 30));

    let err = serde_json::from_str::<Period>("{\"years\": 1}").unwrap_err();
    assert!(err.to_string().starts_with("InvalidShape"));
}
