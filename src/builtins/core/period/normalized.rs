//! This module implements the normalized clock record of a `Period`.

use core::num::NonZeroU128;

use core_maths::CoreFloat;
use num_traits::Euclid;

use crate::{
    error::ErrorMessage,
    options::{RoundingMode, Unit},
    primitive::FiniteF64,
    rounding::IncrementRounder,
    PeriodError, PeriodResult, PeriodUnwrap, Sign, NS_PER_DAY,
};

use super::{ClockPeriod, PartialPeriod};

/// The largest clock magnitude: 2^53 - 1 seconds, in nanoseconds.
pub(crate) const MAX_CLOCK_DURATION: i128 = 9_007_199_254_740_991_999_999_999;

const NS_PER_DAY_128BIT: i128 = NS_PER_DAY as i128;
const NS_PER_HOUR: i128 = 3_600_000_000_000;
const NS_PER_MINUTE: i128 = 60_000_000_000;
const NS_PER_SECOND: i128 = 1_000_000_000;

// ==== NormalizedClock ====
//
// The clock tier of a period represented in pure nanoseconds.
//
// Invariants:
//
// nanoseconds.abs() <= MAX_CLOCK_DURATION

/// The clock tier of a `Period` as a signed nanosecond total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct NormalizedClock(pub(crate) i128);

impl NormalizedClock {
    pub(crate) fn from_nanoseconds(nanoseconds: i128) -> PeriodResult<Self> {
        if nanoseconds.abs() > MAX_CLOCK_DURATION {
            return Err(PeriodError::range().with_enum(ErrorMessage::PeriodOutOfRange));
        }
        Ok(Self(nanoseconds))
    }

    /// Converts `amount` of a fixed-ratio `unit` exactly, rounding a
    /// fractional result half away from zero at the nanosecond.
    pub(crate) fn from_unit_amount(amount: FiniteF64, unit: Unit) -> PeriodResult<Self> {
        let per_unit = i128::from(unit.as_nanoseconds().period_unwrap()?);
        if let Some(whole) = amount.as_exact_integer() {
            return Self::from_nanoseconds(i128::from(whole) * per_unit);
        }

        let value = amount.as_inner();
        if value.abs() * per_unit as f64 > MAX_CLOCK_DURATION as f64 {
            return Err(PeriodError::range().with_enum(ErrorMessage::PeriodOutOfRange));
        }
        let whole = value.trunc();
        let fraction = ((value - whole) * per_unit as f64).round();
        Self::from_nanoseconds(whole as i128 * per_unit + fraction as i128)
    }

    /// Merges the weeks through nanoseconds of a partial record.
    pub(crate) fn from_partial(partial: &PartialPeriod) -> PeriodResult<Self> {
        let fields = [
            (partial.weeks, Unit::Week),
            (partial.days, Unit::Day),
            (partial.hours, Unit::Hour),
            (partial.minutes, Unit::Minute),
            (partial.seconds, Unit::Second),
            (partial.milliseconds, Unit::Millisecond),
            (partial.microseconds, Unit::Microsecond),
            (partial.nanoseconds, Unit::Nanosecond),
        ];
        fields
            .into_iter()
            .try_fold(Self::default(), |total, (amount, unit)| match amount {
                Some(amount) => total.checked_add(&Self::from_unit_amount(amount, unit)?),
                None => Ok(total),
            })
    }

    pub(crate) fn from_clock(clock: &ClockPeriod) -> Self {
        let total = i128::from(clock.days) * NS_PER_DAY_128BIT
            + i128::from(clock.hours) * NS_PER_HOUR
            + i128::from(clock.minutes) * NS_PER_MINUTE
            + i128::from(clock.seconds) * NS_PER_SECOND
            + i128::from(clock.milliseconds) * 1_000_000
            + i128::from(clock.microseconds) * 1_000
            + i128::from(clock.nanoseconds);
        Self(total)
    }

    pub(crate) fn checked_add(&self, other: &Self) -> PeriodResult<Self> {
        Self::from_nanoseconds(self.0 + other.0)
    }

    pub(crate) fn checked_mul(&self, multiplier: i64) -> PeriodResult<Self> {
        let result = self
            .0
            .checked_mul(i128::from(multiplier))
            .ok_or(PeriodError::range().with_enum(ErrorMessage::PeriodOutOfRange))?;
        Self::from_nanoseconds(result)
    }

    #[inline]
    #[must_use]
    pub(crate) fn negated(&self) -> Self {
        Self(-self.0)
    }

    #[inline]
    #[must_use]
    pub(crate) fn sign(&self) -> Sign {
        Sign::of(&self.0)
    }

    /// Rounds to a multiple of `smallest_unit`, which must be a unit no
    /// coarser than a day.
    pub(crate) fn round(&self, smallest_unit: Unit, mode: RoundingMode) -> PeriodResult<Self> {
        let increment = smallest_unit.as_nanoseconds().period_unwrap()?;
        if increment == 1 {
            return Ok(*self);
        }
        let increment = NonZeroU128::new(u128::from(increment)).period_unwrap()?;
        let rounded = IncrementRounder::<i128>::from_signed_num(self.0, increment)?.round(mode);
        Self::from_nanoseconds(rounded)
    }

    /// Splits the total into days through nanoseconds; every field carries
    /// the sign of the total.
    pub(crate) fn balance(&self) -> ClockPeriod {
        let sign = i64::from(self.sign().as_sign_multiplier());
        let (days, remainder) = self.0.abs().div_rem_euclid(&NS_PER_DAY_128BIT);
        let (hours, remainder) = remainder.div_rem_euclid(&NS_PER_HOUR);
        let (minutes, remainder) = remainder.div_rem_euclid(&NS_PER_MINUTE);
        let (seconds, remainder) = remainder.div_rem_euclid(&NS_PER_SECOND);
        let (milliseconds, remainder) = remainder.div_rem_euclid(&1_000_000);
        let (microseconds, nanoseconds) = remainder.div_rem_euclid(&1_000);

        ClockPeriod {
            days: days as i64 * sign,
            hours: hours as i64 * sign,
            minutes: minutes as i64 * sign,
            seconds: seconds as i64 * sign,
            milliseconds: milliseconds as i64 * sign,
            microseconds: microseconds as i64 * sign,
            nanoseconds: nanoseconds as i64 * sign,
        }
    }
}
