//! Implementation of increment rounding functionality

use crate::{
    options::{RoundingMode, UnsignedRoundingMode},
    PeriodResult, PeriodUnwrap,
};

use core::{cmp::Ordering, num::NonZeroU128, ops::Div};

use num_traits::float::FloatCore;
use num_traits::{ConstZero, Euclid, FromPrimitive, NumCast, Signed, ToPrimitive};

pub(crate) trait Roundable:
    Euclid + Div + PartialOrd + Signed + FromPrimitive + ToPrimitive + NumCast + ConstZero + Copy
{
    fn is_exact(dividend: Self, divisor: Self) -> bool;
    fn compare_remainder(dividend: Self, divisor: Self) -> Option<Ordering>;
    fn is_even_cardinal(dividend: Self, divisor: Self) -> bool;
    fn result_floor(dividend: Self, divisor: Self) -> u128;
    fn result_ceil(dividend: Self, divisor: Self) -> u128;
    fn quotient_abs(dividend: Self, divisor: Self) -> Self {
        (dividend / divisor).abs()
    }
}

/// Rounds a number to a multiple of an increment.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct IncrementRounder<T: Roundable> {
    sign: bool,
    dividend: T,
    divisor: T,
    increment: i128,
}

impl<T: Roundable> IncrementRounder<T> {
    #[inline]
    pub(crate) fn from_signed_num(number: T, increment: NonZeroU128) -> PeriodResult<Self> {
        let divisor = <T as NumCast>::from(increment.get()).period_unwrap()?;
        let increment = <i128 as NumCast>::from(increment.get()).period_unwrap()?;
        Ok(Self {
            sign: number >= T::ZERO,
            dividend: number,
            divisor,
            increment,
        })
    }

    /// Returns the rounded multiple of the increment.
    #[inline]
    pub(crate) fn round(&self, mode: RoundingMode) -> i128 {
        let unsigned_rounding_mode = mode.get_unsigned_round_mode(self.sign);
        let rounded =
            apply_unsigned_rounding_mode(self.dividend, self.divisor, unsigned_rounding_mode)
                as i128;
        let rounded = if self.sign { rounded } else { -rounded };
        rounded * self.increment
    }
}

impl Roundable for i128 {
    fn is_exact(dividend: Self, divisor: Self) -> bool {
        dividend.rem_euclid(divisor) == 0
    }

    fn compare_remainder(dividend: Self, divisor: Self) -> Option<Ordering> {
        // Compare twice the remainder so odd increments tie correctly.
        Some(((dividend.abs() % divisor) * 2).cmp(&divisor))
    }

    fn is_even_cardinal(dividend: Self, divisor: Self) -> bool {
        Roundable::result_floor(dividend, divisor).rem_euclid(2) == 0
    }

    fn result_floor(dividend: Self, divisor: Self) -> u128 {
        Roundable::quotient_abs(dividend, divisor) as u128
    }

    fn result_ceil(dividend: Self, divisor: Self) -> u128 {
        Roundable::quotient_abs(dividend, divisor) as u128 + 1
    }
}

impl Roundable for f64 {
    fn is_exact(dividend: Self, divisor: Self) -> bool {
        let quotient = Roundable::quotient_abs(dividend, divisor);
        quotient == FloatCore::floor(quotient)
    }

    fn compare_remainder(dividend: Self, divisor: Self) -> Option<Ordering> {
        let quotient = Roundable::quotient_abs(dividend, divisor);
        let d1 = quotient - FloatCore::floor(quotient);
        let d2 = FloatCore::ceil(quotient) - quotient;
        d1.partial_cmp(&d2)
    }

    fn is_even_cardinal(dividend: Self, divisor: Self) -> bool {
        let quotient = Roundable::quotient_abs(dividend, divisor);
        FloatCore::floor(quotient) % 2.0 == 0.0
    }

    fn result_floor(dividend: Self, divisor: Self) -> u128 {
        FloatCore::floor(Roundable::quotient_abs(dividend, divisor)) as u128
    }

    fn result_ceil(dividend: Self, divisor: Self) -> u128 {
        FloatCore::ceil(Roundable::quotient_abs(dividend, divisor)) as u128
    }
}

/// Applies the unsigned rounding mode.
fn apply_unsigned_rounding_mode<T: Roundable>(
    dividend: T,
    divisor: T,
    unsigned_rounding_mode: UnsignedRoundingMode,
) -> u128 {
    // 1. If x is equal to r1, return r1.
    if Roundable::is_exact(dividend, divisor) {
        return Roundable::result_floor(dividend, divisor);
    }

    match unsigned_rounding_mode {
        UnsignedRoundingMode::Zero => return Roundable::result_floor(dividend, divisor),
        UnsignedRoundingMode::Infinity => return Roundable::result_ceil(dividend, divisor),
        _ => {}
    }

    // Otherwise round to the nearer of r1 and r2, breaking ties by mode.
    match Roundable::compare_remainder(dividend, divisor) {
        Some(Ordering::Less) => Roundable::result_floor(dividend, divisor),
        Some(Ordering::Greater) => Roundable::result_ceil(dividend, divisor),
        _ => match unsigned_rounding_mode {
            UnsignedRoundingMode::HalfZero => Roundable::result_floor(dividend, divisor),
            UnsignedRoundingMode::HalfEven if Roundable::is_even_cardinal(dividend, divisor) => {
                Roundable::result_floor(dividend, divisor)
            }
            _ => Roundable::result_ceil(dividend, divisor),
        },
    }
}
