//! Implementation of the `FiniteF64` primitive, the validated numeric
//! amount every public entry point coerces its inputs into.

use crate::{PeriodError, PeriodResult};
use core_maths::CoreFloat;

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteF64(pub(crate) f64);

impl FiniteF64 {
    /// Validates `value` as a finite amount for the component `label`.
    ///
    /// Negative zero is normalized to zero.
    #[inline]
    pub fn from_amount(value: f64, label: &str) -> PeriodResult<Self> {
        if !value.is_finite() {
            return Err(PeriodError::non_finite(label));
        }
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    #[inline]
    pub fn as_inner(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    #[inline]
    pub fn is_integral(&self) -> bool {
        self.0.fract() == 0.0
    }

    #[inline]
    pub fn negate(&self) -> Self {
        if !self.is_zero() {
            Self(self.0 * -1.0)
        } else {
            *self
        }
    }

    /// Returns the value as an `i64` when it is integral and in the exact
    /// integer range of an `f64`.
    pub(crate) fn as_exact_integer(&self) -> Option<i64> {
        if !self.is_integral() || self.0.abs() > crate::MAX_SAFE_INTEGER as f64 {
            return None;
        }
        Some(self.0 as i64)
    }
}

impl From<i32> for FiniteF64 {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<FiniteF64> for f64 {
    fn from(value: FiniteF64) -> Self {
        value.0
    }
}

impl PartialEq<f64> for FiniteF64 {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for FiniteF64 {
    fn partial_cmp(&self, other: &f64) -> Option<core::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::FiniteF64;
    use crate::error::ErrorKind;

    #[test]
    fn amount_validation() {
        let err = FiniteF64::from_amount(f64::NAN, "days").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Amount);
        assert_eq!(err.message(), "The days must be a finite number");

        let err = FiniteF64::from_amount(f64::NEG_INFINITY, "hours").unwrap_err();
        assert_eq!(err.message(), "The hours must be a finite number");

        let zero = FiniteF64::from_amount(-0.0, "months").unwrap();
        assert!(zero.as_inner().is_sign_positive());

        let fractional = FiniteF64::from_amount(1.5, "weeks").unwrap();
        assert_eq!(fractional, 1.5);
        assert!(!fractional.is_integral());
        assert_eq!(fractional.as_exact_integer(), None);
    }

    #[test]
    fn finitef64_negate_and_integers() {
        assert_eq!(FiniteF64(3.0).negate(), -3.0);
        assert!(FiniteF64(0.0).negate().as_inner().is_sign_positive());
        assert_eq!(FiniteF64(12.0).as_exact_integer(), Some(12));
        assert_eq!(FiniteF64(1e300).as_exact_integer(), None);
        assert_eq!(FiniteF64::from(-7), -7.0);
    }
}
