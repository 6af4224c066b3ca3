//! Implementation of the calendar tier of a `Period`.

use core::num::NonZeroU128;

use core_maths::CoreFloat;

use crate::{
    error::ErrorMessage,
    options::{RoundingMode, Unit},
    primitive::FiniteF64,
    rounding::IncrementRounder,
    PeriodError, PeriodResult, PeriodUnwrap, Sign, MAX_SAFE_INTEGER, MONTHS_PER_YEAR,
};

use super::PartialPeriod;

/// The years and months of a `Period`.
///
/// Both fields carry the sign of the total months and `months` is always
/// below twelve in magnitude.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CalendarPeriod {
    pub(crate) years: i64,
    pub(crate) months: i64,
}

impl CalendarPeriod {
    /// Splits a month total into years and months, truncating toward zero.
    pub(crate) fn try_from_total_months(total: i64) -> PeriodResult<Self> {
        if total.unsigned_abs() > MAX_SAFE_INTEGER as u64 {
            return Err(PeriodError::range().with_enum(ErrorMessage::MonthsOutOfRange));
        }
        Ok(Self {
            years: total / MONTHS_PER_YEAR,
            months: total % MONTHS_PER_YEAR,
        })
    }

    /// Rounds a fractional month total half away from zero and splits it.
    pub(crate) fn from_fractional_months(total: f64) -> PeriodResult<Self> {
        if !total.is_finite() || total.abs() > MAX_SAFE_INTEGER as f64 {
            return Err(PeriodError::range().with_enum(ErrorMessage::MonthsOutOfRange));
        }
        let increment = NonZeroU128::new(1).period_unwrap()?;
        let rounded = IncrementRounder::<f64>::from_signed_num(total, increment)?
            .round(RoundingMode::HalfExpand);
        Self::try_from_total_months(rounded as i64)
    }

    /// Merges the years, quarters, and months of a partial record.
    pub(crate) fn from_partial(partial: &PartialPeriod) -> PeriodResult<Self> {
        let years = partial.years.unwrap_or_default().as_inner();
        let quarters = partial.quarters.unwrap_or_default().as_inner();
        let months = partial.months.unwrap_or_default().as_inner();
        Self::from_fractional_months(years * 12.0 + quarters * 3.0 + months)
    }

    /// Converts `amount` of a calendar `unit` into months.
    pub(crate) fn from_unit_amount(amount: FiniteF64, unit: Unit) -> PeriodResult<Self> {
        let per_unit = unit.as_months().period_unwrap()?;
        Self::from_fractional_months(amount.as_inner() * per_unit as f64)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn total_months(&self) -> i64 {
        self.years * MONTHS_PER_YEAR + self.months
    }

    #[inline]
    #[must_use]
    pub(crate) fn sign(&self) -> Sign {
        Sign::of(&self.total_months())
    }

    pub(crate) fn checked_add(&self, other: &Self) -> PeriodResult<Self> {
        Self::try_from_total_months(self.total_months() + other.total_months())
    }

    pub(crate) fn checked_mul(&self, multiplier: i64) -> PeriodResult<Self> {
        let total = self
            .total_months()
            .checked_mul(multiplier)
            .ok_or(PeriodError::range().with_enum(ErrorMessage::MonthsOutOfRange))?;
        Self::try_from_total_months(total)
    }

    #[inline]
    #[must_use]
    pub(crate) fn negated(&self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
        }
    }
}
