//! This module implements `Period` along with its methods and components.

use crate::{
    builtins::core::Instant,
    error::ErrorMessage,
    options::{PartsOptions, ResolvedPartsOptions, Unit},
    parsers::{
        parse_period, FormattableDateSection, FormattablePeriod, FormattableSeconds,
        FormattableTimeSection, PeriodGrammar, ZeroDesignator,
    },
    primitive::FiniteF64,
    PeriodError, PeriodResult, Sign,
};
use alloc::string::{String, ToString};
use core::str::FromStr;
use core_maths::CoreFloat;

mod calendar;
mod clock;
mod diff;
pub(crate) mod normalized;

#[cfg(test)]
mod tests;

use calendar::CalendarPeriod;
pub(crate) use clock::ClockPeriod;
use normalized::NormalizedClock;

/// A `PartialPeriod` is a record of period parts that may not be set.
///
/// It is the structured input accepted by [`Period::from_partial`] and the
/// output of [`Period::to_parts`] and the parse functions, where an absent
/// field is one that was not requested.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct PartialPeriod {
    /// A potentially existent `years` field.
    pub years: Option<FiniteF64>,
    /// A potentially existent `quarters` field.
    pub quarters: Option<FiniteF64>,
    /// A potentially existent `months` field.
    pub months: Option<FiniteF64>,
    /// A potentially existent `weeks` field.
    pub weeks: Option<FiniteF64>,
    /// A potentially existent `days` field.
    pub days: Option<FiniteF64>,
    /// A potentially existent `hours` field.
    pub hours: Option<FiniteF64>,
    /// A potentially existent `minutes` field.
    pub minutes: Option<FiniteF64>,
    /// A potentially existent `seconds` field.
    pub seconds: Option<FiniteF64>,
    /// A potentially existent `milliseconds` field.
    pub milliseconds: Option<FiniteF64>,
    /// A potentially existent `microseconds` field.
    pub microseconds: Option<FiniteF64>,
    /// A potentially existent `nanoseconds` field.
    pub nanoseconds: Option<FiniteF64>,
}

impl PartialPeriod {
    /// Returns the record with every present field negated.
    #[must_use]
    pub fn negated(&self) -> Self {
        let negate = |field: Option<FiniteF64>| field.map(|value| value.negate());
        Self {
            years: negate(self.years),
            quarters: negate(self.quarters),
            months: negate(self.months),
            weeks: negate(self.weeks),
            days: negate(self.days),
            hours: negate(self.hours),
            minutes: negate(self.minutes),
            seconds: negate(self.seconds),
            milliseconds: negate(self.milliseconds),
            microseconds: negate(self.microseconds),
            nanoseconds: negate(self.nanoseconds),
        }
    }
}

impl From<PeriodSlots> for PartialPeriod {
    fn from(slots: PeriodSlots) -> Self {
        Self {
            years: Some(finite(slots.years)),
            quarters: None,
            months: Some(finite(slots.months)),
            weeks: None,
            days: Some(finite(slots.days)),
            hours: Some(finite(slots.hours)),
            minutes: Some(finite(slots.minutes)),
            seconds: Some(finite(slots.seconds)),
            milliseconds: Some(finite(slots.milliseconds)),
            microseconds: Some(finite(slots.microseconds)),
            nanoseconds: Some(finite(slots.nanoseconds)),
        }
    }
}

/// The nine canonical fields of a [`Period`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodSlots {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
    pub nanoseconds: i64,
}

/// An immutable amount of elapsed calendar and clock time.
///
/// A `Period` is made up of a calendar tier, years and months, and a clock
/// tier, days through nanoseconds. Each tier is kept balanced on its own and
/// carries its own sign, so `P1M-3D` is a valid period.
///
/// ```rust
/// use period_rs::{options::Unit, Period};
///
/// let period = Period::from_components(0.0, 14.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
/// assert_eq!((period.years(), period.months()), (1, 2));
///
/// let later = period.add_unit(-3.0, Unit::Day).unwrap();
/// assert_eq!(later.to_string(), "P1Y2M-3D");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    calendar: CalendarPeriod,
    clock: ClockPeriod,
}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The canonical fields are already the default projection.
        let options = ResolvedPartsOptions::from(PartsOptions::default());
        let parts = PartialPeriod::from(self.to_slots());
        core::fmt::Display::fmt(&self.formattable_from_parts(&parts, options), f)
    }
}

// ==== Private Creation methods ====

impl Period {
    #[inline]
    fn from_tiers(calendar: CalendarPeriod, clock: NormalizedClock) -> Self {
        Self {
            calendar,
            clock: clock.balance(),
        }
    }

    /// Converts `amount` of a single `unit` into a period.
    fn from_unit_amount(amount: FiniteF64, unit: Unit) -> PeriodResult<Self> {
        if unit.is_calendar_unit() {
            let calendar = CalendarPeriod::from_unit_amount(amount, unit)?;
            return Ok(Self::from_tiers(calendar, NormalizedClock::default()));
        }
        let clock = NormalizedClock::from_unit_amount(amount, unit)?;
        Ok(Self::from_tiers(CalendarPeriod::default(), clock))
    }

    /// Reads a bare number as a count of seconds.
    fn from_seconds(seconds: f64) -> PeriodResult<Self> {
        let seconds = FiniteF64::from_amount(seconds, "period")?;
        Self::from_unit_amount(seconds, Unit::Second)
    }

    fn with_field(
        &self,
        value: f64,
        label: &str,
        set: impl FnOnce(&mut PartialPeriod, FiniteF64),
    ) -> PeriodResult<Self> {
        let value = FiniteF64::from_amount(value, label)?;
        let mut partial = PartialPeriod::from(self.to_slots());
        set(&mut partial, value);
        Self::from_partial(partial)
    }
}

// ==== Public Creation methods ====

impl Period {
    /// Returns the zero period.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a period from any of the accepted period-like shapes.
    pub fn from_period_like<'a>(value: impl Into<PeriodLike<'a>>) -> PeriodResult<Self> {
        match value.into() {
            PeriodLike::Period(period) => Ok(period),
            PeriodLike::Partial(partial) => Self::from_partial(partial),
            PeriodLike::Text(text) => Self::from_str(text),
            PeriodLike::Seconds(seconds) => Self::from_seconds(seconds),
            PeriodLike::Duration(duration) => {
                let nanoseconds = i128::from(duration.as_secs()) * 1_000_000_000
                    + i128::from(duration.subsec_nanos());
                let clock = NormalizedClock::from_nanoseconds(nanoseconds)?;
                Ok(Self::from_tiers(CalendarPeriod::default(), clock))
            }
            PeriodLike::Instant(instant) => {
                let clock = NormalizedClock::from_nanoseconds(instant.epoch_nanoseconds())?;
                Ok(Self::from_tiers(CalendarPeriod::default(), clock))
            }
        }
    }

    /// Creates a period from a count of seconds and nanoseconds.
    pub fn from_seconds_and_nanos(seconds: f64, nanoseconds: f64) -> PeriodResult<Self> {
        Self::from_partial(PartialPeriod {
            seconds: Some(FiniteF64::from_amount(seconds, "seconds")?),
            nanoseconds: Some(FiniteF64::from_amount(nanoseconds, "nanoseconds")?),
            ..Default::default()
        })
    }

    /// Creates a period from its nine components, which may be fractional,
    /// unbalanced, or of mixed sign.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        years: f64,
        months: f64,
        days: f64,
        hours: f64,
        minutes: f64,
        seconds: f64,
        milliseconds: f64,
        microseconds: f64,
        nanoseconds: f64,
    ) -> PeriodResult<Self> {
        Self::from_partial(PartialPeriod {
            years: Some(FiniteF64::from_amount(years, "years")?),
            quarters: None,
            months: Some(FiniteF64::from_amount(months, "months")?),
            weeks: None,
            days: Some(FiniteF64::from_amount(days, "days")?),
            hours: Some(FiniteF64::from_amount(hours, "hours")?),
            minutes: Some(FiniteF64::from_amount(minutes, "minutes")?),
            seconds: Some(FiniteF64::from_amount(seconds, "seconds")?),
            milliseconds: Some(FiniteF64::from_amount(milliseconds, "milliseconds")?),
            microseconds: Some(FiniteF64::from_amount(microseconds, "microseconds")?),
            nanoseconds: Some(FiniteF64::from_amount(nanoseconds, "nanoseconds")?),
        })
    }

    /// Creates a period from a partial record, absent fields being zero.
    pub fn from_partial(partial: PartialPeriod) -> PeriodResult<Self> {
        let calendar = CalendarPeriod::from_partial(&partial)?;
        let clock = NormalizedClock::from_partial(&partial)?;
        Ok(Self::from_tiers(calendar, clock))
    }

    /// Creates a period of `amount` of `unit`.
    ///
    /// Calendar units are rounded to a whole month; clock units are exact to
    /// the nanosecond.
    pub fn of(amount: f64, unit: Unit) -> PeriodResult<Self> {
        let amount = FiniteF64::from_amount(amount, "amount")?;
        Self::from_unit_amount(amount, unit)
    }
}

// ==== Public `Period` Getters/Setters ====

impl Period {
    #[inline]
    #[must_use]
    pub const fn years(&self) -> i64 {
        self.calendar.years
    }

    #[inline]
    #[must_use]
    pub const fn months(&self) -> i64 {
        self.calendar.months
    }

    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.clock.days
    }

    #[inline]
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.clock.hours
    }

    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.clock.minutes
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.clock.seconds
    }

    #[inline]
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.clock.milliseconds
    }

    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> i64 {
        self.clock.microseconds
    }

    #[inline]
    #[must_use]
    pub const fn nanoseconds(&self) -> i64 {
        self.clock.nanoseconds
    }

    /// Returns a new period with `years` replaced.
    pub fn with_years(&self, years: f64) -> PeriodResult<Self> {
        self.with_field(years, "years", |partial, value| partial.years = Some(value))
    }

    /// Returns a new period with `months` replaced.
    pub fn with_months(&self, months: f64) -> PeriodResult<Self> {
        self.with_field(months, "months", |partial, value| partial.months = Some(value))
    }

    /// Returns a new period with `days` replaced.
    pub fn with_days(&self, days: f64) -> PeriodResult<Self> {
        self.with_field(days, "days", |partial, value| partial.days = Some(value))
    }

    /// Returns a new period with `hours` replaced.
    pub fn with_hours(&self, hours: f64) -> PeriodResult<Self> {
        self.with_field(hours, "hours", |partial, value| partial.hours = Some(value))
    }

    /// Returns a new period with `minutes` replaced.
    pub fn with_minutes(&self, minutes: f64) -> PeriodResult<Self> {
        self.with_field(minutes, "minutes", |partial, value| {
            partial.minutes = Some(value)
        })
    }

    /// Returns a new period with `seconds` replaced.
    pub fn with_seconds(&self, seconds: f64) -> PeriodResult<Self> {
        self.with_field(seconds, "seconds", |partial, value| {
            partial.seconds = Some(value)
        })
    }

    /// Returns a new period with `milliseconds` replaced.
    pub fn with_milliseconds(&self, milliseconds: f64) -> PeriodResult<Self> {
        self.with_field(milliseconds, "milliseconds", |partial, value| {
            partial.milliseconds = Some(value)
        })
    }

    /// Returns a new period with `microseconds` replaced.
    pub fn with_microseconds(&self, microseconds: f64) -> PeriodResult<Self> {
        self.with_field(microseconds, "microseconds", |partial, value| {
            partial.microseconds = Some(value)
        })
    }

    /// Returns a new period with `nanoseconds` replaced.
    pub fn with_nanoseconds(&self, nanoseconds: f64) -> PeriodResult<Self> {
        self.with_field(nanoseconds, "nanoseconds", |partial, value| {
            partial.nanoseconds = Some(value)
        })
    }

    /// Returns the nine canonical fields.
    #[must_use]
    pub const fn to_slots(&self) -> PeriodSlots {
        PeriodSlots {
            years: self.calendar.years,
            months: self.calendar.months,
            days: self.clock.days,
            hours: self.clock.hours,
            minutes: self.clock.minutes,
            seconds: self.clock.seconds,
            milliseconds: self.clock.milliseconds,
            microseconds: self.clock.microseconds,
            nanoseconds: self.clock.nanoseconds,
        }
    }
}

// ==== Public Period methods ====

impl Period {
    /// Returns `Sign::Negative` if any field is negative, `Sign::Positive`
    /// if any field is positive, and `Sign::Zero` otherwise.
    #[must_use]
    pub fn sign(&self) -> Sign {
        match (self.calendar.sign(), self.clock.sign()) {
            (Sign::Negative, _) | (_, Sign::Negative) => Sign::Negative,
            (Sign::Positive, _) | (_, Sign::Positive) => Sign::Positive,
            _ => Sign::Zero,
        }
    }

    /// Returns whether any field is negative.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    /// Returns the period with both tiers negated.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_tiers(self.calendar.negated(), self.clock.to_normalized().negated())
    }

    /// Adds a period-like value to this period.
    pub fn add<'a>(&self, other: impl Into<PeriodLike<'a>>) -> PeriodResult<Self> {
        let other = Self::from_period_like(other)?;
        self.add_period(&other)
    }

    /// Subtracts a period-like value from this period.
    pub fn subtract<'a>(&self, other: impl Into<PeriodLike<'a>>) -> PeriodResult<Self> {
        let other = Self::from_period_like(other)?;
        self.add_period(&other.negated())
    }

    /// Adds `amount` of `unit` to this period.
    pub fn add_unit(&self, amount: f64, unit: Unit) -> PeriodResult<Self> {
        self.add_period(&Self::of(amount, unit)?)
    }

    /// Subtracts `amount` of `unit` from this period.
    pub fn subtract_unit(&self, amount: f64, unit: Unit) -> PeriodResult<Self> {
        self.add_period(&Self::of(amount, unit)?.negated())
    }

    fn add_period(&self, other: &Self) -> PeriodResult<Self> {
        let calendar = self.calendar.checked_add(&other.calendar)?;
        let clock = self
            .clock
            .to_normalized()
            .checked_add(&other.clock.to_normalized())?;
        Ok(Self::from_tiers(calendar, clock))
    }

    /// Scales every field by the integral part of `multiplier`.
    pub fn multiply(&self, multiplier: f64) -> PeriodResult<Self> {
        if !multiplier.is_finite() {
            return Err(PeriodError::multiplier().with_enum(ErrorMessage::MultiplierNotFinite));
        }
        let multiplier = multiplier.trunc();
        if multiplier == 0.0 {
            return Err(PeriodError::multiplier().with_enum(ErrorMessage::MultiplierIsZero));
        }
        let multiplier = multiplier as i64;
        let calendar = self.calendar.checked_mul(multiplier)?;
        let clock = self.clock.to_normalized().checked_mul(multiplier)?;
        Ok(Self::from_tiers(calendar, clock))
    }

    /// Rounds the period to the granularity of `options`.
    ///
    /// Fields above the largest unit are folded into it and the clock tier
    /// is rounded at the smallest unit; the result is renormalized.
    pub fn round(&self, options: PartsOptions) -> PeriodResult<Self> {
        Self::from_partial(self.to_parts(options)?)
    }

    /// Projects the period onto the units requested by `options`.
    ///
    /// A field of the result is `None` when it was not requested, and
    /// `Some` (possibly zero) when it was.
    pub fn to_parts(&self, options: PartsOptions) -> PeriodResult<PartialPeriod> {
        self.project(ResolvedPartsOptions::from(options))
    }

    /// Returns the canonical text of the period projected with `options`.
    pub fn as_period_string(&self, options: PartsOptions) -> PeriodResult<String> {
        let formattable = self.to_formattable(ResolvedPartsOptions::from(options))?;
        Ok(formattable.to_string())
    }

    pub(crate) fn project(&self, options: ResolvedPartsOptions) -> PeriodResult<PartialPeriod> {
        let mut parts = PartialPeriod::default();

        let mut months = self.calendar.total_months();
        if options.with_years {
            parts.years = Some(finite(months / 12));
            months %= 12;
        }
        if options.with_quarters {
            parts.quarters = Some(finite(months / 3));
            months %= 3;
        }
        parts.months = Some(finite(months));

        let clock = self
            .clock
            .to_normalized()
            .round(options.smallest_unit, options.rounding_mode)?
            .balance();
        let mut days = clock.days;
        if options.with_weeks {
            parts.weeks = Some(finite(days / 7));
            days %= 7;
        }
        parts.days = Some(finite(days));

        let report = |unit: Unit, value: i64| options.reports(unit).then(|| finite(value));
        parts.hours = report(Unit::Hour, clock.hours);
        parts.minutes = report(Unit::Minute, clock.minutes);
        parts.seconds = report(Unit::Second, clock.seconds);
        parts.milliseconds = report(Unit::Millisecond, clock.milliseconds);
        parts.microseconds = report(Unit::Microsecond, clock.microseconds);
        parts.nanoseconds = report(Unit::Nanosecond, clock.nanoseconds);

        Ok(parts)
    }

    fn to_formattable(&self, options: ResolvedPartsOptions) -> PeriodResult<FormattablePeriod> {
        let parts = self.project(options)?;
        Ok(self.formattable_from_parts(&parts, options))
    }

    fn formattable_from_parts(
        &self,
        parts: &PartialPeriod,
        options: ResolvedPartsOptions,
    ) -> FormattablePeriod {
        // The signs are taken before rounding so that a clock tier rounded
        // to zero still decides how the calendar tier is written.
        let total_months = self.calendar.total_months();
        let clock_sign = self.clock.sign();
        let is_negative = (total_months < 0 && clock_sign != Sign::Positive)
            || (total_months <= 0 && clock_sign == Sign::Negative);
        let signed_calendar = total_months < 0 && clock_sign == Sign::Positive;
        let signed_clock = total_months > 0 && clock_sign == Sign::Negative;

        let numeral = |field: Option<FiniteF64>, signed: bool| {
            let value = field.map_or(0, |value| value.as_inner() as i64);
            if signed {
                value
            } else {
                value.abs()
            }
        };
        let subseconds: i128 = [
            (parts.seconds, 1_000_000_000),
            (parts.milliseconds, 1_000_000),
            (parts.microseconds, 1_000),
            (parts.nanoseconds, 1),
        ]
        .into_iter()
        .map(|(field, scale)| i128::from(numeral(field, true)) * scale)
        .sum();

        let empty = if options.reports(Unit::Second) {
            ZeroDesignator::Seconds
        } else if options.reports(Unit::Minute) {
            ZeroDesignator::Minutes
        } else if options.reports(Unit::Hour) {
            ZeroDesignator::Hours
        } else {
            ZeroDesignator::Days
        };

        FormattablePeriod {
            sign: if is_negative {
                Sign::Negative
            } else {
                Sign::Positive
            },
            date: FormattableDateSection {
                years: numeral(parts.years, signed_calendar),
                quarters: numeral(parts.quarters, signed_calendar),
                months: numeral(parts.months, signed_calendar),
                weeks: numeral(parts.weeks, signed_clock),
                days: numeral(parts.days, signed_clock),
            },
            time: FormattableTimeSection {
                hours: numeral(parts.hours, signed_clock),
                minutes: numeral(parts.minutes, signed_clock),
                seconds: FormattableSeconds::from_nanoseconds(subseconds, signed_clock),
            },
            empty,
        }
    }
}

// ==== Parsing ====

impl Period {
    /// Parses `text` with every designator and fractional seconds.
    ///
    /// Returns `Ok(None)` when `text` is not a period string; otherwise the
    /// parsed period projected with `options`.
    pub fn parse(text: &str, options: PartsOptions) -> PeriodResult<Option<PartialPeriod>> {
        Self::parse_with_grammar(text, PeriodGrammar::Full, options)
    }

    /// Parses `text` with every designator but integral values only.
    pub fn parse_units(text: &str, options: PartsOptions) -> PeriodResult<Option<PartialPeriod>> {
        Self::parse_with_grammar(text, PeriodGrammar::Units, options)
    }

    /// Parses a clock-only `PT..` string with fractional seconds.
    pub fn parse_time(text: &str, options: PartsOptions) -> PeriodResult<Option<PartialPeriod>> {
        Self::parse_with_grammar(text, PeriodGrammar::Time, options)
    }

    /// Parses weeks, days, and a clock section with fractional seconds.
    pub fn parse_duration(
        text: &str,
        options: PartsOptions,
    ) -> PeriodResult<Option<PartialPeriod>> {
        Self::parse_with_grammar(text, PeriodGrammar::Duration, options)
    }

    fn parse_with_grammar(
        text: &str,
        grammar: PeriodGrammar,
        options: PartsOptions,
    ) -> PeriodResult<Option<PartialPeriod>> {
        parse_period(text, grammar)
            .map(|raw| Self::from_partial(raw).and_then(|period| period.to_parts(options)))
            .transpose()
    }
}

// ==== Period-like values ====

/// The closed set of values a [`Period`] can be created from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeriodLike<'a> {
    /// An existing period.
    Period(Period),
    /// A structured record of parts.
    Partial(PartialPeriod),
    /// A period string, or a number of seconds written as text.
    Text(&'a str),
    /// A number of seconds.
    Seconds(f64),
    /// An exact, non-negative elapsed time.
    Duration(core::time::Duration),
    /// The time elapsed since the Unix epoch.
    Instant(Instant),
}

impl From<Period> for PeriodLike<'_> {
    fn from(value: Period) -> Self {
        Self::Period(value)
    }
}

impl From<&Period> for PeriodLike<'_> {
    fn from(value: &Period) -> Self {
        Self::Period(*value)
    }
}

impl From<PartialPeriod> for PeriodLike<'_> {
    fn from(value: PartialPeriod) -> Self {
        Self::Partial(value)
    }
}

impl<'a> From<&'a str> for PeriodLike<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PeriodLike<'_> {
    fn from(value: f64) -> Self {
        Self::Seconds(value)
    }
}

impl From<core::time::Duration> for PeriodLike<'_> {
    fn from(value: core::time::Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<Instant> for PeriodLike<'_> {
    fn from(value: Instant) -> Self {
        Self::Instant(value)
    }
}

// ==== FromStr trait impl ====

impl FromStr for Period {
    type Err = PeriodError;

    /// Parses a period string, falling back to reading `s` as a number of
    /// seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(partial) = parse_period(s, PeriodGrammar::Full) {
            return Self::from_partial(partial);
        }

        #[cfg(feature = "log")]
        log::trace!("{s:?} is not a period string, reading it as seconds");

        let seconds = s
            .trim()
            .parse::<f64>()
            .map_err(|_| PeriodError::amount().with_enum(ErrorMessage::PeriodNotFinite))?;
        Self::from_seconds(seconds)
    }
}

#[inline]
fn finite(value: i64) -> FiniteF64 {
    FiniteF64(value as f64)
}

// ==== Serde ====

#[cfg(feature = "serde")]
impl serde::Serialize for Period {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Period, D::Error> {
        use serde::de;

        struct PeriodVisitor;

        impl<'de> de::Visitor<'de> for PeriodVisitor {
            type Value = Period;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("a period string or a number of seconds")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Period, E> {
                Period::from_str(value).map_err(de::Error::custom)
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Period, E> {
                Period::from_seconds(value).map_err(de::Error::custom)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Period, E> {
                self.visit_f64(value as f64)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Period, E> {
                self.visit_f64(value as f64)
            }

            fn visit_map<A: de::MapAccess<'de>>(self, _map: A) -> Result<Period, A::Error> {
                Err(de::Error::custom(
                    PeriodError::shape().with_message("A period record must be written as text"),
                ))
            }
        }

        deserializer.deserialize_any(PeriodVisitor)
    }
}
