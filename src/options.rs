//! Native implementation of the `Period` options.
//!
//! Projections of a period into parts or text can be configured with a
//! largest and smallest unit, a rounding mode, and whether quarters and
//! weeks are extracted.

use crate::{error::ErrorMessage, PeriodError, PeriodResult, NS_PER_DAY};
use core::{fmt, str::FromStr};

// ==== PartsOptions ====

/// Options for projecting a `Period` into parts or text.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PartsOptions {
    /// The coarsest unit reported. Defaults to `Unit::Year`.
    pub largest_unit: Option<Unit>,
    /// The finest unit reported. Defaults to `Unit::Nanosecond`.
    pub smallest_unit: Option<Unit>,
    /// The rounding applied at the smallest unit. Defaults to `RoundingMode::Trunc`.
    pub rounding_mode: Option<RoundingMode>,
    /// Whether whole quarters are extracted from the months.
    pub with_quarters: bool,
    /// Whether whole weeks are extracted from the days.
    pub with_weeks: bool,
}

impl PartsOptions {
    pub const fn new() -> Self {
        Self {
            largest_unit: None,
            smallest_unit: None,
            rounding_mode: None,
            with_quarters: false,
            with_weeks: false,
        }
    }

    pub const fn with_largest_unit(mut self, unit: Unit) -> Self {
        self.largest_unit = Some(unit);
        self
    }

    pub const fn with_smallest_unit(mut self, unit: Unit) -> Self {
        self.smallest_unit = Some(unit);
        self
    }

    pub const fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = Some(mode);
        self
    }

    pub const fn with_quarters(mut self, with_quarters: bool) -> Self {
        self.with_quarters = with_quarters;
        self
    }

    pub const fn with_weeks(mut self, with_weeks: bool) -> Self {
        self.with_weeks = with_weeks;
        self
    }
}

/// `PartsOptions` with every default applied and the units clamped to what
/// the two tiers of a period can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedPartsOptions {
    /// Whether years are split out of the total months.
    pub(crate) with_years: bool,
    /// The finest clock unit, at most `Unit::Day`.
    pub(crate) smallest_unit: Unit,
    pub(crate) rounding_mode: RoundingMode,
    pub(crate) with_quarters: bool,
    pub(crate) with_weeks: bool,
}

impl From<PartsOptions> for ResolvedPartsOptions {
    fn from(options: PartsOptions) -> Self {
        let largest_unit = options.largest_unit.unwrap_or(Unit::Year);
        let smallest_unit = options.smallest_unit.unwrap_or(Unit::Nanosecond);
        Self {
            // Anything below a year collapses the calendar tier into months.
            with_years: largest_unit == Unit::Year,
            // Weeks and calendar units cannot subdivide the clock tier.
            smallest_unit: smallest_unit.min(Unit::Day),
            rounding_mode: options.rounding_mode.unwrap_or_default(),
            with_quarters: options.with_quarters,
            with_weeks: options.with_weeks,
        }
    }
}

impl ResolvedPartsOptions {
    /// Returns whether `unit` is reported by a projection with these options.
    pub(crate) fn reports(&self, unit: Unit) -> bool {
        match unit {
            Unit::Year => self.with_years,
            Unit::Quarter => self.with_quarters,
            Unit::Week => self.with_weeks,
            Unit::Month | Unit::Day => true,
            _ => unit >= self.smallest_unit,
        }
    }
}

// ==== Unit ====

/// The relevant unit that should be used for the operation that
/// this option is provided as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// The `Nanosecond` unit
    Nanosecond = 0,
    /// The `Microsecond` unit
    Microsecond,
    /// The `Millisecond` unit
    Millisecond,
    /// The `Second` unit
    Second,
    /// The `Minute` unit
    Minute,
    /// The `Hour` unit
    Hour,
    /// The `Day` unit
    Day,
    /// The `Week` unit
    Week,
    /// The `Month` unit
    Month,
    /// The `Quarter` unit
    Quarter,
    /// The `Year` unit
    Year,
}

impl Unit {
    /// Returns the nanosecond amount of a fixed-ratio unit.
    #[must_use]
    pub const fn as_nanoseconds(&self) -> Option<u64> {
        match self {
            Self::Year | Self::Quarter | Self::Month => None,
            Self::Week => Some(7 * NS_PER_DAY),
            Self::Day => Some(NS_PER_DAY),
            Self::Hour => Some(3_600_000_000_000),
            Self::Minute => Some(60_000_000_000),
            Self::Second => Some(1_000_000_000),
            Self::Millisecond => Some(1_000_000),
            Self::Microsecond => Some(1_000),
            Self::Nanosecond => Some(1),
        }
    }

    /// Returns the month amount of a calendar unit.
    #[must_use]
    pub const fn as_months(&self) -> Option<i64> {
        match self {
            Self::Year => Some(12),
            Self::Quarter => Some(3),
            Self::Month => Some(1),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_calendar_unit(&self) -> bool {
        matches!(self, Self::Year | Self::Quarter | Self::Month)
    }
}

impl FromStr for Unit {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(Self::Year),
            "quarter" | "quarters" => Ok(Self::Quarter),
            "month" | "months" => Ok(Self::Month),
            "week" | "weeks" => Ok(Self::Week),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            "microsecond" | "microseconds" => Ok(Self::Microsecond),
            "nanosecond" | "nanoseconds" => Ok(Self::Nanosecond),
            _ => Err(PeriodError::shape().with_enum(ErrorMessage::UnitNotValid)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => "year",
            Self::Quarter => "quarter",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
            Self::Microsecond => "microsecond",
            Self::Nanosecond => "nanosecond",
        }
        .fmt(f)
    }
}

// ==== RoundingMode ====

/// Declares the specified `RoundingMode` for the operation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Ceil RoundingMode
    Ceil,
    /// Floor RoundingMode
    Floor,
    /// Expand RoundingMode
    Expand,
    /// Truncate RoundingMode - Default
    #[default]
    Trunc,
    /// HalfCeil RoundingMode
    HalfCeil,
    /// HalfFloor RoundingMode
    HalfFloor,
    /// HalfExpand RoundingMode
    HalfExpand,
    /// HalfTruncate RoundingMode
    HalfTrunc,
    /// HalfEven RoundingMode
    HalfEven,
}

/// The `UnsignedRoundingMode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsignedRoundingMode {
    /// `Infinity` `RoundingMode`
    Infinity,
    /// `Zero` `RoundingMode`
    Zero,
    /// `HalfInfinity` `RoundingMode`
    HalfInfinity,
    /// `HalfZero` `RoundingMode`
    HalfZero,
    /// `HalfEven` `RoundingMode`
    HalfEven,
}

impl RoundingMode {
    #[inline]
    #[must_use]
    /// Returns the `UnsignedRoundingMode`
    pub const fn get_unsigned_round_mode(self, is_positive: bool) -> UnsignedRoundingMode {
        use RoundingMode::{
            Ceil, Expand, Floor, HalfCeil, HalfEven, HalfExpand, HalfFloor, HalfTrunc, Trunc,
        };

        match self {
            Ceil if is_positive => UnsignedRoundingMode::Infinity,
            Ceil | Trunc => UnsignedRoundingMode::Zero,
            Floor if is_positive => UnsignedRoundingMode::Zero,
            Floor | Expand => UnsignedRoundingMode::Infinity,
            HalfCeil if is_positive => UnsignedRoundingMode::HalfInfinity,
            HalfCeil | HalfTrunc => UnsignedRoundingMode::HalfZero,
            HalfFloor if is_positive => UnsignedRoundingMode::HalfZero,
            HalfFloor | HalfExpand => UnsignedRoundingMode::HalfInfinity,
            HalfEven => UnsignedRoundingMode::HalfEven,
        }
    }
}

impl FromStr for RoundingMode {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceil" => Ok(Self::Ceil),
            "floor" => Ok(Self::Floor),
            "expand" => Ok(Self::Expand),
            "trunc" => Ok(Self::Trunc),
            "halfCeil" => Ok(Self::HalfCeil),
            "halfFloor" => Ok(Self::HalfFloor),
            "halfExpand" | "round" => Ok(Self::HalfExpand),
            "halfTrunc" => Ok(Self::HalfTrunc),
            "halfEven" => Ok(Self::HalfEven),
            _ => Err(PeriodError::shape().with_enum(ErrorMessage::RoundingModeNotValid)),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Expand => "expand",
            Self::Trunc => "trunc",
            Self::HalfCeil => "halfCeil",
            Self::HalfFloor => "halfFloor",
            Self::HalfExpand => "halfExpand",
            Self::HalfTrunc => "halfTrunc",
            Self::HalfEven => "halfEven",
        }
        .fmt(f)
    }
}

/// Parses a `PartsOptions` field from its string form, as received from an
/// untyped caller.
pub fn parse_option<T: FromStr<Err = PeriodError>>(value: Option<&str>) -> PeriodResult<Option<T>> {
    value.map(T::from_str).transpose()
}

#[cfg(test)]
mod tests {
    use super::{parse_option, PartsOptions, ResolvedPartsOptions, RoundingMode, Unit};
    use crate::error::ErrorKind;
    use alloc::string::ToString;
    use core::str::FromStr;

    #[test]
    fn unit_ordering() {
        assert!(Unit::Year > Unit::Quarter);
        assert!(Unit::Quarter > Unit::Month);
        assert!(Unit::Month > Unit::Week);
        assert!(Unit::Week > Unit::Day);
        assert!(Unit::Day > Unit::Nanosecond);
        assert!(Unit::Quarter.is_calendar_unit());
        assert!(!Unit::Week.is_calendar_unit());
        assert_eq!(Unit::Week.as_nanoseconds(), Some(604_800_000_000_000));
        assert_eq!(Unit::Quarter.as_months(), Some(3));
    }

    #[test]
    fn unit_strings() {
        assert_eq!(Unit::from_str("quarters").unwrap(), Unit::Quarter);
        assert_eq!(Unit::Millisecond.to_string(), "millisecond");
        let err = Unit::from_str("fortnight").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn rounding_mode_strings() {
        assert_eq!(RoundingMode::default(), RoundingMode::Trunc);
        assert_eq!(
            RoundingMode::from_str("round").unwrap(),
            RoundingMode::HalfExpand
        );
        assert_eq!(RoundingMode::HalfEven.to_string(), "halfEven");
        assert!(RoundingMode::from_str("nearest").is_err());
    }

    #[test]
    fn option_strings() {
        let unit = parse_option::<Unit>(Some("hours")).unwrap();
        assert_eq!(unit, Some(Unit::Hour));
        assert_eq!(parse_option::<Unit>(None).unwrap(), None);
        assert!(parse_option::<RoundingMode>(Some("sideways")).is_err());
    }

    #[test]
    fn resolve_options() {
        let resolved = ResolvedPartsOptions::from(PartsOptions::default());
        assert!(resolved.with_years);
        assert_eq!(resolved.smallest_unit, Unit::Nanosecond);
        assert_eq!(resolved.rounding_mode, RoundingMode::Trunc);

        let resolved = ResolvedPartsOptions::from(
            PartsOptions::new()
                .with_largest_unit(Unit::Quarter)
                .with_smallest_unit(Unit::Week),
        );
        assert!(!resolved.with_years);
        assert_eq!(resolved.smallest_unit, Unit::Day);
        assert!(!resolved.reports(Unit::Hour));
        assert!(resolved.reports(Unit::Month));
        assert!(resolved.reports(Unit::Day));
    }
}
