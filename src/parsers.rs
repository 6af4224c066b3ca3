//! This module implements period string parsing and formatting.
//!
//! The accepted text is an ISO 8601 style period:
//!
//! ```text
//! [sign] P [n Y] [n Q] [n M] [n W] [n D] [T [n H] [n M] [n[.fraction] S]]
//! ```
//!
//! Every numeral may carry its own sign so that periods whose calendar and
//! clock tiers disagree in sign, such as `P1M-3D`, survive a round trip.

use crate::{builtins::core::PartialPeriod, primitive::FiniteF64, Sign, NEGATIVE_CHAR, SEPARATOR_CHAR};
use core::{iter::Peekable, str::Chars};
use writeable::{impl_display_with_writeable, Writeable};

// ==== Parsing ====

/// The grammar a period string is recognized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodGrammar {
    /// Every designator with integral values only.
    Units,
    /// The clock section only: `PT` followed by hours, minutes, and
    /// fractional seconds.
    Time,
    /// Weeks, days, and the clock section with fractional seconds.
    Duration,
    /// Every designator with fractional seconds.
    Full,
}

impl PeriodGrammar {
    fn allows(self, designator: Designator) -> bool {
        match self {
            Self::Units | Self::Full => true,
            Self::Time => designator >= Designator::Hour,
            Self::Duration => designator >= Designator::Week,
        }
    }

    fn allows_fraction(self) -> bool {
        self != Self::Units
    }
}

/// Designators in the order they must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Designator {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Designator {
    fn date_from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'Y' => Some(Self::Year),
            'Q' => Some(Self::Quarter),
            'M' => Some(Self::Month),
            'W' => Some(Self::Week),
            'D' => Some(Self::Day),
            _ => None,
        }
    }

    fn time_from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'H' => Some(Self::Hour),
            'M' => Some(Self::Minute),
            'S' => Some(Self::Second),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Numeral {
    negative: bool,
    whole: u64,
    /// The fraction in nanoseconds.
    fraction: Option<u32>,
}

impl Numeral {
    fn whole_value(&self) -> FiniteF64 {
        signed_value(self.negative, self.whole as f64)
    }

    fn fraction_value(&self) -> Option<FiniteF64> {
        self.fraction
            .map(|ns| signed_value(self.negative, f64::from(ns)))
    }
}

/// Recognizes `source` as a period string, returning its raw parts.
///
/// `None` is returned when `source` does not match `grammar`; the caller
/// decides whether that is an error.
pub fn parse_period(source: &str, grammar: PeriodGrammar) -> Option<PartialPeriod> {
    let mut chars = source.chars().peekable();
    let negative = parse_sign(&mut chars);
    if !chars.next().is_some_and(|ch| ch.eq_ignore_ascii_case(&'P')) {
        return None;
    }

    let mut record = PartialPeriod::default();
    let mut last = None;

    while chars.peek().is_some_and(|ch| !ch.eq_ignore_ascii_case(&'T')) {
        let numeral = parse_numeral(&mut chars, false)?;
        let designator = Designator::date_from_char(chars.next()?)?;
        set_component(&mut record, &mut last, designator, numeral, grammar)?;
    }

    // Anything left starts the clock section.
    if chars.next().is_some() {
        let date_last = last;
        while chars.peek().is_some() {
            let numeral = parse_numeral(&mut chars, grammar.allows_fraction())?;
            let designator = Designator::time_from_char(chars.next()?)?;
            if numeral.fraction.is_some() && designator != Designator::Second {
                return None;
            }
            set_component(&mut record, &mut last, designator, numeral, grammar)?;
        }
        if last == date_last {
            return None;
        }
    }

    last?;

    Some(if negative { record.negated() } else { record })
}

fn set_component(
    record: &mut PartialPeriod,
    last: &mut Option<Designator>,
    designator: Designator,
    numeral: Numeral,
    grammar: PeriodGrammar,
) -> Option<()> {
    if last.is_some_and(|previous| designator <= previous) || !grammar.allows(designator) {
        return None;
    }
    let value = Some(numeral.whole_value());
    match designator {
        Designator::Year => record.years = value,
        Designator::Quarter => record.quarters = value,
        Designator::Month => record.months = value,
        Designator::Week => record.weeks = value,
        Designator::Day => record.days = value,
        Designator::Hour => record.hours = value,
        Designator::Minute => record.minutes = value,
        Designator::Second => {
            record.seconds = value;
            record.nanoseconds = numeral.fraction_value();
        }
    }
    *last = Some(designator);
    Some(())
}

fn parse_sign(chars: &mut Peekable<Chars<'_>>) -> bool {
    match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    }
}

fn parse_numeral(chars: &mut Peekable<Chars<'_>>, allow_fraction: bool) -> Option<Numeral> {
    let negative = parse_sign(chars);
    let whole = parse_digits(chars)?;
    let fraction = if chars.peek() == Some(&SEPARATOR_CHAR) {
        if !allow_fraction {
            return None;
        }
        chars.next();
        Some(parse_fraction(chars)?)
    } else {
        None
    };
    Some(Numeral {
        negative,
        whole,
        fraction,
    })
}

fn parse_digits(chars: &mut Peekable<Chars<'_>>) -> Option<u64> {
    let mut value: Option<u64> = None;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .checked_mul(10)?
                .checked_add(u64::from(digit))?,
        );
    }
    value
}

/// Parses one to nine fraction digits as nanoseconds.
fn parse_fraction(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    let mut nanoseconds = 0;
    let mut count = 0;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        count += 1;
        if count > 9 {
            return None;
        }
        nanoseconds = nanoseconds * 10 + digit;
    }
    if count == 0 {
        return None;
    }
    Some(nanoseconds * 10u32.pow(9 - count))
}

fn signed_value(negative: bool, value: f64) -> FiniteF64 {
    if negative && value != 0.0 {
        FiniteF64(-value)
    } else {
        FiniteF64(value)
    }
}

// ==== Formatting ====

/// The body written for a period whose reported fields are all zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ZeroDesignator {
    /// `P0D`
    Days,
    /// `PT0H`
    Hours,
    /// `PT0M`
    Minutes,
    /// `PT0S`
    #[default]
    Seconds,
}

impl Writeable for ZeroDesignator {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str(match self {
            Self::Days => "0D",
            Self::Hours => "T0H",
            Self::Minutes => "T0M",
            Self::Seconds => "T0S",
        })
    }
}

/// A period ready to be written as text.
///
/// Every field holds the numeral as it is written: fields are non-negative
/// unless their tier disagrees in sign with the rest of the period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormattablePeriod {
    /// The leading sign.
    pub sign: Sign,
    pub date: FormattableDateSection,
    pub time: FormattableTimeSection,
    /// Written instead of the body when every field is zero.
    pub empty: ZeroDesignator,
}

impl FormattablePeriod {
    fn is_zero(&self) -> bool {
        self.date.is_zero() && self.time.is_zero()
    }
}

impl Writeable for FormattablePeriod {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.is_zero() {
            sink.write_char('P')?;
            return self.empty.write_to(sink);
        }
        if self.sign == Sign::Negative {
            sink.write_char(NEGATIVE_CHAR)?;
        }
        sink.write_char('P')?;
        self.date.write_to(sink)?;
        self.time.write_to(sink)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormattableDateSection {
    pub years: i64,
    pub quarters: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
}

impl FormattableDateSection {
    fn is_zero(&self) -> bool {
        self.years == 0 && self.quarters == 0 && self.months == 0 && self.weeks == 0 && self.days == 0
    }
}

impl Writeable for FormattableDateSection {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        checked_write_i64_with_suffix(self.years, 'Y', sink)?;
        checked_write_i64_with_suffix(self.quarters, 'Q', sink)?;
        checked_write_i64_with_suffix(self.months, 'M', sink)?;
        checked_write_i64_with_suffix(self.weeks, 'W', sink)?;
        checked_write_i64_with_suffix(self.days, 'D', sink)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormattableTimeSection {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: FormattableSeconds,
}

impl FormattableTimeSection {
    fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds.is_zero()
    }
}

impl Writeable for FormattableTimeSection {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.is_zero() {
            return Ok(());
        }
        sink.write_char('T')?;
        checked_write_i64_with_suffix(self.hours, 'H', sink)?;
        checked_write_i64_with_suffix(self.minutes, 'M', sink)?;
        if self.seconds.is_zero() {
            return Ok(());
        }
        self.seconds.write_to(sink)
    }
}

/// Seconds and their sub-second fraction, written as one decimal numeral.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormattableSeconds {
    pub sign: Sign,
    pub seconds: u64,
    /// The fraction in nanoseconds.
    pub fraction: u32,
}

impl FormattableSeconds {
    /// Splits a signed nanosecond amount, keeping its sign when `signed`.
    pub(crate) fn from_nanoseconds(nanoseconds: i128, signed: bool) -> Self {
        let magnitude = nanoseconds.unsigned_abs();
        Self {
            sign: if signed && nanoseconds < 0 {
                Sign::Negative
            } else {
                Sign::Positive
            },
            seconds: (magnitude / 1_000_000_000) as u64,
            fraction: (magnitude % 1_000_000_000) as u32,
        }
    }

    fn is_zero(&self) -> bool {
        self.seconds == 0 && self.fraction == 0
    }
}

impl Writeable for FormattableSeconds {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.sign == Sign::Negative {
            sink.write_char(NEGATIVE_CHAR)?;
        }
        self.seconds.write_to(sink)?;
        if self.fraction != 0 {
            sink.write_char(SEPARATOR_CHAR)?;
            let (digits, precision) = u32_to_digits(self.fraction);
            for digit in digits.iter().take(precision) {
                digit.write_to(sink)?;
            }
        }
        sink.write_char('S')
    }
}

/// Returns the nine digits of a nanosecond fraction and the number of
/// digits left once trailing zeros are dropped.
pub fn u32_to_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}

fn checked_write_i64_with_suffix<W: core::fmt::Write + ?Sized>(
    val: i64,
    suffix: char,
    sink: &mut W,
) -> core::fmt::Result {
    if val == 0 {
        return Ok(());
    }
    val.write_to(sink)?;
    sink.write_char(suffix)
}

impl_display_with_writeable!(FormattablePeriod);
impl_display_with_writeable!(FormattableSeconds);

#[cfg(test)]
mod tests {
    use super::{
        parse_period, FormattableDateSection, FormattablePeriod, FormattableSeconds,
        FormattableTimeSection, PeriodGrammar, ZeroDesignator,
    };
    use crate::{primitive::FiniteF64, Sign};
    use alloc::string::ToString;

    fn value(v: i32) -> Option<FiniteF64> {
        Some(FiniteF64::from(v))
    }

    #[test]
    fn parse_full_period() {
        let parts = parse_period("P1Y2Q3M4W5DT6H7M8.25S", PeriodGrammar::Full).unwrap();
        assert_eq!(parts.years, value(1));
        assert_eq!(parts.quarters, value(2));
        assert_eq!(parts.months, value(3));
        assert_eq!(parts.weeks, value(4));
        assert_eq!(parts.days, value(5));
        assert_eq!(parts.hours, value(6));
        assert_eq!(parts.minutes, value(7));
        assert_eq!(parts.seconds, value(8));
        assert_eq!(parts.milliseconds, None);
        assert_eq!(parts.nanoseconds, value(250_000_000));
    }

    #[test]
    fn parse_signs() {
        let parts = parse_period("-P1Y2M", PeriodGrammar::Full).unwrap();
        assert_eq!(parts.years, value(-1));
        assert_eq!(parts.months, value(-2));

        let parts = parse_period("P1M-3D", PeriodGrammar::Full).unwrap();
        assert_eq!(parts.months, value(1));
        assert_eq!(parts.days, value(-3));

        let parts = parse_period("PT-0.5S", PeriodGrammar::Full).unwrap();
        assert_eq!(parts.seconds, value(0));
        assert!(parts.seconds.unwrap().as_inner().is_sign_positive());
        assert_eq!(parts.nanoseconds, value(-500_000_000));

        let parts = parse_period("+p2dt3h", PeriodGrammar::Full).unwrap();
        assert_eq!(parts.days, value(2));
        assert_eq!(parts.hours, value(3));
    }

    #[test]
    fn parse_rejections() {
        for source in [
            "", "P", "PT", "P1DT", "1D", "P1", "PD", "P1M1Y", "P1D1D", "PT1S1M", "P1.5D",
            "PT1.5H", "PT1.S", "PT1.0000000001S", "P1D ", " P1D", "P1X", "P--1D",
            "P99999999999999999999D",
        ] {
            assert!(
                parse_period(source, PeriodGrammar::Full).is_none(),
                "{source:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_partial_grammars() {
        assert!(parse_period("P1Y2DT3H", PeriodGrammar::Units).is_some());
        assert!(parse_period("PT1.5S", PeriodGrammar::Units).is_none());

        assert!(parse_period("PT1H30M0.5S", PeriodGrammar::Time).is_some());
        assert!(parse_period("P1DT1H", PeriodGrammar::Time).is_none());
        assert!(parse_period("P1D", PeriodGrammar::Time).is_none());

        assert!(parse_period("P2W3DT0.001S", PeriodGrammar::Duration).is_some());
        assert!(parse_period("P1M", PeriodGrammar::Duration).is_none());
        assert!(parse_period("P1Q", PeriodGrammar::Duration).is_none());
    }

    #[test]
    fn format_sections() {
        let period = FormattablePeriod {
            sign: Sign::Negative,
            date: FormattableDateSection {
                years: 1,
                months: 2,
                days: 10,
                ..Default::default()
            },
            time: FormattableTimeSection {
                hours: 2,
                minutes: 0,
                seconds: FormattableSeconds::from_nanoseconds(1_500_000_000, false),
            },
            empty: ZeroDesignator::Seconds,
        };
        assert_eq!(period.to_string(), "-P1Y2M10DT2H1.5S");

        let zero = FormattablePeriod {
            empty: ZeroDesignator::Days,
            ..Default::default()
        };
        assert_eq!(zero.to_string(), "P0D");
    }

    #[test]
    fn format_seconds() {
        let seconds = FormattableSeconds::from_nanoseconds(-500_000_000, true);
        assert_eq!(seconds.to_string(), "-0.5S");
        let seconds = FormattableSeconds::from_nanoseconds(-500_000_000, false);
        assert_eq!(seconds.to_string(), "0.5S");
        let seconds = FormattableSeconds::from_nanoseconds(12_000_000_001, false);
        assert_eq!(seconds.to_string(), "12.000000001S");
        let seconds = FormattableSeconds::from_nanoseconds(3_000_000_000, false);
        assert_eq!(seconds.to_string(), "3S");
    }
}
