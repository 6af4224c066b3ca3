//! This module implements the `PeriodError`.

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

/// `PeriodError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// A scalar component could not be coerced to a finite number.
    Amount,
    /// A record or option value did not have the expected shape.
    Shape,
    /// A multiplier was non-finite or truncated to zero.
    Multiplier,
    /// A result fell outside of the representable range.
    Range,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Amount => "InvalidAmount",
            Self::Shape => "InvalidShape",
            Self::Multiplier => "InvalidMultiplier",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `period_rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl PeriodError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an InvalidAmount error.
    #[inline]
    #[must_use]
    pub const fn amount() -> Self {
        Self::new(ErrorKind::Amount)
    }

    /// Create an InvalidShape error.
    #[inline]
    #[must_use]
    pub const fn shape() -> Self {
        Self::new(ErrorKind::Shape)
    }

    /// Create an InvalidMultiplier error.
    #[inline]
    #[must_use]
    pub const fn multiplier() -> Self {
        Self::new(ErrorKind::Multiplier)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// The InvalidAmount error raised for a non-finite component.
    #[inline]
    #[must_use]
    pub(crate) fn non_finite(label: &str) -> Self {
        Self::amount().with_message(format!("The {label} must be a finite number"))
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Add a predefined message to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = Cow::Borrowed(msg.to_str());
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PeriodError {}

/// Fixed messages attached with [`PeriodError::with_enum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    MultiplierNotFinite,
    MultiplierIsZero,
    PeriodNotFinite,
    PeriodOutOfRange,
    MonthsOutOfRange,
    InstantOutOfRange,
    InvalidIsoDate,
    InvalidIsoTime,
    UnitNotValid,
    RoundingModeNotValid,
    SystemTimeError,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::MultiplierNotFinite => "The multiplier must be a finite number",
            Self::MultiplierIsZero => "The multiplier must be greater or less than zero",
            Self::PeriodNotFinite => "The period must be a finite number",
            Self::PeriodOutOfRange => "The clock portion of the period exceeds the maximum range",
            Self::MonthsOutOfRange => "The total number of months exceeds the maximum range",
            Self::InstantOutOfRange => "Instant nanoseconds are not within a valid epoch range.",
            Self::InvalidIsoDate => "Date fields are not a valid ISO date.",
            Self::InvalidIsoTime => "Time fields are not a valid ISO time.",
            Self::UnitNotValid => "The unit is not a valid unit name",
            Self::RoundingModeNotValid => "The rounding mode is not a valid rounding mode name",
            Self::SystemTimeError => "Error fetching system time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, ErrorMessage, PeriodError};
    use alloc::string::ToString;

    #[test]
    fn error_display() {
        let err = PeriodError::non_finite("years");
        assert_eq!(err.kind(), ErrorKind::Amount);
        assert_eq!(err.to_string(), "InvalidAmount: The years must be a finite number");

        let err = PeriodError::multiplier().with_enum(ErrorMessage::MultiplierIsZero);
        assert_eq!(
            err.to_string(),
            "InvalidMultiplier: The multiplier must be greater or less than zero"
        );

        assert_eq!(PeriodError::shape().to_string(), "InvalidShape");
    }
}
