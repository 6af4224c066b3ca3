//! An implementation of an absolute point in time.

use crate::{
    error::ErrorMessage,
    iso::IsoDateTime,
    PeriodError, PeriodResult, NS_MAX_INSTANT, NS_MIN_INSTANT,
};

/// Nanoseconds since the Unix epoch, within the valid instant range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochNanoseconds(pub(crate) i128);

impl TryFrom<i128> for EpochNanoseconds {
    type Error = PeriodError;
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        if !is_valid_epoch_nanos(&value) {
            return Err(PeriodError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(Self(value))
    }
}

impl EpochNanoseconds {
    #[inline]
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        self.0
    }
}

#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (NS_MIN_INSTANT..=NS_MAX_INSTANT).contains(nanos)
}

/// An exact point on the UTC timeline.
///
/// Instants are the endpoints accepted by [`Period::between`][crate::Period::between];
/// their calendar fields are always read in the ISO calendar at UTC.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(EpochNanoseconds);

impl From<EpochNanoseconds> for Instant {
    fn from(value: EpochNanoseconds) -> Self {
        Self(value)
    }
}

impl Instant {
    /// Creates an `Instant` from nanoseconds since the Unix epoch.
    #[inline]
    pub fn try_new(nanoseconds: i128) -> PeriodResult<Self> {
        Ok(Self::from(EpochNanoseconds::try_from(nanoseconds)?))
    }

    /// Creates an `Instant` from milliseconds since the Unix epoch.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> PeriodResult<Self> {
        Self::try_new(i128::from(epoch_milliseconds) * 1_000_000)
    }

    /// Creates an `Instant` from seconds since the Unix epoch.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> PeriodResult<Self> {
        Self::try_new(i128::from(epoch_seconds) * 1_000_000_000)
    }

    /// Creates an `Instant` from an ISO date time read as UTC.
    pub fn from_iso(iso: IsoDateTime) -> PeriodResult<Self> {
        iso.as_nanoseconds().map(Self::from)
    }

    /// Resolves any of the accepted instant-like shapes.
    pub fn from_instant_like(value: impl Into<InstantLike>) -> PeriodResult<Self> {
        match value.into() {
            InstantLike::Instant(instant) => Ok(instant),
            InstantLike::DateTime(iso) => Self::from_iso(iso),
            InstantLike::EpochMilliseconds(ms) => Self::from_epoch_milliseconds(ms),
        }
    }

    /// Returns the current system time.
    #[cfg(feature = "sys")]
    pub fn now() -> PeriodResult<Self> {
        crate::sys::get_system_nanoseconds().map(Self::from)
    }

    #[inline]
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> i128 {
        self.0.as_i128()
    }

    /// Returns the milliseconds since the epoch, floored.
    #[inline]
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        self.0.as_i128().div_euclid(1_000_000) as i64
    }

    /// Returns the calendar fields of this instant in UTC.
    #[inline]
    #[must_use]
    pub fn to_iso(&self) -> IsoDateTime {
        IsoDateTime::from_epoch_nanos(&self.0)
    }
}

/// The values that can stand for a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstantLike {
    /// An existing instant.
    Instant(Instant),
    /// An ISO date time, read as UTC.
    DateTime(IsoDateTime),
    /// Milliseconds since the Unix epoch.
    EpochMilliseconds(i64),
}

impl From<Instant> for InstantLike {
    fn from(value: Instant) -> Self {
        Self::Instant(value)
    }
}

impl From<&Instant> for InstantLike {
    fn from(value: &Instant) -> Self {
        Self::Instant(*value)
    }
}

impl From<IsoDateTime> for InstantLike {
    fn from(value: IsoDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<i64> for InstantLike {
    fn from(value: i64) -> Self {
        Self::EpochMilliseconds(value)
    }
}
