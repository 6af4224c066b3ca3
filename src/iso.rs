//! This module implements the ISO calendar records used to read the
//! calendar fields of an instant.
//!
//! An instant is read in UTC; time zones are not considered.

use crate::{
    error::ErrorMessage, time::EpochNanoseconds, utils, PeriodError, PeriodResult, NS_PER_DAY,
};
use num_traits::Euclid;

/// `IsoDateTime` is the record of an `IsoDate` and an `IsoTime`.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Creates a new validated `IsoDateTime` that is within the instant range.
    pub fn try_new(date: IsoDate, time: IsoTime) -> PeriodResult<Self> {
        let result = Self::new_unchecked(date, time);
        result.as_nanoseconds()?;
        Ok(result)
    }

    /// Creates an `IsoDateTime` from epoch nanoseconds, read in UTC.
    pub(crate) fn from_epoch_nanos(nanos: &EpochNanoseconds) -> Self {
        let (epoch_days, remainder) = nanos.0.div_rem_euclid(&i128::from(NS_PER_DAY));
        let (year, month, day) = utils::gregorian_ymd_from_epoch_days(epoch_days as i64);
        Self::new_unchecked(
            IsoDate::new_unchecked(year, month, day),
            IsoTime::from_nanosecond_of_day(remainder as u64),
        )
    }

    /// Returns the epoch nanoseconds of this date time in UTC.
    pub fn as_nanoseconds(&self) -> PeriodResult<EpochNanoseconds> {
        let nanos = i128::from(self.date.to_epoch_days()) * i128::from(NS_PER_DAY)
            + i128::from(self.time.nanosecond_of_day());
        EpochNanoseconds::try_from(nanos)
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` is the record of an ISO year, month, and day.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting a month or day that does not exist.
    pub fn try_new(year: i32, month: u8, day: u8) -> PeriodResult<Self> {
        if !(1..=12).contains(&month) || !(1..=utils::iso_days_in_month(year, month)).contains(&day)
        {
            return Err(PeriodError::range().with_enum(ErrorMessage::InvalidIsoDate));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    #[inline]
    pub(crate) fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_gregorian_date(self.year, self.month, self.day)
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record of the wall-clock fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoTime {
    pub hour: u8,         // 0..=23
    pub minute: u8,       // 0..=59
    pub second: u8,       // 0..=59
    pub millisecond: u16, // 0..=999
    pub microsecond: u16, // 0..=999
    pub nanosecond: u16,  // 0..=999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    /// Creates a new `IsoTime`, rejecting any field outside of its range.
    pub fn try_new(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> PeriodResult<Self> {
        if hour > 23
            || minute > 59
            || second > 59
            || millisecond > 999
            || microsecond > 999
            || nanosecond > 999
        {
            return Err(PeriodError::range().with_enum(ErrorMessage::InvalidIsoTime));
        }
        Ok(Self::new_unchecked(
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        ))
    }

    fn from_nanosecond_of_day(nanos: u64) -> Self {
        let (hour, rem) = (nanos / 3_600_000_000_000, nanos % 3_600_000_000_000);
        let (minute, rem) = (rem / 60_000_000_000, rem % 60_000_000_000);
        let (second, rem) = (rem / 1_000_000_000, rem % 1_000_000_000);
        let (millisecond, rem) = (rem / 1_000_000, rem % 1_000_000);
        let (microsecond, nanosecond) = (rem / 1_000, rem % 1_000);
        Self::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            millisecond as u16,
            microsecond as u16,
            nanosecond as u16,
        )
    }

    fn nanosecond_of_day(&self) -> u64 {
        u64::from(self.hour) * 3_600_000_000_000
            + u64::from(self.minute) * 60_000_000_000
            + u64::from(self.second) * 1_000_000_000
            + u64::from(self.millisecond) * 1_000_000
            + u64::from(self.microsecond) * 1_000
            + u64::from(self.nanosecond)
    }
}

/// Returns the number of days in `month` (1-12) of `year`.
#[inline]
pub fn iso_days_in_month(year: i32, month: u8) -> u8 {
    utils::iso_days_in_month(year, month)
}

#[cfg(test)]
mod tests {
    use super::{IsoDate, IsoDateTime, IsoTime};
    use crate::{error::ErrorKind, time::EpochNanoseconds};

    #[test]
    fn date_validation() {
        assert!(IsoDate::try_new(2024, 2, 29).is_ok());
        assert!(IsoDate::try_new(2023, 2, 29).is_err());
        assert!(IsoDate::try_new(2023, 13, 1).is_err());
        assert!(IsoDate::try_new(2023, 4, 0).is_err());
        assert!(IsoTime::try_new(23, 59, 59, 999, 999, 999).is_ok());
        let err = IsoTime::try_new(24, 0, 0, 0, 0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn epoch_nanos_round_trip() {
        let date = IsoDate::try_new(1969, 7, 20).unwrap();
        let time = IsoTime::try_new(20, 17, 40, 123, 456, 789).unwrap();
        let iso = IsoDateTime::try_new(date, time).unwrap();
        let nanos = iso.as_nanoseconds().unwrap();
        assert_eq!(nanos.as_i128(), -14_182_939_876_543_211);
        assert_eq!(IsoDateTime::from_epoch_nanos(&nanos), iso);

        let before_epoch = IsoDateTime::from_epoch_nanos(&EpochNanoseconds(-1));
        assert_eq!(before_epoch.date, IsoDate::try_new(1969, 12, 31).unwrap());
        assert_eq!(
            before_epoch.time,
            IsoTime::try_new(23, 59, 59, 999, 999, 999).unwrap()
        );
    }

    #[test]
    fn date_time_range() {
        let date = IsoDate::try_new(275_760, 9, 13).unwrap();
        assert!(IsoDateTime::try_new(date, IsoTime::default()).is_ok());
        let time = IsoTime::try_new(0, 0, 0, 0, 0, 1).unwrap();
        assert!(IsoDateTime::try_new(date, time).is_err());
    }
}
