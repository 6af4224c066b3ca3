//! The calendar difference between two instants.

use crate::{
    builtins::core::{Instant, InstantLike},
    iso::iso_days_in_month,
    period_assert, PeriodResult, MONTHS_PER_YEAR,
};

use super::{CalendarPeriod, ClockPeriod, Period};

impl Period {
    /// Returns the period separating `one` from `two`.
    ///
    /// Both endpoints may be any [`InstantLike`] value: an [`Instant`], an
    /// ISO date time read as UTC, or milliseconds since the Unix epoch.
    ///
    /// The calendar fields of both instants are subtracted from the finest
    /// to the coarsest, borrowing from the next coarser field whenever a
    /// difference is negative. A day borrow takes the length of the month
    /// before the later instant's month. The result is negative when `one`
    /// is after `two`.
    ///
    /// ```rust
    /// use period_rs::{Instant, Period};
    ///
    /// // 2023-01-15T00:00:00Z and 2023-03-20T06:00:00Z
    /// let start = Instant::from_epoch_seconds(1_673_740_800).unwrap();
    /// let end = Instant::from_epoch_seconds(1_679_292_000).unwrap();
    ///
    /// let period = Period::between(&start, &end).unwrap();
    /// assert_eq!(period.to_string(), "P2M5DT6H");
    /// assert_eq!(Period::between(&end, &start).unwrap(), period.negated());
    /// ```
    pub fn between(
        one: impl Into<InstantLike>,
        two: impl Into<InstantLike>,
    ) -> PeriodResult<Self> {
        let one = Instant::from_instant_like(one)?;
        let two = Instant::from_instant_like(two)?;
        let (earlier, later, reversed) = if one > two {
            (two, one, true)
        } else {
            (one, two, false)
        };
        let start = earlier.to_iso();
        let end = later.to_iso();

        let mut nanoseconds = i64::from(end.time.nanosecond) - i64::from(start.time.nanosecond);
        let mut microseconds =
            i64::from(end.time.microsecond) - i64::from(start.time.microsecond);
        let mut milliseconds =
            i64::from(end.time.millisecond) - i64::from(start.time.millisecond);
        let mut seconds = i64::from(end.time.second) - i64::from(start.time.second);
        let mut minutes = i64::from(end.time.minute) - i64::from(start.time.minute);
        let mut hours = i64::from(end.time.hour) - i64::from(start.time.hour);
        let mut days = i64::from(end.date.day) - i64::from(start.date.day);
        let mut months = i64::from(end.date.month) - i64::from(start.date.month);
        let mut years = i64::from(end.date.year) - i64::from(start.date.year);

        borrow(&mut nanoseconds, &mut microseconds, 1_000);
        borrow(&mut microseconds, &mut milliseconds, 1_000);
        borrow(&mut milliseconds, &mut seconds, 1_000);
        borrow(&mut seconds, &mut minutes, 60);
        borrow(&mut minutes, &mut hours, 60);
        borrow(&mut hours, &mut days, 24);

        if days < 0 {
            let (year, month) = match end.date.month {
                1 => (end.date.year - 1, 12),
                month => (end.date.year, month - 1),
            };
            let borrowed = i64::from(iso_days_in_month(year, month));
            days += borrowed;
            // The start day does not exist in the borrowed month.
            let start_day = i64::from(start.date.day);
            if borrowed < start_day {
                days += start_day - borrowed;
            }
            months -= 1;
        }
        borrow(&mut months, &mut years, MONTHS_PER_YEAR);
        period_assert!(
            days >= 0 && (0..MONTHS_PER_YEAR).contains(&months),
            "unbalanced difference of {months} months and {days} days"
        );

        let calendar = CalendarPeriod::try_from_total_months(years * MONTHS_PER_YEAR + months)?;
        let clock = ClockPeriod {
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
            nanoseconds,
        };
        let period = Self::from_tiers(calendar, clock.to_normalized());

        #[cfg(feature = "log")]
        log::debug!("period between {earlier:?} and {later:?} is {period}");

        Ok(if reversed { period.negated() } else { period })
    }
}

#[inline]
fn borrow(field: &mut i64, coarser: &mut i64, ratio: i64) {
    if *field < 0 {
        *field += ratio;
        *coarser -= 1;
    }
}
