//! Implementation of the clock tier of a `Period`.

use crate::Sign;

use super::normalized::NormalizedClock;

/// The balanced days through nanoseconds of a `Period`.
///
/// Every non-zero field shares one sign, and each field below `days` is
/// smaller in magnitude than one of the next coarser unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ClockPeriod {
    pub(crate) days: i64,
    pub(crate) hours: i64,
    pub(crate) minutes: i64,
    pub(crate) seconds: i64,
    pub(crate) milliseconds: i64,
    pub(crate) microseconds: i64,
    pub(crate) nanoseconds: i64,
}

impl ClockPeriod {
    #[inline]
    pub(crate) fn to_normalized(&self) -> NormalizedClock {
        NormalizedClock::from_clock(self)
    }

    #[inline]
    pub(crate) fn sign(&self) -> Sign {
        self.to_normalized().sign()
    }
}

#[cfg(test)]
mod tests {
    use super::ClockPeriod;
    use crate::Sign;

    #[test]
    fn sign_of_unbalanced_fields() {
        let clock = ClockPeriod {
            days: 1,
            hours: -25,
            ..Default::default()
        };
        assert_eq!(clock.sign(), Sign::Negative);
        assert_eq!(clock.to_normalized().balance().hours, -1);
        assert_eq!(ClockPeriod::default().sign(), Sign::Zero);
    }
}
