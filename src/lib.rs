//! The `period_rs` crate implements a calendar-aware `Period`: an immutable
//! amount of elapsed calendar-plus-clock time.
//!
//! ```rust
//! use period_rs::{options::Unit, Period};
//! use core::str::FromStr;
//!
//! let period = Period::from_str("P1Y2M10DT2H30M").unwrap();
//! assert_eq!(period.years(), 1);
//! assert_eq!(period.months(), 2);
//! assert_eq!(period.days(), 10);
//! assert_eq!(period.to_string(), "P1Y2M10DT2H30M");
//!
//! let ninety = Period::of(90.0, Unit::Minute).unwrap();
//! assert_eq!((ninety.hours(), ninety.minutes()), (1, 30));
//! ```
//!
//! A `Period` is made of two tiers that carry independent signs:
//!
//! - the calendar tier, `years` and `months`, balanced with a fixed ratio
//!   of twelve months per year.
//! - the clock tier, `days` through `nanoseconds`, balanced exactly at
//!   nanosecond resolution with a day fixed at 24 hours.
//!
//! Because the tiers are independent, "one month minus three days" is a
//! valid period and is written as `P1M-3D`.
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/boa-dev/boa/main/assets/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/boa-dev/boa/main/assets/logo.svg"
)]
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    clippy::let_unit_value,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iso;
pub mod options;
pub mod parsers;
pub mod primitive;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;

#[doc(hidden)]
pub(crate) mod rounding;
#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::PeriodError;

/// The `period_rs` result type
pub type PeriodResult<T> = Result<T, PeriodError>;

pub mod partial {
    //! Partial period records.
    //!
    //! A [`PartialPeriod`] is the structured, possibly sparse, form of a
    //! period. It is accepted as input and produced by projections and the
    //! parsers.
    pub use crate::builtins::core::PartialPeriod;
}

pub mod time {
    pub use crate::builtins::core::instant::EpochNanoseconds;
}

pub use crate::builtins::core::{Instant, InstantLike, Period, PeriodLike, PeriodSlots};

/// The character printed before a negative period.
pub const NEGATIVE_CHAR: char = '-';

/// The character separating whole seconds from their fraction.
pub const SEPARATOR_CHAR: char = '.';

/// A library specific trait for unwrapping assertions.
pub(crate) trait PeriodUnwrap {
    type Output;

    /// `period_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn period_unwrap(self) -> PeriodResult<Self::Output>;
}

impl<T> PeriodUnwrap for Option<T> {
    type Output = T;

    fn period_unwrap(self) -> PeriodResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(PeriodError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! period_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::PeriodError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::PeriodError::assert());
        }
    };
}

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl Sign {
    /// Returns the sign of an integer value.
    pub(crate) fn of<T: Ord + Default>(value: &T) -> Self {
        match value.cmp(&T::default()) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }

    /// Coerces the current `Sign` to be either negative or positive.
    pub(crate) fn as_sign_multiplier(&self) -> i8 {
        if matches!(self, Self::Zero) {
            return 1;
        }
        *self as i8
    }
}

// Relevant numeric constants
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// Months per year constant.
pub const MONTHS_PER_YEAR: i64 = 12;
/// Max Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY as i128 * 100_000_000i128;
/// Min Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
/// The largest integer an `f64` holds exactly: 2^53 - 1.
pub(crate) const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
