//! The core value types of `period_rs`.

pub(crate) mod instant;
pub(crate) mod period;

#[doc(inline)]
pub use instant::{Instant, InstantLike};
#[doc(inline)]
pub use period::{PartialPeriod, Period, PeriodLike, PeriodSlots};
