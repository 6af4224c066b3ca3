use crate::{error::ErrorMessage, time::EpochNanoseconds, PeriodError, PeriodResult};
use web_time::{SystemTime, UNIX_EPOCH};

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> PeriodResult<EpochNanoseconds> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| PeriodError::general(ErrorMessage::SystemTimeError.to_str()))?;
    EpochNanoseconds::try_from(elapsed.as_nanos() as i128)
}
