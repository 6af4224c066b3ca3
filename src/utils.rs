//! Utility date and time equations for the proleptic Gregorian calendar.
//!
//! Conversions between epoch days and calendar dates use the Euclidean
//! affine functions of Neri and Schneider, shifted so the computational
//! calendar covers the full instant range.

// The computational calendar starts on March 1st of year 0, 719_468 days
// before the Unix epoch. Shifting by 680 cycles of 400 years keeps every
// epoch day in range (|epoch_days| <= 100_000_001) non-negative.
const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;
const SHIFT_CYCLES: i64 = 680;
const SHIFT_DAYS: i64 = EPOCH_COMPUTATIONAL_RATA_DIE + DAYS_IN_A_400Y_CYCLE * SHIFT_CYCLES;
const SHIFT_YEARS: i64 = 400 * SHIFT_CYCLES;

/// Returns the days since the Unix epoch of a Gregorian date.
pub(crate) fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    // Move January and February to the end of the previous year.
    let j = i64::from(month <= 2);
    let year = i64::from(year) - j;
    let month = i64::from(month) + 12 * j;
    let century = year.div_euclid(100);

    let y_star = (1461 * year).div_euclid(4) - century + century.div_euclid(4);
    let m_star = (979 * month - 2919).div_euclid(32);
    y_star + m_star + i64::from(day) - 1 - EPOCH_COMPUTATIONAL_RATA_DIE
}

/// Returns the Gregorian year, month, and day of a day since the Unix epoch.
pub(crate) fn gregorian_ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    debug_assert!(epoch_days.abs() <= 100_000_001);
    let rata_die = (epoch_days + SHIFT_DAYS) as u64;

    // Century and day of century
    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE as u64;
    let n_two = (n_one % DAYS_IN_A_400Y_CYCLE as u64) | 3;

    // Year of century and day of year
    let year_of_century = (376_287_347 * n_two) >> 39;
    let day_of_year = (n_two - 1461 * year_of_century) / 4;

    // Month and day in the computational calendar
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three >> 16;
    let day = (n_three & 0xFFFF) / 2141;

    // Map back from a March based year.
    let j = u64::from(day_of_year >= 306);
    let year = (100 * century + year_of_century + j) as i64 - SHIFT_YEARS;
    let month = month - 12 * j;

    (year as i32, month as u8, day as u8 + 1)
}

#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` (1-12) of `year`.
#[inline]
pub(crate) fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        epoch_days_from_gregorian_date, gregorian_ymd_from_epoch_days, is_leap_year,
        iso_days_in_month,
    };

    #[test]
    fn epoch_day_conversions() {
        let cases = [
            ((1970, 1, 1), 0),
            ((1969, 12, 31), -1),
            ((2000, 2, 29), 11_016),
            ((2000, 3, 1), 11_017),
            ((2020, 3, 1), 18_322),
            ((1900, 3, 1), -25_508),
            ((-1, 12, 31), -719_529),
            ((275_760, 9, 13), 100_000_000),
            ((-271_821, 4, 20), -100_000_000),
        ];
        for ((year, month, day), epoch_days) in cases {
            assert_eq!(
                epoch_days_from_gregorian_date(year, month, day),
                epoch_days,
                "{year}-{month}-{day}"
            );
            assert_eq!(gregorian_ymd_from_epoch_days(epoch_days), (year, month, day));
        }
    }

    #[test]
    fn epoch_day_sweep() {
        let mut expected = (1999, 1, 1);
        for epoch_days in 10_592..11_688 {
            let ymd = gregorian_ymd_from_epoch_days(epoch_days);
            assert_eq!(ymd, expected);
            assert_eq!(epoch_days_from_gregorian_date(ymd.0, ymd.1, ymd.2), epoch_days);

            let (year, month, day) = expected;
            expected = if day < iso_days_in_month(year, month) {
                (year, month, day + 1)
            } else if month < 12 {
                (year, month + 1, 1)
            } else {
                (year + 1, 1, 1)
            };
        }
    }

    #[test]
    fn month_lengths() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert_eq!(iso_days_in_month(2023, 2), 28);
        assert_eq!(iso_days_in_month(2024, 2), 29);
        assert_eq!(iso_days_in_month(2024, 4), 30);
        assert_eq!(iso_days_in_month(2024, 12), 31);
    }
}
