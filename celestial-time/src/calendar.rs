//! Gregorian calendar ↔ two-part Julian Date.
//!
//! The proleptic Gregorian calendar is used throughout, including for dates
//! before its 1582 introduction. Year 0 exists (astronomical year numbering),
//! so 1 BC is year 0 and 2 BC is year −1.
//!
//! ```
//! use celestial_time::calendar::{calendar_to_jd, jd_to_calendar};
//!
//! let (djm0, djm) = calendar_to_jd(2003, 6, 1).unwrap();
//! assert_eq!((djm0, djm), (2400000.5, 52791.0));
//!
//! let (y, m, d, fd) = jd_to_calendar(djm0, djm + 0.25).unwrap();
//! assert_eq!((y, m, d), (2003, 6, 1));
//! assert_eq!(fd, 0.25);
//! ```

use crate::constants::{MAX_CALENDAR_JD, MIN_CALENDAR_JD, MIN_CALENDAR_YEAR};
use crate::{TimeError, TimeResult};
use celestial_core::constants::MJD_ZERO_POINT;
use celestial_core::math::round_half_away;

const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a month, or an error for a month outside 1..=12.
pub fn days_in_month(year: i32, month: i32) -> TimeResult<i32> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidMonth(month));
    }
    let leap = month == 2 && is_leap_year(year);
    Ok(DAYS_IN_MONTH[(month - 1) as usize] + leap as i32)
}

/// The calendar date following `(year, month, day)`.
pub fn next_calendar_day(year: i32, month: i32, day: i32) -> TimeResult<(i32, i32, i32)> {
    if day < days_in_month(year, month)? {
        Ok((year, month, day + 1))
    } else if month < 12 {
        Ok((year, month + 1, 1))
    } else {
        Ok((year + 1, 1, 1))
    }
}

/// Gregorian calendar date to two-part Julian Date at 0h.
///
/// Returns `(2400000.5, mjd)`.
///
/// # Errors
///
/// | Status | Cause |
/// |--------|-------|
/// | −1 | year before −4799 |
/// | −2 | month outside 1..=12 |
/// | −3 | day outside the month |
pub fn calendar_to_jd(year: i32, month: i32, day: i32) -> TimeResult<(f64, f64)> {
    if year < MIN_CALENDAR_YEAR {
        return Err(TimeError::InvalidYear {
            year,
            reason: format!("calendar starts at year {}", MIN_CALENDAR_YEAR),
        });
    }
    if day < 1 || day > days_in_month(year, month)? {
        return Err(TimeError::InvalidDay { year, month, day });
    }

    let (year, month, day) = (year as i64, month as i64, day as i64);
    let my = (month - 14) / 12;
    let iypmy = year + my;

    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day
        - 2432076;

    Ok((MJD_ZERO_POINT, mjd as f64))
}

/// Two-part Julian Date to Gregorian `(year, month, day, day_fraction)`.
///
/// The two fractional parts are combined with compensated summation, so the
/// day fraction keeps the precision of the split date.
///
/// # Errors
///
/// [`TimeError::InvalidJulianDate`] (status −1) outside JD −68569.5 ..= 1e9.
pub fn jd_to_calendar(jd1: f64, jd2: f64) -> TimeResult<(i32, i32, i32, f64)> {
    let dj = jd1 + jd2;
    if !(MIN_CALENDAR_JD..=MAX_CALENDAR_JD).contains(&dj) {
        return Err(TimeError::InvalidJulianDate(dj));
    }

    let day_int_1 = round_half_away(jd1);
    let frac_1 = jd1 - day_int_1;
    let mut jd = day_int_1 as i64;

    let day_int_2 = round_half_away(jd2);
    let frac_2 = jd2 - day_int_2;
    jd += day_int_2 as i64;

    // Kahan sum of 0.5 + frac_1 + frac_2, carrying whole days into `jd`.
    let mut sum = 0.5;
    let mut correction = 0.0;
    for frac in [frac_1, frac_2] {
        let temp = sum + frac;
        correction += if libm::fabs(sum) >= libm::fabs(frac) {
            (sum - temp) + frac
        } else {
            (frac - temp) + sum
        };
        sum = temp;

        if sum >= 1.0 {
            jd += 1;
            sum -= 1.0;
        }
    }
    let mut fraction = sum + correction;
    correction = fraction - sum;

    if fraction < 0.0 {
        fraction = sum + 1.0;
        correction += (1.0 - fraction) + sum;
        sum = fraction;
        fraction = sum + correction;
        correction = fraction - sum;
        jd -= 1;
    }

    if (fraction - 1.0) >= -f64::EPSILON / 4.0 {
        let temp = sum - 1.0;
        correction += (sum - temp) - 1.0;
        sum = temp;
        fraction = sum + correction;

        if (-f64::EPSILON / 2.0) < fraction {
            jd += 1;
            fraction = fraction.max(0.0);
        }
    }

    let mut l = jd + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l -= (1461 * i) / 4 - 31;
    let k = (80 * l) / 2447;
    let day = (l - (2447 * k) / 80) as i32;
    let l = k / 11;
    let month = (k + 2 - 12 * l) as i32;
    let year = (100 * (n - 49) + i + l) as i32;

    Ok((year, month, day, fraction))
}

/// A calendar date with the day fraction rounded to a fixed number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Day fraction × 10^ndp, rounded.
    pub fraction: i32,
    /// The requested decimal count was outside 0..=9 and 0 was used instead.
    pub ndp_out_of_range: bool,
}

impl RoundedDate {
    /// Classic status: `1` when the decimal count was out of range, else `0`.
    pub fn status(&self) -> i32 {
        self.ndp_out_of_range as i32
    }

    pub fn to_array(&self) -> [i32; 4] {
        [self.year, self.month, self.day, self.fraction]
    }
}

/// Two-part Julian Date to a calendar date whose fraction is rounded to `ndp`
/// decimal places.
///
/// Rounding can carry into the next day: 1996-02-10 at fraction 0.99999 with
/// `ndp = 4` comes out as 1996-02-11, fraction 0. An `ndp` outside 0..=9 is
/// treated as 0 and flagged on the result.
///
/// ```
/// use celestial_time::calendar::jd_to_calendar_rounded;
///
/// let date = jd_to_calendar_rounded(4, 2400000.5, 50123.9999).unwrap();
/// assert_eq!(date.to_array(), [1996, 2, 10, 9999]);
/// ```
pub fn jd_to_calendar_rounded(ndp: i32, jd1: f64, jd2: f64) -> TimeResult<RoundedDate> {
    let ndp_out_of_range = !(0..=9).contains(&ndp);
    let denom = if ndp_out_of_range {
        1.0
    } else {
        libm::pow(10.0, ndp as f64)
    };

    let (d1, d2) = if libm::fabs(jd1) >= libm::fabs(jd2) {
        (jd1, jd2)
    } else {
        (jd2, jd1)
    };
    // Work from midnight so that rounding the fraction rounds the time of day.
    let d1 = d1 - 0.5;

    let whole_1 = round_half_away(d1);
    let f1 = d1 - whole_1;
    let whole_2 = round_half_away(d2);
    let f2 = d2 - whole_2;
    let mut carry = round_half_away(f1 + f2);
    let mut f = (f1 - carry) + f2;
    if f < 0.0 {
        f += 1.0;
        carry -= 1.0;
    }

    let djd = whole_1 + whole_2 + carry + 0.5;
    let rounded = round_half_away(f * denom) / denom;

    let (year, month, day, fraction) = jd_to_calendar(djd, rounded)?;

    Ok(RoundedDate {
        year,
        month,
        day,
        fraction: round_half_away(fraction * denom) as i32,
        ndp_out_of_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_to_jd_reference() {
        assert_eq!(calendar_to_jd(2003, 6, 1).unwrap(), (2400000.5, 52791.0));
        assert_eq!(calendar_to_jd(2000, 1, 1).unwrap(), (2400000.5, 51544.0));
        assert_eq!(calendar_to_jd(1858, 11, 17).unwrap(), (2400000.5, 0.0));
    }

    #[test]
    fn test_calendar_to_jd_errors() {
        assert_eq!(calendar_to_jd(-4800, 1, 1).unwrap_err().status_code(), -1);
        assert_eq!(calendar_to_jd(2000, 13, 1).unwrap_err().status_code(), -2);
        assert_eq!(calendar_to_jd(2000, 0, 1).unwrap_err().status_code(), -2);
        assert_eq!(calendar_to_jd(2001, 2, 29).unwrap_err().status_code(), -3);
        assert_eq!(calendar_to_jd(1900, 2, 29).unwrap_err().status_code(), -3);
        assert_eq!(calendar_to_jd(2000, 4, 0).unwrap_err().status_code(), -3);
        assert!(calendar_to_jd(2000, 2, 29).is_ok());
        assert!(calendar_to_jd(-4799, 1, 1).is_ok());
    }

    #[test]
    fn test_jd_to_calendar_reference() {
        let (y, m, d, fd) = jd_to_calendar(2400000.5, 50123.9999).unwrap();
        assert_eq!((y, m, d), (1996, 2, 10));
        assert!((fd - 0.9999).abs() < 1e-7);
    }

    #[test]
    fn test_jd_to_calendar_j2000() {
        let (y, m, d, fd) = jd_to_calendar(2451545.0, 0.0).unwrap();
        assert_eq!((y, m, d), (2000, 1, 1));
        assert_eq!(fd, 0.5);

        // Either part may carry the bulk of the date.
        assert_eq!(jd_to_calendar(0.0, 2451545.0).unwrap(), (2000, 1, 1, 0.5));
    }

    #[test]
    fn test_jd_to_calendar_range() {
        assert_eq!(jd_to_calendar(-68570.0, 0.0).unwrap_err().status_code(), -1);
        assert!(jd_to_calendar(1e9 + 1.0, 0.0).is_err());
        assert!(jd_to_calendar(-68569.5, 0.0).is_ok());
    }

    #[test]
    fn test_calendar_round_trip() {
        for &(y, m, d) in &[(1600, 3, 1), (1972, 6, 30), (2024, 2, 29), (-1000, 7, 12)] {
            let (djm0, djm) = calendar_to_jd(y, m, d).unwrap();
            let (y2, m2, d2, fd) = jd_to_calendar(djm0, djm).unwrap();
            assert_eq!((y2, m2, d2), (y, m, d));
            assert_eq!(fd, 0.0);
        }
    }

    #[test]
    fn test_jd_to_calendar_rounded_reference() {
        let date = jd_to_calendar_rounded(4, 2400000.5, 50123.9999).unwrap();
        assert_eq!(date.to_array(), [1996, 2, 10, 9999]);
        assert_eq!(date.status(), 0);
    }

    #[test]
    fn test_jd_to_calendar_rounded_carries_into_next_day() {
        let date = jd_to_calendar_rounded(3, 2400000.5, 50123.99999).unwrap();
        assert_eq!(date.to_array(), [1996, 2, 11, 0]);
    }

    #[test]
    fn test_jd_to_calendar_rounded_bad_ndp() {
        let date = jd_to_calendar_rounded(12, 2400000.5, 50123.2).unwrap();
        assert_eq!(date.to_array(), [1996, 2, 10, 0]);
        assert_eq!(date.status(), 1);
        assert!(jd_to_calendar_rounded(2, -1e6, 0.0).is_err());
    }

    #[test]
    fn test_leap_years_and_month_lengths() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2023, 9).unwrap(), 30);
        assert!(days_in_month(2023, 13).is_err());
    }

    #[test]
    fn test_next_calendar_day() {
        assert_eq!(next_calendar_day(2000, 1, 31).unwrap(), (2000, 2, 1));
        assert_eq!(next_calendar_day(2000, 12, 31).unwrap(), (2001, 1, 1));
        assert_eq!(next_calendar_day(2000, 2, 28).unwrap(), (2000, 2, 29));
        assert_eq!(next_calendar_day(2000, 2, 29).unwrap(), (2000, 3, 1));
        assert_eq!(next_calendar_day(2001, 2, 28).unwrap(), (2001, 3, 1));
    }
}
