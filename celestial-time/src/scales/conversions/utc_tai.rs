//! UTC ↔ TAI.
//!
//! TAI−UTC comes from the leap-second table. Since 1972 it is a whole number of
//! seconds; before that it also drifted linearly within each table interval.
//!
//! A UTC date is a quasi Julian Date: its fraction is of the true length of
//! the UTC day, which is 86401 s on a day ending in a leap second. To get
//! there, TAI−UTC is sampled three times:
//!
//! - at 0h of the day, the base offset
//! - at 12h, whose difference from 0h gives the drift over the day
//! - at 0h of the next day, whose jump beyond the drift is the leap second
//!
//! and the day fraction is stretched by both before the base offset is added.
//!
//! TAI → UTC has no closed form across a leap second, so it is solved by
//! iterating the forward conversion three times.

use super::{ToTAI, ToUTC};
use crate::calendar::{calendar_to_jd, jd_to_calendar, next_calendar_day};
use crate::julian::JulianDate;
use crate::leap_seconds::dat;
use crate::scales::{TAI, UTC};
use crate::TimeResult;
use celestial_core::constants::SECONDS_PER_DAY_F64;
use celestial_core::utils::order_by_magnitude;

const TAI_TO_UTC_ITERATIONS: usize = 3;

impl ToTAI for UTC {
    fn to_tai(&self) -> TimeResult<TAI> {
        utc_to_tai(self.to_julian_date())
    }
}

impl ToUTC for TAI {
    fn to_utc(&self) -> TimeResult<UTC> {
        tai_to_utc(self.to_julian_date())
    }
}

impl ToUTC for UTC {
    fn to_utc(&self) -> TimeResult<UTC> {
        Ok(*self)
    }
}

/// Returns the two parts in the caller's original order.
fn restore_order(big: f64, small: f64, big_first: bool) -> JulianDate {
    if big_first {
        JulianDate::new(big, small)
    } else {
        JulianDate::new(small, big)
    }
}

/// UTC to TAI.
///
/// Dubious-year warnings from the leap-second table are logged, not returned.
///
/// # Errors
///
/// Dates outside the calendar range or before the leap-second table.
pub fn utc_to_tai(utc: JulianDate) -> TimeResult<TAI> {
    let (utc_big, utc_small, big_first) = order_by_magnitude(utc.jd1, utc.jd2);

    let (year, month, day, mut fd) = jd_to_calendar(utc_big, utc_small)?;

    let dat0 = dat(year, month, day, 0.0)?.seconds;
    let dat12 = dat(year, month, day, 0.5)?.seconds;
    let (next_year, next_month, next_day) = next_calendar_day(year, month, day)?;
    let dat24 = dat(next_year, next_month, next_day, 0.0)?.seconds;

    let drift = 2.0 * (dat12 - dat0);
    let leap = dat24 - (dat0 + drift);

    fd *= (SECONDS_PER_DAY_F64 + leap) / SECONDS_PER_DAY_F64;
    fd *= (SECONDS_PER_DAY_F64 + drift) / SECONDS_PER_DAY_F64;

    let (z1, z2) = calendar_to_jd(year, month, day)?;
    let mut tai_small = z1 - utc_big;
    tai_small += z2;
    tai_small += fd + dat0 / SECONDS_PER_DAY_F64;

    Ok(TAI::from_julian_date(restore_order(
        utc_big, tai_small, big_first,
    )))
}

/// TAI to UTC, by three iterations of [`utc_to_tai`].
pub fn tai_to_utc(tai: JulianDate) -> TimeResult<UTC> {
    let (tai_big, tai_small, big_first) = order_by_magnitude(tai.jd1, tai.jd2);

    let mut utc_small = tai_small;
    for _ in 0..TAI_TO_UTC_ITERATIONS {
        let guess = utc_to_tai(JulianDate::new(tai_big, utc_small))?.to_julian_date();
        utc_small += tai_big - guess.jd1;
        utc_small += tai_small - guess.jd2;
    }

    Ok(UTC::from_julian_date(restore_order(
        tai_big, utc_small, big_first,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::J2000_JD;
    use celestial_core::test_helpers::assert_close;

    #[test]
    fn test_utc_to_tai_reference() {
        let tai = utc_to_tai(JulianDate::new(2453750.5, 0.892100694)).unwrap();
        assert_eq!(tai.to_julian_date().jd1, 2453750.5);
        assert_close(tai.to_julian_date().jd2, 0.8924826384444444444, 1e-12, "tai2");
    }

    #[test]
    fn test_tai_to_utc_reference() {
        let utc = tai_to_utc(JulianDate::new(2453750.5, 0.892482639)).unwrap();
        assert_eq!(utc.to_julian_date().jd1, 2453750.5);
        assert_close(utc.to_julian_date().jd2, 0.8921006945555555556, 1e-12, "utc2");
    }

    #[test]
    fn test_offset_at_j2000() {
        let utc = UTC::from_julian_date(JulianDate::new(J2000_JD, 0.0));
        let tai = utc.to_tai().unwrap();
        let offset = (tai.to_julian_date().to_f64() - J2000_JD) * SECONDS_PER_DAY_F64;
        assert!((offset - 32.0).abs() < 1e-4);
    }

    #[test]
    fn test_leap_second_day_is_stretched() {
        // 2016-12-31 ends in a leap second; the UTC day spans 86401 TAI seconds.
        let start = utc_to_tai(JulianDate::new(2457753.5, 0.0)).unwrap().to_julian_date();
        let end = utc_to_tai(JulianDate::new(2457753.5, 1.0)).unwrap().to_julian_date();
        let span = ((end.jd1 - start.jd1) + (end.jd2 - start.jd2)) * SECONDS_PER_DAY_F64;
        assert_close(span, 86401.0, 1e-6, "leap day length");

        let mid = utc_to_tai(JulianDate::new(2457753.5, 0.5)).unwrap().to_julian_date();
        let elapsed = ((mid.jd1 - 2457753.5) + mid.jd2) * SECONDS_PER_DAY_F64;
        assert_close(elapsed, 43200.5 + 36.0, 1e-5, "half of the leap day");

        // The end of the leap day and the start of the next coincide in TAI.
        let next = utc_to_tai(JulianDate::new(2457754.5, 0.0)).unwrap().to_julian_date();
        assert_close(end.to_f64(), next.to_f64(), 1e-9, "continuity");
    }

    #[test]
    fn test_drift_era() {
        // 1965-06-01 12h: TAI-UTC = 3.8364740 s.
        let tai = utc_to_tai(JulianDate::new(2400000.5, 38912.5)).unwrap();
        let offset = ((tai.to_julian_date().jd1 - 2400000.5) + (tai.to_julian_date().jd2 - 38912.5))
            * SECONDS_PER_DAY_F64;
        assert_close(offset, 3.836474, 1e-5, "1965");
    }

    #[test]
    fn test_round_trips() {
        let cases: &[(f64, f64)] = &[
            (J2000_JD, 0.123456789),
            (J2000_JD, 0.0),
            (2457753.5, 0.9999),
            (0.5, J2000_JD),
            (2400000.5, 39000.25),
        ];

        for &(jd1, jd2) in cases {
            let utc = UTC::from_julian_date(JulianDate::new(jd1, jd2));
            let back = utc.to_tai().unwrap().to_utc().unwrap().to_julian_date();
            let diff = (back.jd1 - jd1) + (back.jd2 - jd2);
            let tolerance = 1e-14 * jd1.abs().min(jd2.abs()).max(1.0);
            assert!(diff.abs() < tolerance, "UTC round trip ({}, {}): {:e}", jd1, jd2, diff);
            let untouched = if jd1.abs() >= jd2.abs() { back.jd1 == jd1 } else { back.jd2 == jd2 };
            assert!(untouched, "larger part changed for ({}, {})", jd1, jd2);
        }
    }

    #[test]
    fn test_before_leap_second_table() {
        let err = utc_to_tai(JulianDate::new(2400000.5, 30000.0)).unwrap_err();
        assert_eq!(err.status_code(), -1);
    }
}
