//! UTC ↔ UT1 through DUT1 = UT1−UTC.
//!
//! DUT1 is kept within ±0.9 s by the leap seconds, and IERS Bulletin A
//! publishes it daily. It jumps by a whole second across a leap second, so
//! the value supplied must be the one for the day in question.
//!
//! UTC → UT1 goes through TAI: UT1−TAI = DUT1 − (TAI−UTC), with TAI−UTC taken
//! at 0h of the UTC day.
//!
//! UT1 → UTC subtracts DUT1 directly, except near a leap second. There the
//! UT1 date may belong to the UTC day that ends in the leap, whose fraction
//! runs over 86401 s; DUT1 is moved to its pre-leap value and ramped back
//! across that day so the result inverts UTC → UT1.
//!
//! ```
//! use celestial_time::{JulianDate, ToUT1WithDUT1, ToUTCWithDUT1, UTC};
//!
//! let utc = UTC::from_julian_date(JulianDate::new(2453750.5, 0.892100694));
//! let ut1 = utc.to_ut1_with_dut1(0.3341).unwrap();
//! let back = ut1.to_utc_with_dut1(0.3341).unwrap();
//! assert!((back.to_julian_date().jd2 - 0.892100694).abs() < 1e-12);
//! ```

use super::ut1_tai::tai_to_ut1;
use super::utc_tai::utc_to_tai;
use super::{ToUT1WithDUT1, ToUTCWithDUT1};
use crate::calendar::{calendar_to_jd, jd_to_calendar};
use crate::julian::JulianDate;
use crate::leap_seconds::dat;
use crate::scales::{UT1, UTC};
use crate::TimeResult;
use celestial_core::constants::SECONDS_PER_DAY_F64;

/// Days either side of the UT1 date searched for a leap second.
const LEAP_SEARCH_DAYS: std::ops::RangeInclusive<i32> = -1..=3;

impl ToUT1WithDUT1 for UTC {
    fn to_ut1_with_dut1(&self, dut1_seconds: f64) -> TimeResult<UT1> {
        utc_to_ut1(self.to_julian_date(), dut1_seconds)
    }
}

impl ToUTCWithDUT1 for UT1 {
    fn to_utc_with_dut1(&self, dut1_seconds: f64) -> TimeResult<UTC> {
        ut1_to_utc(self.to_julian_date(), dut1_seconds)
    }
}

pub fn utc_to_ut1(utc: JulianDate, dut1_seconds: f64) -> TimeResult<UT1> {
    let (year, month, day, _) = jd_to_calendar(utc.jd1, utc.jd2)?;
    let tai_minus_utc = dat(year, month, day, 0.0)?.seconds;
    let tai = utc_to_tai(utc)?;
    Ok(tai_to_ut1(
        tai.to_julian_date(),
        dut1_seconds - tai_minus_utc,
    ))
}

pub fn ut1_to_utc(ut1: JulianDate, dut1_seconds: f64) -> TimeResult<UTC> {
    let big_first = libm::fabs(ut1.jd1) >= libm::fabs(ut1.jd2);
    let (big, small) = if big_first {
        (ut1.jd1, ut1.jd2)
    } else {
        (ut1.jd2, ut1.jd1)
    };

    let duts = adjust_dut1_for_leap_second(big, small, dut1_seconds)?;
    let small = small - duts / SECONDS_PER_DAY_F64;

    Ok(UTC::from_julian_date(if big_first {
        JulianDate::new(big, small)
    } else {
        JulianDate::new(small, big)
    }))
}

/// DUT1 to subtract from a UT1 date that may fall in a leap-second day.
fn adjust_dut1_for_leap_second(big: f64, small: f64, dut1: f64) -> TimeResult<f64> {
    let mut duts = dut1;
    let mut previous = None;

    for offset in LEAP_SEARCH_DAYS {
        let (year, month, day, _) = jd_to_calendar(big, small + offset as f64)?;
        let current = dat(year, month, day, 0.0)?.seconds;
        let step = previous.map_or(0.0, |p| current - p);
        previous = Some(current);

        if libm::fabs(step) < 0.5 {
            continue;
        }

        if step * duts >= 0.0 {
            duts -= step;
        }

        // UT1 at the start of the UTC day that ends in the leap.
        let (start1, start2) = calendar_to_jd(year, month, day)?;
        let start2 = start2 - 1.0 + duts / SECONDS_PER_DAY_F64;

        let elapsed = (big - start1) + (small - start2);
        if elapsed > 0.0 {
            let fraction = elapsed * SECONDS_PER_DAY_F64 / (SECONDS_PER_DAY_F64 + step);
            duts += step * fraction.min(1.0);
        }
        log::trace!(
            "leap second of {} s before {}-{:02}-{:02}; DUT1 {} -> {}",
            step,
            year,
            month,
            day,
            dut1,
            duts
        );
        break;
    }

    Ok(duts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::J2000_JD;
    use celestial_core::test_helpers::assert_close;

    #[test]
    fn test_utc_to_ut1_reference() {
        let ut1 = UTC::from_julian_date_raw(2453750.5, 0.892100694)
            .to_ut1_with_dut1(0.3341)
            .unwrap();
        assert_eq!(ut1.to_julian_date().jd1, 2453750.5);
        assert_close(ut1.to_julian_date().jd2, 0.8921045608981481481, 1e-12, "ut12");
    }

    #[test]
    fn test_ut1_to_utc_reference() {
        let utc = UT1::from_julian_date_raw(2453750.5, 0.892104561)
            .to_utc_with_dut1(0.3341)
            .unwrap();
        assert_eq!(utc.to_julian_date().jd1, 2453750.5);
        assert_close(utc.to_julian_date().jd2, 0.8921006941018518519, 1e-12, "utc2");
    }

    #[test]
    fn test_dut1_is_the_offset_away_from_leaps() {
        for dut1 in [-0.9, 0.0, 0.9] {
            let ut1 = utc_to_ut1(JulianDate::new(J2000_JD, 0.0), dut1).unwrap();
            let seconds = ut1.to_julian_date().jd2 * SECONDS_PER_DAY_F64;
            assert_close(seconds, dut1, 1e-6, "UT1-UTC");
        }
    }

    #[test]
    fn test_round_trip_through_leap_second_day() {
        // 2016-12-31 ends in a leap second; DUT1 was about -0.4 s that day
        // and +0.6 s the next.
        for fraction in [0.25, 0.75] {
            let ut1 = utc_to_ut1(JulianDate::new(2457753.5, fraction), -0.4).unwrap();
            let back = ut1_to_utc(ut1.to_julian_date(), -0.4).unwrap().to_julian_date();
            assert_eq!(back.jd1, 2457753.5);
            assert_close(back.jd2, fraction, 1e-12, "leap day round trip");
        }

        // Late in the leap day the ramp inverts to within tens of microseconds.
        let ut1 = utc_to_ut1(JulianDate::new(2457753.5, 0.99), -0.4).unwrap();
        let back = ut1_to_utc(ut1.to_julian_date(), -0.4).unwrap().to_julian_date();
        assert_close(back.jd2, 0.99, 1e-9, "end of leap day");

        let ut1 = utc_to_ut1(JulianDate::new(2457754.5, 0.0), 0.6).unwrap();
        let back = ut1_to_utc(ut1.to_julian_date(), 0.6).unwrap().to_julian_date();
        assert_close(back.jd2, 0.0, 1e-15, "day after the leap");
    }

    #[test]
    fn test_swapped_parts() {
        let ut1 = UT1::from_julian_date_raw(0.892104561, 2453750.5);
        let utc = ut1.to_utc_with_dut1(0.3341).unwrap().to_julian_date();
        assert_eq!(utc.jd2, 2453750.5);
        assert_close(utc.jd1, 0.8921006941018518519, 1e-12, "utc1");
    }
}
