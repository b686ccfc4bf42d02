//! Helpers for two-part Julian Dates.
//!
//! Every routine that accepts a date takes it as two `f64` parts whose sum is
//! the Julian Date. Callers may split it however they like (J2000 + offset,
//! MJD zero point + MJD, whole day + fraction); the helpers here only assume
//! the sum.
//!
//! [`jd_to_centuries`] converts to Julian centuries from J2000.0, the time unit
//! used by the IAU precession/nutation models. [`add_to_smaller_part`] applies
//! an offset to the smaller-magnitude part so the larger part keeps its bits.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, J2000_JD};

/// Converts a two-part Julian Date to Julian centuries from J2000.0.
///
/// ```
/// use celestial_core::utils::jd_to_centuries;
/// use celestial_core::constants::J2000_JD;
///
/// assert_eq!(jd_to_centuries(J2000_JD, 0.0), 0.0);
/// assert_eq!(jd_to_centuries(J2000_JD, celestial_core::constants::DAYS_PER_JULIAN_CENTURY), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}

/// Converts a two-part Julian Date to Julian millennia from J2000.0.
#[inline]
pub fn jd_to_millennia(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_MILLENNIUM
}

/// Adds `delta_days` to whichever part of the date has the smaller magnitude.
///
/// Ties go to the second part.
#[inline]
pub fn add_to_smaller_part(jd1: f64, jd2: f64, delta_days: f64) -> (f64, f64) {
    if libm::fabs(jd1) > libm::fabs(jd2) {
        (jd1, jd2 + delta_days)
    } else {
        (jd1 + delta_days, jd2)
    }
}

/// Orders the two parts as `(larger, smaller)` by magnitude.
///
/// The flag is `true` when the first part was the larger one (ties count as larger),
/// so results can be put back in the caller's order.
#[inline]
pub fn order_by_magnitude(jd1: f64, jd2: f64) -> (f64, f64, bool) {
    if libm::fabs(jd1) >= libm::fabs(jd2) {
        (jd1, jd2, true)
    } else {
        (jd2, jd1, false)
    }
}
