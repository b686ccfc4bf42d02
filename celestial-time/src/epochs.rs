//! Besselian and Julian epochs.
//!
//! A Julian epoch counts Julian years of 365.25 days from J2000.0 (JD 2451545.0).
//! A Besselian epoch counts tropical years of 365.242198781 days from B1900.0
//! (JD 2415020.31352); catalogs before FK5 are referred to Besselian epochs.
//!
//! ```
//! use celestial_time::epochs::{julian_epoch, julian_epoch_to_jd};
//!
//! let (d1, d2) = julian_epoch_to_jd(2000.0);
//! assert_eq!(julian_epoch(d1, d2), 2000.0);
//! ```

use celestial_core::constants::{
    DAYS_PER_JULIAN_YEAR, DAYS_PER_TROPICAL_YEAR, J2000_JD, J2000_MJD, MJD_ZERO_POINT,
};

/// Days between B1900.0 and J2000.0.
const B1900_TO_J2000_DAYS: f64 = 36524.68648;

/// B1900.0 as an MJD.
const B1900_MJD: f64 = 15019.81352;

/// Besselian epoch of a two-part Julian Date.
pub fn besselian_epoch(jd1: f64, jd2: f64) -> f64 {
    1900.0 + ((jd1 - J2000_JD) + (jd2 + B1900_TO_J2000_DAYS)) / DAYS_PER_TROPICAL_YEAR
}

/// Julian epoch of a two-part Julian Date.
pub fn julian_epoch(jd1: f64, jd2: f64) -> f64 {
    2000.0 + ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_YEAR
}

/// Besselian epoch to a two-part Julian Date `(2400000.5, mjd)`.
pub fn besselian_epoch_to_jd(epoch: f64) -> (f64, f64) {
    (
        MJD_ZERO_POINT,
        B1900_MJD + (epoch - 1900.0) * DAYS_PER_TROPICAL_YEAR,
    )
}

/// Julian epoch to a two-part Julian Date `(2400000.5, mjd)`.
pub fn julian_epoch_to_jd(epoch: f64) -> (f64, f64) {
    (MJD_ZERO_POINT, J2000_MJD + (epoch - 2000.0) * DAYS_PER_JULIAN_YEAR)
}
