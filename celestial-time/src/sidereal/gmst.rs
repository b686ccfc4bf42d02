//! Earth rotation angle and Greenwich mean sidereal time.
//!
//! The IAU 2000 and 2006 GMST models are the Earth rotation angle (a linear
//! function of UT1) plus a polynomial in TT for the accumulated precession
//! in right ascension. The older IAU 1982 model is a single polynomial in UT1.

use super::angle::SiderealAngle;
use crate::scales::{TT, UT1};
use crate::{TimeError, TimeResult};
use celestial_core::angle::wrap_0_2pi;
use celestial_core::constants::{
    ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_OF_TIME_TO_RAD, SECONDS_PER_DAY_F64,
    TWOPI,
};
use celestial_core::math::fmod;
use celestial_core::utils::jd_to_centuries;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Beyond this many days from J2000.0 the rotation term loses all precision.
const MAX_DAYS_FROM_J2000: f64 = 1e12;

/// Splits a date into (smaller, larger) parts by value.
#[inline]
fn ascending(jd1: f64, jd2: f64) -> (f64, f64) {
    if jd1 < jd2 {
        (jd1, jd2)
    } else {
        (jd2, jd1)
    }
}

/// Earth rotation angle (IAU 2000) in radians, [0, 2π), for a UT1 date.
///
/// ```
/// use celestial_time::sidereal::earth_rotation_angle;
///
/// let era = earth_rotation_angle(2400000.5, 54388.0);
/// assert!((era - 0.4022837240028158102).abs() < 1e-12);
/// ```
pub fn earth_rotation_angle(ut1_jd1: f64, ut1_jd2: f64) -> f64 {
    let (d1, d2) = ascending(ut1_jd1, ut1_jd2);
    let t = d1 + (d2 - J2000_JD);

    // Fractional part of the date, taken separately from each part.
    let f = fmod(d1, 1.0) + fmod(d2, 1.0);

    wrap_0_2pi(TWOPI * (f + 0.7790572732640 + 0.00273781191135448 * t))
}

/// GMST consistent with the IAU 2000 precession, in radians.
pub fn gmst_iau2000(ut1_jd1: f64, ut1_jd2: f64, tt_jd1: f64, tt_jd2: f64) -> f64 {
    let t = jd_to_centuries(tt_jd1, tt_jd2);
    let precession_arcsec =
        0.014506 + (4612.15739966 + (1.39667721 + (-0.00009344 + 0.00001882 * t) * t) * t) * t;
    wrap_0_2pi(earth_rotation_angle(ut1_jd1, ut1_jd2) + precession_arcsec * ARCSEC_TO_RAD)
}

/// GMST consistent with the IAU 2006 precession, in radians.
pub fn gmst_iau2006(ut1_jd1: f64, ut1_jd2: f64, tt_jd1: f64, tt_jd2: f64) -> f64 {
    let t = jd_to_centuries(tt_jd1, tt_jd2);
    let precession_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * (-0.0000000368)))));
    wrap_0_2pi(earth_rotation_angle(ut1_jd1, ut1_jd2) + precession_arcsec * ARCSEC_TO_RAD)
}

/// GMST from the IAU 1982 model, in radians, for a UT1 date.
///
/// The 24110.54841 s constant is reduced by 12h because the day fractions
/// below are measured from noon.
pub fn gmst_iau1982(ut1_jd1: f64, ut1_jd2: f64) -> f64 {
    const A: f64 = 24110.54841 - SECONDS_PER_DAY_F64 / 2.0;
    const B: f64 = 8640184.812866;
    const C: f64 = 0.093104;
    const D: f64 = -6.2e-6;

    let (d1, d2) = ascending(ut1_jd1, ut1_jd2);
    let t = (d1 + (d2 - J2000_JD)) / DAYS_PER_JULIAN_CENTURY;
    let f = SECONDS_PER_DAY_F64 * (fmod(d1, 1.0) + fmod(d2, 1.0));

    wrap_0_2pi(SECONDS_OF_TIME_TO_RAD * ((A + (B + (C + D * t) * t) * t) + f))
}

/// Fails for dates too far from J2000.0 for the rotation term to mean anything.
pub(super) fn check_range(jd1: f64, jd2: f64) -> TimeResult<()> {
    let days = (jd1 - J2000_JD) + jd2;
    if !days.is_finite() || libm::fabs(days) > MAX_DAYS_FROM_J2000 {
        return Err(TimeError::CalculationError(format!(
            "Time value out of valid range: {} days from J2000",
            days
        )));
    }
    Ok(())
}

/// Greenwich mean sidereal time (IAU 2006).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GMST(SiderealAngle);

impl GMST {
    pub fn from_ut1_and_tt(ut1: &UT1, tt: &TT) -> TimeResult<Self> {
        let ut1 = ut1.to_julian_date();
        let tt = tt.to_julian_date();
        check_range(ut1.jd1, ut1.jd2)?;
        check_range(tt.jd1, tt.jd2)?;
        Ok(Self(SiderealAngle::from_radians(gmst_iau2006(
            ut1.jd1, ut1.jd2, tt.jd1, tt.jd2,
        ))))
    }

    pub fn from_hours(hours: f64) -> Self {
        Self(SiderealAngle::from_hours(hours))
    }

    pub fn from_radians(radians: f64) -> Self {
        Self(SiderealAngle::from_radians(radians))
    }

    pub fn j2000() -> TimeResult<Self> {
        Self::from_ut1_and_tt(&UT1::j2000(), &TT::j2000())
    }

    pub fn angle(&self) -> SiderealAngle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.0.degrees()
    }

    pub fn radians(&self) -> f64 {
        self.0.radians()
    }

    /// Local mean sidereal time at `east_longitude` radians.
    pub fn local(&self, east_longitude: f64) -> SiderealAngle {
        self.0.local(east_longitude)
    }

    pub fn hour_angle_to_target(&self, ra_hours: f64) -> f64 {
        self.0.hour_angle_to_target(ra_hours)
    }
}

impl std::fmt::Display for GMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {}", self.0)
    }
}
