//! Numerical constants shared by every routine in the workspace.
//!
//! Values follow the IAU/IERS conventions used throughout: angles in radians,
//! time in days unless a name says otherwise.

/// Reference epoch J2000.0 as a Julian Date (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2451545.0;

/// Reference epoch B1900.0 as a Julian Date.
pub const B1900_JD: f64 = 2415019.81352;

/// Modified Julian Date of J2000.0.
pub const J2000_MJD: f64 = 51544.5;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365250.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Length of the tropical year at B1900.0, in days.
pub const DAYS_PER_TROPICAL_YEAR: f64 = 365.242198781;

pub const CIRCULAR_ARCSECONDS: f64 = 1296000.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const MILLIARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-9;

#[allow(clippy::excessive_precision)]
pub const MICROARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-12;

/// Units of 0.1 microarcsecond to radians (nutation series amplitudes).
#[allow(clippy::excessive_precision)]
pub const DECIMICROARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-13;

/// Seconds of time to radians.
#[allow(clippy::excessive_precision)]
pub const SECONDS_OF_TIME_TO_RAD: f64 = 7.272205216643039903848712e-5;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_PER_RAD: f64 = 206264.8062470963551564734;

/// Astronomical Unit in meters (IAU 2012 definition, exact)
pub const AU_M: f64 = 149_597_870_700.0;

/// Astronomical Unit in kilometers (derived from IAU 2012 definition)
pub const AU_KM: f64 = 149_597_870.7;

/// Speed of light in meters per second (exact).
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;

/// Speed of light in AU per day.
pub const SPEED_OF_LIGHT_AU_PER_DAY: f64 = SECONDS_PER_DAY_F64 * SPEED_OF_LIGHT_M_PER_S / AU_M;

/// Kilometers per second to AU per day.
pub const KM_PER_S_TO_AU_PER_DAY: f64 = SECONDS_PER_DAY_F64 / AU_KM;
