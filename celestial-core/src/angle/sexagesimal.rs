//! Sexagesimal decomposition and recomposition.
//!
//! Splits angles and day fractions into sign + whole units + minutes + seconds +
//! fraction-of-second, and builds them back.
//!
//! | Function | Input | Fields |
//! |----------|-------|--------|
//! | [`days_to_hms`] | fraction of a day | hours, minutes, seconds, fraction |
//! | [`radians_to_hms`] | radians | hours, minutes, seconds, fraction |
//! | [`radians_to_dms`] | radians | degrees, arcminutes, arcseconds, fraction |
//! | [`hms_to_days`] | sign, h, m, s | fraction of a day |
//! | [`hms_to_radians`] | sign, h, m, s | radians |
//! | [`dms_to_radians`] | sign, d, m, s | radians |
//!
//! # Resolution
//!
//! `ndp` is the number of decimal places in the seconds field. Rounding is
//! half-away-from-zero at that resolution and carries into the higher fields,
//! so 59.99996 seconds at `ndp = 4` becomes the next whole minute. A negative
//! `ndp` rounds to 10s, 1m, 10m, 1h (or degree equivalents) for -1..-4 and keeps
//! going in powers of ten/sixty beyond that:
//!
//! | ndp | resolution |
//! |-----|------------|
//! | -4 | 1 unit |
//! | -3 | 0.1 unit (10 minutes) |
//! | -2 | 1 minute |
//! | -1 | 10 seconds |
//! | 0 | 1 second |
//! | n > 0 | 10^-n second |
//!
//! The unit field is not wrapped: 24h or 360 degrees and above are reported as is.
//!
//! ```
//! use celestial_core::angle::{radians_to_dms, Sign};
//!
//! let dms = radians_to_dms(4, 2.345);
//! assert_eq!(dms.sign, Sign::Plus);
//! assert_eq!(dms.fields, [134, 21, 30, 9706]);
//! assert_eq!(dms.to_string(), "+134 21 30.9706");
//! ```

use std::fmt;

use crate::constants::{SECONDS_OF_TIME_TO_RAD, SECONDS_PER_DAY_F64, TWOPI};
use crate::errors::{AstroError, AstroResult};
use crate::math::{round_half_away, trunc};

/// Sign of a sexagesimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// `'-'` is negative; any other character is positive.
    pub fn from_char(c: char) -> Self {
        if c == '-' {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }

    fn factor(self) -> f64 {
        match self {
            Sign::Plus => 1.0,
            Sign::Minus => -1.0,
        }
    }
}

/// A value split into sign and four integer fields.
///
/// `fields` is `[units, minutes, seconds, fraction]` where the fraction is in
/// units of `10^-ndp` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sexagesimal {
    pub sign: Sign,
    pub fields: [i32; 4],
    pub ndp: i32,
}

impl fmt::Display for Sexagesimal {
    /// Formats as `+DD MM SS.FFF`, printing the fraction only when `ndp > 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [u, m, s, frac] = self.fields;
        write!(f, "{}{:02} {:02} {:02}", self.sign.as_char(), u, m, s)?;
        if self.ndp > 0 {
            write!(f, ".{:0width$}", frac, width = self.ndp as usize)?;
        }
        Ok(())
    }
}

/// Decomposes a fraction of a day into hours, minutes, seconds, fraction.
///
/// ```
/// use celestial_core::angle::{days_to_hms, Sign};
///
/// let hms = days_to_hms(4, -0.987654321);
/// assert_eq!(hms.sign, Sign::Minus);
/// assert_eq!(hms.fields, [23, 42, 13, 3333]);
/// ```
pub fn days_to_hms(ndp: i32, days: f64) -> Sexagesimal {
    let sign = if days >= 0.0 { Sign::Plus } else { Sign::Minus };
    let mut a = SECONDS_PER_DAY_F64 * days.abs();

    if ndp < 0 {
        let mut nrs: i64 = 1;
        for n in 1..=-ndp {
            nrs *= if n == 2 || n == 4 { 6 } else { 10 };
        }
        let rs = nrs as f64;
        a = rs * round_half_away(a / rs);
    }

    let mut nrs: i64 = 1;
    for _ in 0..ndp.max(0) {
        nrs *= 10;
    }
    let rs = nrs as f64;
    let rm = rs * 60.0;
    let rh = rm * 60.0;

    a = round_half_away(rs * a);

    let ah = trunc(a / rh);
    a -= ah * rh;
    let am = trunc(a / rm);
    a -= am * rm;
    let as_ = trunc(a / rs);
    let af = a - as_ * rs;

    Sexagesimal {
        sign,
        fields: [ah as i32, am as i32, as_ as i32, af as i32],
        ndp,
    }
}

/// Decomposes an angle in radians into hours, minutes, seconds, fraction.
///
/// ```
/// use celestial_core::angle::{radians_to_hms, Sign};
///
/// let hms = radians_to_hms(4, -3.01234);
/// assert_eq!(hms.sign, Sign::Minus);
/// assert_eq!(hms.fields, [11, 30, 22, 6484]);
/// ```
pub fn radians_to_hms(ndp: i32, angle: f64) -> Sexagesimal {
    days_to_hms(ndp, angle / TWOPI)
}

/// Decomposes an angle in radians into degrees, arcminutes, arcseconds, fraction.
pub fn radians_to_dms(ndp: i32, angle: f64) -> Sexagesimal {
    // Degrees are hours scaled by 15; reuse the day decomposition with that factor.
    days_to_hms(ndp, angle * 15.0 / TWOPI)
}

fn check_fields(
    function: &str,
    unit: i32,
    unit_max: i32,
    minutes: i32,
    seconds: f64,
) -> AstroResult<()> {
    if !(0..=unit_max).contains(&unit) {
        return Err(AstroError::invalid_parameter(
            function,
            -1,
            &format!("{} outside 0-{}", unit, unit_max),
        ));
    }
    if !(0..=59).contains(&minutes) {
        return Err(AstroError::invalid_parameter(
            function,
            -2,
            &format!("minutes {} outside 0-59", minutes),
        ));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(AstroError::invalid_parameter(
            function,
            -3,
            &format!("seconds {} outside 0-59.999...", seconds),
        ));
    }
    Ok(())
}

fn hms_to_seconds(sign: Sign, hours: i32, minutes: i32, seconds: f64) -> f64 {
    sign.factor() * (60.0 * (60.0 * f64::from(hours) + f64::from(minutes)) + seconds)
}

/// Converts hours, minutes, seconds to a fraction of a day.
///
/// # Errors
///
/// Status -1 for hours outside 0-23, -2 for minutes outside 0-59, -3 for
/// seconds outside [0, 60).
///
/// ```
/// use celestial_core::angle::{hms_to_days, Sign};
///
/// let days = hms_to_days(Sign::Plus, 23, 55, 10.9).unwrap();
/// assert!((days - 0.9966539351851851852).abs() < 1e-12);
/// ```
pub fn hms_to_days(sign: Sign, hours: i32, minutes: i32, seconds: f64) -> AstroResult<f64> {
    check_fields("hms_to_days", hours, 23, minutes, seconds)?;
    Ok(hms_to_seconds(sign, hours, minutes, seconds) / SECONDS_PER_DAY_F64)
}

/// Converts hours, minutes, seconds to radians.
///
/// # Errors
///
/// Same status codes as [`hms_to_days`].
pub fn hms_to_radians(sign: Sign, hours: i32, minutes: i32, seconds: f64) -> AstroResult<f64> {
    check_fields("hms_to_radians", hours, 23, minutes, seconds)?;
    Ok(hms_to_seconds(sign, hours, minutes, seconds) * SECONDS_OF_TIME_TO_RAD)
}

/// Converts degrees, arcminutes, arcseconds to radians.
///
/// # Errors
///
/// Status -1 for degrees outside 0-359, -2 for arcminutes outside 0-59,
/// -3 for arcseconds outside [0, 60).
pub fn dms_to_radians(sign: Sign, degrees: i32, arcmin: i32, arcsec: f64) -> AstroResult<f64> {
    check_fields("dms_to_radians", degrees, 359, arcmin, arcsec)?;
    Ok(hms_to_seconds(sign, degrees, arcmin, arcsec) * crate::constants::ARCSEC_TO_RAD)
}
