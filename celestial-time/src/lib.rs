//! Time scales, calendars and Earth rotation.
//!
//! Dates are two-part Julian Dates ([`JulianDate`]) so that a large epoch and a
//! small offset can be carried without losing precision. On top of that sit:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calendar`] | Gregorian calendar ↔ Julian Date |
//! | [`epochs`] | Besselian and Julian epochs |
//! | [`datetime`] | Broken-down date and time fields, UTC leap-second aware |
//! | [`leap_seconds`] | The TAI−UTC table |
//! | [`scales`] | `TAI`, `UTC`, `TT`, `TDB`, `TCB`, `TCG`, `UT1` and conversions between them |
//! | [`sidereal`] | Earth rotation angle, mean and apparent sidereal time |
//!
//! ```
//! use celestial_time::{ToTAI, ToTT, UTC};
//!
//! let utc = celestial_time::utc_from_calendar(2006, 1, 15, 21, 24, 37.5).unwrap();
//! let tt = utc.to_tai().unwrap().to_tt().unwrap();
//! let offset = (tt.to_julian_date().to_f64() - utc.to_julian_date().to_f64()) * 86400.0;
//! assert!((offset - 65.184).abs() < 1e-4);
//! ```

pub mod calendar;
pub mod constants;
pub mod datetime;
pub mod epochs;
pub mod julian;
pub mod leap_seconds;
pub mod scales;
pub mod sidereal;

pub use calendar::{calendar_to_jd, jd_to_calendar, jd_to_calendar_rounded};
pub use datetime::{format_datetime, parse_datetime_fields, DateTimeFields, TimeScale, TimeWarning};
pub use julian::JulianDate;
pub use leap_seconds::{dat, DeltaAt, LeapSecondEntry, LeapSecondTable};
pub use scales::{TAI, TCB, TCG, TDB, TT, UT1, UTC};

pub use scales::{
    tai_from_calendar, tcb_from_calendar, tcg_from_calendar, tdb_from_calendar, tt_from_calendar,
    ut1_from_calendar, utc_from_calendar,
};

pub use scales::conversions::{
    TcbToTdb, TdbToTcb, ToTAI, ToTAIWithOffset, ToTCG, ToTDB, ToTT, ToTTFromTDB,
    ToTTWithDeltaT, ToUT1WithDUT1, ToUT1WithDeltaT, ToUT1WithOffset, ToUTC, ToUTCWithDUT1,
};
pub use sidereal::{SiderealAngle, GAST, GMST};

use celestial_core::AstroError;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type TimeResult<T> = Result<T, TimeError>;

/// Errors from calendar, leap-second and time-scale routines.
///
/// The variant decides the classic status code, see [`TimeError::status_code`].
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeError {
    #[error("Invalid year {year}: {reason}")]
    InvalidYear { year: i32, reason: String },

    #[error("Invalid month {0}")]
    InvalidMonth(i32),

    #[error("Invalid day {year}-{month:02}-{day:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },

    #[error("Day fraction {0} outside [0, 1]")]
    InvalidDayFraction(f64),

    #[error("Invalid hour {0}")]
    InvalidHour(i32),

    #[error("Invalid minute {0}")]
    InvalidMinute(i32),

    #[error("Invalid second {0}")]
    InvalidSecond(f64),

    #[error("Julian Date {0} outside the supported range")]
    InvalidJulianDate(f64),

    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

impl TimeError {
    /// Negative status code of the routine that failed.
    ///
    /// | Code | Variants |
    /// |------|----------|
    /// | −1 | `InvalidYear`, `InvalidJulianDate`, and anything not listed |
    /// | −2 | `InvalidMonth` |
    /// | −3 | `InvalidDay` |
    /// | −4 | `InvalidDayFraction`, `InvalidHour` |
    /// | −5 | `InvalidMinute` |
    /// | −6 | `InvalidSecond` |
    pub fn status_code(&self) -> i32 {
        match self {
            TimeError::InvalidMonth(_) => -2,
            TimeError::InvalidDay { .. } => -3,
            TimeError::InvalidDayFraction(_) | TimeError::InvalidHour(_) => -4,
            TimeError::InvalidMinute(_) => -5,
            TimeError::InvalidSecond(_) => -6,
            _ => -1,
        }
    }
}

impl From<AstroError> for TimeError {
    fn from(err: AstroError) -> Self {
        TimeError::CalculationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TimeError::InvalidYear { year: -5000, reason: String::new() }.status_code(), -1);
        assert_eq!(TimeError::InvalidMonth(13).status_code(), -2);
        assert_eq!(TimeError::InvalidDay { year: 2001, month: 2, day: 29 }.status_code(), -3);
        assert_eq!(TimeError::InvalidDayFraction(1.5).status_code(), -4);
        assert_eq!(TimeError::InvalidHour(24).status_code(), -4);
        assert_eq!(TimeError::InvalidMinute(60).status_code(), -5);
        assert_eq!(TimeError::InvalidSecond(-1.0).status_code(), -6);
        assert_eq!(TimeError::InvalidJulianDate(-1e10).status_code(), -1);
        assert_eq!(TimeError::ParseError("x".into()).status_code(), -1);
    }

    #[test]
    fn test_from_astro_error() {
        let err: TimeError = AstroError::invalid_parameter("tf2d", -1, "bad input").into();
        assert!(matches!(err, TimeError::CalculationError(ref m) if m.contains("bad input")));
    }

    #[test]
    fn test_error_display() {
        let err = TimeError::InvalidDay { year: 2001, month: 2, day: 29 };
        assert_eq!(err.to_string(), "Invalid day 2001-02-29");
    }
}
