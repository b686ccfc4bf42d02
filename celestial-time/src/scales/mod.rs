//! Astronomical time scales.
//!
//! | Scale | Description | Relationship |
//! |-------|-------------|--------------|
//! | TAI | International Atomic Time | Reference |
//! | UTC | Coordinated Universal Time | TAI − leap seconds |
//! | TT | Terrestrial Time | TAI + 32.184 s |
//! | UT1 | Earth rotation time | TAI + (UT1−TAI) from IERS |
//! | TCG | Geocentric Coordinate Time | TT rescaled by L_G |
//! | TDB | Barycentric Dynamical Time | TT + periodic terms (≤ 1.7 ms) |
//! | TCB | Barycentric Coordinate Time | TDB rescaled by L_B |
//!
//! Each scale is a newtype around a [`JulianDate`], so a TT date cannot be
//! passed where a UTC one is expected. Conversions are traits in
//! [`conversions`]:
//!
//! ```
//! use celestial_time::{JulianDate, ToTAI, ToTT, TAI};
//!
//! let tai = TAI::from_julian_date(JulianDate::new(2453750.5, 0.892100694));
//! let tt = tai.to_tt().unwrap();
//! let back = tt.to_tai().unwrap();
//! assert!((back.to_julian_date().jd2 - 0.892100694).abs() < 1e-15);
//! ```
//!
//! Offsets are always applied to the smaller-magnitude part of the date.

pub mod conversions;

use crate::datetime::{parse_datetime_fields, TimeScale};
use crate::julian::JulianDate;
use crate::TimeResult;
use std::fmt;

macro_rules! time_scale {
    ($(#[$doc:meta])* $name:ident, $label:literal, $scale:expr, $from_calendar:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(JulianDate);

        impl $name {
            pub fn from_julian_date(jd: JulianDate) -> Self {
                Self(jd)
            }

            pub fn from_julian_date_raw(jd1: f64, jd2: f64) -> Self {
                Self(JulianDate::new(jd1, jd2))
            }

            pub fn j2000() -> Self {
                Self(JulianDate::j2000())
            }

            pub fn to_julian_date(&self) -> JulianDate {
                self.0
            }

            pub fn add_seconds(&self, seconds: f64) -> Self {
                Self(self.0.add_seconds(seconds))
            }

            pub fn add_days(&self, days: f64) -> Self {
                Self(self.0.add_days(days))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl From<JulianDate> for $name {
            fn from(jd: JulianDate) -> Self {
                Self::from_julian_date(jd)
            }
        }

        #[doc = concat!("A ", $label, " date from calendar date and time of day.")]
        pub fn $from_calendar(
            year: i32,
            month: i32,
            day: i32,
            hour: i32,
            minute: i32,
            second: f64,
        ) -> TimeResult<$name> {
            let (jd, _) = parse_datetime_fields($scale, year, month, day, hour, minute, second)?;
            Ok($name(jd))
        }
    };
}

time_scale!(
    /// International Atomic Time.
    TAI, "TAI", TimeScale::TAI, tai_from_calendar
);
time_scale!(
    /// Coordinated Universal Time, in the quasi-Julian Date convention: the
    /// fraction is of the true length of the UTC day, so a leap second never
    /// produces an ambiguous date.
    UTC, "UTC", TimeScale::UTC, utc_from_calendar
);
time_scale!(
    /// Terrestrial Time.
    TT, "TT", TimeScale::TT, tt_from_calendar
);
time_scale!(
    /// Barycentric Dynamical Time.
    TDB, "TDB", TimeScale::TDB, tdb_from_calendar
);
time_scale!(
    /// Barycentric Coordinate Time.
    TCB, "TCB", TimeScale::TCB, tcb_from_calendar
);
time_scale!(
    /// Geocentric Coordinate Time.
    TCG, "TCG", TimeScale::TCG, tcg_from_calendar
);
time_scale!(
    /// Universal Time, the Earth rotation angle expressed as time.
    UT1, "UT1", TimeScale::UT1, ut1_from_calendar
);
