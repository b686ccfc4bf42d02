use crate::calendar::jd_to_calendar;
use crate::constants::SECONDS_TO_DAYS;
use crate::datetime::{parse_datetime_fields, TimeScale};
use crate::TimeResult;
use celestial_core::constants::J2000_JD;
use celestial_core::utils::add_to_smaller_part;
use std::fmt;

/// A Julian Date held as two parts whose sum is the date.
///
/// Keeping the epoch and the offset apart preserves precision: a single
/// `f64` near 2.45 million days resolves only about 40 µs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Adds days to whichever part has the smaller magnitude.
    pub fn add_days(&self, days: f64) -> Self {
        let (jd1, jd2) = add_to_smaller_part(self.jd1, self.jd2, days);
        Self::new(jd1, jd2)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// Calendar date and time with 86400 s days.
    ///
    /// For UTC, whose days may hold a leap second, use
    /// [`parse_datetime_fields`] with [`TimeScale::UTC`].
    pub fn from_calendar(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
    ) -> TimeResult<Self> {
        let (jd, _) = parse_datetime_fields(TimeScale::TT, year, month, day, hour, minute, second)?;
        Ok(jd)
    }

    /// Gregorian `(year, month, day, day_fraction)`.
    pub fn to_calendar(&self) -> TimeResult<(i32, i32, i32, f64)> {
        jd_to_calendar(self.jd1, self.jd2)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}
