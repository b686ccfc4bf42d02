use celestial_core::angle::{radians_to_hms, wrap_0_2pi, wrap_pm_pi, Sexagesimal};
use celestial_core::constants::{PI, RAD_TO_DEG};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const HOURS_TO_RAD: f64 = PI / 12.0;

/// A sidereal time, kept in radians in [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealAngle {
    radians: f64,
}

impl SiderealAngle {
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians: wrap_0_2pi(radians),
        }
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_radians(hours * HOURS_TO_RAD)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees / RAD_TO_DEG)
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn hours(&self) -> f64 {
        self.radians / HOURS_TO_RAD
    }

    pub fn degrees(&self) -> f64 {
        self.radians * RAD_TO_DEG
    }

    /// Local sidereal time at `east_longitude` radians.
    pub fn local(&self, east_longitude: f64) -> Self {
        Self::from_radians(self.radians + east_longitude)
    }

    /// Hour angle in hours, in [−12, +12), of a target at `ra_hours`.
    ///
    /// Positive west of the meridian.
    pub fn hour_angle_to_target(&self, ra_hours: f64) -> f64 {
        wrap_pm_pi(self.radians - ra_hours * HOURS_TO_RAD) / HOURS_TO_RAD
    }

    /// Hours, minutes, seconds with `ndp` decimal places of seconds.
    pub fn to_hms(&self, ndp: i32) -> Sexagesimal {
        radians_to_hms(ndp, self.radians)
    }
}

impl fmt::Display for SiderealAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}h", self.hours())
    }
}
