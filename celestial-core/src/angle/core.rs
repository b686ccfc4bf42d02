//! Core angle type.
//!
//! [`Angle`] stores radians and converts to and from degrees, hours and
//! arcseconds. The free routines elsewhere in the workspace take raw `f64`
//! radians; `Angle` is used where a value crosses an API boundary and the
//! unit would otherwise be ambiguous (catalog positions, frame types).
//!
//! ```
//! use celestial_core::Angle;
//!
//! let from_deg = Angle::from_degrees(45.0);
//! let from_hrs = Angle::from_hours(3.0);
//! assert!((from_deg.radians() - from_hrs.radians()).abs() < 1e-15);
//!
//! let (sin, cos) = from_deg.sin_cos();
//! assert!((sin - cos).abs() < 1e-15);
//! ```

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::constants::{ARCSEC_TO_RAD, HALF_PI, PI};

/// An angular measurement stored as radians.
///
/// Note: `Eq` and `Ord` are not implemented because f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// Pi/2 radians (90 degrees).
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from hours (24h = 360 degrees).
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let ra = Angle::from_hours(6.0);
    /// assert!((ra.degrees() - 90.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * 15.0).to_radians(),
        }
    }

    /// Creates an angle from arcseconds.
    ///
    /// Parallaxes and proper motions are usually quoted in arcseconds or
    /// milliarcseconds.
    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: arcsec * ARCSEC_TO_RAD,
        }
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Returns the angle in hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    /// Returns the angle in arcseconds.
    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.rad / ARCSEC_TO_RAD
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Returns `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Wraps the angle to [-pi, +pi).
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let wrapped = Angle::from_degrees(270.0).wrapped();
    /// assert!((wrapped.degrees() - (-90.0)).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }

    /// Normalizes the angle to [0, 2pi).
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let normalized = Angle::from_degrees(-90.0).normalized();
    /// assert!((normalized.degrees() - 270.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.rad + rhs.rad)
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.rad - rhs.rad)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle::from_radians(self.rad * k)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        Angle::from_radians(self.rad / k)
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_radians(-self.rad)
    }
}

/// Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Shorthand for [`Angle::from_hours`].
#[inline]
pub fn hours(v: f64) -> Angle {
    Angle::from_hours(v)
}

/// Shorthand for [`Angle::from_arcseconds`].
#[inline]
pub fn arcsec(v: f64) -> Angle {
    Angle::from_arcseconds(v)
}
