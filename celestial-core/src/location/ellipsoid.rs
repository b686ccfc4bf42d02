//! Reference ellipsoids.
//!
//! The integer identifiers are the conventional ones used by geodesy
//! routines: 1 = WGS84, 2 = GRS80, 3 = WGS72.
//!
//! ```
//! use celestial_core::Ellipsoid;
//!
//! let (a, f) = Ellipsoid::from_id(1)?.parameters();
//! assert_eq!(a, 6378137.0);
//! assert_eq!(f, 1.0 / 298.257223563);
//! # Ok::<(), celestial_core::AstroError>(())
//! ```

use crate::errors::{AstroError, AstroResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ellipsoid {
    Wgs84 = 1,
    Grs80 = 2,
    Wgs72 = 3,
}

impl Ellipsoid {
    /// Looks up an ellipsoid by identifier.
    ///
    /// # Errors
    ///
    /// [`AstroError::InvalidParameter`] with status -1 for any identifier
    /// other than 1, 2 or 3.
    pub fn from_id(id: i32) -> AstroResult<Self> {
        match id {
            1 => Ok(Self::Wgs84),
            2 => Ok(Self::Grs80),
            3 => Ok(Self::Wgs72),
            _ => Err(AstroError::invalid_parameter(
                "Ellipsoid::from_id",
                -1,
                &format!("unknown ellipsoid identifier {}", id),
            )),
        }
    }

    pub fn id(self) -> i32 {
        self as i32
    }

    /// Equatorial radius in meters and flattening, `(a, f)`.
    pub fn parameters(self) -> (f64, f64) {
        match self {
            Self::Wgs84 => (6378137.0, 1.0 / 298.257223563),
            Self::Grs80 => (6378137.0, 1.0 / 298.257222101),
            Self::Wgs72 => (6378135.0, 1.0 / 298.26),
        }
    }

    pub fn semi_major_axis(self) -> f64 {
        self.parameters().0
    }

    pub fn flattening(self) -> f64 {
        self.parameters().1
    }

    /// First eccentricity squared, `e² = f(2 - f)`.
    pub fn eccentricity_squared(self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }
}

impl TryFrom<i32> for Ellipsoid {
    type Error = AstroError;

    fn try_from(id: i32) -> AstroResult<Self> {
        Self::from_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters() {
        let (a, f) = Ellipsoid::Wgs84.parameters();
        assert_eq!(a, 6378137.0);
        assert!((f - 0.3352810664747480720e-2).abs() < 1e-18);
        let (a, f) = Ellipsoid::Grs80.parameters();
        assert_eq!(a, 6378137.0);
        assert!((f - 0.3352810681182318935e-2).abs() < 1e-18);
        let (a, f) = Ellipsoid::Wgs72.parameters();
        assert_eq!(a, 6378135.0);
        assert!((f - 0.3352779454167504862e-2).abs() < 1e-18);
    }

    #[test]
    fn test_unknown_identifier() {
        for id in [0, 4, 99, -1] {
            let err = Ellipsoid::from_id(id).unwrap_err();
            assert_eq!(err.status_code(), -1);
        }
    }

    #[test]
    fn test_identifier_roundtrip() {
        for e in [Ellipsoid::Wgs84, Ellipsoid::Grs80, Ellipsoid::Wgs72] {
            assert_eq!(Ellipsoid::try_from(e.id()).unwrap(), e);
        }
    }
}
