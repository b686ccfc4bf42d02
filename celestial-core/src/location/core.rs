//! Observer location on Earth in WGS84 geodetic coordinates.
//!
//! - **Latitude**: north positive, radians, `[-pi/2, pi/2]`
//! - **Longitude**: east positive, radians, `[-pi, pi]`
//! - **Height**: meters above the WGS84 ellipsoid (not sea level)
//!
//! ```
//! use celestial_core::Location;
//!
//! // Mauna Kea summit
//! let obs = Location::from_degrees(19.8207, -155.4681, 4205.0)?;
//! assert!((obs.latitude_degrees() - 19.8207).abs() < 1e-10);
//!
//! let (u, v) = obs.to_geocentric_km()?;
//! assert!(u > 6000.0 && v > 2100.0);
//! # Ok::<(), celestial_core::AstroError>(())
//! ```

use super::{geodetic_to_geocentric, Ellipsoid};
use crate::constants::{HALF_PI, PI};
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::matrix::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic location on Earth in WGS84 geodetic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Geodetic latitude in radians. North is positive.
    pub latitude: f64,
    /// Geodetic longitude in radians. East is positive.
    pub longitude: f64,
    /// Height above WGS84 ellipsoid in meters.
    pub height: f64,
}

fn invalid(kind: MathErrorKind, message: &str) -> AstroError {
    AstroError::math_error("location_validation", kind, message)
}

impl Location {
    /// Creates a location from radians and meters.
    ///
    /// # Errors
    ///
    /// Non-finite values, a latitude beyond ±pi/2, a longitude beyond ±pi, or a
    /// height outside `[-12000, 100000]` meters.
    pub fn new(latitude: f64, longitude: f64, height: f64) -> AstroResult<Self> {
        if !latitude.is_finite() {
            return Err(invalid(MathErrorKind::NotFinite, "Latitude must be finite"));
        }
        if !longitude.is_finite() {
            return Err(invalid(MathErrorKind::NotFinite, "Longitude must be finite"));
        }
        if !height.is_finite() {
            return Err(invalid(MathErrorKind::NotFinite, "Height must be finite"));
        }
        if latitude.abs() > HALF_PI {
            return Err(invalid(
                MathErrorKind::OutOfRange,
                "Latitude outside valid range [-π/2, π/2]",
            ));
        }
        if longitude.abs() > PI {
            return Err(invalid(
                MathErrorKind::OutOfRange,
                "Longitude outside valid range [-π, π]",
            ));
        }
        if !(-12000.0..=100000.0).contains(&height) {
            return Err(invalid(
                MathErrorKind::OutOfRange,
                "Height outside reasonable range [-12000, 100000] meters",
            ));
        }

        Ok(Self {
            latitude,
            longitude,
            height,
        })
    }

    /// Creates a location from degrees and meters.
    pub fn from_degrees(lat_deg: f64, lon_deg: f64, height_m: f64) -> AstroResult<Self> {
        if lat_deg.abs() > 90.0 {
            return Err(invalid(
                MathErrorKind::OutOfRange,
                "Latitude outside valid range [-90, 90] degrees",
            ));
        }
        if lon_deg.abs() > 180.0 {
            return Err(invalid(
                MathErrorKind::OutOfRange,
                "Longitude outside valid range [-180, 180] degrees",
            ));
        }
        Self::new(lat_deg.to_radians(), lon_deg.to_radians(), height_m)
    }

    /// The Airy transit circle at the Royal Observatory, Greenwich
    /// (51.477928° N, 0°, 46 m).
    pub const fn greenwich() -> Self {
        Self {
            latitude: 0.8984593357045795,
            longitude: 0.0,
            height: 46.0,
        }
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    pub fn latitude_angle(&self) -> crate::Angle {
        crate::Angle::from_radians(self.latitude)
    }

    pub fn longitude_angle(&self) -> crate::Angle {
        crate::Angle::from_radians(self.longitude)
    }

    /// Geocentric Cartesian position in meters on the WGS84 ellipsoid.
    pub fn to_geocentric(&self) -> AstroResult<Vector3> {
        geodetic_to_geocentric(Ellipsoid::Wgs84, self.longitude, self.latitude, self.height)
    }

    /// Cylindrical geocentric components in kilometers, `(u, v)`.
    ///
    /// `u` is the distance from the Earth's spin axis and `v` the distance
    /// north of the equatorial plane. These are the site inputs of the
    /// topocentric terms in TDB − TT.
    pub fn to_geocentric_km(&self) -> AstroResult<(f64, f64)> {
        let xyz = self.to_geocentric()?;
        let u = libm::sqrt(xyz.x * xyz.x + xyz.y * xyz.y);
        Ok((u / 1000.0, xyz.z / 1000.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_close, assert_float_eq};

    #[test]
    fn test_from_degrees() {
        let loc = Location::from_degrees(45.0, 90.0, 1000.0).unwrap();
        assert!((loc.latitude - 45.0_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude - 90.0_f64.to_radians()).abs() < 1e-15);
        assert_eq!(loc.height, 1000.0);
        assert_float_eq(loc.longitude_angle().degrees(), 90.0, 1);
    }

    #[test]
    fn test_validation_errors() {
        use MathErrorKind::{NotFinite, OutOfRange};
        let cases = [
            (Location::new(f64::NAN, 0.0, 0.0), NotFinite, "Latitude must be finite"),
            (Location::new(0.0, f64::INFINITY, 0.0), NotFinite, "Longitude must be finite"),
            (Location::new(0.0, 0.0, f64::NAN), NotFinite, "Height must be finite"),
            (Location::new(PI, 0.0, 0.0), OutOfRange, "outside valid range"),
            (Location::new(0.0, -2.0 * PI, 0.0), OutOfRange, "outside valid range"),
            (Location::new(0.0, 0.0, 200000.0), OutOfRange, "outside reasonable range"),
            (Location::from_degrees(95.0, 0.0, 0.0), OutOfRange, "[-90, 90]"),
            (Location::from_degrees(0.0, -185.0, 0.0), OutOfRange, "[-180, 180]"),
            (Location::from_degrees(f64::NAN, 0.0, 0.0), NotFinite, "Latitude must be finite"),
        ];
        for (result, expected_kind, needle) in cases {
            let err = result.unwrap_err();
            assert!(err.to_string().contains(needle), "{} !~ {}", err, needle);
            match &err {
                AstroError::MathError { kind, .. } => assert_eq!(*kind, expected_kind),
                other => panic!("expected MathError, got {:?}", other),
            }
            assert_eq!(err.status_code(), -1);
        }
    }

    #[test]
    fn test_geocentric_at_equator_and_pole() {
        let (u, v) = Location::from_degrees(0.0, 0.0, 0.0).unwrap().to_geocentric_km().unwrap();
        assert_float_eq(u, 6378.137, 1);
        assert_eq!(v, 0.0);

        let pole = Location::from_degrees(90.0, 0.0, 0.0).unwrap();
        let (u, v) = pole.to_geocentric_km().unwrap();
        assert!(u.abs() < 1e-9);
        assert_close(v, 6356.752314245179, 1e-9, "polar radius");
    }

    #[test]
    fn test_greenwich() {
        let g = Location::greenwich();
        assert_close(g.latitude_degrees(), 51.477928, 1e-12, "latitude");
        assert_eq!(g.longitude, 0.0);
        assert_eq!(g.height, 46.0);
    }

    #[test]
    fn test_geocentric_with_height() {
        let sea = Location::from_degrees(0.0, 0.0, 0.0).unwrap();
        let raised = Location::from_degrees(0.0, 0.0, 1000.0).unwrap();
        let (u1, _) = sea.to_geocentric_km().unwrap();
        let (u2, _) = raised.to_geocentric_km().unwrap();
        assert_close(u2 - u1, 1.0, 1e-9, "1 km of height");
    }

    #[test]
    fn test_southern_hemisphere() {
        let loc = Location::from_degrees(-45.0, 0.0, 0.0).unwrap();
        let (u, v) = loc.to_geocentric_km().unwrap();
        assert!(u > v.abs());
        assert!(v < 0.0);
    }
}
