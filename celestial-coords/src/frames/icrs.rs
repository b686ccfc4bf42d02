use crate::{transforms::CoordinateFrame, CoordError, CoordResult};
use crate::{EclipticPosition, GalacticPosition};
use celestial_core::angle::position_angle;
use celestial_core::{Angle, Vector3};
use celestial_time::TT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A direction in the International Celestial Reference System.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ICRSPosition {
    ra: Angle,
    dec: Angle,
}

impl ICRSPosition {
    /// RA is wrapped to [0, 2π); Dec must lie in [−π/2, π/2].
    pub fn new(ra: Angle, dec: Angle) -> CoordResult<Self> {
        if !dec.radians().is_finite() || dec.abs().radians() > Angle::HALF_PI.radians() {
            return Err(CoordError::invalid_coordinate(format!(
                "declination {}° outside [-90°, 90°]",
                dec.degrees()
            )));
        }

        Ok(Self {
            ra: ra.normalized(),
            dec,
        })
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_hours(ra_hours), Angle::from_degrees(dec_deg))
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    pub fn unit_vector(&self) -> Vector3 {
        Vector3::from_spherical(self.ra.radians(), self.dec.radians())
    }

    /// Direction of any non-null vector.
    pub fn from_unit_vector(v: Vector3) -> CoordResult<Self> {
        if v.magnitude() == 0.0 {
            return Err(CoordError::invalid_coordinate("Zero vector"));
        }
        let (ra, dec) = v.to_spherical();
        Self::new(Angle::from_radians(ra), Angle::from_radians(dec))
    }

    pub fn angular_separation(&self, other: &Self) -> Angle {
        let (sin_dec1, cos_dec1) = self.dec.sin_cos();
        let (sin_dec2, cos_dec2) = other.dec.sin_cos();
        let delta_ra = (other.ra - self.ra).radians();

        Angle::from_radians(celestial_core::math::vincenty_angular_separation(
            sin_dec1, cos_dec1, sin_dec2, cos_dec2, delta_ra,
        ))
    }

    /// Position angle of `other` from this position, north through east.
    pub fn position_angle_to(&self, other: &Self) -> Angle {
        Angle::from_radians(position_angle(
            self.ra.radians(),
            self.dec.radians(),
            other.ra.radians(),
            other.dec.radians(),
        ))
    }

    pub fn to_galactic(&self) -> CoordResult<GalacticPosition> {
        GalacticPosition::from_icrs_position(self)
    }

    pub fn to_ecliptic(&self, epoch: &TT) -> CoordResult<EclipticPosition> {
        EclipticPosition::from_icrs(self, epoch)
    }
}

impl CoordinateFrame for ICRSPosition {
    fn to_icrs(&self, _epoch: &TT) -> CoordResult<ICRSPosition> {
        Ok(*self)
    }

    fn from_icrs(icrs: &ICRSPosition, _epoch: &TT) -> CoordResult<Self> {
        Ok(*icrs)
    }
}

impl std::fmt::Display for ICRSPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ICRS(RA={:.6}°, Dec={:.6}°)",
            self.ra.degrees(),
            self.dec.degrees()
        )
    }
}
