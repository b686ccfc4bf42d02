use crate::constants::ICRS_TO_GALACTIC;
use crate::{transforms::CoordinateFrame, CoordError, CoordResult, ICRSPosition};
use celestial_core::angle::{wrap_0_2pi, wrap_pm_pi};
use celestial_core::{Angle, RotationMatrix3, Vector3};
use celestial_time::TT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ROTATION: RotationMatrix3 = RotationMatrix3::from_array(ICRS_TO_GALACTIC);

/// ICRS (RA, Dec) to galactic (l, b); l in [0, 2π), b in [−π, π).
///
/// ```
/// use celestial_coords::frames::icrs_to_galactic;
///
/// let (l, b) = icrs_to_galactic(5.9338074302227188048671087, -1.1784870613579944551540570);
/// assert!((l - 5.5850536063818546461558).abs() < 1e-14);
/// assert!((b - -0.7853981633974483096157).abs() < 1e-14);
/// ```
pub fn icrs_to_galactic(ra: f64, dec: f64) -> (f64, f64) {
    let v = ROTATION.apply_to_vector(Vector3::from_spherical(ra, dec));
    let (l, b) = v.to_spherical();
    (wrap_0_2pi(l), wrap_pm_pi(b))
}

/// Galactic (l, b) to ICRS (RA, Dec); RA in [0, 2π), Dec in [−π, π).
pub fn galactic_to_icrs(l: f64, b: f64) -> (f64, f64) {
    let v = ROTATION.transpose_apply(Vector3::from_spherical(l, b));
    let (ra, dec) = v.to_spherical();
    (wrap_0_2pi(ra), wrap_pm_pi(dec))
}

/// A position in galactic coordinates. The frame is fixed, so no epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GalacticPosition {
    l: Angle,
    b: Angle,
}

impl GalacticPosition {
    pub fn new(l: Angle, b: Angle) -> CoordResult<Self> {
        if !(-Angle::HALF_PI.radians()..=Angle::HALF_PI.radians()).contains(&b.radians()) {
            return Err(CoordError::invalid_coordinate(format!(
                "galactic latitude {}° outside [-90°, 90°]",
                b.degrees()
            )));
        }
        Ok(Self {
            l: l.normalized(),
            b,
        })
    }

    pub fn from_degrees(l_deg: f64, b_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(l_deg), Angle::from_degrees(b_deg))
    }

    pub fn galactic_center() -> Self {
        Self {
            l: Angle::ZERO,
            b: Angle::ZERO,
        }
    }

    pub fn north_galactic_pole() -> Self {
        Self {
            l: Angle::ZERO,
            b: Angle::HALF_PI,
        }
    }

    pub fn l(&self) -> Angle {
        self.l
    }

    pub fn b(&self) -> Angle {
        self.b
    }

    pub fn to_icrs_position(&self) -> CoordResult<ICRSPosition> {
        let (ra, dec) = galactic_to_icrs(self.l.radians(), self.b.radians());
        ICRSPosition::new(Angle::from_radians(ra), Angle::from_radians(dec))
    }

    pub fn from_icrs_position(icrs: &ICRSPosition) -> CoordResult<Self> {
        let (l, b) = icrs_to_galactic(icrs.ra().radians(), icrs.dec().radians());
        Self::new(Angle::from_radians(l), Angle::from_radians(b))
    }
}

impl CoordinateFrame for GalacticPosition {
    fn to_icrs(&self, _epoch: &TT) -> CoordResult<ICRSPosition> {
        self.to_icrs_position()
    }

    fn from_icrs(icrs: &ICRSPosition, _epoch: &TT) -> CoordResult<Self> {
        Self::from_icrs_position(icrs)
    }
}

impl std::fmt::Display for GalacticPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Galactic(l={:.6}°, b={:.6}°)", self.l.degrees(), self.b.degrees())
    }
}
