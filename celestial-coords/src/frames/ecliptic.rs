//! Ecliptic coordinates, mean equinox and ecliptic of date, IAU 2006.
//!
//! The ICRS → ecliptic matrix is the IAU 2006 precession-bias matrix followed
//! by a rotation about the x-axis through the mean obliquity of date:
//!
//! ```text
//! R = Rx(εA) · P·B
//! ```

use crate::{transforms::CoordinateFrame, CoordError, CoordResult, ICRSPosition};
use celestial_core::angle::{wrap_0_2pi, wrap_pm_pi};
use celestial_core::obliquity::iau_2006_mean_obliquity;
use celestial_core::precession::PrecessionIAU2006;
use celestial_core::{Angle, RotationMatrix3, Vector3};
use celestial_time::epochs::julian_epoch;
use celestial_time::TT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ICRS → mean ecliptic and equinox of date, for a TT date.
pub fn ecliptic_matrix(date1: f64, date2: f64) -> RotationMatrix3 {
    let bias_precession = PrecessionIAU2006::new().precession_bias_matrix(date1, date2);

    let mut rotation = RotationMatrix3::identity();
    rotation.rotate_x(iau_2006_mean_obliquity(date1, date2));

    rotation.multiply(&bias_precession)
}

/// ICRS (RA, Dec) to ecliptic (λ, β) of date.
///
/// λ is returned in [0, 2π) and β in [−π, π).
///
/// ```
/// use celestial_coords::frames::icrs_to_ecliptic;
///
/// let (lon, lat) = icrs_to_ecliptic(1234.5, 2440000.5, 1.234, 0.987);
/// assert!((lon - 1.342509918994654619).abs() < 1e-14);
/// assert!((lat - 0.5926215259704608132).abs() < 1e-14);
/// ```
pub fn icrs_to_ecliptic(date1: f64, date2: f64, ra: f64, dec: f64) -> (f64, f64) {
    let v = ecliptic_matrix(date1, date2).apply_to_vector(Vector3::from_spherical(ra, dec));
    let (lon, lat) = v.to_spherical();
    (wrap_0_2pi(lon), wrap_pm_pi(lat))
}

/// Ecliptic (λ, β) of date to ICRS (RA, Dec).
pub fn ecliptic_to_icrs(date1: f64, date2: f64, lon: f64, lat: f64) -> (f64, f64) {
    let v = ecliptic_matrix(date1, date2).transpose_apply(Vector3::from_spherical(lon, lat));
    let (ra, dec) = v.to_spherical();
    (wrap_0_2pi(ra), wrap_pm_pi(dec))
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticPosition {
    lambda: Angle,
    beta: Angle,
    epoch: TT,
}

impl EclipticPosition {
    /// λ is wrapped to [0, 2π); β must lie in [−π/2, π/2].
    pub fn new(lambda: Angle, beta: Angle, epoch: TT) -> CoordResult<Self> {
        if !(-Angle::HALF_PI.radians()..=Angle::HALF_PI.radians()).contains(&beta.radians()) {
            return Err(CoordError::invalid_coordinate(format!(
                "ecliptic latitude {}° outside [-90°, 90°]",
                beta.degrees()
            )));
        }

        Ok(Self {
            lambda: lambda.normalized(),
            beta,
            epoch,
        })
    }

    pub fn from_degrees(lambda_deg: f64, beta_deg: f64, epoch: TT) -> CoordResult<Self> {
        Self::new(
            Angle::from_degrees(lambda_deg),
            Angle::from_degrees(beta_deg),
            epoch,
        )
    }

    pub fn lambda(&self) -> Angle {
        self.lambda
    }

    pub fn beta(&self) -> Angle {
        self.beta
    }

    pub fn epoch(&self) -> TT {
        self.epoch
    }

    pub fn mean_obliquity(&self) -> Angle {
        let jd = self.epoch.to_julian_date();
        Angle::from_radians(iau_2006_mean_obliquity(jd.jd1(), jd.jd2()))
    }

    pub fn north_ecliptic_pole(epoch: TT) -> Self {
        Self {
            lambda: Angle::ZERO,
            beta: Angle::HALF_PI,
            epoch,
        }
    }

    pub fn south_ecliptic_pole(epoch: TT) -> Self {
        Self {
            lambda: Angle::ZERO,
            beta: -Angle::HALF_PI,
            epoch,
        }
    }

    pub fn angular_separation(&self, other: &Self) -> Angle {
        let (sin_b1, cos_b1) = self.beta.sin_cos();
        let (sin_b2, cos_b2) = other.beta.sin_cos();
        let delta_lambda = (self.lambda - other.lambda).radians();

        Angle::from_radians(celestial_core::math::vincenty_angular_separation(
            sin_b1,
            cos_b1,
            sin_b2,
            cos_b2,
            delta_lambda,
        ))
    }
}

impl CoordinateFrame for EclipticPosition {
    /// Uses the position's own equinox; `epoch` is ignored.
    fn to_icrs(&self, _epoch: &TT) -> CoordResult<ICRSPosition> {
        let jd = self.epoch.to_julian_date();
        let (ra, dec) = ecliptic_to_icrs(
            jd.jd1(),
            jd.jd2(),
            self.lambda.radians(),
            self.beta.radians(),
        );
        ICRSPosition::new(Angle::from_radians(ra), Angle::from_radians(dec))
    }

    fn from_icrs(icrs: &ICRSPosition, epoch: &TT) -> CoordResult<Self> {
        let jd = epoch.to_julian_date();
        let (lambda, beta) =
            icrs_to_ecliptic(jd.jd1(), jd.jd2(), icrs.ra().radians(), icrs.dec().radians());
        Self::new(Angle::from_radians(lambda), Angle::from_radians(beta), *epoch)
    }
}

impl std::fmt::Display for EclipticPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let jd = self.epoch.to_julian_date();
        write!(
            f,
            "Ecliptic(λ={:.6}°, β={:.6}°, epoch=J{:.1})",
            self.lambda.degrees(),
            self.beta.degrees(),
            julian_epoch(jd.jd1(), jd.jd2())
        )
    }
}
