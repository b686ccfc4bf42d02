//! Catalog space motion.
//!
//! A [`CatalogStar`] holds the six astrometric parameters of a catalog entry.
//! [`CatalogStar::to_pv`] turns them into a barycentric position and velocity
//! (AU, AU/day) and [`CatalogStar::from_pv`] goes back; together they let
//! [`CatalogStar::propagate`] move a star rigorously from one epoch to another,
//! foreshortening and light time included.
//!
//! The catalog's radial velocity and proper motion describe how the star is
//! *seen* to move, which differs from its inertial motion by the special
//! relativistic Doppler factor. The conversion solves for the inertial
//! velocity by fixed-point iteration.
//!
//! Distant or badly measured stars get help rather than errors: a zero or
//! negative parallax is floored, and a space motion faster than c/2 is
//! replaced by zero. Both are reported in [`StarMotionFlags`].

use crate::constants::{
    MAX_RELATIVISTIC_ITERATIONS, MAX_SPEED_FRACTION_OF_C, MIN_PARALLAX_ARCSEC,
    SAFE_MIN_PARALLAX_ARCSEC, SAFE_PARALLAX_PER_PROPER_MOTION,
};
use crate::{CoordError, CoordResult};
use celestial_core::angle::{spherical_separation, wrap_0_2pi};
use celestial_core::constants::{
    ARCSEC_PER_RAD, DAYS_PER_JULIAN_YEAR, KM_PER_S_TO_AU_PER_DAY, SPEED_OF_LIGHT_AU_PER_DAY,
};
use celestial_core::{PositionVelocity, Vector3};
use celestial_time::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Astrometric parameters of a star at some epoch.
///
/// | Field | Unit |
/// |-------|------|
/// | `ra`, `dec` | radians |
/// | `pm_ra` | radians/year, dα/dt (not multiplied by cos δ) |
/// | `pm_dec` | radians/year |
/// | `parallax` | arcsec |
/// | `radial_velocity` | km/s, positive receding |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogStar {
    pub ra: f64,
    pub dec: f64,
    pub pm_ra: f64,
    pub pm_dec: f64,
    pub parallax: f64,
    pub radial_velocity: f64,
}

/// Warnings raised while building a space motion. None of them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StarMotionFlags {
    /// The parallax was raised to a floor.
    pub parallax_floored: bool,
    /// The space speed exceeded c/2 and the velocity was set to zero.
    pub speed_clamped: bool,
    /// The relativistic velocity solution did not converge.
    pub not_converged: bool,
}

impl StarMotionFlags {
    /// Bit set: 1 parallax floored, 2 speed clamped, 4 not converged.
    pub fn status(&self) -> i32 {
        i32::from(self.parallax_floored)
            | i32::from(self.speed_clamped) << 1
            | i32::from(self.not_converged) << 2
    }

    pub fn is_clean(&self) -> bool {
        self.status() == 0
    }
}

/// Doppler factor `d` and correction `del` of the inertial-to-observed
/// velocity relation, solved from the observed radial and transverse speeds
/// in units of c.
///
/// The flag is false if the iteration has not settled after the allowed passes.
fn relativistic_correction(betsr: f64, betst: f64) -> (f64, f64, bool) {
    let (mut betr, mut bett) = (betsr, betst);
    let (mut d, mut del) = (0.0, 0.0);
    let (mut od, mut odel) = (0.0, 0.0);
    let (mut odd, mut oddel) = (0.0, 0.0);

    for i in 0..MAX_RELATIVISTIC_ITERATIONS {
        d = 1.0 + betr;
        let w = betr * betr + bett * bett;
        del = -w / (libm::sqrt(1.0 - w) + 1.0);
        betr = d * betsr + del;
        bett = d * betst;

        if i > 0 {
            let dd = libm::fabs(d - od);
            let ddel = libm::fabs(del - odel);
            if i > 1 && dd >= odd && ddel >= oddel {
                return (d, del, true);
            }
            odd = dd;
            oddel = ddel;
        }
        od = d;
        odel = del;
    }

    (d, del, false)
}

/// Splits `velocity` into its components along and across the unit vector `x`.
fn split_velocity(x: &Vector3, velocity: &Vector3) -> (f64, Vector3, Vector3) {
    let radial_speed = x.dot(velocity);
    let radial = x.scale(radial_speed);
    (radial_speed, radial, *velocity - radial)
}

impl CatalogStar {
    pub fn new(
        ra: f64,
        dec: f64,
        pm_ra: f64,
        pm_dec: f64,
        parallax: f64,
        radial_velocity: f64,
    ) -> Self {
        Self {
            ra,
            dec,
            pm_ra,
            pm_dec,
            parallax,
            radial_velocity,
        }
    }

    /// Barycentric position (AU) and inertial velocity (AU/day).
    ///
    /// ```
    /// use celestial_coords::CatalogStar;
    ///
    /// let star = CatalogStar::new(0.01686756, -1.093989828, -1.78323516e-5, 2.336024047e-6, 0.74723, -21.6);
    /// let (pv, flags) = star.to_pv();
    /// assert!(flags.is_clean());
    /// assert!((pv.position.x - 126668.5912743160601).abs() < 1e-6);
    /// ```
    pub fn to_pv(&self) -> (PositionVelocity, StarMotionFlags) {
        let mut flags = StarMotionFlags::default();

        let parallax = if self.parallax >= MIN_PARALLAX_ARCSEC {
            self.parallax
        } else {
            log::debug!(
                "parallax {} arcsec raised to {} arcsec",
                self.parallax,
                MIN_PARALLAX_ARCSEC
            );
            flags.parallax_floored = true;
            MIN_PARALLAX_ARCSEC
        };

        let distance = ARCSEC_PER_RAD / parallax;
        let radial_rate = self.radial_velocity * KM_PER_S_TO_AU_PER_DAY;
        let ra_rate = self.pm_ra / DAYS_PER_JULIAN_YEAR;
        let dec_rate = self.pm_dec / DAYS_PER_JULIAN_YEAR;

        let mut pv = PositionVelocity::from_spherical(
            self.ra,
            self.dec,
            distance,
            ra_rate,
            dec_rate,
            radial_rate,
        );

        let speed = pv.velocity.magnitude();
        if speed / SPEED_OF_LIGHT_AU_PER_DAY > MAX_SPEED_FRACTION_OF_C {
            log::warn!(
                "space motion of {:.3}c exceeds {}c; velocity set to zero",
                speed / SPEED_OF_LIGHT_AU_PER_DAY,
                MAX_SPEED_FRACTION_OF_C
            );
            pv.velocity = Vector3::zeros();
            flags.speed_clamped = true;
        }

        let (_, x) = pv.position.normalize_with_modulus();
        let (vsr, usr, ust) = split_velocity(&x, &pv.velocity);
        let betsr = vsr / SPEED_OF_LIGHT_AU_PER_DAY;
        let betst = ust.magnitude() / SPEED_OF_LIGHT_AU_PER_DAY;

        let (d, del, converged) = relativistic_correction(betsr, betst);
        if !converged {
            log::warn!(
                "relativistic velocity correction did not converge in {} iterations",
                MAX_RELATIVISTIC_ITERATIONS
            );
            flags.not_converged = true;
        }

        // Observed radial and transverse velocities to inertial.
        let radial_scale = if betsr != 0.0 { d + del / betsr } else { 1.0 };
        pv.velocity = usr.scale(radial_scale) + ust.scale(d);

        (pv, flags)
    }

    /// Catalog parameters from a barycentric position (AU) and inertial
    /// velocity (AU/day).
    ///
    /// Fails with [`CoordError::SuperluminalSpeed`] (status −1) if the
    /// velocity reaches c, and [`CoordError::NullPositionVector`] (−2) if the
    /// position is at the origin.
    pub fn from_pv(pv: &PositionVelocity) -> CoordResult<Self> {
        let (_, x) = pv.position.normalize_with_modulus();
        let (vr, _, ut) = split_velocity(&x, &pv.velocity);

        let bett = ut.magnitude() / SPEED_OF_LIGHT_AU_PER_DAY;
        let betr = vr / SPEED_OF_LIGHT_AU_PER_DAY;

        let d = 1.0 + betr;
        let w = betr * betr + bett * bett;
        if d == 0.0 || w > 1.0 {
            return Err(CoordError::superluminal("pvstar"));
        }
        let del = -w / (libm::sqrt(1.0 - w) + 1.0);

        // Inertial velocity to observed.
        let observed_transverse = ut.scale(1.0 / d);
        let observed_radial = x.scale(SPEED_OF_LIGHT_AU_PER_DAY * (betr - del) / d);
        let observed =
            PositionVelocity::from_vectors(pv.position, observed_radial + observed_transverse);

        let (a, dec, r, ra_rate, dec_rate, radial_rate) = observed.to_spherical();
        if r == 0.0 {
            return Err(CoordError::null_position("pvstar"));
        }

        Ok(Self {
            ra: wrap_0_2pi(a),
            dec,
            pm_ra: ra_rate * DAYS_PER_JULIAN_YEAR,
            pm_dec: dec_rate * DAYS_PER_JULIAN_YEAR,
            parallax: ARCSEC_PER_RAD / r,
            radial_velocity: radial_rate / KM_PER_S_TO_AU_PER_DAY,
        })
    }

    /// The star's parameters at `to`, given its parameters at `from` (TDB).
    ///
    /// Uncorrected catalog coordinates describe where the star was seen, so
    /// the light time at both epochs is allowed for. The flags are those of
    /// [`to_pv`](Self::to_pv) at the starting epoch.
    pub fn propagate(
        &self,
        from: JulianDate,
        to: JulianDate,
    ) -> CoordResult<(Self, StarMotionFlags)> {
        let (pv1, flags) = self.to_pv();

        let light_time_1 = pv1.position.magnitude() / SPEED_OF_LIGHT_AU_PER_DAY;
        let dt = (to.jd1 - from.jd1) + (to.jd2 - from.jd2);

        // Geometric position at the later epoch.
        let pv = pv1.update(dt + light_time_1);

        let r2 = pv.position.magnitude_squared();
        let rdv = pv.position.dot(&pv.velocity);
        let v2 = pv.velocity.magnitude_squared();
        let c2mv2 = SPEED_OF_LIGHT_AU_PER_DAY * SPEED_OF_LIGHT_AU_PER_DAY - v2;
        if c2mv2 <= 0.0 {
            return Err(CoordError::propagation_failed("space motion reaches c"));
        }
        let light_time_2 = (-rdv + libm::sqrt(rdv * rdv + c2mv2 * r2)) / c2mv2;

        let pv2 = pv1.update(dt + (light_time_1 - light_time_2));

        let star = Self::from_pv(&pv2)
            .map_err(|e| CoordError::propagation_failed(format!("at target epoch: {}", e)))?;
        Ok((star, flags))
    }

    /// [`propagate`](Self::propagate) with the parallax floored first so
    /// that the implied transverse speed stays near 1% of c.
    ///
    /// Use for catalogs whose parallaxes are zero, negative or unreliable.
    /// The parallax-floored flag is also set when this override applies.
    pub fn propagate_safe(
        &self,
        from: JulianDate,
        to: JulianDate,
    ) -> CoordResult<(Self, StarMotionFlags)> {
        let proper_motion = spherical_separation(
            self.ra,
            self.dec,
            self.ra + self.pm_ra,
            self.dec + self.pm_dec,
        );

        let floor = (proper_motion * SAFE_PARALLAX_PER_PROPER_MOTION).max(SAFE_MIN_PARALLAX_ARCSEC);
        let overridden = self.parallax < floor;
        let star = Self {
            parallax: if overridden { floor } else { self.parallax },
            ..*self
        };

        let (result, mut flags) = star.propagate(from, to)?;
        flags.parallax_floored |= overridden;
        Ok((result, flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::test_helpers::{assert_close, assert_vector_eq};

    fn reference_star() -> CatalogStar {
        CatalogStar::new(
            0.01686756,
            -1.093989828,
            -1.78323516e-5,
            2.336024047e-6,
            0.74723,
            -21.6,
        )
    }

    #[test]
    fn test_to_pv_reference() {
        let (pv, flags) = reference_star().to_pv();
        assert_eq!(flags.status(), 0);

        assert_close(pv.position.x, 126668.5912743160601, 1e-10, "p x");
        assert_close(pv.position.y, 2136.792716839935195, 1e-12, "p y");
        assert_close(pv.position.z, -245251.2339876830091, 1e-10, "p z");
        assert_vector_eq(
            &pv.velocity,
            &Vector3::new(
                -0.4051854008955659551e-2,
                -0.6253919754414777970e-2,
                0.1189353714588109341e-1,
            ),
            1e-16,
        );
    }

    #[test]
    fn test_from_pv_reference() {
        let pv = PositionVelocity::from_vectors(
            Vector3::new(126668.5912743160601, 2136.792716839935195, -245251.2339876830091),
            Vector3::new(
                -0.4051854008955659551e-2,
                -0.6253919754414777970e-2,
                0.1189353714588109341e-1,
            ),
        );
        let star = CatalogStar::from_pv(&pv).unwrap();

        assert_close(star.ra, 0.1686756e-1, 1e-12, "ra");
        assert_close(star.dec, -1.093989828, 1e-12, "dec");
        assert_close(star.pm_ra, -0.1783235160000472788e-4, 1e-16, "pmr");
        assert_close(star.pm_dec, 0.2336024047000619347e-5, 1e-16, "pmd");
        assert_close(star.parallax, 0.74723, 1e-12, "px");
        assert_close(star.radial_velocity, -21.6, 1e-11, "rv");
    }

    #[test]
    fn test_propagate_reference() {
        let (star, flags) = reference_star()
            .propagate(JulianDate::new(2400000.5, 50083.0), JulianDate::new(2400000.5, 53736.0))
            .unwrap();
        assert!(flags.is_clean());

        assert_close(star.ra, 0.01668919069414256149, 1e-13, "ra");
        assert_close(star.dec, -1.093966454217127897, 1e-13, "dec");
        assert_close(star.pm_ra, -0.1783662682153176524e-4, 1e-17, "pmr");
        assert_close(star.pm_dec, 0.2338092915983989595e-5, 1e-17, "pmd");
        assert_close(star.parallax, 0.7473533835317719243, 1e-13, "px");
        assert_close(star.radial_velocity, -21.59905170476417175, 1e-11, "rv");
    }

    #[test]
    fn test_propagate_safe_reference() {
        let star = CatalogStar::new(1.234, 0.789, 1e-5, -2e-5, 1e-2, 10.0);
        let (moved, flags) = star
            .propagate_safe(
                JulianDate::new(2400000.5, 48348.5625),
                JulianDate::new(2400000.5, 51544.5),
            )
            .unwrap();
        assert_eq!(flags.status(), 0);

        assert_close(moved.ra, 1.234087484501017061, 1e-12, "ra");
        assert_close(moved.dec, 0.7888249982450468567, 1e-12, "dec");
        assert_close(moved.pm_ra, 0.9996457663586073988e-5, 1e-12, "pmr");
        assert_close(moved.pm_dec, -0.2000040085106754565e-4, 1e-16, "pmd");
        assert_close(moved.parallax, 0.9999997295356830666e-2, 1e-12, "px");
        assert_close(moved.radial_velocity, 10.38468380293920069, 1e-10, "rv");
    }

    #[test]
    fn test_propagate_safe_floors_zero_parallax() {
        let star = CatalogStar::new(1.234, 0.789, 1e-5, -2e-5, 0.0, 10.0);
        let (moved, flags) = star
            .propagate_safe(
                JulianDate::new(2400000.5, 48348.5625),
                JulianDate::new(2400000.5, 51544.5),
            )
            .unwrap();
        assert!(flags.parallax_floored);
        assert_eq!(flags.status(), 1);
        assert_close(moved.parallax, 0.006912745884568991493, 1e-12, "floored px");
    }

    #[test]
    fn test_zero_parallax_is_floored() {
        let (pv, flags) = CatalogStar::new(1.0, 0.5, 0.0, 0.0, 0.0, 0.0).to_pv();
        assert!(flags.parallax_floored);
        assert_eq!(flags.status(), 1);
        assert_close(
            pv.position.magnitude(),
            ARCSEC_PER_RAD / MIN_PARALLAX_ARCSEC,
            1.0,
            "floored distance",
        );
    }

    #[test]
    fn test_excessive_speed_is_clamped() {
        let (pv, flags) = CatalogStar::new(1.0, 0.5, 1e-2, 0.0, 1e-6, 0.0).to_pv();
        assert!(flags.speed_clamped);
        assert_eq!(flags.status(), 2);
        assert_eq!(pv.velocity, Vector3::zeros());
    }

    #[test]
    fn test_from_pv_errors() {
        let null = PositionVelocity::from_vectors(Vector3::zeros(), Vector3::new(1e-3, 0.0, 0.0));
        let err = CatalogStar::from_pv(&null).unwrap_err();
        assert_eq!(err.status_code(), -2);

        let fast = PositionVelocity::from_vectors(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.1 * SPEED_OF_LIGHT_AU_PER_DAY, 0.0, 0.0),
        );
        let err = CatalogStar::from_pv(&fast).unwrap_err();
        assert!(matches!(err, CoordError::SuperluminalSpeed { .. }));
        assert_eq!(err.status_code(), -1);
    }

    #[test]
    fn test_round_trip() {
        let star = CatalogStar::new(4.5, 0.3, 2e-7, -1e-7, 0.05, 35.0);
        let (pv, _) = star.to_pv();
        let back = CatalogStar::from_pv(&pv).unwrap();

        assert_close(back.ra, star.ra, 1e-13, "ra");
        assert_close(back.dec, star.dec, 1e-13, "dec");
        assert_close(back.pm_ra, star.pm_ra, 1e-18, "pmr");
        assert_close(back.pm_dec, star.pm_dec, 1e-18, "pmd");
        assert_close(back.parallax, star.parallax, 1e-14, "px");
        assert_close(back.radial_velocity, star.radial_velocity, 1e-9, "rv");
    }

    #[test]
    fn test_flags_status_bits() {
        let flags = StarMotionFlags {
            parallax_floored: true,
            speed_clamped: false,
            not_converged: true,
        };
        assert_eq!(flags.status(), 5);
        assert!(!flags.is_clean());
    }

    #[test]
    fn test_relativistic_correction_converges() {
        let (d, del, converged) = relativistic_correction(1e-4, 1e-4);
        assert!(converged);
        assert!((d - 1.0).abs() < 2e-4);
        assert!(del < 0.0 && del > -1e-7);

        let (d, del, _) = relativistic_correction(0.0, 0.0);
        assert_eq!((d, del), (1.0, 0.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let star = reference_star();
        let json = serde_json::to_string(&star).unwrap();
        let back: CatalogStar = serde_json::from_str(&json).unwrap();
        assert_eq!(star, back);
    }
}
