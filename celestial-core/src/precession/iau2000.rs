//! IAU 2000 precession model.
//!
//! IAU 2000 keeps the IAU 1976 (Lieske) precession angles and adds two things
//! measured by VLBI:
//!
//! - **Frame bias**: a fixed rotation between the GCRS and the mean dynamical
//!   frame of J2000.0, a few tens of milliarcseconds.
//! - **Precession-rate corrections**: -0.29965"/century in longitude and
//!   -0.02524"/century in obliquity.
//!
//! The precession matrix is `Rx(ε0) · Rz(-ψA) · Rx(-ωA) · Rz(χA)`, applied right
//! to left, with ε0 = 84381.448".
//!
//! # References
//!
//! - IERS Conventions (2003), Chapter 5
//! - Lieske et al. (1977), A&A 58, 1-16
//! - Chapront, J., Chapront-Touzé, M. & Francou, G. (2002), A&A 387, 700

use super::types::{FrameBias, PrecessionResult};
use crate::constants::ARCSEC_TO_RAD;
use crate::matrix::RotationMatrix3;
use crate::utils::jd_to_centuries;

/// J2000.0 obliquity of the IAU 1980 model.
const EPS0: f64 = 84381.448 * ARCSEC_TO_RAD;

const PRECESSION_RATE_LONGITUDE: f64 = -0.29965 * ARCSEC_TO_RAD;
const PRECESSION_RATE_OBLIQUITY: f64 = -0.02524 * ARCSEC_TO_RAD;

const FRAME_BIAS_LONGITUDE: f64 = -0.041775 * ARCSEC_TO_RAD;
const FRAME_BIAS_OBLIQUITY: f64 = -0.0068192 * ARCSEC_TO_RAD;
const FRAME_BIAS_RA_OFFSET: f64 = -0.0146 * ARCSEC_TO_RAD;

/// IAU 2000 precession with frame bias.
///
/// ```
/// use celestial_core::precession::PrecessionIAU2000;
///
/// let result = PrecessionIAU2000::new().compute(2451545.0, 18262.5).unwrap();
/// assert!(result.precession_matrix.is_rotation_matrix(1e-14));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecessionIAU2000;

impl PrecessionIAU2000 {
    pub fn new() -> Self {
        Self
    }

    /// Bias, precession and combined matrices for a TT date.
    ///
    /// The combined matrix is `precession × bias`.
    pub fn compute(&self, date1: f64, date2: f64) -> crate::AstroResult<PrecessionResult> {
        let bias_matrix = self.frame_bias_matrix();
        let precession_matrix = self.precession_matrix(date1, date2);
        let bias_precession_matrix = precession_matrix.multiply(&bias_matrix);

        Ok(PrecessionResult {
            bias_matrix,
            precession_matrix,
            bias_precession_matrix,
        })
    }

    /// Frame bias offsets of the IAU 2000 model.
    pub fn frame_bias(&self) -> FrameBias {
        FrameBias {
            dpsibi: FRAME_BIAS_LONGITUDE,
            depsbi: FRAME_BIAS_OBLIQUITY,
            dra0: FRAME_BIAS_RA_OFFSET,
        }
    }

    /// Precession-rate corrections `(dpsipr, depspr)` in radians for a TT date.
    ///
    /// These are the amounts by which IAU 2000 adjusts the IAU 1976 precession
    /// in longitude and obliquity; `depspr` is also what separates the
    /// IAU 1980 mean obliquity from the IAU 2000 one.
    pub fn precession_rate_corrections(&self, date1: f64, date2: f64) -> (f64, f64) {
        let t = jd_to_centuries(date1, date2);
        (PRECESSION_RATE_LONGITUDE * t, PRECESSION_RATE_OBLIQUITY * t)
    }

    /// Frame bias matrix `Rx(-dε) · Ry(dψ sin ε0) · Rz(dα0)`.
    pub fn frame_bias_matrix(&self) -> RotationMatrix3 {
        let bias = self.frame_bias();
        let mut rb = RotationMatrix3::identity();
        rb.rotate_z(bias.dra0);
        rb.rotate_y(bias.dpsibi * libm::sin(EPS0));
        rb.rotate_x(-bias.depsbi);
        rb
    }

    /// Precession from mean J2000.0 to mean of date.
    pub fn precession_matrix(&self, date1: f64, date2: f64) -> RotationMatrix3 {
        let t = jd_to_centuries(date1, date2);

        // Lieske angles
        let psia77 = (5038.7784 + (-1.07259 + (-0.001147) * t) * t) * t * ARCSEC_TO_RAD;
        let oma77 = EPS0 + ((0.05127 + (-0.007726) * t) * t) * t * ARCSEC_TO_RAD;
        let chia = (10.5526 + (-2.38064 + (-0.001125) * t) * t) * t * ARCSEC_TO_RAD;

        let (dpsipr, depspr) = self.precession_rate_corrections(date1, date2);
        let psia = psia77 + dpsipr;
        let oma = oma77 + depspr;

        let mut rp = RotationMatrix3::identity();
        rp.rotate_x(EPS0);
        rp.rotate_z(-psia);
        rp.rotate_x(-oma);
        rp.rotate_z(chia);
        rp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_close, assert_matrix_eq};

    #[test]
    fn test_frame_bias_reference() {
        let b = PrecessionIAU2000::new().frame_bias();
        assert_close(b.dpsibi, -0.2025309152835086613e-6, 1e-20, "dpsibi");
        assert_close(b.depsbi, -0.3306041454222147847e-7, 1e-20, "depsbi");
        assert_close(b.dra0, -0.7078279744199225506e-7, 1e-20, "dra0");
    }

    #[test]
    fn test_precession_rate_reference() {
        let (dpsipr, depspr) =
            PrecessionIAU2000::new().precession_rate_corrections(2400000.5, 53736.0);
        assert_close(dpsipr, -0.8716465172668347629e-7, 1e-22, "dpsipr");
        assert_close(depspr, -0.7342018386722813087e-8, 1e-22, "depspr");
    }

    #[test]
    fn test_compute_reference() {
        let r = PrecessionIAU2000::new().compute(2400000.5, 50123.9999).unwrap();

        let rb = RotationMatrix3::from_array([
            [0.9999999999999942498, -0.7078279744199196626e-7, 0.8056217146976134152e-7],
            [0.7078279477857337206e-7, 0.9999999999999969484, 0.3306041454222136517e-7],
            [-0.8056217380986972157e-7, -0.3306040883980552500e-7, 0.9999999999999962084],
        ]);
        let rp = RotationMatrix3::from_array([
            [0.9999995504864048241, 0.8696113836207084411e-3, 0.3778928813389333402e-3],
            [-0.8696113818227265968e-3, 0.9999996218879365258, -0.1690679263009242066e-6],
            [-0.3778928854764695214e-3, -0.1595521004195286491e-6, 0.9999999285984682756],
        ]);
        let rbp = RotationMatrix3::from_array([
            [0.9999995505175087260, 0.8695405883617884705e-3, 0.3779734722239007105e-3],
            [-0.8695405990410863719e-3, 0.9999996219494925900, -0.1360775820404982209e-6],
            [-0.3779734476558184991e-3, -0.1925857585832024058e-6, 0.9999999285680153377],
        ]);
        assert_matrix_eq(&r.bias_matrix, &rb, 1e-14);
        assert_matrix_eq(&r.precession_matrix, &rp, 1e-14);
        assert_matrix_eq(&r.bias_precession_matrix, &rbp, 1e-14);
    }

    #[test]
    fn test_precession_at_j2000_is_identity() {
        let r = PrecessionIAU2000::new().compute(2451545.0, 0.0).unwrap();
        assert_matrix_eq(&r.precession_matrix, &RotationMatrix3::identity(), 1e-15);
    }

    #[test]
    fn test_compute_returns_rotation_matrices() {
        let r = PrecessionIAU2000::new().compute(2451545.0, 18262.5).unwrap();
        assert!(r.bias_matrix.is_rotation_matrix(1e-14));
        assert!(r.precession_matrix.is_rotation_matrix(1e-14));
        assert!(r.bias_precession_matrix.is_rotation_matrix(1e-14));
    }
}
