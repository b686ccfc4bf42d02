//! IAU 2006 precession model.
//!
//! IAU 2006 replaced the IAU 2000 precession with the P03 solution of
//! Capitaine et al. (2003), which corrected the precession rate in longitude
//! and made the obliquity rate consistent with a dynamical ecliptic.
//!
//! The model is expressed through the Fukushima-Williams angles:
//! - **γ̄ (gamb)**: angle along the J2000 ecliptic from the GCRS origin
//! - **φ̄ (phib)**: obliquity of the ecliptic of date on the GCRS equator
//! - **ψ̄ (psib)**: precession in longitude along the ecliptic of date
//! - **εA (epsa)**: mean obliquity of date
//!
//! Frame bias is folded into the angles; at J2000.0 they give the bias matrix
//! alone.
//!
//! # References
//!
//! - IERS Conventions (2010), Chapter 5
//! - Capitaine, N., Wallace, P.T., & Chapront, J. (2003), A&A 412, 567-586
//! - Hilton, J.L., et al. (2006), Celest. Mech. Dyn. Astron. 94, 351-367

use super::types::{FukushimaWilliamsAngles, PrecessionResult};
use crate::constants::{ARCSEC_TO_RAD, J2000_MJD, MJD_ZERO_POINT};
use crate::matrix::RotationMatrix3;
use crate::obliquity::iau_2006_mean_obliquity;
use crate::utils::jd_to_centuries;

/// IAU 2006 precession in the Fukushima-Williams parameterization.
///
/// ```
/// use celestial_core::precession::PrecessionIAU2006;
/// use celestial_core::constants::J2000_JD;
///
/// let result = PrecessionIAU2006::new().compute(J2000_JD, 3652.5).unwrap();
/// let _gcrs_to_mean_of_date = result.bias_precession_matrix;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecessionIAU2006;

impl PrecessionIAU2006 {
    pub fn new() -> Self {
        Self
    }

    /// Bias, precession and combined matrices for a TT date.
    ///
    /// The bias matrix is the F-W matrix at J2000.0; precession is extracted
    /// as `BP × Bᵀ`.
    pub fn compute(&self, date1: f64, date2: f64) -> crate::AstroResult<PrecessionResult> {
        let bias_matrix = self.precession_bias_matrix(MJD_ZERO_POINT, J2000_MJD);
        let bias_precession_matrix = self.precession_bias_matrix(date1, date2);
        let precession_matrix = bias_precession_matrix.multiply(&bias_matrix.transpose());

        Ok(PrecessionResult {
            bias_matrix,
            precession_matrix,
            bias_precession_matrix,
        })
    }

    /// Fukushima-Williams angles for a TT date.
    ///
    /// The mean obliquity is the IAU 2006 value, so `epsa` equals
    /// [`iau_2006_mean_obliquity`] at the same date.
    pub fn fukushima_williams_angles(&self, date1: f64, date2: f64) -> FukushimaWilliamsAngles {
        let t = jd_to_centuries(date1, date2);

        let gamb = (-0.052928
            + (10.556378
                + (0.4932044 + (-0.00031238 + (-0.000002788 + (0.0000000260) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let phib = (84381.412819
            + (-46.811016
                + (0.0511268 + (0.00053289 + (-0.000000440 + (-0.0000000176) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let psib = (-0.041775
            + (5038.481484
                + (1.5584175 + (-0.00018522 + (-0.000026452 + (-0.0000000148) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        FukushimaWilliamsAngles {
            gamb,
            phib,
            psib,
            epsa: iau_2006_mean_obliquity(date1, date2),
        }
    }

    /// Rotation matrix from Fukushima-Williams angles.
    ///
    /// `R = Rx(-ε) · Rz(-ψ) · Rx(φ) · Rz(γ)`, applied right to left. With
    /// nutation added to ψ and ε this gives the full NPB matrix.
    pub fn fw_angles_to_matrix(
        &self,
        gamb: f64,
        phib: f64,
        psib: f64,
        epsa: f64,
    ) -> RotationMatrix3 {
        let mut matrix = RotationMatrix3::identity();
        matrix.rotate_z(gamb);
        matrix.rotate_x(phib);
        matrix.rotate_z(-psib);
        matrix.rotate_x(-epsa);
        matrix
    }

    /// Precession-bias matrix (GCRS to mean of date) for a TT date.
    pub fn precession_bias_matrix(&self, date1: f64, date2: f64) -> RotationMatrix3 {
        let fw = self.fukushima_williams_angles(date1, date2);
        self.fw_angles_to_matrix(fw.gamb, fw.phib, fw.psib, fw.epsa)
    }

    /// Nutation-precession-bias matrix given nutation angles in radians.
    pub fn npb_matrix(&self, date1: f64, date2: f64, dpsi: f64, deps: f64) -> RotationMatrix3 {
        let fw = self.fukushima_williams_angles(date1, date2);
        self.fw_angles_to_matrix(fw.gamb, fw.phib, fw.psib + dpsi, fw.epsa + deps)
    }
}
