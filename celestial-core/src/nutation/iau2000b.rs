//! IAU 2000B nutation model.
//!
//! A truncation of IAU 2000A for work that does not need sub-milliarcsecond
//! precision:
//! - only the 77 largest lunisolar terms are kept
//! - the planetary series is replaced by a fixed offset
//!
//! The planetary offsets are Δψ = -0.135 mas and Δε = +0.388 mas.
//!
//! Over 1995-2050 the result agrees with IAU 2000A to about 1 mas.
//!
//! # Fundamental arguments
//!
//! The five Delaunay arguments here are the linear terms only of the
//! expressions in [`FundamentalArgs`](super::FundamentalArgs), and the
//! Sun's mean anomaly starts from a slightly rounded constant. This is how
//! the model was fitted, so the full polynomials must not be substituted.
//!
//! # References
//!
//! - McCarthy, D. D. & Luzum, B. J., "An Abridged Model of the Precession-Nutation
//!   of the Celestial Pole", Celestial Mechanics and Dynamical Astronomy, 2003
//! - IERS Conventions (2003), Chapter 5

use super::lunisolar_terms::LUNISOLAR_TERMS;
use super::types::NutationResult;
use crate::constants::{
    ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, DECIMICROARCSEC_TO_RAD, MILLIARCSEC_TO_RAD, TWOPI,
};
use crate::errors::AstroResult;
use crate::math::fmod;

const PLANETARY_BIAS_LONGITUDE: f64 = -0.135 * MILLIARCSEC_TO_RAD;
const PLANETARY_BIAS_OBLIQUITY: f64 = 0.388 * MILLIARCSEC_TO_RAD;

/// IAU 2000B nutation calculator.
///
/// ```
/// use celestial_core::nutation::NutationIAU2000B;
///
/// let result = NutationIAU2000B::new().compute(2451545.0, 0.0).unwrap();
/// // Δψ is a few tens of arcseconds at most.
/// assert!(result.delta_psi.abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NutationIAU2000B;

impl NutationIAU2000B {
    pub fn new() -> Self {
        Self
    }

    /// Nutation angles for a two-part TT Julian Date.
    ///
    /// The split between `jd1` and `jd2` is arbitrary; `jd1 = 2451545.0` with
    /// `jd2` the days since J2000.0 gives the best precision.
    pub fn compute(&self, jd1: f64, jd2: f64) -> AstroResult<NutationResult> {
        let t = crate::utils::jd_to_centuries(jd1, jd2);

        let (delta_psi_ls, delta_eps_ls) = self.compute_lunisolar(t);

        Ok(NutationResult {
            delta_psi: delta_psi_ls + PLANETARY_BIAS_LONGITUDE,
            delta_eps: delta_eps_ls + PLANETARY_BIAS_OBLIQUITY,
        })
    }

    /// Lunisolar part (Δψ, Δε) in radians, `t` in Julian centuries since J2000.0.
    fn compute_lunisolar(&self, t: f64) -> (f64, f64) {
        // l, l', F, D, Om
        let el = fmod(485868.249036 + 1717915923.2178 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
        let elp = fmod(1287104.79305 + 129596581.0481 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
        let f = fmod(335779.526232 + 1739527262.8478 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
        let d = fmod(1072260.70369 + 1602961601.2090 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
        let om = fmod(450160.398036 - 6962890.5431 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;

        let mut dpsi = 0.0;
        let mut deps = 0.0;

        // Smallest terms first.
        for &(nl, nlp, nf, nd, nom, sp, spt, cp, ce, cet, se) in LUNISOLAR_TERMS.iter().rev() {
            let arg = fmod(
                (nl as f64) * el
                    + (nlp as f64) * elp
                    + (nf as f64) * f
                    + (nd as f64) * d
                    + (nom as f64) * om,
                TWOPI,
            );

            let (sarg, carg) = libm::sincos(arg);

            dpsi += (sp + spt * t) * sarg + cp * carg;
            deps += (ce + cet * t) * carg + se * sarg;
        }

        (dpsi * DECIMICROARCSEC_TO_RAD, deps * DECIMICROARCSEC_TO_RAD)
    }
}
