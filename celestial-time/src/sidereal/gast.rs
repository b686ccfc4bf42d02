//! Equation of the equinoxes and Greenwich apparent sidereal time.
//!
//! GAST = GMST + EE, where the equation of the equinoxes EE is the nutation
//! in longitude projected onto the equator, Δψ cos εA, plus the complementary
//! terms: a short series in the fundamental arguments that removes the
//! spurious quasi-secular drift of the classical expression (Capitaine et al.
//! 2003, IERS Conventions 2003 Table 5.2e).

use super::angle::SiderealAngle;
use super::gmst::{check_range, gmst_iau2000};
use crate::scales::{TT, UT1};
use crate::TimeResult;
use celestial_core::angle::wrap_0_2pi;
use celestial_core::constants::ARCSEC_TO_RAD;
use celestial_core::nutation::{FundamentalArgs, NutationIAU2000B};
use celestial_core::obliquity::iau_1980_mean_obliquity;
use celestial_core::precession::PrecessionIAU2000;
use celestial_core::utils::jd_to_centuries;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Multipliers of l, l', F, D, Ω, L_Ve, L_E, p_A, then sine and cosine
/// amplitudes in arcseconds.
type ComplementaryTerm = ([i8; 8], f64, f64);

const TERMS_T0: [ComplementaryTerm; 33] = [
    ([0, 0, 0, 0, 1, 0, 0, 0], 2640.96e-6, -0.39e-6),
    ([0, 0, 0, 0, 2, 0, 0, 0], 63.52e-6, -0.02e-6),
    ([0, 0, 2, -2, 3, 0, 0, 0], 11.75e-6, 0.01e-6),
    ([0, 0, 2, -2, 1, 0, 0, 0], 11.21e-6, 0.01e-6),
    ([0, 0, 2, -2, 2, 0, 0, 0], -4.55e-6, 0.00e-6),
    ([0, 0, 2, 0, 3, 0, 0, 0], 2.02e-6, 0.00e-6),
    ([0, 0, 2, 0, 1, 0, 0, 0], 1.98e-6, 0.00e-6),
    ([0, 0, 0, 0, 3, 0, 0, 0], -1.72e-6, 0.00e-6),
    ([0, 1, 0, 0, 1, 0, 0, 0], -1.41e-6, -0.01e-6),
    ([0, 1, 0, 0, -1, 0, 0, 0], -1.26e-6, -0.01e-6),
    ([1, 0, 0, 0, -1, 0, 0, 0], -0.63e-6, 0.00e-6),
    ([1, 0, 0, 0, 1, 0, 0, 0], -0.63e-6, 0.00e-6),
    ([0, 1, 2, -2, 3, 0, 0, 0], 0.46e-6, 0.00e-6),
    ([0, 1, 2, -2, 1, 0, 0, 0], 0.45e-6, 0.00e-6),
    ([0, 0, 4, -4, 4, 0, 0, 0], 0.36e-6, 0.00e-6),
    ([0, 0, 1, -1, 1, -8, 12, 0], -0.24e-6, -0.12e-6),
    ([0, 0, 2, 0, 0, 0, 0, 0], 0.32e-6, 0.00e-6),
    ([0, 0, 2, 0, 2, 0, 0, 0], 0.28e-6, 0.00e-6),
    ([1, 0, 2, 0, 3, 0, 0, 0], 0.27e-6, 0.00e-6),
    ([1, 0, 2, 0, 1, 0, 0, 0], 0.26e-6, 0.00e-6),
    ([0, 0, 2, -2, 0, 0, 0, 0], -0.21e-6, 0.00e-6),
    ([0, 1, -2, 2, -3, 0, 0, 0], 0.19e-6, 0.00e-6),
    ([0, 1, -2, 2, -1, 0, 0, 0], 0.18e-6, 0.00e-6),
    ([0, 0, 0, 0, 0, 8, -13, -1], -0.10e-6, 0.05e-6),
    ([0, 0, 0, 2, 0, 0, 0, 0], 0.15e-6, 0.00e-6),
    ([2, 0, -2, 0, -1, 0, 0, 0], -0.14e-6, 0.00e-6),
    ([1, 0, 0, -2, 1, 0, 0, 0], 0.14e-6, 0.00e-6),
    ([0, 1, 2, -2, 2, 0, 0, 0], -0.14e-6, 0.00e-6),
    ([1, 0, 0, -2, -1, 0, 0, 0], 0.14e-6, 0.00e-6),
    ([0, 0, 4, -2, 4, 0, 0, 0], 0.13e-6, 0.00e-6),
    ([0, 0, 2, -2, 4, 0, 0, 0], -0.11e-6, 0.00e-6),
    ([1, 0, -2, 0, -3, 0, 0, 0], 0.11e-6, 0.00e-6),
    ([1, 0, -2, 0, -1, 0, 0, 0], 0.11e-6, 0.00e-6),
];

const TERMS_T1: [ComplementaryTerm; 1] = [([0, 0, 0, 0, 1, 0, 0, 0], -0.87e-6, 0.00e-6)];

fn sum_terms(terms: &[ComplementaryTerm], args: &[f64; 8]) -> f64 {
    terms
        .iter()
        .rev()
        .map(|(multipliers, sine, cosine)| {
            let arg: f64 = multipliers
                .iter()
                .zip(args)
                .map(|(&n, a)| f64::from(n) * a)
                .sum();
            let (s, c) = libm::sincos(arg);
            sine * s + cosine * c
        })
        .sum()
}

/// Complementary terms of the equation of the equinoxes (IAU 2000), radians.
pub fn eect_iau2000(tt_jd1: f64, tt_jd2: f64) -> f64 {
    let t = jd_to_centuries(tt_jd1, tt_jd2);
    let args = [
        t.moon_mean_anomaly(),
        t.sun_mean_anomaly(),
        t.mean_argument_of_latitude(),
        t.mean_elongation(),
        t.moon_ascending_node_longitude(),
        t.venus_lng(),
        t.earth_lng(),
        t.precession(),
    ];
    (sum_terms(&TERMS_T0, &args) + sum_terms(&TERMS_T1, &args) * t) * ARCSEC_TO_RAD
}

/// Equation of the equinoxes (IAU 2000) from a mean obliquity and nutation
/// in longitude supplied by the caller.
pub fn equation_of_equinoxes_iau2000(
    tt_jd1: f64,
    tt_jd2: f64,
    mean_obliquity: f64,
    delta_psi: f64,
) -> f64 {
    delta_psi * libm::cos(mean_obliquity) + eect_iau2000(tt_jd1, tt_jd2)
}

/// Equation of the equinoxes with IAU 2000B nutation, radians.
///
/// The mean obliquity is IAU 1980 corrected by the IAU 2000 precession rate.
pub fn equation_of_equinoxes_iau2000b(tt_jd1: f64, tt_jd2: f64) -> TimeResult<f64> {
    let (_, depspr) = PrecessionIAU2000::new().precession_rate_corrections(tt_jd1, tt_jd2);
    let epsa = iau_1980_mean_obliquity(tt_jd1, tt_jd2) + depspr;
    let nutation = NutationIAU2000B::new().compute(tt_jd1, tt_jd2)?;
    Ok(equation_of_equinoxes_iau2000(
        tt_jd1,
        tt_jd2,
        epsa,
        nutation.delta_psi,
    ))
}

/// GAST with IAU 2000B nutation, from UT1 and TT, radians in [0, 2π).
pub fn gast_iau2000b(ut1_jd1: f64, ut1_jd2: f64, tt_jd1: f64, tt_jd2: f64) -> TimeResult<f64> {
    let gmst = gmst_iau2000(ut1_jd1, ut1_jd2, tt_jd1, tt_jd2);
    let ee = equation_of_equinoxes_iau2000b(tt_jd1, tt_jd2)?;
    Ok(wrap_0_2pi(gmst + ee))
}

/// GAST with IAU 2000B nutation from UT1 alone.
///
/// TT is taken equal to UT1; the error this introduces is far below the
/// accuracy of the 2000B nutation.
pub fn gast_iau2000b_ut1(ut1_jd1: f64, ut1_jd2: f64) -> TimeResult<f64> {
    gast_iau2000b(ut1_jd1, ut1_jd2, ut1_jd1, ut1_jd2)
}

/// Greenwich apparent sidereal time (IAU 2000B).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GAST(SiderealAngle);

impl GAST {
    pub fn from_ut1_and_tt(ut1: &UT1, tt: &TT) -> TimeResult<Self> {
        let ut1 = ut1.to_julian_date();
        let tt = tt.to_julian_date();
        check_range(ut1.jd1, ut1.jd2)?;
        check_range(tt.jd1, tt.jd2)?;
        let gast = gast_iau2000b(ut1.jd1, ut1.jd2, tt.jd1, tt.jd2)?;
        Ok(Self(SiderealAngle::from_radians(gast)))
    }

    pub fn angle(&self) -> SiderealAngle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.0.degrees()
    }

    pub fn radians(&self) -> f64 {
        self.0.radians()
    }

    /// Local apparent sidereal time at `east_longitude` radians.
    pub fn local(&self, east_longitude: f64) -> SiderealAngle {
        self.0.local(east_longitude)
    }

    pub fn hour_angle_to_target(&self, ra_hours: f64) -> f64 {
        self.0.hour_angle_to_target(ra_hours)
    }
}

impl std::fmt::Display for GAST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GAST {}", self.0)
    }
}
