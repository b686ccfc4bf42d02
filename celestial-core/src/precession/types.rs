//! Matrices produced by the precession models.
//!
//! - **bias**: GCRS to mean equator and equinox of J2000.0
//! - **precession**: mean J2000.0 to mean of date
//! - **bias-precession**: GCRS to mean of date, the product of the two

use crate::matrix::RotationMatrix3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type BiasMatrix = RotationMatrix3;
pub type PrecessionMatrix = RotationMatrix3;
pub type BiasPrecessionMatrix = RotationMatrix3;

/// The three matrices of a precession computation.
///
/// They come as a set because the bias-precession matrix is built first and
/// the other two follow from it (or the reverse, depending on the model).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecessionResult {
    pub bias_matrix: BiasMatrix,
    pub precession_matrix: PrecessionMatrix,
    pub bias_precession_matrix: BiasPrecessionMatrix,
}

/// Fukushima-Williams precession angles, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FukushimaWilliamsAngles {
    /// F-W angle γ̄.
    pub gamb: f64,
    /// F-W angle φ̄.
    pub phib: f64,
    /// F-W angle ψ̄.
    pub psib: f64,
    /// Mean obliquity of date, εA.
    pub epsa: f64,
}

/// IAU 2000 frame bias components, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameBias {
    /// Longitude correction.
    pub dpsibi: f64,
    /// Obliquity correction.
    pub depsbi: f64,
    /// ICRS right ascension of the J2000.0 mean equinox.
    pub dra0: f64,
}
