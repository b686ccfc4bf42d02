//! Result type shared by the nutation models.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nutation in longitude and obliquity, both in radians.
///
/// - `delta_psi` (Δψ): measured along the ecliptic
/// - `delta_eps` (Δε): change in the obliquity of the ecliptic
///
/// Together they move the mean pole of date to the true pole of date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutationResult {
    pub delta_psi: f64,
    pub delta_eps: f64,
}

impl NutationResult {
    /// Nutation in longitude projected onto the equator, `Δψ cos ε`.
    ///
    /// This is the leading part of the equation of the equinoxes.
    pub fn equation_of_equinoxes(&self, mean_obliquity: f64) -> f64 {
        self.delta_psi * libm::cos(mean_obliquity)
    }
}
