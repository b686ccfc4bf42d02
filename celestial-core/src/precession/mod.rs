//! Precession: the slow drift of Earth's axis and equinox.
//!
//! Torques from the Sun and Moon on the equatorial bulge turn the pole around
//! the ecliptic pole once in about 26,000 years, carrying the equinox westward
//! along the ecliptic by roughly 50" a year.
//!
//! # Models
//!
//! ## IAU 2006
//!
//! [`PrecessionIAU2006`] uses the four Fukushima-Williams angles
//! (γ̄, φ̄, ψ̄, εA). Frame bias is built into the angles, so the bias matrix is
//! the F-W matrix at J2000.0 and precession is recovered as `BP × Bᵀ`.
//! This is the current standard and the one the ecliptic transforms use.
//!
//! ## IAU 2000
//!
//! [`PrecessionIAU2000`] corrects the Lieske (1977) angles ψA, ωA, χA by
//! the IAU 2000 precession-rate adjustments and combines them with a separate
//! frame-bias rotation, `BP = P × B`.
//!
//! ```
//! use celestial_core::precession::PrecessionIAU2006;
//!
//! let r = PrecessionIAU2006::new().compute(2451545.0, 3652.5).unwrap();
//! assert!(r.bias_precession_matrix.is_rotation_matrix(1e-14));
//! ```
//!
//! Both models take a two-part TT Julian Date.

pub mod iau2000;
pub mod iau2006;
pub mod types;

pub use iau2000::PrecessionIAU2000;
pub use iau2006::PrecessionIAU2006;
pub use types::{FrameBias, FukushimaWilliamsAngles, PrecessionResult};
