//! Nutation: the short-period wobble of Earth's axis about its mean position.
//!
//! Nutation is driven by the torques of the Moon and Sun (and, weakly, the
//! planets) on Earth's equatorial bulge. Its principal term has the 18.6 year
//! period of the lunar node and an amplitude of about 17" in longitude and 9"
//! in obliquity.
//!
//! | Model | Lunisolar terms | Planetary terms | Precision |
//! |-------|-----------------|-----------------|-----------|
//! | [`NutationIAU2000B`] | 77 | fixed bias | ~1 mas |
//!
//! The fundamental arguments of the IERS Conventions (2003) live here as well
//! ([`FundamentalArgs`]); the equation of the equinoxes uses them for its
//! complementary terms.
//!
//! ```
//! use celestial_core::nutation::NutationIAU2000B;
//!
//! let r = NutationIAU2000B::new().compute(2451545.0, 0.0).unwrap();
//! println!("Δψ = {:.3e} rad, Δε = {:.3e} rad", r.delta_psi, r.delta_eps);
//! ```

pub mod fundamental_args;
pub mod iau2000b;
pub mod lunisolar_terms;
pub mod types;

pub use fundamental_args::FundamentalArgs;
pub use iau2000b::NutationIAU2000B;
pub use types::NutationResult;
