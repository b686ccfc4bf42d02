//! Celestial reference frames.
//!
//! Each frame has a position type wrapping [`Angle`](celestial_core::Angle)s
//! and a pair of free functions on plain radians:
//!
//! | Frame | Position | To | From |
//! |-------|----------|----|------|
//! | ICRS | [`ICRSPosition`] | | |
//! | Ecliptic of date (IAU 2006) | [`EclipticPosition`] | [`icrs_to_ecliptic`] | [`ecliptic_to_icrs`] |
//! | Galactic | [`GalacticPosition`] | [`icrs_to_galactic`] | [`galactic_to_icrs`] |

pub mod ecliptic;
pub mod galactic;
pub mod icrs;

pub use ecliptic::{ecliptic_matrix, ecliptic_to_icrs, icrs_to_ecliptic, EclipticPosition};
pub use galactic::{galactic_to_icrs, icrs_to_galactic, GalacticPosition};
pub use icrs::ICRSPosition;
