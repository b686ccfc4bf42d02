//! Numerical kernels for fundamental astronomy.
//!
//! `celestial-core` holds the building blocks the time and coordinate crates are
//! made of: angle normalization, vector and rotation-matrix algebra,
//! reference ellipsoids, and the IAU precession, nutation and obliquity models.
//! Everything is pure Rust and stateless.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], wrapping to [0, 2π) / [-π, π), sexagesimal fields, separations |
//! | [`matrix`] | p-vectors ([`Vector3`]), r-matrices ([`RotationMatrix3`]), pv-vectors ([`PositionVelocity`]) |
//! | [`location`] | Reference ellipsoids, geodetic ↔ geocentric, observer [`Location`] |
//! | [`nutation`] | IERS 2003 fundamental arguments, IAU 2000B nutation |
//! | [`obliquity`] | Mean obliquity of the ecliptic (IAU 1980, 2006) |
//! | [`precession`] | IAU 2000 and IAU 2006 precession-bias matrices |
//! | [`constants`] | Epochs, unit conversions |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Re-exports
//!
//! ```
//! use celestial_core::{Angle, Ellipsoid, Location, PositionVelocity, RotationMatrix3, Vector3};
//! use celestial_core::{AstroError, AstroResult, MathErrorKind};
//! ```
//!
//! # Conventions
//!
//! - **Two-part Julian Dates**: functions taking `(date1, date2)` use the sum
//!   as the date. `date1 = 2451545.0` with `date2` the days since J2000.0, or
//!   `2400000.5` with the MJD, both preserve precision.
//! - **Radians**: all angles are radians unless a name says otherwise.
//! - **Status codes**: failures are [`AstroError`]s whose
//!   [`status_code`](AstroError::status_code) is the conventional negative
//!   status of the routine.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;
pub mod matrix;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod utils;

pub use angle::Angle;
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::{Ellipsoid, Location};
pub use matrix::{PositionVelocity, RotationMatrix3, Vector3};

pub mod test_helpers;
