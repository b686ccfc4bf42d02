//! Earth ellipsoids, geodesy and observer locations.
//!
//! - [`Ellipsoid`]: WGS84 / GRS80 / WGS72 parameters by identifier
//! - [`geodesy`]: geodetic ↔ geocentric conversions
//! - [`Location`]: an observing site in WGS84 geodetic coordinates

pub mod core;
pub mod ellipsoid;
pub mod geodesy;

pub use self::core::Location;
pub use ellipsoid::Ellipsoid;
pub use geodesy::{
    geocentric_to_geodetic, geocentric_to_geodetic_with, geodetic_to_geocentric,
    geodetic_to_geocentric_with,
};
