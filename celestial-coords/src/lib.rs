//! Celestial coordinate frames, tangent-plane projection and catalog space
//! motion.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`frames`] | ICRS, ecliptic of date (IAU 2006) and galactic positions |
//! | [`gnomonic`] | Standard coordinates on the tangent plane, and back |
//! | [`space_motion`] | Catalog astrometry ↔ space motion, epoch propagation |
//!
//! ```
//! use celestial_coords::{CoordinateFrame, EclipticPosition, ICRSPosition, TT};
//!
//! let vega = ICRSPosition::from_degrees(279.234735, 38.783689).unwrap();
//! let ecliptic = EclipticPosition::from_icrs(&vega, &TT::j2000()).unwrap();
//! assert!((ecliptic.beta().degrees() - 61.73).abs() < 0.01);
//!
//! let galactic = vega.to_galactic().unwrap();
//! assert!((galactic.l().degrees() - 67.45).abs() < 0.01);
//! ```

pub(crate) mod constants;
pub mod errors;
pub mod frames;
pub mod gnomonic;
pub mod space_motion;
pub mod transforms;

pub use celestial_core::Angle;
pub use errors::{CoordError, CoordResult};

pub use frames::{EclipticPosition, GalacticPosition, ICRSPosition};
pub use gnomonic::{ProjectionStatus, StandardCoordinates, TangentPoints};
pub use space_motion::{CatalogStar, StarMotionFlags};

pub use transforms::CoordinateFrame;

pub use celestial_core::{PositionVelocity, Vector3};
pub use celestial_time::{JulianDate, TimeError, TimeResult, TT};
