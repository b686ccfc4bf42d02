//! Angles: the [`Angle`] type, normalization, sexagesimal conversion and
//! separations on the sphere.

mod core;
mod normalize;
mod separation;
mod sexagesimal;

pub use self::core::Angle;
pub use self::core::{arcsec, deg, hours, rad};
pub use normalize::{wrap_0_2pi, wrap_pm_pi};
pub use separation::{position_angle, spherical_separation};
pub use sexagesimal::{
    days_to_hms, dms_to_radians, hms_to_days, hms_to_radians, radians_to_dms, radians_to_hms,
    Sexagesimal, Sign,
};
