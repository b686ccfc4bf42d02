//! Earth rotation and sidereal time.
//!
//! | Quantity | Function | Model |
//! |----------|----------|-------|
//! | ERA | [`earth_rotation_angle`] | IAU 2000, UT1 |
//! | GMST | [`gmst_iau2006`], [`gmst_iau2000`] | ERA + precession polynomial in TT |
//! | GMST | [`gmst_iau1982`] | polynomial in UT1 |
//! | EE | [`equation_of_equinoxes_iau2000`], [`equation_of_equinoxes_iau2000b`] | Δψ cos εA + complementary terms |
//! | GAST | [`gast_iau2000b`], [`gast_iau2000b_ut1`] | GMST (IAU 2000) + EE (2000B) |
//!
//! All functions take two-part Julian Dates and return radians in [0, 2π).
//! [`GMST`] and [`GAST`] wrap the same computations for typed [`UT1`] and
//! [`TT`] dates.
//!
//! ```
//! use celestial_time::{GMST, JulianDate, TT, UT1};
//!
//! let ut1 = UT1::from_julian_date(JulianDate::new(2400000.5, 53736.0));
//! let tt = TT::from_julian_date(JulianDate::new(2400000.5, 53736.0));
//! let gmst = GMST::from_ut1_and_tt(&ut1, &tt).unwrap();
//! assert!((gmst.radians() - 1.754174971870091203).abs() < 1e-12);
//! ```
//!
//! [`UT1`]: crate::scales::UT1
//! [`TT`]: crate::scales::TT

mod angle;
pub mod gast;
pub mod gmst;

pub use angle::SiderealAngle;
pub use gast::{
    eect_iau2000, equation_of_equinoxes_iau2000, equation_of_equinoxes_iau2000b, gast_iau2000b,
    gast_iau2000b_ut1, GAST,
};
pub use gmst::{earth_rotation_angle, gmst_iau1982, gmst_iau2000, gmst_iau2006, GMST};
