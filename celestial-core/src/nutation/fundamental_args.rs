//! Fundamental arguments of the IERS Conventions (2003).
//!
//! Nutation, the equation of the equinoxes and the complementary terms are all
//! series in these angles. Each is a low-order polynomial in `t`, TDB Julian
//! centuries since J2000.0 (TT is close enough in practice), implemented on
//! `f64` so a series reads like the published formula:
//!
//! ```
//! use celestial_core::nutation::FundamentalArgs;
//!
//! let t: f64 = 0.8;
//! let arg = 2.0 * t.mean_argument_of_latitude() - 2.0 * t.mean_elongation()
//!     + 2.0 * t.moon_ascending_node_longitude();
//! assert!(arg.is_finite());
//! ```
//!
//! The five Delaunay arguments are reduced modulo one revolution in arcseconds
//! before conversion to radians; the planetary longitudes modulo 2pi. The
//! general precession in longitude is not reduced.

use crate::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, TWOPI};
use crate::math::fmod;

#[inline]
fn delaunay(arcsec: f64) -> f64 {
    fmod(arcsec, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD
}

#[inline]
fn planetary(rad: f64) -> f64 {
    fmod(rad, TWOPI)
}

/// Fundamental arguments as functions of TDB Julian centuries since J2000.0.
pub trait FundamentalArgs {
    /// Mean anomaly of the Moon, l.
    fn moon_mean_anomaly(&self) -> f64;

    /// Mean anomaly of the Sun, l′.
    fn sun_mean_anomaly(&self) -> f64;

    /// Mean longitude of the Moon minus that of the ascending node, F.
    fn mean_argument_of_latitude(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, D.
    fn mean_elongation(&self) -> f64;

    /// Mean longitude of the Moon's ascending node, Ω.
    fn moon_ascending_node_longitude(&self) -> f64;

    fn mercury_lng(&self) -> f64;
    fn venus_lng(&self) -> f64;
    fn earth_lng(&self) -> f64;
    fn mars_lng(&self) -> f64;
    fn jupiter_lng(&self) -> f64;
    fn saturn_lng(&self) -> f64;
    fn uranus_lng(&self) -> f64;
    fn neptune_lng(&self) -> f64;

    /// General accumulated precession in longitude, pA.
    fn precession(&self) -> f64;
}

impl FundamentalArgs for f64 {
    #[inline]
    fn moon_mean_anomaly(&self) -> f64 {
        let t = *self;
        delaunay(
            485868.249036
                + t * (1717915923.2178 + t * (31.8792 + t * (0.051635 + t * (-0.00024470)))),
        )
    }

    #[inline]
    fn sun_mean_anomaly(&self) -> f64 {
        let t = *self;
        delaunay(
            1287104.793048
                + t * (129596581.0481 + t * (-0.5532 + t * (0.000136 + t * (-0.00001149)))),
        )
    }

    #[inline]
    fn mean_argument_of_latitude(&self) -> f64 {
        let t = *self;
        delaunay(
            335779.526232
                + t * (1739527262.8478 + t * (-12.7512 + t * (-0.001037 + t * 0.00000417))),
        )
    }

    #[inline]
    fn mean_elongation(&self) -> f64 {
        let t = *self;
        delaunay(
            1072260.703692
                + t * (1602961601.2090 + t * (-6.3706 + t * (0.006593 + t * (-0.00003169)))),
        )
    }

    #[inline]
    fn moon_ascending_node_longitude(&self) -> f64 {
        let t = *self;
        delaunay(
            450160.398036
                + t * (-6962890.5431 + t * (7.4722 + t * (0.007702 + t * (-0.00005939)))),
        )
    }

    #[inline]
    fn mercury_lng(&self) -> f64 {
        planetary(4.402608842 + 2608.7903141574 * self)
    }

    #[inline]
    fn venus_lng(&self) -> f64 {
        planetary(3.176146697 + 1021.3285546211 * self)
    }

    #[inline]
    fn earth_lng(&self) -> f64 {
        planetary(1.753470314 + 628.3075849991 * self)
    }

    #[inline]
    fn mars_lng(&self) -> f64 {
        planetary(6.203480913 + 334.0612426700 * self)
    }

    #[inline]
    fn jupiter_lng(&self) -> f64 {
        planetary(0.599546497 + 52.9690962641 * self)
    }

    #[inline]
    fn saturn_lng(&self) -> f64 {
        planetary(0.874016757 + 21.3299104960 * self)
    }

    #[inline]
    fn uranus_lng(&self) -> f64 {
        planetary(5.481293872 + 7.4781598567 * self)
    }

    #[inline]
    fn neptune_lng(&self) -> f64 {
        planetary(5.311886287 + 3.8133035638 * self)
    }

    #[inline]
    fn precession(&self) -> f64 {
        (0.024381750 + 0.00000538691 * self) * self
    }
}
