//! Geodetic ↔ geocentric conversions on a reference ellipsoid.
//!
//! **Geodetic** coordinates (longitude, latitude, height) are measured against
//! the ellipsoid surface normal; **geocentric** coordinates are Cartesian
//! meters from the Earth's center, X toward the prime meridian and Z toward
//! the north pole.
//!
//! The forward direction is closed form. The inverse uses Fukushima's
//! non-iterative method (J. Geodesy 80, 2006), which stays accurate from the
//! Earth's center out to interplanetary distances. Points within `a * 1e-16`
//! of the polar axis are treated as exactly polar.
//!
//! ```
//! use celestial_core::location::{geocentric_to_geodetic, geodetic_to_geocentric};
//! use celestial_core::Ellipsoid;
//!
//! let xyz = geodetic_to_geocentric(Ellipsoid::Wgs84, 3.1, -0.5, 2500.0)?;
//! let (elong, phi, height) = geocentric_to_geodetic(Ellipsoid::Wgs84, xyz)?;
//! assert!((elong - 3.1).abs() < 1e-14);
//! assert!((phi + 0.5).abs() < 1e-14);
//! assert!((height - 2500.0).abs() < 1e-6);
//! # Ok::<(), celestial_core::AstroError>(())
//! ```
//!
//! # Status codes
//!
//! | Routine | -1 | -2 |
//! |---------|----|----|
//! | [`geodetic_to_geocentric`] | bad ellipsoid id (from [`Ellipsoid::from_id`]) | illegal case |
//! | [`geodetic_to_geocentric_with`] | illegal case | |
//! | [`geocentric_to_geodetic`] | bad ellipsoid id | internal error |
//! | [`geocentric_to_geodetic_with`] | flattening outside `[0, 1)` | equatorial radius not positive |

use super::Ellipsoid;
use crate::constants::HALF_PI;
use crate::errors::{AstroError, AstroResult};
use crate::matrix::Vector3;

/// Geodetic to geocentric on a standard ellipsoid.
///
/// `elong` (east positive) and `phi` in radians, `height` in meters above
/// the ellipsoid. Returns meters.
pub fn geodetic_to_geocentric(
    ellipsoid: Ellipsoid,
    elong: f64,
    phi: f64,
    height: f64,
) -> AstroResult<Vector3> {
    let (a, f) = ellipsoid.parameters();
    geodetic_to_geocentric_with(a, f, elong, phi, height).map_err(|_| {
        AstroError::invalid_parameter(
            "geodetic_to_geocentric",
            -2,
            "latitude and flattening give no point on the ellipsoid",
        )
    })
}

/// Geodetic to geocentric for an ellipsoid given by equatorial radius `a`
/// (meters) and flattening `f`.
///
/// # Errors
///
/// Status -1 when `cos²φ + (1-f)² sin²φ` is not positive (no point on the
/// ellipsoid has that latitude).
pub fn geodetic_to_geocentric_with(
    a: f64,
    f: f64,
    elong: f64,
    phi: f64,
    height: f64,
) -> AstroResult<Vector3> {
    let (sp, cp) = libm::sincos(phi);
    let w = (1.0 - f) * (1.0 - f);
    let d = cp * cp + w * sp * sp;
    if d <= 0.0 {
        return Err(AstroError::invalid_parameter(
            "geodetic_to_geocentric_with",
            -1,
            &format!("illegal case: f = {}, phi = {}", f, phi),
        ));
    }
    let ac = a / libm::sqrt(d);
    let as_ = w * ac;

    let r = (ac + height) * cp;
    let (se, ce) = libm::sincos(elong);
    Ok(Vector3::new(r * ce, r * se, (as_ + height) * sp))
}

/// Geocentric to geodetic on a standard ellipsoid.
///
/// Returns `(elong, phi, height)`: radians, radians, meters.
pub fn geocentric_to_geodetic(ellipsoid: Ellipsoid, xyz: Vector3) -> AstroResult<(f64, f64, f64)> {
    let (a, f) = ellipsoid.parameters();
    geocentric_to_geodetic_with(a, f, xyz).map_err(|e| {
        AstroError::invalid_parameter("geocentric_to_geodetic", -2, &e.to_string())
    })
}

/// Geocentric to geodetic for an arbitrary ellipsoid (Fukushima's method).
///
/// # Errors
///
/// - status -1: `f` outside `[0, 1)`
/// - status -2: `a` not positive
pub fn geocentric_to_geodetic_with(a: f64, f: f64, xyz: Vector3) -> AstroResult<(f64, f64, f64)> {
    if !(0.0..1.0).contains(&f) {
        return Err(AstroError::invalid_parameter(
            "geocentric_to_geodetic_with",
            -1,
            &format!("flattening {} outside [0, 1)", f),
        ));
    }
    if a <= 0.0 {
        return Err(AstroError::invalid_parameter(
            "geocentric_to_geodetic_with",
            -2,
            &format!("equatorial radius {} not positive", a),
        ));
    }

    let aeps2 = a * a * 1e-32;
    let e2 = (2.0 - f) * f;
    let e4t = e2 * e2 * 1.5;
    let ec2 = 1.0 - e2;
    let ec = libm::sqrt(ec2);
    let b = a * ec;

    let Vector3 { x, y, z } = xyz;
    let p2 = x * x + y * y;

    let elong = if p2 > 0.0 { libm::atan2(y, x) } else { 0.0 };

    let absz = z.abs();

    let (phi, height) = if p2 > aeps2 {
        let p = libm::sqrt(p2);

        // Normalized cylindrical coordinates.
        let s0 = absz / a;
        let pn = p / a;
        let zc = ec * s0;

        // Newton correction factors.
        let c0 = ec * pn;
        let c02 = c0 * c0;
        let c03 = c02 * c0;
        let s02 = s0 * s0;
        let s03 = s02 * s0;
        let a02 = c02 + s02;
        let a0 = libm::sqrt(a02);
        let a03 = a02 * a0;
        let d0 = zc * a03 + e2 * s03;
        let f0 = pn * a03 - e2 * c03;

        // Halley correction factor.
        let b0 = e4t * s02 * c02 * pn * (a0 - ec);
        let s1 = d0 * f0 - b0 * s0;
        let cc = ec * (f0 * f0 - b0 * c0);

        let phi = libm::atan(s1 / cc);
        let s12 = s1 * s1;
        let cc2 = cc * cc;
        let height =
            (p * cc + absz * s1 - a * libm::sqrt(ec2 * s12 + cc2)) / libm::sqrt(s12 + cc2);
        (phi, height)
    } else {
        (HALF_PI, absz - b)
    };

    let phi = if z < 0.0 { -phi } else { phi };

    Ok((elong, phi, height))
}
