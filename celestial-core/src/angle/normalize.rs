//! Angle normalization.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, sidereal time, ERA | [0, 2pi) | [`wrap_0_2pi`] |
//! | Hour angle, longitude differences, declination from `atan2` | [-pi, +pi) | [`wrap_pm_pi`] |
//!
//! Both reduce with `libm::fmod` (via [`crate::math::fmod`]), which is the IEEE
//! remainder carrying the sign of the dividend, and then shift into range. Floored
//! modulo would give different last bits for negative inputs.
//!
//! ```
//! use celestial_core::angle::{wrap_0_2pi, wrap_pm_pi};
//! use std::f64::consts::PI;
//!
//! let ra = wrap_0_2pi(-0.5);
//! assert!(ra > 0.0 && ra < 2.0 * PI);
//!
//! let ha = wrap_pm_pi(3.5);
//! assert!(ha >= -PI && ha < PI);
//! ```

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-pi, +pi) radians.
///
/// # Examples
///
/// ```
/// use celestial_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x - (-PI / 2.0)).abs() < 1e-10);
///
/// let y = wrap_pm_pi(-3.0 * PI / 2.0);
/// assert!((y - (PI / 2.0)).abs() < 1e-10);
/// ```
///
/// # Algorithm
///
/// 1. Reduce to (-2pi, +2pi) via `fmod(x, 2pi)`
/// 2. If the magnitude is at least pi, shift by 2pi toward zero
/// 3. The one input that lands on +pi (an exact -pi remainder) is folded to -pi
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let mut w = fmod(x, TWOPI);
    if w.abs() >= PI {
        w -= TWOPI.copysign(x);
    }
    if w >= PI {
        w -= TWOPI;
    }
    w
}

/// Wraps an angle to [0, 2pi) radians.
///
/// # Examples
///
/// ```
/// use celestial_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0);
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
///
/// let y = wrap_0_2pi(5.0 * PI);
/// assert!((y - PI).abs() < 1e-10);
/// ```
///
/// A tiny negative input rounds to exactly 2pi after the shift; that case
/// returns 0 so the result never leaves the half-open range.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let mut w = fmod(x, TWOPI);
    if w < 0.0 {
        w += TWOPI;
    }
    if w >= TWOPI {
        w = 0.0;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_pm_pi() {
        assert_eq!(wrap_pm_pi(1.0), 1.0);
        assert!((wrap_pm_pi(3.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-15);
        assert!((wrap_pm_pi(-3.0 * PI / 2.0) - (PI / 2.0)).abs() < 1e-15);
        assert_eq!(wrap_pm_pi(PI), -PI);
        assert_eq!(wrap_pm_pi(-PI), -PI);
    }

    #[test]
    fn test_wrap_pm_pi_matches_reference() {
        // -4 rad lands at 2.283185307179586477 in the reference suite.
        assert!((wrap_pm_pi(-4.0) - 2.283185307179586477).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_0_2pi() {
        assert_eq!(wrap_0_2pi(1.0), 1.0);
        assert!((wrap_0_2pi(-PI / 2.0) - (3.0 * PI / 2.0)).abs() < 1e-15);
        assert!((wrap_0_2pi(3.0 * PI) - PI).abs() < 1e-15);
        assert!(wrap_0_2pi(TWOPI).abs() < 1e-15);
        assert!((wrap_0_2pi(-0.1) - 6.183185307179586477).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_0_2pi_tiny_negative_stays_in_range() {
        let w = wrap_0_2pi(-1e-20);
        assert!((0.0..TWOPI).contains(&w));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let samples = [
            -1e-20, -7.5, -PI, -1.0, 0.0, 0.3, PI, TWOPI, 4.0 * PI + 0.1, 1e6, -1e6,
        ];
        for &a in &samples {
            let once = wrap_0_2pi(a);
            assert_eq!(wrap_0_2pi(once), once, "wrap_0_2pi({a})");
            assert!((0.0..TWOPI).contains(&once));

            let once = wrap_pm_pi(a);
            assert_eq!(wrap_pm_pi(once), once, "wrap_pm_pi({a})");
            assert!((-PI..PI).contains(&once));
        }
    }
}
