//! Angular separation and position angle between points on the sphere.

use crate::math::vincenty_angular_separation;

/// Angular separation between two (longitude, latitude) pairs, in radians.
///
/// Uses the Vincenty form, which stays accurate at both small and near-antipodal
/// separations.
///
/// ```
/// use celestial_core::angle::spherical_separation;
///
/// let s = spherical_separation(0.1, 0.0, 0.1, 0.5);
/// assert!((s - 0.5).abs() < 1e-15);
/// ```
pub fn spherical_separation(al: f64, ap: f64, bl: f64, bp: f64) -> f64 {
    let (sin_a, cos_a) = libm::sincos(ap);
    let (sin_b, cos_b) = libm::sincos(bp);
    vincenty_angular_separation(sin_a, cos_a, sin_b, cos_b, bl - al)
}

/// Position angle of B with respect to A, both given as (longitude, latitude).
///
/// Measured from north toward east, in the range (-pi, +pi]. Returns 0 when
/// the points coincide.
pub fn position_angle(al: f64, ap: f64, bl: f64, bp: f64) -> f64 {
    let dl = bl - al;
    let y = libm::sin(dl) * libm::cos(bp);
    let x = libm::sin(bp) * libm::cos(ap) - libm::cos(bp) * libm::sin(ap) * libm::cos(dl);
    if x != 0.0 || y != 0.0 {
        libm::atan2(y, x)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_reference() {
        let s = spherical_separation(1.0, 0.1, 0.2, -3.0);
        assert!((s - 2.346722016996998842).abs() < 1e-14);
    }

    #[test]
    fn test_position_angle_reference() {
        let p = position_angle(1.0, 0.1, 0.2, -1.0);
        assert!((p - (-2.724544922932270424)).abs() < 1e-12);
    }

    #[test]
    fn test_position_angle_due_north_and_east() {
        assert!(position_angle(0.0, 0.0, 0.0, 0.1).abs() < 1e-15);
        let east = position_angle(0.0, 0.0, 0.1, 0.0);
        assert!((east - crate::constants::HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_coincident_points() {
        assert_eq!(position_angle(0.3, 0.2, 0.3, 0.2), 0.0);
        assert!(spherical_separation(0.3, 0.2, 0.3, 0.2).abs() < 1e-15);
    }
}
