//! Gnomonic (tangent-plane) projection.
//!
//! A star at (α, δ) projects onto the plane tangent to the celestial sphere
//! at (α₀, δ₀) as the standard coordinates (ξ, η), in radians, with ξ toward
//! increasing α and η toward the north. Each operation comes in a spherical
//! form and a direction-cosine form:
//!
//! | Operation | Spherical | Vector |
//! |-----------|-----------|--------|
//! | star, tangent point → (ξ, η) | [`project_spherical`] | [`project_vector`] |
//! | (ξ, η), tangent point → star | [`deproject_spherical`] | [`deproject_vector`] |
//! | (ξ, η), star → tangent point | [`solve_tangent_point`] | [`solve_tangent_point_vector`] |
//!
//! The vector forms avoid trigonometry and accept non-unit vectors for the
//! star; the tangent point vector must be a unit vector.

use crate::constants::TANGENT_PLANE_MIN_COSINE;
use celestial_core::angle::wrap_0_2pi;
use celestial_core::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quality of a projection. All cases still return (ξ, η).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProjectionStatus {
    Ok,
    /// Star is 90° or more from the tangent point, or nearly so.
    TooFarFromAxis,
    /// The antistar lies on the tangent plane.
    AntistarOnPlane,
    /// The antistar is too far from the axis.
    AntistarTooFar,
}

impl ProjectionStatus {
    /// 0 to 3 in the order of the variants.
    pub fn status(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::TooFarFromAxis => 1,
            Self::AntistarOnPlane => 2,
            Self::AntistarTooFar => 3,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// Standard coordinates on the tangent plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandardCoordinates {
    pub xi: f64,
    pub eta: f64,
    pub status: ProjectionStatus,
}

/// Tangent points consistent with a star and its standard coordinates.
///
/// Near the pole two tangent points can produce the same (ξ, η); when only
/// one is geometrically useful it is the one returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TangentPoints<T> {
    None,
    One(T),
    Two(T, T),
}

impl<T: Copy> TangentPoints<T> {
    pub fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    pub fn first(&self) -> Option<T> {
        match *self {
            Self::None => None,
            Self::One(a) | Self::Two(a, _) => Some(a),
        }
    }
}

/// Clamps the denominator of the projection and classifies it.
fn classify(d: f64) -> (f64, ProjectionStatus) {
    if d > TANGENT_PLANE_MIN_COSINE {
        (d, ProjectionStatus::Ok)
    } else if d >= 0.0 {
        (TANGENT_PLANE_MIN_COSINE, ProjectionStatus::TooFarFromAxis)
    } else if d > -TANGENT_PLANE_MIN_COSINE {
        (-TANGENT_PLANE_MIN_COSINE, ProjectionStatus::AntistarOnPlane)
    } else {
        (d, ProjectionStatus::AntistarTooFar)
    }
}

/// Projects the star (ra, dec) about the tangent point (ra0, dec0).
///
/// ```
/// use celestial_coords::gnomonic::project_spherical;
///
/// let p = project_spherical(1.3, 1.55, 2.3, 1.5);
/// assert!((p.xi - -0.01753200983236980595).abs() < 1e-15);
/// assert!((p.eta - 0.05962940005778712891).abs() < 1e-15);
/// assert!(p.status.is_ok());
/// ```
pub fn project_spherical(ra: f64, dec: f64, ra0: f64, dec0: f64) -> StandardCoordinates {
    let (sb0, cb0) = libm::sincos(dec0);
    let (sb, cb) = libm::sincos(dec);
    let (sda, cda) = libm::sincos(ra - ra0);

    let (d, status) = classify(sb * sb0 + cb * cb0 * cda);

    StandardCoordinates {
        xi: cb * sda / d,
        eta: (sb * cb0 - cb * sb0 * cda) / d,
        status,
    }
}

/// Projects the star direction `v` about the tangent point `v0` (unit vector).
pub fn project_vector(v: &Vector3, v0: &Vector3) -> StandardCoordinates {
    let (x0, y0, z0) = (v0.x, v0.y, v0.z);

    // Tangent point at a pole: nudge it off so the azimuth is defined.
    let r2 = x0 * x0 + y0 * y0;
    let (r, x0) = match libm::sqrt(r2) {
        r if r == 0.0 => (1e-20, 1e-20),
        r => (r, x0),
    };

    let w = v.x * x0 + v.y * y0;
    let (d, status) = classify(w + v.z * z0);
    let d = d * r;

    StandardCoordinates {
        xi: (v.y * x0 - v.x * y0) / d,
        eta: (v.z * r2 - z0 * w) / d,
        status,
    }
}

/// The star at standard coordinates (xi, eta) about (ra0, dec0).
///
/// RA is returned in [0, 2π).
pub fn deproject_spherical(xi: f64, eta: f64, ra0: f64, dec0: f64) -> (f64, f64) {
    let (sb0, cb0) = libm::sincos(dec0);
    let d = cb0 - eta * sb0;
    let ra = wrap_0_2pi(libm::atan2(xi, d) + ra0);
    let dec = libm::atan2(sb0 + eta * cb0, libm::sqrt(xi * xi + d * d));
    (ra, dec)
}

/// Unit vector of the star at (xi, eta) about the tangent point `v0`.
pub fn deproject_vector(xi: f64, eta: f64, v0: &Vector3) -> Vector3 {
    let (x, y, z) = (v0.x, v0.y, v0.z);

    let (r, x) = match libm::sqrt(x * x + y * y) {
        r if r == 0.0 => (1e-20, 1e-20),
        r => (r, x),
    };

    let f = libm::sqrt(1.0 + xi * xi + eta * eta);

    Vector3::new(
        (x - (xi * y + eta * x * z) / r) / f,
        (y + (xi * x - eta * y * z) / r) / f,
        (z + eta * r) / f,
    )
}

/// Tangent points (RA, Dec) from which the star (ra, dec) appears at (xi, eta).
///
/// ```
/// use celestial_coords::gnomonic::{solve_tangent_point, TangentPoints};
///
/// let solutions = solve_tangent_point(-0.03, 0.07, 1.3, 1.5);
/// assert_eq!(solutions.count(), 2);
/// ```
pub fn solve_tangent_point(xi: f64, eta: f64, ra: f64, dec: f64) -> TangentPoints<(f64, f64)> {
    let xi2 = xi * xi;
    let r = libm::sqrt(1.0 + xi2 + eta * eta);
    let (sb, cb) = libm::sincos(dec);
    let rsb = r * sb;
    let rcb = r * cb;
    let w2 = rcb * rcb - xi2;

    if w2 < 0.0 {
        return TangentPoints::None;
    }

    let solution = |w: f64| {
        let s = rsb - eta * w;
        let c = rsb * eta + w;
        let w = if xi == 0.0 && w == 0.0 { 1.0 } else { w };
        (wrap_0_2pi(ra - libm::atan2(xi, w)), libm::atan2(s, c))
    };

    let w = libm::sqrt(w2);
    let first = solution(w);
    if libm::fabs(rsb) < 1.0 {
        TangentPoints::One(first)
    } else {
        TangentPoints::Two(first, solution(-w))
    }
}

/// Vector form of [`solve_tangent_point`]; `v` is the star direction
/// (any length) and the solutions are unit vectors.
pub fn solve_tangent_point_vector(xi: f64, eta: f64, v: &Vector3) -> TangentPoints<Vector3> {
    let (x, y, z) = (v.x, v.y, v.z);
    let rxy2 = x * x + y * y;
    let xi2 = xi * xi;
    let eta2p1 = eta * eta + 1.0;
    let r = libm::sqrt(xi2 + eta2p1);
    let rsb = r * z;
    let rcb = r * libm::sqrt(rxy2);
    let w2 = rcb * rcb - xi2;

    if w2 <= 0.0 {
        return TangentPoints::None;
    }

    let solution = |w: f64| {
        let c = (rsb * eta + w) / (eta2p1 * libm::sqrt(rxy2 * (w2 + xi2)));
        Vector3::new(
            c * (x * w + y * xi),
            c * (y * w - x * xi),
            (rsb - eta * w) / eta2p1,
        )
    };

    let w = libm::sqrt(w2);
    let first = solution(w);
    if libm::fabs(rsb) < 1.0 {
        TangentPoints::One(first)
    } else {
        TangentPoints::Two(first, solution(-w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::PI;
    use celestial_core::test_helpers::{assert_close, assert_vector_eq};

    #[test]
    fn test_project_spherical_reference() {
        let p = project_spherical(1.3, 1.55, 2.3, 1.5);
        assert_close(p.xi, -0.01753200983236980595, 1e-15, "tpxes xi");
        assert_close(p.eta, 0.05962940005778712891, 1e-15, "tpxes eta");
        assert_eq!(p.status.status(), 0);
    }

    #[test]
    fn test_project_vector_reference() {
        let v = Vector3::from_spherical(1.3, 1.55);
        let v0 = Vector3::from_spherical(2.3, 1.5);
        let p = project_vector(&v, &v0);
        assert_close(p.xi, -0.01753200983236980595, 1e-15, "tpxev xi");
        assert_close(p.eta, 0.05962940005778712891, 1e-15, "tpxev eta");
        assert!(p.status.is_ok());

        // Scaling the star vector does not move its projection.
        let p2 = project_vector(&(v * 7.5), &v0);
        assert_close(p2.xi, p.xi, 1e-15, "scaled xi");
        assert_close(p2.eta, p.eta, 1e-15, "scaled eta");
    }

    #[test]
    fn test_deproject_spherical_reference() {
        let (ra, dec) = deproject_spherical(-0.03, 0.07, 2.3, 1.5);
        assert_close(ra, 0.7596127167359629775, 1e-14, "tpsts ra");
        assert_close(dec, 1.540864645109263028, 1e-13, "tpsts dec");
    }

    #[test]
    fn test_deproject_vector_reference() {
        let v0 = Vector3::from_spherical(2.3, 1.5);
        let v = deproject_vector(-0.03, 0.07, &v0);
        assert_vector_eq(
            &v,
            &Vector3::new(
                0.02170030454907376677,
                0.02060909590535367447,
                0.9995520806583523804,
            ),
            1e-15,
        );
    }

    #[test]
    fn test_solve_tangent_point_reference() {
        match solve_tangent_point(-0.03, 0.07, 1.3, 1.5) {
            TangentPoints::Two((az1, bz1), (az2, bz2)) => {
                assert_close(az1, 1.736621577783208748, 1e-13, "tpors az1");
                assert_close(bz1, 1.436736561844090323, 1e-13, "tpors bz1");
                assert_close(az2, 4.004971075806584490, 1e-13, "tpors az2");
                assert_close(bz2, 1.565084088476417917, 1e-13, "tpors bz2");
            }
            other => panic!("expected two solutions, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_tangent_point_vector_reference() {
        let v = Vector3::from_spherical(1.3, 1.5);
        match solve_tangent_point_vector(-0.03, 0.07, &v) {
            TangentPoints::Two(v1, v2) => {
                assert_vector_eq(
                    &v1,
                    &Vector3::new(
                        -0.02206252822366888610,
                        0.1318251060359645016,
                        0.9910274397144543895,
                    ),
                    1e-15,
                );
                assert_vector_eq(
                    &v2,
                    &Vector3::new(
                        -0.003712211763801968173,
                        -0.004341519956299836813,
                        0.9999836852110587012,
                    ),
                    1e-15,
                );
            }
            other => panic!("expected two solutions, got {:?}", other),
        }
    }

    #[test]
    fn test_project_then_solve_recovers_tangent_point() {
        // Close to the pole both solutions are valid; the first is ours.
        let p = project_spherical(1.3, 1.5, 2.3, 1.48);
        let solutions = solve_tangent_point(p.xi, p.eta, 1.3, 1.5);
        assert_eq!(solutions.count(), 2);
        let (ra0, dec0) = solutions.first().unwrap();
        assert_close(ra0, 2.3, 1e-12, "tangent RA");
        assert_close(dec0, 1.48, 1e-12, "tangent Dec");

        let p = project_spherical(0.2, 0.3, 0.1, 0.25);
        match solve_tangent_point(p.xi, p.eta, 0.2, 0.3) {
            TangentPoints::One((ra0, dec0)) => {
                assert_close(ra0, 0.1, 1e-12, "tangent RA");
                assert_close(dec0, 0.25, 1e-12, "tangent Dec");
            }
            other => panic!("expected one solution, got {:?}", other),
        }
    }

    #[test]
    fn test_project_deproject_round_trip() {
        let p = project_spherical(0.2, 0.3, 0.1, 0.25);
        let (ra, dec) = deproject_spherical(p.xi, p.eta, 0.1, 0.25);
        assert_close(ra, 0.2, 1e-14, "ra");
        assert_close(dec, 0.3, 1e-14, "dec");
    }

    #[test]
    fn test_no_solution_near_pole() {
        assert_eq!(solve_tangent_point(0.5, 0.0, 0.0, 1.5), TangentPoints::None);
        let v = Vector3::from_spherical(0.0, 1.5);
        assert_eq!(solve_tangent_point_vector(0.5, 0.0, &v).count(), 0);
        assert_eq!(TangentPoints::<(f64, f64)>::None.first(), None);
    }

    #[test]
    fn test_far_from_axis_statuses() {
        // 90° away: the denominator is clamped and flagged.
        let p = project_spherical(0.0, 0.0, PI / 2.0, 0.0);
        assert_eq!(p.status, ProjectionStatus::TooFarFromAxis);
        assert_close(p.xi, -1e6, 1e-6, "clamped xi");

        // Diametrically opposite.
        let p = project_spherical(PI, 0.0, 0.0, 0.0);
        assert_eq!(p.status, ProjectionStatus::AntistarTooFar);
        assert_eq!(p.status.status(), 3);

        // Just behind the limb.
        let p = project_spherical(0.0, 0.0, PI / 2.0 + 1e-8, 0.0);
        assert_eq!(p.status, ProjectionStatus::AntistarOnPlane);
        assert_eq!(p.status.status(), 2);
    }

    #[test]
    fn test_tangent_point_at_pole() {
        let v0 = Vector3::new(0.0, 0.0, 1.0);
        let v = deproject_vector(0.0, 0.0, &v0);
        assert_close(v.z, 1.0, 1e-15, "pole deprojects to itself");

        let p = project_vector(&Vector3::from_spherical(0.0, 1.5), &v0);
        assert!(p.status.is_ok());
        assert!(p.xi.is_finite() && p.eta.is_finite());
    }
}
