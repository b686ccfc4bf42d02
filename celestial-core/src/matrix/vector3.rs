//! 3D Cartesian vectors ("p-vectors").
//!
//! A p-vector is either a position (in any length unit) or a direction. Most
//! frame transformations go spherical → Cartesian → rotate → spherical:
//!
//! ```
//! use celestial_core::{RotationMatrix3, Vector3};
//!
//! let star = Vector3::from_spherical(0.5, 0.3);
//! let mut frame = RotationMatrix3::identity();
//! frame.rotate_z(0.1);
//!
//! let (lon, lat) = (frame * star).to_spherical();
//! assert!((lon - 0.4).abs() < 1e-15);
//! assert!((lat - 0.3).abs() < 1e-15);
//! ```
//!
//! # Null vectors
//!
//! Routines that would divide by the modulus treat the zero vector as a
//! singular case and return zero (or a zero angle) instead of NaN. See
//! [`normalize_with_modulus`](Vector3::normalize_with_modulus),
//! [`to_spherical`](Vector3::to_spherical) and
//! [`separation`](Vector3::separation).
//!
//! # Spherical convention
//!
//! `theta` is the longitude-like angle measured from +X toward +Y; `phi` is the
//! latitude-like elevation above the XY plane.

use std::fmt;

/// A 3D Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The null vector `[0, 0, 0]`.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Modulus (Euclidean length).
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Inner product.
    ///
    /// ```
    /// use celestial_core::Vector3;
    ///
    /// let a = Vector3::new(2.0, 2.0, 3.0);
    /// let b = Vector3::new(1.0, 3.0, 4.0);
    /// assert_eq!(a.dot(&b), 20.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Outer product, right-handed: `x × y = z`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Splits the vector into its modulus and a unit vector.
    ///
    /// The null vector yields modulus 0 and the null vector, never NaN.
    ///
    /// ```
    /// use celestial_core::Vector3;
    ///
    /// let (r, u) = Vector3::new(0.3, 1.2, -2.5).normalize_with_modulus();
    /// assert!((r - 2.789265136196270604).abs() < 1e-12);
    /// assert!((u.magnitude() - 1.0).abs() < 1e-15);
    ///
    /// let (r, u) = Vector3::zeros().normalize_with_modulus();
    /// assert_eq!(r, 0.0);
    /// assert_eq!(u, Vector3::zeros());
    /// ```
    pub fn normalize_with_modulus(&self) -> (f64, Self) {
        let w = self.magnitude();
        if w == 0.0 {
            (0.0, Self::zeros())
        } else {
            (w, *self * (1.0 / w))
        }
    }

    /// Unit vector in the same direction (null vector stays null).
    #[inline]
    pub fn unit(&self) -> Self {
        self.normalize_with_modulus().1
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self::new(s * self.x, s * self.y, s * self.z)
    }

    /// `self + s * other`.
    #[inline]
    pub fn add_scaled(&self, s: f64, other: &Self) -> Self {
        Self::new(
            self.x + s * other.x,
            self.y + s * other.y,
            self.z + s * other.z,
        )
    }

    /// Unit vector from spherical angles (longitude `theta`, latitude `phi`).
    ///
    /// ```
    /// use celestial_core::Vector3;
    ///
    /// let v = Vector3::from_spherical(3.0123, -0.999);
    /// assert!((v.x - -0.5366267667260523906).abs() < 1e-12);
    /// assert!((v.y - 0.0697711109765145365).abs() < 1e-12);
    /// assert!((v.z - -0.8409302618566214041).abs() < 1e-12);
    /// ```
    pub fn from_spherical(theta: f64, phi: f64) -> Self {
        let (st, ct) = libm::sincos(theta);
        let (sp, cp) = libm::sincos(phi);
        Self::new(ct * cp, st * cp, sp)
    }

    /// Vector of length `r` in the direction `(theta, phi)`.
    #[inline]
    pub fn from_polar(theta: f64, phi: f64, r: f64) -> Self {
        Self::from_spherical(theta, phi).scale(r)
    }

    /// Spherical angles `(theta, phi)` of the direction.
    ///
    /// The vector need not be a unit vector. When the vector lies on the Z
    /// axis `theta` is 0; the null vector gives `(0, 0)`.
    pub fn to_spherical(&self) -> (f64, f64) {
        let d2 = self.x * self.x + self.y * self.y;

        let theta = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let phi = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2))
        };

        (theta, phi)
    }

    /// Spherical angles plus modulus, `(theta, phi, r)`.
    pub fn to_polar(&self) -> (f64, f64, f64) {
        let (theta, phi) = self.to_spherical();
        (theta, phi, self.magnitude())
    }

    /// Angle between two vectors, in radians on `[0, pi]`.
    ///
    /// Uses `atan2(|a × b|, a · b)`, which keeps full precision for both tiny
    /// and near-antipodal separations. Returns 0 if either vector is null.
    ///
    /// ```
    /// use celestial_core::Vector3;
    ///
    /// let a = Vector3::new(1.0, 0.1, 0.2);
    /// let b = Vector3::new(-1.0, -0.1, -0.2);
    /// assert!((a.separation(&b) - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn separation(&self, other: &Self) -> f64 {
        let ss = self.cross(other).magnitude();
        let cs = self.dot(other);
        if ss != 0.0 || cs != 0.0 {
            libm::atan2(ss, cs)
        } else {
            0.0
        }
    }

    /// Position angle of the direction `other` as seen from `self`.
    ///
    /// Measured from the north (toward +Z) through east, in radians on
    /// `(-pi, pi]`. Returns 0 if either vector is null, or if `self` is a unit
    /// vector equal to `other`. For a non-unit `self`, `other - self/|self|`
    /// is then parallel to `self` and the result is rounding noise.
    pub fn position_angle_to(&self, other: &Self) -> f64 {
        let (am, au) = self.normalize_with_modulus();
        let bm = other.magnitude();

        let (st, ct) = if am == 0.0 || bm == 0.0 {
            (0.0, 1.0)
        } else {
            let north = Self::new(
                -self.x * self.z,
                -self.y * self.z,
                self.x * self.x + self.y * self.y,
            );
            let east = north.cross(&au);
            let a2b = *other - au;
            let st = a2b.dot(&east);
            let ct = a2b.dot(&north);
            if st == 0.0 && ct == 0.0 {
                (0.0, 1.0)
            } else {
                (st, ct)
            }
        };

        libm::atan2(st, ct)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec.scale(self)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;
    use crate::test_helpers::assert_vector_eq;

    #[test]
    fn test_cross_is_orthogonal_to_both() {
        let a = Vector3::new(2.0, 2.0, 3.0);
        let b = Vector3::new(1.0, 3.0, 4.0);
        let c = a.cross(&b);
        assert_eq!(c, Vector3::new(-1.0, -5.0, 4.0));
        assert!(c.dot(&a).abs() < 1e-15);
        assert!(c.dot(&b).abs() < 1e-15);
    }

    #[test]
    fn test_dot_self_is_modulus_squared() {
        let samples = [
            Vector3::new(0.3, 1.2, -2.5),
            Vector3::new(1e8, -3.0, 0.25),
            Vector3::new(-7.0, 0.0, 1e-9),
        ];
        for v in samples {
            let m = v.magnitude();
            assert!((v.dot(&v) - m * m).abs() <= 1e-15 * v.dot(&v));
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(2.0, 2.0, 3.0);
        let b = Vector3::new(1.0, 3.0, 4.0);

        assert_eq!(a + b, Vector3::new(3.0, 5.0, 7.0));
        assert_eq!(a - b, Vector3::new(1.0, -1.0, -1.0));
        assert_eq!(a * 2.0, Vector3::new(4.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a.scale(2.0));
        assert_eq!(-a, Vector3::new(-2.0, -2.0, -3.0));
        assert_eq!(a.add_scaled(2.0, &b), Vector3::new(4.0, 8.0, 11.0));
    }

    #[test]
    fn test_unit_of_null_vector() {
        assert_eq!(Vector3::zeros().unit(), Vector3::zeros());
        let u = Vector3::new(3.0, 4.0, 0.0).unit();
        assert_vector_eq(&u, &Vector3::new(0.6, 0.8, 0.0), 1e-15);
    }

    #[test]
    fn test_to_spherical_reference() {
        let (theta, phi) = Vector3::new(100.0, -50.0, 25.0).to_spherical();
        assert!((theta - -0.4636476090008061162).abs() < 1e-14);
        assert!((phi - 0.2199879773954594463).abs() < 1e-14);
    }

    #[test]
    fn test_to_spherical_degenerate() {
        assert_eq!(Vector3::zeros().to_spherical(), (0.0, 0.0));
        assert_eq!(Vector3::z_axis().to_spherical(), (0.0, HALF_PI));
        assert_eq!((-Vector3::z_axis()).to_spherical(), (0.0, -HALF_PI));
    }

    #[test]
    fn test_polar_roundtrip() {
        let v = Vector3::from_polar(-3.21, 0.123, 0.456);
        assert!((v.x - -0.4514964673880165228).abs() < 1e-12);
        assert!((v.y - 0.0309339427734258688).abs() < 1e-12);
        assert!((v.z - 0.0559466810510877933).abs() < 1e-12);

        let v = Vector3::new(-0.4514964673880165, 0.03093394277342585, 0.05594668105108779);
        let (theta, phi, r) = v.to_polar();
        assert!((theta - 3.073185307179586515).abs() < 1e-12);
        assert!((phi - 0.1229999999999999992).abs() < 1e-12);
        assert!((r - 0.4559999999999999757).abs() < 1e-12);
    }

    #[test]
    fn test_separation_reference() {
        let a = Vector3::new(1.0, 0.1, 0.2);
        let b = Vector3::new(-3.0, 1e-3, 0.2);
        assert!((a.separation(&b) - 2.860391919024660768).abs() < 1e-12);
        assert_eq!(a.separation(&Vector3::zeros()), 0.0);
    }

    #[test]
    fn test_position_angle_reference() {
        let a = Vector3::new(1.0, 0.1, 0.2);
        let b = Vector3::new(-3.0, 1e-3, 0.2);
        assert!((a.position_angle_to(&b) - 0.3671514267841113674).abs() < 1e-12);
        assert_eq!(Vector3::zeros().position_angle_to(&b), 0.0);
        assert_eq!(a.position_angle_to(&Vector3::zeros()), 0.0);
    }

    #[test]
    fn test_position_angle_of_coincident_unit_vectors() {
        for u in [Vector3::x_axis(), Vector3::y_axis(), -Vector3::x_axis()] {
            assert_eq!(u.position_angle_to(&u), 0.0);
        }
    }

    #[test]
    fn test_position_angle_matches_spherical_form() {
        let (al, ap, bl, bp) = (1.0, 0.1, 0.2, -1.0);
        let a = Vector3::from_spherical(al, ap);
        let b = Vector3::from_spherical(bl, bp);
        let expected = crate::angle::position_angle(al, ap, bl, bp);
        assert!((a.position_angle_to(&b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_indexing_operators() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[2], 3.0);
        v[0] = 10.0;
        assert_eq!(v, Vector3::new(10.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "Vector3 index out of bounds: 4")]
    fn test_index_panic() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[4];
    }

    #[test]
    fn test_display_formatting() {
        let v = Vector3::new(1.234567890, -2.345678901, 3.456789012);
        assert_eq!(
            format!("{}", v),
            "Vector3(1.234567890, -2.345678901, 3.456789012)"
        );
    }
}
