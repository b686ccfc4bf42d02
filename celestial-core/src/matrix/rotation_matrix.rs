//! 3x3 rotation matrices ("r-matrices").
//!
//! Every frame change in this workspace (bias, precession, obliquity, the
//! galactic pole) is a rotation matrix applied to a p-vector. Matrices compose
//! by multiplication, and the rightmost factor acts first:
//!
//! ```
//! use celestial_core::RotationMatrix3;
//!
//! let mut bias = RotationMatrix3::identity();
//! bias.rotate_z(-7.078e-8);
//! bias.rotate_x(3.3e-8);
//!
//! let mut precession = RotationMatrix3::identity();
//! precession.rotate_z(0.00385);
//!
//! let combined = precession * bias;
//! assert!(combined.is_rotation_matrix(1e-14));
//! ```
//!
//! # Rotation convention
//!
//! `rotate_x`, `rotate_y` and `rotate_z` premultiply the matrix by an elementary
//! rotation of the *frame* (the passive convention): positive angles are
//! anticlockwise looking from the positive axis toward the origin, so a +90°
//! turn about Z maps `[1, 0, 0]` to `[0, -1, 0]`.
//!
//! # Storage
//!
//! Row-major `[[f64; 3]; 3]`; `m[(i, j)]` is row `i`, column `j`. For a proper
//! rotation the inverse is the transpose, which is what
//! [`transpose_apply`](RotationMatrix3::transpose_apply) uses.
//!
//! # Rotation vectors
//!
//! An axis-angle rotation is stored as a vector along the axis whose length is
//! the angle. [`from_rotation_vector`](RotationMatrix3::from_rotation_vector)
//! and [`to_rotation_vector`](RotationMatrix3::to_rotation_vector) convert
//! between the two forms; the null vector and the identity correspond.

use std::fmt;

use super::Vector3;

/// A 3x3 rotation matrix, row-major, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    pub const fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Wraps a row-major array. The matrix is not checked for orthogonality.
    pub const fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Element at `row`, `col` (panics on an index above 2).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Premultiplies by a rotation of `phi` about the X axis: `self = Rx(phi) * self`.
    ///
    /// ```text
    /// Rx(phi) = | 1      0         0     |
    ///           | 0   cos(phi)  sin(phi) |
    ///           | 0  -sin(phi)  cos(phi) |
    /// ```
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);

        for j in 0..3 {
            let a1 = c * self.elements[1][j] + s * self.elements[2][j];
            let a2 = -s * self.elements[1][j] + c * self.elements[2][j];
            self.elements[1][j] = a1;
            self.elements[2][j] = a2;
        }
    }

    /// Premultiplies by a rotation of `theta` about the Y axis: `self = Ry(theta) * self`.
    ///
    /// ```text
    /// Ry(theta) = | cos(theta)  0  -sin(theta) |
    ///             |     0       1       0      |
    ///             | sin(theta)  0   cos(theta) |
    /// ```
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);

        for j in 0..3 {
            let a0 = c * self.elements[0][j] - s * self.elements[2][j];
            let a2 = s * self.elements[0][j] + c * self.elements[2][j];
            self.elements[0][j] = a0;
            self.elements[2][j] = a2;
        }
    }

    /// Premultiplies by a rotation of `psi` about the Z axis: `self = Rz(psi) * self`.
    ///
    /// ```text
    /// Rz(psi) = |  cos(psi)  sin(psi)  0 |
    ///           | -sin(psi)  cos(psi)  0 |
    ///           |     0         0      1 |
    /// ```
    ///
    /// ```
    /// use celestial_core::{RotationMatrix3, Vector3};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let mut m = RotationMatrix3::identity();
    /// m.rotate_z(FRAC_PI_2);
    /// let v = m * Vector3::x_axis();
    /// assert!(v.x.abs() < 1e-15);
    /// assert!((v.y + 1.0).abs() < 1e-15);
    /// ```
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);

        for j in 0..3 {
            let a0 = c * self.elements[0][j] + s * self.elements[1][j];
            let a1 = -s * self.elements[0][j] + c * self.elements[1][j];
            self.elements[0][j] = a0;
            self.elements[1][j] = a1;
        }
    }

    /// Matrix product `self * other`; `other` is applied first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Matrix-vector product `self * v`.
    pub fn apply_to_vector(&self, v: Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Product of the transpose with a vector, `selfᵀ * v` (the inverse rotation).
    pub fn transpose_apply(&self, v: Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
        )
    }

    /// Builds the matrix for a rotation vector (axis scaled by angle).
    ///
    /// The null vector gives the identity.
    ///
    /// ```
    /// use celestial_core::{RotationMatrix3, Vector3};
    ///
    /// assert_eq!(
    ///     RotationMatrix3::from_rotation_vector(Vector3::zeros()),
    ///     RotationMatrix3::identity()
    /// );
    /// ```
    pub fn from_rotation_vector(w: Vector3) -> Self {
        let phi = w.magnitude();
        let (s, c) = libm::sincos(phi);
        let f = 1.0 - c;

        let (x, y, z) = if phi > 0.0 {
            (w.x / phi, w.y / phi, w.z / phi)
        } else {
            (w.x, w.y, w.z)
        };

        Self::from_array([
            [x * x * f + c, x * y * f + z * s, x * z * f - y * s],
            [y * x * f - z * s, y * y * f + c, y * z * f + x * s],
            [z * x * f + y * s, z * y * f - x * s, z * z * f + c],
        ])
    }

    /// Extracts the rotation vector (axis scaled by angle in `[0, pi]`).
    ///
    /// The identity, or anything without an antisymmetric part, gives the
    /// null vector.
    pub fn to_rotation_vector(&self) -> Vector3 {
        let m = &self.elements;
        let x = m[1][2] - m[2][1];
        let y = m[2][0] - m[0][2];
        let z = m[0][1] - m[1][0];
        let s2 = libm::sqrt(x * x + y * y + z * z);

        if s2 > 0.0 {
            let c2 = m[0][0] + m[1][1] + m[2][2] - 1.0;
            let phi = libm::atan2(s2, c2);
            let f = phi / s2;
            Vector3::new(x * f, y * f, z * f)
        } else {
            Vector3::zeros()
        }
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// True when the determinant is +1 and `M Mᵀ = I`, both within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }
        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
            <= tolerance
    }

    /// Largest absolute element-wise difference.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }

    /// Rotates a (longitude, latitude) direction, returning the new pair.
    ///
    /// The longitude comes back in `(-pi, pi]`; callers wrap it as their
    /// frame requires.
    pub fn transform_spherical(&self, lon: f64, lat: f64) -> (f64, f64) {
        self.apply_to_vector(Vector3::from_spherical(lon, lat))
            .to_spherical()
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply_to_vector(vec)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply_to_vector(vec)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for RotationMatrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;
    use crate::test_helpers::{assert_matrix_eq, assert_vector_eq};

    fn sample() -> RotationMatrix3 {
        RotationMatrix3::from_array([[2.0, 3.0, 2.0], [3.0, 2.0, 3.0], [3.0, 4.0, 5.0]])
    }

    #[test]
    fn test_rotate_x_reference() {
        let mut m = sample();
        m.rotate_x(0.3456789);
        let expected = RotationMatrix3::from_array([
            [2.0, 3.0, 2.0],
            [3.839043388235612460, 3.237033249594111899, 4.516714379005982719],
            [1.806030415924501684, 3.085711545336372503, 3.687721683977873065],
        ]);
        assert_matrix_eq(&m, &expected, 1e-12);
    }

    #[test]
    fn test_rotate_y_reference() {
        let mut m = sample();
        m.rotate_y(0.3456789);
        let expected = RotationMatrix3::from_array([
            [0.8651847818978159930, 1.467194920539316554, 0.1875137911274457342],
            [3.0, 2.0, 3.0],
            [3.500207892850427330, 4.779889022262298150, 5.381899160903798712],
        ]);
        assert_matrix_eq(&m, &expected, 1e-12);
    }

    #[test]
    fn test_rotate_z_reference() {
        let mut m = sample();
        m.rotate_z(0.3456789);
        let expected = RotationMatrix3::from_array([
            [2.898197754208926769, 3.500207892850427330, 2.898197754208926769],
            [2.144865911309686813, 0.865184781897815993, 2.144865911309686813],
            [3.0, 4.0, 5.0],
        ]);
        assert_matrix_eq(&m, &expected, 1e-12);
    }

    #[test]
    fn test_elementary_rotations_of_axes() {
        let mut m = RotationMatrix3::identity();
        m.rotate_x(HALF_PI);
        let v = m * Vector3::y_axis();
        assert!(v.x.abs() < 1e-15 && v.y.abs() < 1e-15);
        assert!((v.z + 1.0).abs() < 1e-15);

        let mut m = RotationMatrix3::identity();
        m.rotate_y(HALF_PI);
        let v = m * Vector3::z_axis();
        assert!((v.x + 1.0).abs() < 1e-15);
        assert!(v.z.abs() < 1e-15);
    }

    #[test]
    fn test_multiply_and_transpose() {
        let a = sample();
        let b = RotationMatrix3::from_array([[1.0, 2.0, 2.0], [4.0, 1.0, 1.0], [3.0, 0.0, 1.0]]);
        let expected =
            RotationMatrix3::from_array([[20.0, 7.0, 9.0], [20.0, 8.0, 11.0], [34.0, 10.0, 15.0]]);
        assert_eq!(a * b, expected);
        assert_eq!(&a * &b, expected);

        let t = a.transpose();
        assert_eq!(t.get(0, 1), 3.0);
        assert_eq!(t.get(1, 0), 3.0);
        assert_eq!(t.get(2, 0), 2.0);
        assert_eq!(t.get(0, 2), 3.0);
    }

    #[test]
    fn test_apply_and_transpose_apply() {
        let m = sample();
        let p = Vector3::new(0.2, 1.5, 0.1);
        assert_vector_eq(&m.apply_to_vector(p), &Vector3::new(5.1, 3.9, 7.1), 1e-14);
        assert_vector_eq(&m.transpose_apply(p), &Vector3::new(5.2, 4.0, 5.4), 1e-14);
        assert_eq!(m * p, m.apply_to_vector(p));
    }

    #[test]
    fn test_from_rotation_vector_reference() {
        let w = Vector3::new(0.0, 1.41371669, -1.88495559);
        let m = RotationMatrix3::from_rotation_vector(w);
        let expected = RotationMatrix3::from_array([
            [-0.7071067782221119905, -0.5656854276809129651, -0.4242640700104211225],
            [0.5656854276809129651, -0.09254833945322742462, -0.8194112531408833269],
            [0.4242640700104211225, -0.8194112531408833269, 0.3854415612311154341],
        ]);
        assert_matrix_eq(&m, &expected, 1e-14);
    }

    #[test]
    fn test_to_rotation_vector_reference() {
        let m = RotationMatrix3::from_array([
            [0.0, -0.8, -0.6],
            [0.8, -0.36, 0.48],
            [0.6, 0.48, -0.64],
        ]);
        let w = m.to_rotation_vector();
        assert!(w.x.abs() < 1e-12);
        assert!((w.y - 1.413716694115406957).abs() < 1e-12);
        assert!((w.z - -1.884955592153875943).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_vector_singularities() {
        assert_eq!(
            RotationMatrix3::identity().to_rotation_vector(),
            Vector3::zeros()
        );
        assert_eq!(
            RotationMatrix3::from_rotation_vector(Vector3::zeros()),
            RotationMatrix3::identity()
        );
    }

    #[test]
    fn test_rotation_vector_roundtrip() {
        let mut r = RotationMatrix3::identity();
        r.rotate_z(0.7);
        r.rotate_x(-1.1);
        r.rotate_y(2.3);
        assert!(r.is_rotation_matrix(1e-14));

        let back = RotationMatrix3::from_rotation_vector(r.to_rotation_vector());
        assert_matrix_eq(&back, &r, 1e-14);
    }

    #[test]
    fn test_is_rotation_matrix() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.5);
        assert!(m.is_rotation_matrix(1e-14));

        let scaled =
            RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!scaled.is_rotation_matrix(1e-15));

        let sheared =
            RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!sheared.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_transform_spherical() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(HALF_PI);
        let (lon, lat) = m.transform_spherical(0.0, 0.0);
        assert!((lon + HALF_PI).abs() < 1e-14);
        assert!(lat.abs() < 1e-14);
    }

    #[test]
    fn test_index_and_display() {
        let mut m = RotationMatrix3::identity();
        m[(0, 1)] = 0.5;
        assert_eq!(m[(0, 1)], 0.5);
        assert!(format!("{}", m).starts_with("RotationMatrix3:"));
    }
}
