//! Position-velocity vectors ("pv-vectors").
//!
//! A [`PositionVelocity`] pairs a position with its rate of change. The unit
//! of time is whatever the caller uses consistently: the catalog routines in
//! `celestial-coords` work in AU and AU/day.
//!
//! Products follow the chain rule, so the velocity part of a dot or cross
//! product is the time derivative of the position part:
//!
//! ```
//! use celestial_core::{PositionVelocity, Vector3};
//!
//! let a = PositionVelocity::from_vectors(Vector3::new(2.0, 2.0, 3.0), Vector3::new(6.0, 0.0, 4.0));
//! let b = PositionVelocity::from_vectors(Vector3::new(1.0, 3.0, 4.0), Vector3::new(0.0, 2.0, 8.0));
//!
//! assert_eq!(a.dot(&b), (20.0, 50.0));
//! ```

use super::{RotationMatrix3, Vector3};

/// Position and velocity, each a Cartesian 3-vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionVelocity {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl PositionVelocity {
    pub const fn zero() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
        }
    }

    pub const fn from_vectors(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }

    /// Moduli of the position and velocity parts, `(|p|, |v|)`.
    pub fn magnitudes(&self) -> (f64, f64) {
        (self.position.magnitude(), self.velocity.magnitude())
    }

    /// Moves the position forward by `dt` at constant velocity.
    pub fn update(&self, dt: f64) -> Self {
        Self::from_vectors(self.update_position(dt), self.velocity)
    }

    /// Position after `dt` at constant velocity (the velocity is discarded).
    pub fn update_position(&self, dt: f64) -> Vector3 {
        self.position.add_scaled(dt, &self.velocity)
    }

    /// Inner product and its derivative: `(a·b, a·ḃ + ȧ·b)`.
    pub fn dot(&self, other: &Self) -> (f64, f64) {
        let ab = self.position.dot(&other.position);
        let adb = self.position.dot(&other.velocity) + self.velocity.dot(&other.position);
        (ab, adb)
    }

    /// Outer product and its derivative.
    pub fn cross(&self, other: &Self) -> Self {
        let p = self.position.cross(&other.position);
        let v = self.position.cross(&other.velocity) + self.velocity.cross(&other.position);
        Self::from_vectors(p, v)
    }

    /// Multiplies both parts by `s`.
    pub fn scale(&self, s: f64) -> Self {
        self.scale_each(s, s)
    }

    /// Multiplies the position by `sp` and the velocity by `sv`.
    pub fn scale_each(&self, sp: f64, sv: f64) -> Self {
        Self::from_vectors(self.position.scale(sp), self.velocity.scale(sv))
    }

    /// Builds a pv-vector from spherical coordinates and their rates.
    ///
    /// `theta`, `phi` are longitude and latitude, `r` the distance; `td`,
    /// `pd`, `rd` are their time derivatives.
    pub fn from_spherical(theta: f64, phi: f64, r: f64, td: f64, pd: f64, rd: f64) -> Self {
        let (st, ct) = libm::sincos(theta);
        let (sp, cp) = libm::sincos(phi);
        let rcp = r * cp;
        let x = rcp * ct;
        let y = rcp * st;
        let rpd = r * pd;
        let w = rpd * sp - cp * rd;

        Self::from_vectors(
            Vector3::new(x, y, r * sp),
            Vector3::new(-y * td - w * ct, x * td - w * st, rpd * cp + sp * rd),
        )
    }

    /// Spherical coordinates and rates, `(theta, phi, r, td, pd, rd)`.
    ///
    /// If the position is null but the velocity is not, the angles describe
    /// the direction of motion; `r` is then 0. On the polar axis `theta` and
    /// its rate are 0.
    pub fn to_spherical(&self) -> (f64, f64, f64, f64, f64, f64) {
        let Vector3 { x, y, z } = self.position;
        let Vector3 {
            x: xd,
            y: yd,
            z: zd,
        } = self.velocity;

        let rtrue = self.position.magnitude();

        let (x, y, z, rxy2, r2) = if rtrue == 0.0 {
            let rxy2 = xd * xd + yd * yd;
            (xd, yd, zd, rxy2, rxy2 + zd * zd)
        } else {
            let rxy2 = x * x + y * y;
            (x, y, z, rxy2, rxy2 + z * z)
        };
        let rw = libm::sqrt(r2);

        let rxy = libm::sqrt(rxy2);
        let xyp = x * xd + y * yd;

        let (theta, phi, td, pd) = if rxy2 != 0.0 {
            (
                libm::atan2(y, x),
                libm::atan2(z, rxy),
                (x * yd - y * xd) / rxy2,
                (zd * rxy2 - z * xyp) / (r2 * rxy),
            )
        } else {
            let phi = if z != 0.0 { libm::atan2(z, rxy) } else { 0.0 };
            (0.0, phi, 0.0, 0.0)
        };

        let rd = if rw != 0.0 { (xyp + z * zd) / rw } else { 0.0 };

        (theta, phi, rtrue, td, pd, rd)
    }

    /// Rotates both parts by `m`.
    pub fn rotate(&self, m: &RotationMatrix3) -> Self {
        Self::from_vectors(m.apply_to_vector(self.position), m.apply_to_vector(self.velocity))
    }

    /// Rotates both parts by the transpose (inverse) of `m`.
    pub fn rotate_inverse(&self, m: &RotationMatrix3) -> Self {
        Self::from_vectors(
            m.transpose_apply(self.position),
            m.transpose_apply(self.velocity),
        )
    }
}

impl std::ops::Add for PositionVelocity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vectors(self.position + rhs.position, self.velocity + rhs.velocity)
    }
}

impl std::ops::Sub for PositionVelocity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vectors(self.position - rhs.position, self.velocity - rhs.velocity)
    }
}
