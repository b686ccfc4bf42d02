//! Vector and matrix primitives.
//!
//! - [`Vector3`]: Cartesian p-vector (position or direction)
//! - [`PositionVelocity`]: pv-vector, a position with its velocity
//! - [`RotationMatrix3`]: 3×3 r-matrix for frame rotations

mod pv;
mod rotation_matrix;
mod vector3;

pub use pv::PositionVelocity;
pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
