//! 3D Rotation Mathematics Library
//!
//! This crate provides the vector, quaternion and matrix types used by the
//! quatview readout tool.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Quat`] - quaternion rotation with vector part (x, y, z) and scalar w
//! - [`Mat4`] - row-major 4x4 matrix for rotations
//!
//! ## Rotation Builders
//!
//! - [`direction_to_direction`] - shortest rotation mapping one direction onto another
//! - [`rotate_axis_angle`] - rotation by an angle about an arbitrary axis
//!
//! All types are plain copy structs and every operation returns a new value;
//! nothing mutates its operands and nothing allocates.

mod vec3;
mod quat;
pub mod mat4;
pub mod rotation;

pub use vec3::Vec3;
pub use quat::Quat;
pub use mat4::Mat4;
pub use rotation::{direction_to_direction, rotate_axis_angle};

/// Threshold below which a length or norm is treated as zero.
///
/// Every degenerate-input guard in this crate uses this single value. The
/// quaternion operations in particular guard with `norm < EPSILON` rather
/// than an exact zero comparison, which would be fragile under accumulated
/// floating-point error.
pub const EPSILON: f32 = 1e-6;
