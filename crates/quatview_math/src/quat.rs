//! Quaternion rotation type
//!
//! A quaternion stores a vector part (x, y, z) and a scalar part w. Only a
//! unit quaternion represents a pure rotation; the type does not enforce
//! that, so callers normalize before relying on rotation semantics.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::EPSILON;

/// Quaternion with vector part (x, y, z) and scalar part w
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Quat
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Conjugate: negate the vector part
    ///
    /// For a unit quaternion this is the inverse rotation; for non-unit
    /// input it is only the algebraic conjugate, not a true inverse.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Squared norm (faster than norm)
    #[inline]
    pub fn norm_squared(self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Norm (magnitude)
    #[inline]
    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Normalize to unit norm
    ///
    /// Returns [`Quat::IDENTITY`] when the norm is below [`EPSILON`]. The
    /// guard is a threshold, not an exact zero test, so near-zero
    /// quaternions take the fallback too.
    pub fn normalized(self) -> Self {
        let n = self.norm();
        if n < EPSILON {
            return Self::IDENTITY;
        }
        let inv = 1.0 / n;
        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    /// Multiplicative inverse: conjugate divided by the squared norm
    ///
    /// Valid for non-unit quaternions; for a unit quaternion it equals the
    /// conjugate. Returns [`Quat::IDENTITY`] when the squared norm is below
    /// [`EPSILON`]².
    pub fn inverse(self) -> Self {
        let norm_sq = self.norm_squared();
        if norm_sq < EPSILON * EPSILON {
            return Self::IDENTITY;
        }
        let c = self.conjugate();
        Self::new(c.x / norm_sq, c.y / norm_sq, c.z / norm_sq, c.w / norm_sq)
    }

}

impl std::ops::Mul for Quat {
    type Output = Self;

    /// Hamilton product: self * other
    ///
    /// Not commutative; `q * r` and `r * q` differ in general.
    #[inline]
    fn mul(self, r: Self) -> Self {
        let q = self;
        Self::new(
            q.w * r.x + q.x * r.w + q.y * r.z - q.z * r.y,
            q.w * r.y - q.x * r.z + q.y * r.w + q.z * r.x,
            q.w * r.z + q.x * r.y - q.y * r.x + q.z * r.w,
            q.w * r.w - q.x * r.x - q.y * r.y - q.z * r.z,
        )
    }
}

impl std::ops::Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl fmt::Display for Quat {
    /// Fixed two-decimal rendering of the four components, x y z w
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:6.2} {:6.2} {:6.2} {:6.2}",
            self.x, self.y, self.z, self.w
        )
    }
}
