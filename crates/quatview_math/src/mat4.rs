//! Row-major 4x4 matrix
//!
//! Entries are indexed row first: `m[row][col]`. A vector transforms as a
//! column vector, `v' = M * v`. Nothing here validates that a given value
//! is a rotation; callers know what their matrices represent.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec3;

/// 4x4 matrix, row-major
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a matrix from its rows
    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Matrix product: self * other
    ///
    /// Applies `other` first, then `self`, under the column-vector
    /// convention.
    pub fn mul(self, other: Self) -> Self {
        let mut m = [[0.0f32; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                for k in 0..4 {
                    *entry += self.m[i][k] * other.m[k][j];
                }
            }
        }
        Self { m }
    }

    /// Rotate a direction by the upper 3x3 block
    ///
    /// The translation column is ignored; directions have no position.
    pub fn transform_direction(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Transpose
    pub fn transposed(self) -> Self {
        let mut m = [[0.0f32; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = self.m[j][i];
            }
        }
        Self { m }
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Mat4::mul(self, other)
    }
}

impl fmt::Display for Mat4 {
    /// Fixed-layout rendering: four lines of four entries, each entry three
    /// decimal places in an eight-character field
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:8.3} {:8.3} {:8.3} {:8.3}",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}
