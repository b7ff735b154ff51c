//! Rotation-matrix builders
//!
//! Two ways to synthesize a pure rotation [`Mat4`] from geometric inputs:
//! the shortest rotation carrying one direction onto another, and a
//! rotation by a given angle about an arbitrary axis. Both fill only the
//! upper 3x3 block; the translation row and column stay at identity.

use crate::{Mat4, Vec3, EPSILON};

/// Rodrigues rotation matrix from a unit axis and precomputed cos/sin
///
/// R = I*c + (n ⊗ n)*(1 - c) + [n]x * s, written entry-wise, row-major.
fn axis_cos_sin_matrix(n: Vec3, c: f32, s: f32) -> Mat4 {
    let one_minus_c = 1.0 - c;
    Mat4::from_rows([
        [
            c + n.x * n.x * one_minus_c,
            n.x * n.y * one_minus_c - n.z * s,
            n.x * n.z * one_minus_c + n.y * s,
            0.0,
        ],
        [
            n.y * n.x * one_minus_c + n.z * s,
            c + n.y * n.y * one_minus_c,
            n.y * n.z * one_minus_c - n.x * s,
            0.0,
        ],
        [
            n.z * n.x * one_minus_c - n.y * s,
            n.z * n.y * one_minus_c + n.x * s,
            c + n.z * n.z * one_minus_c,
            0.0,
        ],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Build the rotation matrix mapping direction `from` onto direction `to`
///
/// Both inputs are normalized internally. When the directions are already
/// effectively identical (`cos θ > 1 - EPSILON`) the rotation axis is
/// undefined and the identity is returned directly rather than normalizing
/// a near-zero cross product.
///
/// The anti-parallel case (`cos θ` near -1) is not handled: the cross
/// product degenerates there as well, but a 180 degree rotation about some
/// orthogonal axis would be required, and this builder does not pick one.
/// Callers needing that case must special-case it themselves.
pub fn direction_to_direction(from: Vec3, to: Vec3) -> Mat4 {
    let u = from.normalized();
    let v = to.normalized();

    let cos_theta = u.dot(v);
    if cos_theta > 1.0 - EPSILON {
        return Mat4::IDENTITY;
    }

    // sin θ is the cross product's length, taken before the axis loses it
    // to normalization
    let cross = u.cross(v);
    let sin_theta = cross.length();
    let axis = cross.normalized();

    axis_cos_sin_matrix(axis, cos_theta, sin_theta)
}

/// Build the rotation matrix for `angle` radians about `axis`
///
/// The axis need not be unit length; it is normalized internally. A
/// zero-length axis falls through the Vec3 epsilon guard to the zero
/// vector, which leaves the off-diagonal entries at zero and puts
/// `cos(angle)` alone on the diagonal rather than producing a rotation.
pub fn rotate_axis_angle(axis: Vec3, angle: f32) -> Mat4 {
    let n = axis.normalized();
    axis_cos_sin_matrix(n, angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const TEST_EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < TEST_EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a.m[i][j], b.m[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_direction_to_direction_same_direction() {
        let v = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(direction_to_direction(v, v), Mat4::IDENTITY);

        // Same direction, different magnitudes
        let m = direction_to_direction(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn test_direction_to_direction_x_to_y() {
        let m = direction_to_direction(Vec3::X, Vec3::Y);
        let rotated = m.transform_direction(Vec3::X);
        assert!(vec_approx_eq(rotated, Vec3::Y), "got {:?}", rotated);
        // 90 degrees about Z
        assert!(approx_eq(m.m[0][0], 0.0));
        assert!(approx_eq(m.m[0][1], -1.0));
        assert!(approx_eq(m.m[1][0], 1.0));
    }

    #[test]
    fn test_direction_to_direction_maps_from_onto_to() {
        let from = Vec3::new(1.0, 2.0, -0.5);
        let to = Vec3::new(-3.0, 0.5, 1.0);
        let m = direction_to_direction(from, to);
        let rotated = m.transform_direction(from.normalized());
        assert!(
            vec_approx_eq(rotated, to.normalized()),
            "expected {:?}, got {:?}",
            to.normalized(),
            rotated
        );
    }

    #[test]
    fn test_direction_to_direction_is_pure_rotation() {
        let m = direction_to_direction(Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 2.0));
        // Rotation inverse equals transpose
        assert!(mat_approx_eq(m * m.transposed(), Mat4::IDENTITY));
        // Translation row and column stay identity
        assert_eq!(m.m[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            [m.m[0][3], m.m[1][3], m.m[2][3]],
            [0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_rotate_axis_angle_zero_angle() {
        let m = rotate_axis_angle(Vec3::new(0.3, -1.0, 2.0), 0.0);
        assert!(mat_approx_eq(m, Mat4::IDENTITY));
    }

    #[test]
    fn test_rotate_axis_angle_quarter_turn_z() {
        let m = rotate_axis_angle(Vec3::Z, FRAC_PI_2);
        assert!(vec_approx_eq(m.transform_direction(Vec3::X), Vec3::Y));
        assert!(vec_approx_eq(m.transform_direction(Vec3::Y), -Vec3::X));
        assert!(vec_approx_eq(m.transform_direction(Vec3::Z), Vec3::Z));
    }

    #[test]
    fn test_rotate_axis_angle_unnormalized_axis() {
        // Scaling the axis must not change the rotation
        let a = rotate_axis_angle(Vec3::new(1.0, 1.0, 1.0), 0.7);
        let b = rotate_axis_angle(Vec3::new(10.0, 10.0, 10.0), 0.7);
        assert!(mat_approx_eq(a, b));
    }

    #[test]
    fn test_rotate_axis_angle_periodicity() {
        // Eight eighth-turns about (1,1,1) compose back to identity
        let step = rotate_axis_angle(Vec3::new(1.0, 1.0, 1.0), PI / 4.0);
        let mut composed = Mat4::IDENTITY;
        for _ in 0..8 {
            composed = step * composed;
        }
        assert!(mat_approx_eq(composed, Mat4::IDENTITY), "got {:?}", composed);
    }

    #[test]
    fn test_rotate_axis_angle_zero_axis() {
        // Degenerate axis: cos(angle) on the diagonal, nothing else
        let m = rotate_axis_angle(Vec3::ZERO, 1.0);
        let c = 1.0_f32.cos();
        assert!(approx_eq(m.m[0][0], c));
        assert!(approx_eq(m.m[1][1], c));
        assert!(approx_eq(m.m[2][2], c));
        assert!(approx_eq(m.m[0][1], 0.0));
        assert!(approx_eq(m.m[2][1], 0.0));
        assert_eq!(m.m[3][3], 1.0);
    }

    #[test]
    fn test_builders_agree() {
        // direction_to_direction(X, Y) is a quarter turn about Z
        let a = direction_to_direction(Vec3::X, Vec3::Y);
        let b = rotate_axis_angle(Vec3::Z, FRAC_PI_2);
        assert!(mat_approx_eq(a, b));
    }
}
