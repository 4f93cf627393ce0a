use core::ops::Mul;

use crate::coords::Vec2;

/// 4x4 affine matrix in row-major order.
///
/// Points are treated as column vectors `(x, y, 0, 1)`, so `a * b` applies `b`
/// first, then `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, 0.0, // row 1
            0.0, 0.0, 1.0, 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ],
    };

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translation by `(x, y, 0)`.
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, x, // row 0
                0.0, 1.0, 0.0, y, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    #[inline]
    pub fn translate_vec(v: Vec2) -> Self {
        Self::translate(v.x, v.y)
    }

    /// Counter-clockwise rotation about the Z axis.
    pub fn rotate(angle_radians: f32) -> Self {
        let (sin, cos) = angle_radians.sin_cos();
        Self {
            data: [
                cos, -sin, 0.0, 0.0, // row 0
                sin, cos, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    #[inline]
    pub fn rotate_degrees(angle_degrees: f32) -> Self {
        Self::rotate(angle_degrees.to_radians())
    }

    /// Uniform scale on X and Y; Z is left at `1`.
    pub fn scale(s: f32) -> Self {
        Self {
            data: [
                s, 0.0, 0.0, 0.0, // row 0
                0.0, s, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Applies the matrix to `(x, y, 0, 1)`.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let m = &self.data;
        Vec2::new(m[0] * p.x + m[1] * p.y + m[3], m[4] * p.x + m[5] * p.y + m[7])
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let a = &self.data;
        let b = &rhs.data;
        let mut out = [0.0f32; 16];

        for i in 0..4 {
            for j in 0..4 {
                out[i * 4 + j] = (0..4).map(|k| a[i * 4 + k] * b[k * 4 + j]).sum();
            }
        }

        Mat4 { data: out }
    }
}
