use core::ops::Mul;

use super::Vec2;

/// 2D affine transform (3x2 matrix, row-vector convention).
///
/// A point transforms as `[x y 1] * M`:
///
/// ```text
/// x' = x*a + y*c + tx
/// y' = x*b + y*d + ty
/// ```
///
/// `A * B` composes "apply A, then B", so `local * camera` is the full
/// local-to-screen transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3x2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Mat3x2 {
    pub const IDENTITY: Mat3x2 = Mat3x2 {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Mat3x2 { tx, ty, ..Self::IDENTITY }
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Mat3x2 { a: sx, d: sy, ..Self::IDENTITY }
    }

    /// Rotation by `angle` radians, clockwise on screen (+Y down).
    #[inline]
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Mat3x2 {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.a + p.y * self.c + self.tx,
            p.x * self.b + p.y * self.d + self.ty,
        )
    }

    /// Largest singular value of the 2x2 linear part.
    ///
    /// This is the worst-case length scaling the transform applies to any
    /// direction; adaptive tessellation sizes screen-space detail with it.
    pub fn max_scale_factor(&self) -> f32 {
        let e = (self.a + self.d) * 0.5;
        let f = (self.a - self.d) * 0.5;
        let g = (self.c + self.b) * 0.5;
        let h = (self.c - self.b) * 0.5;
        (e * e + h * h).sqrt() + (f * f + g * g).sqrt()
    }
}

impl Default for Mat3x2 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3x2 {
    type Output = Mat3x2;

    fn mul(self, rhs: Mat3x2) -> Mat3x2 {
        Mat3x2 {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
            tx: self.tx * rhs.a + self.ty * rhs.c + rhs.tx,
            ty: self.tx * rhs.b + self.ty * rhs.d + rhs.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── transform_point ───────────────────────────────────────────────────

    #[test]
    fn identity_leaves_points_unchanged() {
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(Mat3x2::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn translation_offsets_points() {
        let m = Mat3x2::translation(10.0, 20.0);
        assert_eq!(m.transform_point(Vec2::new(1.0, 2.0)), Vec2::new(11.0, 22.0));
    }

    #[test]
    fn scaling_multiplies_components() {
        let m = Mat3x2::scaling(2.0, 3.0);
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn rotation_quarter_turn_is_clockwise_on_screen() {
        let m = Mat3x2::rotation(core::f32::consts::FRAC_PI_2);
        let p = m.transform_point(Vec2::new(1.0, 0.0));
        assert!(close(p.x, 0.0) && close(p.y, 1.0));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn mul_applies_left_then_right() {
        let m = Mat3x2::scaling(2.0, 2.0) * Mat3x2::translation(5.0, 0.0);
        // Scale first, translate second: (1,0) -> (2,0) -> (7,0).
        assert_eq!(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(7.0, 0.0));
    }

    // ── max_scale_factor ──────────────────────────────────────────────────

    #[test]
    fn max_scale_of_identity_is_one() {
        assert!(close(Mat3x2::IDENTITY.max_scale_factor(), 1.0));
    }

    #[test]
    fn max_scale_of_nonuniform_scaling_is_larger_axis() {
        assert!(close(Mat3x2::scaling(2.0, 5.0).max_scale_factor(), 5.0));
    }

    #[test]
    fn max_scale_is_rotation_invariant() {
        let m = Mat3x2::scaling(3.0, 1.0) * Mat3x2::rotation(0.7);
        assert!(close(m.max_scale_factor(), 3.0));
    }

    #[test]
    fn translation_does_not_affect_max_scale() {
        assert!(close(Mat3x2::translation(100.0, -50.0).max_scale_factor(), 1.0));
    }
}
