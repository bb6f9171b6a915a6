use core::f32::consts::TAU;

use crate::coords::{ColorRgba, Vec2};

use super::Geometry;

#[inline]
fn ellipse_point(center: Vec2, a: f32, b: f32, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(center.x + a * sin, center.y - b * cos)
}

/// Tessellates a filled axis-aligned ellipse with radii `a` (horizontal) and
/// `b` (vertical). `segments` should come from the larger screen-space
/// radius.
pub fn build_ellipse(
    out: &mut Geometry,
    center: Vec2,
    a: f32,
    b: f32,
    inner_color: ColorRgba,
    outer_color: ColorRgba,
    segments: u16,
) -> bool {
    if !(a > 0.0) || !(b > 0.0) || !center.is_finite() || segments < 3 {
        return false;
    }

    let hub = out.push(center, inner_color);
    let step = TAU / segments as f32;
    for i in 0..segments {
        out.push(ellipse_point(center, a, b, step * i as f32), outer_color);
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        out.push_triangle(hub, hub + 1 + i, hub + 1 + next);
    }
    true
}

/// Tessellates an elliptical ring between the inner radii (`a_inner`,
/// `b_inner`) and those radii grown by `thickness`.
pub fn build_ellipse_frame(
    out: &mut Geometry,
    center: Vec2,
    a_inner: f32,
    b_inner: f32,
    thickness: f32,
    inner_color: ColorRgba,
    outer_color: ColorRgba,
    segments: u16,
) -> bool {
    let a_inner = a_inner.max(0.0);
    let b_inner = b_inner.max(0.0);
    if !(thickness > 0.0) || !center.is_finite() || segments < 3 {
        return false;
    }

    let (a_outer, b_outer) = (a_inner + thickness, b_inner + thickness);
    let base = out.vertices.len() as u16;
    let step = TAU / segments as f32;
    for i in 0..segments {
        let angle = step * i as f32;
        out.push(ellipse_point(center, a_inner, b_inner, angle), inner_color);
        out.push(ellipse_point(center, a_outer, b_outer, angle), outer_color);
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        let (i0, o0) = (base + 2 * i, base + 2 * i + 1);
        let (i1, o1) = (base + 2 * next, base + 2 * next + 1);
        out.push_quad_indices(i0, o0, o1, i1);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: ColorRgba = ColorRgba::white();
    const BLACK: ColorRgba = ColorRgba::black();

    #[test]
    fn ellipse_fan_counts() {
        let mut g = Geometry::new();
        assert!(build_ellipse(&mut g, Vec2::zero(), 20.0, 10.0, WHITE, BLACK, 16));
        assert_eq!(g.vertices.len(), 17);
        assert_eq!(g.indices.len(), 48);
    }

    #[test]
    fn ellipse_rim_satisfies_implicit_equation() {
        let mut g = Geometry::new();
        build_ellipse(&mut g, Vec2::zero(), 20.0, 10.0, WHITE, BLACK, 16);
        for v in &g.vertices[1..] {
            let e = (v.pos[0] / 20.0).powi(2) + (v.pos[1] / 10.0).powi(2);
            assert!((e - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn ellipse_degenerate_axis_is_noop() {
        let mut g = Geometry::new();
        assert!(!build_ellipse(&mut g, Vec2::zero(), 0.0, 10.0, WHITE, BLACK, 16));
        assert!(!build_ellipse(&mut g, Vec2::zero(), 10.0, -1.0, WHITE, BLACK, 16));
        assert!(g.is_empty());
    }

    #[test]
    fn frame_grows_outward_by_thickness() {
        let mut g = Geometry::new();
        assert!(build_ellipse_frame(&mut g, Vec2::zero(), 20.0, 10.0, 2.0, WHITE, BLACK, 8));
        // Outer vertices satisfy the grown-ellipse equation.
        for pair in g.vertices.chunks(2) {
            let o = pair[1].pos;
            let e = (o[0] / 22.0).powi(2) + (o[1] / 12.0).powi(2);
            assert!((e - 1.0).abs() < 1e-4);
        }
    }
}
