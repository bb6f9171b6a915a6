use crate::coords::{ColorRgba, Rect, Vec2};

use super::Geometry;

/// Tessellates an axis-aligned rectangle.
///
/// `colors` map to corners in winding order (top-left, top-right,
/// bottom-right, bottom-left), so gradient fills fall out of passing four
/// distinct colors. Empty or non-finite rects are no-ops.
pub fn build_rect(out: &mut Geometry, rect: Rect, colors: [ColorRgba; 4]) -> bool {
    if rect.is_empty() || !rect.is_finite() {
        return false;
    }
    let corners = rect.corners();
    let a = out.push(corners[0], colors[0]);
    let b = out.push(corners[1], colors[1]);
    let c = out.push(corners[2], colors[2]);
    let d = out.push(corners[3], colors[3]);
    out.push_quad_indices(a, b, c, d);
    true
}

/// Tessellates an arbitrary (possibly non-axis-aligned) quad from four
/// corner points in winding order.
pub fn build_quad(out: &mut Geometry, points: [Vec2; 4], colors: [ColorRgba; 4]) -> bool {
    if points.iter().any(|p| !p.is_finite()) {
        return false;
    }
    let a = out.push(points[0], colors[0]);
    let b = out.push(points[1], colors[1]);
    let c = out.push(points[2], colors[2]);
    let d = out.push(points[3], colors[3]);
    out.push_quad_indices(a, b, c, d);
    true
}

/// Tessellates a rectangular frame: the strip between `rect` (outer contour)
/// and `rect` shrunk by `thickness` (inner contour).
///
/// `thickness` is clamped to half the rect's minimum extent so the inner
/// contour cannot cross itself; at the clamp the frame degenerates to a
/// filled rect. Inner vertices carry `inner_color`, outer vertices
/// `outer_color`.
pub fn build_rect_frame(
    out: &mut Geometry,
    rect: Rect,
    thickness: f32,
    inner_color: ColorRgba,
    outer_color: ColorRgba,
) -> bool {
    if rect.is_empty() || !rect.is_finite() || !(thickness > 0.0) {
        return false;
    }

    let t = thickness.min(rect.size.x.min(rect.size.y) * 0.5);
    let outer = rect.corners();
    let inner = rect.shrunk(t).corners();

    let o = outer.map(|p| out.push(p, outer_color));
    let i = inner.map(|p| out.push(p, inner_color));

    for side in 0..4 {
        let next = (side + 1) % 4;
        out.push_quad_indices(o[side], o[next], i[next], i[side]);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(c: ColorRgba) -> [ColorRgba; 4] {
        [c; 4]
    }

    fn triangle_area(g: &Geometry, tri: usize) -> f32 {
        let i = &g.indices[tri * 3..tri * 3 + 3];
        let p = |k: usize| g.vertices[i[k] as usize].pos;
        let (a, b, c) = (p(0), p(1), p(2));
        ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() * 0.5
    }

    fn total_area(g: &Geometry) -> f32 {
        (0..g.indices.len() / 3).map(|t| triangle_area(g, t)).sum()
    }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_emits_two_triangles_with_exact_area() {
        let mut g = Geometry::new();
        assert!(build_rect(
            &mut g,
            Rect::new(0.0, 0.0, 100.0, 50.0),
            solid(ColorRgba::white()),
        ));
        assert_eq!(g.vertices.len(), 4);
        assert_eq!(g.indices.len(), 6);
        assert!((total_area(&g) - 100.0 * 50.0).abs() < 1e-6);
    }

    #[test]
    fn empty_rect_is_noop() {
        let mut g = Geometry::new();
        assert!(!build_rect(&mut g, Rect::new(0.0, 0.0, 0.0, 10.0), solid(ColorRgba::white())));
        assert!(g.is_empty());
    }

    #[test]
    fn corner_colors_land_on_matching_vertices() {
        let mut g = Geometry::new();
        let colors = [
            ColorRgba::new(1.0, 0.0, 0.0, 1.0),
            ColorRgba::new(0.0, 1.0, 0.0, 1.0),
            ColorRgba::new(0.0, 0.0, 1.0, 1.0),
            ColorRgba::new(1.0, 1.0, 0.0, 1.0),
        ];
        build_rect(&mut g, Rect::new(0.0, 0.0, 10.0, 10.0), colors);
        for (v, c) in g.vertices.iter().zip(colors) {
            assert_eq!(v.color, c.to_array());
        }
    }

    // ── quad ──────────────────────────────────────────────────────────────

    #[test]
    fn skewed_quad_area() {
        let mut g = Geometry::new();
        // Parallelogram with base 10 and height 10.
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(15.0, 10.0),
            Vec2::new(5.0, 10.0),
        ];
        assert!(build_quad(&mut g, points, solid(ColorRgba::white())));
        assert!((total_area(&g) - 100.0).abs() < 1e-4);
    }

    // ── rect frame ────────────────────────────────────────────────────────

    #[test]
    fn frame_emits_eight_triangles_with_ring_area() {
        let mut g = Geometry::new();
        assert!(build_rect_frame(
            &mut g,
            Rect::new(0.0, 0.0, 20.0, 10.0),
            2.0,
            ColorRgba::white(),
            ColorRgba::black(),
        ));
        assert_eq!(g.vertices.len(), 8);
        assert_eq!(g.indices.len(), 24);
        // 20x10 minus the 16x6 hole.
        assert!((total_area(&g) - (200.0 - 96.0)).abs() < 1e-4);
    }

    #[test]
    fn frame_thickness_clamps_to_half_min_extent() {
        let mut g = Geometry::new();
        assert!(build_rect_frame(
            &mut g,
            Rect::new(0.0, 0.0, 20.0, 10.0),
            50.0,
            ColorRgba::white(),
            ColorRgba::black(),
        ));
        // Clamped to 5: the hole closes and the frame covers the full rect.
        assert!((total_area(&g) - 200.0).abs() < 1e-4);
    }

    #[test]
    fn frame_zero_thickness_is_noop() {
        let mut g = Geometry::new();
        assert!(!build_rect_frame(
            &mut g,
            Rect::new(0.0, 0.0, 20.0, 10.0),
            0.0,
            ColorRgba::white(),
            ColorRgba::black(),
        ));
        assert!(g.is_empty());
    }
}
