use crate::coords::{ColorRgba, Vec2};

use super::{Geometry, TriangleIndex, Vertex2D};

/// Tessellates a pre-triangulated polygon: a flat point list plus triangle
/// indices produced by an external triangulator.
///
/// The builder validates the index set (every index in range) and rejects
/// invalid input as a no-op rather than emitting corrupt topology. Colors
/// are uniform; `offset` shifts every point.
pub fn build_polygon(
    out: &mut Geometry,
    points: &[Vec2],
    triangles: &[TriangleIndex],
    offset: Option<Vec2>,
    color: ColorRgba,
) -> bool {
    if points.len() < 3 || triangles.is_empty() {
        return false;
    }
    if points.iter().any(|p| !p.is_finite()) {
        return false;
    }
    if triangles.iter().flatten().any(|&i| (i as usize) >= points.len()) {
        return false;
    }

    let shift = offset.unwrap_or(Vec2::zero());
    let base = out.vertices.len() as u16;
    for &p in points {
        out.push(p + shift, color);
    }
    for tri in triangles {
        out.push_triangle(base + tri[0], base + tri[1], base + tri[2]);
    }
    true
}

/// Appends fully pre-built polygon geometry: vertices with positions, UVs
/// and colors already resolved, plus triangle indices relative to
/// `vertices`. The raw entry point used when an upstream geometry pipeline
/// (boolean ops, text shaping) has already produced engine-ready buffers.
pub fn build_polygon_raw(
    out: &mut Geometry,
    vertices: &[Vertex2D],
    triangles: &[TriangleIndex],
) -> bool {
    if vertices.is_empty() || triangles.is_empty() {
        return false;
    }
    if triangles.iter().flatten().any(|&i| (i as usize) >= vertices.len()) {
        return false;
    }

    let base = out.vertices.len() as u16;
    out.vertices.extend_from_slice(vertices);
    for tri in triangles {
        out.push_triangle(base + tri[0], base + tri[1], base + tri[2]);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: ColorRgba = ColorRgba::white();

    fn unit_quad() -> ([Vec2; 4], [TriangleIndex; 2]) {
        (
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
            [[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn polygon_copies_points_and_indices() {
        let (pts, tris) = unit_quad();
        let mut g = Geometry::new();
        assert!(build_polygon(&mut g, &pts, &tris, None, WHITE));
        assert_eq!(g.vertices.len(), 4);
        assert_eq!(g.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn polygon_applies_offset() {
        let (pts, tris) = unit_quad();
        let mut g = Geometry::new();
        assert!(build_polygon(&mut g, &pts, &tris, Some(Vec2::new(5.0, 5.0)), WHITE));
        assert_eq!(g.vertices[0].pos, [5.0, 5.0]);
    }

    #[test]
    fn polygon_with_out_of_range_index_is_noop() {
        let (pts, _) = unit_quad();
        let mut g = Geometry::new();
        assert!(!build_polygon(&mut g, &pts, &[[0, 1, 9]], None, WHITE));
        assert!(g.is_empty());
    }

    #[test]
    fn polygon_with_too_few_points_is_noop() {
        let mut g = Geometry::new();
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
        assert!(!build_polygon(&mut g, &pts, &[[0, 1, 1]], None, WHITE));
        assert!(g.is_empty());
    }

    #[test]
    fn raw_polygon_preserves_vertex_payload() {
        let verts = [
            Vertex2D::textured(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), WHITE),
            Vertex2D::textured(Vec2::new(8.0, 0.0), Vec2::new(1.0, 0.0), WHITE),
            Vertex2D::textured(Vec2::new(8.0, 8.0), Vec2::new(1.0, 1.0), WHITE),
        ];
        let mut g = Geometry::new();
        assert!(build_polygon_raw(&mut g, &verts, &[[0, 1, 2]]));
        assert_eq!(g.vertices[1].uv, [1.0, 0.0]);
        assert_eq!(g.indices, vec![0, 1, 2]);
    }

    #[test]
    fn raw_polygon_rebases_onto_existing_geometry() {
        let verts = [
            Vertex2D::new(Vec2::new(0.0, 0.0), WHITE),
            Vertex2D::new(Vec2::new(1.0, 0.0), WHITE),
            Vertex2D::new(Vec2::new(1.0, 1.0), WHITE),
        ];
        let mut g = Geometry::new();
        g.push(Vec2::zero(), WHITE);
        assert!(build_polygon_raw(&mut g, &verts, &[[0, 1, 2]]));
        assert_eq!(g.indices, vec![1, 2, 3]);
    }
}
