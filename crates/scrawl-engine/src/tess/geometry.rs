use crate::coords::{ColorRgba, Vec2};

use super::{IndexType, Vertex2D};

/// Reusable scratch buffer one primitive is tessellated into.
///
/// Indices are 0-based relative to this buffer; the batch rebases them when
/// the primitive is appended. `clear()` keeps allocations, so a warmed-up
/// engine tessellates without per-call heap churn.
#[derive(Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex2D>,
    pub indices: Vec<IndexType>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex and returns its index within this primitive.
    #[inline]
    pub fn push(&mut self, pos: Vec2, color: ColorRgba) -> IndexType {
        let index = self.vertices.len() as IndexType;
        self.vertices.push(Vertex2D::new(pos, color));
        index
    }

    #[inline]
    pub fn push_triangle(&mut self, a: IndexType, b: IndexType, c: IndexType) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Two triangles covering the quad `a b c d` (corners in winding order).
    #[inline]
    pub fn push_quad_indices(&mut self, a: IndexType, b: IndexType, c: IndexType, d: IndexType) {
        self.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_sequential_indices() {
        let mut g = Geometry::new();
        assert_eq!(g.push(Vec2::zero(), ColorRgba::white()), 0);
        assert_eq!(g.push(Vec2::new(1.0, 0.0), ColorRgba::white()), 1);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut g = Geometry::new();
        for i in 0..64 {
            g.push(Vec2::new(i as f32, 0.0), ColorRgba::white());
        }
        let cap = g.vertices.capacity();
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.vertices.capacity(), cap);
    }

    #[test]
    fn quad_indices_cover_two_triangles() {
        let mut g = Geometry::new();
        g.push_quad_indices(0, 1, 2, 3);
        assert_eq!(g.indices, vec![0, 1, 2, 0, 2, 3]);
    }
}
