use crate::tess::{IndexType, MAX_BATCH_VERTICES, Vertex2D};

/// Where an appended primitive landed inside a batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BatchOffset {
    /// First vertex of the primitive.
    pub base_vertex: u32,
    /// First index of the primitive (element offset, not bytes).
    pub index_offset: u32,
}

/// Append-only vertex/index storage with a fixed capacity.
///
/// Indices handed to [`try_append`] are 0-based within the primitive; the
/// batch rebases them onto its own vertex array. The vertex capacity never
/// exceeds [`MAX_BATCH_VERTICES`], so rebased indices always fit the 16-bit
/// index type.
///
/// [`try_append`]: VertexIndexBatch::try_append
#[derive(Debug)]
pub struct VertexIndexBatch {
    vertices: Vec<Vertex2D>,
    indices: Vec<IndexType>,
    vertex_capacity: usize,
    index_capacity: usize,
}

impl VertexIndexBatch {
    /// Creates an empty batch. `vertex_capacity` is clamped to
    /// [`MAX_BATCH_VERTICES`]. Backing storage is reserved up front so
    /// recording never reallocates.
    pub fn new(vertex_capacity: usize, index_capacity: usize) -> Self {
        let vertex_capacity = vertex_capacity.min(MAX_BATCH_VERTICES);
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(index_capacity),
            vertex_capacity,
            index_capacity,
        }
    }

    #[inline]
    pub fn vertex_capacity(&self) -> usize {
        self.vertex_capacity
    }

    #[inline]
    pub fn index_capacity(&self) -> usize {
        self.index_capacity
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[IndexType] {
        &self.indices
    }

    /// Whether a primitive of the given size would fit.
    #[inline]
    pub fn fits(&self, vertex_count: usize, index_count: usize) -> bool {
        self.vertices.len() + vertex_count <= self.vertex_capacity
            && self.indices.len() + index_count <= self.index_capacity
    }

    /// Appends one primitive, rebasing its indices, or returns `None` when
    /// it would overflow (the signal to rotate batches).
    pub fn try_append(
        &mut self,
        vertices: &[Vertex2D],
        indices: &[IndexType],
    ) -> Option<BatchOffset> {
        if !self.fits(vertices.len(), indices.len()) {
            return None;
        }

        let base_vertex = self.vertices.len() as u32;
        let index_offset = self.indices.len() as u32;

        self.vertices.extend_from_slice(vertices);
        // base_vertex + i < vertex_capacity <= 65536, so the rebased value
        // fits IndexType.
        self.indices
            .extend(indices.iter().map(|&i| i + base_vertex as IndexType));

        Some(BatchOffset {
            base_vertex,
            index_offset,
        })
    }

    /// Restores write offsets to zero without releasing backing storage.
    #[inline]
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Vec2};

    fn verts(n: usize) -> Vec<Vertex2D> {
        (0..n)
            .map(|i| Vertex2D::new(Vec2::new(i as f32, 0.0), ColorRgba::white()))
            .collect()
    }

    // ── append / rebase ───────────────────────────────────────────────────

    #[test]
    fn append_rebases_indices() {
        let mut batch = VertexIndexBatch::new(16, 16);

        let first = batch.try_append(&verts(3), &[0, 1, 2]).unwrap();
        assert_eq!(first, BatchOffset { base_vertex: 0, index_offset: 0 });

        let second = batch.try_append(&verts(3), &[0, 1, 2]).unwrap();
        assert_eq!(second, BatchOffset { base_vertex: 3, index_offset: 3 });
        assert_eq!(batch.indices(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn append_vertex_overflow_returns_none() {
        let mut batch = VertexIndexBatch::new(4, 64);
        assert!(batch.try_append(&verts(3), &[0, 1, 2]).is_some());
        assert!(batch.try_append(&verts(3), &[0, 1, 2]).is_none());
        // Failed append leaves the batch untouched.
        assert_eq!(batch.vertex_count(), 3);
        assert_eq!(batch.index_count(), 3);
    }

    #[test]
    fn append_index_overflow_returns_none() {
        let mut batch = VertexIndexBatch::new(64, 4);
        assert!(batch.try_append(&verts(3), &[0, 1, 2]).is_some());
        assert!(batch.try_append(&verts(3), &[0, 1, 2]).is_none());
    }

    #[test]
    fn exact_fit_is_accepted() {
        let mut batch = VertexIndexBatch::new(3, 3);
        assert!(batch.try_append(&verts(3), &[0, 1, 2]).is_some());
        assert!(!batch.fits(1, 0));
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_zeroes_offsets_and_keeps_storage() {
        let mut batch = VertexIndexBatch::new(16, 16);
        batch.try_append(&verts(4), &[0, 1, 2, 0, 2, 3]).unwrap();

        let vcap = batch.vertices.capacity();
        batch.reset();

        assert!(batch.is_empty());
        assert_eq!(batch.vertices.capacity(), vcap);
        assert_eq!(
            batch.try_append(&verts(3), &[0, 1, 2]).unwrap(),
            BatchOffset { base_vertex: 0, index_offset: 0 }
        );
    }

    // ── capacity clamp ────────────────────────────────────────────────────

    #[test]
    fn vertex_capacity_clamps_to_index_range() {
        let batch = VertexIndexBatch::new(1_000_000, 16);
        assert_eq!(batch.vertex_capacity(), MAX_BATCH_VERTICES);
    }
}
