use crate::tess::{IndexType, MAX_BATCH_VERTICES, Vertex2D};

use super::{BatchOffset, VertexIndexBatch};

/// Where the pool stored a primitive.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BatchAppend {
    /// Index of the receiving batch within the pool.
    pub batch: usize,
    pub offset: BatchOffset,
}

/// Rotating pool of batches, owned by the command manager.
///
/// Within one recording cycle the active batch index only advances, so draw
/// entries reference batches in non-decreasing order. Overflow rotates to
/// the next batch; a primitive larger than the nominal capacity gets a
/// dedicated batch sized exactly to it. The pool grows on demand and keeps
/// every batch allocated across cycles.
#[derive(Debug)]
pub struct BatchPool {
    batches: Vec<VertexIndexBatch>,
    active: usize,
    vertex_capacity: usize,
    index_capacity: usize,
}

impl BatchPool {
    pub fn new(vertex_capacity: usize, index_capacity: usize) -> Self {
        let vertex_capacity = vertex_capacity.clamp(4, MAX_BATCH_VERTICES);
        let index_capacity = index_capacity.max(6);
        Self {
            batches: vec![VertexIndexBatch::new(vertex_capacity, index_capacity)],
            active: 0,
            vertex_capacity,
            index_capacity,
        }
    }

    #[inline]
    pub fn batches(&self) -> &[VertexIndexBatch] {
        &self.batches
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Batches that received any data this cycle.
    pub fn used(&self) -> impl Iterator<Item = (usize, &VertexIndexBatch)> {
        self.batches
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_empty())
    }

    /// Appends one primitive, rotating or allocating batches as needed.
    ///
    /// Returns `None` only when the primitive alone exceeds the 16-bit
    /// index range and can never be stored (the caller's fatal condition).
    pub fn append(&mut self, vertices: &[Vertex2D], indices: &[IndexType]) -> Option<BatchAppend> {
        if vertices.len() > MAX_BATCH_VERTICES {
            return None;
        }

        loop {
            if let Some(offset) = self.batches[self.active].try_append(vertices, indices) {
                return Some(BatchAppend {
                    batch: self.active,
                    offset,
                });
            }

            // Rotate. Skip over already-allocated batches that cannot hold
            // this primitive (small dedicated batches from earlier cycles).
            self.active += 1;
            while self.active < self.batches.len() {
                let next = &self.batches[self.active];
                debug_assert!(next.is_empty(), "rotated into a written batch");
                if next.fits(vertices.len(), indices.len()) {
                    break;
                }
                self.active += 1;
            }

            if self.active == self.batches.len() {
                // Nominal capacity for ordinary rotation; an exactly-sized
                // dedicated batch for oversized primitives.
                let (vcap, icap) =
                    if vertices.len() > self.vertex_capacity || indices.len() > self.index_capacity {
                        log::debug!(
                            "dedicated batch for oversized primitive: {} vertices, {} indices",
                            vertices.len(),
                            indices.len(),
                        );
                        (vertices.len(), indices.len())
                    } else {
                        (self.vertex_capacity, self.index_capacity)
                    };
                self.batches.push(VertexIndexBatch::new(vcap, icap));
            }
        }
    }

    /// Resets every batch and rewinds rotation for the next cycle.
    pub fn reset_all(&mut self) {
        for batch in &mut self.batches {
            batch.reset();
        }
        self.active = 0;
    }
}
