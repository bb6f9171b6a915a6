use crate::tess::{MAX_BATCH_VERTICES, MAX_CIRCLE_SEGMENTS};

/// Batching engine tuning.
///
/// Keep this structure stable and minimal. Capacities size the reusable
/// batch pool for an expected worst-case frame; overflowing them is not an
/// error, it just rotates to another pooled batch.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Vertices per pooled batch. Clamped to the 16-bit index range.
    pub vertex_capacity: usize,

    /// Indices per pooled batch.
    pub index_capacity: usize,

    /// Upper bound on segments for any tessellated curve, applied after the
    /// screen-space quality function. Lowering this trades smoothness at
    /// high zoom for vertex count.
    pub max_circle_segments: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 16384,
            index_capacity: 32768,
            max_circle_segments: MAX_CIRCLE_SEGMENTS,
        }
    }
}

impl EngineConfig {
    /// Clamps fields into workable ranges (a pool batch must hold at least
    /// one small primitive, and the segment cap at least a triangle fan).
    pub fn sanitized(mut self) -> Self {
        self.vertex_capacity = self.vertex_capacity.clamp(4, MAX_BATCH_VERTICES);
        self.index_capacity = self.index_capacity.max(6);
        self.max_circle_segments = self.max_circle_segments.clamp(3, MAX_CIRCLE_SEGMENTS);
        self
    }
}
