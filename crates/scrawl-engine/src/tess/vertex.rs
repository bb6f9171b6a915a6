use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Vec2};

/// Index element type. 16-bit, which caps a single batch at
/// [`MAX_BATCH_VERTICES`] vertices.
pub type IndexType = u16;

/// One triangle as three indices into the owning batch's vertex array.
pub type TriangleIndex = [IndexType; 3];

/// Hard upper bound on vertices addressable from one batch.
pub const MAX_BATCH_VERTICES: usize = (IndexType::MAX as usize) + 1;

/// GPU vertex layout (32 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  uv     [f32; 2]   loc 1
///  offset 16  color  [f32; 4]   loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Untextured vertex; UV (0,0) samples the white texel of the standard
    /// shader's default texture.
    #[inline]
    pub fn new(pos: Vec2, color: ColorRgba) -> Self {
        Self {
            pos: [pos.x, pos.y],
            uv: [0.0, 0.0],
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn textured(pos: Vec2, uv: Vec2, color: ColorRgba) -> Self {
        Self {
            pos: [pos.x, pos.y],
            uv: [uv.x, uv.y],
            color: color.to_array(),
        }
    }
}
