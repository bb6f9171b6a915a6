use crate::coords::{ColorRgba, Mat3x2, Rect};
use crate::state::{BlendState, RasterizerState, SamplerState, ShaderStage, StageShader};
use crate::tess::{IndexType, Vertex2D};

/// Graphics-API boundary invoked during flushing, and only then.
///
/// Call pattern per flush:
/// 1. `upload_vertices`/`upload_indices` once per non-empty batch;
/// 2. for each draw, the `bind_*`/`update_*`/`set_scissor` calls for state
///    fields that changed since the previous draw, then one `draw_indexed`.
///
/// Implementations never see redundant binds for unchanged fields and must
/// not assume any bind before the first draw of a flush beyond what the
/// flusher reports.
pub trait BackendSink {
    fn upload_vertices(&mut self, batch: usize, vertices: &[Vertex2D]);

    fn upload_indices(&mut self, batch: usize, indices: &[IndexType]);

    fn bind_blend_state(&mut self, state: BlendState);

    fn bind_rasterizer_state(&mut self, state: RasterizerState);

    fn bind_sampler_state(&mut self, stage: ShaderStage, slot: usize, state: SamplerState);

    /// Binds either the standard shader or a registered override for one
    /// stage. Implementations resolve override handles through their own
    /// registry; a stale handle falls back to the standard shader.
    fn bind_shader(&mut self, stage: ShaderStage, shader: StageShader);

    fn update_transform_constants(&mut self, local: Mat3x2, camera: Mat3x2);

    fn update_color_constants(&mut self, mul: ColorRgba, add: ColorRgba);

    /// `None` restores the full-viewport scissor.
    fn set_scissor(&mut self, rect: Option<Rect>);

    fn draw_indexed(&mut self, batch: usize, index_offset: u32, index_count: u32);
}
