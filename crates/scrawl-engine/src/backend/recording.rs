//! Recording sink used by tests: captures every backend call in order.

use crate::coords::{ColorRgba, Mat3x2, Rect};
use crate::state::{BlendState, RasterizerState, SamplerState, ShaderStage, StageShader};
use crate::tess::{IndexType, Vertex2D};

use super::BackendSink;

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    UploadVertices { batch: usize, count: usize },
    UploadIndices { batch: usize, count: usize },
    BindBlend(BlendState),
    BindRasterizer(RasterizerState),
    BindSampler { stage: ShaderStage, slot: usize, state: SamplerState },
    BindShader { stage: ShaderStage, shader: StageShader },
    UpdateTransform { local: Mat3x2, camera: Mat3x2 },
    UpdateColors { mul: ColorRgba, add: ColorRgba },
    SetScissor(Option<Rect>),
    DrawIndexed { batch: usize, index_offset: u32, index_count: u32 },
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> Vec<(usize, u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::DrawIndexed { batch, index_offset, index_count } => {
                    Some((*batch, *index_offset, *index_count))
                }
                _ => None,
            })
            .collect()
    }

    pub fn blend_binds(&self) -> Vec<BlendState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::BindBlend(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&SinkCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl BackendSink for RecordingSink {
    fn upload_vertices(&mut self, batch: usize, vertices: &[Vertex2D]) {
        self.calls.push(SinkCall::UploadVertices { batch, count: vertices.len() });
    }

    fn upload_indices(&mut self, batch: usize, indices: &[IndexType]) {
        self.calls.push(SinkCall::UploadIndices { batch, count: indices.len() });
    }

    fn bind_blend_state(&mut self, state: BlendState) {
        self.calls.push(SinkCall::BindBlend(state));
    }

    fn bind_rasterizer_state(&mut self, state: RasterizerState) {
        self.calls.push(SinkCall::BindRasterizer(state));
    }

    fn bind_sampler_state(&mut self, stage: ShaderStage, slot: usize, state: SamplerState) {
        self.calls.push(SinkCall::BindSampler { stage, slot, state });
    }

    fn bind_shader(&mut self, stage: ShaderStage, shader: StageShader) {
        self.calls.push(SinkCall::BindShader { stage, shader });
    }

    fn update_transform_constants(&mut self, local: Mat3x2, camera: Mat3x2) {
        self.calls.push(SinkCall::UpdateTransform { local, camera });
    }

    fn update_color_constants(&mut self, mul: ColorRgba, add: ColorRgba) {
        self.calls.push(SinkCall::UpdateColors { mul, add });
    }

    fn set_scissor(&mut self, rect: Option<Rect>) {
        self.calls.push(SinkCall::SetScissor(rect));
    }

    fn draw_indexed(&mut self, batch: usize, index_offset: u32, index_count: u32) {
        self.calls.push(SinkCall::DrawIndexed { batch, index_offset, index_count });
    }
}
