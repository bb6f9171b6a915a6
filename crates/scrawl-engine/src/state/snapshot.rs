use crate::coords::{ColorRgba, Mat3x2, Rect};

use super::{
    BlendState, MAX_SAMPLER_SLOTS, RasterizerState, SamplerState, ShaderStage, StageShader,
};

/// Value snapshot of every piece of render state a draw depends on.
///
/// Snapshots are compared field-by-field: the command stream stores one
/// snapshot per distinct state run, and the flusher re-binds only the fields
/// that differ from the previously applied snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StateSnapshot {
    pub blend: BlendState,
    pub rasterizer: RasterizerState,
    /// Indexed by `[ShaderStage::index()][slot]`.
    pub samplers: [[SamplerState; MAX_SAMPLER_SLOTS]; ShaderStage::COUNT],
    pub custom_vs: StageShader,
    pub custom_ps: StageShader,
    pub local: Mat3x2,
    pub camera: Mat3x2,
    pub color_mul: ColorRgba,
    pub color_add: ColorRgba,
    /// Scissor rect in logical pixels; `None` = full viewport.
    pub scissor: Option<Rect>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            blend: BlendState::default(),
            rasterizer: RasterizerState::default(),
            samplers: [[SamplerState::default(); MAX_SAMPLER_SLOTS]; ShaderStage::COUNT],
            custom_vs: StageShader::Standard,
            custom_ps: StageShader::Standard,
            local: Mat3x2::IDENTITY,
            camera: Mat3x2::IDENTITY,
            color_mul: ColorRgba::white(),
            color_add: ColorRgba::transparent(),
            scissor: None,
        }
    }
}
