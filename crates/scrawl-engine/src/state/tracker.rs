use crate::coords::{ColorRgba, Mat3x2, Rect};

use super::{
    BlendState, MAX_SAMPLER_SLOTS, RasterizerState, SamplerState, ShaderStage, StageShader,
    StateSnapshot,
};

/// Mutable "currently pending" render state, independent of GPU binding.
///
/// Every setter takes effect for draws recorded after it; nothing is pushed
/// to the backend here. `reset_overrides()` runs at the start of each
/// recording cycle: shader overrides and the color constants revert to
/// defaults, while blend/rasterizer/sampler state and transforms persist
/// across frames.
#[derive(Debug, Default)]
pub struct StateTracker {
    pending: StateSnapshot,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full pending state, as the next draw entry would record it.
    #[inline]
    pub fn pending(&self) -> &StateSnapshot {
        &self.pending
    }

    // ── blend / rasterizer / sampler ──────────────────────────────────────

    #[inline]
    pub fn blend_state(&self) -> BlendState {
        self.pending.blend
    }

    #[inline]
    pub fn set_blend_state(&mut self, state: BlendState) {
        self.pending.blend = state;
    }

    #[inline]
    pub fn rasterizer_state(&self) -> RasterizerState {
        self.pending.rasterizer
    }

    #[inline]
    pub fn set_rasterizer_state(&mut self, state: RasterizerState) {
        self.pending.rasterizer = state;
    }

    /// Returns the pending sampler for `stage`/`slot`; out-of-range slots
    /// read as the default sampler.
    pub fn sampler_state(&self, stage: ShaderStage, slot: usize) -> SamplerState {
        if slot < MAX_SAMPLER_SLOTS {
            self.pending.samplers[stage.index()][slot]
        } else {
            SamplerState::default()
        }
    }

    /// Sets the pending sampler for `stage`/`slot`. Out-of-range slots are
    /// ignored.
    pub fn set_sampler_state(&mut self, stage: ShaderStage, slot: usize, state: SamplerState) {
        if slot < MAX_SAMPLER_SLOTS {
            self.pending.samplers[stage.index()][slot] = state;
        } else {
            log::debug!("sampler slot {slot} out of range; ignored");
        }
    }

    // ── shader overrides ──────────────────────────────────────────────────

    #[inline]
    pub fn custom_vs(&self) -> StageShader {
        self.pending.custom_vs
    }

    #[inline]
    pub fn set_custom_vs(&mut self, shader: StageShader) {
        self.pending.custom_vs = shader;
    }

    #[inline]
    pub fn custom_ps(&self) -> StageShader {
        self.pending.custom_ps
    }

    #[inline]
    pub fn set_custom_ps(&mut self, shader: StageShader) {
        self.pending.custom_ps = shader;
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[inline]
    pub fn local_transform(&self) -> Mat3x2 {
        self.pending.local
    }

    #[inline]
    pub fn set_local_transform(&mut self, matrix: Mat3x2) {
        self.pending.local = matrix;
    }

    #[inline]
    pub fn camera_transform(&self) -> Mat3x2 {
        self.pending.camera
    }

    #[inline]
    pub fn set_camera_transform(&mut self, matrix: Mat3x2) {
        self.pending.camera = matrix;
    }

    /// Largest scale factor of the composed local x camera transform.
    ///
    /// Adaptive tessellation uses this to derive screen-space radii, so a
    /// zoomed-in camera never reveals faceting on a locally small circle.
    #[inline]
    pub fn max_scaling(&self) -> f32 {
        (self.pending.local * self.pending.camera).max_scale_factor()
    }

    // ── color constants ───────────────────────────────────────────────────

    #[inline]
    pub fn color_mul(&self) -> ColorRgba {
        self.pending.color_mul
    }

    #[inline]
    pub fn set_color_mul(&mut self, color: ColorRgba) {
        self.pending.color_mul = color;
    }

    #[inline]
    pub fn color_add(&self) -> ColorRgba {
        self.pending.color_add
    }

    #[inline]
    pub fn set_color_add(&mut self, color: ColorRgba) {
        self.pending.color_add = color;
    }

    // ── scissor ───────────────────────────────────────────────────────────

    #[inline]
    pub fn scissor_rect(&self) -> Option<Rect> {
        self.pending.scissor
    }

    #[inline]
    pub fn set_scissor_rect(&mut self, rect: Option<Rect>) {
        self.pending.scissor = rect;
    }

    // ── cycle boundary ────────────────────────────────────────────────────

    /// Reverts per-cycle state at the start of a new recording cycle:
    /// shader overrides and color constants go back to defaults.
    pub fn reset_overrides(&mut self) {
        self.pending.custom_vs = StageShader::Standard;
        self.pending.custom_ps = StageShader::Standard;
        self.pending.color_mul = ColorRgba::white();
        self.pending.color_add = ColorRgba::transparent();
    }
}
