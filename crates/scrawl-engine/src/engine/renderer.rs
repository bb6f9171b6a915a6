use crate::backend::BackendSink;
use crate::batch::BatchPool;
use crate::coords::{ColorRgba, Mat3x2, Rect, Vec2};
use crate::state::{
    BlendState, MAX_SAMPLER_SLOTS, RasterizerState, SamplerState, ShaderStage, StageShader,
    StateSnapshot, StateTracker,
};
use crate::stream::{CommandEntry, CommandStream};
use crate::tess::{
    self, Geometry, LineCap, MAX_BATCH_VERTICES, Ring, TriangleIndex, Vertex2D,
};

use super::{EngineConfig, RenderError};

/// Per-flush counters.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FlushStats {
    pub draw_calls: u32,
    pub state_binds: u32,
    pub vertices: u32,
    pub indices: u32,
}

/// Immediate-mode 2D renderer front end.
///
/// One instance per rendering thread; calls are expected between frame
/// boundaries with no internal locking. The lifecycle is
/// Idle -> Recording (first `add_*` call) -> Flushing (`flush`) -> Idle;
/// `discard()` abandons a recorded frame without touching the backend.
pub struct Renderer2D {
    config: EngineConfig,
    state: StateTracker,
    pool: BatchPool,
    stream: CommandStream,
    scratch: Geometry,
    fatal: Option<RenderError>,
}

impl Renderer2D {
    pub fn new(config: EngineConfig) -> Self {
        let config = config.sanitized();
        let pool = BatchPool::new(config.vertex_capacity, config.index_capacity);
        Self {
            config,
            state: StateTracker::new(),
            pool,
            stream: CommandStream::new(),
            scratch: Geometry::new(),
            fatal: None,
        }
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn add_line(
        &mut self,
        cap: LineCap,
        begin: Vec2,
        end: Vec2,
        thickness: f32,
        colors: [ColorRgba; 2],
    ) {
        self.scratch.clear();
        if tess::build_line(&mut self.scratch, cap, begin, end, thickness, colors) {
            self.commit_scratch();
        }
    }

    pub fn add_triangle(&mut self, points: [Vec2; 3], color: ColorRgba) {
        self.add_triangle_colored(points, [color; 3]);
    }

    pub fn add_triangle_colored(&mut self, points: [Vec2; 3], colors: [ColorRgba; 3]) {
        self.scratch.clear();
        if tess::build_triangle(&mut self.scratch, points, colors) {
            self.commit_scratch();
        }
    }

    pub fn add_rect(&mut self, rect: Rect, color: ColorRgba) {
        self.add_rect_colored(rect, [color; 4]);
    }

    /// Corner colors in winding order: top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn add_rect_colored(&mut self, rect: Rect, colors: [ColorRgba; 4]) {
        self.scratch.clear();
        if tess::build_rect(&mut self.scratch, rect, colors) {
            self.commit_scratch();
        }
    }

    pub fn add_rect_frame(
        &mut self,
        rect: Rect,
        thickness: f32,
        inner_color: ColorRgba,
        outer_color: ColorRgba,
    ) {
        self.scratch.clear();
        if tess::build_rect_frame(&mut self.scratch, rect, thickness, inner_color, outer_color) {
            self.commit_scratch();
        }
    }

    pub fn add_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        inner_color: ColorRgba,
        outer_color: ColorRgba,
    ) {
        let segments = self.curve_segments(radius);
        self.scratch.clear();
        if tess::build_circle(&mut self.scratch, center, radius, inner_color, outer_color, segments)
        {
            self.commit_scratch();
        }
    }

    pub fn add_circle_frame(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        thickness: f32,
        inner_color: ColorRgba,
        outer_color: ColorRgba,
    ) {
        let segments = self.curve_segments(inner_radius.max(0.0) + thickness.max(0.0));
        self.scratch.clear();
        if tess::build_circle_frame(
            &mut self.scratch,
            center,
            inner_radius,
            thickness,
            inner_color,
            outer_color,
            segments,
        ) {
            self.commit_scratch();
        }
    }

    /// Angles are radians, clockwise from 12 o'clock; `angle` is the sweep,
    /// clamped to one full turn.
    pub fn add_circle_pie(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        angle: f32,
        inner_color: ColorRgba,
        outer_color: ColorRgba,
    ) {
        let segments = self.sweep_segments(radius, angle);
        self.scratch.clear();
        if tess::build_circle_pie(
            &mut self.scratch,
            center,
            radius,
            start_angle,
            angle,
            inner_color,
            outer_color,
            segments,
        ) {
            self.commit_scratch();
        }
    }

    pub fn add_circle_arc(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        start_angle: f32,
        angle: f32,
        thickness: f32,
        inner_color: ColorRgba,
        outer_color: ColorRgba,
    ) {
        let segments =
            self.sweep_segments(inner_radius.max(0.0) + thickness.max(0.0), angle);
        self.scratch.clear();
        if tess::build_circle_arc(
            &mut self.scratch,
            center,
            inner_radius,
            start_angle,
            angle,
            thickness,
            inner_color,
            outer_color,
            segments,
        ) {
            self.commit_scratch();
        }
    }

    pub fn add_ellipse(
        &mut self,
        center: Vec2,
        a: f32,
        b: f32,
        inner_color: ColorRgba,
        outer_color: ColorRgba,
    ) {
        let segments = self.curve_segments(a.max(b));
        self.scratch.clear();
        if tess::build_ellipse(&mut self.scratch, center, a, b, inner_color, outer_color, segments)
        {
            self.commit_scratch();
        }
    }

    pub fn add_ellipse_frame(
        &mut self,
        center: Vec2,
        a_inner: f32,
        b_inner: f32,
        thickness: f32,
        inner_color: ColorRgba,
        outer_color: ColorRgba,
    ) {
        let segments =
            self.curve_segments(a_inner.max(b_inner).max(0.0) + thickness.max(0.0));
        self.scratch.clear();
        if tess::build_ellipse_frame(
            &mut self.scratch,
            center,
            a_inner,
            b_inner,
            thickness,
            inner_color,
            outer_color,
            segments,
        ) {
            self.commit_scratch();
        }
    }

    /// Corner points in winding order.
    pub fn add_quad(&mut self, points: [Vec2; 4], color: ColorRgba) {
        self.add_quad_colored(points, [color; 4]);
    }

    pub fn add_quad_colored(&mut self, points: [Vec2; 4], colors: [ColorRgba; 4]) {
        self.scratch.clear();
        if tess::build_quad(&mut self.scratch, points, colors) {
            self.commit_scratch();
        }
    }

    pub fn add_round_rect(&mut self, rect: Rect, radius: f32, color: ColorRgba) {
        let scale = self.state.max_scaling();
        self.scratch.clear();
        if tess::build_round_rect(&mut self.scratch, rect, radius, color, scale) {
            self.commit_scratch();
        }
    }

    /// `offset` shifts all points; with `inner` the ribbon hangs off the
    /// right-hand side of the path instead of being centered on it.
    pub fn add_line_string(
        &mut self,
        points: &[Vec2],
        offset: Option<Vec2>,
        thickness: f32,
        inner: bool,
        color: ColorRgba,
        ring: Ring,
    ) {
        // Two vertices per point; a run this long cannot be indexed.
        if points.len() * 2 > MAX_BATCH_VERTICES {
            self.latch_too_large(points.len() * 2, 0);
            return;
        }
        self.scratch.clear();
        if tess::build_line_string(&mut self.scratch, points, offset, thickness, inner, color, ring)
        {
            self.commit_scratch();
        }
    }

    /// Per-point colored variant; `colors` must be as long as `points`.
    pub fn add_line_string_colored(
        &mut self,
        points: &[Vec2],
        colors: &[ColorRgba],
        offset: Option<Vec2>,
        thickness: f32,
        inner: bool,
        ring: Ring,
    ) {
        if points.len() * 2 > MAX_BATCH_VERTICES {
            self.latch_too_large(points.len() * 2, 0);
            return;
        }
        self.scratch.clear();
        if tess::build_line_string_colored(
            &mut self.scratch,
            points,
            colors,
            offset,
            thickness,
            inner,
            ring,
        ) {
            self.commit_scratch();
        }
    }

    /// Pre-triangulated polygon: point list plus triangle indices from an
    /// external triangulator.
    pub fn add_polygon(
        &mut self,
        points: &[Vec2],
        triangles: &[TriangleIndex],
        offset: Option<Vec2>,
        color: ColorRgba,
    ) {
        if points.len() > MAX_BATCH_VERTICES {
            self.latch_too_large(points.len(), triangles.len() * 3);
            return;
        }
        self.scratch.clear();
        if tess::build_polygon(&mut self.scratch, points, triangles, offset, color) {
            self.commit_scratch();
        }
    }

    /// Raw pre-built geometry (positions, UVs, colors already resolved).
    pub fn add_polygon_vertices(&mut self, vertices: &[Vertex2D], triangles: &[TriangleIndex]) {
        if vertices.len() > MAX_BATCH_VERTICES {
            self.latch_too_large(vertices.len(), triangles.len() * 3);
            return;
        }
        self.scratch.clear();
        if tess::build_polygon_raw(&mut self.scratch, vertices, triangles) {
            self.commit_scratch();
        }
    }

    /// Outlines `points` as a closed ring of the given thickness.
    pub fn add_polygon_frame(&mut self, points: &[Vec2], thickness: f32, color: ColorRgba) {
        if points.len() * 2 > MAX_BATCH_VERTICES {
            self.latch_too_large(points.len() * 2, 0);
            return;
        }
        self.scratch.clear();
        if tess::build_line_string(
            &mut self.scratch,
            points,
            None,
            thickness,
            false,
            color,
            Ring::Closed,
        ) {
            self.commit_scratch();
        }
    }

    /// Reserves `count` degenerate (invisible) vertices in the current
    /// batch without recording a draw, used to pad index alignment.
    pub fn add_null_vertices(&mut self, count: u32) {
        if count == 0 {
            return;
        }
        if count as usize > MAX_BATCH_VERTICES {
            self.latch_too_large(count as usize, 0);
            return;
        }
        self.scratch.clear();
        self.scratch
            .vertices
            .resize(count as usize, Vertex2D::new(Vec2::zero(), ColorRgba::transparent()));
        if self.pool.append(&self.scratch.vertices, &[]).is_none() {
            self.latch_too_large(count as usize, 0);
        }
    }

    // ── render state ──────────────────────────────────────────────────────

    pub fn blend_state(&self) -> BlendState {
        self.state.blend_state()
    }

    pub fn set_blend_state(&mut self, state: BlendState) {
        self.state.set_blend_state(state);
    }

    pub fn rasterizer_state(&self) -> RasterizerState {
        self.state.rasterizer_state()
    }

    pub fn set_rasterizer_state(&mut self, state: RasterizerState) {
        self.state.set_rasterizer_state(state);
    }

    pub fn sampler_state(&self, stage: ShaderStage, slot: usize) -> SamplerState {
        self.state.sampler_state(stage, slot)
    }

    pub fn set_sampler_state(&mut self, stage: ShaderStage, slot: usize, state: SamplerState) {
        self.state.set_sampler_state(stage, slot, state);
    }

    pub fn custom_vs(&self) -> StageShader {
        self.state.custom_vs()
    }

    pub fn set_custom_vs(&mut self, shader: StageShader) {
        self.state.set_custom_vs(shader);
    }

    pub fn custom_ps(&self) -> StageShader {
        self.state.custom_ps()
    }

    pub fn set_custom_ps(&mut self, shader: StageShader) {
        self.state.set_custom_ps(shader);
    }

    pub fn local_transform(&self) -> Mat3x2 {
        self.state.local_transform()
    }

    pub fn set_local_transform(&mut self, matrix: Mat3x2) {
        self.state.set_local_transform(matrix);
    }

    pub fn camera_transform(&self) -> Mat3x2 {
        self.state.camera_transform()
    }

    pub fn set_camera_transform(&mut self, matrix: Mat3x2) {
        self.state.set_camera_transform(matrix);
    }

    pub fn max_scaling(&self) -> f32 {
        self.state.max_scaling()
    }

    pub fn color_mul(&self) -> ColorRgba {
        self.state.color_mul()
    }

    pub fn set_color_mul(&mut self, color: ColorRgba) {
        self.state.set_color_mul(color);
    }

    pub fn color_add(&self) -> ColorRgba {
        self.state.color_add()
    }

    pub fn set_color_add(&mut self, color: ColorRgba) {
        self.state.set_color_add(color);
    }

    pub fn scissor_rect(&self) -> Option<Rect> {
        self.state.scissor_rect()
    }

    pub fn set_scissor_rect(&mut self, rect: Option<Rect>) {
        self.state.set_scissor_rect(rect);
    }

    // ── cycle boundary ────────────────────────────────────────────────────

    /// Replays the recorded stream once against `sink`, then resets for the
    /// next cycle.
    ///
    /// State is applied lazily: each draw diffs its snapshot against the
    /// previously applied one and re-binds only changed fields; the first
    /// draw of a flush binds everything. A latched recording error discards
    /// the frame without backend calls and surfaces here.
    pub fn flush(&mut self, sink: &mut dyn BackendSink) -> Result<FlushStats, RenderError> {
        if let Some(err) = self.fatal.take() {
            log::error!("discarding frame after fatal recording error: {err}");
            self.end_cycle();
            return Err(err);
        }

        let mut stats = FlushStats::default();
        if self.stream.is_empty() {
            self.end_cycle();
            return Ok(stats);
        }

        for (index, batch) in self.pool.used() {
            sink.upload_vertices(index, batch.vertices());
            sink.upload_indices(index, batch.indices());
            stats.vertices += batch.vertex_count() as u32;
            stats.indices += batch.index_count() as u32;
        }

        let mut applied: Option<StateSnapshot> = None;
        for entry in self.stream.entries() {
            match entry {
                // State entries mark transitions; binding happens lazily at
                // the next draw so state set with nothing drawn costs nothing.
                CommandEntry::State(_) => {}
                CommandEntry::Draw(draw) => {
                    let snapshot = self.stream.snapshot(draw.snapshot);
                    stats.state_binds += apply_state_diff(sink, applied.as_ref(), snapshot);
                    applied = Some(*snapshot);
                    sink.draw_indexed(draw.batch, draw.index_offset, draw.index_count);
                    stats.draw_calls += 1;
                }
            }
        }

        log::trace!(
            "flush: {} draws, {} state binds, {} vertices",
            stats.draw_calls,
            stats.state_binds,
            stats.vertices,
        );

        self.end_cycle();
        Ok(stats)
    }

    /// Abandons the current frame: recorded commands and batch contents are
    /// dropped without any backend call.
    pub fn discard(&mut self) {
        self.fatal = None;
        self.end_cycle();
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn curve_segments(&self, local_radius: f32) -> u16 {
        tess::circle_segments(local_radius * self.state.max_scaling())
            .min(self.config.max_circle_segments)
    }

    fn sweep_segments(&self, local_radius: f32, angle: f32) -> u16 {
        tess::arc_segments(local_radius * self.state.max_scaling(), angle)
            .min(self.config.max_circle_segments)
    }

    fn commit_scratch(&mut self) {
        let Self {
            pool,
            stream,
            state,
            scratch,
            fatal,
            ..
        } = self;

        match pool.append(&scratch.vertices, &scratch.indices) {
            Some(placed) => {
                stream.record_draw(
                    state.pending(),
                    placed.batch,
                    placed.offset.index_offset,
                    scratch.indices.len() as u32,
                );
            }
            None => {
                let err = RenderError::PrimitiveTooLarge {
                    vertices: scratch.vertices.len(),
                    indices: scratch.indices.len(),
                };
                log::error!("{err}");
                if fatal.is_none() {
                    *fatal = Some(err);
                }
            }
        }
    }

    fn latch_too_large(&mut self, vertices: usize, indices: usize) {
        let err = RenderError::PrimitiveTooLarge { vertices, indices };
        log::error!("{err}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
    }

    fn end_cycle(&mut self) {
        self.pool.reset_all();
        self.stream.clear();
        self.state.reset_overrides();
    }
}

impl Default for Renderer2D {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Binds the fields of `next` that differ from `prev` (everything when
/// `prev` is `None`, i.e. the first draw of a flush). Returns the number of
/// backend calls issued.
fn apply_state_diff(
    sink: &mut dyn BackendSink,
    prev: Option<&StateSnapshot>,
    next: &StateSnapshot,
) -> u32 {
    let mut binds = 0;

    if prev.is_none_or(|p| p.blend != next.blend) {
        sink.bind_blend_state(next.blend);
        binds += 1;
    }
    if prev.is_none_or(|p| p.rasterizer != next.rasterizer) {
        sink.bind_rasterizer_state(next.rasterizer);
        binds += 1;
    }
    for stage in [ShaderStage::Vertex, ShaderStage::Pixel] {
        for slot in 0..MAX_SAMPLER_SLOTS {
            let sampler = next.samplers[stage.index()][slot];
            if prev.is_none_or(|p| p.samplers[stage.index()][slot] != sampler) {
                sink.bind_sampler_state(stage, slot, sampler);
                binds += 1;
            }
        }
    }
    if prev.is_none_or(|p| p.custom_vs != next.custom_vs) {
        sink.bind_shader(ShaderStage::Vertex, next.custom_vs);
        binds += 1;
    }
    if prev.is_none_or(|p| p.custom_ps != next.custom_ps) {
        sink.bind_shader(ShaderStage::Pixel, next.custom_ps);
        binds += 1;
    }
    if prev.is_none_or(|p| p.local != next.local || p.camera != next.camera) {
        sink.update_transform_constants(next.local, next.camera);
        binds += 1;
    }
    if prev.is_none_or(|p| p.color_mul != next.color_mul || p.color_add != next.color_add) {
        sink.update_color_constants(next.color_mul, next.color_add);
        binds += 1;
    }
    if prev.is_none_or(|p| p.scissor != next.scissor) {
        sink.set_scissor(next.scissor);
        binds += 1;
    }

    binds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::recording::{RecordingSink, SinkCall};

    const WHITE: ColorRgba = ColorRgba::white();
    const BLACK: ColorRgba = ColorRgba::black();

    fn renderer() -> Renderer2D {
        Renderer2D::new(EngineConfig::default())
    }

    fn small_renderer(vertex_capacity: usize, index_capacity: usize) -> Renderer2D {
        Renderer2D::new(EngineConfig {
            vertex_capacity,
            index_capacity,
            ..EngineConfig::default()
        })
    }

    // ── order preservation (painter's algorithm) ──────────────────────────

    #[test]
    fn draws_replay_in_call_order() {
        let mut r = renderer();
        r.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), WHITE);
        r.add_circle(Vec2::new(50.0, 50.0), 5.0, WHITE, BLACK);
        r.add_rect(Rect::new(20.0, 0.0, 10.0, 10.0), WHITE);

        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();

        assert_eq!(stats.draw_calls, 3);
        let draws = sink.draws();
        assert_eq!(draws.len(), 3);
        // Same batch, strictly increasing offsets: rect, circle, rect.
        assert_eq!(draws[0].1, 0);
        assert_eq!(draws[0].2, 6);
        assert_eq!(draws[1].1, 6);
        assert_eq!(draws[2].1, draws[1].1 + draws[1].2);
        assert_eq!(draws[2].2, 6);
    }

    // ── geometric exactness ───────────────────────────────────────────────

    #[test]
    fn rect_records_four_vertices_six_indices() {
        let mut r = renderer();
        r.add_rect(Rect::new(0.0, 0.0, 100.0, 50.0), WHITE);

        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();
        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.indices, 6);
    }

    // ── degenerate no-op ──────────────────────────────────────────────────

    #[test]
    fn zero_radius_circle_records_nothing() {
        let mut r = renderer();
        r.add_circle(Vec2::zero(), 0.0, WHITE, BLACK);

        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();
        assert_eq!(stats, FlushStats::default());
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn degenerate_inputs_across_shapes_are_noops() {
        let mut r = renderer();
        r.add_line(LineCap::Flat, Vec2::zero(), Vec2::zero(), 2.0, [WHITE; 2]);
        r.add_rect(Rect::new(0.0, 0.0, -5.0, 5.0), WHITE);
        r.add_rect_frame(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, WHITE, BLACK);
        r.add_ellipse(Vec2::zero(), 10.0, 0.0, WHITE, BLACK);
        r.add_circle_pie(Vec2::zero(), 10.0, 0.0, 0.0, WHITE, BLACK);
        r.add_polygon(&[Vec2::zero(), Vec2::new(1.0, 0.0)], &[[0, 1, 1]], None, WHITE);
        r.add_line_string(&[Vec2::zero()], None, 2.0, false, WHITE, Ring::Open);

        let mut sink = RecordingSink::new();
        assert_eq!(r.flush(&mut sink).unwrap(), FlushStats::default());
        assert!(sink.calls.is_empty());
    }

    // ── batch rotation integrity ──────────────────────────────────────────

    #[test]
    fn rotation_produces_ceil_of_index_usage_over_capacity() {
        // 12 indices per batch, 5 quads of 6 -> ceil(30 / 12) = 3 batches.
        let mut r = small_renderer(64, 12);
        for k in 0..5 {
            r.add_rect(Rect::new(k as f32 * 10.0, 0.0, 8.0, 8.0), WHITE);
        }

        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();
        assert_eq!(stats.draw_calls, 5);

        let uploads = sink.count(|c| matches!(c, SinkCall::UploadVertices { .. }));
        assert_eq!(uploads, 3);
    }

    #[test]
    fn no_draw_crosses_a_batch_boundary() {
        let mut r = small_renderer(64, 12);
        for k in 0..7 {
            r.add_rect(Rect::new(k as f32 * 10.0, 0.0, 8.0, 8.0), WHITE);
        }

        // Capture per-batch index counts from the upload calls.
        let mut sink = RecordingSink::new();
        r.flush(&mut sink).unwrap();

        let mut batch_len = std::collections::HashMap::new();
        for call in &sink.calls {
            if let SinkCall::UploadIndices { batch, count } = call {
                batch_len.insert(*batch, *count as u32);
            }
        }
        for (batch, offset, count) in sink.draws() {
            assert!(offset + count <= batch_len[&batch]);
        }
    }

    #[test]
    fn batch_references_are_monotonic() {
        let mut r = small_renderer(8, 12);
        for k in 0..12 {
            r.add_rect(Rect::new(k as f32, 0.0, 1.0, 1.0), WHITE);
        }
        let mut sink = RecordingSink::new();
        r.flush(&mut sink).unwrap();

        let batches: Vec<usize> = sink.draws().iter().map(|d| d.0).collect();
        assert!(batches.windows(2).all(|w| w[0] <= w[1]));
    }

    // ── state-diff minimality ─────────────────────────────────────────────

    #[test]
    fn redundant_blend_set_binds_once_per_distinct_value() {
        let mut r = renderer();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        r.set_blend_state(BlendState::ALPHA);
        r.add_rect(rect, WHITE);
        r.set_blend_state(BlendState::ALPHA); // same value, no transition
        r.add_rect(rect, WHITE);
        r.set_blend_state(BlendState::ADDITIVE);
        r.add_rect(rect, WHITE);

        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();

        assert_eq!(stats.draw_calls, 3);
        assert_eq!(
            sink.blend_binds(),
            vec![BlendState::ALPHA, BlendState::ADDITIVE]
        );
    }

    #[test]
    fn unchanged_transform_is_not_reuploaded() {
        let mut r = renderer();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        r.set_local_transform(Mat3x2::translation(5.0, 5.0));
        r.add_rect(rect, WHITE);
        r.add_rect(rect, WHITE);
        r.set_local_transform(Mat3x2::translation(9.0, 9.0));
        r.add_rect(rect, WHITE);

        let mut sink = RecordingSink::new();
        r.flush(&mut sink).unwrap();

        let transforms = sink.count(|c| matches!(c, SinkCall::UpdateTransform { .. }));
        assert_eq!(transforms, 2);
    }

    #[test]
    fn sampler_diff_rebinds_only_the_changed_slot() {
        let mut r = renderer();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        r.add_rect(rect, WHITE);
        r.set_sampler_state(ShaderStage::Pixel, 2, SamplerState::REPEAT_LINEAR);
        r.add_rect(rect, WHITE);

        let mut sink = RecordingSink::new();
        r.flush(&mut sink).unwrap();

        // First draw binds all 16 slots; the second rebinds exactly one.
        let sampler_binds = sink.count(|c| matches!(c, SinkCall::BindSampler { .. }));
        assert_eq!(sampler_binds, MAX_SAMPLER_SLOTS * 2 + 1);
    }

    // ── empty flush ───────────────────────────────────────────────────────

    #[test]
    fn empty_flush_is_silent() {
        let mut r = renderer();
        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();

        assert_eq!(stats, FlushStats::default());
        assert!(sink.calls.is_empty());
        assert_eq!(r.pool.used().count(), 0);
    }

    #[test]
    fn state_only_frame_issues_no_backend_calls() {
        let mut r = renderer();
        r.set_blend_state(BlendState::ADDITIVE);
        r.set_scissor_rect(Some(Rect::new(0.0, 0.0, 10.0, 10.0)));

        let mut sink = RecordingSink::new();
        r.flush(&mut sink).unwrap();
        assert!(sink.calls.is_empty());
    }

    // ── adaptive tessellation ─────────────────────────────────────────────

    #[test]
    fn circle_quality_grows_with_camera_scale_and_caps() {
        let mut vertex_counts = Vec::new();
        for scale in [0.5_f32, 1.0, 4.0, 16.0, 1000.0] {
            let mut r = renderer();
            r.set_camera_transform(Mat3x2::scaling(scale, scale));
            r.add_circle(Vec2::zero(), 10.0, WHITE, BLACK);

            let mut sink = RecordingSink::new();
            let stats = r.flush(&mut sink).unwrap();
            vertex_counts.push(stats.vertices);
        }

        assert!(vertex_counts.windows(2).all(|w| w[0] <= w[1]));
        // Hub + capped rim.
        assert_eq!(
            *vertex_counts.last().unwrap(),
            tess::MAX_CIRCLE_SEGMENTS as u32 + 1
        );
    }

    #[test]
    fn local_transform_feeds_max_scaling() {
        let mut r = renderer();
        r.set_local_transform(Mat3x2::scaling(2.0, 2.0));
        r.set_camera_transform(Mat3x2::scaling(3.0, 3.0));
        assert!((r.max_scaling() - 6.0).abs() < 1e-5);
    }

    // ── null vertices ─────────────────────────────────────────────────────

    #[test]
    fn null_vertices_reserve_without_drawing() {
        let mut r = renderer();
        r.add_null_vertices(7);
        r.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), WHITE);

        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();

        assert_eq!(stats.draw_calls, 1);
        assert_eq!(stats.vertices, 7 + 4);
        // The rect's indices point past the padding.
        let (_, offset, count) = sink.draws()[0];
        assert_eq!((offset, count), (0, 6));
    }

    // ── fatal oversized primitive ─────────────────────────────────────────

    #[test]
    fn oversized_polygon_fails_the_flush_and_recovers() {
        let mut r = renderer();
        r.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), WHITE);

        let points = vec![Vec2::zero(); MAX_BATCH_VERTICES + 1];
        r.add_polygon(&points, &[[0, 1, 2]], None, WHITE);

        let mut sink = RecordingSink::new();
        let err = r.flush(&mut sink).unwrap_err();
        assert!(matches!(err, RenderError::PrimitiveTooLarge { .. }));
        // Failed frames issue nothing and skip to the next cycle.
        assert!(sink.calls.is_empty());

        r.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), WHITE);
        let stats = r.flush(&mut sink).unwrap();
        assert_eq!(stats.draw_calls, 1);
    }

    // ── discard ───────────────────────────────────────────────────────────

    #[test]
    fn discard_abandons_the_frame_without_backend_calls() {
        let mut r = renderer();
        r.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), WHITE);
        r.discard();

        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();
        assert_eq!(stats, FlushStats::default());
        assert!(sink.calls.is_empty());
    }

    // ── cycle reset of overrides ──────────────────────────────────────────

    #[test]
    fn flush_reverts_overrides_but_keeps_persistent_state() {
        let mut r = renderer();
        r.set_blend_state(BlendState::ADDITIVE);
        r.set_color_mul(ColorRgba::new(0.5, 0.5, 0.5, 1.0));
        r.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), WHITE);

        let mut sink = RecordingSink::new();
        r.flush(&mut sink).unwrap();

        assert_eq!(r.color_mul(), ColorRgba::white());
        assert_eq!(r.blend_state(), BlendState::ADDITIVE);
    }

    // ── oversized single shape still lands in one batch ───────────────────

    #[test]
    fn oversized_primitive_is_not_split() {
        // Pool batches hold 8 vertices; a 100-vertex polygon must go to a
        // single dedicated batch.
        let mut r = small_renderer(8, 12);
        let n = 100u16;
        let points: Vec<Vec2> = (0..n)
            .map(|i| {
                let a = i as f32 / n as f32 * core::f32::consts::TAU;
                Vec2::new(a.cos() * 50.0, a.sin() * 50.0)
            })
            .collect();
        let triangles: Vec<TriangleIndex> =
            (1..n - 1).map(|i| [0, i, i + 1]).collect();

        r.add_polygon(&points, &triangles, None, WHITE);

        let mut sink = RecordingSink::new();
        let stats = r.flush(&mut sink).unwrap();
        assert_eq!(stats.draw_calls, 1);

        let draws = sink.draws();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].2, (n as u32 - 2) * 3);
    }
}
