use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use crate::backend::BackendSink;
use crate::coords::{ColorRgba, Mat3x2, Rect, Viewport};
use crate::resource::HandleArena;
use crate::state::{
    BlendState, FillMode, RasterizerState, SamplerState, ShaderHandle, ShaderStage, StageShader,
};
use crate::tess::{IndexType, Vertex2D};

use super::convert;

/// Dynamic-offset stride for frame uniform slots. 256 satisfies
/// `min_uniform_buffer_offset_alignment` on every wgpu backend.
const UNIFORM_STRIDE: u64 = 256;
const UNIFORM_SLOTS_PER_CHUNK: u64 = 256;

const MIN_BUFFER_BYTES: u64 = 1024;

/// Frame uniform block (80 bytes, padded to [`UNIFORM_STRIDE`] per slot):
///
///  offset  0  viewport    [f32; 2]
///  offset  8  _pad        [f32; 2]
///  offset 16  transform0  [f32; 4]   (a, c, tx, 0)
///  offset 32  transform1  [f32; 4]   (b, d, ty, 0)
///  offset 48  color_mul   [f32; 4]
///  offset 64  color_add   [f32; 4]
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FrameUniforms {
    viewport: [f32; 2],
    _pad: [f32; 2],
    transform0: [f32; 4],
    transform1: [f32; 4],
    color_mul: [f32; 4],
    color_add: [f32; 4],
}

/// Everything a pipeline variant depends on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct PipelineKey {
    blend: BlendState,
    rasterizer: RasterizerState,
    vs: Option<ShaderHandle>,
    ps: Option<ShaderHandle>,
}

struct BatchBuffers {
    vertices: wgpu::Buffer,
    vertex_bytes: u64,
    indices: wgpu::Buffer,
    index_bytes: u64,
}

struct UniformChunk {
    buffer: wgpu::Buffer,
    group: wgpu::BindGroup,
}

/// wgpu implementation of the backend sink.
///
/// Owns per-batch GPU buffer pairs (grown on demand, reused across frames),
/// a pipeline cache keyed by blend/rasterizer state and shader overrides, a
/// generation-checked registry of custom shader modules, and a dynamic-offset
/// uniform ring so every transform/color change gets its own constant slot
/// within the frame.
///
/// Per frame: `begin_frame` opens the render pass, the engine's `flush`
/// drives the trait methods, `end_frame` closes the pass before the encoder
/// is finished.
pub struct WgpuSink {
    device: wgpu::Device,
    queue: wgpu::Queue,
    target_format: wgpu::TextureFormat,

    standard_shader: wgpu::ShaderModule,
    custom_shaders: HandleArena<wgpu::ShaderModule>,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,

    uniform_layout: wgpu::BindGroupLayout,
    texture_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,

    white_view: wgpu::TextureView,
    texture_groups: HashMap<SamplerState, wgpu::BindGroup>,

    uniform_chunks: Vec<UniformChunk>,
    uniform_chunk: usize,
    uniform_slot: u64,

    batch_buffers: Vec<Option<BatchBuffers>>,
    index_scratch: Vec<IndexType>,

    pass: Option<wgpu::RenderPass<'static>>,
    viewport: Viewport,
    scale_factor: f32,

    // Pending state accumulated from bind calls, applied at the next draw.
    current_key: PipelineKey,
    current_sampler: SamplerState,
    local: Mat3x2,
    camera: Mat3x2,
    color_mul: ColorRgba,
    color_add: ColorRgba,
    scissor: Option<Rect>,
    uniforms_dirty: bool,

    // What the open pass has actually seen.
    bound_key: Option<PipelineKey>,
    bound_sampler: Option<SamplerState>,
    bound_batch: Option<usize>,
    applied_scissor: Option<(u32, u32, u32, u32)>,
    warned_stale_shader: bool,
}

impl WgpuSink {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        let standard_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scrawl shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shape.wgsl").into()),
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scrawl frame uniforms bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: Some(uniform_binding_size()),
                },
                count: None,
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scrawl texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scrawl pipeline layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            immediate_size: 0,
        });

        let white_view = create_white_texture(device, queue);

        Self {
            device: device.clone(),
            queue: queue.clone(),
            target_format,
            standard_shader,
            custom_shaders: HandleArena::new(),
            pipelines: HashMap::new(),
            uniform_layout,
            texture_layout,
            pipeline_layout,
            white_view,
            texture_groups: HashMap::new(),
            uniform_chunks: Vec::new(),
            uniform_chunk: 0,
            uniform_slot: 0,
            batch_buffers: Vec::new(),
            index_scratch: Vec::new(),
            pass: None,
            viewport: Viewport::new(1.0, 1.0),
            scale_factor: 1.0,
            current_key: PipelineKey {
                blend: BlendState::default(),
                rasterizer: RasterizerState::default(),
                vs: None,
                ps: None,
            },
            current_sampler: SamplerState::default(),
            local: Mat3x2::IDENTITY,
            camera: Mat3x2::IDENTITY,
            color_mul: ColorRgba::white(),
            color_add: ColorRgba::transparent(),
            scissor: None,
            uniforms_dirty: true,
            bound_key: None,
            bound_sampler: None,
            bound_batch: None,
            applied_scissor: None,
            warned_stale_shader: false,
        }
    }

    /// Registers a custom WGSL module usable as a stage override. The module
    /// must export `vs_main`/`fs_main` for the stage(s) it overrides.
    pub fn register_shader(&mut self, label: &str, wgsl: &str) -> ShaderHandle {
        let module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(wgsl.into()),
        });
        ShaderHandle(self.custom_shaders.insert(module))
    }

    /// Drops a registered shader. Handles to it become stale and resolve to
    /// the standard shader from the next flush on.
    pub fn unregister_shader(&mut self, handle: ShaderHandle) {
        if self.custom_shaders.remove(handle.0).is_none() {
            log::debug!("unregister of unknown shader handle {handle:?}");
            return;
        }
        self.pipelines
            .retain(|key, _| key.vs != Some(handle) && key.ps != Some(handle));
    }

    /// Opens the shape render pass on `encoder`, targeting `view`. The pass
    /// loads existing contents; clearing is the caller's business.
    pub fn begin_frame(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        viewport: Viewport,
        scale_factor: f32,
    ) {
        let pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scrawl shape pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            })
            .forget_lifetime();

        self.pass = Some(pass);
        self.viewport = viewport;
        self.scale_factor = scale_factor;

        self.uniform_chunk = 0;
        self.uniform_slot = 0;
        self.uniforms_dirty = true;
        self.bound_key = None;
        self.bound_sampler = None;
        self.bound_batch = None;
        self.applied_scissor = None;
        self.warned_stale_shader = false;
    }

    /// Closes the pass. Must run before the encoder is finished.
    pub fn end_frame(&mut self) {
        self.pass = None;
    }

    // ── pipeline cache ────────────────────────────────────────────────────

    /// Resolves `selection` against the registry; stale handles downgrade to
    /// the standard shader with one warning per frame.
    fn resolve_override(&mut self, selection: Option<ShaderHandle>) -> Option<ShaderHandle> {
        let handle = selection?;
        if self.custom_shaders.get(handle.0).is_some() {
            Some(handle)
        } else {
            if !self.warned_stale_shader {
                log::warn!("stale custom shader handle {handle:?}; using the standard shader");
                self.warned_stale_shader = true;
            }
            None
        }
    }

    fn ensure_pipeline(&mut self, key: PipelineKey) {
        if self.pipelines.contains_key(&key) {
            return;
        }

        let vs = self.resolve_override(key.vs);
        let ps = self.resolve_override(key.ps);

        let polygon_mode = convert::polygon_mode(key.rasterizer.fill_mode, self.device.features());
        if polygon_mode == wgpu::PolygonMode::Fill
            && key.rasterizer.fill_mode == FillMode::Wireframe
        {
            log::warn!("wireframe fill requested without POLYGON_MODE_LINE; drawing solid");
        }

        let vs_module = vs
            .and_then(|h| self.custom_shaders.get(h.0))
            .unwrap_or(&self.standard_shader);
        let ps_module = ps
            .and_then(|h| self.custom_shaders.get(h.0))
            .unwrap_or(&self.standard_shader);

        let pipeline = self
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("scrawl shape pipeline"),
                layout: Some(&self.pipeline_layout),
                vertex: wgpu::VertexState {
                    module: vs_module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: ps_module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: self.target_format,
                        blend: convert::blend_state(key.blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Cw,
                    cull_mode: convert::cull_mode(key.rasterizer.cull_mode),
                    polygon_mode,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        self.pipelines.insert(key, pipeline);
    }

    // ── texture/sampler bindings ──────────────────────────────────────────

    fn ensure_texture_group(&mut self, state: SamplerState) {
        if self.texture_groups.contains_key(&state) {
            return;
        }

        let sampler = self.device.create_sampler(&convert::sampler_descriptor(state));
        let group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scrawl texture bind group"),
            layout: &self.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&self.white_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });
        self.texture_groups.insert(state, group);
    }

    // ── uniform ring ──────────────────────────────────────────────────────

    fn push_uniform_chunk(&mut self) {
        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scrawl frame uniforms"),
            size: UNIFORM_STRIDE * UNIFORM_SLOTS_PER_CHUNK,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scrawl frame uniforms bind group"),
            layout: &self.uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: Some(uniform_binding_size()),
                }),
            }],
        });
        self.uniform_chunks.push(UniformChunk { buffer, group });
    }

    /// Writes the pending constants into the next free uniform slot and
    /// returns `(chunk, dynamic offset)`.
    fn write_uniform_slot(&mut self) -> (usize, u32) {
        if self.uniform_slot == UNIFORM_SLOTS_PER_CHUNK {
            self.uniform_chunk += 1;
            self.uniform_slot = 0;
        }
        while self.uniform_chunk >= self.uniform_chunks.len() {
            self.push_uniform_chunk();
        }

        let combined = self.local * self.camera;
        let uniforms = FrameUniforms {
            viewport: [self.viewport.width.max(1.0), self.viewport.height.max(1.0)],
            _pad: [0.0; 2],
            transform0: [combined.a, combined.c, combined.tx, 0.0],
            transform1: [combined.b, combined.d, combined.ty, 0.0],
            color_mul: self.color_mul.to_array(),
            color_add: self.color_add.to_array(),
        };

        let offset = self.uniform_slot * UNIFORM_STRIDE;
        self.queue.write_buffer(
            &self.uniform_chunks[self.uniform_chunk].buffer,
            offset,
            bytemuck::bytes_of(&uniforms),
        );
        self.uniform_slot += 1;
        (self.uniform_chunk, offset as u32)
    }

    // ── batch buffers ─────────────────────────────────────────────────────

    fn create_buffer(&self, label: &str, bytes: u64, usage: wgpu::BufferUsages) -> wgpu::Buffer {
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: bytes,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Makes sure batch `batch` has buffers with at least the given byte
    /// capacities, growing in powers of two like the vertex pool itself.
    fn ensure_batch_buffers(&mut self, batch: usize, vertex_bytes: u64, index_bytes: u64) {
        if batch >= self.batch_buffers.len() {
            self.batch_buffers.resize_with(batch + 1, || None);
        }

        if self.batch_buffers[batch].is_none() {
            let vcap = vertex_bytes.next_power_of_two().max(MIN_BUFFER_BYTES);
            let icap = index_bytes.next_power_of_two().max(MIN_BUFFER_BYTES);
            let vertices = self.create_buffer("scrawl batch vertices", vcap, wgpu::BufferUsages::VERTEX);
            let indices = self.create_buffer("scrawl batch indices", icap, wgpu::BufferUsages::INDEX);
            self.batch_buffers[batch] = Some(BatchBuffers {
                vertices,
                vertex_bytes: vcap,
                indices,
                index_bytes: icap,
            });
            return;
        }

        let (grow_vertices, grow_indices) = {
            let buffers = self.batch_buffers[batch].as_ref().expect("checked above");
            (
                buffers.vertex_bytes < vertex_bytes,
                buffers.index_bytes < index_bytes,
            )
        };
        if grow_vertices {
            let vcap = vertex_bytes.next_power_of_two().max(MIN_BUFFER_BYTES);
            let buffer = self.create_buffer("scrawl batch vertices", vcap, wgpu::BufferUsages::VERTEX);
            if let Some(buffers) = &mut self.batch_buffers[batch] {
                buffers.vertices = buffer;
                buffers.vertex_bytes = vcap;
            }
        }
        if grow_indices {
            let icap = index_bytes.next_power_of_two().max(MIN_BUFFER_BYTES);
            let buffer = self.create_buffer("scrawl batch indices", icap, wgpu::BufferUsages::INDEX);
            if let Some(buffers) = &mut self.batch_buffers[batch] {
                buffers.indices = buffer;
                buffers.index_bytes = icap;
            }
        }
    }
}

impl BackendSink for WgpuSink {
    fn upload_vertices(&mut self, batch: usize, vertices: &[Vertex2D]) {
        if vertices.is_empty() {
            return;
        }
        let bytes = std::mem::size_of_val(vertices) as u64;
        self.ensure_batch_buffers(batch, bytes, 0);
        if let Some(buffers) = &self.batch_buffers[batch] {
            self.queue
                .write_buffer(&buffers.vertices, 0, bytemuck::cast_slice(vertices));
        }
    }

    fn upload_indices(&mut self, batch: usize, indices: &[IndexType]) {
        if indices.is_empty() {
            return;
        }
        // write_buffer sizes must be 4-byte aligned; pad odd u16 counts.
        if indices.len() % 2 != 0 {
            self.index_scratch.clear();
            self.index_scratch.extend_from_slice(indices);
            self.index_scratch.push(0);
        }

        let padded_len = indices.len() + indices.len() % 2;
        let bytes = (padded_len * std::mem::size_of::<IndexType>()) as u64;
        self.ensure_batch_buffers(batch, 0, bytes);

        let source: &[IndexType] = if indices.len() % 2 == 0 {
            indices
        } else {
            &self.index_scratch
        };
        if let Some(buffers) = &self.batch_buffers[batch] {
            self.queue
                .write_buffer(&buffers.indices, 0, bytemuck::cast_slice(source));
        }
    }

    fn bind_blend_state(&mut self, state: BlendState) {
        self.current_key.blend = state;
    }

    fn bind_rasterizer_state(&mut self, state: RasterizerState) {
        self.current_key.rasterizer = state;
        // Scissor enable lives in the rasterizer; recheck at the next draw.
        self.applied_scissor = None;
    }

    fn bind_sampler_state(&mut self, stage: ShaderStage, slot: usize, state: SamplerState) {
        // The standard pipeline samples one texture in the pixel stage;
        // other slots are carried for custom shaders but have no binding
        // point yet.
        if stage == ShaderStage::Pixel && slot == 0 {
            self.current_sampler = state;
        } else {
            log::trace!("sampler bind for unused {stage:?} slot {slot} ignored");
        }
    }

    fn bind_shader(&mut self, stage: ShaderStage, shader: StageShader) {
        let handle = shader.override_handle();
        match stage {
            ShaderStage::Vertex => self.current_key.vs = handle,
            ShaderStage::Pixel => self.current_key.ps = handle,
        }
    }

    fn update_transform_constants(&mut self, local: Mat3x2, camera: Mat3x2) {
        self.local = local;
        self.camera = camera;
        self.uniforms_dirty = true;
    }

    fn update_color_constants(&mut self, mul: ColorRgba, add: ColorRgba) {
        self.color_mul = mul;
        self.color_add = add;
        self.uniforms_dirty = true;
    }

    fn set_scissor(&mut self, rect: Option<Rect>) {
        self.scissor = rect;
        self.applied_scissor = None;
    }

    fn draw_indexed(&mut self, batch: usize, index_offset: u32, index_count: u32) {
        if self.pass.is_none() {
            log::debug!("draw_indexed outside begin_frame/end_frame; dropped");
            return;
        }
        if index_count == 0 {
            return;
        }

        // Effective scissor: the recorded rect when the rasterizer has
        // scissoring on, the full viewport otherwise. Zero-area culls the
        // draw entirely.
        let effective = if self.current_key.rasterizer.scissor_enabled {
            self.scissor
        } else {
            None
        };
        let Some(scissor) =
            convert::logical_clip_to_scissor(effective, self.viewport, self.scale_factor)
        else {
            return;
        };

        let key = self.current_key;
        let sampler = self.current_sampler;
        let rebind_pipeline = self.bound_key != Some(key);
        if rebind_pipeline {
            self.ensure_pipeline(key);
        }
        let rebind_sampler = self.bound_sampler != Some(sampler);
        if rebind_sampler {
            self.ensure_texture_group(sampler);
        }
        let uniform_slot = if self.uniforms_dirty {
            Some(self.write_uniform_slot())
        } else {
            None
        };

        let Self {
            pass,
            pipelines,
            texture_groups,
            uniform_chunks,
            batch_buffers,
            bound_key,
            bound_sampler,
            bound_batch,
            applied_scissor,
            uniforms_dirty,
            ..
        } = self;
        let Some(pass) = pass.as_mut() else { return };

        if rebind_pipeline {
            if let Some(pipeline) = pipelines.get(&key) {
                pass.set_pipeline(pipeline);
            }
            *bound_key = Some(key);
        }

        if let Some((chunk, offset)) = uniform_slot {
            pass.set_bind_group(0, &uniform_chunks[chunk].group, &[offset]);
            *uniforms_dirty = false;
        }

        if rebind_sampler {
            if let Some(group) = texture_groups.get(&sampler) {
                pass.set_bind_group(1, group, &[]);
            }
            *bound_sampler = Some(sampler);
        }

        if *applied_scissor != Some(scissor) {
            let (x, y, w, h) = scissor;
            pass.set_scissor_rect(x, y, w, h);
            *applied_scissor = Some(scissor);
        }

        if *bound_batch != Some(batch) {
            let Some(Some(buffers)) = batch_buffers.get(batch) else {
                log::warn!("draw references batch {batch} with no uploaded buffers; dropped");
                return;
            };
            pass.set_vertex_buffer(0, buffers.vertices.slice(..));
            pass.set_index_buffer(buffers.indices.slice(..), wgpu::IndexFormat::Uint16);
            *bound_batch = Some(batch);
        }

        pass.draw_indexed(index_offset..index_offset + index_count, 0, 0..1);
    }
}

fn uniform_binding_size() -> std::num::NonZeroU64 {
    // FrameUniforms is 80 bytes by construction; never zero.
    std::num::NonZeroU64::new(std::mem::size_of::<FrameUniforms>() as u64)
        .expect("FrameUniforms has non-zero size by construction")
}

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2, // uv
        2 => Float32x4  // color
    ];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex2D>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

fn create_white_texture(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("scrawl white texel"),
        size: wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &[255, 255, 255, 255],
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4),
            rows_per_image: None,
        },
        wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
