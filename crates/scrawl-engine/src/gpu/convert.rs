//! Engine state to wgpu state mapping.

use crate::coords::{Rect, Viewport};
use crate::state::{
    AddressMode, BlendFactor, BlendOp, BlendState, CullMode, FillMode, SamplerState,
    TextureFilter,
};

pub(super) fn blend_factor(factor: BlendFactor) -> wgpu::BlendFactor {
    match factor {
        BlendFactor::Zero => wgpu::BlendFactor::Zero,
        BlendFactor::One => wgpu::BlendFactor::One,
        BlendFactor::SrcColor => wgpu::BlendFactor::Src,
        BlendFactor::OneMinusSrcColor => wgpu::BlendFactor::OneMinusSrc,
        BlendFactor::SrcAlpha => wgpu::BlendFactor::SrcAlpha,
        BlendFactor::OneMinusSrcAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
        BlendFactor::DstColor => wgpu::BlendFactor::Dst,
        BlendFactor::OneMinusDstColor => wgpu::BlendFactor::OneMinusDst,
        BlendFactor::DstAlpha => wgpu::BlendFactor::DstAlpha,
        BlendFactor::OneMinusDstAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
    }
}

fn blend_component(src: BlendFactor, dst: BlendFactor, op: BlendOp) -> wgpu::BlendComponent {
    let operation = match op {
        BlendOp::Add => wgpu::BlendOperation::Add,
        BlendOp::Subtract => wgpu::BlendOperation::Subtract,
        BlendOp::ReverseSubtract => wgpu::BlendOperation::ReverseSubtract,
        BlendOp::Min => wgpu::BlendOperation::Min,
        BlendOp::Max => wgpu::BlendOperation::Max,
    };
    // WebGPU requires factor One with min/max; the factors are ignored by
    // those operations anyway.
    let (src_factor, dst_factor) = match op {
        BlendOp::Min | BlendOp::Max => (wgpu::BlendFactor::One, wgpu::BlendFactor::One),
        _ => (blend_factor(src), blend_factor(dst)),
    };
    wgpu::BlendComponent {
        src_factor,
        dst_factor,
        operation,
    }
}

pub(super) fn blend_state(state: BlendState) -> Option<wgpu::BlendState> {
    if !state.enabled {
        return None;
    }
    Some(wgpu::BlendState {
        color: blend_component(state.src, state.dst, state.op),
        alpha: blend_component(state.src_alpha, state.dst_alpha, state.op_alpha),
    })
}

pub(super) fn cull_mode(mode: CullMode) -> Option<wgpu::Face> {
    match mode {
        CullMode::None => None,
        CullMode::Front => Some(wgpu::Face::Front),
        CullMode::Back => Some(wgpu::Face::Back),
    }
}

/// Wireframe requires `POLYGON_MODE_LINE`; without it the pipeline falls
/// back to solid fill (the caller logs the downgrade).
pub(super) fn polygon_mode(mode: FillMode, features: wgpu::Features) -> wgpu::PolygonMode {
    match mode {
        FillMode::Solid => wgpu::PolygonMode::Fill,
        FillMode::Wireframe => {
            if features.contains(wgpu::Features::POLYGON_MODE_LINE) {
                wgpu::PolygonMode::Line
            } else {
                wgpu::PolygonMode::Fill
            }
        }
    }
}

pub(super) fn address_mode(mode: AddressMode) -> wgpu::AddressMode {
    match mode {
        AddressMode::Clamp => wgpu::AddressMode::ClampToEdge,
        AddressMode::Repeat => wgpu::AddressMode::Repeat,
        AddressMode::Mirror => wgpu::AddressMode::MirrorRepeat,
    }
}

pub(super) fn filter_mode(filter: TextureFilter) -> wgpu::FilterMode {
    match filter {
        TextureFilter::Nearest => wgpu::FilterMode::Nearest,
        TextureFilter::Linear => wgpu::FilterMode::Linear,
    }
}

pub(super) fn sampler_descriptor(state: SamplerState) -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("scrawl sampler"),
        address_mode_u: address_mode(state.address_u),
        address_mode_v: address_mode(state.address_v),
        mag_filter: filter_mode(state.filter),
        min_filter: filter_mode(state.filter),
        ..Default::default()
    }
}

/// Converts a logical-pixel scissor rect to physical scissor arguments.
///
/// Returns `None` if the rect is zero-area after clamping (the draw should
/// be skipped). `rect = None` means "no scissor" and maps to the full
/// viewport.
pub(super) fn logical_clip_to_scissor(
    rect: Option<Rect>,
    viewport: Viewport,
    scale: f32,
) -> Option<(u32, u32, u32, u32)> {
    let phys_vw = (viewport.width * scale).max(1.0) as u32;
    let phys_vh = (viewport.height * scale).max(1.0) as u32;

    let (x, y, w, h) = match rect {
        None => (0, 0, phys_vw, phys_vh),
        Some(r) => {
            let x = ((r.origin.x * scale).max(0.0) as u32).min(phys_vw);
            let y = ((r.origin.y * scale).max(0.0) as u32).min(phys_vh);
            let x2 = (((r.origin.x + r.size.x) * scale).max(0.0) as u32).min(phys_vw);
            let y2 = (((r.origin.y + r.size.y) * scale).max(0.0) as u32).min(phys_vh);
            (x, y, x2.saturating_sub(x), y2.saturating_sub(y))
        }
    };

    if w == 0 || h == 0 { None } else { Some((x, y, w, h)) }
}
