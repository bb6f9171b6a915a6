/// Source/destination factor of a blend equation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstColor,
    OneMinusDstColor,
    DstAlpha,
    OneMinusDstAlpha,
}

/// Blend operation combining the weighted source and destination terms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BlendOp {
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

/// Output-merger blend configuration.
///
/// Color and alpha channels blend independently, as on every modern API.
/// `enabled == false` means source-over-write regardless of the factors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BlendState {
    pub enabled: bool,
    pub src: BlendFactor,
    pub dst: BlendFactor,
    pub op: BlendOp,
    pub src_alpha: BlendFactor,
    pub dst_alpha: BlendFactor,
    pub op_alpha: BlendOp,
}

impl BlendState {
    /// Straight-alpha blending, the engine default.
    pub const ALPHA: BlendState = BlendState {
        enabled: true,
        src: BlendFactor::SrcAlpha,
        dst: BlendFactor::OneMinusSrcAlpha,
        op: BlendOp::Add,
        src_alpha: BlendFactor::One,
        dst_alpha: BlendFactor::OneMinusSrcAlpha,
        op_alpha: BlendOp::Add,
    };

    /// Premultiplied-alpha blending.
    pub const PREMULTIPLIED: BlendState = BlendState {
        enabled: true,
        src: BlendFactor::One,
        dst: BlendFactor::OneMinusSrcAlpha,
        op: BlendOp::Add,
        src_alpha: BlendFactor::One,
        dst_alpha: BlendFactor::OneMinusSrcAlpha,
        op_alpha: BlendOp::Add,
    };

    /// Additive blending (light accumulation, glows).
    pub const ADDITIVE: BlendState = BlendState {
        enabled: true,
        src: BlendFactor::SrcAlpha,
        dst: BlendFactor::One,
        op: BlendOp::Add,
        src_alpha: BlendFactor::Zero,
        dst_alpha: BlendFactor::One,
        op_alpha: BlendOp::Add,
    };

    /// Blending disabled; source overwrites the target.
    pub const OPAQUE: BlendState = BlendState {
        enabled: false,
        ..Self::ALPHA
    };
}

impl Default for BlendState {
    #[inline]
    fn default() -> Self {
        Self::ALPHA
    }
}
