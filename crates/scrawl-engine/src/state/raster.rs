/// Triangle fill mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FillMode {
    Solid,
    Wireframe,
}

/// Face culling mode. 2D drawing defaults to no culling since frame and
/// strip tessellation emits both windings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CullMode {
    None,
    Front,
    Back,
}

/// Rasterizer configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RasterizerState {
    pub fill_mode: FillMode,
    pub cull_mode: CullMode,
    /// When false, a recorded scissor rect is carried in snapshots but not
    /// applied by the backend.
    pub scissor_enabled: bool,
}

impl RasterizerState {
    pub const DEFAULT_2D: RasterizerState = RasterizerState {
        fill_mode: FillMode::Solid,
        cull_mode: CullMode::None,
        scissor_enabled: false,
    };

    pub const SCISSORED_2D: RasterizerState = RasterizerState {
        scissor_enabled: true,
        ..Self::DEFAULT_2D
    };

    pub const WIREFRAME_2D: RasterizerState = RasterizerState {
        fill_mode: FillMode::Wireframe,
        ..Self::DEFAULT_2D
    };
}

impl Default for RasterizerState {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT_2D
    }
}
