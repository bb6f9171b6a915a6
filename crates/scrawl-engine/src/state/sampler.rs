/// Texture minification/magnification filter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

/// Texture coordinate wrapping behavior.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AddressMode {
    Clamp,
    Repeat,
    Mirror,
}

/// Shader stage owning a sampler slot or a shader override.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Pixel,
}

impl ShaderStage {
    pub const COUNT: usize = 2;

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ShaderStage::Vertex => 0,
            ShaderStage::Pixel => 1,
        }
    }
}

/// Sampler slots addressable per shader stage.
pub const MAX_SAMPLER_SLOTS: usize = 8;

/// Sampler configuration for one stage/slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SamplerState {
    pub filter: TextureFilter,
    pub address_u: AddressMode,
    pub address_v: AddressMode,
}

impl SamplerState {
    pub const CLAMP_LINEAR: SamplerState = SamplerState {
        filter: TextureFilter::Linear,
        address_u: AddressMode::Clamp,
        address_v: AddressMode::Clamp,
    };

    pub const CLAMP_NEAREST: SamplerState = SamplerState {
        filter: TextureFilter::Nearest,
        address_u: AddressMode::Clamp,
        address_v: AddressMode::Clamp,
    };

    pub const REPEAT_LINEAR: SamplerState = SamplerState {
        filter: TextureFilter::Linear,
        address_u: AddressMode::Repeat,
        address_v: AddressMode::Repeat,
    };
}

impl Default for SamplerState {
    #[inline]
    fn default() -> Self {
        Self::CLAMP_LINEAR
    }
}
