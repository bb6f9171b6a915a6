use crate::resource::Handle;

/// Handle to a registered custom shader. Opaque to the engine; the backend
/// sink resolves it through its own generation-checked registry at flush
/// time, falling back to the standard shader when stale.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderHandle(pub Handle);

/// Per-stage shader selection.
///
/// An explicit two-variant type instead of an optional handle: "use the
/// standard shader" is a deliberate state, not an absence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StageShader {
    Standard,
    Override(ShaderHandle),
}

impl StageShader {
    #[inline]
    pub fn override_handle(self) -> Option<ShaderHandle> {
        match self {
            StageShader::Standard => None,
            StageShader::Override(handle) => Some(handle),
        }
    }
}

impl Default for StageShader {
    #[inline]
    fn default() -> Self {
        StageShader::Standard
    }
}
