use thiserror::Error;

/// Unrecoverable recording/flush failures.
///
/// Everything else in the engine degrades silently (degenerate shapes are
/// no-ops, stale resource handles fall back to defaults); only conditions
/// that would corrupt index topology surface as errors.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RenderError {
    /// A single primitive exceeds the 16-bit index range and cannot be
    /// stored in any batch. Engine-generated shapes are bounded well below
    /// this; hitting it indicates a caller bug in user-supplied polygon
    /// data.
    #[error(
        "primitive exceeds the addressable index range: {vertices} vertices / {indices} indices"
    )]
    PrimitiveTooLarge { vertices: usize, indices: usize },
}
