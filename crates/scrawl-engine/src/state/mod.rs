//! Pending render state.
//!
//! Setters mutate a CPU-side "currently pending" state block; nothing touches
//! the backend until `flush()` diffs consecutive snapshots and re-binds only
//! the fields that changed. Getters always return the last-set pending value
//! (read-after-write consistency), whether or not it has been applied yet.

mod blend;
mod raster;
mod sampler;
mod shader;
mod snapshot;
mod tracker;

pub use blend::{BlendFactor, BlendOp, BlendState};
pub use raster::{CullMode, FillMode, RasterizerState};
pub use sampler::{AddressMode, MAX_SAMPLER_SLOTS, SamplerState, ShaderStage, TextureFilter};
pub use shader::{ShaderHandle, StageShader};
pub use snapshot::StateSnapshot;
pub use tracker::StateTracker;
