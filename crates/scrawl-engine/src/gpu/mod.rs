//! wgpu backend sink.
//!
//! The production implementation of [`crate::backend::BackendSink`]: batch
//! buffers, a pipeline cache over blend/rasterizer/shader-override state, a
//! dynamic-offset uniform ring for transform and color constants, and
//! logical-to-physical scissor mapping.

mod convert;
mod sink;

pub use sink::WgpuSink;
