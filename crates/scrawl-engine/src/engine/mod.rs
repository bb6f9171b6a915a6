//! The command manager: the engine's public drawing surface.
//!
//! [`Renderer2D`] ties the pieces together: shape calls tessellate into a
//! scratch buffer, land in the batch pool, and record draw entries tagged
//! with the pending state; `flush()` replays the stream once against a
//! backend sink, diffing snapshots so only changed state is re-bound.

mod config;
mod error;
mod renderer;

pub use config::EngineConfig;
pub use error::RenderError;
pub use renderer::{FlushStats, Renderer2D};
