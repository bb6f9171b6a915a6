//! Scrawl engine crate.
//!
//! Immediate-mode 2D draw-command batching: shape calls are tessellated into
//! bounded vertex/index batches and recorded into an ordered command stream;
//! `flush()` replays the stream once against a backend sink, re-binding only
//! the render state that actually changed between draws.

pub mod backend;
pub mod batch;
pub mod coords;
pub mod device;
pub mod engine;
pub mod gpu;
pub mod logging;
pub mod resource;
pub mod state;
pub mod stream;
pub mod tess;
