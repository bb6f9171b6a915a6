//! Bounded vertex/index storage.
//!
//! Geometry accumulates into capacity-bounded batches; when an append would
//! overflow, the pool rotates to the next batch so no primitive is ever
//! split across two. Batches are reset (not reallocated) every cycle.

mod pool;
mod vertex_index;

pub use pool::{BatchAppend, BatchPool};
pub use vertex_index::{BatchOffset, VertexIndexBatch};
