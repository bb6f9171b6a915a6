//! Generation-checked resource handles.
//!
//! External resources (custom shaders, textures) are referenced by opaque
//! `Handle` values. A handle stays valid until its slot is removed; a reused
//! slot gets a new generation, so stale handles are detected instead of
//! silently aliasing the new occupant.

mod arena;

pub use arena::{Handle, HandleArena};
