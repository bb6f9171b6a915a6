//! Backend sink boundary.
//!
//! The batching core is backend-agnostic: flushing walks the command stream
//! and talks to a [`BackendSink`] implementation. Extending to a new
//! graphics API means implementing this trait, nothing else:
//! - upload the used range of each batch
//! - bind the state fields the flusher reports as changed
//! - issue indexed draws over batch ranges

mod sink;

pub use sink::BackendSink;

#[cfg(test)]
pub mod recording;
