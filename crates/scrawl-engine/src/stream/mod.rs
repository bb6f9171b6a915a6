//! Recorded draw stream for one cycle.
//!
//! Entries preserve call order exactly (painter's algorithm: later entries
//! render on top). State snapshots are stored once in a side table and
//! referenced by index, so long runs of draws under the same state cost one
//! snapshot, not one per draw.

mod entry;
mod list;

pub use entry::{CommandEntry, DrawEntry};
pub use list::CommandStream;
