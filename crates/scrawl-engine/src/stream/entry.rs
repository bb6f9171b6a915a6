/// One recorded draw: an index range inside a single batch, under the state
/// snapshot in effect when it was recorded.
///
/// The range `[index_offset, index_offset + index_count)` always lies inside
/// batch `batch`; a primitive never spans two batches.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawEntry {
    pub batch: usize,
    pub index_offset: u32,
    pub index_count: u32,
    /// Index into the stream's snapshot table.
    pub snapshot: usize,
}

/// One command stream entry, in recording order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommandEntry {
    /// Subsequent draws are recorded under this snapshot.
    State(usize),
    Draw(DrawEntry),
}
