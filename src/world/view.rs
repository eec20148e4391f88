//! World-view contract required by the search core
//!
//! Hosts own the actual world storage; the searches only need synchronous
//! per-cell reads and writes plus the vertical extent of the grid. Reads and
//! writes are strongly consistent: a search must observe its own prior
//! writes, so implementations must not cache.

use super::{BlockId, VoxelPos};
use crate::error::NavResult;

/// Closed vertical interval a world answers queries for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalBounds {
    pub min_y: i32,
    pub max_y: i32,
}

impl VerticalBounds {
    pub const fn new(min_y: i32, max_y: i32) -> Self {
        Self { min_y, max_y }
    }

    /// Clamp a seed height into the bounds before a scan starts
    pub fn clamp(&self, y: i32) -> i32 {
        y.clamp(self.min_y, self.max_y)
    }

    pub fn contains(&self, y: i32) -> bool {
        y >= self.min_y && y <= self.max_y
    }

    /// Highest cell a ceiling scan inspects. Two below the top, so the
    /// platform math below a found ceiling always stays in bounds.
    pub fn ceiling_scan_max(&self) -> i32 {
        self.max_y - 2
    }

    /// Highest cell an ascend-upwards target may occupy
    pub fn ascent_cap(&self) -> i32 {
        self.max_y - 1
    }
}

impl Default for VerticalBounds {
    fn default() -> Self {
        // A 130-cell column, 0..=129
        Self { min_y: 0, max_y: 129 }
    }
}

/// Read/write accessor over a bounded voxel grid
pub trait VoxelWorldView {
    /// Block occupying `pos` at the time of the call
    fn block_at(&self, pos: VoxelPos) -> BlockId;

    /// Overwrite the block at `pos`
    fn set_block(&mut self, pos: VoxelPos, block: BlockId) -> NavResult<()>;

    /// Vertical extent of the grid
    fn bounds(&self) -> VerticalBounds;
}
