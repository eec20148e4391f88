//! Vertical search and wall-pass operations
//!
//! Every operation here is total: failure to find a target is the
//! [`SearchResult::NotFound`] value, never an error. A successful search
//! commits to exactly one landing and at most one terrain edit, and the edit
//! must be applied before the reposition it enables (see [`crate::resolver`]).

mod vertical;
mod wall;

pub use vertical::{
    ascend_level, ascend_to_ceiling, ascend_upwards, descend_level, find_free_position,
};
pub use wall::pass_through_forward_wall;

use cgmath::Point3;

use crate::world::{BlockId, VoxelPos};

/// Single grid write that must precede the reposition it enables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainEdit {
    pub pos: VoxelPos,
    pub block: BlockId,
}

/// Committed outcome of a successful search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Where the agent's feet go; orientation is untouched
    pub target: Point3<f32>,
    /// Platform write required before the teleport, if any
    pub edit: Option<TerrainEdit>,
}

impl Landing {
    /// Land standing in `pos`, no terrain change
    pub fn at(pos: VoxelPos) -> Self {
        Self {
            target: pos.stand_point(),
            edit: None,
        }
    }

    /// Land standing in `pos` after writing `edit` into the grid
    pub fn with_edit(pos: VoxelPos, edit: TerrainEdit) -> Self {
        Self {
            target: pos.stand_point(),
            edit: Some(edit),
        }
    }
}

/// Outcome of a search operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchResult {
    /// A qualifying target was found
    Found(Landing),
    /// The seed position already sits inside a qualifying gap; success, but
    /// no reposition should be issued
    AlreadyFree,
    /// No qualifying target within the scan bounds
    NotFound,
}

impl SearchResult {
    /// Whether the search succeeded, moving the agent or not
    pub fn is_found(&self) -> bool {
        !matches!(self, SearchResult::NotFound)
    }

    pub fn landing(&self) -> Option<&Landing> {
        match self {
            SearchResult::Found(landing) => Some(landing),
            _ => None,
        }
    }
}
