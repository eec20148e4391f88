//! Core world data types and the world-view contract
//!
//! This module contains the value types the searches operate on and the
//! accessor trait a host world must implement, independent of how the host
//! actually stores its blocks.

mod block;
mod grid;
mod position;
mod view;

pub use block::BlockId;
pub use grid::GridWorld;
pub use position::VoxelPos;
pub use view::{VerticalBounds, VoxelWorldView};
