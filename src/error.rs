//! Error types for blocknav
//!
//! A search that finds nothing is not an error; it is the
//! [`SearchResult::NotFound`](crate::search::SearchResult::NotFound) value.
//! `NavError` covers genuine faults, currently only grid writes aimed
//! outside the stored volume.

use crate::world::VoxelPos;

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("position {pos:?} is outside the stored world volume")]
    PositionOutOfBounds { pos: VoxelPos },
}

/// Result type for fallible blocknav operations
pub type NavResult<T> = Result<T, NavError>;
