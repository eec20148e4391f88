//! Blocknav - voxel-grid navigation helpers for agent-driven worlds
//!
//! The crate answers one family of questions: given an agent standing (or
//! looking) somewhere in a bounded voxel grid, where is the nearest place it
//! can legally stand? Column scans handle the vertical cases (find a gap,
//! ascend, descend, rise to a ceiling or by a fixed distance) and a block
//! trace handles the view-ray cases (what am I looking at, step through the
//! wall in front of me).
//!
//! The world itself is external: hosts implement [`VoxelWorldView`] over
//! their own storage and the searches only ever touch it through that trait.
//! A failed search is a value ([`SearchResult::NotFound`]), never an error.

pub mod agent;
pub mod error;
pub mod passability;
pub mod ray;
pub mod resolver;
pub mod search;
pub mod world;

pub use agent::Agent;
pub use error::{NavError, NavResult};
pub use passability::{Passability, PassabilityClassifier};
pub use ray::{first_hit, first_solid_hit, trace, BlockTrace, Ray, RayHit, DEFAULT_RAY_STEP};
pub use search::{
    ascend_level, ascend_to_ceiling, ascend_upwards, descend_level, find_free_position,
    pass_through_forward_wall, Landing, SearchResult, TerrainEdit,
};
pub use world::{BlockId, GridWorld, VerticalBounds, VoxelPos, VoxelWorldView};
