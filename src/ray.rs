//! Ray sampling through the voxel grid
//!
//! A trace steps a fractional cursor along the view direction and yields one
//! [`RayHit`] per distinct cell entered, up to a range limit. The iterator is
//! lazy and restartable: building a new trace from the same ray replays the
//! same cells against the current state of the world.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::passability::{Passability, PassabilityClassifier};
use crate::world::{BlockId, VoxelPos, VoxelWorldView};

/// Cursor advance per sample, in world units
pub const DEFAULT_RAY_STEP: f32 = 0.2;

/// Origin point plus normalized view direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Build a view ray from yaw/pitch in degrees.
    ///
    /// Yaw 0 looks toward +Z and increases clockwise when viewed from above;
    /// positive pitch looks downward.
    pub fn from_yaw_pitch(origin: Point3<f32>, yaw_deg: f32, pitch_deg: f32) -> Self {
        let yaw = yaw_deg.to_radians();
        let pitch = pitch_deg.to_radians();
        Self::new(
            origin,
            Vector3::new(
                -yaw.sin() * pitch.cos(),
                -pitch.sin(),
                yaw.cos() * pitch.cos(),
            ),
        )
    }
}

/// One cell a trace entered, with its block at time of query
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub pos: VoxelPos,
    pub block: BlockId,
    /// Distance along the ray at which the cell was entered
    pub distance: f32,
}

/// Lazy iterator over the distinct cells a ray passes through
pub struct BlockTrace<'a, W: VoxelWorldView> {
    world: &'a W,
    ray: Ray,
    range: f32,
    step: f32,
    travelled: f32,
    last_cell: Option<VoxelPos>,
}

/// Start a trace from `ray.origin` along `ray.direction`, sampling every
/// `step` world units out to `range`
pub fn trace<W: VoxelWorldView>(world: &W, ray: Ray, range: f32, step: f32) -> BlockTrace<'_, W> {
    BlockTrace {
        world,
        ray,
        range,
        step,
        travelled: 0.0,
        last_cell: None,
    }
}

impl<W: VoxelWorldView> Iterator for BlockTrace<'_, W> {
    type Item = RayHit;

    fn next(&mut self) -> Option<RayHit> {
        while self.travelled <= self.range {
            let distance = self.travelled;
            self.travelled += self.step;

            let point = self.ray.origin + self.ray.direction * distance;
            let pos = VoxelPos::containing(point);

            // Sub-cell steps revisit the same cell; only report new ones
            if self.last_cell == Some(pos) {
                continue;
            }
            self.last_cell = Some(pos);

            return Some(RayHit {
                pos,
                block: self.world.block_at(pos),
                distance,
            });
        }
        None
    }
}

/// First traversed cell that is not passable: the block the agent is looking at
pub fn first_hit<W: VoxelWorldView>(
    world: &W,
    rules: &PassabilityClassifier,
    ray: Ray,
    range: f32,
) -> Option<RayHit> {
    trace(world, ray, range, DEFAULT_RAY_STEP)
        .find(|hit| rules.classify(hit.block) != Passability::Passable)
}

/// First genuinely solid cell, advancing past passable and hazardous material
pub fn first_solid_hit<W: VoxelWorldView>(
    world: &W,
    rules: &PassabilityClassifier,
    ray: Ray,
    range: f32,
) -> Option<RayHit> {
    trace(world, ray, range, DEFAULT_RAY_STEP)
        .find(|hit| rules.classify(hit.block) == Passability::Solid)
}
