//! Agent collaborator contract
//!
//! The host owns the actual actor (player, NPC, camera rig). The core only
//! needs its position, view orientation, and a reposition entry point;
//! inventory, messaging and permissions stay on the host's side.

use cgmath::Point3;

/// Minimal actor surface the searches and resolver operate against
pub trait Agent {
    /// Current world-space position
    fn position(&self) -> Point3<f32>;

    /// View yaw in degrees
    fn yaw(&self) -> f32;

    /// View pitch in degrees
    fn pitch(&self) -> f32;

    /// Reposition the agent, setting its view orientation
    fn teleport(&mut self, target: Point3<f32>, yaw: f32, pitch: f32);
}
