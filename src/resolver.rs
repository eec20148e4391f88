//! Search-result orchestration
//!
//! Translates a [`SearchResult`] into world and agent effects: the terrain
//! edit (if any) is written strictly before the teleport it enables, and a
//! failed or no-op search touches neither the world nor the agent.

use crate::agent::Agent;
use crate::error::NavResult;
use crate::passability::PassabilityClassifier;
use crate::ray::{self, Ray, RayHit};
use crate::search::SearchResult;
use crate::world::{VoxelPos, VoxelWorldView};

/// Apply a search result. Returns whether the agent was moved.
///
/// Orientation passes through unchanged; none of the searches reorient the
/// agent.
pub fn apply<W: VoxelWorldView, A: Agent>(
    world: &mut W,
    agent: &mut A,
    result: &SearchResult,
) -> NavResult<bool> {
    match result {
        SearchResult::Found(landing) => {
            if let Some(edit) = landing.edit {
                log::debug!("[Resolver] placing {} at {:?}", edit.block, edit.pos);
                world.set_block(edit.pos, edit.block)?;
            }
            agent.teleport(landing.target, agent.yaw(), agent.pitch());
            Ok(true)
        }
        // Success without movement: the agent already stands somewhere legal
        SearchResult::AlreadyFree => Ok(false),
        SearchResult::NotFound => Ok(false),
    }
}

/// The agent's view ray from its current position and orientation
pub fn view_ray<A: Agent>(agent: &A) -> Ray {
    Ray::from_yaw_pitch(agent.position(), agent.yaw(), agent.pitch())
}

/// Cell the agent's body currently occupies
pub fn block_in<A: Agent>(agent: &A) -> VoxelPos {
    VoxelPos::containing(agent.position())
}

/// Cell the agent is standing on
pub fn block_on<A: Agent>(agent: &A) -> VoxelPos {
    block_in(agent).below(1)
}

/// Block the agent is looking at, if any within `range`
pub fn looking_at<W: VoxelWorldView, A: Agent>(
    world: &W,
    rules: &PassabilityClassifier,
    agent: &A,
    range: f32,
) -> Option<RayHit> {
    ray::first_hit(world, rules, view_ray(agent), range)
}

/// First solid block along the agent's view, skipping liquids and hazards
pub fn looking_at_solid<W: VoxelWorldView, A: Agent>(
    world: &W,
    rules: &PassabilityClassifier,
    agent: &A,
    range: f32,
) -> Option<RayHit> {
    ray::first_solid_hit(world, rules, view_ray(agent), range)
}

/// Compass point for a view yaw in degrees
pub fn cardinal_direction(yaw: f32) -> &'static str {
    const POINTS: [&str; 8] = [
        "north",
        "northeast",
        "east",
        "southeast",
        "south",
        "southwest",
        "west",
        "northwest",
    ];
    let mut rot = (yaw - 90.0) % 360.0;
    if rot < 0.0 {
        rot += 360.0;
    }
    let sector = (((rot + 22.5) % 360.0) / 45.0) as usize % POINTS.len();
    POINTS[sector]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;
    use crate::passability::PassabilityClassifier;
    use crate::search::{self, SearchResult};
    use crate::world::{BlockId, GridWorld, VerticalBounds};

    struct TestAgent {
        position: Point3<f32>,
        yaw: f32,
        pitch: f32,
        teleports: u32,
    }

    impl TestAgent {
        fn at(position: Point3<f32>) -> Self {
            Self {
                position,
                yaw: 0.0,
                pitch: 0.0,
                teleports: 0,
            }
        }
    }

    impl Agent for TestAgent {
        fn position(&self) -> Point3<f32> {
            self.position
        }
        fn yaw(&self) -> f32 {
            self.yaw
        }
        fn pitch(&self) -> f32 {
            self.pitch
        }
        fn teleport(&mut self, target: Point3<f32>, yaw: f32, pitch: f32) {
            self.position = target;
            self.yaw = yaw;
            self.pitch = pitch;
            self.teleports += 1;
        }
    }

    #[test]
    fn test_edit_is_applied_before_teleport_lands() {
        let mut world = GridWorld::new(8, 8, VerticalBounds::default());
        world.fill_column(2, 2, 0, 1, BlockId::STONE);
        world.fill_column(2, 2, 20, 20, BlockId::STONE);
        let rules = PassabilityClassifier::default();
        let mut agent = TestAgent::at(Point3::new(2.5, 2.5, 2.5));

        let result = search::ascend_to_ceiling(&world, &rules, agent.position(), 0);
        let moved = apply(&mut world, &mut agent, &result).unwrap();

        assert!(moved);
        assert_eq!(agent.position.y, 18.0);
        // The platform the agent now stands on was written into the grid
        assert_eq!(
            world.block_at(crate::world::VoxelPos::new(2, 17, 2)),
            BlockId::GLASS
        );
    }

    #[test]
    fn test_already_free_is_a_noop_success() {
        let mut world = GridWorld::new(8, 8, VerticalBounds::default());
        world.fill_column(2, 2, 0, 1, BlockId::STONE);
        let rules = PassabilityClassifier::default();
        // Agent hovers at an uncentered position inside open space
        let mut agent = TestAgent::at(Point3::new(2.71, 2.5, 2.13));
        let before = agent.position;

        let result = search::find_free_position(&world, &rules, agent.position());
        assert_eq!(result, SearchResult::AlreadyFree);

        let moved = apply(&mut world, &mut agent, &result).unwrap();
        assert!(!moved);
        assert_eq!(agent.position, before);
        assert_eq!(agent.teleports, 0);
    }

    #[test]
    fn test_not_found_leaves_everything_untouched() {
        let mut world = GridWorld::new(8, 8, VerticalBounds::default());
        let mut agent = TestAgent::at(Point3::new(2.5, 2.5, 2.5));

        let moved = apply(&mut world, &mut agent, &SearchResult::NotFound).unwrap();
        assert!(!moved);
        assert_eq!(agent.teleports, 0);
    }

    #[test]
    fn test_teleport_keeps_orientation() {
        let mut world = GridWorld::new(8, 8, VerticalBounds::default());
        world.fill_column(2, 2, 0, 4, BlockId::STONE);
        world.fill_column(2, 2, 7, 7, BlockId::STONE);
        let rules = PassabilityClassifier::default();
        let mut agent = TestAgent::at(Point3::new(2.5, 0.5, 2.5));
        agent.yaw = 135.0;
        agent.pitch = -20.0;

        let result = search::find_free_position(&world, &rules, agent.position());
        apply(&mut world, &mut agent, &result).unwrap();

        assert_eq!(agent.position.y, 5.0);
        assert_eq!(agent.yaw, 135.0);
        assert_eq!(agent.pitch, -20.0);
    }

    #[test]
    fn test_block_in_and_on() {
        let agent = TestAgent::at(Point3::new(3.7, 12.2, -0.4));
        assert_eq!(block_in(&agent), VoxelPos::new(3, 12, -1));
        assert_eq!(block_on(&agent), VoxelPos::new(3, 11, -1));
    }

    #[test]
    fn test_cardinal_direction_quadrants() {
        assert_eq!(cardinal_direction(90.0), "north");
        assert_eq!(cardinal_direction(180.0), "east");
        assert_eq!(cardinal_direction(270.0), "south");
        assert_eq!(cardinal_direction(0.0), "west");
        assert_eq!(cardinal_direction(135.0), "northeast");
        assert_eq!(cardinal_direction(-90.0), "south");
    }
}
