//! Small driver that exercises each search over a hand-built world
//!
//! Run with `RUST_LOG=debug` to watch the scans commit their results.

use anyhow::Result;
use cgmath::Point3;

use blocknav::{
    resolver, search, Agent, BlockId, GridWorld, PassabilityClassifier, VerticalBounds,
};

struct DemoAgent {
    position: Point3<f32>,
    yaw: f32,
    pitch: f32,
}

impl Agent for DemoAgent {
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
        log::info!("[DemoAgent] teleport to {:?}", target);
        self.position = target;
        self.yaw = yaw;
        self.pitch = pitch;
    }
}

fn build_world() -> GridWorld {
    let mut world = GridWorld::new(16, 16, VerticalBounds::default());
    // Bedrock floor and a stone hill column with a buried chamber
    for x in 0..16 {
        for z in 0..16 {
            world.fill_column(x, z, 0, 0, BlockId::BEDROCK);
            world.fill_column(x, z, 1, 8, BlockId::STONE);
        }
    }
    // Chamber at y=3..=4 in the agent's column, ceiling at y=30
    world.fill_column(4, 4, 3, 4, BlockId::AIR);
    world.fill_column(4, 4, 30, 30, BlockId::STONE);
    // A wall to step through along +Z
    world.fill_column(4, 6, 9, 16, BlockId::COBBLESTONE);
    world
}

fn main() -> Result<()> {
    env_logger::init();

    let mut world = build_world();
    let rules = PassabilityClassifier::default();
    let mut agent = DemoAgent {
        position: Point3::new(4.5, 9.0, 4.5),
        yaw: 0.0, // looking toward +Z
        pitch: 0.0,
    };

    let free = search::find_free_position(&world, &rules, agent.position());
    println!("find_free_position: {:?}", free);
    resolver::apply(&mut world, &mut agent, &free)?;

    let up = search::ascend_upwards(&world, &rules, agent.position(), 5);
    println!("ascend_upwards(5): {:?}", up);
    resolver::apply(&mut world, &mut agent, &up)?;

    let ceiling = search::ascend_to_ceiling(&world, &rules, agent.position(), 0);
    println!("ascend_to_ceiling: {:?}", ceiling);
    resolver::apply(&mut world, &mut agent, &ceiling)?;

    let down = search::descend_level(&world, &rules, agent.position());
    println!("descend_level: {:?}", down);
    resolver::apply(&mut world, &mut agent, &down)?;

    if let Some(hit) = resolver::looking_at(&world, &rules, &agent, 16.0) {
        println!("looking at {} at {:?}", hit.block, hit.pos);
    }
    println!("facing {}", resolver::cardinal_direction(agent.yaw()));

    let through = search::pass_through_forward_wall(&world, &rules, resolver::view_ray(&agent), 16.0);
    if through.is_found() {
        resolver::apply(&mut world, &mut agent, &through)?;
        println!("passed through the wall: {:?}", through);
    } else {
        println!("no wall to pass through here");
    }

    println!("final position: {:?}", agent.position());
    Ok(())
}
