//! Column-scan search operations
//!
//! Each operation walks a single column of the grid, counting run-lengths of
//! passable cells. Two consecutive passable cells form a gap, the minimum
//! clearance an agent needs to stand. Scans are monotonic (a cell is never
//! revisited once the cursor moves past it) and the first qualifying result
//! wins.

use cgmath::Point3;

use crate::passability::PassabilityClassifier;
use crate::search::{Landing, SearchResult, TerrainEdit};
use crate::world::{BlockId, VoxelPos, VoxelWorldView};

/// Vertical clearance an agent needs: two consecutive passable cells
const GAP_HEIGHT: u8 = 2;

/// Block written when a search has to fabricate a floor
const PLATFORM_BLOCK: BlockId = BlockId::GLASS;

/// Cell containing the origin point, with its height clamped into the world
/// bounds before any scan begins
fn seed_cell<W: VoxelWorldView>(world: &W, origin: Point3<f32>) -> VoxelPos {
    let mut pos = VoxelPos::containing(origin);
    pos.y = world.bounds().clamp(pos.y);
    pos
}

/// Find the nearest gap at or above the origin.
///
/// Scans upward from the origin cell to the world ceiling, resetting the
/// run-length counter on any solid or hazardous cell. Returns
/// [`SearchResult::AlreadyFree`] when the origin itself sits at the bottom of
/// the first gap found, so callers can suppress a pointless teleport.
pub fn find_free_position<W: VoxelWorldView>(
    world: &W,
    rules: &PassabilityClassifier,
    origin: Point3<f32>,
) -> SearchResult {
    let seed = seed_cell(world, origin);
    let bounds = world.bounds();

    let mut free: u8 = 0;
    let mut y = seed.y;
    while y <= bounds.max_y {
        if rules.is_clear(world.block_at(seed.at_height(y))) {
            free += 1;
        } else {
            free = 0;
        }

        if free == GAP_HEIGHT {
            if y - 1 == seed.y {
                log::trace!("[VerticalSearch] origin already inside a gap at y={}", seed.y);
                return SearchResult::AlreadyFree;
            }
            return SearchResult::Found(Landing::at(seed.at_height(y - 1)));
        }

        y += 1;
    }

    SearchResult::NotFound
}

/// Ascend to the next gap above the one containing the origin.
///
/// Skips the first gap encountered (the one the agent occupies) and lands in
/// the second, unless the cell beneath that landing is a liquid hazard.
pub fn ascend_level<W: VoxelWorldView>(
    world: &W,
    rules: &PassabilityClassifier,
    origin: Point3<f32>,
) -> SearchResult {
    let seed = seed_cell(world, origin);
    let bounds = world.bounds();

    let mut free: u8 = 0;
    let mut gaps: u8 = 0;
    let mut y = seed.y;
    while y <= bounds.max_y {
        if rules.is_clear(world.block_at(seed.at_height(y))) {
            // Saturate: a streak can span the whole column, and only the
            // exact count of 2 below matters
            free = free.saturating_add(1);
        } else {
            free = 0;
        }

        // Exact equality so each gap is counted once as the streak grows
        if free == GAP_HEIGHT {
            gaps += 1;
            if gaps == 2 {
                // Never drop the agent onto lava footing
                if rules.is_hazard(world.block_at(seed.at_height(y - 2))) {
                    log::debug!(
                        "[VerticalSearch] ascend aborted, hazard beneath landing at y={}",
                        y - 1
                    );
                    return SearchResult::NotFound;
                }
                return SearchResult::Found(Landing::at(seed.at_height(y - 1)));
            }
        }

        y += 1;
    }

    SearchResult::NotFound
}

/// Descend to solid footing in the first gap below the origin.
///
/// Scans downward for a gap, then keeps dropping through passable and
/// hazardous cells within that column until a solid cell provides footing,
/// landing one cell above it.
pub fn descend_level<W: VoxelWorldView>(
    world: &W,
    rules: &PassabilityClassifier,
    origin: Point3<f32>,
) -> SearchResult {
    let bounds = world.bounds();
    let mut seed = VoxelPos::containing(origin);
    seed.y = bounds.clamp(seed.y - 1);

    let mut free: u8 = 0;
    let mut y = seed.y;
    while y > bounds.min_y {
        if rules.is_clear(world.block_at(seed.at_height(y))) {
            free += 1;
        } else {
            free = 0;
        }

        if free == GAP_HEIGHT {
            // Gap found; now find something to stand on beneath it
            let mut footing = y;
            while footing >= bounds.min_y {
                let block = world.block_at(seed.at_height(footing));
                if rules.is_solid(block) {
                    return SearchResult::Found(Landing::at(seed.at_height(footing + 1)));
                }
                footing -= 1;
            }
            return SearchResult::NotFound;
        }

        y -= 1;
    }

    SearchResult::NotFound
}

/// Ascend to just under the ceiling above, fabricating a platform.
///
/// `clearance` extra cells are left between the agent's head and the
/// ceiling. The platform never drops below the origin height.
pub fn ascend_to_ceiling<W: VoxelWorldView>(
    world: &W,
    rules: &PassabilityClassifier,
    origin: Point3<f32>,
    clearance: i32,
) -> SearchResult {
    let seed = seed_cell(world, origin);
    let bounds = world.bounds();

    // Starting under a low overhang disqualifies the move
    if world.block_at(seed.above(2)) != BlockId::AIR {
        return SearchResult::NotFound;
    }

    let mut y = seed.y + 2;
    while y <= bounds.ceiling_scan_max() {
        if rules.is_solid(world.block_at(seed.at_height(y))) {
            let platform_y = seed.y.max(y - 3 - clearance);
            let platform = seed.at_height(platform_y);
            log::debug!(
                "[VerticalSearch] ceiling at y={}, platform at y={}",
                y,
                platform_y
            );
            return SearchResult::Found(Landing::with_edit(
                platform.above(1),
                TerrainEdit {
                    pos: platform,
                    block: PLATFORM_BLOCK,
                },
            ));
        }
        y += 1;
    }

    SearchResult::NotFound
}

/// Rise by exactly `distance` blocks, fabricating a platform underneath.
///
/// Fails if anything non-passable sits in the column before the target
/// height is reached; the agent either rises the full distance or not at all.
pub fn ascend_upwards<W: VoxelWorldView>(
    world: &W,
    rules: &PassabilityClassifier,
    origin: Point3<f32>,
    distance: i32,
) -> SearchResult {
    let seed = seed_cell(world, origin);
    let bounds = world.bounds();
    let max_y = bounds.ascent_cap().min(seed.y + distance);

    let mut y = seed.y + 1;
    while y <= bounds.max_y {
        if !rules.is_clear(world.block_at(seed.at_height(y))) {
            break; // hit something
        } else if y > max_y + 1 {
            break;
        } else if y == max_y + 1 {
            let platform = seed.at_height(y - 2);
            return SearchResult::Found(Landing::with_edit(
                seed.at_height(y - 1),
                TerrainEdit {
                    pos: platform,
                    block: PLATFORM_BLOCK,
                },
            ));
        }
        y += 1;
    }

    SearchResult::NotFound
}
