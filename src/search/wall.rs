//! Pass-through-wall targeting
//!
//! Walks the view ray's block trace and finds open space just past the first
//! solid run it enters: step through the wall you are facing and land on the
//! other side, provided there is air to stand in.

use crate::passability::PassabilityClassifier;
use crate::ray::{self, Ray, DEFAULT_RAY_STEP};
use crate::search::{Landing, SearchResult};
use crate::world::{BlockId, VoxelWorldView};

/// Hard cap on traced cells, applied on top of the caller's `range`.
/// Inherited from the original behavior; a range that would trace more
/// cells is silently truncated to this many.
const MAX_TRACED_CELLS: u32 = 20;

/// Find a standing position just past the wall the ray enters.
///
/// Tracks whether the trace has entered solid material yet; the first air
/// cell after that, with air directly below it to stand in, becomes the
/// landing. Exceeding the trace cap or exhausting the ray yields
/// [`SearchResult::NotFound`].
pub fn pass_through_forward_wall<W: VoxelWorldView>(
    world: &W,
    rules: &PassabilityClassifier,
    view: Ray,
    range: f32,
) -> SearchResult {
    let mut entered_wall = false;
    let mut traced = 0u32;

    for hit in ray::trace(world, view, range, DEFAULT_RAY_STEP) {
        traced += 1;
        if traced > MAX_TRACED_CELLS {
            log::debug!("[WallPass] trace cap reached without an exit");
            return SearchResult::NotFound;
        }

        if rules.is_solid(hit.block) {
            entered_wall = true;
        } else if hit.block == BlockId::AIR && entered_wall {
            let below = hit.pos.below(1);
            if world.block_at(below) == BlockId::AIR {
                return SearchResult::Found(Landing::at(below));
            }
        }
    }

    SearchResult::NotFound
}
