//! In-memory voxel storage
//!
//! Flat-array world backing the tests and the demo binary. Real hosts are
//! expected to implement [`VoxelWorldView`] over their own storage instead.

use super::{BlockId, VerticalBounds, VoxelPos, VoxelWorldView};
use crate::error::{NavError, NavResult};

/// Dense x/y/z grid of blocks over a fixed footprint and vertical extent
pub struct GridWorld {
    size_x: i32,
    size_z: i32,
    size_y: i32,
    bounds: VerticalBounds,
    blocks: Vec<BlockId>,
}

impl GridWorld {
    /// Create an all-air world of `size_x * size_z` columns spanning `bounds`
    pub fn new(size_x: u32, size_z: u32, bounds: VerticalBounds) -> Self {
        let size_y = bounds.max_y - bounds.min_y + 1;
        let cells = size_x as usize * size_z as usize * size_y as usize;
        Self {
            size_x: size_x as i32,
            size_z: size_z as i32,
            size_y,
            bounds,
            blocks: vec![BlockId::AIR; cells],
        }
    }

    fn index(&self, pos: VoxelPos) -> Option<usize> {
        if pos.x < 0 || pos.x >= self.size_x || pos.z < 0 || pos.z >= self.size_z {
            return None;
        }
        if !self.bounds.contains(pos.y) {
            return None;
        }
        let local_y = (pos.y - self.bounds.min_y) as usize;
        let index = pos.x as usize
            + local_y * self.size_x as usize
            + pos.z as usize * self.size_x as usize * self.size_y as usize;
        Some(index)
    }

    /// Fill a vertical run of one column, inclusive on both ends
    pub fn fill_column(&mut self, x: i32, z: i32, from_y: i32, to_y: i32, block: BlockId) {
        for y in from_y..=to_y {
            if let Some(index) = self.index(VoxelPos::new(x, y, z)) {
                self.blocks[index] = block;
            }
        }
    }
}

impl VoxelWorldView for GridWorld {
    fn block_at(&self, pos: VoxelPos) -> BlockId {
        // Out-of-volume reads answer AIR rather than failing
        match self.index(pos) {
            Some(index) => self.blocks[index],
            None => BlockId::AIR,
        }
    }

    fn set_block(&mut self, pos: VoxelPos, block: BlockId) -> NavResult<()> {
        let index = self
            .index(pos)
            .ok_or(NavError::PositionOutOfBounds { pos })?;
        self.blocks[index] = block;
        Ok(())
    }

    fn bounds(&self) -> VerticalBounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_roundtrip() {
        let mut world = GridWorld::new(4, 4, VerticalBounds::new(0, 31));
        let pos = VoxelPos::new(2, 17, 3);
        world.set_block(pos, BlockId::STONE).unwrap();
        assert_eq!(world.block_at(pos), BlockId::STONE);
        assert_eq!(world.block_at(pos.above(1)), BlockId::AIR);
    }

    #[test]
    fn test_out_of_volume_reads_are_air() {
        let world = GridWorld::new(4, 4, VerticalBounds::new(0, 31));
        assert_eq!(world.block_at(VoxelPos::new(-1, 5, 0)), BlockId::AIR);
        assert_eq!(world.block_at(VoxelPos::new(0, 32, 0)), BlockId::AIR);
    }

    #[test]
    fn test_out_of_volume_writes_fail() {
        let mut world = GridWorld::new(4, 4, VerticalBounds::new(0, 31));
        let result = world.set_block(VoxelPos::new(0, -1, 0), BlockId::STONE);
        assert!(matches!(
            result,
            Err(NavError::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_fill_column_is_inclusive() {
        let mut world = GridWorld::new(2, 2, VerticalBounds::new(0, 15));
        world.fill_column(1, 1, 3, 5, BlockId::DIRT);
        assert_eq!(world.block_at(VoxelPos::new(1, 3, 1)), BlockId::DIRT);
        assert_eq!(world.block_at(VoxelPos::new(1, 5, 1)), BlockId::DIRT);
        assert_eq!(world.block_at(VoxelPos::new(1, 6, 1)), BlockId::AIR);
    }
}
