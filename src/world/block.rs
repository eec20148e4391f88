use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BlockId(pub u16);

// Safe because BlockId is just a u16
unsafe impl bytemuck::Pod for BlockId {}
unsafe impl bytemuck::Zeroable for BlockId {}

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockId::AIR => write!(f, "Air"),
            BlockId::STONE => write!(f, "Stone"),
            BlockId::GRASS => write!(f, "Grass"),
            BlockId::DIRT => write!(f, "Dirt"),
            BlockId::COBBLESTONE => write!(f, "Cobblestone"),
            BlockId::SAND => write!(f, "Sand"),
            BlockId::WATER => write!(f, "Water"),
            BlockId::WATER_FLOWING => write!(f, "Flowing Water"),
            BlockId::LAVA => write!(f, "Lava"),
            BlockId::LAVA_FLOWING => write!(f, "Flowing Lava"),
            BlockId::GLASS => write!(f, "Glass"),
            BlockId::TORCH => write!(f, "Torch"),
            BlockId::LADDER => write!(f, "Ladder"),
            BlockId::TALL_GRASS => write!(f, "Tall Grass"),
            BlockId::BEDROCK => write!(f, "Bedrock"),
            _ => write!(f, "Block({})", self.0),
        }
    }
}

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const STONE: BlockId = BlockId(1);
    pub const GRASS: BlockId = BlockId(2);
    pub const DIRT: BlockId = BlockId(3);
    pub const COBBLESTONE: BlockId = BlockId(4);
    pub const SAND: BlockId = BlockId(5);
    pub const WATER: BlockId = BlockId(6);
    pub const WATER_FLOWING: BlockId = BlockId(7);
    pub const LAVA: BlockId = BlockId(8);
    pub const LAVA_FLOWING: BlockId = BlockId(9);
    pub const GLASS: BlockId = BlockId(10);
    pub const TORCH: BlockId = BlockId(11);
    pub const LADDER: BlockId = BlockId(12);
    pub const TALL_GRASS: BlockId = BlockId(13);
    pub const BEDROCK: BlockId = BlockId(14);

    /// Create a new BlockId from a raw u16 value
    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }
}
