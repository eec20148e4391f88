//! Block passability classification
//!
//! A single tabulated mapping from block type to how an agent's body relates
//! to it. The table is injectable so different world rule-sets can swap it
//! out; unknown block ids classify as solid so an agent is never placed
//! inside unmodeled material.

use crate::world::BlockId;
use std::collections::HashMap;

/// How an agent's body relates to a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passability {
    /// The agent's body can occupy the cell
    Passable,
    /// Occupiable but unsafe to be placed at or land beside
    Hazardous,
    /// Blocks occupancy
    Solid,
}

/// Tabulated block-type to passability mapping
///
/// Only non-solid entries are stored; every id absent from the table is
/// `Solid`. Classification is a pure function of the block id, never of
/// position or agent state.
pub struct PassabilityClassifier {
    table: HashMap<BlockId, Passability>,
}

impl PassabilityClassifier {
    /// Build a classifier from an explicit table
    pub fn new(table: HashMap<BlockId, Passability>) -> Self {
        Self { table }
    }

    /// Classify a block type; unregistered ids are `Solid`
    pub fn classify(&self, block: BlockId) -> Passability {
        self.table.get(&block).copied().unwrap_or(Passability::Solid)
    }

    /// Whether a cell counts toward an agent's clearance streak
    pub fn is_clear(&self, block: BlockId) -> bool {
        self.classify(block) == Passability::Passable
    }

    pub fn is_solid(&self, block: BlockId) -> bool {
        self.classify(block) == Passability::Solid
    }

    pub fn is_hazard(&self, block: BlockId) -> bool {
        self.classify(block) == Passability::Hazardous
    }
}

impl Default for PassabilityClassifier {
    fn default() -> Self {
        let mut table = HashMap::new();
        for block in [
            BlockId::AIR,
            BlockId::WATER,
            BlockId::WATER_FLOWING,
            BlockId::TORCH,
            BlockId::LADDER,
            BlockId::TALL_GRASS,
        ] {
            table.insert(block, Passability::Passable);
        }
        table.insert(BlockId::LAVA, Passability::Hazardous);
        table.insert(BlockId::LAVA_FLOWING, Passability::Hazardous);
        Self { table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_pure() {
        let rules = PassabilityClassifier::default();
        assert_eq!(rules.classify(BlockId::WATER), rules.classify(BlockId::WATER));
        assert_eq!(rules.classify(BlockId::AIR), Passability::Passable);
        assert_eq!(rules.classify(BlockId::STONE), Passability::Solid);
    }

    #[test]
    fn test_unregistered_ids_are_solid() {
        let rules = PassabilityClassifier::default();
        assert_eq!(rules.classify(BlockId::new(4096)), Passability::Solid);
        assert_eq!(rules.classify(BlockId::new(u16::MAX)), Passability::Solid);
    }

    #[test]
    fn test_both_lava_variants_are_hazardous() {
        let rules = PassabilityClassifier::default();
        assert!(rules.is_hazard(BlockId::LAVA));
        assert!(rules.is_hazard(BlockId::LAVA_FLOWING));
        // Hazardous cells do not count toward clearance streaks
        assert!(!rules.is_clear(BlockId::LAVA));
        assert!(!rules.is_solid(BlockId::LAVA));
    }

    #[test]
    fn test_custom_table_overrides_default() {
        let mut table = HashMap::new();
        table.insert(BlockId::STONE, Passability::Passable);
        let rules = PassabilityClassifier::new(table);
        assert!(rules.is_clear(BlockId::STONE));
        // AIR is absent from the custom table, so it falls back to Solid
        assert!(rules.is_solid(BlockId::AIR));
    }
}
