//! Sparse in-memory block grid.

use ahash::AHashMap;
use verdant_common::{BlockPos, BoundingBox};

use crate::block::{BlockGetter, BlockState};

/// A sparse world of blocks. Positions never set read back as `default_state`.
#[derive(Debug, Clone, Default)]
pub struct GridWorld {
    /// Explicitly placed blocks
    blocks: AHashMap<BlockPos, BlockState>,
    /// State reported for unset positions
    default_state: BlockState,
}

impl GridWorld {
    /// Creates an empty world filled with air.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty world where unset positions report `state`.
    #[must_use]
    pub fn filled_with(state: BlockState) -> Self {
        Self {
            default_state: state,
            ..Self::default()
        }
    }

    /// Returns the number of explicitly placed blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if no block has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Sets the block at `pos`, returning the previous state.
    pub fn set(&mut self, pos: BlockPos, state: BlockState) -> BlockState {
        if state == self.default_state {
            self.blocks.remove(&pos).unwrap_or(self.default_state)
        } else {
            self.blocks.insert(pos, state).unwrap_or(self.default_state)
        }
    }

    /// Fills every position in `bounds` with `state`.
    pub fn fill(&mut self, bounds: &BoundingBox, state: BlockState) {
        for pos in bounds.positions() {
            self.set(pos, state);
        }
    }

    /// Sets the six faces of `bounds` to `shell` and everything inside to `inside`.
    pub fn hollow_box(&mut self, bounds: &BoundingBox, shell: BlockState, inside: BlockState) {
        for pos in bounds.positions() {
            let on_face = pos.x == bounds.min.x
                || pos.x == bounds.max.x
                || pos.y == bounds.min.y
                || pos.y == bounds.max.y
                || pos.z == bounds.min.z
                || pos.z == bounds.max.z;
            self.set(pos, if on_face { shell } else { inside });
        }
    }
}

impl BlockGetter for GridWorld {
    fn block_state(&self, pos: BlockPos) -> BlockState {
        self.blocks.get(&pos).copied().unwrap_or(self.default_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_reads_default() {
        let world = GridWorld::filled_with(BlockState::Stone);
        assert_eq!(world.block_state(BlockPos::new(5, 5, 5)), BlockState::Stone);
        assert!(world.is_empty());
    }

    #[test]
    fn test_set_returns_previous() {
        let mut world = GridWorld::new();
        let pos = BlockPos::new(1, 2, 3);
        assert_eq!(world.set(pos, BlockState::Dirt), BlockState::Air);
        assert_eq!(world.set(pos, BlockState::Air), BlockState::Dirt);
        assert!(world.is_empty());
    }

    #[test]
    fn test_hollow_box() {
        let mut world = GridWorld::new();
        let bounds = BoundingBox::new(BlockPos::ORIGIN, BlockPos::new(2, 2, 2));
        world.hollow_box(&bounds, BlockState::Glass, BlockState::Water);

        assert_eq!(world.block_state(BlockPos::new(1, 1, 1)), BlockState::Water);
        assert_eq!(world.block_state(BlockPos::new(0, 1, 1)), BlockState::Glass);
        assert_eq!(world.len(), 27);
    }
}
