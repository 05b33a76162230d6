//! Block states and read access to the world grid.

use serde::{Deserialize, Serialize};
use verdant_common::BlockPos;

use crate::greenhouse::GreenhouseType;

/// Structural role of a greenhouse block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GreenhousePart {
    /// Vertical wall panel.
    Wall,
    /// Sloped roof panel.
    Roof,
    /// Roof ridge.
    RoofTop,
    /// Door (either half).
    Door,
    /// Trapdoor, used as a flat ceiling.
    Trapdoor,
    /// Wall panel with a pipe port.
    Port,
}

/// State of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockState {
    /// Empty space.
    #[default]
    Air,
    /// Natural stone.
    Stone,
    /// Soil.
    Dirt,
    /// Plain glass (not part of any greenhouse).
    Glass,
    /// Water source.
    Water,
    /// Block that monitors and controls a greenhouse climate.
    ClimateStation,
    /// Multi-slot planter.
    LargePlanter,
    /// Any greenhouse building block.
    Greenhouse {
        /// Greenhouse material
        kind: GreenhouseType,
        /// Structural role
        part: GreenhousePart,
    },
}

impl BlockState {
    /// Shorthand for a greenhouse wall of the given kind.
    #[must_use]
    pub const fn greenhouse_wall(kind: GreenhouseType) -> Self {
        Self::Greenhouse {
            kind,
            part: GreenhousePart::Wall,
        }
    }

    /// Shorthand for a greenhouse roof panel of the given kind.
    #[must_use]
    pub const fn greenhouse_roof(kind: GreenhouseType) -> Self {
        Self::Greenhouse {
            kind,
            part: GreenhousePart::Roof,
        }
    }

    /// Check if this is empty space.
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Check if this is a climate station.
    #[must_use]
    pub const fn is_climate_station(self) -> bool {
        matches!(self, Self::ClimateStation)
    }

    /// Greenhouse material of this block, if it is a greenhouse block.
    #[must_use]
    pub const fn greenhouse_type(self) -> Option<GreenhouseType> {
        match self {
            Self::Greenhouse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Read-only access to block states.
pub trait BlockGetter {
    /// Returns the state of the block at `pos`.
    fn block_state(&self, pos: BlockPos) -> BlockState;
}

impl<F> BlockGetter for F
where
    F: Fn(BlockPos) -> BlockState,
{
    fn block_state(&self, pos: BlockPos) -> BlockState {
        self(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greenhouse_type_lookup() {
        let wall = BlockState::greenhouse_wall(GreenhouseType::Iron);
        assert_eq!(wall.greenhouse_type(), Some(GreenhouseType::Iron));
        assert_eq!(BlockState::Glass.greenhouse_type(), None);
        assert!(BlockState::default().is_air());
    }

    #[test]
    fn test_closure_block_getter() {
        let floor = |pos: BlockPos| {
            if pos.y < 0 {
                BlockState::Stone
            } else {
                BlockState::Air
            }
        };
        assert_eq!(floor.block_state(BlockPos::new(0, -1, 0)), BlockState::Stone);
        assert_eq!(floor.block_state(BlockPos::ORIGIN), BlockState::Air);
    }
}
