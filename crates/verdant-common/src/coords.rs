//! Block coordinates, axis directions, and bounding boxes.

use serde::{Deserialize, Serialize};

/// Position of a single block in the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BlockPos {
    /// X coordinate (west to east)
    pub x: i32,
    /// Y coordinate (down to up)
    pub y: i32,
    /// Z coordinate (north to south)
    pub z: i32,
}

impl BlockPos {
    /// World origin.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the adjacent position in the given direction.
    #[must_use]
    pub const fn offset(self, direction: Direction) -> Self {
        self.relative(direction, 1)
    }

    /// Returns the position `distance` blocks away in the given direction.
    #[must_use]
    pub const fn relative(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy, dz) = direction.step();
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
            z: self.z + dz * distance,
        }
    }

    /// Returns the position above this one.
    #[must_use]
    pub const fn above(self) -> Self {
        self.offset(Direction::Up)
    }

    /// Returns the position below this one.
    #[must_use]
    pub const fn below(self) -> Self {
        self.offset(Direction::Down)
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six axis-aligned directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Negative Y.
    Down,
    /// Positive Y.
    Up,
    /// Negative Z.
    North,
    /// Positive Z.
    South,
    /// Negative X.
    West,
    /// Positive X.
    East,
}

impl Direction {
    /// All six directions in their fixed scan order.
    pub const ALL: [Self; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// Every direction except straight down.
    pub const NOT_DOWN: [Self; 5] = [Self::Up, Self::North, Self::South, Self::West, Self::East];

    /// The four horizontal directions.
    pub const HORIZONTAL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Unit step `(dx, dy, dz)` for this direction.
    #[must_use]
    pub const fn step(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Check if this is a horizontal direction.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Self::Up | Self::Down)
    }
}

/// Axis-aligned box of block positions, inclusive on both corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner (inclusive)
    pub min: BlockPos,
    /// Maximum corner (inclusive)
    pub max: BlockPos,
}

impl BoundingBox {
    /// Creates a box spanning two corners in any order.
    #[must_use]
    pub fn new(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// A 1x1x1 box holding a single position.
    #[must_use]
    pub const fn from_pos(pos: BlockPos) -> Self {
        Self { min: pos, max: pos }
    }

    /// Grows the box by `radius` blocks on every face, saturating at the i32 range.
    #[must_use]
    pub const fn inflated_by(self, radius: i32) -> Self {
        Self {
            min: BlockPos::new(
                self.min.x.saturating_sub(radius),
                self.min.y.saturating_sub(radius),
                self.min.z.saturating_sub(radius),
            ),
            max: BlockPos::new(
                self.max.x.saturating_add(radius),
                self.max.y.saturating_add(radius),
                self.max.z.saturating_add(radius),
            ),
        }
    }

    /// Number of blocks along X.
    #[must_use]
    pub const fn x_span(&self) -> u32 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Number of blocks along Y.
    #[must_use]
    pub const fn y_span(&self) -> u32 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Number of blocks along Z.
    #[must_use]
    pub const fn z_span(&self) -> u32 {
        self.max.z.abs_diff(self.min.z).saturating_add(1)
    }

    /// Total number of positions the box can hold, saturating at `usize::MAX`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        (self.x_span() as usize)
            .saturating_mul(self.y_span() as usize)
            .saturating_mul(self.z_span() as usize)
    }

    /// Check if a position lies inside the box.
    #[must_use]
    pub const fn contains(&self, pos: BlockPos) -> bool {
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }

    /// Iterates every position in the box, X fastest.
    pub fn positions(&self) -> impl Iterator<Item = BlockPos> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| {
            (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| BlockPos::new(x, y, z)))
        })
    }
}
