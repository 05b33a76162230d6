//! Bounded flood fill over the block grid.
//!
//! A fill starts at one position and spreads through blocks that pass the
//! interior test, stopping at blocks that pass the wall test. The search gives
//! up entirely (no partial region) if it meets a block that is neither, if an
//! interior block lies outside the bounds, or if it collects more positions
//! than the bounds can hold.

use ahash::AHashSet;
use tracing::debug;
use verdant_common::{BlockPos, BoundingBox, Direction, FloodFillError, FloodFillResult};

use crate::block::{BlockGetter, BlockState};

/// Set of positions found by a successful fill.
pub type Region = AHashSet<BlockPos>;

/// A configured flood fill, reusable across start positions.
///
/// ```
/// use verdant_common::{BlockPos, BoundingBox, Direction};
/// use verdant_world::{BlockState, FloodFill, GridWorld};
///
/// let mut world = GridWorld::filled_with(BlockState::Stone);
/// world.set(BlockPos::ORIGIN, BlockState::Air);
/// world.set(BlockPos::new(1, 0, 0), BlockState::Air);
///
/// let bounds = BoundingBox::from_pos(BlockPos::ORIGIN).inflated_by(2);
/// let is_wall = |s: BlockState| s == BlockState::Stone;
/// let is_inside = |s: BlockState| s.is_air();
/// let region = FloodFill::new(&world, bounds, is_wall, is_inside)
///     .directions(&Direction::NOT_DOWN)
///     .run(BlockPos::ORIGIN)
///     .expect("enclosed");
/// assert_eq!(region.len(), 2);
/// ```
pub struct FloodFill<'a, W: ?Sized, F, G> {
    /// Grid being searched
    world: &'a W,
    /// Search limits
    bounds: BoundingBox,
    /// Blocks that stop the fill
    wall: F,
    /// Blocks that join the fill
    interior: G,
    /// Whether the start must itself be a wall
    test_origin: bool,
    /// Expected region size, used to pre-size the result
    size_hint: Option<usize>,
    /// Directions to expand in
    directions: &'a [Direction],
}

impl<'a, W, F, G> FloodFill<'a, W, F, G>
where
    W: BlockGetter + ?Sized,
    F: Fn(BlockState) -> bool,
    G: Fn(BlockState) -> bool,
{
    /// Creates a fill over `world` limited to `bounds`, expanding in all six directions.
    pub fn new(world: &'a W, bounds: BoundingBox, wall: F, interior: G) -> Self {
        Self {
            world,
            bounds,
            wall,
            interior,
            test_origin: false,
            size_hint: None,
            directions: &Direction::ALL,
        }
    }

    /// Require the start position to pass the wall test.
    #[must_use]
    pub fn test_origin(mut self, test_origin: bool) -> Self {
        self.test_origin = test_origin;
        self
    }

    /// Pre-size the result for an expected region size.
    #[must_use]
    pub fn size_hint(mut self, size_hint: Option<usize>) -> Self {
        self.size_hint = size_hint;
        self
    }

    /// Restrict the directions the fill expands in.
    #[must_use]
    pub fn directions(mut self, directions: &'a [Direction]) -> Self {
        self.directions = directions;
        self
    }

    /// Runs the fill from `start`.
    ///
    /// On success the region always contains `start`.
    pub fn run(&self, start: BlockPos) -> FloodFillResult<Region> {
        let result = self.search(start);
        if let Err(err) = &result {
            debug!(%start, %err, "flood fill failed");
        }
        result
    }

    fn search(&self, start: BlockPos) -> FloodFillResult<Region> {
        if self.test_origin && !(self.wall)(self.world.block_state(start)) {
            return Err(FloodFillError::OriginRejected);
        }

        let capacity = self.bounds.capacity();
        let mut filled = match self.size_hint {
            Some(hint) => Region::with_capacity(hint.min(capacity)),
            None => Region::default(),
        };
        let mut stack = vec![start];
        filled.insert(start);

        while let Some(pos) = stack.pop() {
            if filled.len() > capacity {
                return Err(FloodFillError::RegionTooLarge {
                    size: filled.len(),
                    capacity,
                });
            }
            for &direction in self.directions {
                let next = pos.offset(direction);
                if filled.contains(&next) {
                    continue;
                }
                let state = self.world.block_state(next);
                if (self.wall)(state) {
                    continue;
                }
                if !(self.interior)(state) {
                    return Err(FloodFillError::UnclassifiedCell { pos: next });
                }
                if !self.bounds.contains(next) {
                    return Err(FloodFillError::OutOfBounds { pos: next });
                }
                filled.insert(next);
                stack.push(next);
            }
        }

        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridWorld;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::collections::{HashSet, VecDeque};

    fn is_stone(state: BlockState) -> bool {
        state == BlockState::Stone
    }

    fn is_air(state: BlockState) -> bool {
        state.is_air()
    }

    /// Stone world with a hollow air room spanning `min..=max`.
    fn room(min: BlockPos, max: BlockPos) -> GridWorld {
        let mut world = GridWorld::filled_with(BlockState::Stone);
        world.fill(&BoundingBox::new(min, max), BlockState::Air);
        world
    }

    #[test]
    fn test_origin_rejected() {
        let world = room(BlockPos::ORIGIN, BlockPos::new(2, 2, 2));
        let bounds = BoundingBox::from_pos(BlockPos::ORIGIN).inflated_by(5);
        let result = FloodFill::new(&world, bounds, is_stone, is_air)
            .test_origin(true)
            .run(BlockPos::new(1, 1, 1));
        assert_eq!(result, Err(FloodFillError::OriginRejected));
    }

    #[test]
    fn test_rejected_origin_reads_only_start() {
        let start = BlockPos::new(1, 1, 1);
        let reads = RefCell::new(Vec::new());
        let world = |pos: BlockPos| {
            reads.borrow_mut().push(pos);
            BlockState::Air
        };
        let bounds = BoundingBox::from_pos(start).inflated_by(5);
        let result = FloodFill::new(&world, bounds, is_stone, is_air)
            .test_origin(true)
            .run(start);
        assert_eq!(result, Err(FloodFillError::OriginRejected));
        assert_eq!(*reads.borrow(), vec![start]);
    }

    #[test]
    fn test_origin_wall_accepted() {
        let world = room(BlockPos::ORIGIN, BlockPos::new(2, 2, 2));
        let bounds = BoundingBox::from_pos(BlockPos::ORIGIN).inflated_by(5);
        let start = BlockPos::new(-1, 1, 1);
        let region = FloodFill::new(&world, bounds, is_stone, is_air)
            .test_origin(true)
            .run(start)
            .expect("room is enclosed");
        assert_eq!(region.len(), 27 + 1);
        assert!(region.contains(&start));
    }

    #[test]
    fn test_enclosed_room() {
        let world = room(BlockPos::ORIGIN, BlockPos::new(3, 2, 4));
        let bounds = BoundingBox::from_pos(BlockPos::ORIGIN).inflated_by(10);
        let region = FloodFill::new(&world, bounds, is_stone, is_air)
            .run(BlockPos::new(1, 1, 1))
            .expect("room is enclosed");
        assert_eq!(region.len(), 4 * 3 * 5);
        assert!(region.iter().all(|pos| bounds.contains(*pos)));
    }

    #[test]
    fn test_region_leaking_out_of_bounds() {
        let world = room(BlockPos::new(-2, -2, -2), BlockPos::new(2, 2, 2));
        let bounds = BoundingBox::from_pos(BlockPos::ORIGIN);
        let result = FloodFill::new(&world, bounds, is_stone, is_air).run(BlockPos::ORIGIN);
        assert!(matches!(result, Err(FloodFillError::OutOfBounds { .. })));
    }

    #[test]
    fn test_unclassified_block_fails() {
        let mut world = room(BlockPos::ORIGIN, BlockPos::new(4, 0, 0));
        world.set(BlockPos::new(3, 0, 0), BlockState::Water);
        let bounds = BoundingBox::from_pos(BlockPos::ORIGIN).inflated_by(5);
        let result = FloodFill::new(&world, bounds, is_stone, is_air).run(BlockPos::ORIGIN);
        assert_eq!(
            result,
            Err(FloodFillError::UnclassifiedCell {
                pos: BlockPos::new(3, 0, 0)
            })
        );
    }

    #[test]
    fn test_region_too_large() {
        // Start outside the bounds so the region can outgrow them.
        let world = room(BlockPos::ORIGIN, BlockPos::new(1, 0, 0));
        let bounds = BoundingBox::from_pos(BlockPos::new(1, 0, 0));
        let result = FloodFill::new(&world, bounds, is_stone, is_air).run(BlockPos::ORIGIN);
        assert_eq!(
            result,
            Err(FloodFillError::RegionTooLarge {
                size: 2,
                capacity: 1
            })
        );
    }

    #[test]
    fn test_not_down_skips_floor_hole() {
        let mut world = room(BlockPos::ORIGIN, BlockPos::new(2, 1, 2));
        // An open shaft under the room that leaves the bounds.
        for y in -20..0 {
            world.set(BlockPos::new(1, y, 1), BlockState::Air);
        }
        let bounds = BoundingBox::from_pos(BlockPos::ORIGIN).inflated_by(4);

        let all = FloodFill::new(&world, bounds, is_stone, is_air).run(BlockPos::new(1, 1, 1));
        assert!(matches!(all, Err(FloodFillError::OutOfBounds { .. })));

        let region = FloodFill::new(&world, bounds, is_stone, is_air)
            .directions(&Direction::NOT_DOWN)
            .run(BlockPos::new(1, 1, 1))
            .expect("downward leak is ignored");
        // Only the starting layer is reachable without stepping down.
        assert_eq!(region.len(), 9);
        assert!(region.iter().all(|pos| pos.y == 1));
    }

    #[test]
    fn test_size_hint_does_not_change_region() {
        let world = room(BlockPos::ORIGIN, BlockPos::new(3, 3, 3));
        let bounds = BoundingBox::from_pos(BlockPos::ORIGIN).inflated_by(6);
        let fill = FloodFill::new(&world, bounds, is_stone, is_air);
        let plain = fill.run(BlockPos::new(2, 2, 2)).expect("enclosed");
        let hinted = FloodFill::new(&world, bounds, is_stone, is_air)
            .size_hint(Some(plain.len()))
            .run(BlockPos::new(2, 2, 2))
            .expect("enclosed");
        assert_eq!(plain, hinted);
    }

    const SIDE: i32 = 6;

    /// Stone world whose `SIDE`-cube at the origin is filled from `cells`
    /// (0 = air, 1 = stone, 2 = water).
    fn world_from(cells: &[u8]) -> GridWorld {
        let mut world = GridWorld::filled_with(BlockState::Stone);
        let bounds = BoundingBox::new(BlockPos::ORIGIN, BlockPos::new(SIDE - 1, SIDE - 1, SIDE - 1));
        for (pos, cell) in bounds.positions().zip(cells) {
            let state = match cell {
                0 => BlockState::Air,
                1 => BlockState::Stone,
                _ => BlockState::Water,
            };
            world.set(pos, state);
        }
        world
    }

    /// Plain breadth-first reachability through air, reporting whether water was touched.
    fn reference_fill(world: &GridWorld, start: BlockPos) -> (HashSet<BlockPos>, bool) {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut touched_water = false;
        while let Some(pos) = queue.pop_front() {
            for dir in Direction::ALL {
                let next = pos.offset(dir);
                match world.block_state(next) {
                    BlockState::Air if seen.insert(next) => queue.push_back(next),
                    BlockState::Water if !seen.contains(&next) => touched_water = true,
                    _ => {},
                }
            }
        }
        (seen, touched_water)
    }

    proptest! {
        #[test]
        fn prop_fill_matches_reachability(
            cells in proptest::collection::vec(prop_oneof![6 => Just(0u8), 3 => Just(1u8), 1 => Just(2u8)], (SIDE * SIDE * SIDE) as usize),
            sx in 0..SIDE, sy in 0..SIDE, sz in 0..SIDE,
        ) {
            let world = world_from(&cells);
            let start = BlockPos::new(sx, sy, sz);
            let bounds = BoundingBox::new(BlockPos::ORIGIN, BlockPos::new(SIDE - 1, SIDE - 1, SIDE - 1));
            let fill = FloodFill::new(&world, bounds, is_stone, is_air);

            let (expected, touched_water) = reference_fill(&world, start);
            match fill.run(start) {
                Ok(region) => {
                    prop_assert!(!touched_water);
                    prop_assert!(region.len() <= bounds.capacity());
                    prop_assert!(region.contains(&start));
                    let region: HashSet<BlockPos> = region.into_iter().collect();
                    prop_assert_eq!(region, expected);
                },
                Err(err) => {
                    prop_assert!(touched_water);
                    let is_unclassified = matches!(err, FloodFillError::UnclassifiedCell { .. });
                    prop_assert!(is_unclassified);
                },
            }
        }

        #[test]
        fn prop_fill_is_idempotent(
            cells in proptest::collection::vec(prop_oneof![Just(0u8), Just(1u8)], (SIDE * SIDE * SIDE) as usize),
            sx in 0..SIDE, sy in 0..SIDE, sz in 0..SIDE,
        ) {
            let world = world_from(&cells);
            let bounds = BoundingBox::from_pos(BlockPos::new(2, 2, 2)).inflated_by(2);
            let fill = FloodFill::new(&world, bounds, is_stone, is_air).directions(&Direction::NOT_DOWN);
            let start = BlockPos::new(sx, sy, sz);
            prop_assert_eq!(fill.run(start), fill.run(start));
        }
    }
}
