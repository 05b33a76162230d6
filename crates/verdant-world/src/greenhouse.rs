//! Greenhouse materials and enclosure detection.
//!
//! A greenhouse is found from a climate station: the first greenhouse block
//! touching the station picks the material, and a flood fill from the station
//! must then be fully enclosed by blocks of that material within a fixed
//! radius.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use verdant_common::{BlockPos, BoundingBox, Direction, GreenhouseError};

use crate::block::{BlockGetter, BlockState};
use crate::floodfill::{FloodFill, Region};

/// Default search radius around a climate station.
pub const DEFAULT_INFLATE_RADIUS: i32 = 15;
/// Largest accepted search radius. A 129-block cube caps one scan at about two million cells.
pub const MAX_INFLATE_RADIUS: i32 = 64;

/// Greenhouse building material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GreenhouseType {
    /// Treated wood frame.
    TreatedWood,
    /// Copper frame.
    Copper,
    /// Iron frame.
    Iron,
    /// Stainless steel frame.
    StainlessSteel,
}

impl GreenhouseType {
    /// All greenhouse types, weakest first.
    pub const ALL: [Self; 4] = [Self::TreatedWood, Self::Copper, Self::Iron, Self::StainlessSteel];

    /// Get the display name of this type.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::TreatedWood => "Treated Wood",
            Self::Copper => "Copper",
            Self::Iron => "Iron",
            Self::StainlessSteel => "Stainless Steel",
        }
    }

    /// Climate tier provided by this greenhouse. Crops need at least their own tier.
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::TreatedWood => 5,
            Self::Copper => 10,
            Self::Iron => 15,
            Self::StainlessSteel => 20,
        }
    }

    /// The greenhouse type a block belongs to, if any.
    #[must_use]
    pub const fn from_state(state: BlockState) -> Option<Self> {
        state.greenhouse_type()
    }

    /// Check if a block is part of a greenhouse of this type.
    #[must_use]
    pub fn is_member(self, state: BlockState) -> bool {
        state.greenhouse_type() == Some(self)
    }
}

/// An enclosed greenhouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreenhouseInfo {
    /// Wall material
    pub kind: GreenhouseType,
    /// Every enclosed position, including the climate station
    pub positions: Region,
}

impl GreenhouseInfo {
    /// Number of enclosed positions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Check if a position lies inside the greenhouse.
    #[must_use]
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.positions.contains(&pos)
    }

    /// Climate tier of the greenhouse.
    #[must_use]
    pub const fn tier(&self) -> u8 {
        self.kind.tier()
    }
}

/// Greenhouse detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Blocks searched in every direction from the climate station
    pub inflate_radius: i32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            inflate_radius: DEFAULT_INFLATE_RADIUS,
        }
    }
}

impl DetectorConfig {
    /// Clamp the radius to `0..=MAX_INFLATE_RADIUS`.
    pub fn validate(&mut self) {
        let clamped = self.inflate_radius.clamp(0, MAX_INFLATE_RADIUS);
        if clamped != self.inflate_radius {
            warn!(
                value = self.inflate_radius,
                max = MAX_INFLATE_RADIUS,
                "inflate_radius out of range, using {clamped}"
            );
            self.inflate_radius = clamped;
        }
    }
}

/// Finds the greenhouse enclosing a climate station.
#[derive(Debug, Clone, Default)]
pub struct GreenhouseDetector {
    config: DetectorConfig,
}

impl GreenhouseDetector {
    /// Creates a detector with the given configuration, clamping the radius.
    #[must_use]
    pub fn new(mut config: DetectorConfig) -> Self {
        config.validate();
        Self { config }
    }

    /// Returns the detector configuration.
    #[must_use]
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Finds the greenhouse around `origin`, or `None` if there is no enclosed one.
    ///
    /// `size_hint` is the size of the last region found here, if known.
    pub fn detect<W>(&self, world: &W, origin: BlockPos, size_hint: Option<usize>) -> Option<GreenhouseInfo>
    where
        W: BlockGetter + ?Sized,
    {
        self.try_detect(world, origin, size_hint).ok()
    }

    /// Like [`detect`](Self::detect), but reports why no greenhouse was found.
    ///
    /// Only the first adjacent greenhouse block (in [`Direction::ALL`] order) is
    /// considered; if its enclosure fails, other adjacent materials are not tried.
    pub fn try_detect<W>(
        &self,
        world: &W,
        origin: BlockPos,
        size_hint: Option<usize>,
    ) -> Result<GreenhouseInfo, GreenhouseError>
    where
        W: BlockGetter + ?Sized,
    {
        let kind = Direction::ALL
            .iter()
            .find_map(|&dir| GreenhouseType::from_state(world.block_state(origin.offset(dir))))
            .ok_or(GreenhouseError::NoMarker)?;

        let bounds = BoundingBox::from_pos(origin).inflated_by(self.config.inflate_radius);
        let positions = FloodFill::new(
            world,
            bounds,
            |state: BlockState| kind.is_member(state),
            |state: BlockState| !state.is_climate_station(),
        )
        .size_hint(size_hint)
        .directions(&Direction::NOT_DOWN)
        .run(origin)?;

        debug!(%origin, ?kind, size = positions.len(), "greenhouse detected");
        Ok(GreenhouseInfo { kind, positions })
    }
}
