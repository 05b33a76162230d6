//! Climate stations.
//!
//! A climate station periodically rescans its greenhouse and tells the
//! planters inside whether they have a working climate.

use tracing::info;
use verdant_common::BlockPos;
use verdant_world::{BlockGetter, GreenhouseDetector, GreenhouseInfo};

use crate::planter::LargePlanter;

/// A climate station and the greenhouse it last found.
#[derive(Debug, Clone)]
pub struct ClimateStation {
    /// Station position
    pos: BlockPos,
    /// Greenhouse finder
    detector: GreenhouseDetector,
    /// Greenhouse from the last scan
    greenhouse: Option<GreenhouseInfo>,
}

impl ClimateStation {
    /// Create a station at `pos` that has not scanned yet.
    #[must_use]
    pub fn new(pos: BlockPos, detector: GreenhouseDetector) -> Self {
        Self {
            pos,
            detector,
            greenhouse: None,
        }
    }

    /// Station position.
    #[must_use]
    pub const fn pos(&self) -> BlockPos {
        self.pos
    }

    /// Greenhouse from the last scan.
    #[must_use]
    pub fn greenhouse(&self) -> Option<&GreenhouseInfo> {
        self.greenhouse.as_ref()
    }

    /// Whether the last scan found an enclosed greenhouse.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.greenhouse.is_some()
    }

    /// Rescan the greenhouse. The previous region size sizes the new search.
    pub fn update<W>(&mut self, world: &W) -> Option<&GreenhouseInfo>
    where
        W: BlockGetter + ?Sized,
    {
        let size_hint = self.greenhouse.as_ref().map(GreenhouseInfo::size);
        let found = self.detector.detect(world, self.pos, size_hint);

        match (&self.greenhouse, &found) {
            (None, Some(info)) => {
                info!(pos = %self.pos, kind = info.kind.display_name(), size = info.size(), "greenhouse formed");
            },
            (Some(_), None) => info!(pos = %self.pos, "greenhouse broken"),
            _ => {},
        }

        self.greenhouse = found;
        self.greenhouse.as_ref()
    }

    /// Set the climate of each planter by whether it sits inside the greenhouse.
    ///
    /// Returns the number of planters inside.
    pub fn apply<'p, I>(&self, planters: I) -> usize
    where
        I: IntoIterator<Item = (BlockPos, &'p mut LargePlanter)>,
    {
        let mut inside = 0;
        for (pos, planter) in planters {
            match &self.greenhouse {
                Some(info) if info.contains(pos) => {
                    planter.set_climate(true, info.tier());
                    inside += 1;
                },
                _ => planter.set_climate(false, 0),
            }
        }
        inside
    }
}
