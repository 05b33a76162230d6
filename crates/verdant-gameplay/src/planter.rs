//! Planters, crops, and soil nutrients.
//!
//! This module provides:
//! - The three macro-nutrients and fertilizer readings
//! - Crop descriptors (`Plantable`)
//! - The `Planter` interface driven by the growth simulation
//! - `LargePlanter`, a multi-slot planter that lives inside a greenhouse

use serde::{Deserialize, Serialize};

/// Fraction of a consumed nutrient returned to each of the other two.
pub const DEFAULT_RESUPPLY_RATIO: f32 = 1.0 / 6.0;

/// Soil macro-nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientType {
    /// Nitrogen (N).
    Nitrogen,
    /// Phosphorus (P).
    Phosphorus,
    /// Potassium (K).
    Potassium,
}

impl NutrientType {
    /// All nutrients in N, P, K order.
    pub const ALL: [Self; 3] = [Self::Nitrogen, Self::Phosphorus, Self::Potassium];

    /// Index into an N, P, K array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Nitrogen => 0,
            Self::Phosphorus => 1,
            Self::Potassium => 2,
        }
    }
}

/// Nutrient content of a fertilizer item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fertilizer {
    /// Nitrogen supplied (0.0 to 1.0).
    pub nitrogen: f32,
    /// Phosphorus supplied (0.0 to 1.0).
    pub phosphorus: f32,
    /// Potassium supplied (0.0 to 1.0).
    pub potassium: f32,
}

impl Fertilizer {
    /// Create a fertilizer reading.
    #[must_use]
    pub const fn new(nitrogen: f32, phosphorus: f32, potassium: f32) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
        }
    }

    /// Get the amount of one nutrient.
    #[must_use]
    pub const fn nutrient(&self, kind: NutrientType) -> f32 {
        match kind {
            NutrientType::Nitrogen => self.nitrogen,
            NutrientType::Phosphorus => self.phosphorus,
            NutrientType::Potassium => self.potassium,
        }
    }
}

/// Read-only description of a crop species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plantable {
    /// Display name.
    pub name: String,
    /// Nutrient this crop draws from the soil.
    pub primary_nutrient: NutrientType,
    /// Number of visual growth stages.
    pub stages: u8,
    /// Minimum greenhouse tier needed to grow.
    pub tier: u8,
}

impl Plantable {
    /// Create a crop with four stages and no tier requirement.
    #[must_use]
    pub fn new(name: &str, primary_nutrient: NutrientType) -> Self {
        Self {
            name: name.to_string(),
            primary_nutrient,
            stages: 4,
            tier: 0,
        }
    }

    /// Set the number of visual growth stages.
    #[must_use]
    pub fn stages(mut self, stages: u8) -> Self {
        self.stages = stages.max(1);
        self
    }

    /// Set the minimum greenhouse tier.
    #[must_use]
    pub fn tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }
}

/// Built-in crops.
pub mod plantables {
    use super::{NutrientType, Plantable};

    /// Lettuce, a fast nitrogen feeder.
    #[must_use]
    pub fn lettuce() -> Plantable {
        Plantable::new("Lettuce", NutrientType::Nitrogen).stages(4).tier(5)
    }

    /// Tomato.
    #[must_use]
    pub fn tomato() -> Plantable {
        Plantable::new("Tomato", NutrientType::Potassium).stages(5).tier(10)
    }

    /// Carrot, a root crop.
    #[must_use]
    pub fn carrot() -> Plantable {
        Plantable::new("Carrot", NutrientType::Phosphorus).stages(5).tier(5)
    }

    /// Pineapple, needs a well-built greenhouse.
    #[must_use]
    pub fn pineapple() -> Plantable {
        Plantable::new("Pineapple", NutrientType::Potassium).stages(6).tier(15)
    }
}

/// A block entity holding crops in one or more slots.
///
/// The growth simulation only talks to planters through this trait.
pub trait Planter {
    /// Number of growth slots.
    fn slots(&self) -> usize;

    /// The crop in a slot, if any.
    fn plantable(&self, slot: usize) -> Option<&Plantable>;

    /// Growth of a slot (0.0 to 1.0).
    fn growth(&self, slot: usize) -> f32;

    /// Set the growth of a slot.
    fn set_growth(&mut self, slot: usize, growth: f32);

    /// Draw up to `amount` of one nutrient, replenishing the others.
    ///
    /// Returns the amount actually drawn.
    fn consume_nutrient_and_resupply_others(&mut self, kind: NutrientType, amount: f32) -> f32;

    /// Remove water from the planter.
    fn drain_water(&mut self, amount: f32);

    /// Whether crops in this planter may grow right now.
    fn check_valid(&self) -> bool;

    /// Tick up to which the planter has been simulated.
    fn last_update_tick(&self) -> i64;

    /// Record the tick up to which the planter has been simulated.
    fn set_last_update_tick(&mut self, tick: i64);

    /// Flag the planter for synchronisation to clients.
    fn mark_for_sync(&mut self);
}

/// One slot of a large planter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanterSlot {
    /// Planted crop.
    pub crop: Option<Plantable>,
    /// Growth (0.0 to 1.0).
    pub growth: f32,
}

/// Multi-slot planter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargePlanter {
    /// Growth slots.
    slots: Vec<PlanterSlot>,
    /// Nutrient reserves in N, P, K order (0.0 to 1.0 each).
    nutrients: [f32; 3],
    /// Water level (0.0 to 1.0).
    water: f32,
    /// Whether the planter sits in a working greenhouse.
    climate_valid: bool,
    /// Tier of the enclosing greenhouse.
    tier: u8,
    /// Fraction of consumed nutrients returned to the others.
    resupply_ratio: f32,
    /// Last simulated tick.
    last_update_tick: i64,
    /// Whether clients need an update.
    #[serde(skip)]
    needs_sync: bool,
}

impl LargePlanter {
    /// Create an empty, dry planter with the given number of slots.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self {
            slots: vec![PlanterSlot::default(); slots],
            nutrients: [0.0; 3],
            water: 0.0,
            climate_valid: false,
            tier: 0,
            resupply_ratio: DEFAULT_RESUPPLY_RATIO,
            last_update_tick: 0,
            needs_sync: false,
        }
    }

    /// Set the nutrient resupply ratio.
    #[must_use]
    pub fn with_resupply_ratio(mut self, ratio: f32) -> Self {
        self.resupply_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Start simulating from `tick`.
    #[must_use]
    pub fn placed_at(mut self, tick: i64) -> Self {
        self.last_update_tick = tick;
        self
    }

    /// Plant a crop in an empty slot.
    ///
    /// Returns false if the slot is occupied or out of range.
    pub fn plant(&mut self, slot: usize, crop: Plantable) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) if entry.crop.is_none() => {
                entry.crop = Some(crop);
                entry.growth = 0.0;
                self.needs_sync = true;
                true
            },
            _ => false,
        }
    }

    /// Harvest a fully grown crop, emptying the slot.
    pub fn harvest(&mut self, slot: usize) -> Option<Plantable> {
        let entry = self.slots.get_mut(slot)?;
        if entry.growth < 1.0 {
            return None;
        }
        let crop = entry.crop.take()?;
        entry.growth = 0.0;
        self.needs_sync = true;
        Some(crop)
    }

    /// Remove whatever is planted in a slot.
    pub fn remove(&mut self, slot: usize) -> Option<Plantable> {
        let crop = self.slots.get_mut(slot)?.crop.take();
        if crop.is_some() {
            self.needs_sync = true;
        }
        crop
    }

    /// Access a slot.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&PlanterSlot> {
        self.slots.get(slot)
    }

    /// Visual growth stage of a slot, if planted.
    #[must_use]
    pub fn stage(&self, slot: usize) -> Option<u8> {
        let entry = self.slots.get(slot)?;
        let crop = entry.crop.as_ref()?;
        let stage = (entry.growth * f32::from(crop.stages)) as u8;
        Some(stage.min(crop.stages.saturating_sub(1)))
    }

    /// Add fertilizer to the soil.
    pub fn fertilize(&mut self, fertilizer: &Fertilizer) {
        for kind in NutrientType::ALL {
            self.add_nutrient(kind, fertilizer.nutrient(kind));
        }
        self.needs_sync = true;
    }

    /// Get the reserve of one nutrient.
    #[must_use]
    pub const fn nutrient(&self, kind: NutrientType) -> f32 {
        self.nutrients[kind.index()]
    }

    /// Current nutrient reserves as a fertilizer reading.
    #[must_use]
    pub const fn nutrients(&self) -> Fertilizer {
        Fertilizer::new(self.nutrients[0], self.nutrients[1], self.nutrients[2])
    }

    /// Add water.
    pub fn add_water(&mut self, amount: f32) {
        self.water = (self.water + amount.max(0.0)).min(1.0);
    }

    /// Get the water level.
    #[must_use]
    pub const fn water(&self) -> f32 {
        self.water
    }

    /// Record the state of the enclosing greenhouse.
    pub fn set_climate(&mut self, valid: bool, tier: u8) {
        if self.climate_valid != valid || self.tier != tier {
            self.needs_sync = true;
        }
        self.climate_valid = valid;
        self.tier = tier;
    }

    /// Whether the planter is inside a working greenhouse.
    #[must_use]
    pub const fn is_climate_valid(&self) -> bool {
        self.climate_valid
    }

    /// Returns and clears the sync flag.
    pub fn take_sync(&mut self) -> bool {
        std::mem::take(&mut self.needs_sync)
    }

    fn add_nutrient(&mut self, kind: NutrientType, amount: f32) {
        let value = &mut self.nutrients[kind.index()];
        *value = (*value + amount).clamp(0.0, 1.0);
    }
}

impl Planter for LargePlanter {
    fn slots(&self) -> usize {
        self.slots.len()
    }

    fn plantable(&self, slot: usize) -> Option<&Plantable> {
        self.slots.get(slot)?.crop.as_ref()
    }

    fn growth(&self, slot: usize) -> f32 {
        self.slots.get(slot).map_or(0.0, |entry| entry.growth)
    }

    fn set_growth(&mut self, slot: usize, growth: f32) {
        if let Some(entry) = self.slots.get_mut(slot) {
            entry.growth = growth;
        }
    }

    fn consume_nutrient_and_resupply_others(&mut self, kind: NutrientType, amount: f32) -> f32 {
        let start = self.nutrient(kind);
        let consumed = start.min(amount.max(0.0));
        self.nutrients[kind.index()] = start - consumed;
        for other in NutrientType::ALL {
            if other != kind {
                self.add_nutrient(other, consumed * self.resupply_ratio);
            }
        }
        consumed
    }

    fn drain_water(&mut self, amount: f32) {
        self.water = (self.water - amount).max(0.0);
    }

    fn check_valid(&self) -> bool {
        self.climate_valid
            && self.water > 0.0
            && self
                .slots
                .iter()
                .filter_map(|entry| entry.crop.as_ref())
                .all(|crop| crop.tier <= self.tier)
    }

    fn last_update_tick(&self) -> i64 {
        self.last_update_tick
    }

    fn set_last_update_tick(&mut self, tick: i64) {
        self.last_update_tick = tick;
    }

    fn mark_for_sync(&mut self) {
        self.needs_sync = true;
    }
}
