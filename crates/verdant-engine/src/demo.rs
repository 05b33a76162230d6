//! Headless greenhouse scenario.
//!
//! Builds a small greenhouse, lets the climate station find it, then replays
//! a long absence so the planter has to catch up.

use anyhow::{bail, Result};
use fastrand::Rng;
use tracing::info;
use verdant_common::{BlockPos, BoundingBox};
use verdant_gameplay::{
    add_nutrient_particles, plantables, ClimateStation, Fertilizer, GrowthSimulator, LargePlanter, ParticleBus,
    Planter, ServerCalendar, VerdantConfig,
};
use verdant_world::{BlockState, GreenhouseDetector, GreenhouseType, GridWorld};

/// Climate station position.
const STATION: BlockPos = BlockPos::new(0, 1, 0);
/// Planter position.
const PLANTER: BlockPos = BlockPos::new(2, 1, -2);
/// Days the player is away.
const DAYS_AWAY: i64 = 30;

/// Outcome of a scenario run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Enclosed greenhouse size in blocks
    pub greenhouse_size: usize,
    /// Growth per slot after catching up
    pub growth: Vec<f32>,
    /// Particle requests produced by fertilizing
    pub particles: usize,
}

/// Runs the scenario with the given configuration.
pub fn run(config: &VerdantConfig) -> Result<DemoReport> {
    let mut rng = config.seed.map_or_else(Rng::new, Rng::with_seed);

    let world = build_world();
    let mut station = ClimateStation::new(STATION, GreenhouseDetector::new(config.detector));
    let Some(greenhouse_size) = station.update(&world).map(|info| info.size()) else {
        bail!("demo greenhouse at {STATION} is not enclosed");
    };

    let mut planter = LargePlanter::new(4);
    planter.add_water(1.0);
    let fertilizer = Fertilizer::new(0.4, 0.2, 0.3);
    planter.fertilize(&fertilizer);
    planter.plant(0, plantables::lettuce());
    planter.plant(1, plantables::carrot());
    planter.plant(3, plantables::pineapple());
    station.apply([(PLANTER, &mut planter)]);

    let mut bus = ParticleBus::default();
    add_nutrient_particles(&mut bus, PLANTER, &fertilizer, &mut rng);
    let particles = bus.drain().len();

    let mut calendar = ServerCalendar::new();
    calendar.advance_days(DAYS_AWAY);
    let simulator = GrowthSimulator::new(config.growth);
    if !simulator.growth_tick(&mut planter, &calendar, &mut rng) {
        bail!("growth catch-up aborted");
    }

    let growth: Vec<f32> = (0..planter.slots()).map(|slot| planter.growth(slot)).collect();
    for (slot, value) in growth.iter().enumerate() {
        let crop = planter.plantable(slot).map_or("empty", |crop| crop.name.as_str());
        info!(slot, crop, growth = value, stage = ?planter.stage(slot), day = calendar.days(), "slot caught up");
    }
    info!(
        water = planter.water(),
        nutrients = ?planter.nutrients(),
        "planter reserves"
    );

    Ok(DemoReport {
        greenhouse_size,
        growth,
        particles,
    })
}

fn build_world() -> GridWorld {
    let mut world = GridWorld::new();
    world.fill(
        &BoundingBox::new(BlockPos::new(-8, -2, -8), BlockPos::new(8, -1, 8)),
        BlockState::Dirt,
    );
    let shell = BoundingBox::new(BlockPos::new(-4, 0, -4), BlockPos::new(4, 5, 4));
    world.hollow_box(&shell, BlockState::greenhouse_wall(GreenhouseType::Iron), BlockState::Air);
    for x in -4..=4 {
        world.set(BlockPos::new(x, 5, 0), BlockState::greenhouse_roof(GreenhouseType::Iron));
    }
    world.set(STATION, BlockState::ClimateStation);
    world.set(PLANTER, BlockState::LargePlanter);
    world
}
