//! Crop growth simulation for planters.
//!
//! Growth is simulated lazily: a planter remembers the last tick it was
//! simulated to, and each update replays the time since then in whole
//! update intervals followed by one partial interval. A planter that was
//! unloaded for a month catches up the same way as one updated every tick.
//!
//! Per step and slot:
//! - empty slots reset to zero growth
//! - planted slots always draw their primary nutrient
//! - growth is `U(min, max) * dt * growth_factor + consumed * bonus`, applied
//!   only while the planter is valid, and drains water when applied

use fastrand::Rng;
use tracing::{debug, trace, warn};

use crate::calendar::Calendar;
use crate::config::GrowthConfig;
use crate::planter::Planter;

/// Advances planters through time.
#[derive(Debug, Clone, Default)]
pub struct GrowthSimulator {
    config: GrowthConfig,
}

impl GrowthSimulator {
    /// Create a simulator with the given rates.
    #[must_use]
    pub fn new(mut config: GrowthConfig) -> Self {
        config.validate();
        Self { config }
    }

    /// Returns the growth rates in use.
    #[must_use]
    pub const fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Bring a planter up to the calendar's current tick.
    pub fn growth_tick<P, C>(&self, planter: &mut P, calendar: &C, rng: &mut Rng) -> bool
    where
        P: Planter + ?Sized,
        C: Calendar + ?Sized,
    {
        self.advance(planter, calendar.ticks(), rng)
    }

    /// Bring a planter up to `current_tick`.
    ///
    /// Whole update intervals are simulated first, then the remainder. If a
    /// step fails the remaining steps are skipped, but earlier steps stay
    /// applied. Returns whether every step succeeded.
    pub fn advance<P>(&self, planter: &mut P, current_tick: i64, rng: &mut Rng) -> bool
    where
        P: Planter + ?Sized,
    {
        let interval = self.config.update_interval.max(1);
        let first_tick = planter.last_update_tick();
        let mut last_tick = first_tick;
        let mut tick = first_tick.saturating_add(interval);
        let mut steps = 0_u64;

        while tick < current_tick {
            if !self.step(planter, last_tick, tick, rng) {
                warn!(from = last_tick, to = tick, steps, "growth step failed, catch-up aborted");
                return false;
            }
            steps += 1;
            last_tick = tick;
            tick = tick.saturating_add(interval);
        }

        let ok = last_tick >= current_tick || {
            steps += 1;
            self.step(planter, last_tick, current_tick, rng)
        };
        if steps > 1 {
            debug!(first_tick, current_tick, steps, "planter caught up");
        }
        ok
    }

    /// Simulate a single step from `from_tick` to `to_tick`.
    pub fn step<P>(&self, planter: &mut P, from_tick: i64, to_tick: i64, rng: &mut Rng) -> bool
    where
        P: Planter + ?Sized,
    {
        let tick_delta = (to_tick - from_tick) as f32;
        let growing = planter.check_valid();
        trace!(from_tick, to_tick, growing, "growth step");

        for slot in 0..planter.slots() {
            let Some(nutrient) = planter.plantable(slot).map(|crop| crop.primary_nutrient) else {
                planter.set_growth(slot, 0.0);
                continue;
            };

            // Crops draw nutrients whether or not they can grow.
            let consumed = planter
                .consume_nutrient_and_resupply_others(nutrient, self.config.nutrient_consumption * tick_delta);

            let total_delta = self.variance(rng) * tick_delta * self.config.growth_factor
                + consumed * self.config.nutrient_growth_bonus_factor;
            let mut growth = planter.growth(slot);

            if total_delta > 0.0 && growing {
                growth += total_delta.clamp(0.0, 1.0);
                planter.drain_water(tick_delta * self.config.nutrient_consumption);
            }

            planter.set_growth(slot, growth.clamp(0.0, 1.0));
        }

        planter.set_last_update_tick(to_tick);
        planter.mark_for_sync();
        true
    }

    fn variance(&self, rng: &mut Rng) -> f32 {
        let (min, max) = (self.config.growth_variance_min, self.config.growth_variance_max);
        min + rng.f32() * (max - min)
    }
}
