//! Nutrient particle effects.
//!
//! When fertilizer is applied, each nutrient it carries produces a few
//! particles scattered through the planter block.

use crossbeam_channel::{bounded, Receiver, Sender};
use fastrand::Rng;
use glam::Vec3;
use verdant_common::BlockPos;

use crate::planter::{Fertilizer, NutrientType};

/// Maximum particles emitted per nutrient.
pub const MAX_PARTICLES_PER_NUTRIENT: u32 = 5;

/// Type of particle effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Nitrogen marker.
    Nitrogen,
    /// Phosphorus marker.
    Phosphorus,
    /// Potassium marker.
    Potassium,
}

impl From<NutrientType> for ParticleKind {
    fn from(kind: NutrientType) -> Self {
        match kind {
            NutrientType::Nitrogen => Self::Nitrogen,
            NutrientType::Phosphorus => Self::Phosphorus,
            NutrientType::Potassium => Self::Potassium,
        }
    }
}

/// A single particle spawn request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleEvent {
    /// Effect type
    pub kind: ParticleKind,
    /// World position
    pub position: Vec3,
    /// Number of particles
    pub count: u32,
}

/// Receiver of particle spawn requests.
pub trait ParticleEmitter {
    /// Spawn `count` particles of `kind` at `position`.
    fn emit(&mut self, kind: ParticleKind, position: Vec3, count: u32);
}

/// Channel that collects particle requests for the renderer.
#[derive(Debug)]
pub struct ParticleBus {
    /// Sender for emitted particles
    sender: Sender<ParticleEvent>,
    /// Receiver for collecting particles
    receiver: Receiver<ParticleEvent>,
}

impl Default for ParticleBus {
    fn default() -> Self {
        Self::new(256)
    }
}

impl ParticleBus {
    /// Creates a new bus holding at most `capacity` pending requests.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Drains all pending requests.
    pub fn drain(&self) -> Vec<ParticleEvent> {
        self.receiver.try_iter().collect()
    }

    /// Returns the number of pending requests.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}

impl ParticleEmitter for ParticleBus {
    fn emit(&mut self, kind: ParticleKind, position: Vec3, count: u32) {
        // Non-blocking; dropped when full
        let _ = self.sender.try_send(ParticleEvent { kind, position, count });
    }
}

/// Number of particles shown for a nutrient level.
#[must_use]
pub fn particle_count(level: f32) -> u32 {
    if level > 0.0 {
        (level * 10.0).clamp(1.0, MAX_PARTICLES_PER_NUTRIENT as f32) as u32
    } else {
        0
    }
}

/// Emit particles for each nutrient in `fertilizer`, scattered through the block at `pos`.
pub fn add_nutrient_particles<E>(emitter: &mut E, pos: BlockPos, fertilizer: &Fertilizer, rng: &mut Rng)
where
    E: ParticleEmitter + ?Sized,
{
    let base = Vec3::new(pos.x as f32, pos.y as f32, pos.z as f32);
    for nutrient in NutrientType::ALL {
        for _ in 0..particle_count(fertilizer.nutrient(nutrient)) {
            let offset = Vec3::new(rng.f32(), rng.f32(), rng.f32());
            emitter.emit(nutrient.into(), base + offset, 1);
        }
    }
}
