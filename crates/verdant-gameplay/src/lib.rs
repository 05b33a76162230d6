//! # Verdant Gameplay
//!
//! Greenhouse farming systems for Verdant.
//!
//! This crate provides:
//! - Server calendar
//! - Planters, crops, and nutrients
//! - Tick-based crop growth with catch-up after long absences
//! - Climate stations that validate planters against their greenhouse
//! - Nutrient particle effects
//! - Configuration loading

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod calendar;
pub mod climate;
pub mod config;
pub mod growth;
pub mod particles;
pub mod planter;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calendar::*;
    pub use crate::climate::*;
    pub use crate::config::*;
    pub use crate::growth::*;
    pub use crate::particles::*;
    pub use crate::planter::*;
}

pub use prelude::*;
