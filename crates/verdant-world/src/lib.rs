//! # Verdant World
//!
//! Read-side world model and region searches for Verdant.
//!
//! This crate handles:
//! - Block states and the `BlockGetter` accessor
//! - A sparse in-memory grid
//! - Bounded flood fills
//! - Greenhouse detection around climate stations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod block;
pub mod floodfill;
pub mod greenhouse;
pub mod grid;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::block::*;
    pub use crate::floodfill::*;
    pub use crate::greenhouse::*;
    pub use crate::grid::*;
}

pub use prelude::*;
