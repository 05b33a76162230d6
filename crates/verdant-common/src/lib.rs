//! # Verdant Common
//!
//! Common types shared by the Verdant crates:
//! - Block coordinates, directions, and bounding boxes
//! - Error types for region searches
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
}

pub use prelude::*;
