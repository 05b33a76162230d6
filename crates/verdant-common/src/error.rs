//! Error types for Verdant.

use thiserror::Error;

use crate::coords::BlockPos;

/// Reasons a bounded flood fill can fail.
///
/// Every variant means the same thing to a caller that only cares whether the
/// region is enclosed: no region was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FloodFillError {
    /// The start position did not pass the wall test.
    #[error("start position is not a wall")]
    OriginRejected,

    /// More positions were collected than the bounds can hold.
    #[error("region of {size} blocks exceeds bounds capacity {capacity}")]
    RegionTooLarge {
        /// Positions collected so far
        size: usize,
        /// Capacity of the bounding box
        capacity: usize,
    },

    /// An interior position was found outside the bounds.
    #[error("interior block at {pos} lies outside the bounds")]
    OutOfBounds {
        /// Offending position
        pos: BlockPos,
    },

    /// A position was neither a wall nor an interior block.
    #[error("block at {pos} is neither wall nor interior")]
    UnclassifiedCell {
        /// Offending position
        pos: BlockPos,
    },
}

/// Greenhouse detection errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GreenhouseError {
    /// No greenhouse block touches the origin.
    #[error("no greenhouse block adjacent to origin")]
    NoMarker,

    /// The region around the origin is not enclosed.
    #[error("greenhouse is not enclosed: {0}")]
    FloodFill(#[from] FloodFillError),
}

/// Result type alias for flood fills.
pub type FloodFillResult<T> = Result<T, FloodFillError>;
