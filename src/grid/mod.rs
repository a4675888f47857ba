//! Core grid data model and algorithms.
//!
//! Provides:
//! - Dense 2D/3D array storage for grid quantities
//! - Land/sea mask algebra (mask reversal, flag-based mask construction)
//! - Nearest-neighbor lookup from geographic coordinates to grid indices

mod array;
mod mask;
mod nearest;

use thiserror::Error;

pub use array::{Array2, Array3};
pub use mask::{mask_from_array, mask_from_array_3d, reverse_mask, reverse_mask_3d};
pub use nearest::{nearest, nearest_point};

/// Error type for grid operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// Two arrays that must share a shape do not
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Flat data length does not match the requested shape
    #[error("data length {len} does not match shape (expected {expected} values)")]
    LengthMismatch { len: usize, expected: usize },

    /// Query coordinate sequences have different lengths
    #[error("query length mismatch: {lon} longitudes vs {lat} latitudes")]
    QueryLengthMismatch { lon: usize, lat: usize },

    /// Grid has no cells
    #[error("grid has no cells")]
    EmptyGrid,

    /// Query point set is empty
    #[error("query point set is empty")]
    EmptyQuery,
}
