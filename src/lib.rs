//! # nemotools
//!
//! Post-processing utilities for structured-grid NEMO ocean model output.
//!
//! This crate provides the building blocks for working with NEMO grids:
//! - Dense 2D/3D array storage for grid quantities
//! - Land/sea mask algebra (mask reversal, flag-based masks)
//! - Nearest-neighbor lookup from geographic coordinates to grid indices
//! - Typed loading of `mesh_mask.nc` grid description files (requires `netcdf` feature)
//!
//! # Example
//!
//! ```
//! use nemotools::grid::{nearest, Array2};
//!
//! let glat = Array2::from_rows(&[vec![60.0, 60.0], vec![60.1, 60.1]]).unwrap();
//! let glon = Array2::from_rows(&[vec![4.0, 4.1], vec![4.0, 4.1]]).unwrap();
//!
//! let (rows, cols) = nearest(&[4.09], &[60.11], &glon, &glat).unwrap();
//! assert_eq!((rows[0], cols[0]), (1, 1));
//! ```

pub mod grid;
pub mod io;
pub mod spatial;

// Re-export main types for convenience
pub use grid::{
    mask_from_array, mask_from_array_3d, nearest, nearest_point, reverse_mask, reverse_mask_3d,
    Array2, Array3, GridError,
};
#[cfg(feature = "netcdf")]
pub use io::{GridKind, MaskStatistics, MeshMask, MeshMaskConfig, MeshMaskError};
pub use spatial::KdTree2;
