//! File readers for model grid data.
//!
//! This module provides:
//! - **Mesh mask reader**: typed loading of NEMO `mesh_mask.nc` grid
//!   description files (requires `netcdf` feature)

#[cfg(feature = "netcdf")]
mod mesh_mask;

#[cfg(feature = "netcdf")]
pub use mesh_mask::{
    GridKind, MaskStatistics, MeshMask, MeshMaskConfig, MeshMaskError, DEFAULT_BATHYMETRY_VAR,
};
