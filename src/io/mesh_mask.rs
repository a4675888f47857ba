//! NEMO `mesh_mask.nc` reader.
//!
//! Loads the grid description a NEMO run writes alongside its output:
//! horizontal coordinates and cell sizes on the staggered T/U/V points,
//! 3D land/sea masks, and optionally initial depths, cell thicknesses
//! and bathymetry. Every quantity lands in a named, typed field of
//! [`MeshMask`]; source variable names resolve case-insensitively
//! through constant candidate tables.
//!
//! Land masking follows the crate's NaN convention: where the reversed
//! T-mask marks land, masked float fields are set to `f64::NAN`.
//!
//! # Example
//!
//! ```rust,ignore
//! use nemotools::io::{MeshMask, MeshMaskConfig};
//!
//! let config = MeshMaskConfig::new().with_depths(true);
//! let mesh = MeshMask::from_file("mesh_mask.nc", &config)?;
//! println!("{}", mesh.summary());
//! println!("{}", mesh.mask_statistics());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::grid::{reverse_mask, Array2, Array3, GridError};

/// Error type for mesh mask loading.
#[derive(Debug, Error)]
pub enum MeshMaskError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// NetCDF library error
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// None of the candidate variable names exist in the file
    #[error("missing variable: {0}")]
    MissingVariable(String),

    /// A field to be loaded or masked has an unusable number of dimensions
    #[error("unsupported number of dimensions (={ndims}) for variable `{name}`")]
    UnsupportedDimensionality { name: String, ndims: usize },

    /// Array construction or shape error
    #[error("array error: {0}")]
    Grid(#[from] GridError),
}

// Candidate source-variable names per grid quantity, tried in order and
// matched case-insensitively against the file's variables.
const XN_VARS: &[&str] = &["jpiglo"];
const YN_VARS: &[&str] = &["jpjglo"];
const ZN_VARS: &[&str] = &["jpkglo"];
const LON_T_VARS: &[&str] = &["glamt", "nav_lon"];
const LAT_T_VARS: &[&str] = &["gphit", "nav_lat"];
const X_LEN_T_VARS: &[&str] = &["e1t"];
const Y_LEN_T_VARS: &[&str] = &["e2t"];
const LON_U_VARS: &[&str] = &["glamu"];
const LAT_U_VARS: &[&str] = &["gphiu"];
const X_LEN_U_VARS: &[&str] = &["e1u"];
const Y_LEN_U_VARS: &[&str] = &["e2u"];
const LON_V_VARS: &[&str] = &["glamv"];
const LAT_V_VARS: &[&str] = &["gphiv"];
const X_LEN_V_VARS: &[&str] = &["e1v"];
const Y_LEN_V_VARS: &[&str] = &["e2v"];
const TMASK_VARS: &[&str] = &["tmask"];
const UMASK_VARS: &[&str] = &["umask"];
const VMASK_VARS: &[&str] = &["vmask"];
const H_VARS: &[&str] = &["hbatt"];
const H_IDX_VARS: &[&str] = &["mbathy"];
const DEPTH0_T_VARS: &[&str] = &["gdept_0"];
const DEPTH0_W_VARS: &[&str] = &["gdepw_0"];
const THICK0_T_VARS: &[&str] = &["e3t_0"];
const THICK0_U_VARS: &[&str] = &["e3u_0"];
const THICK0_V_VARS: &[&str] = &["e3v_0"];

/// Default bathymetry variable name in standalone bathymetry files.
pub const DEFAULT_BATHYMETRY_VAR: &str = "Bathymetry";

/// Staggered grid selector (Arakawa C-grid points).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    /// Tracer points (cell centers)
    T,
    /// Zonal velocity points (east cell faces)
    U,
    /// Meridional velocity points (north cell faces)
    V,
}

/// Configuration for [`MeshMask::from_file`].
#[derive(Debug, Clone)]
pub struct MeshMaskConfig {
    /// Load the initial cell depth fields (`gdept_0`, `gdepw_0`)
    pub load_depths: bool,
    /// Load the initial cell thickness fields (`e3t_0`, `e3u_0`, `e3v_0`)
    pub load_thicknesses: bool,
    /// Separate bathymetry file to read after the mesh mask
    pub bathymetry_file: Option<PathBuf>,
    /// Bathymetry variable name in that file
    pub bathymetry_var: String,
    /// Apply the land mask (as NaN fill) to bathymetry fields
    pub apply_mask: bool,
}

impl Default for MeshMaskConfig {
    fn default() -> Self {
        Self {
            load_depths: false,
            load_thicknesses: false,
            bathymetry_file: None,
            bathymetry_var: DEFAULT_BATHYMETRY_VAR.to_string(),
            apply_mask: true,
        }
    }
}

impl MeshMaskConfig {
    /// Create a config with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also load the initial depth fields.
    pub fn with_depths(mut self, load: bool) -> Self {
        self.load_depths = load;
        self
    }

    /// Also load the initial thickness fields.
    pub fn with_thicknesses(mut self, load: bool) -> Self {
        self.load_thicknesses = load;
        self
    }

    /// Read bathymetry from a separate file after loading the mesh mask.
    pub fn with_bathymetry(mut self, path: impl Into<PathBuf>) -> Self {
        self.bathymetry_file = Some(path.into());
        self
    }

    /// Override the bathymetry variable name.
    pub fn with_bathymetry_var(mut self, name: impl Into<String>) -> Self {
        self.bathymetry_var = name.into();
        self
    }

    /// Control land masking of loaded bathymetry fields.
    pub fn with_mask(mut self, apply: bool) -> Self {
        self.apply_mask = apply;
        self
    }
}

/// Grid description loaded from a NEMO mesh mask file.
///
/// Masks use the NEMO convention: 1 at sea points, 0 at land points.
/// The `*_2d` masks are the surface level of the corresponding 3D mask.
pub struct MeshMask {
    path: PathBuf,
    /// Grid size in x
    pub xn: usize,
    /// Grid size in y
    pub yn: usize,
    /// Number of vertical levels
    pub zn: usize,
    /// T-point longitudes
    pub lon_t: Array2<f64>,
    /// T-point latitudes
    pub lat_t: Array2<f64>,
    /// T-cell zonal size (m)
    pub x_len_t: Array2<f64>,
    /// T-cell meridional size (m)
    pub y_len_t: Array2<f64>,
    /// U-point longitudes
    pub lon_u: Array2<f64>,
    /// U-point latitudes
    pub lat_u: Array2<f64>,
    /// U-cell zonal size (m)
    pub x_len_u: Array2<f64>,
    /// U-cell meridional size (m)
    pub y_len_u: Array2<f64>,
    /// V-point longitudes
    pub lon_v: Array2<f64>,
    /// V-point latitudes
    pub lat_v: Array2<f64>,
    /// V-cell zonal size (m)
    pub x_len_v: Array2<f64>,
    /// V-cell meridional size (m)
    pub y_len_v: Array2<f64>,
    /// 3D T-point sea/land mask
    pub tmask_3d: Array3<u8>,
    /// Surface T-point mask
    pub tmask_2d: Array2<u8>,
    /// 3D U-point sea/land mask
    pub umask_3d: Array3<u8>,
    /// Surface U-point mask
    pub umask_2d: Array2<u8>,
    /// 3D V-point sea/land mask
    pub vmask_3d: Array3<u8>,
    /// Surface V-point mask
    pub vmask_2d: Array2<u8>,
    /// Bathymetry (m), NaN at land when masking is applied
    pub h: Option<Array2<f64>>,
    /// Index of the deepest wet level per column, NaN at land when masked
    pub h_idx: Option<Array2<f64>>,
    /// Initial T-point cell depths
    pub depth0_t: Option<Array3<f64>>,
    /// Initial W-point cell depths
    pub depth0_w: Option<Array3<f64>>,
    /// Initial T-point cell thicknesses
    pub thick0_t: Option<Array3<f64>>,
    /// Initial U-point cell thicknesses
    pub thick0_u: Option<Array3<f64>>,
    /// Initial V-point cell thicknesses
    pub thick0_v: Option<Array3<f64>>,
    /// Whether loaded bathymetry fields carry the NaN land fill
    pub mask_applied: bool,
}

impl MeshMask {
    /// Load a mesh mask file.
    pub fn from_file(
        path: impl AsRef<Path>,
        config: &MeshMaskConfig,
    ) -> Result<Self, MeshMaskError> {
        let path = path.as_ref().to_path_buf();
        let file = netcdf::open(&path)?;

        let tmask_3d = read_mask_3d(&file, TMASK_VARS)?;
        let umask_3d = read_mask_3d(&file, UMASK_VARS)?;
        let vmask_3d = read_mask_3d(&file, VMASK_VARS)?;
        let tmask_2d = tmask_3d.level(0);
        let umask_2d = umask_3d.level(0);
        let vmask_2d = vmask_3d.level(0);

        let (nz, ny, nx) = tmask_3d.shape();
        let xn = read_scalar(&file, XN_VARS, "x").unwrap_or(nx);
        let yn = read_scalar(&file, YN_VARS, "y").unwrap_or(ny);
        let zn = read_scalar(&file, ZN_VARS, "z").unwrap_or(nz);

        let mut mesh = Self {
            path,
            xn,
            yn,
            zn,
            lon_t: read_2d(&file, LON_T_VARS)?,
            lat_t: read_2d(&file, LAT_T_VARS)?,
            x_len_t: read_2d(&file, X_LEN_T_VARS)?,
            y_len_t: read_2d(&file, Y_LEN_T_VARS)?,
            lon_u: read_2d(&file, LON_U_VARS)?,
            lat_u: read_2d(&file, LAT_U_VARS)?,
            x_len_u: read_2d(&file, X_LEN_U_VARS)?,
            y_len_u: read_2d(&file, Y_LEN_U_VARS)?,
            lon_v: read_2d(&file, LON_V_VARS)?,
            lat_v: read_2d(&file, LAT_V_VARS)?,
            x_len_v: read_2d(&file, X_LEN_V_VARS)?,
            y_len_v: read_2d(&file, Y_LEN_V_VARS)?,
            tmask_3d,
            tmask_2d,
            umask_3d,
            umask_2d,
            vmask_3d,
            vmask_2d,
            h: None,
            h_idx: None,
            depth0_t: None,
            depth0_w: None,
            thick0_t: None,
            thick0_u: None,
            thick0_v: None,
            mask_applied: config.apply_mask,
        };

        // Bathymetry fields from the mesh mask itself, when present.
        if let Some(raw) = read_raw_optional(&file, H_VARS)? {
            let mut h = to_2d(raw, H_VARS[0])?;
            if mesh.mask_applied {
                mesh.apply_land_mask_2d(&mut h)?;
            }
            mesh.h = Some(h);
        }
        if let Some(raw) = read_raw_optional(&file, H_IDX_VARS)? {
            let mut h_idx = to_2d(raw, H_IDX_VARS[0])?;
            if mesh.mask_applied {
                mesh.apply_land_mask_2d(&mut h_idx)?;
            }
            mesh.h_idx = Some(h_idx);
        }
        drop(file);

        if config.load_depths {
            mesh.load_depths()?;
        }
        if config.load_thicknesses {
            mesh.load_thicknesses()?;
        }
        if let Some(ref bathy_path) = config.bathymetry_file {
            mesh.load_bathymetry(bathy_path, &config.bathymetry_var)?;
        }

        Ok(mesh)
    }

    /// Load the initial cell depth fields from the mesh mask file.
    pub fn load_depths(&mut self) -> Result<(), MeshMaskError> {
        let file = netcdf::open(&self.path)?;
        self.depth0_t = read_3d_optional(&file, DEPTH0_T_VARS)?;
        self.depth0_w = read_3d_optional(&file, DEPTH0_W_VARS)?;
        Ok(())
    }

    /// Load the initial cell thickness fields from the mesh mask file.
    pub fn load_thicknesses(&mut self) -> Result<(), MeshMaskError> {
        let file = netcdf::open(&self.path)?;
        self.thick0_t = read_3d_optional(&file, THICK0_T_VARS)?;
        self.thick0_u = read_3d_optional(&file, THICK0_U_VARS)?;
        self.thick0_v = read_3d_optional(&file, THICK0_V_VARS)?;
        Ok(())
    }

    /// Load bathymetry from a separate file.
    ///
    /// The field is always land-masked against the surface T-mask: an
    /// external bathymetry carries no mask of its own.
    pub fn load_bathymetry(
        &mut self,
        path: impl AsRef<Path>,
        var: &str,
    ) -> Result<(), MeshMaskError> {
        let file = netcdf::open(path)?;
        let names = [var];
        let raw = read_raw(&file, &names)?;
        let mut h = to_2d(raw, var)?;
        self.apply_land_mask_2d(&mut h)?;
        self.h = Some(h);
        Ok(())
    }

    /// Fill land cells of a 2D field with NaN, using the surface T-mask.
    pub fn apply_land_mask_2d(&self, field: &mut Array2<f64>) -> Result<(), MeshMaskError> {
        let (fy, fx) = field.shape();
        let (my, mx) = self.tmask_2d.shape();
        if (fy, fx) != (my, mx) {
            return Err(GridError::ShapeMismatch {
                expected: vec![my, mx],
                actual: vec![fy, fx],
            }
            .into());
        }
        let land = reverse_mask(&self.tmask_2d);
        for (v, &m) in field.as_mut_slice().iter_mut().zip(land.iter()) {
            if m == 1 {
                *v = f64::NAN;
            }
        }
        Ok(())
    }

    /// Fill land cells of a 3D field with NaN, using the 3D T-mask.
    pub fn apply_land_mask_3d(&self, field: &mut Array3<f64>) -> Result<(), MeshMaskError> {
        let (fz, fy, fx) = field.shape();
        let (mz, my, mx) = self.tmask_3d.shape();
        if (fz, fy, fx) != (mz, my, mx) {
            return Err(GridError::ShapeMismatch {
                expected: vec![mz, my, mx],
                actual: vec![fz, fy, fx],
            }
            .into());
        }
        let land = crate::grid::reverse_mask_3d(&self.tmask_3d);
        for (v, &m) in field.as_mut_slice().iter_mut().zip(land.iter()) {
            if m == 1 {
                *v = f64::NAN;
            }
        }
        Ok(())
    }

    /// Horizontal cell area (m²) on the requested staggered grid.
    pub fn area(&self, grid: GridKind) -> Result<Array2<f64>, GridError> {
        let (e1, e2) = match grid {
            GridKind::T => (&self.x_len_t, &self.y_len_t),
            GridKind::U => (&self.x_len_u, &self.y_len_u),
            GridKind::V => (&self.x_len_v, &self.y_len_v),
        };
        e1.zip_with(e2, |a, b| a * b)
    }

    /// Wet/dry cell counts for the surface T-mask.
    pub fn mask_statistics(&self) -> MaskStatistics {
        let total_cells = self.tmask_2d.len();
        let wet_cells = self.tmask_2d.iter().filter(|&&m| m == 1).count();
        MaskStatistics {
            total_cells,
            wet_cells,
            dry_cells: total_cells - wet_cells,
        }
    }

    /// One-line description of the loaded grid.
    pub fn summary(&self) -> String {
        let (min_lon, min_lat, max_lon, max_lat) = self.bbox();
        format!(
            "NEMO grid: {}x{}x{} cells, lon [{:.2}, {:.2}], lat [{:.2}, {:.2}], bathymetry: {}",
            self.xn,
            self.yn,
            self.zn,
            min_lon,
            max_lon,
            min_lat,
            max_lat,
            if self.h.is_some() { "yes" } else { "no" },
        )
    }

    /// Bounding box of the T-grid as (min_lon, min_lat, max_lon, max_lat).
    pub fn bbox(&self) -> (f64, f64, f64, f64) {
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        for &lo in self.lon_t.iter() {
            min_lon = min_lon.min(lo);
            max_lon = max_lon.max(lo);
        }
        for &la in self.lat_t.iter() {
            min_lat = min_lat.min(la);
            max_lat = max_lat.max(la);
        }
        (min_lon, min_lat, max_lon, max_lat)
    }
}

/// Statistics about the surface land/sea mask.
#[derive(Debug, Clone)]
pub struct MaskStatistics {
    /// Total number of surface cells
    pub total_cells: usize,
    /// Number of wet (sea) cells
    pub wet_cells: usize,
    /// Number of dry (land) cells
    pub dry_cells: usize,
}

impl fmt::Display for MaskStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mask Statistics:")?;
        writeln!(f, "  Total cells: {}", self.total_cells)?;
        writeln!(
            f,
            "  Wet cells: {} ({:.1}%)",
            self.wet_cells,
            100.0 * self.wet_cells as f64 / self.total_cells.max(1) as f64
        )?;
        write!(
            f,
            "  Dry cells: {} ({:.1}%)",
            self.dry_cells,
            100.0 * self.dry_cells as f64 / self.total_cells.max(1) as f64
        )
    }
}

/// Raw values and squeezed shape of one file variable.
struct RawField {
    values: Vec<f64>,
    shape: Vec<usize>,
}

/// Find a variable by candidate names, matched case-insensitively.
fn find_variable<'f>(file: &'f netcdf::File, candidates: &[&str]) -> Option<netcdf::Variable<'f>> {
    for candidate in candidates {
        for var in file.variables() {
            if var.name().eq_ignore_ascii_case(candidate) {
                return Some(var);
            }
        }
    }
    None
}

/// Drop length-1 dimensions, keeping at least one.
fn squeeze(dims: &[usize]) -> Vec<usize> {
    let kept: Vec<usize> = dims.iter().copied().filter(|&d| d != 1).collect();
    if kept.is_empty() {
        vec![1]
    } else {
        kept
    }
}

fn read_raw(file: &netcdf::File, candidates: &[&str]) -> Result<RawField, MeshMaskError> {
    read_raw_optional(file, candidates)?
        .ok_or_else(|| MeshMaskError::MissingVariable(candidates.join("/")))
}

fn read_raw_optional(
    file: &netcdf::File,
    candidates: &[&str],
) -> Result<Option<RawField>, MeshMaskError> {
    let Some(var) = find_variable(file, candidates) else {
        return Ok(None);
    };
    let values: Vec<f64> = var.get_values(..)?;
    let dims: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    Ok(Some(RawField {
        values,
        shape: squeeze(&dims),
    }))
}

fn to_2d(raw: RawField, name: &str) -> Result<Array2<f64>, MeshMaskError> {
    let RawField { values, shape } = raw;
    match shape[..] {
        [n_y, n_x] => Ok(Array2::from_flat(values, n_y, n_x)?),
        _ => Err(MeshMaskError::UnsupportedDimensionality {
            name: name.to_string(),
            ndims: shape.len(),
        }),
    }
}

fn to_3d(raw: RawField, name: &str) -> Result<Array3<f64>, MeshMaskError> {
    let RawField { values, shape } = raw;
    match shape[..] {
        [n_z, n_y, n_x] => Ok(Array3::from_flat(values, n_z, n_y, n_x)?),
        _ => Err(MeshMaskError::UnsupportedDimensionality {
            name: name.to_string(),
            ndims: shape.len(),
        }),
    }
}

fn read_2d(file: &netcdf::File, candidates: &[&str]) -> Result<Array2<f64>, MeshMaskError> {
    let raw = read_raw(file, candidates)?;
    to_2d(raw, candidates[0])
}

fn read_3d_optional(
    file: &netcdf::File,
    candidates: &[&str],
) -> Result<Option<Array3<f64>>, MeshMaskError> {
    match read_raw_optional(file, candidates)? {
        Some(raw) => Ok(Some(to_3d(raw, candidates[0])?)),
        None => Ok(None),
    }
}

fn read_mask_3d(file: &netcdf::File, candidates: &[&str]) -> Result<Array3<u8>, MeshMaskError> {
    let raw = read_raw(file, candidates)?;
    let field = to_3d(raw, candidates[0])?;
    Ok(field.map(|v| (v != 0.0) as u8))
}

/// Read a scalar size variable, falling back to a dimension length.
fn read_scalar(file: &netcdf::File, candidates: &[&str], dim_name: &str) -> Option<usize> {
    if let Some(var) = find_variable(file, candidates) {
        if let Ok(values) = var.get_values::<f64, _>(..) {
            if let Some(&v) = values.first() {
                return Some(v as usize);
            }
        }
    }
    file.dimension(dim_name).map(|d| d.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-built 2x3 grid with a land column at i=2 and 2 vertical levels.
    fn test_mesh() -> MeshMask {
        let n_y = 2;
        let n_x = 3;
        let lon = Array2::from_rows(&[vec![4.0, 4.1, 4.2], vec![4.0, 4.1, 4.2]]).unwrap();
        let lat = Array2::from_rows(&[vec![60.0, 60.0, 60.0], vec![60.1, 60.1, 60.1]]).unwrap();
        let e1 = Array2::filled(n_y, n_x, 1000.0);
        let e2 = Array2::filled(n_y, n_x, 2000.0);
        let tmask_3d =
            Array3::from_flat(vec![1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0], 2, n_y, n_x).unwrap();
        let tmask_2d = tmask_3d.level(0);

        MeshMask {
            path: PathBuf::from("test.nc"),
            xn: n_x,
            yn: n_y,
            zn: 2,
            lon_t: lon.clone(),
            lat_t: lat.clone(),
            x_len_t: e1.clone(),
            y_len_t: e2.clone(),
            lon_u: lon.clone(),
            lat_u: lat.clone(),
            x_len_u: e1.clone(),
            y_len_u: e2.clone(),
            lon_v: lon,
            lat_v: lat,
            x_len_v: e1,
            y_len_v: e2,
            tmask_3d: tmask_3d.clone(),
            tmask_2d: tmask_2d.clone(),
            umask_3d: tmask_3d.clone(),
            umask_2d: tmask_2d.clone(),
            vmask_3d: tmask_3d,
            vmask_2d: tmask_2d,
            h: None,
            h_idx: None,
            depth0_t: None,
            depth0_w: None,
            thick0_t: None,
            thick0_u: None,
            thick0_v: None,
            mask_applied: true,
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = MeshMaskConfig::new();
        assert!(!config.load_depths);
        assert!(!config.load_thicknesses);
        assert!(config.apply_mask);
        assert_eq!(config.bathymetry_var, "Bathymetry");
        assert!(config.bathymetry_file.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = MeshMaskConfig::new()
            .with_depths(true)
            .with_thicknesses(true)
            .with_bathymetry("bathy.nc")
            .with_bathymetry_var("elevation")
            .with_mask(false);
        assert!(config.load_depths);
        assert!(config.load_thicknesses);
        assert_eq!(config.bathymetry_var, "elevation");
        assert!(!config.apply_mask);
    }

    #[test]
    fn test_squeeze() {
        assert_eq!(squeeze(&[1, 2, 3, 4]), vec![2, 3, 4]);
        assert_eq!(squeeze(&[1, 1, 5]), vec![5]);
        assert_eq!(squeeze(&[2, 3]), vec![2, 3]);
        assert_eq!(squeeze(&[1, 1]), vec![1]);
    }

    #[test]
    fn test_to_2d_rejects_wrong_dimensionality() {
        let raw = RawField {
            values: vec![0.0; 8],
            shape: vec![2, 2, 2],
        };
        let err = to_2d(raw, "hbatt").unwrap_err();
        assert!(matches!(
            err,
            MeshMaskError::UnsupportedDimensionality { ndims: 3, .. }
        ));
    }

    #[test]
    fn test_area() {
        let mesh = test_mesh();
        let area = mesh.area(GridKind::T).unwrap();
        assert_eq!(area.get(0, 0), 2_000_000.0);
        assert_eq!(area.shape(), (2, 3));
        assert!(mesh.area(GridKind::U).is_ok());
        assert!(mesh.area(GridKind::V).is_ok());
    }

    #[test]
    fn test_apply_land_mask_2d() {
        let mesh = test_mesh();
        let mut field = Array2::filled(2, 3, 5.0);
        mesh.apply_land_mask_2d(&mut field).unwrap();
        assert_eq!(field.get(0, 0), 5.0);
        assert!(field.get(0, 2).is_nan());
        assert!(field.get(1, 2).is_nan());
    }

    #[test]
    fn test_apply_land_mask_2d_shape_mismatch() {
        let mesh = test_mesh();
        let mut field = Array2::filled(3, 3, 5.0);
        assert!(mesh.apply_land_mask_2d(&mut field).is_err());
    }

    #[test]
    fn test_apply_land_mask_3d() {
        let mesh = test_mesh();
        let mut field = Array3::filled(2, 2, 3, 1.5);
        mesh.apply_land_mask_3d(&mut field).unwrap();
        assert_eq!(field.get(0, 0, 0), 1.5);
        assert!(field.get(0, 0, 2).is_nan());
        // Level 1 has more land than the surface.
        assert!(field.get(1, 0, 1).is_nan());
        assert_eq!(field.get(1, 0, 0), 1.5);
    }

    #[test]
    fn test_mask_statistics() {
        let mesh = test_mesh();
        let stats = mesh.mask_statistics();
        assert_eq!(stats.total_cells, 6);
        assert_eq!(stats.wet_cells, 4);
        assert_eq!(stats.dry_cells, 2);
        let text = format!("{}", stats);
        assert!(text.contains("Wet cells: 4"));
    }

    #[test]
    fn test_summary_and_bbox() {
        let mesh = test_mesh();
        let (min_lon, min_lat, max_lon, max_lat) = mesh.bbox();
        assert_eq!(min_lon, 4.0);
        assert_eq!(max_lon, 4.2);
        assert_eq!(min_lat, 60.0);
        assert_eq!(max_lat, 60.1);
        let summary = mesh.summary();
        assert!(summary.contains("3x2x2"));
        assert!(summary.contains("bathymetry: no"));
    }
}
