//! Nearest-neighbor lookup from geographic coordinates to grid indices.
//!
//! Works on curvilinear grids: the 2D latitude/longitude arrays are
//! flattened into a point cloud, indexed with a k-d tree, and each query
//! answered by straight-line Euclidean distance in (lat, lon) space.
//! This is not great-circle distance; for the small separations involved
//! in locating the closest cell the difference does not change the winner
//! on typical model grids.

use crate::grid::{Array2, GridError};
use crate::spatial::KdTree2;

/// Find the grid indices nearest to each query point.
///
/// `glon`/`glat` are 2D coordinate arrays of identical shape `(R, C)`;
/// `lon`/`lat` are query coordinates of equal length. Returns the row and
/// column index arrays of the closest grid point per query. The k-d tree
/// is rebuilt on every call; exactly equidistant grid points resolve to
/// the lowest row-major flat index.
///
/// # Example
///
/// ```
/// use nemotools::grid::{nearest, Array2};
///
/// let glat = Array2::from_rows(&[vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
/// let glon = Array2::from_rows(&[vec![0.0, 1.0], vec![0.0, 1.0]]).unwrap();
/// let (rows, cols) = nearest(&[1.0], &[1.0], &glon, &glat).unwrap();
/// assert_eq!((rows[0], cols[0]), (1, 1));
/// ```
pub fn nearest(
    lon: &[f64],
    lat: &[f64],
    glon: &Array2<f64>,
    glat: &Array2<f64>,
) -> Result<(Vec<usize>, Vec<usize>), GridError> {
    if glat.shape() != glon.shape() {
        let (gy, gx) = glat.shape();
        let (oy, ox) = glon.shape();
        return Err(GridError::ShapeMismatch {
            expected: vec![gy, gx],
            actual: vec![oy, ox],
        });
    }
    if glat.is_empty() {
        return Err(GridError::EmptyGrid);
    }
    if lon.len() != lat.len() {
        return Err(GridError::QueryLengthMismatch {
            lon: lon.len(),
            lat: lat.len(),
        });
    }
    if lon.is_empty() {
        return Err(GridError::EmptyQuery);
    }

    let points: Vec<[f64; 2]> = glat
        .iter()
        .zip(glon.iter())
        .map(|(&la, &lo)| [la, lo])
        .collect();
    let tree = KdTree2::build(&points);

    let (_, n_x) = glat.shape();
    let mut rows = Vec::with_capacity(lon.len());
    let mut cols = Vec::with_capacity(lon.len());
    for (&lo, &la) in lon.iter().zip(lat.iter()) {
        // The tree is non-empty here, so a winner always exists.
        if let Some((flat, _dist)) = tree.nearest([la, lo]) {
            rows.push(flat / n_x);
            cols.push(flat % n_x);
        }
    }
    Ok((rows, cols))
}

/// Scalar-query convenience wrapper around [`nearest`].
pub fn nearest_point(
    lon: f64,
    lat: f64,
    glon: &Array2<f64>,
    glat: &Array2<f64>,
) -> Result<(usize, usize), GridError> {
    let (rows, cols) = nearest(&[lon], &[lat], glon, glat)?;
    Ok((rows[0], cols[0]))
}
