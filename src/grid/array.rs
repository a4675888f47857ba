//! Dense array storage for grid quantities.
//!
//! Grid fields are stored flat in row-major order: `data[j * n_x + i]` for
//! row `j`, column `i`, with a leading level dimension for 3D fields
//! (`data[(k * n_y + j) * n_x + i]`). Flat storage keeps loaded fields
//! contiguous and makes row-major unraveling of flat indices trivial.

use crate::grid::GridError;

/// 2D array with shape `(n_y, n_x)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    n_y: usize,
    n_x: usize,
}

impl<T: Copy> Array2<T> {
    /// Create an array filled with a constant value.
    pub fn filled(n_y: usize, n_x: usize, value: T) -> Self {
        Self {
            data: vec![value; n_y * n_x],
            n_y,
            n_x,
        }
    }

    /// Create an array from flat row-major data.
    pub fn from_flat(data: Vec<T>, n_y: usize, n_x: usize) -> Result<Self, GridError> {
        if data.len() != n_y * n_x {
            return Err(GridError::LengthMismatch {
                len: data.len(),
                expected: n_y * n_x,
            });
        }
        Ok(Self { data, n_y, n_x })
    }

    /// Create an array from nested rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, GridError> {
        let n_y = rows.len();
        let n_x = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_y * n_x);
        for row in rows {
            if row.len() != n_x {
                return Err(GridError::LengthMismatch {
                    len: row.len(),
                    expected: n_x,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, n_y, n_x })
    }

    /// Shape as `(n_y, n_x)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_y, self.n_x)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at row `j`, column `i`.
    #[inline]
    pub fn get(&self, j: usize, i: usize) -> T {
        self.data[j * self.n_x + i]
    }

    /// Set the value at row `j`, column `i`.
    #[inline]
    pub fn set(&mut self, j: usize, i: usize, value: T) {
        self.data[j * self.n_x + i] = value;
    }

    /// Flat row-major view of the data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat row-major view of the data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Apply a function elementwise, producing a new array.
    pub fn map<U: Copy, F: Fn(T) -> U>(&self, f: F) -> Array2<U> {
        Array2 {
            data: self.data.iter().map(|&v| f(v)).collect(),
            n_y: self.n_y,
            n_x: self.n_x,
        }
    }

    /// Combine two arrays elementwise. Shapes must match.
    pub fn zip_with<U: Copy, V: Copy, F>(
        &self,
        other: &Array2<U>,
        f: F,
    ) -> Result<Array2<V>, GridError>
    where
        F: Fn(T, U) -> V,
    {
        if self.shape() != other.shape() {
            return Err(GridError::ShapeMismatch {
                expected: vec![self.n_y, self.n_x],
                actual: vec![other.n_y, other.n_x],
            });
        }
        Ok(Array2 {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            n_y: self.n_y,
            n_x: self.n_x,
        })
    }
}

/// 3D array with shape `(n_z, n_y, n_x)`, level-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Array3<T> {
    data: Vec<T>,
    n_z: usize,
    n_y: usize,
    n_x: usize,
}

impl<T: Copy> Array3<T> {
    /// Create an array filled with a constant value.
    pub fn filled(n_z: usize, n_y: usize, n_x: usize, value: T) -> Self {
        Self {
            data: vec![value; n_z * n_y * n_x],
            n_z,
            n_y,
            n_x,
        }
    }

    /// Create an array from flat level-major data.
    pub fn from_flat(data: Vec<T>, n_z: usize, n_y: usize, n_x: usize) -> Result<Self, GridError> {
        if data.len() != n_z * n_y * n_x {
            return Err(GridError::LengthMismatch {
                len: data.len(),
                expected: n_z * n_y * n_x,
            });
        }
        Ok(Self { data, n_z, n_y, n_x })
    }

    /// Shape as `(n_z, n_y, n_x)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_z, self.n_y, self.n_x)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at level `k`, row `j`, column `i`.
    #[inline]
    pub fn get(&self, k: usize, j: usize, i: usize) -> T {
        self.data[(k * self.n_y + j) * self.n_x + i]
    }

    /// Set the value at level `k`, row `j`, column `i`.
    #[inline]
    pub fn set(&mut self, k: usize, j: usize, i: usize, value: T) {
        self.data[(k * self.n_y + j) * self.n_x + i] = value;
    }

    /// Flat level-major view of the data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat level-major view of the data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Extract one horizontal level as a 2D array.
    pub fn level(&self, k: usize) -> Array2<T> {
        let start = k * self.n_y * self.n_x;
        let end = start + self.n_y * self.n_x;
        Array2 {
            data: self.data[start..end].to_vec(),
            n_y: self.n_y,
            n_x: self.n_x,
        }
    }

    /// Apply a function elementwise, producing a new array.
    pub fn map<U: Copy, F: Fn(T) -> U>(&self, f: F) -> Array3<U> {
        Array3 {
            data: self.data.iter().map(|&v| f(v)).collect(),
            n_z: self.n_z,
            n_y: self.n_y,
            n_x: self.n_x,
        }
    }
}
