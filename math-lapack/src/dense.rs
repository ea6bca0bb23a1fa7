//! Owned column-major buffers
//!
//! Allocation goes through `Vec::try_reserve_exact` so running out of memory
//! surfaces as [`LapackError::Allocation`] instead of aborting the process.

use crate::error::{LapackError, Result};
use crate::traits::required_len;
use ndarray::Array2;

/// Reserve and fill a vector of `len` copies of `value`.
pub fn try_alloc_vec<T: Clone>(len: usize, value: T, what: &'static str) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| LapackError::Allocation { what, len })?;
    data.resize(len, value);
    Ok(data)
}

/// Dense `f64` matrix stored column-major with leading dimension `ld`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseColMajor {
    rows: usize,
    cols: usize,
    ld: usize,
    data: Vec<f64>,
}

impl DenseColMajor {
    /// Allocate a zeroed `rows x cols` matrix with `ld = rows`.
    pub fn try_zeros(rows: usize, cols: usize, what: &'static str) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(LapackError::Allocation {
                what,
                len: usize::MAX,
            })?;
        Ok(Self {
            rows,
            cols,
            ld: rows.max(1),
            data: try_alloc_vec(len, 0.0, what)?,
        })
    }

    /// Wrap existing column-major data with `ld = rows`.
    pub fn from_col_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if Some(data.len()) != rows.checked_mul(cols) {
            return Err(LapackError::Shape(format!(
                "{} elements cannot form a {rows}x{cols} matrix",
                data.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            ld: rows.max(1),
            data,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Leading dimension (stride between columns)
    pub fn ld(&self) -> usize {
        self.ld
    }

    /// Element `(i, j)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        self.data[i + j * self.ld]
    }

    /// Set element `(i, j)`. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        self.data[i + j * self.ld] = value;
    }

    /// Raw column-major storage
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw column-major storage
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Copy into an `ndarray` matrix.
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.rows, self.cols), |(i, j)| self.get(i, j))
    }

    /// Check that the storage covers the declared shape.
    pub fn is_consistent(&self) -> bool {
        required_len(self.rows, self.cols, self.ld).is_some_and(|len| len <= self.data.len())
    }
}
