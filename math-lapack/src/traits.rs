//! Core traits for dense solver backends
//!
//! This module defines the abstractions shared by every backend:
//! - [`DenseSolver`]: the `gesv` capability (solve `A * X = B`)
//! - [`MatrixProduct`]: the multiply capability (`B <- A * B`)
//! - [`SystemDims`]: matrix order, right-hand-side count and leading dimensions
//! - [`Info`]: decoded LAPACK status code

use std::cmp::Ordering;
use std::fmt;

/// Dimensions of a dense system `A * X = B` stored column-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemDims {
    /// Order of the square matrix A
    pub n: usize,
    /// Number of right-hand sides (columns of B)
    pub nrhs: usize,
    /// Leading dimension of A
    pub lda: usize,
    /// Leading dimension of B
    pub ldb: usize,
}

impl SystemDims {
    /// Dimensions with tightly packed columns (`lda = ldb = n`).
    pub fn square(n: usize, nrhs: usize) -> Self {
        Self {
            n,
            nrhs,
            lda: n,
            ldb: n,
        }
    }

    /// Minimum slice length holding A, or `None` on overflow.
    pub fn a_len(&self) -> Option<usize> {
        required_len(self.n, self.n, self.lda)
    }

    /// Minimum slice length holding B, or `None` on overflow.
    pub fn b_len(&self) -> Option<usize> {
        required_len(self.n, self.nrhs, self.ldb)
    }
}

/// Smallest buffer holding a `rows x cols` column-major block with stride `ld`.
pub fn required_len(rows: usize, cols: usize, ld: usize) -> Option<usize> {
    if rows == 0 || cols == 0 {
        return Some(0);
    }
    ld.checked_mul(cols - 1)?.checked_add(rows)
}

/// Whether pivot indices written by a backend count from 0 or from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotBase {
    /// C-style indices (ATLAS `clapack_*`)
    Zero,
    /// Fortran-style indices (LAPACK, LAPACKE)
    One,
}

impl PivotBase {
    /// Convert a pivot written by the backend into a 0-based row index.
    pub fn to_zero_based(self, pivot: i32) -> usize {
        debug_assert!(
            pivot >= self.from_zero_based(0),
            "pivot {pivot} is out of range for {self:?} indexing"
        );
        match self {
            PivotBase::Zero => pivot.max(0) as usize,
            PivotBase::One => (pivot.max(1) - 1) as usize,
        }
    }

    /// Convert a 0-based row index into this base.
    pub fn from_zero_based(self, row: usize) -> i32 {
        match self {
            PivotBase::Zero => row as i32,
            PivotBase::One => row as i32 + 1,
        }
    }
}

/// Decoded `info` value returned by a `gesv` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Info {
    /// `info == 0`: B now holds the solution
    Success,
    /// `info > 0`: `U(index, index)` is exactly zero (1-based)
    Singular {
        /// 1-based position of the first zero diagonal element of U
        index: usize,
    },
    /// `info < 0`: argument number `position` had an illegal value
    IllegalArgument {
        /// 1-based argument position in the backend's own numbering
        position: usize,
    },
}

impl From<i32> for Info {
    fn from(info: i32) -> Self {
        match info.cmp(&0) {
            Ordering::Equal => Info::Success,
            Ordering::Greater => Info::Singular {
                index: info as usize,
            },
            Ordering::Less => Info::IllegalArgument {
                position: info.unsigned_abs() as usize,
            },
        }
    }
}

impl Info {
    /// The raw LAPACK status code.
    pub fn code(self) -> i32 {
        match self {
            Info::Success => 0,
            Info::Singular { index } => index as i32,
            Info::IllegalArgument { position } => -(position as i32),
        }
    }

    /// Check if the solve succeeded
    pub fn is_success(self) -> bool {
        self == Info::Success
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Info::Success => write!(f, "success"),
            Info::Singular { index } => write!(f, "U({index},{index}) is exactly zero"),
            Info::IllegalArgument { position } => {
                write!(f, "argument {position} had an illegal value")
            }
        }
    }
}

/// Trait for backends that solve a dense system with LU and partial pivoting.
///
/// Implementations follow the LAPACK `dgesv` contract: on entry `a` holds the
/// `n x n` matrix and `b` the `n x nrhs` right-hand sides, both column-major.
/// On exit with status 0, `b` holds the solution X, `a` holds backend-defined
/// LU factors and `ipiv` the row interchanges in [`DenseSolver::pivot_base`].
pub trait DenseSolver: Send + Sync {
    /// Name used for selection and logging
    fn name(&self) -> &'static str;

    /// Base of the pivot indices this backend writes
    fn pivot_base(&self) -> PivotBase {
        PivotBase::One
    }

    /// Solve `A * X = B` in place and return the LAPACK `info` code.
    fn gesv(&self, dims: &SystemDims, a: &mut [f64], ipiv: &mut [i32], b: &mut [f64]) -> i32;
}

/// Trait for backends that multiply instead of solving.
///
/// Kept apart from [`DenseSolver`] so a configuration that multiplies can
/// never be mistaken for one that solves.
pub trait MatrixProduct: Send + Sync {
    /// Name used for selection and logging
    fn name(&self) -> &'static str;

    /// Overwrite B with `A * B`. There is no status to report.
    fn multiply(&self, dims: &SystemDims, a: &[f64], b: &mut [f64]);
}
