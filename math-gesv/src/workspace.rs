//! Buffers owned by one run: matrix A, right-hand sides B and pivots.

use crate::error::Result;
use math_lapack::dense::try_alloc_vec;
use math_lapack::{DenseColMajor, SystemDims};

/// The three buffers of a `gesv` call, released together when dropped.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Coefficient matrix, `n x n`; holds LU details after a solve
    pub a: DenseColMajor,
    /// Right-hand sides, `n x nrhs`; holds X after a solve
    pub b: DenseColMajor,
    /// Row interchanges, length `n`
    pub ipiv: Vec<i32>,
}

impl Workspace {
    /// Allocate zeroed buffers for `dims`, in the order A, B, pivots.
    pub fn allocate(dims: &SystemDims) -> Result<Self> {
        log::debug!(
            "allocating A ({0}x{0}), B ({0}x{1}) and {0} pivots",
            dims.n,
            dims.nrhs
        );
        let a = DenseColMajor::try_zeros(dims.n, dims.n, "matrix A")?;
        let b = DenseColMajor::try_zeros(dims.n, dims.nrhs, "right-hand side B")?;
        let ipiv = try_alloc_vec(dims.n, 0i32, "pivot vector")?;
        debug_assert!(a.is_consistent() && b.is_consistent());
        Ok(Self { a, b, ipiv })
    }

    /// Dimensions matching these buffers
    pub fn dims(&self) -> SystemDims {
        SystemDims {
            n: self.a.rows(),
            nrhs: self.b.cols(),
            lda: self.a.ld(),
            ldb: self.b.ld(),
        }
    }
}
