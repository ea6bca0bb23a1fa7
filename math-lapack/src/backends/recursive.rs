//! Recursive `dgesv` in the manner of ATLAS `clapack_dgesv`.
//!
//! Differences from the reference backend a caller can observe:
//! - pivot indices are 0-based
//! - negative status codes count the leading `order` argument, so `lda` is
//!   argument 5 and `ldb` argument 8

use super::{CLAPACK_POSITIONS, check_gesv_args};
use crate::direct::{getrs, rgetrf};
use crate::traits::{DenseSolver, PivotBase, SystemDims};

/// Pure-Rust recursive LU solver with C-style conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveLu;

impl DenseSolver for RecursiveLu {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn pivot_base(&self) -> PivotBase {
        PivotBase::Zero
    }

    fn gesv(&self, dims: &SystemDims, a: &mut [f64], ipiv: &mut [i32], b: &mut [f64]) -> i32 {
        if let Err(info) = check_gesv_args(dims, a.len(), ipiv.len(), b.len(), &CLAPACK_POSITIONS)
        {
            log::debug!("recursive gesv rejected argument {}", -info);
            return info;
        }

        let n = dims.n;
        let mut pivots = vec![0usize; n];
        let info = rgetrf(n, n, a, dims.lda, &mut pivots);

        for (dst, &row) in ipiv.iter_mut().zip(&pivots) {
            *dst = PivotBase::Zero.from_zero_based(row);
        }
        if info > 0 {
            return info as i32;
        }

        getrs(n, dims.nrhs, a, dims.lda, &pivots, b, dims.ldb);
        0
    }
}
