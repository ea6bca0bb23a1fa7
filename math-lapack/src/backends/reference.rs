//! Reference `dgesv`: unblocked LU with LAPACKE conventions.

use super::{LAPACK_POSITIONS, check_gesv_args};
use crate::direct::{getf2, getrs};
use crate::traits::{DenseSolver, PivotBase, SystemDims};

/// Pure-Rust `dgesv` with 1-based pivots and LAPACK argument numbering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceLu;

impl DenseSolver for ReferenceLu {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn pivot_base(&self) -> PivotBase {
        PivotBase::One
    }

    fn gesv(&self, dims: &SystemDims, a: &mut [f64], ipiv: &mut [i32], b: &mut [f64]) -> i32 {
        if let Err(info) = check_gesv_args(dims, a.len(), ipiv.len(), b.len(), &LAPACK_POSITIONS) {
            log::debug!("reference gesv rejected argument {}", -info);
            return info;
        }

        let n = dims.n;
        let mut pivots = vec![0usize; n];
        let info = getf2(n, n, a, dims.lda, &mut pivots);

        for (dst, &row) in ipiv.iter_mut().zip(&pivots) {
            *dst = PivotBase::One.from_zero_based(row);
        }
        if info > 0 {
            return info as i32;
        }

        getrs(n, dims.nrhs, a, dims.lda, &pivots, b, dims.ldb);
        0
    }
}
