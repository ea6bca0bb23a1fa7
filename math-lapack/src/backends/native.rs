//! System LAPACK backend (`native` feature).
//!
//! Calls Fortran `dgesv` through the `lapack` crate; OpenBLAS provides the
//! implementation at link time.

use super::{LAPACK_POSITIONS, check_gesv_args};
use crate::traits::{DenseSolver, PivotBase, SystemDims};

// Pull the OpenBLAS link directives into the final binary.
use openblas_src as _;

/// `dgesv` from the LAPACK library linked into this build.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLapack;

impl DenseSolver for SystemLapack {
    fn name(&self) -> &'static str {
        "native"
    }

    fn pivot_base(&self) -> PivotBase {
        PivotBase::One
    }

    fn gesv(&self, dims: &SystemDims, a: &mut [f64], ipiv: &mut [i32], b: &mut [f64]) -> i32 {
        // LAPACK reads through raw pointers, so lengths are checked first.
        if let Err(info) = check_gesv_args(dims, a.len(), ipiv.len(), b.len(), &LAPACK_POSITIONS) {
            return info;
        }

        let mut info = 0;
        // SAFETY: dimensions fit in i32 and every buffer covers the extent
        // LAPACK will touch, as verified by `check_gesv_args`.
        unsafe {
            lapack::dgesv(
                dims.n as i32,
                dims.nrhs as i32,
                a,
                dims.lda as i32,
                ipiv,
                b,
                dims.ldb as i32,
                &mut info,
            );
        }
        info
    }
}
