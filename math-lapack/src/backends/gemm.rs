//! Multiply placeholder: computes `A * B` where a solve was expected.
//!
//! Some BLAS-only builds of the classic example call `dgemm` instead of
//! `dgesv`, reading B as `n x n` and writing the product over A. Here B is
//! read as `n x nrhs`, the product lands in the right-hand-side buffer and A
//! is left untouched.

use crate::traits::{MatrixProduct, SystemDims};
use ndarray::{ArrayView2, ShapeBuilder};

/// `B <- A * B` on column-major buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct GemmPlaceholder;

impl MatrixProduct for GemmPlaceholder {
    fn name(&self) -> &'static str {
        "gemm-placeholder"
    }

    fn multiply(&self, dims: &SystemDims, a: &[f64], b: &mut [f64]) {
        let SystemDims { n, nrhs, lda, ldb } = *dims;

        let a_view = ArrayView2::from_shape((n, n).strides((1, lda)), a);
        let b_view = ArrayView2::from_shape((n, nrhs).strides((1, ldb)), &*b);
        let product = match (a_view, b_view) {
            (Ok(a_view), Ok(b_view)) => a_view.dot(&b_view),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("gemm placeholder skipped: {err}");
                return;
            }
        };

        for ((i, j), value) in product.indexed_iter() {
            b[i + j * ldb] = *value;
        }
    }
}
