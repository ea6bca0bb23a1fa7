//! Recursive LU factorization
//!
//! Splits the columns in two halves, factors the left panel, updates the
//! right part and recurses on the trailing block. This is the formulation
//! ATLAS uses for `clapack_dgetrf`; it spends most of its time in
//! matrix-matrix updates instead of rank-1 updates.

use crate::blas_helpers::{dscal, gather_block, gemm_sub, idamax, laswp, trsm_lower_unit};

/// Factor the `m x n` matrix A in place as P * A = L * U, recursively.
///
/// Same contract as [`getf2`](super::getf2): 0-based pivots in `ipiv`
/// (length min(m, n)), return value is the 1-based index of the first
/// exactly-zero diagonal element of U, or 0.
pub fn rgetrf(m: usize, n: usize, a: &mut [f64], lda: usize, ipiv: &mut [usize]) -> usize {
    let min_mn = m.min(n);
    if min_mn == 0 {
        return 0;
    }
    if min_mn == 1 {
        return factor_single(m, a, ipiv);
    }

    let n1 = min_mn / 2;
    let n2 = n - n1;

    let (left, right) = a.split_at_mut(n1 * lda);

    // Factor the left panel [A11; A21]
    let mut info = rgetrf(m, n1, left, lda, &mut ipiv[..n1]);

    // Apply its interchanges to [A12; A22]
    laswp(right, lda, n2, 0, n1, ipiv);

    // A12 = L11^-1 * A12
    trsm_lower_unit(n1, n2, left, lda, right, lda);

    // A22 = A22 - A21 * A12
    if m > n1 {
        let a12 = gather_block(right, lda, n1, n2);
        gemm_sub(m - n1, n2, n1, &left[n1..], lda, &a12, n1, &mut right[n1..], lda);

        // Factor A22
        let sub_info = rgetrf(m - n1, n2, &mut right[n1..], lda, &mut ipiv[n1..min_mn]);
        if info == 0 && sub_info > 0 {
            info = sub_info + n1;
        }

        // Shift the trailing pivots to global rows and apply them to [A11; A21]
        for p in ipiv[n1..min_mn].iter_mut() {
            *p += n1;
        }
        laswp(left, lda, n1, n1, min_mn, ipiv);
    }

    info
}

/// Base case: a single column, or a single row (then `m == 1` and `p == 0`).
fn factor_single(m: usize, a: &mut [f64], ipiv: &mut [usize]) -> usize {
    let p = idamax(&a[..m]);
    ipiv[0] = p;

    let pivot = a[p];
    if pivot == 0.0 {
        return 1;
    }
    a.swap(0, p);
    if m > 1 {
        dscal(1.0 / pivot, &mut a[1..m]);
    }
    0
}
