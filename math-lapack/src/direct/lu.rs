//! LU decomposition solver
//!
//! Unblocked LU factorization with partial pivoting (`getf2`) and the matching
//! triangular solve (`getrs`) for dense column-major systems.

use crate::blas_helpers::{dscal, idamax, laswp, rank1_update, swap_rows, trsm_lower_unit, trsm_upper};

/// Factor the `m x n` matrix A in place as P * A = L * U.
///
/// - A is overwritten with L (unit lower, below the diagonal) and U (upper).
/// - `ipiv[k]` receives the 0-based row swapped with row `k` (length min(m, n)).
///
/// A zero pivot does not stop the factorization: the returned value is the
/// 1-based index of the first exactly-zero diagonal element of U, or 0.
pub fn getf2(m: usize, n: usize, a: &mut [f64], lda: usize, ipiv: &mut [usize]) -> usize {
    let mut info = 0;

    for k in 0..m.min(n) {
        // Find pivot: max |A[i, k]| for i in k..m
        let col = k * lda;
        let p = k + idamax(&a[col + k..col + m]);
        ipiv[k] = p;

        let pivot = a[p + col];
        if pivot != 0.0 {
            swap_rows(a, lda, n, k, p);

            // Compute multipliers: A[i,k] /= pivot for i in k+1..m
            let below = &mut a[col + k + 1..col + m];
            if pivot.abs() >= f64::MIN_POSITIVE {
                dscal(1.0 / pivot, below);
            } else {
                for v in below.iter_mut() {
                    *v /= pivot;
                }
            }
        } else if info == 0 {
            info = k + 1;
        }

        // Update trailing submatrix: A[i,j] -= A[i,k] * A[k,j]
        rank1_update(a, lda, k, m, n);
    }

    info
}

/// Solve A * X = B with the factors computed by [`getf2`] or
/// [`rgetrf`](super::rgetrf). B (`n x nrhs`) is overwritten with X.
pub fn getrs(
    n: usize,
    nrhs: usize,
    lu: &[f64],
    lda: usize,
    ipiv: &[usize],
    b: &mut [f64],
    ldb: usize,
) {
    if n == 0 || nrhs == 0 {
        return;
    }
    // Apply row permutations to B
    laswp(b, ldb, nrhs, 0, n, ipiv);
    // Forward substitution: L * Y = P * B
    trsm_lower_unit(n, nrhs, lu, lda, b, ldb);
    // Backward substitution: U * X = Y
    trsm_upper(n, nrhs, lu, lda, b, ldb);
}
