//! BLAS-style kernels on column-major slices
//!
//! These are the building blocks the pure-Rust LU backends share. Every
//! routine takes explicit leading dimensions so it can work on sub-blocks of
//! a larger allocation, the way LAPACK passes `a + i + j*lda` around.
//!
//! Element `(i, j)` of a block with leading dimension `ld` lives at
//! `i + j * ld`.

/// Index of the first element with the largest magnitude (`idamax`, 0-based).
///
/// Returns 0 for an empty slice.
#[inline]
pub fn idamax(x: &[f64]) -> usize {
    let mut max_val = 0.0f64;
    let mut max_idx = 0;
    for (i, v) in x.iter().enumerate() {
        let a = v.abs();
        if a > max_val {
            max_val = a;
            max_idx = i;
        }
    }
    max_idx
}

/// Scale vector in place: x = α * x
#[inline]
pub fn dscal(alpha: f64, x: &mut [f64]) {
    for xi in x.iter_mut() {
        *xi *= alpha;
    }
}

/// Swap rows `r1` and `r2` across the first `ncols` columns.
#[inline]
pub fn swap_rows(a: &mut [f64], lda: usize, ncols: usize, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    for j in 0..ncols {
        a.swap(r1 + j * lda, r2 + j * lda);
    }
}

/// Apply row interchanges `k <-> ipiv[k]` for `k` in `k1..k2` (`dlaswp`).
///
/// Pivots are 0-based row indices into `a`.
#[inline]
pub fn laswp(a: &mut [f64], lda: usize, ncols: usize, k1: usize, k2: usize, ipiv: &[usize]) {
    for k in k1..k2 {
        swap_rows(a, lda, ncols, k, ipiv[k]);
    }
}

/// Rank-1 update of the trailing block after step `k` (`dger`):
/// A[i,j] -= A[i,k] * A[k,j] for i in k+1..m, j in k+1..n.
#[inline]
pub fn rank1_update(a: &mut [f64], lda: usize, k: usize, m: usize, n: usize) {
    if k + 1 >= m {
        return;
    }
    for j in (k + 1)..n {
        let ukj = a[k + j * lda];
        if ukj == 0.0 {
            continue;
        }
        for i in (k + 1)..m {
            a[i + j * lda] -= a[i + k * lda] * ukj;
        }
    }
}

/// Solve L * X = B in place, L unit lower triangular `n x n` (`dtrsm`, side L).
pub fn trsm_lower_unit(n: usize, nrhs: usize, a: &[f64], lda: usize, b: &mut [f64], ldb: usize) {
    for j in 0..nrhs {
        let col = j * ldb;
        for k in 0..n {
            let x = b[k + col];
            if x == 0.0 {
                continue;
            }
            for i in (k + 1)..n {
                b[i + col] -= x * a[i + k * lda];
            }
        }
    }
}

/// Solve U * X = B in place, U upper triangular `n x n` (`dtrsm`, side L).
pub fn trsm_upper(n: usize, nrhs: usize, a: &[f64], lda: usize, b: &mut [f64], ldb: usize) {
    for j in 0..nrhs {
        let col = j * ldb;
        for k in (0..n).rev() {
            if b[k + col] == 0.0 {
                continue;
            }
            b[k + col] /= a[k + k * lda];
            let x = b[k + col];
            for i in 0..k {
                b[i + col] -= x * a[i + k * lda];
            }
        }
    }
}

/// C = C - A * B with A `m x k`, B `k x n`, C `m x n` (`dgemm` with α = -1, β = 1).
pub fn gemm_sub(
    m: usize,
    n: usize,
    k: usize,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    c: &mut [f64],
    ldc: usize,
) {
    for j in 0..n {
        for p in 0..k {
            let bpj = b[p + j * ldb];
            if bpj == 0.0 {
                continue;
            }
            for i in 0..m {
                c[i + j * ldc] -= a[i + p * lda] * bpj;
            }
        }
    }
}

/// Copy the `rows x cols` block starting at `a[0]` into a packed vector (ld = rows).
pub fn gather_block(a: &[f64], lda: usize, rows: usize, cols: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        out.extend_from_slice(&a[j * lda..j * lda + rows]);
    }
    out
}
