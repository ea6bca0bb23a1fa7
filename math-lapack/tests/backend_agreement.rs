//! Integration tests comparing the solver backends against each other
//!
//! Each backend is driven only through the `DenseSolver` interface, the way
//! the example driver uses them.

use approx::assert_relative_eq;
use math_lapack::{Backend, BackendKind, DenseColMajor, DenseSolver, Info, PivotBase, SystemDims};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn solver(kind: BackendKind) -> Box<dyn DenseSolver> {
    match kind.instantiate().expect("backend should be available") {
        Backend::Solve(solver) => solver,
        Backend::Multiply(_) => panic!("{kind} is not a solver"),
    }
}

fn solver_kinds() -> Vec<BackendKind> {
    BackendKind::ALL
        .into_iter()
        .filter(|kind| kind.is_available() && *kind != BackendKind::GemmPlaceholder)
        .collect()
}

fn random_system(n: usize, nrhs: usize, seed: u64) -> (DenseColMajor, DenseColMajor) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a: Vec<f64> = (0..n * n).map(|_| rng.random_range(-0.5..0.5)).collect();
    let b: Vec<f64> = (0..n * nrhs).map(|_| rng.random_range(-0.5..0.5)).collect();
    (
        DenseColMajor::from_col_major(n, n, a).unwrap(),
        DenseColMajor::from_col_major(n, nrhs, b).unwrap(),
    )
}

/// Solve with `kind`, returning (info, solution, pivots as 0-based rows).
///
/// Pivots are only converted after a successful solve.
fn solve_with(
    kind: BackendKind,
    a: &DenseColMajor,
    b: &DenseColMajor,
) -> (Info, Array2<f64>, Vec<usize>) {
    let solver = solver(kind);
    let dims = SystemDims::square(a.rows(), b.cols());
    let mut lu = a.clone();
    let mut x = b.clone();
    let mut ipiv = vec![0i32; a.rows()];

    let info = Info::from(solver.gesv(&dims, lu.as_mut_slice(), &mut ipiv, x.as_mut_slice()));
    let base = solver.pivot_base();
    let pivots = if info.is_success() {
        ipiv.iter().map(|&p| base.to_zero_based(p)).collect()
    } else {
        Vec::new()
    };
    (info, x.to_array(), pivots)
}

#[test]
fn test_random_systems_have_small_residuals() {
    for kind in solver_kinds() {
        for (n, nrhs, seed) in [(1, 1, 1), (5, 1, 2), (12, 3, 3), (33, 2, 4)] {
            let (a, b) = random_system(n, nrhs, seed);
            let (info, x, _) = solve_with(kind, &a, &b);
            assert_eq!(info, Info::Success, "{kind} n={n}");

            let residual = a.to_array().dot(&x) - b.to_array();
            let worst = residual.iter().fold(0.0f64, |acc, r| acc.max(r.abs()));
            assert!(worst < 1e-10, "{kind} n={n}: residual {worst:e}");
        }
    }
}

#[test]
fn test_backends_agree_on_solution_and_pivot_rows() {
    let (a, b) = random_system(17, 4, 99);
    let (_, x_ref, piv_ref) = solve_with(BackendKind::Reference, &a, &b);

    for kind in solver_kinds() {
        let (info, x, pivots) = solve_with(kind, &a, &b);
        assert_eq!(info, Info::Success);
        assert_eq!(pivots, piv_ref, "{kind}");
        for (u, v) in x.iter().zip(x_ref.iter()) {
            assert_relative_eq!(*u, *v, max_relative = 1e-9, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_pivot_bases_differ_between_conventions() {
    assert_eq!(solver(BackendKind::Reference).pivot_base(), PivotBase::One);
    assert_eq!(solver(BackendKind::Recursive).pivot_base(), PivotBase::Zero);
}

#[test]
fn test_identity_returns_rhs() {
    for kind in solver_kinds() {
        for (n, nrhs) in [(1, 1), (4, 1), (6, 3)] {
            let mut a = DenseColMajor::try_zeros(n, n, "A").unwrap();
            for i in 0..n {
                a.set(i, i, 1.0);
            }
            let (_, b) = random_system(n, nrhs, n as u64);

            let (info, x, pivots) = solve_with(kind, &a, &b);
            assert_eq!(info, Info::Success);
            assert_eq!(x, b.to_array(), "{kind} n={n} nrhs={nrhs}");
            assert_eq!(pivots, (0..n).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_zero_matrix_is_singular_at_one() {
    for kind in solver_kinds() {
        for n in [1, 2, 7] {
            let a = DenseColMajor::try_zeros(n, n, "A").unwrap();
            let (_, b) = random_system(n, 1, 5);
            let (info, x, _) = solve_with(kind, &a, &b);
            assert_eq!(info, Info::Singular { index: 1 }, "{kind} n={n}");
            assert_eq!(x, b.to_array());
        }
    }
}

#[test]
fn test_rank_deficient_reports_later_index() {
    // Rows 0 and 1 are proportional: U(2,2) vanishes
    let a = DenseColMajor::from_col_major(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
    let b = DenseColMajor::from_col_major(2, 1, vec![1.0, 1.0]).unwrap();
    for kind in solver_kinds() {
        let (info, _, _) = solve_with(kind, &a, &b);
        assert_eq!(info, Info::Singular { index: 2 }, "{kind}");
    }
}

#[test]
fn test_multiply_placeholder_is_not_a_solve() {
    let (a, b) = random_system(4, 2, 11);
    let Backend::Multiply(product) = BackendKind::GemmPlaceholder.instantiate().unwrap() else {
        panic!("gemm placeholder must be a product");
    };

    let mut out = b.clone();
    product.multiply(&SystemDims::square(4, 2), a.as_slice(), out.as_mut_slice());

    let expected = a.to_array().dot(&b.to_array());
    for (u, v) in out.to_array().iter().zip(expected.iter()) {
        assert_relative_eq!(*u, *v, epsilon = 1e-12);
    }
}
