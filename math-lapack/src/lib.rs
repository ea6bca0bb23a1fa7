// BLAS kernels mirror the LAPACK argument lists.
// Numeric kernels use index loops for clarity.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! Dense linear solvers behind a LAPACK-shaped interface
//!
//! This crate provides interchangeable implementations of the `gesv`
//! contract (solve `A * X = B` with LU decomposition and partial pivoting)
//! on column-major `f64` buffers, along with the owned buffer type the
//! driver allocates.
//!
//! # Features
//!
//! - **Reference backend**: unblocked right-looking LU (`getf2` + `getrs`),
//!   LAPACKE conventions (1-based pivots)
//! - **Recursive backend**: recursive LU in the style of ATLAS `clapack_dgesv`
//!   (0-based pivots)
//! - **Native backend**: system LAPACK `dgesv` (enable the `native` feature)
//! - **Multiply placeholder**: `B <- A * B`, exposed as [`MatrixProduct`] and
//!   never as a solver
//!
//! # Example
//!
//! ```
//! use math_lapack::{Backend, BackendKind, Info, SystemDims};
//!
//! let dims = SystemDims::square(2, 1);
//! let mut a = vec![4.0, 1.0, 1.0, 3.0];
//! let mut b = vec![1.0, 2.0];
//! let mut ipiv = vec![0i32; 2];
//!
//! let Backend::Solve(solver) = BackendKind::Reference.instantiate().unwrap() else {
//!     unreachable!()
//! };
//! let info = solver.gesv(&dims, &mut a, &mut ipiv, &mut b);
//! assert_eq!(Info::from(info), Info::Success);
//! ```

pub mod backends;
pub mod blas_helpers;
pub mod dense;
pub mod direct;
pub mod error;
pub mod traits;

// Re-export main types
pub use backends::{Backend, BackendKind};
pub use dense::DenseColMajor;
pub use error::LapackError;
pub use traits::{DenseSolver, Info, MatrixProduct, PivotBase, SystemDims};
