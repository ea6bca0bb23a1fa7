//! Direct LU solvers on column-major slices
//!
//! This module provides the factorizations behind the pure-Rust backends:
//! - [`getf2`]: unblocked right-looking LU with partial pivoting
//! - [`rgetrf`]: recursive LU (split columns, factor left, update, factor right)
//! - [`getrs`]: solve with the factors of either one
//!
//! All pivots here are 0-based row indices; backends convert at their
//! boundary.

mod lu;
mod recursive;

pub use lu::{getf2, getrs};
pub use recursive::rgetrf;
