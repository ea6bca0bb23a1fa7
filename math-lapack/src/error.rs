//! Error types for buffer allocation and backend selection.

use thiserror::Error;

/// Errors raised outside of the numeric status codes returned by `gesv`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LapackError {
    /// A buffer could not be reserved (or its size overflowed `usize`).
    #[error("error of memory allocation: {what} needs {len} elements")]
    Allocation {
        /// Which buffer was being allocated
        what: &'static str,
        /// Requested number of elements (saturated on overflow)
        len: usize,
    },

    /// The requested backend was not compiled into this build.
    #[error("backend '{backend}' is unavailable; rebuild with the `{feature}` feature")]
    BackendUnavailable {
        /// Backend name as accepted on the command line
        backend: &'static str,
        /// Cargo feature that enables it
        feature: &'static str,
    },

    /// Data does not match the declared matrix shape.
    #[error("shape mismatch: {0}")]
    Shape(String),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, LapackError>;

impl LapackError {
    /// Returns `true` for allocation failures.
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, LapackError::Allocation { .. })
    }
}
