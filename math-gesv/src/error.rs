//! Error types for the example driver.
//!
//! Every variant ends the run. They all map to exit code 1, the coarse code
//! the classic example uses; the variants keep the causes apart for callers
//! and tests.

use math_lapack::LapackError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the example.
#[derive(Debug, Error)]
pub enum GesvError {
    /// A buffer could not be allocated.
    #[error("error of memory allocation: {what} needs {len} elements")]
    Allocation {
        /// Which buffer was being allocated
        what: &'static str,
        /// Requested number of elements
        len: usize,
    },

    /// Malformed command-line input or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file could not be read or parsed.
    #[error("cannot load configuration {path}: {message}")]
    Config {
        /// Path given with `--config`
        path: PathBuf,
        /// Underlying I/O or JSON error
        message: String,
    },

    /// The backend found an exactly zero pivot.
    #[error("U({index},{index}) is exactly zero; the matrix is singular")]
    SingularMatrix {
        /// 1-based index of the zero diagonal element
        index: usize,
    },

    /// The backend rejected one of its arguments (negative status).
    #[error("backend '{backend}' rejected argument {position}")]
    BackendInvalidArgument {
        /// Backend name
        backend: &'static str,
        /// Argument position in the backend's numbering
        position: usize,
    },

    /// Writing the report failed.
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for driver operations.
pub type Result<T> = std::result::Result<T, GesvError>;

impl GesvError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Returns `true` for command-line and configuration problems.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            GesvError::InvalidArgument(_) | GesvError::Config { .. }
        )
    }

    /// Returns `true` for outcomes reported by the solver backend.
    ///
    /// This includes `SingularMatrix` and `BackendInvalidArgument`.
    pub fn is_backend_error(&self) -> bool {
        matches!(
            self,
            GesvError::SingularMatrix { .. } | GesvError::BackendInvalidArgument { .. }
        )
    }

    /// Returns `true` if this is an allocation failure.
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, GesvError::Allocation { .. })
    }
}

impl From<LapackError> for GesvError {
    fn from(err: LapackError) -> Self {
        match err {
            LapackError::Allocation { what, len } => GesvError::Allocation { what, len },
            other => GesvError::InvalidArgument(other.to_string()),
        }
    }
}

impl From<clap::Error> for GesvError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let message = first.strip_prefix("error: ").unwrap_or(first);
        GesvError::InvalidArgument(message.to_string())
    }
}
