//! Backend selection
//!
//! Every backend implements either [`DenseSolver`] or [`MatrixProduct`].
//! [`BackendKind`] names them for configuration files and the command line,
//! and [`BackendKind::instantiate`] builds the strategy object.

mod gemm;
#[cfg(feature = "native")]
mod native;
mod recursive;
mod reference;

pub use gemm::GemmPlaceholder;
#[cfg(feature = "native")]
pub use native::SystemLapack;
pub use recursive::RecursiveLu;
pub use reference::ReferenceLu;

use crate::error::Result;
use crate::traits::{DenseSolver, MatrixProduct, SystemDims};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Pure-Rust `getf2` + `getrs`, LAPACKE conventions
    #[default]
    Reference,
    /// Pure-Rust recursive LU, ATLAS `clapack` conventions
    Recursive,
    /// System LAPACK through the `lapack` crate (`native` feature)
    Native,
    /// `B <- A * B` instead of a solve
    GemmPlaceholder,
}

impl BackendKind {
    /// All backends, in the order they are listed to users.
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Reference,
        BackendKind::Recursive,
        BackendKind::Native,
        BackendKind::GemmPlaceholder,
    ];

    /// Name accepted by [`FromStr`] and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Reference => "reference",
            BackendKind::Recursive => "recursive",
            BackendKind::Native => "native",
            BackendKind::GemmPlaceholder => "gemm-placeholder",
        }
    }

    /// Whether this backend was compiled into the current build.
    pub fn is_available(self) -> bool {
        match self {
            BackendKind::Native => cfg!(feature = "native"),
            _ => true,
        }
    }

    /// Build the strategy object for this backend.
    pub fn instantiate(self) -> Result<Backend> {
        let backend = match self {
            BackendKind::Reference => Backend::Solve(Box::new(ReferenceLu)),
            BackendKind::Recursive => Backend::Solve(Box::new(RecursiveLu)),
            BackendKind::Native => native_backend()?,
            BackendKind::GemmPlaceholder => Backend::Multiply(Box::new(GemmPlaceholder)),
        };
        log::debug!("instantiated backend '{}'", backend.name());
        Ok(backend)
    }
}

#[cfg(feature = "native")]
fn native_backend() -> Result<Backend> {
    Ok(Backend::Solve(Box::new(SystemLapack)))
}

#[cfg(not(feature = "native"))]
fn native_backend() -> Result<Backend> {
    Err(crate::error::LapackError::BackendUnavailable {
        backend: BackendKind::Native.as_str(),
        feature: "native",
    })
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = BackendKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown backend '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// A configured backend: either a solver or the multiply placeholder.
pub enum Backend {
    /// Solves `A * X = B`
    Solve(Box<dyn DenseSolver>),
    /// Computes `A * B` and reports nothing
    Multiply(Box<dyn MatrixProduct>),
}

impl Backend {
    /// Name of the wrapped implementation
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Solve(solver) => solver.name(),
            Backend::Multiply(product) => product.name(),
        }
    }

    /// Check if this backend performs a real solve
    pub fn is_solver(&self) -> bool {
        matches!(self, Backend::Solve(_))
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Solve(_) => write!(f, "Backend::Solve({})", self.name()),
            Backend::Multiply(_) => write!(f, "Backend::Multiply({})", self.name()),
        }
    }
}

/// Argument positions a backend reports in negative status codes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArgPositions {
    pub n: i32,
    pub nrhs: i32,
    pub a: i32,
    pub lda: i32,
    pub ipiv: i32,
    pub b: i32,
    pub ldb: i32,
}

/// LAPACK `dgesv(n, nrhs, a, lda, ipiv, b, ldb, info)`.
pub(crate) const LAPACK_POSITIONS: ArgPositions = ArgPositions {
    n: 1,
    nrhs: 2,
    a: 3,
    lda: 4,
    ipiv: 5,
    b: 6,
    ldb: 7,
};

/// ATLAS `clapack_dgesv(order, n, nrhs, a, lda, ipiv, b, ldb)`.
pub(crate) const CLAPACK_POSITIONS: ArgPositions = ArgPositions {
    n: 2,
    nrhs: 3,
    a: 4,
    lda: 5,
    ipiv: 6,
    b: 7,
    ldb: 8,
};

/// Validate a `gesv` call. Returns the negative status on the first violation.
pub(crate) fn check_gesv_args(
    dims: &SystemDims,
    a_len: usize,
    ipiv_len: usize,
    b_len: usize,
    pos: &ArgPositions,
) -> std::result::Result<(), i32> {
    let min_ld = dims.n.max(1);
    if i32::try_from(dims.n).is_err() {
        return Err(-pos.n);
    }
    if i32::try_from(dims.nrhs).is_err() {
        return Err(-pos.nrhs);
    }
    if dims.lda < min_ld || i32::try_from(dims.lda).is_err() {
        return Err(-pos.lda);
    }
    if dims.ldb < min_ld || i32::try_from(dims.ldb).is_err() {
        return Err(-pos.ldb);
    }
    if !dims.a_len().is_some_and(|len| a_len >= len) {
        return Err(-pos.a);
    }
    if ipiv_len < dims.n {
        return Err(-pos.ipiv);
    }
    if !dims.b_len().is_some_and(|len| b_len >= len) {
        return Err(-pos.b);
    }
    Ok(())
}
