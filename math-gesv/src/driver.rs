//! One run of the example: allocate, fill, solve (or multiply), report.

use crate::config::GesvConfig;
use crate::error::{GesvError, Result};
use crate::fill::{EntrySource, UniformEntries, fill_matrix, fill_rhs};
use crate::report::{print_allocation_failure, print_matrix_colmajor, print_singular, print_vector};
use crate::workspace::Workspace;
use math_lapack::{Backend, Info, PivotBase, SystemDims};
use ndarray::Array2;
use std::io::Write;
use std::time::Instant;

/// What the backend did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `gesv` returned 0; B holds X
    Solved {
        /// Base of the indices left in the pivot vector
        pivot_base: PivotBase,
    },
    /// The multiply placeholder ran; B holds `A * B`
    Multiplied,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Dimensions of the system
    pub dims: SystemDims,
    /// Name of the backend that ran
    pub backend: &'static str,
    /// What the backend did
    pub outcome: Outcome,
    /// Buffers as the backend left them
    pub workspace: Workspace,
}

impl RunReport {
    /// Contents of B after the run (X for a solve, `A * B` for a multiply).
    pub fn solution(&self) -> Array2<f64> {
        self.workspace.b.to_array()
    }

    /// Pivot rows as 0-based indices, whatever base the backend uses.
    pub fn pivots_zero_based(&self) -> Option<Vec<usize>> {
        match self.outcome {
            Outcome::Solved { pivot_base } => Some(
                self.workspace
                    .ipiv
                    .iter()
                    .map(|&p| pivot_base.to_zero_based(p))
                    .collect(),
            ),
            Outcome::Multiplied => None,
        }
    }
}

/// Run with the production entry source (seeded when `config.seed` is set).
pub fn run<W: Write>(config: &GesvConfig, out: &mut W) -> Result<RunReport> {
    let mut source = UniformEntries::from_seed(config.seed);
    run_with_source(config, &mut source, out)
}

/// Run with an explicit entry source.
///
/// Messages the classic example prints (allocation failure, singular matrix,
/// and everything under `print`) go to `out`.
pub fn run_with_source<S, W>(
    config: &GesvConfig,
    source: &mut S,
    out: &mut W,
) -> Result<RunReport>
where
    S: EntrySource + ?Sized,
    W: Write,
{
    config.validate()?;
    let dims = config.dims();
    let backend = config.backend.instantiate()?;
    log::info!(
        "gesv example: n = {}, nrhs = {}, backend = {}",
        dims.n,
        dims.nrhs,
        backend.name()
    );

    let mut ws = match Workspace::allocate(&dims) {
        Ok(ws) => ws,
        Err(err) => {
            log::error!("{err}");
            print_allocation_failure(out)?;
            return Err(err);
        }
    };

    fill_matrix(&mut ws.a, config.fill, source);
    fill_rhs(&mut ws.b, source);

    if config.print {
        let (n, nrhs) = (dims.n, dims.nrhs);
        print_matrix_colmajor(out, "Entry Matrix A", n, n, ws.a.as_slice(), dims.lda)?;
        print_matrix_colmajor(out, "Right Hand Side b", n, nrhs, ws.b.as_slice(), dims.ldb)?;
    }

    let started = Instant::now();
    let outcome = match &backend {
        Backend::Solve(solver) => {
            let Workspace { a, b, ipiv } = &mut ws;
            let info = solver.gesv(&dims, a.as_mut_slice(), ipiv, b.as_mut_slice());
            log::info!(
                "{} returned info = {info} in {:?}",
                solver.name(),
                started.elapsed()
            );

            match Info::from(info) {
                Info::Success => Outcome::Solved {
                    pivot_base: solver.pivot_base(),
                },
                Info::Singular { index } => {
                    print_singular(out, index)?;
                    return Err(GesvError::SingularMatrix { index });
                }
                Info::IllegalArgument { position } => {
                    log::error!("backend '{}' rejected argument {position}", solver.name());
                    return Err(GesvError::BackendInvalidArgument {
                        backend: solver.name(),
                        position,
                    });
                }
            }
        }
        Backend::Multiply(product) => {
            product.multiply(&dims, ws.a.as_slice(), ws.b.as_mut_slice());
            log::info!("{} finished in {:?}", product.name(), started.elapsed());
            Outcome::Multiplied
        }
    };

    if config.print {
        let (n, nrhs) = (dims.n, dims.nrhs);
        match outcome {
            Outcome::Solved { .. } => {
                print_matrix_colmajor(out, "Solution", n, nrhs, ws.b.as_slice(), dims.ldb)?;
                let lu = ws.a.as_slice();
                print_matrix_colmajor(out, "Details of LU factorization", n, n, lu, dims.lda)?;
                print_vector(out, "Pivot indices", &ws.ipiv)?;
            }
            Outcome::Multiplied => {
                print_matrix_colmajor(out, "Product A*B", n, nrhs, ws.b.as_slice(), dims.ldb)?;
            }
        }
    }

    Ok(RunReport {
        dims,
        backend: backend.name(),
        outcome,
        workspace: ws,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::{FillPattern, ScriptedEntries};
    use approx::assert_relative_eq;
    use math_lapack::BackendKind;

    fn config(n: usize, nrhs: usize) -> GesvConfig {
        GesvConfig {
            n,
            nrhs,
            seed: Some(1),
            backend: BackendKind::Reference,
            ..GesvConfig::default()
        }
    }

    #[test]
    fn test_default_run_is_quiet() {
        let mut out = Vec::new();
        let report = run(&config(5, 1), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(report.dims, SystemDims::square(5, 1));
        assert_eq!(report.backend, "reference");
    }

    #[test]
    fn test_identity_returns_rhs() {
        let cfg = GesvConfig {
            fill: FillPattern::Identity,
            ..config(4, 3)
        };
        let mut source = ScriptedEntries::new((1..=12).map(f64::from).collect());
        let report = run_with_source(&cfg, &mut source, &mut Vec::new()).unwrap();

        assert_eq!(source.consumed(), 12);
        for (k, x) in report.workspace.b.as_slice().iter().enumerate() {
            assert_relative_eq!(*x, (k + 1) as f64);
        }
        assert_eq!(report.pivots_zero_based(), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_singular_prints_message() {
        let cfg = GesvConfig {
            fill: FillPattern::Zeros,
            ..config(3, 1)
        };
        let mut out = Vec::new();
        let err = run(&cfg, &mut out).unwrap_err();
        assert!(matches!(err, GesvError::SingularMatrix { index: 1 }));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("U(1,1) is zero, so that A is singular;"));
    }

    #[test]
    fn test_print_sections() {
        let cfg = GesvConfig {
            print: true,
            ..config(2, 1)
        };
        let mut out = Vec::new();
        run(&cfg, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for section in [
            "Entry Matrix A",
            "Right Hand Side b",
            "Solution",
            "Details of LU factorization",
            "Pivot indices",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn test_allocation_failure_stops_before_fill() {
        let cfg = config(i32::MAX as usize, 1);
        let mut source = ScriptedEntries::new(vec![1.0; 4]);
        let mut out = Vec::new();
        let err = run_with_source(&cfg, &mut source, &mut out).unwrap_err();

        assert!(matches!(err, GesvError::Allocation { what: "matrix A", .. }), "{err:?}");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "error of memory allocation\n");
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn test_invalid_config_allocates_nothing() {
        let mut source = ScriptedEntries::default();
        let err = run_with_source(&config(0, 1), &mut source, &mut Vec::new()).unwrap_err();
        assert!(err.is_argument_error());
        assert_eq!(source.consumed(), 0);
    }
}
