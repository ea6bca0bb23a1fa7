//! Example driver for the `gesv` backends
//!
//! Solves a dense system `A * X = B` whose entries are drawn uniformly from
//! `[-0.5, 0.5)`, using one backend from `math-lapack`, and reports the
//! outcome the way the classic LAPACKE example does.
//!
//! # Example
//!
//! ```
//! use math_gesv::{FillPattern, GesvConfig, Outcome, ScriptedEntries, run_with_source};
//!
//! let config = GesvConfig {
//!     n: 2,
//!     nrhs: 1,
//!     fill: FillPattern::Identity,
//!     backend: math_lapack::BackendKind::Reference,
//!     ..GesvConfig::default()
//! };
//! let mut source = ScriptedEntries::new(vec![3.0, -1.0]);
//! let report = run_with_source(&config, &mut source, &mut std::io::sink()).unwrap();
//!
//! assert!(matches!(report.outcome, Outcome::Solved { .. }));
//! assert_eq!(report.workspace.b.as_slice(), &[3.0, -1.0]);
//! ```

pub mod args;
pub mod config;
pub mod driver;
pub mod error;
pub mod fill;
pub mod report;
pub mod workspace;

pub use args::{Cli, parse_args};
pub use config::GesvConfig;
pub use driver::{Outcome, RunReport, run, run_with_source};
pub use error::{GesvError, Result};
pub use fill::{EntrySource, FillPattern, ScriptedEntries, UniformEntries};
pub use workspace::Workspace;
