//! Command-line handling
//!
//! The classic example accepts `-n <int>` and `-nrhs <int>` with a single
//! dash and ignores anything it does not recognize. Neither fits a clap
//! parser directly, so the raw arguments are first normalized:
//!
//! - known flags are rewritten to their canonical `--flag=value` form, taking
//!   the next token as the value whatever it looks like
//! - a known flag at the end of the line is passed through bare so clap
//!   reports the missing value
//! - everything else is dropped
//!
//! The normalized list is then parsed by [`Cli`].

use clap::Parser;
use math_lapack::BackendKind;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::fill::FillPattern;

/// Flags that take a value, with the spellings accepted for each.
const VALUE_FLAGS: &[(&str, &[&str])] = &[
    ("--n", &["-n", "--n"]),
    ("--nrhs", &["-nrhs", "--nrhs"]),
    ("--seed", &["--seed"]),
    ("--backend", &["--backend"]),
    ("--fill", &["--fill"]),
    ("--config", &["--config"]),
];

/// Flags without a value, passed through unchanged.
const SWITCHES: &[&str] = &["--print", "-h", "--help", "-V", "--version"];

#[derive(Parser, Debug, Default, Clone, PartialEq)]
#[command(
    name = "gesv-example",
    version,
    about = "Solve a random dense system A*X = B with LU decomposition and partial pivoting",
    args_override_self = true
)]
pub struct Cli {
    /// Order of the matrix A (default 5)
    #[arg(long = "n", value_name = "N")]
    pub n: Option<usize>,

    /// Number of right-hand sides (default 1)
    #[arg(long = "nrhs", value_name = "NRHS")]
    pub nrhs: Option<usize>,

    /// Seed for the pseudo-random fill (unseeded when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Backend: reference, recursive, native or gemm-placeholder
    #[arg(long)]
    pub backend: Option<BackendKind>,

    /// Fill pattern for A: random, identity or zeros
    #[arg(long)]
    pub fill: Option<FillPattern>,

    /// Print the system, the solution, the LU details and the pivots
    #[arg(long)]
    pub print: bool,

    /// JSON configuration file (command-line values take precedence)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

fn canonical_value_flag(arg: &str) -> Option<&'static str> {
    VALUE_FLAGS
        .iter()
        .find(|(_, spellings)| spellings.contains(&arg))
        .map(|(canonical, _)| *canonical)
}

/// Rewrite raw arguments (program name first) into a list clap can parse.
pub fn normalize_legacy_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out = Vec::new();
    if let Some(program) = iter.next() {
        out.push(program);
    }

    while let Some(arg) = iter.next() {
        let Some(text) = arg.to_str() else {
            log::debug!("ignoring non UTF-8 argument {arg:?}");
            continue;
        };

        if let Some(canonical) = canonical_value_flag(text) {
            match iter.next() {
                Some(value) => {
                    let mut joined = OsString::from(format!("{canonical}="));
                    joined.push(value);
                    out.push(joined);
                }
                None => out.push(OsString::from(canonical)),
            }
        } else if let Some((name, value)) = text.split_once('=') {
            match canonical_value_flag(name) {
                Some(canonical) => out.push(OsString::from(format!("{canonical}={value}"))),
                None => log::debug!("ignoring unrecognized argument '{text}'"),
            }
        } else if SWITCHES.contains(&text) {
            out.push(arg);
        } else {
            log::debug!("ignoring unrecognized argument '{text}'");
        }
    }
    out
}

/// Normalize and parse raw arguments (program name first).
///
/// Help and version requests come back as `Err` with
/// [`clap::Error::use_stderr`] returning `false`.
pub fn parse_args<I, S>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    Cli::try_parse_from(normalize_legacy_args(args))
}
