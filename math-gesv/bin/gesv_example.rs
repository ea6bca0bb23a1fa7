//! gesv example
//!
//! Fills a random dense system A*X = B and solves it with the selected
//! backend. Prints nothing on success unless `--print` is given.
//!
//! Usage:
//!     cargo run --bin gesv-example -- -n 5 -nrhs 1
//!     cargo run --bin gesv-example -- -n 4 --fill zeros --print

use math_gesv::{GesvConfig, GesvError, parse_args, run};
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => fail(GesvError::from(e)),
    };

    let config = match GesvConfig::resolve(&cli) {
        Ok(config) => config,
        Err(err) => fail(err),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&config, &mut out);
    if let Err(e) = out.flush() {
        log::warn!("cannot flush stdout: {e}");
    }

    if let Err(err) = result {
        fail(err);
    }
}

fn fail(err: GesvError) -> ! {
    match &err {
        // Already reported on stdout by the driver.
        GesvError::SingularMatrix { .. } | GesvError::Allocation { .. } => {}
        GesvError::BackendInvalidArgument { .. } => {}
        _ => eprintln!("Error: {err}"),
    }
    process::exit(err.exit_code());
}
