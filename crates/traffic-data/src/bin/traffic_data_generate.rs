//! Generate simulated portal traffic and write it as JSON.
//!
//! This binary only wires logging and the exit code; loading settings and
//! the flow itself live in `traffic_data::run_from_args`.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use mockable::DefaultClock;
use tracing::{debug, warn};
use traffic_data::{CliError, init_tracing, run_from_args};

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        warn!(error = %e, "tracing init failed");
    }

    match generate() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn generate() -> Result<(), CliError> {
    let report = run_from_args(env::args_os(), &DefaultClock, &mut io::stdout().lock())?;
    debug!(seed = report.seed, "run complete");
    Ok(())
}
