//! `u-cpusched` command-line entry point.

use std::process::ExitCode;

use u_cpusched::runner::execute;
use u_cpusched::telemetry::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let outcome = execute(std::env::args().skip(1));
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    ExitCode::from(outcome.code)
}
