//! formulary CLI
//!
//! Command-line interface for solving formulas.

use formulary::cli::{init_logging, run_cli, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    run_cli(Args::parse())
}
