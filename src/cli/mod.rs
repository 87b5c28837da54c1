//! CLI module for formulary.
//!
//! This module contains all CLI logic so main.rs stays a two-line shim and
//! every command can be exercised from tests.

mod args;
mod commands;
mod output;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use args::{Args, Assignment, Command};
pub use commands::{demo_reports, run_cli, solve, SolveReport};
pub use output::{
    print_formulas, print_help, print_version, render_formulas, render_report, version_string,
};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FORMULARY_LOG";

/// Install a stderr `tracing` subscriber filtered by [`LOG_ENV`].
///
/// Falls back to `warn` when the variable is unset or unparsable. Calling
/// this twice is harmless; the second install is ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests;
