//! CLI output formatting.
//!
//! Rendering is kept separate from printing so reports can be checked in
//! tests without capturing stdout.

use std::fmt::Write as _;

use super::commands::SolveReport;
use crate::config::{OutputConfig, OutputFormat};
use crate::error::{FormulaError, FormulaResult};
use crate::formulas::FormulaKind;

/// Print version information.
pub fn print_version() {
    println!("{}", version_string());
}

/// Version line: package version from the build script, plus the git
/// revision when built from a checkout.
#[must_use]
pub fn version_string() -> String {
    let version = option_env!("FORMULARY_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("formulary {version} ({hash})"),
        _ => format!("formulary {version}"),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"formulary - Solve five-variable formulas with exactly two unknowns

USAGE:
    formulary <COMMAND> [OPTIONS]

COMMANDS:
    demo                        Solve a sample problem for every formula

    solve <formula> name=value...
                                Solve one problem; leave exactly two
                                variables unset
        -c, --config <file>     Load settings from a YAML file
        --json                  Print the result as JSON

    list                        List formulas and their variables

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    formulary solve kinematics acceleration=1.3 final_velocity=8.7 time=38.351
    formulary solve keyed a=23.33 c=1.23 e=0.84755 --json
    formulary solve ordinal b=1.4 c=1 d=2 --config formulary.yaml

ENVIRONMENT:
    FORMULARY_LOG               Log filter (default: warn), e.g. debug
"
    );
}

/// Print every formula with its variables.
pub fn print_formulas() {
    print!("{}", render_formulas());
}

/// Listing printed by `formulary list`.
#[must_use]
pub fn render_formulas() -> String {
    let mut out = String::from("Available formulas:\n");
    for kind in FormulaKind::ALL {
        let _ = writeln!(out, "\n  {:<12} {}", kind.name(), kind.description());
        let _ = writeln!(out, "  {:<12} variables: {}", "", kind.variable_names().join(", "));
    }
    out
}

/// Render a report in the configured format.
///
/// # Errors
///
/// Returns a `Serialization` error if JSON encoding fails.
pub fn render_report(report: &SolveReport, output: &OutputConfig) -> FormulaResult<String> {
    match output.format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| FormulaError::serialization(e.to_string())),
        OutputFormat::Text => Ok(render_text(report, output.precision)),
    }
}

fn render_text(report: &SolveReport, precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Formula: {} (unknown key {})", report.formula, report.key);

    let width = report
        .variables
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);

    for entry in &report.variables {
        let value = entry
            .value
            .map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"));
        let marker = if report.solved.contains(&entry.name) {
            "  (solved)"
        } else {
            ""
        };
        let _ = writeln!(out, "  {:<width$} = {value}{marker}", entry.name);
    }

    if let Some(average) = report.average_velocity {
        let _ = writeln!(out, "  average velocity = {average:.precision$} m/s");
    }
    if report.verified {
        out.push_str("Verified: governing equations hold");
    } else {
        out.push_str("Verified: not checked");
    }
    out
}
