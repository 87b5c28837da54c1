//! CLI command handlers.
//!
//! Each handler is split into a pure part that returns data (and can be
//! tested) and a thin printing wrapper used by [`run_cli`].

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;
use uom::si::velocity::meter_per_second;

use super::output::{print_formulas, print_help, print_version, render_report};
use super::{Args, Assignment, Command};
use crate::config::{OutputFormat, SolverConfig};
use crate::engine::{Solver, SolverTable, UnknownKey, Variable, VariableEntry, VariableSet};
use crate::error::FormulaResult;
use crate::formulas::{kinematics, placeholder, FormulaKind, Motion};

/// Outcome of one solve, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    /// Formula used.
    pub formula: FormulaKind,
    /// Unknown key that was solved, as a binary string.
    pub key: String,
    /// Names of the two variables that were derived.
    pub solved: Vec<String>,
    /// All variables after solving.
    pub variables: Vec<VariableEntry>,
    /// The governing equations were checked and held. `false` when the
    /// formula has none or verification is disabled; a failed check is an
    /// error, not a report.
    pub verified: bool,
    /// Distance over time, for kinematics.
    pub average_velocity: Option<f64>,
}

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Demo => run_demo(),
        Command::Solve {
            formula,
            assignments,
            config_path,
            json,
        } => run_solve(formula, &assignments, config_path.as_deref(), json),
        Command::List => {
            print_formulas();
            ExitCode::SUCCESS
        }
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Solve one problem and print the result.
#[must_use]
pub fn run_solve(
    formula: FormulaKind,
    assignments: &[Assignment],
    config_path: Option<&Path>,
    json: bool,
) -> ExitCode {
    let result = load_config(config_path).and_then(|mut config| {
        if json {
            config.output.format = OutputFormat::Json;
        }
        let report = solve(formula, assignments, &config)?;
        render_report(&report, &config.output)
    });

    match result {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Solve the demonstration problems and print each result.
#[must_use]
pub fn run_demo() -> ExitCode {
    let config = SolverConfig::default();
    match demo_reports(&config) {
        Ok(reports) => {
            for report in &reports {
                match render_report(report, &config.output) {
                    Ok(rendered) => println!("{rendered}\n"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::from(1);
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// The demonstration problems: one per formula.
///
/// # Errors
///
/// Returns the first solve error encountered.
pub fn demo_reports(config: &SolverConfig) -> FormulaResult<Vec<SolveReport>> {
    let problems: [(FormulaKind, &[(&str, f64)]); 3] = [
        (FormulaKind::Keyed, &[("a", 23.33), ("c", 1.23), ("e", 0.847_55)]),
        (FormulaKind::Ordinal, &[("b", 1.4), ("c", 1.0), ("d", 2.0)]),
        (
            FormulaKind::Kinematics,
            &[("acceleration", 1.3), ("final_velocity", 8.7), ("time", 38.351)],
        ),
    ];

    problems
        .into_iter()
        .map(|(formula, knowns)| {
            let assignments: Vec<Assignment> = knowns
                .iter()
                .map(|&(name, value)| Assignment {
                    name: name.to_string(),
                    value,
                })
                .collect();
            solve(formula, &assignments, config)
        })
        .collect()
}

/// Solve one problem.
///
/// # Errors
///
/// Returns an error if a name is unknown, the combination of unknowns is
/// not solvable, a routine rejects its inputs, or verification fails.
pub fn solve(
    formula: FormulaKind,
    assignments: &[Assignment],
    config: &SolverConfig,
) -> FormulaResult<SolveReport> {
    match formula {
        FormulaKind::Keyed => {
            let solved = solve_with(placeholder::keyed_table()?, assignments, config)?;
            Ok(solved.into_report(formula, false, None))
        }
        FormulaKind::Ordinal => {
            let solved = solve_with(placeholder::ordinal_table()?, assignments, config)?;
            Ok(solved.into_report(formula, false, None))
        }
        FormulaKind::Kinematics => {
            let solved = solve_with(kinematics::table()?, assignments, config)?;
            let verified = config.verification.enabled;
            if verified {
                kinematics::verify(&solved.set, config.verification.relative_tolerance)?;
            }
            let average = Motion::from_set(&solved.set)?
                .average_velocity()
                .map(|v| v.get::<meter_per_second>());
            Ok(solved.into_report(formula, verified, average))
        }
    }
}

fn load_config(path: Option<&Path>) -> FormulaResult<SolverConfig> {
    path.map_or_else(|| Ok(SolverConfig::default()), SolverConfig::load)
}

/// A set after one successful solve.
struct Solved<V> {
    set: VariableSet<V>,
    key: UnknownKey,
}

impl<V: Variable> Solved<V> {
    fn into_report(
        self,
        formula: FormulaKind,
        verified: bool,
        average_velocity: Option<f64>,
    ) -> SolveReport {
        SolveReport {
            formula,
            key: self.key.to_string(),
            solved: self
                .key
                .unknowns::<V>()
                .map(|v| v.name().to_string())
                .collect(),
            variables: self.set.entries(),
            verified,
            average_velocity,
        }
    }
}

/// Resolve assignments, then run the solver once.
fn solve_with<V: Variable>(
    table: SolverTable<V>,
    assignments: &[Assignment],
    config: &SolverConfig,
) -> FormulaResult<Solved<V>> {
    let mut set = VariableSet::new();
    for assignment in assignments {
        set.set(V::from_name(&assignment.name)?, assignment.value);
    }

    let solver = Solver::new(table).with_guard(config.guard);
    let key = solver.calculate(&mut set)?;
    Ok(Solved { set, key })
}
