//! CLI module tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::args::{Args, Assignment, Command};
use super::commands::{demo_reports, run_cli, solve};
use super::output::{render_formulas, render_report, version_string};
use crate::config::{OutputConfig, OutputFormat, SolverConfig};
use crate::error::FormulaError;
use crate::formulas::FormulaKind;
use std::path::PathBuf;
use std::process::ExitCode;

fn assignments(pairs: &[(&str, f64)]) -> Vec<Assignment> {
    pairs
        .iter()
        .map(|&(name, value)| Assignment {
            name: name.to_string(),
            value,
        })
        .collect()
}

fn value_of(report: &super::SolveReport, name: &str) -> Option<f64> {
    report
        .variables
        .iter()
        .find(|entry| entry.name == name)
        .and_then(|entry| entry.value)
}

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["formulary"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_flags() {
    for flag in ["-h", "--help", "help"] {
        let args = Args::parse_from(["formulary", flag]);
        assert_eq!(args.command, Command::Help);
    }
}

#[test]
fn test_parse_version_flags() {
    for flag in ["-V", "--version", "version"] {
        let args = Args::parse_from(["formulary", flag]);
        assert_eq!(args.command, Command::Version);
    }
}

#[test]
fn test_parse_unknown_command_shows_help() {
    let args = Args::parse_from(["formulary", "integrate"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_demo_and_list() {
    assert_eq!(Args::parse_from(["formulary", "demo"]).command, Command::Demo);
    assert_eq!(Args::parse_from(["formulary", "list"]).command, Command::List);
}

#[test]
fn test_parse_solve() {
    let args = Args::parse_from([
        "formulary",
        "solve",
        "kinematics",
        "acceleration=1.3",
        "final_velocity=8.7",
        "time=38.351",
    ]);
    assert_eq!(
        args.command,
        Command::Solve {
            formula: FormulaKind::Kinematics,
            assignments: assignments(&[
                ("acceleration", 1.3),
                ("final_velocity", 8.7),
                ("time", 38.351),
            ]),
            config_path: None,
            json: false,
        }
    );
}

#[test]
fn test_parse_solve_with_options() {
    let args = Args::parse_from([
        "formulary",
        "solve",
        "keyed",
        "--json",
        "a=1",
        "-c",
        "formulary.yaml",
        "b=2",
        "c=3",
    ]);
    match args.command {
        Command::Solve {
            formula,
            assignments,
            config_path,
            json,
        } => {
            assert_eq!(formula, FormulaKind::Keyed);
            assert_eq!(assignments.len(), 3);
            assert_eq!(config_path, Some(PathBuf::from("formulary.yaml")));
            assert!(json);
        }
        other => panic!("expected solve, got {other:?}"),
    }
}

#[test]
fn test_parse_solve_missing_formula() {
    let args = Args::parse_from(["formulary", "solve"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_solve_unknown_formula() {
    let args = Args::parse_from(["formulary", "solve", "quadratic", "a=1"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_solve_bad_assignment() {
    let args = Args::parse_from(["formulary", "solve", "keyed", "a:1"]);
    assert_eq!(args.command, Command::Help);
    let args = Args::parse_from(["formulary", "solve", "keyed", "a=one"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_solve_config_missing_path() {
    let args = Args::parse_from(["formulary", "solve", "keyed", "--config"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_assignment_parse() {
    let parsed = Assignment::parse(" time = 2.5 ").unwrap();
    assert_eq!(parsed.name, "time");
    assert!((parsed.value - 2.5).abs() < f64::EPSILON);
    assert!(Assignment::parse("=2.5").is_none());
    assert!(Assignment::parse("time").is_none());
    assert_eq!(Assignment::parse("a=-1e3").map(|a| a.value), Some(-1000.0));
}

// ============================================================================
// Command tests
// ============================================================================

#[test]
fn test_solve_kinematics() {
    let config = SolverConfig::default();
    let report = solve(
        FormulaKind::Kinematics,
        &assignments(&[
            ("acceleration", 1.3),
            ("final_velocity", 8.7),
            ("time", 38.351),
        ]),
        &config,
    )
    .unwrap();

    assert_eq!(report.solved, vec!["distance", "initial_velocity"]);
    assert_eq!(report.key, "00101");
    assert!(report.verified);
    let vi = value_of(&report, "initial_velocity").unwrap();
    assert!((vi - (8.7 - 1.3 * 38.351)).abs() < 1e-9);
    assert!(report.average_velocity.is_some());
}

#[test]
fn test_solve_kinematics_large_cancelling_terms() {
    let report = solve(
        FormulaKind::Kinematics,
        &assignments(&[
            ("acceleration", 1.3e5),
            ("time", 38_351.7),
            ("final_velocity", 8.7),
        ]),
        &SolverConfig::default(),
    )
    .unwrap();

    assert!(report.verified);
    let vi = value_of(&report, "initial_velocity").unwrap();
    assert!(vi < -4.9e9);
}

#[test]
fn test_solve_kinematics_reports_motion() {
    let config = SolverConfig::builder().verify(true).build().unwrap();
    let report = solve(
        FormulaKind::Kinematics,
        &assignments(&[("distance", 86.0), ("time", 4.0), ("initial_velocity", 12.0)]),
        &config,
    )
    .unwrap();

    assert!(report.verified);
    assert_eq!(report.solved, vec!["final_velocity", "acceleration"]);
    assert_eq!(report.key, "11000");
    assert_eq!(report.average_velocity, Some(21.5));
}

#[test]
fn test_solve_keyed_demo() {
    let report = solve(
        FormulaKind::Keyed,
        &assignments(&[("a", 23.33), ("c", 1.23), ("e", 0.847_55)]),
        &SolverConfig::default(),
    )
    .unwrap();
    assert_eq!(value_of(&report, "b"), Some(10.1));
    assert_eq!(value_of(&report, "d"), Some(10.2));
    assert!(!report.verified);
    assert_eq!(report.average_velocity, None);
}

#[test]
fn test_solve_without_verification() {
    let config = SolverConfig::builder().verify(false).build().unwrap();
    let report = solve(
        FormulaKind::Kinematics,
        &assignments(&[("distance", 100.0), ("time", 10.0), ("initial_velocity", 0.0)]),
        &config,
    )
    .unwrap();
    assert!(!report.verified);
}

#[test]
fn test_solve_unknown_variable() {
    let err = solve(
        FormulaKind::Kinematics,
        &assignments(&[("speed", 1.0)]),
        &SolverConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FormulaError::UnknownVariable { .. }));
}

#[test]
fn test_solve_wrong_unknown_count() {
    let err = solve(
        FormulaKind::Ordinal,
        &assignments(&[("a", 1.0), ("b", 2.0)]),
        &SolverConfig::default(),
    )
    .unwrap_err();
    assert!(err.is_unrecognized_combination());
}

#[test]
fn test_solve_domain_error() {
    let err = solve(
        FormulaKind::Kinematics,
        &assignments(&[("distance", 100.0), ("time", 0.0), ("initial_velocity", 3.0)]),
        &SolverConfig::default(),
    )
    .unwrap_err();
    assert!(err.is_domain_error());
}

#[test]
fn test_demo_reports() {
    let reports = demo_reports(&SolverConfig::default()).unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].formula, FormulaKind::Keyed);
    assert_eq!(value_of(&reports[1], "a"), Some(4.1));
    assert_eq!(value_of(&reports[1], "e"), Some(4.2));
    assert!(reports[2].verified);
}

#[test]
fn test_run_cli_simple_commands() {
    for command in [Command::Help, Command::Version, Command::List, Command::Demo] {
        assert_eq!(run_cli(Args { command }), ExitCode::SUCCESS);
    }
}

#[test]
fn test_run_cli_solve_failure_exit_code() {
    let command = Command::Solve {
        formula: FormulaKind::Keyed,
        assignments: assignments(&[("a", 1.0)]),
        config_path: None,
        json: false,
    };
    assert_eq!(run_cli(Args { command }), ExitCode::from(1));
}

#[test]
fn test_run_cli_missing_config_file() {
    let command = Command::Solve {
        formula: FormulaKind::Keyed,
        assignments: assignments(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]),
        config_path: Some(PathBuf::from("/nonexistent/formulary.yaml")),
        json: true,
    };
    assert_eq!(run_cli(Args { command }), ExitCode::from(1));
}

// ============================================================================
// Output tests
// ============================================================================

#[test]
fn test_render_text_report() {
    let report = solve(
        FormulaKind::Keyed,
        &assignments(&[("a", 23.33), ("c", 1.23), ("e", 0.847_55)]),
        &SolverConfig::default(),
    )
    .unwrap();
    let output = OutputConfig {
        format: OutputFormat::Text,
        precision: 2,
    };
    let text = render_report(&report, &output).unwrap();
    assert!(text.contains("Formula: keyed (unknown key 01010)"));
    assert!(text.contains("b = 10.10  (solved)"));
    assert!(text.contains("a = 23.33\n"));
    assert!(text.contains("not checked"));
}

#[test]
fn test_render_json_report() {
    let report = solve(
        FormulaKind::Kinematics,
        &assignments(&[
            ("acceleration", 1.3),
            ("final_velocity", 8.7),
            ("time", 38.351),
        ]),
        &SolverConfig::default(),
    )
    .unwrap();
    let output = OutputConfig {
        format: OutputFormat::Json,
        precision: 6,
    };
    let json = render_report(&report, &output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["formula"], "kinematics");
    assert_eq!(value["verified"], true);
    assert_eq!(value["solved"][0], "distance");
    assert_eq!(value["variables"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_render_formulas_lists_every_kind() {
    let listing = render_formulas();
    for kind in FormulaKind::ALL {
        assert!(listing.contains(kind.name()));
    }
    assert!(listing.contains("initial_velocity"));
}

#[test]
fn test_version_string_carries_package_version() {
    let version = version_string();
    assert!(version.starts_with("formulary "));
    assert!(version.contains(env!("CARGO_PKG_VERSION")));
}
