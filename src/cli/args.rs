//! CLI argument parsing.
//!
//! Hand-rolled so that parsing can be driven from any iterator of strings
//! in tests.

use std::path::PathBuf;

use crate::formulas::FormulaKind;

/// A `name=value` pair from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Variable name.
    pub name: String,
    /// Known value.
    pub value: f64,
}

impl Assignment {
    /// Parse `name=value`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let (name, value) = text.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let value = value.trim().parse().ok()?;
        Some(Self {
            name: name.to_string(),
            value,
        })
    }
}

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Solve the demonstration problems for every formula.
    Demo,
    /// Solve one problem.
    Solve {
        /// Which formula to use.
        formula: FormulaKind,
        /// Known values.
        assignments: Vec<Assignment>,
        /// Optional configuration file.
        config_path: Option<PathBuf>,
        /// Force JSON output.
        json: bool,
    },
    /// List formulas and their variables.
    List,
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "demo" => Command::Demo,
            "solve" => Self::parse_solve_command(args),
            "list" => Command::List,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'solve' command arguments.
    fn parse_solve_command(args: &[String]) -> Command {
        let Some(name) = args.get(2) else {
            eprintln!("Error: 'solve' command requires a formula name");
            return Command::Help;
        };
        let formula = match FormulaKind::from_name(name) {
            Ok(formula) => formula,
            Err(e) => {
                eprintln!("Error: {e}");
                return Command::Help;
            }
        };

        let mut assignments = Vec::new();
        let mut config_path = None;
        let mut json = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if let Some(path) = args.get(i + 1) {
                        config_path = Some(PathBuf::from(path));
                        i += 2;
                    } else {
                        eprintln!("Error: '--config' requires a path");
                        return Command::Help;
                    }
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                other => {
                    let Some(assignment) = Assignment::parse(other) else {
                        eprintln!("Error: expected name=value, got '{other}'");
                        return Command::Help;
                    };
                    assignments.push(assignment);
                    i += 1;
                }
            }
        }

        Command::Solve {
            formula,
            assignments,
            config_path,
            json,
        }
    }
}
