//! # formulary
//!
//! Closed-form solvers for formulas over exactly five variables.
//!
//! Supply any three values, leave two blank, and the solver derives the
//! missing pair:
//! - Each formula owns a fixed table with one routine per pair of unknowns
//! - Routines are pure; results are written back only when both are valid
//! - Kinematic solutions can be checked against their governing equations
//!
//! ## Example
//!
//! ```rust
//! use formulary::prelude::*;
//!
//! let solver = Solver::new(kinematics::table()?);
//! let mut set = VariableSet::new()
//!     .with(Kinematic::Acceleration, 1.3)
//!     .with(Kinematic::FinalVelocity, 8.7)
//!     .with(Kinematic::Time, 38.351);
//!
//! solver.calculate(&mut set)?;
//! assert!(set.has(Kinematic::Distance));
//! kinematics::verify(&set, 1e-9)?;
//! # Ok::<(), formulary::FormulaError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::suboptimal_flops,  // Closed forms read better unfused
    clippy::imprecise_flops,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod formulas;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{SolverConfig, SolverConfigBuilder};
    pub use crate::engine::{
        FiniteGuard, Formula, GuardConfig, Solver, SolverTable, UnknownKey, Variable, VariableSet,
    };
    pub use crate::error::{FormulaError, FormulaResult};
    pub use crate::formulas::{
        kinematics, placeholder, FormulaKind, GoverningEquation, Kinematic, Letter, Motion,
    };
}

/// Re-export for public API
pub use error::{FormulaError, FormulaResult};
