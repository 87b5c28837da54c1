//! Generic solving engine.
//!
//! A formula is a fixed set of five variables plus a [`SolverTable`] that
//! maps every pair of blank variables to a routine deriving them from the
//! other three. The [`Solver`] picks the routine from the presence pattern,
//! runs it against a read-only view of the set, checks the results with the
//! [`FiniteGuard`] and only then writes both values back.

pub mod guard;
pub mod key;
pub mod solver;
pub mod table;
pub mod variable;

pub use guard::{FiniteGuard, GuardConfig};
pub use key::UnknownKey;
pub use solver::{Formula, Solver};
pub use table::{Routine, SolverEntry, SolverTable, SolverTableBuilder};
pub use variable::{Variable, VariableEntry, VariableSet, VARIABLE_COUNT};
