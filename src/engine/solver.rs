//! The solver: key lookup, routine dispatch and atomic commit.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::guard::{FiniteGuard, GuardConfig};
use super::key::UnknownKey;
use super::table::SolverTable;
use super::variable::{Variable, VariableEntry, VariableSet};
use crate::error::{FormulaError, FormulaResult};

/// Fills in the two blank variables of a set using a fixed table.
///
/// The solver is immutable after construction and can be shared across
/// threads (wrap it in an [`Arc`]) to serve any number of variable sets.
pub struct Solver<V> {
    table: SolverTable<V>,
    guard: FiniteGuard,
}

impl<V: Variable> fmt::Debug for Solver<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("table", &self.table)
            .field("guard", &self.guard)
            .finish()
    }
}

impl<V: Variable> Solver<V> {
    /// Create a solver with the default guard.
    #[must_use]
    pub fn new(table: SolverTable<V>) -> Self {
        Self {
            table,
            guard: FiniteGuard::default(),
        }
    }

    /// Replace the guard configuration.
    #[must_use]
    pub fn with_guard(mut self, config: GuardConfig) -> Self {
        self.guard = FiniteGuard::new(config);
        self
    }

    /// The table this solver dispatches through.
    #[must_use]
    pub const fn table(&self) -> &SolverTable<V> {
        &self.table
    }

    /// Derive the two blank variables of `set` and store them.
    ///
    /// Returns the key that was solved. On error the set is left exactly as
    /// it was: routines only read it, and both results are written after the
    /// routine and the guard have succeeded.
    ///
    /// # Errors
    ///
    /// - `UnrecognizedCombination` if the set does not have exactly two
    ///   blanks, or no routine is registered for them
    /// - `Domain` if the routine rejects its inputs or produces a non-finite
    ///   value
    pub fn calculate(&self, set: &mut VariableSet<V>) -> FormulaResult<UnknownKey> {
        let key = set.unknown_key();
        trace!(key = %key, unknowns = key.unknown_count(), "looking up routine");

        let entry = self
            .table
            .lookup(key)
            .ok_or(FormulaError::UnrecognizedCombination {
                key: key.bits(),
                unknowns: key.unknown_count(),
            })?;

        let (first, second) = entry.unknowns();
        let [a, b] = entry.solve(set)?;
        self.guard.check(first, a)?;
        self.guard.check(second, b)?;

        set.set(first, a);
        set.set(second, b);
        debug!(
            key = %key,
            first = first.name(),
            first_value = a,
            second = second.name(),
            second_value = b,
            "solved"
        );
        Ok(key)
    }
}

/// A variable set bundled with a shared solver.
///
/// This is the shape callers usually want: set the knowns, call
/// [`Formula::calculate`], read everything back.
#[derive(Clone)]
pub struct Formula<V> {
    solver: Arc<Solver<V>>,
    values: VariableSet<V>,
}

impl<V: Variable> fmt::Debug for Formula<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formula")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl<V: Variable> Formula<V> {
    /// Create a formula with every variable blank.
    #[must_use]
    pub fn new(solver: Arc<Solver<V>>) -> Self {
        Self {
            solver,
            values: VariableSet::new(),
        }
    }

    /// Store a known value.
    pub fn set(&mut self, variable: V, value: f64) -> &mut Self {
        self.values.set(variable, value);
        self
    }

    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` if the variable is blank.
    pub fn get(&self, variable: V) -> FormulaResult<f64> {
        self.values.get(variable)
    }

    /// Whether the variable holds a value.
    #[must_use]
    pub fn has(&self, variable: V) -> bool {
        self.values.has(variable)
    }

    /// Blank every variable to start a new problem.
    pub fn reset(&mut self) {
        self.values.reset();
    }

    /// Solve for the two blank variables.
    ///
    /// # Errors
    ///
    /// See [`Solver::calculate`].
    pub fn calculate(&mut self) -> FormulaResult<UnknownKey> {
        self.solver.calculate(&mut self.values)
    }

    /// Current values.
    #[must_use]
    pub const fn values(&self) -> &VariableSet<V> {
        &self.values
    }

    /// Owned, serializable view of the current values.
    #[must_use]
    pub fn entries(&self) -> Vec<VariableEntry> {
        self.values.entries()
    }
}
