//! Solver tables.
//!
//! A table maps every two-unknown key to the routine that derives those two
//! unknowns from the three knowns. Tables are assembled once through
//! [`SolverTableBuilder`] and never change afterwards. Lookup is a direct
//! index by key bits.

use std::fmt;

use super::key::UnknownKey;
use super::variable::{Variable, VariableSet};
use crate::error::{FormulaError, FormulaResult};

/// Computes the two unknowns of one pair from the three knowns.
///
/// Returns values in the order the pair was registered. Routines only read
/// the set; the solver commits their results.
pub type Routine<V> = Box<dyn Fn(&VariableSet<V>) -> FormulaResult<[f64; 2]> + Send + Sync>;

/// One registered pair and its routine.
pub struct SolverEntry<V> {
    unknowns: (V, V),
    routine: Routine<V>,
}

impl<V: Variable> SolverEntry<V> {
    /// The two variables this entry solves for, in result order.
    #[must_use]
    pub const fn unknowns(&self) -> (V, V) {
        self.unknowns
    }

    /// Run the routine against a set.
    ///
    /// # Errors
    ///
    /// Propagates whatever the routine reports.
    pub fn solve(&self, set: &VariableSet<V>) -> FormulaResult<[f64; 2]> {
        (self.routine)(set)
    }
}

impl<V: Variable> fmt::Debug for SolverEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolverEntry")
            .field("unknowns", &self.unknowns)
            .finish_non_exhaustive()
    }
}

/// Immutable key-to-routine mapping covering every two-unknown pair.
pub struct SolverTable<V> {
    entries: [Option<SolverEntry<V>>; UnknownKey::SLOTS],
}

impl<V: Variable> SolverTable<V> {
    /// Start assembling a table.
    #[must_use]
    pub fn builder() -> SolverTableBuilder<V> {
        SolverTableBuilder::new()
    }

    /// Entry registered for `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: UnknownKey) -> Option<&SolverEntry<V>> {
        self.entries
            .get(usize::from(key.bits()))
            .and_then(Option::as_ref)
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (UnknownKey, &SolverEntry<V>)> {
        self.entries.iter().enumerate().filter_map(|(bits, entry)| {
            let bits = u8::try_from(bits).ok()?;
            entry
                .as_ref()
                .map(|e| (UnknownKey::from_blank_mask(bits), e))
        })
    }
}

impl<V: Variable> fmt::Debug for SolverTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Collects entries and checks coverage before producing a [`SolverTable`].
pub struct SolverTableBuilder<V> {
    entries: [Option<SolverEntry<V>>; UnknownKey::SLOTS],
    problems: Vec<String>,
}

impl<V: Variable> Default for SolverTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variable> SolverTableBuilder<V> {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
            problems: Vec::new(),
        }
    }

    /// Register the routine solving for `first` and `second`.
    #[must_use]
    pub fn entry<F>(mut self, first: V, second: V, routine: F) -> Self
    where
        F: Fn(&VariableSet<V>) -> FormulaResult<[f64; 2]> + Send + Sync + 'static,
    {
        if first == second {
            self.problems.push(format!(
                "entry names '{}' twice",
                first.name()
            ));
            return self;
        }

        let slot = &mut self.entries[usize::from(UnknownKey::pair(first, second).bits())];
        if slot.is_some() {
            self.problems.push(format!(
                "pair ({}, {}) registered twice",
                first.name(),
                second.name()
            ));
            return self;
        }

        *slot = Some(SolverEntry {
            unknowns: (first, second),
            routine: Box::new(routine),
        });
        self
    }

    /// Finish the table.
    ///
    /// # Errors
    ///
    /// Returns a `Table` error if any entry was malformed or duplicated, or
    /// if any two-unknown pair has no entry.
    pub fn build(mut self) -> FormulaResult<SolverTable<V>> {
        for (a, b) in UnknownKey::all_pairs::<V>() {
            if self.entries[usize::from(UnknownKey::pair(a, b).bits())].is_none() {
                self.problems
                    .push(format!("pair ({}, {}) has no entry", a.name(), b.name()));
            }
        }

        if self.problems.is_empty() {
            Ok(SolverTable {
                entries: self.entries,
            })
        } else {
            Err(FormulaError::table(self.problems.join("; ")))
        }
    }
}
