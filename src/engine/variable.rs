//! Variable sets.
//!
//! A formula works over exactly [`VARIABLE_COUNT`] named slots. Each slot is
//! either present (holds a value) or blank (unknown). Values live in a
//! fixed array indexed by the variable's position; presence is a bitset
//! over the same positions, so the unknown key falls out of the bitset
//! directly.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::key::UnknownKey;
use crate::error::{FormulaError, FormulaResult};

/// Number of variables in every formula.
pub const VARIABLE_COUNT: usize = 5;

/// Bitmask with one bit per variable position.
pub(crate) const FULL_MASK: u8 = (1 << VARIABLE_COUNT) - 1;

/// A member of a formula's fixed variable enumeration.
///
/// `ALL` lists the variables in bit order; `index` must agree with it.
pub trait Variable: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every variable, in bit order.
    const ALL: [Self; VARIABLE_COUNT];

    /// Bit position of this variable.
    fn index(self) -> usize;

    /// Stable lowercase name.
    fn name(self) -> &'static str;

    /// Resolve a variable by its name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariable` if no variable has this name.
    fn from_name(name: &str) -> FormulaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| FormulaError::UnknownVariable {
                name: name.to_string(),
            })
    }

    /// Single-bit mask for this variable.
    fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// One variable rendered for display or serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableEntry {
    /// Variable name.
    pub name: String,
    /// Value, or `None` if blank.
    pub value: Option<f64>,
}

/// The fixed-size collection of named slots for one problem instance.
///
/// Equality compares presence and the present values only.
#[derive(Clone)]
pub struct VariableSet<V> {
    values: [f64; VARIABLE_COUNT],
    presence: u8,
    _marker: PhantomData<V>,
}

impl<V: Variable> Default for VariableSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variable> VariableSet<V> {
    /// Create a set with every variable blank.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [0.0; VARIABLE_COUNT],
            presence: 0,
            _marker: PhantomData,
        }
    }

    /// Builder-style `set`.
    #[must_use]
    pub fn with(mut self, variable: V, value: f64) -> Self {
        self.set(variable, value);
        self
    }

    /// Store a value and mark the variable present.
    pub fn set(&mut self, variable: V, value: f64) {
        self.values[variable.index()] = value;
        self.presence |= variable.bit();
    }

    /// Read a present value.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` if the variable is blank.
    pub fn get(&self, variable: V) -> FormulaResult<f64> {
        if self.has(variable) {
            Ok(self.values[variable.index()])
        } else {
            Err(FormulaError::MissingValue {
                variable: variable.name(),
            })
        }
    }

    /// Whether the variable holds a value.
    #[must_use]
    pub fn has(&self, variable: V) -> bool {
        self.presence & variable.bit() != 0
    }

    /// Mark every variable blank.
    ///
    /// Stored values are left in place; blank slots are never readable.
    pub fn reset(&mut self) {
        self.presence = 0;
    }

    /// Number of present variables.
    #[must_use]
    pub const fn known_count(&self) -> u32 {
        self.presence.count_ones()
    }

    /// Key encoding which variables are blank.
    #[must_use]
    pub const fn unknown_key(&self) -> UnknownKey {
        UnknownKey::from_blank_mask(!self.presence & FULL_MASK)
    }

    /// Blank variables, in bit order.
    pub fn unknowns(&self) -> impl Iterator<Item = V> + '_ {
        V::ALL.into_iter().filter(|v| !self.has(*v))
    }

    /// Every variable with its value (if present), in bit order.
    pub fn iter(&self) -> impl Iterator<Item = (V, Option<f64>)> + '_ {
        V::ALL
            .into_iter()
            .map(|v| (v, self.has(v).then(|| self.values[v.index()])))
    }

    /// Owned, serializable view of the set.
    #[must_use]
    pub fn entries(&self) -> Vec<VariableEntry> {
        self.iter()
            .map(|(v, value)| VariableEntry {
                name: v.name().to_string(),
                value,
            })
            .collect()
    }
}

impl<V: Variable> PartialEq for VariableSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.presence == other.presence && self.iter().eq(other.iter())
    }
}

impl<V: Variable> fmt::Debug for VariableSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (v, value) in self.iter() {
            map.entry(&v.name(), &value);
        }
        map.finish()
    }
}
