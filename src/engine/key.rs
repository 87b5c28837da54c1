//! Unknown keys: bitmasks over blank variable positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::variable::{Variable, FULL_MASK, VARIABLE_COUNT};

/// Bitmask with bit `i` set iff variable `i` is blank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct UnknownKey(u8);

impl UnknownKey {
    /// Number of distinct keys (one per subset of variables).
    pub const SLOTS: usize = 1 << VARIABLE_COUNT;

    /// Build a key from a blank mask. Bits beyond the variable count are dropped.
    #[must_use]
    pub const fn from_blank_mask(mask: u8) -> Self {
        Self(mask & FULL_MASK)
    }

    /// Key for exactly two blank variables.
    #[must_use]
    pub fn pair<V: Variable>(first: V, second: V) -> Self {
        Self::from_blank_mask(first.bit() | second.bit())
    }

    /// All ten two-unknown pairs, lower index first, in lexicographic order.
    pub fn all_pairs<V: Variable>() -> impl Iterator<Item = (V, V)> {
        (0..VARIABLE_COUNT).flat_map(|i| {
            (i + 1..VARIABLE_COUNT).map(move |j| (V::ALL[i], V::ALL[j]))
        })
    }

    /// Raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Number of blank variables.
    #[must_use]
    pub const fn unknown_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether exactly two variables are blank.
    #[must_use]
    pub const fn is_pair(self) -> bool {
        self.unknown_count() == 2
    }

    /// Whether `variable` is blank under this key.
    #[must_use]
    pub fn contains<V: Variable>(self, variable: V) -> bool {
        self.0 & variable.bit() != 0
    }

    /// Blank variables, in bit order.
    pub fn unknowns<V: Variable>(self) -> impl Iterator<Item = V> {
        V::ALL.into_iter().filter(move |v| self.contains(*v))
    }
}

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05b}", self.0)
    }
}
