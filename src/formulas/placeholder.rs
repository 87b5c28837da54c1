//! Placeholder formulas over five letter variables.
//!
//! These tables carry no physical meaning. Each routine ignores its inputs
//! and writes fixed marker values, which makes them useful for exercising
//! the dispatch machinery: the values written reveal which routine ran.
//!
//! - [`keyed_table`]: `(key + 0.1, key + 0.2)`, where `key` is the pair's
//!   unknown-key value (`a,b` → 3.1, 3.2; `d,e` → 24.1, 24.2).
//! - [`ordinal_table`]: `(n + 0.1, n + 0.2)`, where `n` is the pair's 1-based
//!   position in lexicographic order (`a,b` → 1.1, 1.2; `d,e` → 10.1, 10.2).
//!
//! The first value always goes to the lower-indexed letter.

use serde::{Deserialize, Serialize};

use crate::engine::{SolverTable, UnknownKey, Variable, VARIABLE_COUNT};
use crate::error::FormulaResult;

/// Letter variables `a` through `e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Letter {
    /// Bit 0.
    A,
    /// Bit 1.
    B,
    /// Bit 2.
    C,
    /// Bit 3.
    D,
    /// Bit 4.
    E,
}

impl Variable for Letter {
    const ALL: [Self; VARIABLE_COUNT] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
        }
    }
}

/// Marker values `(base + 0.1, base + 0.2)`.
fn markers(base: u8) -> [f64; 2] {
    let base = f64::from(base);
    [base + 0.1, base + 0.2]
}

/// Table whose markers are derived from the unknown key.
///
/// # Errors
///
/// Never fails in practice; the builder's coverage check is still honored.
pub fn keyed_table() -> FormulaResult<SolverTable<Letter>> {
    UnknownKey::all_pairs::<Letter>()
        .fold(SolverTable::builder(), |builder, (first, second)| {
            let values = markers(UnknownKey::pair(first, second).bits());
            builder.entry(first, second, move |_| Ok(values))
        })
        .build()
}

/// Table whose markers are derived from the pair's ordinal position.
///
/// # Errors
///
/// Never fails in practice; the builder's coverage check is still honored.
pub fn ordinal_table() -> FormulaResult<SolverTable<Letter>> {
    UnknownKey::all_pairs::<Letter>()
        .zip(1u8..)
        .fold(SolverTable::builder(), |builder, ((first, second), n)| {
            let values = markers(n);
            builder.entry(first, second, move |_| Ok(values))
        })
        .build()
}
