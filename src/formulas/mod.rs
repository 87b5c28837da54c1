//! Concrete formulas.
//!
//! - [`placeholder`]: marker-value tables over letters `a`..`e`
//! - [`kinematics`]: constant-acceleration motion
//!
//! plus the supporting [`equation`] trait and the `uom`-typed [`motion`]
//! view of a solved kinematics set.

pub mod equation;
pub mod kinematics;
pub mod motion;
pub mod placeholder;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::Variable;
use crate::error::{FormulaError, FormulaResult};

pub use equation::{EquationVariable, GoverningEquation, Sides};
pub use kinematics::Kinematic;
pub use motion::Motion;
pub use placeholder::Letter;

/// The formulas shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaKind {
    /// Letters, markers derived from the unknown key.
    Keyed,
    /// Letters, markers derived from the pair's ordinal.
    Ordinal,
    /// Constant-acceleration kinematics.
    Kinematics,
}

impl FormulaKind {
    /// Every formula.
    pub const ALL: [Self; 3] = [Self::Keyed, Self::Ordinal, Self::Kinematics];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyed => "keyed",
            Self::Ordinal => "ordinal",
            Self::Kinematics => "kinematics",
        }
    }

    /// Resolve a formula by name.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error naming the accepted formulas.
    pub fn from_name(name: &str) -> FormulaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| {
                FormulaError::config(format!(
                    "unknown formula '{name}' (expected keyed, ordinal or kinematics)"
                ))
            })
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Keyed => "placeholder markers: key + 0.1, key + 0.2",
            Self::Ordinal => "placeholder markers: n + 0.1, n + 0.2 by pair order",
            Self::Kinematics => "constant-acceleration motion (d, t, v_i, v_f, a)",
        }
    }

    /// Variable names, in bit order.
    #[must_use]
    pub fn variable_names(self) -> Vec<&'static str> {
        match self {
            Self::Keyed | Self::Ordinal => Letter::ALL.into_iter().map(Letter::name).collect(),
            Self::Kinematics => Kinematic::ALL.into_iter().map(Kinematic::name).collect(),
        }
    }
}

impl fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
