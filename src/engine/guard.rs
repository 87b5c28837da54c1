//! Finite-value guard.
//!
//! Routines check their own preconditions (zero divisors, negative
//! radicands), but floating-point overflow can still yield infinities from
//! perfectly legal inputs. The guard inspects routine results before they
//! are committed and stops the solve on anything non-finite, so a set never
//! ends up holding NaN or Inf.

use serde::{Deserialize, Serialize};

use super::variable::Variable;
use crate::error::{FormulaError, FormulaResult};

/// Guard configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    /// NaN/Inf detection enabled.
    #[serde(default = "default_true")]
    pub check_finite: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { check_finite: true }
    }
}

/// Post-routine check applied to every derived value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FiniteGuard {
    config: GuardConfig,
}

impl FiniteGuard {
    /// Create a guard from configuration.
    #[must_use]
    pub const fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Guard configuration.
    #[must_use]
    pub const fn config(&self) -> GuardConfig {
        self.config
    }

    /// Check one derived value.
    ///
    /// # Errors
    ///
    /// Returns a `Domain` error naming the variable if the value is NaN or
    /// infinite and finite checking is enabled.
    pub fn check<V: Variable>(&self, variable: V, value: f64) -> FormulaResult<()> {
        if self.config.check_finite && !value.is_finite() {
            return Err(FormulaError::domain(format!(
                "non-finite result {value} for '{}'",
                variable.name()
            )));
        }
        Ok(())
    }
}
