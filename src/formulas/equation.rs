//! Governing equation definitions.
//!
//! A solved variable set is only trustworthy if it satisfies the relations
//! that define the formula. This module provides the trait used to state
//! those relations and to check a set against them by plugging the values
//! back in.

use std::fmt;

use crate::engine::{Variable, VariableSet};
use crate::error::{FormulaError, FormulaResult};

/// A variable in a governing equation with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationVariable {
    /// Symbol used in the equation (e.g., "v_f", "a")
    pub symbol: String,
    /// Variable name, as used in the variable set
    pub name: String,
    /// Physical units (e.g., "m/s", "s")
    pub units: String,
}

impl EquationVariable {
    /// Create a new equation variable.
    #[must_use]
    pub fn new(symbol: &str, name: &str, units: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            units: units.to_string(),
        }
    }
}

impl fmt::Display for EquationVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.symbol, self.name, self.units)
    }
}

/// Both sides of an equation evaluated on a set, with the magnitude of the
/// terms that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sides {
    /// Left-hand side.
    pub lhs: f64,
    /// Right-hand side.
    pub rhs: f64,
    /// Sum of the absolute values of every term on either side.
    pub magnitude: f64,
}

impl Sides {
    /// A single-term left side against a sum of right-hand terms.
    #[must_use]
    pub fn from_terms(lhs: f64, terms: &[f64]) -> Self {
        Self {
            lhs,
            rhs: terms.iter().sum(),
            magnitude: terms.iter().fold(lhs.abs(), |acc, t| acc + t.abs()),
        }
    }

    /// Difference between the sides relative to the term magnitude.
    ///
    /// Large terms that cancel carry rounding error proportional to their
    /// own size, not to the (small) result, so the scale is the term sum.
    /// It is floored at 1 so values near zero compare absolutely.
    #[must_use]
    pub fn relative_residual(&self) -> f64 {
        (self.lhs - self.rhs).abs() / self.magnitude.max(1.0)
    }
}

/// A relation a solved variable set must satisfy.
pub trait GoverningEquation<V: Variable> {
    /// Equation name.
    fn name(&self) -> &'static str;

    /// LaTeX representation of the equation.
    fn latex(&self) -> &'static str;

    /// Variables participating in the equation.
    fn variables(&self) -> Vec<EquationVariable>;

    /// Evaluate both sides on a set.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` if a participating variable is blank.
    fn sides(&self, set: &VariableSet<V>) -> FormulaResult<Sides>;

    /// Relative residual of the equation on a set.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` if a participating variable is blank.
    fn residual(&self, set: &VariableSet<V>) -> FormulaResult<f64> {
        Ok(self.sides(set)?.relative_residual())
    }

    /// Check that a set satisfies the equation within tolerance.
    ///
    /// # Errors
    ///
    /// Returns `RelationViolated` if the residual exceeds `tolerance` (or is
    /// NaN), and `MissingValue` if a participating variable is blank.
    fn validate_consistency(&self, set: &VariableSet<V>, tolerance: f64) -> FormulaResult<()> {
        let residual = self.residual(set)?;
        if residual <= tolerance {
            Ok(())
        } else {
            Err(FormulaError::RelationViolated {
                relation: self.name().to_string(),
                residual,
                tolerance,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_equation_variable_display() {
        let var = EquationVariable::new("t", "time", "s");
        assert_eq!(var.to_string(), "t (time) [s]");
    }

    #[test]
    fn test_from_terms() {
        let sides = Sides::from_terms(5.0, &[2.0, -3.0]);
        assert_eq!(sides.rhs, -1.0);
        assert_eq!(sides.magnitude, 10.0);
    }

    #[test]
    fn test_relative_residual_scaling() {
        assert_eq!(Sides::from_terms(2.0, &[2.0]).relative_residual(), 0.0);
        let sides = Sides::from_terms(100.0, &[101.0]);
        assert!((sides.relative_residual() - 1.0 / 201.0).abs() < 1e-15);
        // small magnitudes compare absolutely
        let sides = Sides::from_terms(0.0, &[1e-3]);
        assert!((sides.relative_residual() - 1e-3).abs() < 1e-15);
    }

    #[test]
    fn test_cancelling_terms_scale_residual() {
        // 8.7 = -5e9 + (5e9 + 8.7) leaves an absolute error near one ulp of 5e9
        let big = 5.0e9;
        let sides = Sides::from_terms(8.7, &[-big, big + 8.7]);
        assert!(sides.relative_residual() < 1e-15);
    }

    #[test]
    fn test_relative_residual_nan() {
        assert!(Sides::from_terms(f64::NAN, &[1.0]).relative_residual().is_nan());
    }
}
