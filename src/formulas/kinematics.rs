//! Constant-acceleration kinematics.
//!
//! # Governing Equations
//!
//! ```text
//! Velocity:      v_f = v_i + a·t
//! Displacement:  d   = v_i·t + ½·a·t²
//! Derived:       v_f² = v_i² + 2·a·d
//!                d   = ½·(v_i + v_f)·t
//! ```
//!
//! Any three of the five quantities determine the other two. Each routine
//! below checks its preconditions before computing anything and reports a
//! `Domain` error instead of dividing by zero or taking the square root of
//! a negative number.
//!
//! Velocities obtained from a square root are the non-negative root, and the
//! routines that close over average velocity (`v_i, a` and `v_f, a`) reject a
//! negative derived speed.

use serde::{Deserialize, Serialize};

use super::equation::{EquationVariable, GoverningEquation, Sides};
use crate::engine::{SolverTable, Variable, VariableSet, VARIABLE_COUNT};
use crate::error::{FormulaError, FormulaResult};

/// Kinematic quantities, in bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kinematic {
    /// Displacement over the interval (m).
    Distance,
    /// Duration of the interval (s).
    Time,
    /// Velocity at the start of the interval (m/s).
    InitialVelocity,
    /// Velocity at the end of the interval (m/s).
    FinalVelocity,
    /// Constant acceleration (m/s²).
    Acceleration,
}

impl Variable for Kinematic {
    const ALL: [Self; VARIABLE_COUNT] = [
        Self::Distance,
        Self::Time,
        Self::InitialVelocity,
        Self::FinalVelocity,
        Self::Acceleration,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
            Self::InitialVelocity => "initial_velocity",
            Self::FinalVelocity => "final_velocity",
            Self::Acceleration => "acceleration",
        }
    }
}

impl Kinematic {
    /// Conventional symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Distance => "d",
            Self::Time => "t",
            Self::InitialVelocity => "v_i",
            Self::FinalVelocity => "v_f",
            Self::Acceleration => "a",
        }
    }

    /// SI units.
    #[must_use]
    pub const fn units(self) -> &'static str {
        match self {
            Self::Distance => "m",
            Self::Time => "s",
            Self::InitialVelocity | Self::FinalVelocity => "m/s",
            Self::Acceleration => "m/s²",
        }
    }

    fn describe(self) -> EquationVariable {
        EquationVariable::new(self.symbol(), self.name(), self.units())
    }
}

// ============================================================================
// Preconditions
// ============================================================================

#[allow(clippy::float_cmp)]
fn nonzero(value: f64, quantity: &str) -> FormulaResult<f64> {
    if value == 0.0 {
        Err(FormulaError::domain(format!(
            "divide by zero: {quantity} cannot be zero"
        )))
    } else {
        Ok(value)
    }
}

fn real_sqrt(radicand: f64, quantity: &str) -> FormulaResult<f64> {
    if radicand < 0.0 {
        Err(FormulaError::domain(format!(
            "inputs do not produce a valid solution for {quantity} (negative radicand {radicand})"
        )))
    } else {
        Ok(radicand.sqrt())
    }
}

fn non_negative(value: f64, quantity: &str) -> FormulaResult<f64> {
    if value < 0.0 {
        Err(FormulaError::domain(format!(
            "inputs do not produce a valid solution: derived {quantity} {value} is negative"
        )))
    } else {
        Ok(value)
    }
}

/// d = v_i·t + ½·a·t²
fn displacement(initial_velocity: f64, time: f64, acceleration: f64) -> f64 {
    initial_velocity * time + 0.5 * acceleration * time * time
}

/// Time from velocities, falling back to average velocity when a = 0.
#[allow(clippy::float_cmp)]
fn elapsed_time(
    distance: f64,
    initial_velocity: f64,
    final_velocity: f64,
    acceleration: f64,
) -> FormulaResult<f64> {
    if acceleration != 0.0 {
        return Ok((final_velocity - initial_velocity) / acceleration);
    }
    let speed_sum = initial_velocity + final_velocity;
    if speed_sum == 0.0 {
        return Err(FormulaError::domain(
            "divide by zero: acceleration and final velocity cannot both be zero",
        ));
    }
    Ok(2.0 * distance / speed_sum)
}

// ============================================================================
// Routines (one per pair of unknowns)
// ============================================================================

fn distance_time(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let vi = set.get(Kinematic::InitialVelocity)?;
    let vf = set.get(Kinematic::FinalVelocity)?;
    let a = nonzero(set.get(Kinematic::Acceleration)?, "acceleration")?;
    let t = (vf - vi) / a;
    Ok([displacement(vi, t, a), t])
}

fn distance_initial_velocity(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let t = set.get(Kinematic::Time)?;
    let vf = set.get(Kinematic::FinalVelocity)?;
    let a = set.get(Kinematic::Acceleration)?;
    let vi = vf - a * t;
    Ok([displacement(vi, t, a), vi])
}

fn distance_final_velocity(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let t = set.get(Kinematic::Time)?;
    let vi = set.get(Kinematic::InitialVelocity)?;
    let a = set.get(Kinematic::Acceleration)?;
    let vf = vi + a * t;
    Ok([displacement(vi, t, a), vf])
}

fn distance_acceleration(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let t = nonzero(set.get(Kinematic::Time)?, "time")?;
    let vi = set.get(Kinematic::InitialVelocity)?;
    let vf = set.get(Kinematic::FinalVelocity)?;
    let a = (vf - vi) / t;
    Ok([displacement(vi, t, a), a])
}

#[allow(clippy::float_cmp)]
fn time_initial_velocity(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let d = set.get(Kinematic::Distance)?;
    let vf = set.get(Kinematic::FinalVelocity)?;
    let a = set.get(Kinematic::Acceleration)?;
    // v_i² = v_f² - 2ad; without acceleration the speed keeps its sign
    let vi = if a == 0.0 {
        vf
    } else {
        real_sqrt(vf * vf - 2.0 * a * d, "initial velocity")?
    };
    Ok([elapsed_time(d, vi, vf, a)?, vi])
}

#[allow(clippy::float_cmp)]
fn time_final_velocity(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let d = set.get(Kinematic::Distance)?;
    let vi = set.get(Kinematic::InitialVelocity)?;
    let a = set.get(Kinematic::Acceleration)?;
    // v_f² = v_i² + 2ad
    let vf = if a == 0.0 {
        vi
    } else {
        real_sqrt(vi * vi + 2.0 * a * d, "final velocity")?
    };
    Ok([elapsed_time(d, vi, vf, a)?, vf])
}

fn time_acceleration(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let d = nonzero(set.get(Kinematic::Distance)?, "distance")?;
    let vi = set.get(Kinematic::InitialVelocity)?;
    let vf = set.get(Kinematic::FinalVelocity)?;
    let a = (vf * vf - vi * vi) / (2.0 * d);
    Ok([elapsed_time(d, vi, vf, a)?, a])
}

fn initial_final_velocity(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let d = set.get(Kinematic::Distance)?;
    let t = nonzero(set.get(Kinematic::Time)?, "time")?;
    let a = set.get(Kinematic::Acceleration)?;
    let vi = d / t - 0.5 * a * t;
    Ok([vi, vi + a * t])
}

fn initial_velocity_acceleration(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let d = set.get(Kinematic::Distance)?;
    let t = nonzero(set.get(Kinematic::Time)?, "time")?;
    let vf = set.get(Kinematic::FinalVelocity)?;
    let vi = non_negative(2.0 * d / t - vf, "initial velocity")?;
    Ok([vi, (vf - vi) / t])
}

fn final_velocity_acceleration(set: &VariableSet<Kinematic>) -> FormulaResult<[f64; 2]> {
    let d = set.get(Kinematic::Distance)?;
    let t = nonzero(set.get(Kinematic::Time)?, "time")?;
    let vi = set.get(Kinematic::InitialVelocity)?;
    let vf = non_negative(2.0 * d / t - vi, "final velocity")?;
    Ok([vf, (vf - vi) / t])
}

/// The kinematics solver table.
///
/// # Errors
///
/// Never fails in practice; the builder's coverage check is still honored.
pub fn table() -> FormulaResult<SolverTable<Kinematic>> {
    use Kinematic::{Acceleration, Distance, FinalVelocity, InitialVelocity, Time};

    SolverTable::builder()
        .entry(Distance, Time, distance_time)
        .entry(Distance, InitialVelocity, distance_initial_velocity)
        .entry(Distance, FinalVelocity, distance_final_velocity)
        .entry(Distance, Acceleration, distance_acceleration)
        .entry(Time, InitialVelocity, time_initial_velocity)
        .entry(Time, FinalVelocity, time_final_velocity)
        .entry(Time, Acceleration, time_acceleration)
        .entry(InitialVelocity, FinalVelocity, initial_final_velocity)
        .entry(InitialVelocity, Acceleration, initial_velocity_acceleration)
        .entry(FinalVelocity, Acceleration, final_velocity_acceleration)
        .build()
}

// ============================================================================
// Governing equations
// ============================================================================

/// v_f = v_i + a·t
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityTime;

impl GoverningEquation<Kinematic> for VelocityTime {
    fn name(&self) -> &'static str {
        "velocity_time"
    }

    fn latex(&self) -> &'static str {
        r"v_f = v_i + a t"
    }

    fn variables(&self) -> Vec<EquationVariable> {
        [
            Kinematic::FinalVelocity,
            Kinematic::InitialVelocity,
            Kinematic::Acceleration,
            Kinematic::Time,
        ]
        .into_iter()
        .map(Kinematic::describe)
        .collect()
    }

    fn sides(&self, set: &VariableSet<Kinematic>) -> FormulaResult<Sides> {
        let vf = set.get(Kinematic::FinalVelocity)?;
        let vi = set.get(Kinematic::InitialVelocity)?;
        let a = set.get(Kinematic::Acceleration)?;
        let t = set.get(Kinematic::Time)?;
        Ok(Sides::from_terms(vf, &[vi, a * t]))
    }
}

/// d = v_i·t + ½·a·t²
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplacementTime;

impl GoverningEquation<Kinematic> for DisplacementTime {
    fn name(&self) -> &'static str {
        "displacement_time"
    }

    fn latex(&self) -> &'static str {
        r"d = v_i t + \frac{1}{2} a t^2"
    }

    fn variables(&self) -> Vec<EquationVariable> {
        [
            Kinematic::Distance,
            Kinematic::InitialVelocity,
            Kinematic::Time,
            Kinematic::Acceleration,
        ]
        .into_iter()
        .map(Kinematic::describe)
        .collect()
    }

    fn sides(&self, set: &VariableSet<Kinematic>) -> FormulaResult<Sides> {
        let d = set.get(Kinematic::Distance)?;
        let vi = set.get(Kinematic::InitialVelocity)?;
        let t = set.get(Kinematic::Time)?;
        let a = set.get(Kinematic::Acceleration)?;
        Ok(Sides::from_terms(d, &[vi * t, 0.5 * a * t * t]))
    }
}

/// The equations every solved kinematics set must satisfy.
#[must_use]
pub fn equations() -> Vec<Box<dyn GoverningEquation<Kinematic>>> {
    vec![Box::new(VelocityTime), Box::new(DisplacementTime)]
}

/// Check a fully solved set against both governing equations.
///
/// # Errors
///
/// Returns `RelationViolated` for the first equation whose relative
/// residual exceeds `tolerance`, or `MissingValue` if the set is incomplete.
pub fn verify(set: &VariableSet<Kinematic>, tolerance: f64) -> FormulaResult<()> {
    equations()
        .iter()
        .try_for_each(|eq| eq.validate_consistency(set, tolerance))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::engine::{Solver, UnknownKey};

    fn solver() -> Solver<Kinematic> {
        Solver::new(table().expect("kinematics table"))
    }

    fn assert_domain_error_unchanged(knowns: &[(Kinematic, f64)], needle: &str) {
        let mut set = VariableSet::new();
        for &(v, x) in knowns {
            set.set(v, x);
        }
        let before = set.clone();
        let err = solver().calculate(&mut set).unwrap_err();
        assert!(err.is_domain_error(), "expected domain error, got {err}");
        assert!(err.to_string().contains(needle), "{err}");
        assert_eq!(set, before);
    }

    #[test]
    fn test_variable_metadata() {
        assert_eq!(Kinematic::from_name("final_velocity").unwrap(), Kinematic::FinalVelocity);
        assert_eq!(Kinematic::Acceleration.units(), "m/s²");
        assert_eq!(Kinematic::InitialVelocity.symbol(), "v_i");
        for (i, v) in Kinematic::ALL.into_iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }

    #[test]
    fn test_table_covers_every_pair() {
        let table = table().unwrap();
        assert_eq!(table.len(), 10);
        for (a, b) in UnknownKey::all_pairs::<Kinematic>() {
            let entry = table.lookup(UnknownKey::pair(a, b)).expect("entry");
            assert_eq!(entry.unknowns(), (a, b));
        }
    }

    #[test]
    fn test_demo_scenario() {
        let mut set = VariableSet::new()
            .with(Kinematic::Acceleration, 1.3)
            .with(Kinematic::FinalVelocity, 8.7)
            .with(Kinematic::Time, 38.351);
        solver().calculate(&mut set).unwrap();

        let vi = set.get(Kinematic::InitialVelocity).unwrap();
        let d = set.get(Kinematic::Distance).unwrap();
        assert!((vi - (8.7 - 1.3 * 38.351)).abs() < 1e-12);
        assert!((d - (vi * 38.351 + 0.5 * 1.3 * 38.351 * 38.351)).abs() < 1e-9);
        verify(&set, 1e-9).unwrap();
    }

    #[test]
    fn test_distance_time() {
        let mut set = VariableSet::new()
            .with(Kinematic::InitialVelocity, 2.0)
            .with(Kinematic::FinalVelocity, 10.0)
            .with(Kinematic::Acceleration, 2.0);
        solver().calculate(&mut set).unwrap();
        assert_eq!(set.get(Kinematic::Time).unwrap(), 4.0);
        assert_eq!(set.get(Kinematic::Distance).unwrap(), 24.0);
    }

    #[test]
    fn test_distance_time_zero_acceleration() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::InitialVelocity, 2.0),
                (Kinematic::FinalVelocity, 2.0),
                (Kinematic::Acceleration, 0.0),
            ],
            "acceleration cannot be zero",
        );
    }

    #[test]
    fn test_distance_acceleration_zero_time() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Time, 0.0),
                (Kinematic::InitialVelocity, 1.0),
                (Kinematic::FinalVelocity, 3.0),
            ],
            "time cannot be zero",
        );
    }

    #[test]
    fn test_time_initial_velocity_zero_motion() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Acceleration, 0.0),
                (Kinematic::FinalVelocity, 0.0),
                (Kinematic::Distance, 12.5),
            ],
            "acceleration and final velocity cannot both be zero",
        );
    }

    #[test]
    fn test_time_initial_velocity_uniform_reverse_motion() {
        let mut set = VariableSet::new()
            .with(Kinematic::Acceleration, 0.0)
            .with(Kinematic::FinalVelocity, -3.0)
            .with(Kinematic::Distance, -6.0);
        solver().calculate(&mut set).unwrap();
        assert_eq!(set.get(Kinematic::InitialVelocity).unwrap(), -3.0);
        assert_eq!(set.get(Kinematic::Time).unwrap(), 2.0);
        verify(&set, 1e-12).unwrap();
    }

    #[test]
    fn test_time_final_velocity_uniform_reverse_motion() {
        let mut set = VariableSet::new()
            .with(Kinematic::Acceleration, 0.0)
            .with(Kinematic::InitialVelocity, -4.0)
            .with(Kinematic::Distance, -10.0);
        solver().calculate(&mut set).unwrap();
        assert_eq!(set.get(Kinematic::FinalVelocity).unwrap(), -4.0);
        assert_eq!(set.get(Kinematic::Time).unwrap(), 2.5);
    }

    #[test]
    fn test_time_initial_velocity_negative_radicand() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Acceleration, 2.0),
                (Kinematic::FinalVelocity, 1.0),
                (Kinematic::Distance, 10.0),
            ],
            "negative radicand",
        );
    }

    #[test]
    fn test_time_final_velocity_negative_radicand() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Acceleration, -2.0),
                (Kinematic::InitialVelocity, 1.0),
                (Kinematic::Distance, 10.0),
            ],
            "negative radicand",
        );
    }

    #[test]
    fn test_time_acceleration_zero_distance() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Distance, 0.0),
                (Kinematic::InitialVelocity, 1.0),
                (Kinematic::FinalVelocity, 3.0),
            ],
            "distance cannot be zero",
        );
    }

    #[test]
    fn test_time_acceleration_constant_velocity() {
        let mut set = VariableSet::new()
            .with(Kinematic::Distance, 30.0)
            .with(Kinematic::InitialVelocity, 5.0)
            .with(Kinematic::FinalVelocity, 5.0);
        solver().calculate(&mut set).unwrap();
        assert_eq!(set.get(Kinematic::Acceleration).unwrap(), 0.0);
        assert_eq!(set.get(Kinematic::Time).unwrap(), 6.0);
    }

    #[test]
    fn test_initial_velocity_acceleration_negative_speed() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Distance, 1.0),
                (Kinematic::Time, 1.0),
                (Kinematic::FinalVelocity, 5.0),
            ],
            "derived initial velocity",
        );
    }

    #[test]
    fn test_final_velocity_acceleration_negative_speed() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Distance, 1.0),
                (Kinematic::Time, 1.0),
                (Kinematic::InitialVelocity, 5.0),
            ],
            "derived final velocity",
        );
    }

    #[test]
    fn test_velocities_zero_time() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Distance, 1.0),
                (Kinematic::Time, 0.0),
                (Kinematic::Acceleration, 5.0),
            ],
            "time cannot be zero",
        );
    }

    #[test]
    fn test_overflow_is_caught_by_guard() {
        assert_domain_error_unchanged(
            &[
                (Kinematic::Time, 1e200),
                (Kinematic::InitialVelocity, 1e200),
                (Kinematic::Acceleration, 1e200),
            ],
            "non-finite result",
        );
    }

    #[test]
    fn test_verify_rejects_inconsistent_set() {
        let set = VariableSet::new()
            .with(Kinematic::Distance, 10.0)
            .with(Kinematic::Time, 2.0)
            .with(Kinematic::InitialVelocity, 1.0)
            .with(Kinematic::FinalVelocity, 100.0)
            .with(Kinematic::Acceleration, 1.0);
        match verify(&set, 1e-9) {
            Err(FormulaError::RelationViolated { relation, .. }) => {
                assert_eq!(relation, "velocity_time");
            }
            other => panic!("expected RelationViolated, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_requires_complete_set() {
        let set = VariableSet::new().with(Kinematic::Distance, 10.0);
        assert!(matches!(
            verify(&set, 1e-9),
            Err(FormulaError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_equation_metadata() {
        let eqs = equations();
        assert_eq!(eqs.len(), 2);
        assert_eq!(eqs[0].name(), "velocity_time");
        assert!(eqs[1].latex().contains("frac"));
        let vars = DisplacementTime.variables();
        assert_eq!(vars.len(), 4);
        assert_eq!(vars[0].name, "distance");
        assert_eq!(vars[0].units, "m");
    }
}
