//! Type-safe view of a solved kinematics set.
//!
//! The solver works on bare `f64` slots. Once a set is complete, [`Motion`]
//! lifts it into `uom` quantities so downstream code cannot mix a length
//! with a velocity. Values are interpreted in SI base units.

use serde::{Deserialize, Serialize};
use uom::si::acceleration::meter_per_second_squared;
use uom::si::f64::{Acceleration, Length, Time, Velocity};
use uom::si::length::meter;
use uom::si::time::second;
use uom::si::velocity::meter_per_second;

use super::kinematics::Kinematic;
use crate::engine::VariableSet;
use crate::error::FormulaResult;

/// A complete constant-acceleration interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub distance: Length,
    pub time: Time,
    pub initial_velocity: Velocity,
    pub final_velocity: Velocity,
    pub acceleration: Acceleration,
}

impl Motion {
    /// Lift a fully present set.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` for the first blank variable.
    pub fn from_set(set: &VariableSet<Kinematic>) -> FormulaResult<Self> {
        Ok(Self {
            distance: Length::new::<meter>(set.get(Kinematic::Distance)?),
            time: Time::new::<second>(set.get(Kinematic::Time)?),
            initial_velocity: Velocity::new::<meter_per_second>(
                set.get(Kinematic::InitialVelocity)?,
            ),
            final_velocity: Velocity::new::<meter_per_second>(set.get(Kinematic::FinalVelocity)?),
            acceleration: Acceleration::new::<meter_per_second_squared>(
                set.get(Kinematic::Acceleration)?,
            ),
        })
    }

    /// Back to a (fully present) variable set.
    #[must_use]
    pub fn to_set(&self) -> VariableSet<Kinematic> {
        VariableSet::new()
            .with(Kinematic::Distance, self.distance.get::<meter>())
            .with(Kinematic::Time, self.time.get::<second>())
            .with(
                Kinematic::InitialVelocity,
                self.initial_velocity.get::<meter_per_second>(),
            )
            .with(
                Kinematic::FinalVelocity,
                self.final_velocity.get::<meter_per_second>(),
            )
            .with(
                Kinematic::Acceleration,
                self.acceleration.get::<meter_per_second_squared>(),
            )
    }

    /// Distance over time, or `None` for a zero-length interval.
    #[must_use]
    pub fn average_velocity(&self) -> Option<Velocity> {
        if self.time.get::<second>().abs() < f64::EPSILON {
            return None;
        }
        Some(self.distance / self.time)
    }

    /// Change in velocity over the interval.
    #[must_use]
    pub fn velocity_change(&self) -> Velocity {
        self.final_velocity - self.initial_velocity
    }
}
