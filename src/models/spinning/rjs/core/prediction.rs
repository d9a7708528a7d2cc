//! Full evaluation chain from parameters to predicted radius.

use uom::si::f64::{Length, Velocity};

use crate::models::spinning::rjs::parameters::{MachineParameters, PolymerParameters};
use crate::support::units::{AngularVelocity, KinematicViscosity};

use super::{error::ModelError, relations};

/// Derived quantities and predicted radius from one model evaluation.
///
/// Recomputed per evaluation; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusPrediction {
    /// Minimum angular velocity for jet ejection.
    pub omega_threshold: AngularVelocity,

    /// Jet speed at the orifice.
    pub initial_velocity: Velocity,

    /// Momentum diffusivity of the melt.
    pub kinematic_viscosity: KinematicViscosity,

    /// Steady-state fiber radius at the collector.
    pub final_radius: Length,
}

/// Evaluates the relations in dependency order:
/// threshold → initial velocity → kinematic viscosity → final radius.
///
/// # Errors
///
/// Returns the first [`ModelError`] produced by any relation.
pub fn predict(
    machine: &MachineParameters,
    polymer: &PolymerParameters,
) -> Result<RadiusPrediction, ModelError> {
    let omega_threshold = relations::critical_rotational_velocity_threshold(
        polymer.surface_tension(),
        machine.orifice_radius(),
        machine.reservoir_radius(),
        polymer.density(),
    )?;
    let initial_velocity =
        relations::initial_velocity(omega_threshold, machine.reservoir_radius())?;
    let kinematic_viscosity =
        relations::kinematic_viscosity(polymer.viscosity(), polymer.density())?;
    let final_radius = relations::final_radius(
        machine.orifice_radius(),
        initial_velocity,
        kinematic_viscosity,
        machine.collector_radius(),
        machine.angular_velocity(),
    )?;

    Ok(RadiusPrediction {
        omega_threshold,
        initial_velocity,
        kinematic_viscosity,
        final_radius,
    })
}
