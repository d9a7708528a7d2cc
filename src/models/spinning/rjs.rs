//! Steady-state fiber radius prediction for rotary jet-spinning.
//!
//! The model evaluates a chain of closed-form relations from a fluid-jet
//! stability and mass-conservation analysis: the rotational ejection
//! threshold, the jet's ejection speed, the melt's kinematic viscosity,
//! and finally the far-field fiber radius at the collector.
//!
//! The computational core is internal; its four operations are re-exported
//! here and form the public contract alongside the parameter records. The
//! [`config`] and [`sweep`] modules provide the deck-loading and
//! parameter-sweep glue around the core, and [`FiberRadiusModel`] adapts
//! the full chain to [`twine_core::Model`].

pub mod config;
pub mod sweep;

mod core;
mod parameters;

pub use self::core::{
    ModelError, RadiusPrediction, critical_rotational_velocity_threshold, final_radius,
    initial_velocities, initial_velocity, kinematic_viscosity, predict,
};
pub use self::parameters::{
    MachineParameters, MachineParametersError, PolymerParameters, PolymerParametersError,
};

use twine_core::Model;

/// Predicts the steady-state fiber radius for a fixed machine.
///
/// A thin [`Model`] adapter over the core: the machine geometry and
/// rotation rate are fixed at construction, and each call evaluates one
/// polymer through the full relation chain.
#[derive(Debug, Clone)]
pub struct FiberRadiusModel {
    machine: MachineParameters,
}

impl FiberRadiusModel {
    #[must_use]
    pub fn new(machine: MachineParameters) -> Self {
        Self { machine }
    }

    /// Returns the fixed machine parameters.
    #[must_use]
    pub fn machine(&self) -> &MachineParameters {
        &self.machine
    }
}

impl Model for FiberRadiusModel {
    type Input = PolymerParameters;
    type Output = RadiusPrediction;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        predict(&self.machine, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, Length, MassDensity},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
    };

    use crate::support::units::{newtons_per_meter, radians_per_second};

    #[test]
    fn the_adapter_delegates_to_the_core_chain() {
        let machine = MachineParameters::new(
            "bench rig",
            Length::new::<meter>(0.01),
            Length::new::<meter>(0.5),
            Length::new::<meter>(0.0006),
            radians_per_second(300.0),
        )
        .unwrap();
        let polymer = PolymerParameters::new(
            "melt",
            MassDensity::new::<kilogram_per_cubic_meter>(1200.0),
            DynamicViscosity::new::<pascal_second>(0.3),
            newtons_per_meter(0.03),
        )
        .unwrap();

        let model = FiberRadiusModel::new(machine.clone());

        let adapted = model.call(&polymer).unwrap();
        let direct = predict(&machine, &polymer).unwrap();
        assert_eq!(adapted, direct);
    }
}
