//! Core physics of steady-state fiber radius prediction.
//!
//! Four interrelated closed-form relations, each a pure function of
//! physical quantities: the rotational ejection threshold, the jet
//! ejection speed, the melt's kinematic viscosity, and the far-field
//! fiber radius. See [`relations`] for the underlying model.

mod error;
mod prediction;
mod relations;

pub use error::ModelError;
pub use prediction::{RadiusPrediction, predict};
pub use relations::{
    critical_rotational_velocity_threshold, final_radius, initial_velocities, initial_velocity,
    kinematic_viscosity,
};
