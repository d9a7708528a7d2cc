//! Closed-form relations of the jet stability and thinning model.
//!
//! The relations follow the analysis in Mellado et al., "A simple model for
//! nanofiber formation by rotary jet-spinning", Appl. Phys. Lett. 99,
//! 203107 (2011):
//!
//! - Jet ejection requires the centrifugal pressure `ρ·Ω²·s₀²` to exceed
//!   the capillary pressure `σ/a` at the orifice, giving the threshold
//!   `Ω_th = √(σ / (ρ·a·s₀²))`.
//! - The jet leaves the orifice at `v₀ = Ω_th·s₀`.
//! - Along the spiral trajectory the jet thins under centrifugal
//!   stretching resisted by viscous stresses; mass conservation at the
//!   collector gives the far-field radius `r = a·√(v₀·ν / (Ω²·R_c³))`.
//!
//! Every function is pure and stateless; invalid inputs fail loudly with a
//! [`ModelError`] instead of propagating `NaN`.

use std::fmt::Debug;

use num_traits::Zero;
use uom::{
    ConstZero,
    si::f64::{DynamicViscosity, Length, MassDensity, Ratio, Velocity},
};

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
    units::{AngularVelocity, AngularVelocitySquared, KinematicViscosity, SurfaceTension},
};

use super::error::ModelError;

/// Computes the minimum angular velocity at which the centrifugal force
/// overcomes capillarity at the orifice, with `Ω_th = √(σ / (ρ·a·s₀²))`.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] unless every input is strictly
/// positive, and [`ModelError::InvalidRegime`] if the radicand of the
/// threshold has no real root.
pub fn critical_rotational_velocity_threshold(
    surface_tension: SurfaceTension,
    orifice_radius: Length,
    reservoir_radius: Length,
    density: MassDensity,
) -> Result<AngularVelocity, ModelError> {
    let surface_tension = strictly_positive("surface tension", surface_tension)?;
    let orifice_radius = strictly_positive("orifice radius", orifice_radius)?;
    let reservoir_radius = strictly_positive("reservoir radius", reservoir_radius)?;
    let density = strictly_positive("density", density)?;

    let radicand: AngularVelocitySquared =
        surface_tension / (density * orifice_radius * reservoir_radius * reservoir_radius);
    if radicand < AngularVelocitySquared::ZERO {
        return Err(ModelError::InvalidRegime {
            context: format!(
                "centrifugal-capillary balance has no real threshold (radicand {radicand:?})"
            ),
        });
    }

    Ok(radicand.sqrt())
}

/// Computes the jet ejection speed at the orifice, with `v₀ = Ω_th·s₀`.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] if the threshold is negative or
/// the reservoir radius is not strictly positive.
pub fn initial_velocity(
    omega_threshold: AngularVelocity,
    reservoir_radius: Length,
) -> Result<Velocity, ModelError> {
    let omega_threshold = non_negative("threshold angular velocity", omega_threshold)?;
    let reservoir_radius = strictly_positive("reservoir radius", reservoir_radius)?;

    Ok(omega_threshold * reservoir_radius)
}

/// Element-wise [`initial_velocity`] over a slice of thresholds.
///
/// The returned vector has the same length and ordering as the input.
///
/// # Errors
///
/// Returns the first [`ModelError`] produced by any element.
pub fn initial_velocities(
    omega_thresholds: &[AngularVelocity],
    reservoir_radius: Length,
) -> Result<Vec<Velocity>, ModelError> {
    omega_thresholds
        .iter()
        .map(|&omega_th| initial_velocity(omega_th, reservoir_radius))
        .collect()
}

/// Computes the kinematic viscosity of the melt, with `ν = μ/ρ`.
///
/// # Errors
///
/// Returns [`ModelError::DivisionByZero`] at zero density, and
/// [`ModelError::InvalidParameter`] for a negative density or viscosity.
pub fn kinematic_viscosity(
    dynamic_viscosity: DynamicViscosity,
    density: MassDensity,
) -> Result<KinematicViscosity, ModelError> {
    let dynamic_viscosity = non_negative("dynamic viscosity", dynamic_viscosity)?;
    if density == MassDensity::ZERO {
        return Err(ModelError::DivisionByZero {
            context: "kinematic viscosity is undefined at zero density".into(),
        });
    }
    let density = strictly_positive("density", density)?;

    Ok(dynamic_viscosity / density)
}

/// Computes the steady-state fiber radius at the collector, with
/// `r = a·√(v₀·ν / (Ω²·R_c³))`.
///
/// Mass conservation along the spiral trajectory, with viscous stresses
/// resisting centrifugal thinning: a more viscous jet stays thicker, a
/// faster-spinning machine stretches it thinner.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] for a non-positive orifice or
/// collector radius, or a negative velocity or viscosity, and
/// [`ModelError::InvalidRegime`] when the machine is not rotating (no
/// steady jet exists) or the thinning ratio has no real root.
pub fn final_radius(
    orifice_radius: Length,
    initial_velocity: Velocity,
    kinematic_viscosity: KinematicViscosity,
    collector_radius: Length,
    angular_velocity: AngularVelocity,
) -> Result<Length, ModelError> {
    let orifice_radius = strictly_positive("orifice radius", orifice_radius)?;
    let collector_radius = strictly_positive("collector radius", collector_radius)?;
    let initial_velocity = non_negative("initial velocity", initial_velocity)?;
    let kinematic_viscosity = non_negative("kinematic viscosity", kinematic_viscosity)?;

    match StrictlyPositive::check(&angular_velocity) {
        Ok(()) => {}
        Err(ConstraintError::NotANumber) => {
            return Err(ModelError::InvalidParameter {
                context: format!("angular velocity must be a number, got {angular_velocity:?}"),
            });
        }
        Err(_) => {
            return Err(ModelError::InvalidRegime {
                context: format!(
                    "no steady jet without rotation (angular velocity {angular_velocity:?})"
                ),
            });
        }
    }

    let spin = angular_velocity * angular_velocity;
    let swept = collector_radius * collector_radius * collector_radius;

    let thinning: Ratio = (initial_velocity * kinematic_viscosity) / (spin * swept);
    if thinning < Ratio::ZERO {
        return Err(ModelError::InvalidRegime {
            context: format!("thinning ratio has no real root (radicand {thinning:?})"),
        });
    }

    Ok(orifice_radius * thinning.sqrt())
}

fn strictly_positive<T>(name: &'static str, value: T) -> Result<T, ModelError>
where
    T: PartialOrd + Zero + Debug + Copy,
{
    match StrictlyPositive::check(&value) {
        Ok(()) => Ok(value),
        Err(_) => Err(ModelError::InvalidParameter {
            context: format!("{name} must be strictly positive, got {value:?}"),
        }),
    }
}

fn non_negative<T>(name: &'static str, value: T) -> Result<T, ModelError>
where
    T: PartialOrd + Zero + Debug + Copy,
{
    match NonNegative::check(&value) {
        Ok(()) => Ok(value),
        Err(_) => Err(ModelError::InvalidParameter {
            context: format!("{name} must not be negative, got {value:?}"),
        }),
    }
}
