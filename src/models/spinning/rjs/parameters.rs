//! Validated machine and polymer parameter records.
//!
//! Both records are immutable values: constructed once from validated
//! configuration and passed by reference into model evaluations.

use thiserror::Error;
use uom::si::f64::{DynamicViscosity, Length, MassDensity};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    units::{AngularVelocity, SurfaceTension},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MachineParametersError {
    #[error("invalid reservoir radius: {radius:?}")]
    ReservoirRadius { radius: Length },
    #[error("invalid collector radius: {radius:?}")]
    CollectorRadius { radius: Length },
    #[error("invalid orifice radius: {radius:?}")]
    OrificeRadius { radius: Length },
    #[error("invalid angular velocity: {omega:?}")]
    AngularVelocity { omega: AngularVelocity },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolymerParametersError {
    #[error("invalid density: {density:?}")]
    Density { density: MassDensity },
    #[error("invalid viscosity: {viscosity:?}")]
    Viscosity { viscosity: DynamicViscosity },
    #[error("invalid surface tension: {surface_tension:?}")]
    SurfaceTension { surface_tension: SurfaceTension },
}

/// Geometry and rotation rate of a rotary jet-spinning machine.
///
/// All radii are guaranteed strictly positive and the angular velocity
/// non-negative. A zero angular velocity describes a machine at rest,
/// which is constructible but admits no steady jet.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineParameters {
    name: String,
    reservoir_radius: Length,
    collector_radius: Length,
    orifice_radius: Length,
    angular_velocity: AngularVelocity,
}

impl MachineParameters {
    /// Constructs validated machine parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`MachineParametersError`] naming the first field that is
    /// out of range.
    pub fn new(
        name: impl Into<String>,
        reservoir_radius: Length,
        collector_radius: Length,
        orifice_radius: Length,
        angular_velocity: AngularVelocity,
    ) -> Result<Self, MachineParametersError> {
        if StrictlyPositive::check(&reservoir_radius).is_err() {
            return Err(MachineParametersError::ReservoirRadius {
                radius: reservoir_radius,
            });
        }
        if StrictlyPositive::check(&collector_radius).is_err() {
            return Err(MachineParametersError::CollectorRadius {
                radius: collector_radius,
            });
        }
        if StrictlyPositive::check(&orifice_radius).is_err() {
            return Err(MachineParametersError::OrificeRadius {
                radius: orifice_radius,
            });
        }
        if NonNegative::check(&angular_velocity).is_err() {
            return Err(MachineParametersError::AngularVelocity {
                omega: angular_velocity,
            });
        }

        Ok(Self {
            name: name.into(),
            reservoir_radius,
            collector_radius,
            orifice_radius,
            angular_velocity,
        })
    }

    /// Returns the display name of the machine.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the radial distance from the rotation axis to the orifice.
    #[must_use]
    pub fn reservoir_radius(&self) -> Length {
        self.reservoir_radius
    }

    /// Returns the radial distance from the rotation axis to the collector.
    #[must_use]
    pub fn collector_radius(&self) -> Length {
        self.collector_radius
    }

    /// Returns the radius of the ejection nozzle.
    #[must_use]
    pub fn orifice_radius(&self) -> Length {
        self.orifice_radius
    }

    /// Returns the spinneret rotation rate.
    #[must_use]
    pub fn angular_velocity(&self) -> AngularVelocity {
        self.angular_velocity
    }
}

/// Material properties of the spun polymer.
///
/// Density and viscosity are guaranteed strictly positive; surface tension
/// is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct PolymerParameters {
    name: String,
    density: MassDensity,
    viscosity: DynamicViscosity,
    surface_tension: SurfaceTension,
}

impl PolymerParameters {
    /// Constructs validated polymer parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`PolymerParametersError`] naming the first field that is
    /// out of range.
    pub fn new(
        name: impl Into<String>,
        density: MassDensity,
        viscosity: DynamicViscosity,
        surface_tension: SurfaceTension,
    ) -> Result<Self, PolymerParametersError> {
        if StrictlyPositive::check(&density).is_err() {
            return Err(PolymerParametersError::Density { density });
        }
        if StrictlyPositive::check(&viscosity).is_err() {
            return Err(PolymerParametersError::Viscosity { viscosity });
        }
        if NonNegative::check(&surface_tension).is_err() {
            return Err(PolymerParametersError::SurfaceTension { surface_tension });
        }

        Ok(Self {
            name: name.into(),
            density,
            viscosity,
            surface_tension,
        })
    }

    /// Returns the display name of the polymer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the polymer density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Returns the dynamic viscosity of the melt.
    #[must_use]
    pub fn viscosity(&self) -> DynamicViscosity {
        self.viscosity
    }

    /// Returns the surface tension of the melt.
    #[must_use]
    pub fn surface_tension(&self) -> SurfaceTension {
        self.surface_tension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        dynamic_viscosity::pascal_second, length::meter, mass_density::kilogram_per_cubic_meter,
    };

    use crate::support::units::{newtons_per_meter, radians_per_second};

    fn machine(omega: f64) -> Result<MachineParameters, MachineParametersError> {
        MachineParameters::new(
            "bench rig",
            Length::new::<meter>(0.01),
            Length::new::<meter>(0.5),
            Length::new::<meter>(0.0006),
            radians_per_second(omega),
        )
    }

    #[test]
    fn accepts_a_valid_machine() {
        let machine = machine(300.0).unwrap();
        assert_eq!(machine.name(), "bench rig");
        assert_eq!(machine.reservoir_radius(), Length::new::<meter>(0.01));
    }

    #[test]
    fn a_machine_at_rest_is_constructible() {
        assert!(machine(0.0).is_ok());
    }

    #[test]
    fn rejects_bad_machine_fields() {
        let result = MachineParameters::new(
            "bench rig",
            Length::new::<meter>(0.0),
            Length::new::<meter>(0.5),
            Length::new::<meter>(0.0006),
            radians_per_second(300.0),
        );
        assert!(matches!(
            result,
            Err(MachineParametersError::ReservoirRadius { .. })
        ));

        assert!(matches!(
            machine(-1.0),
            Err(MachineParametersError::AngularVelocity { .. })
        ));
    }

    #[test]
    fn rejects_bad_polymer_fields() {
        let result = PolymerParameters::new(
            "melt",
            MassDensity::new::<kilogram_per_cubic_meter>(-1200.0),
            DynamicViscosity::new::<pascal_second>(0.3),
            newtons_per_meter(0.03),
        );
        assert!(matches!(result, Err(PolymerParametersError::Density { .. })));

        let result = PolymerParameters::new(
            "melt",
            MassDensity::new::<kilogram_per_cubic_meter>(1200.0),
            DynamicViscosity::new::<pascal_second>(0.0),
            newtons_per_meter(0.03),
        );
        assert!(matches!(
            result,
            Err(PolymerParametersError::Viscosity { .. })
        ));
    }

    #[test]
    fn zero_surface_tension_is_allowed() {
        let polymer = PolymerParameters::new(
            "melt",
            MassDensity::new::<kilogram_per_cubic_meter>(1200.0),
            DynamicViscosity::new::<pascal_second>(0.3),
            newtons_per_meter(0.0),
        );
        assert!(polymer.is_ok());
    }
}
