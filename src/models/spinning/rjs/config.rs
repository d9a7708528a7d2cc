//! YAML parameter deck for sweeps.
//!
//! The deck names one machine and one polymer with plain scalar fields in
//! SI units. The core never reads the deck: it only ever sees the
//! validated, unit-typed records the accessors here construct.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
};

use crate::support::{
    constraint::ConstraintError,
    units::{newtons_per_meter, radians_per_second},
};

use super::parameters::{
    MachineParameters, MachineParametersError, PolymerParameters, PolymerParametersError,
};
use super::sweep::Resolution;

/// Errors that can occur while loading a parameter deck.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read parameter deck: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse parameter deck: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Machine(#[from] MachineParametersError),
    #[error(transparent)]
    Polymer(#[from] PolymerParametersError),
    #[error("invalid discretisation: {0}")]
    Discretisation(ConstraintError),
}

/// Machine section of the deck, SI units.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    pub name: String,
    /// Radial distance from the rotation axis to the orifice, m.
    pub reservoir_radius: f64,
    /// Radial distance from the rotation axis to the collector, m.
    pub collector_radius: f64,
    /// Radius of the ejection nozzle, m.
    pub orifice_radius: f64,
    /// Spinneret rotation rate, rad/s.
    pub angular_velocity: f64,
}

/// Polymer section of the deck, SI units.
#[derive(Debug, Clone, Deserialize)]
pub struct PolymerConfig {
    pub name: String,
    /// kg/m³
    pub density: f64,
    /// Pa·s
    pub viscosity: f64,
    /// N/m
    pub surface_tension: f64,
}

/// Parameter deck for one machine/polymer pairing.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub machine: MachineConfig,
    pub polymer: PolymerConfig,
    /// Number of sweep samples. Older decks spell this `Discretisation`.
    #[serde(alias = "Discretisation")]
    pub discretisation: usize,
}

impl Config {
    /// Loads a parameter deck from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Yaml`] if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses a parameter deck from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the text is not a valid deck.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Builds validated machine parameters from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Machine`] if a machine field is out of range.
    pub fn machine_parameters(&self) -> Result<MachineParameters, ConfigError> {
        Ok(MachineParameters::new(
            self.machine.name.clone(),
            Length::new::<meter>(self.machine.reservoir_radius),
            Length::new::<meter>(self.machine.collector_radius),
            Length::new::<meter>(self.machine.orifice_radius),
            radians_per_second(self.machine.angular_velocity),
        )?)
    }

    /// Builds validated polymer parameters from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Polymer`] if a polymer field is out of range.
    pub fn polymer_parameters(&self) -> Result<PolymerParameters, ConfigError> {
        Ok(PolymerParameters::new(
            self.polymer.name.clone(),
            MassDensity::new::<kilogram_per_cubic_meter>(self.polymer.density),
            DynamicViscosity::new::<pascal_second>(self.polymer.viscosity),
            newtons_per_meter(self.polymer.surface_tension),
        )?)
    }

    /// Builds the sweep resolution from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Discretisation`] if the count is below two.
    pub fn resolution(&self) -> Result<Resolution, ConfigError> {
        Resolution::new(self.discretisation).map_err(ConfigError::Discretisation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = "\
machine:
  name: Bench RJS rig
  reservoir_radius: 0.01
  collector_radius: 0.5
  orifice_radius: 0.0006
  angular_velocity: 300.0
polymer:
  name: PLA melt
  density: 1200.0
  viscosity: 0.3
  surface_tension: 0.03
discretisation: 50
";

    #[test]
    fn parses_and_validates_a_deck() {
        let config = Config::parse(DECK).unwrap();

        let machine = config.machine_parameters().unwrap();
        assert_eq!(machine.name(), "Bench RJS rig");
        assert_eq!(machine.collector_radius(), Length::new::<meter>(0.5));

        let polymer = config.polymer_parameters().unwrap();
        assert_eq!(polymer.name(), "PLA melt");

        let resolution = config.resolution().unwrap();
        assert_eq!(*resolution, 50);
    }

    #[test]
    fn accepts_the_capitalised_discretisation_spelling() {
        let deck = DECK.replace("discretisation: 50", "Discretisation: 25");
        let config = Config::parse(&deck).unwrap();
        assert_eq!(config.discretisation, 25);
    }

    #[test]
    fn surfaces_out_of_range_fields_as_validation_errors() {
        let deck = DECK.replace("orifice_radius: 0.0006", "orifice_radius: -0.0006");
        let config = Config::parse(&deck).unwrap();
        assert!(matches!(
            config.machine_parameters(),
            Err(ConfigError::Machine(
                MachineParametersError::OrificeRadius { .. }
            ))
        ));
    }

    #[test]
    fn rejects_a_malformed_deck() {
        let deck = DECK.replace("density: 1200.0", "");
        assert!(matches!(Config::parse(&deck), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn rejects_a_single_sample_discretisation() {
        let deck = DECK.replace("discretisation: 50", "discretisation: 1");
        let config = Config::parse(&deck).unwrap();
        assert!(matches!(
            config.resolution(),
            Err(ConfigError::Discretisation(ConstraintError::BelowMinimum))
        ));
    }
}
