//! Parameter sweeps over the fiber radius prediction.
//!
//! A sweep holds one machine/polymer pairing fixed, varies a single polymer
//! property over an evenly spaced closed interval, and evaluates the core
//! relations once per sample in dependency order. Samples whose parameter
//! combination falls outside the physical regime are skipped and reported;
//! anything else that fails aborts the sweep.

use std::{
    fmt::Debug,
    ops::{Add, Deref, Mul, Sub},
};

use thiserror::Error;
use uom::si::f64::{DynamicViscosity, Length, MassDensity};

use crate::support::constraint::{Constrained, Constraint, ConstraintError, ConstraintResult};

use super::core::{self, ModelError};
use super::parameters::{MachineParameters, PolymerParameters};

/// Marker type enforcing a sample count of at least two.
///
/// Two samples are the minimum that still hits both range endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastTwo;

impl Constraint<usize> for AtLeastTwo {
    fn check(value: &usize) -> Result<(), ConstraintError> {
        if *value >= 2 {
            Ok(())
        } else {
            Err(ConstraintError::BelowMinimum)
        }
    }
}

/// Number of evenly spaced samples in a sweep.
///
/// Higher resolutions give a finer sweep; the count is fixed up front, so
/// results are collected into a sequence of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution(Constrained<usize, AtLeastTwo>);

impl Resolution {
    /// Creates a [`Resolution`] from a sample count.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the count is below two.
    pub fn new(count: usize) -> ConstraintResult<Self> {
        Ok(Self(Constrained::new(count)?))
    }
}

impl Deref for Resolution {
    type Target = usize;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Closed sweep interval with strictly increasing endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange<Q> {
    lo: Q,
    hi: Q,
}

impl<Q> SweepRange<Q>
where
    Q: PartialOrd + Copy + Debug,
{
    /// Creates a sweep interval `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::InvalidRange`] unless `lo < hi`.
    pub fn new(lo: Q, hi: Q) -> Result<Self, SweepError> {
        if lo < hi {
            Ok(Self { lo, hi })
        } else {
            Err(SweepError::InvalidRange {
                context: format!("lower bound {lo:?} must be below upper bound {hi:?}"),
            })
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lo(&self) -> Q {
        self.lo
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn hi(&self) -> Q {
        self.hi
    }

    /// Returns sample `index` of `last + 1` evenly spaced samples.
    ///
    /// Both endpoints are produced exactly.
    fn sample(&self, index: usize, last: usize) -> Q
    where
        Q: Add<Output = Q> + Sub<Output = Q> + Mul<f64, Output = Q>,
    {
        if index == last {
            self.hi
        } else {
            let fraction = index as f64 / last as f64;
            self.lo + (self.hi - self.lo) * fraction
        }
    }
}

/// One admissible sample: the swept value and the predicted fiber radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint<Q> {
    /// Value of the swept property at this sample.
    pub x: Q,

    /// Predicted steady-state fiber radius.
    pub final_radius: Length,
}

/// A sample skipped because it falls outside the physical regime.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped<Q> {
    /// Value of the swept property at the skipped sample.
    pub x: Q,

    /// The regime error produced by the core.
    pub reason: ModelError,
}

/// Ordered sweep output.
///
/// `points` holds one entry per admissible sample, in sweep order.
/// `skipped` lists the samples that had no physical solution.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult<Q> {
    pub points: Vec<SweepPoint<Q>>,
    pub skipped: Vec<Skipped<Q>>,
}

/// Errors that can abort a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    /// The sweep interval is empty or reversed.
    #[error("invalid sweep range: {context}")]
    InvalidRange { context: String },

    /// A sample failed in a way that indicates a misconfigured run.
    ///
    /// Regime errors never surface here; they skip the sample instead.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Sweeps one polymer property while holding everything else fixed.
#[derive(Debug, Clone)]
pub struct Sweep<'a> {
    machine: &'a MachineParameters,
    polymer: &'a PolymerParameters,
    resolution: Resolution,
}

impl<'a> Sweep<'a> {
    #[must_use]
    pub fn new(
        machine: &'a MachineParameters,
        polymer: &'a PolymerParameters,
        resolution: Resolution,
    ) -> Self {
        Self {
            machine,
            polymer,
            resolution,
        }
    }

    /// Sweeps the polymer density over `range`.
    ///
    /// Density enters both the ejection threshold and the kinematic
    /// viscosity, so every intermediate is re-derived at each sample.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::Model`] if a sample fails for any reason other
    /// than an inadmissible regime.
    pub fn over_density(
        &self,
        range: SweepRange<MassDensity>,
    ) -> Result<SweepResult<MassDensity>, SweepError> {
        self.run(range, |density| self.radius_at_density(density))
    }

    /// Sweeps the polymer viscosity over `range`.
    ///
    /// The ejection threshold and initial velocity depend on density only,
    /// so they are derived once and shared across all samples; viscosity
    /// enters through the kinematic viscosity alone.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::Model`] if a sample fails for any reason other
    /// than an inadmissible regime.
    pub fn over_viscosity(
        &self,
        range: SweepRange<DynamicViscosity>,
    ) -> Result<SweepResult<DynamicViscosity>, SweepError> {
        let omega_th = core::critical_rotational_velocity_threshold(
            self.polymer.surface_tension(),
            self.machine.orifice_radius(),
            self.machine.reservoir_radius(),
            self.polymer.density(),
        )?;
        let v0 = core::initial_velocity(omega_th, self.machine.reservoir_radius())?;

        self.run(range, |viscosity| {
            let nu = core::kinematic_viscosity(viscosity, self.polymer.density())?;
            core::final_radius(
                self.machine.orifice_radius(),
                v0,
                nu,
                self.machine.collector_radius(),
                self.machine.angular_velocity(),
            )
        })
    }

    fn radius_at_density(&self, density: MassDensity) -> Result<Length, ModelError> {
        let omega_th = core::critical_rotational_velocity_threshold(
            self.polymer.surface_tension(),
            self.machine.orifice_radius(),
            self.machine.reservoir_radius(),
            density,
        )?;
        let v0 = core::initial_velocity(omega_th, self.machine.reservoir_radius())?;
        let nu = core::kinematic_viscosity(self.polymer.viscosity(), density)?;
        core::final_radius(
            self.machine.orifice_radius(),
            v0,
            nu,
            self.machine.collector_radius(),
            self.machine.angular_velocity(),
        )
    }

    fn run<Q>(
        &self,
        range: SweepRange<Q>,
        radius_at: impl Fn(Q) -> Result<Length, ModelError>,
    ) -> Result<SweepResult<Q>, SweepError>
    where
        Q: PartialOrd + Copy + Debug + Add<Output = Q> + Sub<Output = Q> + Mul<f64, Output = Q>,
    {
        let count = *self.resolution;
        let last = count - 1;

        let mut points = Vec::with_capacity(count);
        let mut skipped = Vec::new();

        for index in 0..count {
            let x = range.sample(index, last);
            match radius_at(x) {
                Ok(final_radius) => points.push(SweepPoint { x, final_radius }),
                Err(reason @ ModelError::InvalidRegime { .. }) => {
                    skipped.push(Skipped { x, reason });
                }
                Err(fatal) => return Err(fatal.into()),
            }
        }

        Ok(SweepResult { points, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        dynamic_viscosity::pascal_second, length::meter, mass_density::kilogram_per_cubic_meter,
    };

    use crate::support::units::{newtons_per_meter, radians_per_second};

    fn bench_machine(omega: f64) -> MachineParameters {
        MachineParameters::new(
            "bench rig",
            Length::new::<meter>(0.01),
            Length::new::<meter>(0.5),
            Length::new::<meter>(0.0006),
            radians_per_second(omega),
        )
        .unwrap()
    }

    fn bench_polymer(surface_tension: f64) -> PolymerParameters {
        PolymerParameters::new(
            "melt",
            MassDensity::new::<kilogram_per_cubic_meter>(1200.0),
            DynamicViscosity::new::<pascal_second>(0.3),
            newtons_per_meter(surface_tension),
        )
        .unwrap()
    }

    fn density_range() -> SweepRange<MassDensity> {
        SweepRange::new(
            MassDensity::new::<kilogram_per_cubic_meter>(900.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1500.0),
        )
        .unwrap()
    }

    #[test]
    fn resolution_requires_at_least_two_samples() {
        assert!(Resolution::new(2).is_ok());
        assert_eq!(Resolution::new(1), Err(ConstraintError::BelowMinimum));
        assert_eq!(Resolution::new(0), Err(ConstraintError::BelowMinimum));
    }

    #[test]
    fn range_requires_increasing_bounds() {
        let lo = MassDensity::new::<kilogram_per_cubic_meter>(1500.0);
        let hi = MassDensity::new::<kilogram_per_cubic_meter>(900.0);
        assert!(matches!(
            SweepRange::new(lo, hi),
            Err(SweepError::InvalidRange { .. })
        ));
        assert!(matches!(
            SweepRange::new(lo, lo),
            Err(SweepError::InvalidRange { .. })
        ));
    }

    #[test]
    fn density_sweep_hits_both_endpoints_exactly() {
        let machine = bench_machine(300.0);
        let polymer = bench_polymer(0.03);
        let sweep = Sweep::new(&machine, &polymer, Resolution::new(50).unwrap());

        let result = sweep.over_density(density_range()).unwrap();

        assert_eq!(result.points.len(), 50);
        assert!(result.skipped.is_empty());
        assert_eq!(
            result.points[0].x,
            MassDensity::new::<kilogram_per_cubic_meter>(900.0)
        );
        assert_eq!(
            result.points[49].x,
            MassDensity::new::<kilogram_per_cubic_meter>(1500.0)
        );
    }

    #[test]
    fn denser_melts_spin_thinner_fibers() {
        let machine = bench_machine(300.0);
        let polymer = bench_polymer(0.03);
        let sweep = Sweep::new(&machine, &polymer, Resolution::new(20).unwrap());

        let result = sweep.over_density(density_range()).unwrap();

        for pair in result.points.windows(2) {
            assert!(pair[1].final_radius <= pair[0].final_radius);
        }
    }

    #[test]
    fn viscosity_sweep_shares_the_density_derived_intermediates() {
        let machine = bench_machine(300.0);
        let polymer = bench_polymer(0.03);
        let sweep = Sweep::new(&machine, &polymer, Resolution::new(10).unwrap());

        let range = SweepRange::new(
            DynamicViscosity::new::<pascal_second>(0.1),
            DynamicViscosity::new::<pascal_second>(1.0),
        )
        .unwrap();
        let result = sweep.over_viscosity(range).unwrap();

        assert_eq!(result.points.len(), 10);
        assert_eq!(
            result.points[0].x,
            DynamicViscosity::new::<pascal_second>(0.1)
        );
        assert_eq!(
            result.points[9].x,
            DynamicViscosity::new::<pascal_second>(1.0)
        );

        // Threshold and ejection speed are density-dependent only, so each
        // point must equal a fresh evaluation with those intermediates.
        let omega_th = core::critical_rotational_velocity_threshold(
            polymer.surface_tension(),
            machine.orifice_radius(),
            machine.reservoir_radius(),
            polymer.density(),
        )
        .unwrap();
        let v0 = core::initial_velocity(omega_th, machine.reservoir_radius()).unwrap();

        for point in &result.points {
            let nu = core::kinematic_viscosity(point.x, polymer.density()).unwrap();
            let expected = core::final_radius(
                machine.orifice_radius(),
                v0,
                nu,
                machine.collector_radius(),
                machine.angular_velocity(),
            )
            .unwrap();
            assert_eq!(point.final_radius, expected);
        }
    }

    #[test]
    fn regime_failures_skip_the_sample_and_continue() {
        // A machine at rest admits no steady jet at any density.
        let machine = bench_machine(0.0);
        let polymer = bench_polymer(0.03);
        let sweep = Sweep::new(&machine, &polymer, Resolution::new(5).unwrap());

        let result = sweep.over_density(density_range()).unwrap();

        assert!(result.points.is_empty());
        assert_eq!(result.skipped.len(), 5);
        for skipped in &result.skipped {
            assert!(matches!(skipped.reason, ModelError::InvalidRegime { .. }));
        }
    }

    #[test]
    fn parameter_failures_abort_the_sweep() {
        // Zero surface tension is a valid polymer but an invalid threshold
        // input, which marks the whole run as misconfigured.
        let machine = bench_machine(300.0);
        let polymer = bench_polymer(0.0);
        let sweep = Sweep::new(&machine, &polymer, Resolution::new(5).unwrap());

        let result = sweep.over_density(density_range());

        assert!(matches!(
            result,
            Err(SweepError::Model(ModelError::InvalidParameter { .. }))
        ));
    }
}
