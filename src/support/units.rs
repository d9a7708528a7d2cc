//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (lengths, densities,
//! viscosities, velocities). This module defines the quantities the spinning
//! model needs that [`uom`] does not name, following the same `ISQ` alias
//! pattern [`uom`] itself uses for derived quantities.
//!
//! ## Angular velocity and kind
//!
//! [`uom`]'s own `AngularVelocity` carries the angle kind, which blocks
//! ordinary arithmetic with lengths and velocities. The [`AngularVelocity`]
//! alias here uses the default kind instead, so a rotation rate multiplied
//! by a radius is a velocity, as the jet kinematics require. Radians are
//! dimensionless in SI, so the stored value is the rad/s magnitude either
//! way.
//!
//! The aliased dimensions have no named [`uom`] unit, so each alias comes
//! with a constructor from its SI magnitude (e.g. [`radians_per_second`]).

mod quantities;

pub use quantities::{
    AngularVelocity, AngularVelocitySquared, KinematicViscosity, SurfaceTension,
    newtons_per_meter, radians_per_second, square_meters_per_second,
};
