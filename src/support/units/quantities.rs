use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, Force, Length, Ratio, Time},
        force::newton,
        length::meter,
        ratio::ratio,
        time::second,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Angular velocity, rad/s in SI.
///
/// Uses the default kind so it composes arithmetically with lengths
/// (`Ω · s₀` is a velocity).
pub type AngularVelocity = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Squared angular velocity, 1/s² in SI.
pub type AngularVelocitySquared = Quantity<ISQ<Z0, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Surface tension, N/m in SI.
pub type SurfaceTension = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Builds an [`AngularVelocity`] from a magnitude in rad/s.
#[must_use]
pub fn radians_per_second(value: f64) -> AngularVelocity {
    Ratio::new::<ratio>(value) / Time::new::<second>(1.0)
}

/// Builds a [`SurfaceTension`] from a magnitude in N/m.
#[must_use]
pub fn newtons_per_meter(value: f64) -> SurfaceTension {
    Force::new::<newton>(value) / Length::new::<meter>(1.0)
}

/// Builds a [`KinematicViscosity`] from a magnitude in m²/s.
#[must_use]
pub fn square_meters_per_second(value: f64) -> KinematicViscosity {
    Area::new::<square_meter>(value) / Time::new::<second>(1.0)
}
