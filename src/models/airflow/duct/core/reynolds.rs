use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity, Velocity},
    length::foot,
    mass_density::pound_per_cubic_foot,
    velocity::foot_per_second,
};

use crate::support::units::pound_per_foot_hour;

/// Reynolds number at and above which flow is treated as turbulent.
///
/// There is no transitional band: anything below is laminar.
pub const TURBULENT_REYNOLDS: f64 = 2000.0;

/// Friction regime selected from the Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// `Re < 2000`, friction factor `64 / Re`.
    Laminar,

    /// `Re ≥ 2000`, friction factor from Colebrook-White.
    Turbulent,
}

impl FlowRegime {
    /// Classifies a Reynolds number.
    ///
    /// `Re < 2000` is laminar; `Re ≥ 2000` is turbulent.
    #[must_use]
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < TURBULENT_REYNOLDS {
            Self::Laminar
        } else {
            Self::Turbulent
        }
    }
}

/// Computes the Reynolds number `ρ·V·D/μ`.
///
/// Evaluated in lbm, ft, and s, with the viscosity given per hour converted
/// to per second.
#[must_use]
pub fn reynolds_number(
    density: MassDensity,
    velocity: Velocity,
    diameter: Length,
    dynamic_viscosity: DynamicViscosity,
) -> f64 {
    let rho = density.get::<pound_per_cubic_foot>();
    let v = velocity.get::<foot_per_second>();
    let d = diameter.get::<foot>();
    let mu = dynamic_viscosity.get::<pound_per_foot_hour>() / 3600.0;

    rho * v * d / mu
}
