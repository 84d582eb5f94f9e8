use crate::{
    gravity::{Mass, Position},
    Vector,
};
use serde::{Deserialize, Serialize};
use slingshot_derive::{Mass, Position};
use std::f64::consts::PI;

/// How the mass of a particle is derived from its radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassLaw {
    /// `mass = π * r²`: bodies behave like flat discs.
    #[default]
    Areal,
    /// `mass = 4/3 * π * r³`: bodies behave like spheres.
    Volumetric,
}

impl MassLaw {
    /// Returns the mass of a body of the given radius.
    #[inline]
    pub fn mass(self, radius: f64) -> f64 {
        match self {
            Self::Areal => PI * radius * radius,
            Self::Volumetric => 4.0 / 3.0 * PI * radius * radius * radius,
        }
    }
}

/// A gravitating body.
///
/// The radius and the mass are fixed when the particle is created and can only be read. Position,
/// velocity and acceleration are advanced by the
/// [`Integrator`](crate::integrator::Integrator).
#[derive(Clone, Copy, Debug, PartialEq, Position, Mass)]
pub struct Particle {
    /// Centre of the body.
    pub position: Vector,
    /// Current velocity.
    pub velocity: Vector,
    /// Acceleration accumulated during the last force pass.
    pub acceleration: Vector,
    radius: f64,
    mass: f64,
}

impl Particle {
    /// Creates a new [`Particle`] at rest acceleration-wise, deriving its mass from `radius` with
    /// the given law.
    #[inline]
    pub fn new(position: Vector, velocity: Vector, radius: f64, mass_law: MassLaw) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector::ZERO,
            radius,
            mass: mass_law.mass(radius),
        }
    }

    /// Returns the radius of the particle.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the mass of the particle.
    #[inline]
    pub const fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns the momentum of the particle, `mass * velocity`.
    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    /// Returns the kinetic energy of the particle.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_laws() {
        assert_eq!(MassLaw::Areal.mass(2.0), 4.0 * PI);
        assert!((MassLaw::Volumetric.mass(3.0) - 36.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn derived_traits_read_fields() {
        let particle = Particle::new(
            Vector::new(1.0, 2.0),
            Vector::new(-1.0, 0.5),
            10.0,
            MassLaw::Areal,
        );

        assert_eq!(Position::position(&particle), Vector::new(1.0, 2.0));
        assert_eq!(Mass::mass(&particle), particle.mass());
        assert!((particle.mass() - 100.0 * PI).abs() < 1e-12);
        assert_eq!(particle.acceleration, Vector::ZERO);
    }

    #[test]
    fn momentum_and_energy() {
        let particle = Particle::new(Vector::ZERO, Vector::new(3.0, 4.0), 1.0, MassLaw::Areal);

        assert_eq!(particle.momentum(), Vector::new(3.0 * PI, 4.0 * PI));
        assert!((particle.kinetic_energy() - 12.5 * PI).abs() < 1e-12);
    }
}
