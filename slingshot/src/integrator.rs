//! The integrators advance positions by half a step per substep only. Their purpose is visual
//! stability at a fixed frame cadence, not accuracy: neither is symplectic.

use crate::{accumulator::ForceAccumulator, Particle};
use serde::{Deserialize, Serialize};

/// Order of the velocity ("kick") and position ("drift") updates within a substep of length `dt`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// 1. accelerations from the current positions,
    /// 2. `velocity += acceleration * dt`,
    /// 3. `position += velocity * dt / 2` with the new velocity.
    #[default]
    KickDrift,
    /// 1. `position += velocity * dt / 2`,
    /// 2. accelerations from the drifted positions,
    /// 3. `velocity += acceleration * dt`,
    /// 4. `position += velocity * dt / 2` with the new velocity.
    DriftKickDrift,
}

impl Integrator {
    /// Advances the particles by one substep of length `dt`.
    pub fn step(self, particles: &mut [Particle], forces: &ForceAccumulator, dt: f64) {
        let half_dt = 0.5 * dt;

        match self {
            Self::KickDrift => {
                forces.accumulate(particles);
                kick(particles, dt);
                drift(particles, half_dt);
            }
            Self::DriftKickDrift => {
                drift(particles, half_dt);
                forces.accumulate(particles);
                kick(particles, dt);
                drift(particles, half_dt);
            }
        }
    }
}

#[inline]
fn kick(particles: &mut [Particle], dt: f64) {
    for p in particles {
        p.velocity += p.acceleration * dt;
    }
}

#[inline]
fn drift(particles: &mut [Particle], dt: f64) {
    for p in particles {
        p.position += p.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{particle::MassLaw, Vector};

    fn total_momentum(particles: &[Particle]) -> Vector {
        particles.iter().map(Particle::momentum).sum()
    }

    fn three_bodies() -> Vec<Particle> {
        vec![
            Particle::new(Vector::new(300.0, 300.0), Vector::new(0.5, -0.2), 20.0, MassLaw::Areal),
            Particle::new(Vector::new(450.0, 310.0), Vector::new(0.0, 3.0), 6.0, MassLaw::Areal),
            Particle::new(Vector::new(200.0, 150.0), Vector::new(-2.0, 1.0), 9.0, MassLaw::Areal),
        ]
    }

    #[test]
    fn kick_drift_single_step() {
        let mut lone = [Particle::new(
            Vector::new(10.0, 10.0),
            Vector::new(4.0, -2.0),
            3.0,
            MassLaw::Areal,
        )];

        Integrator::KickDrift.step(&mut lone, &ForceAccumulator::default(), 0.125);

        // No acceleration: half a step of drift.
        assert_eq!(lone[0].velocity, Vector::new(4.0, -2.0));
        assert_eq!(lone[0].position, Vector::new(10.25, 9.875));
    }

    #[test]
    fn drift_kick_drift_single_step() {
        let mut lone = [Particle::new(
            Vector::new(10.0, 10.0),
            Vector::new(4.0, -2.0),
            3.0,
            MassLaw::Areal,
        )];

        Integrator::DriftKickDrift.step(&mut lone, &ForceAccumulator::default(), 0.125);

        // Two half steps of drift.
        assert_eq!(lone[0].position, Vector::new(10.5, 9.75));
    }

    #[test]
    fn momentum_is_conserved() {
        for integrator in [Integrator::KickDrift, Integrator::DriftKickDrift] {
            let mut particles = three_bodies();
            let forces = ForceAccumulator::default();
            let before = total_momentum(&particles);

            for _ in 0..4_000 {
                integrator.step(&mut particles, &forces, 0.125);
            }

            let after = total_momentum(&particles);
            let error = (after - before).length() / before.length();
            dbg!(integrator, error);
            assert!(error < 1e-9);
        }
    }

    #[test]
    fn mass_and_radius_never_change() {
        let mut particles = three_bodies();
        let before: Vec<_> = particles.iter().map(|p| (p.mass(), p.radius())).collect();

        for _ in 0..1_000 {
            Integrator::KickDrift.step(&mut particles, &ForceAccumulator::default(), 0.125);
        }

        let after: Vec<_> = particles.iter().map(|p| (p.mass(), p.radius())).collect();
        assert_eq!(before, after);
    }
}
