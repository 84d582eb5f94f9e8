//! A heavy body at the centre of the default 800x600 canvas with four moons on roughly circular
//! orbits around it, tuned for the default gravity, softening and [`MassLaw::Areal`].

use crate::{particle::MassLaw, Particle, Vector};

/// Initial state of one preset body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetBody {
    /// Initial position.
    pub position: Vector,
    /// Initial velocity.
    pub velocity: Vector,
    /// Radius of the body.
    pub radius: f64,
}

impl PresetBody {
    const fn new(position: [f64; 2], velocity: [f64; 2], radius: f64) -> Self {
        Self {
            position: Vector::new(position[0], position[1]),
            velocity: Vector::new(velocity[0], velocity[1]),
            radius,
        }
    }
}

/// The bodies of the preset, in admission order.
pub const PRESET: [PresetBody; 5] = [
    PresetBody::new([400.0, 300.0], [0.2, 0.0], 30.0),
    PresetBody::new([550.0, 300.0], [0.0, 4.3], 5.0),
    PresetBody::new([250.0, 300.0], [0.0, -4.3], 5.0),
    PresetBody::new([400.0, 100.0], [-3.7, 0.0], 8.0),
    PresetBody::new([400.0, 520.0], [3.5, 0.0], 4.0),
];

/// Returns the particles of the preset, with masses derived by `law`.
pub fn particles(law: MassLaw) -> Vec<Particle> {
    PRESET
        .iter()
        .map(|body| Particle::new(body.position, body.velocity, body.radius, law))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bounds;

    #[test]
    fn bodies_start_inside_default_bounds() {
        let bounds = Bounds::default();

        assert!(particles(MassLaw::Areal)
            .iter()
            .all(|p| bounds.contains(p.position)));
    }
}
