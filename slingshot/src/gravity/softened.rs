use crate::{
    gravity::{Mass, Position},
    Between, Interaction, InteractionPair, Vector,
};

/// Newtonian gravity with a softening length.
///
/// The distance between two bodies is replaced by `sqrt(softening² + d²)` so that the force stays
/// finite when they overlap. The acceleration a body of mass `m` exerts at a distance `d` is
/// `G * m * d / (softening² + |d|²)^(3/2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoftenedGravity {
    /// Gravitational constant.
    pub gravity: f64,
    /// Softening length to avoid singularities.
    pub softening: f64,
}

impl Default for SoftenedGravity {
    #[inline]
    fn default() -> Self {
        Self::new(1.0, 10.0)
    }
}

impl SoftenedGravity {
    /// Creates a new [`SoftenedGravity`] with the given gravitational constant and softening
    /// length.
    #[inline]
    pub const fn new(gravity: f64, softening: f64) -> Self {
        Self { gravity, softening }
    }

    /// Returns `G / s³` where `s` is the softened length of `d`.
    ///
    /// With a softening of zero, two bodies sharing a position do not interact.
    #[inline]
    pub fn magnitude_factor(&self, d: Vector) -> f64 {
        let norm_s = self.softening * self.softening + d.length_squared();

        if norm_s == 0.0 {
            0.0
        } else {
            self.gravity / (norm_s * norm_s.sqrt())
        }
    }

    /// Computes the acceleration a body of the given mass located at `source` exerts at `at`.
    #[inline]
    pub fn acceleration_at(&self, source: Vector, mass: f64, at: Vector) -> Vector {
        let d = at - source;

        -d * (self.magnitude_factor(d) * mass)
    }

    /// Computes the accelerations two bodies exert on each other.
    ///
    /// The factor is computed once and applied in opposite directions, so that
    /// `m1 * a1 == -m2 * a2`.
    #[inline]
    pub fn acceleration_paired(
        &self,
        (p1, m1): (Vector, f64),
        (p2, m2): (Vector, f64),
    ) -> (Vector, Vector) {
        let d = p1 - p2;
        let dir = d * self.magnitude_factor(d);

        (-dir * m2, dir * m1)
    }
}

impl<P1, P2> Interaction<Between<&P1, &P2>> for SoftenedGravity
where
    P1: Position<Vector = Vector> + ?Sized,
    P2: Position<Vector = Vector> + Mass<Scalar = f64> + ?Sized,
{
    type Output = Vector;

    #[inline]
    fn compute(&mut self, Between(affected, affecting): Between<&P1, &P2>) -> Vector {
        self.acceleration_at(affecting.position(), affecting.mass(), affected.position())
    }
}

impl<P> InteractionPair<&P> for SoftenedGravity
where
    P: Position<Vector = Vector> + Mass<Scalar = f64> + ?Sized,
{
    type Output = Vector;

    #[inline]
    fn compute_pair(&mut self, Between(p1, p2): Between<&P, &P>) -> (Vector, Vector) {
        self.acceleration_paired((p1.position(), p1.mass()), (p2.position(), p2.mass()))
    }
}
