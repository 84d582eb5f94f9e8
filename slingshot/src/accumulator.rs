use crate::{
    gravity::{Mass, Position, SoftenedGravity},
    sequential::SequentialCompute,
    Particle, Vector,
};
use serde::{Deserialize, Serialize};

/// Algorithm used to accumulate the gravitational acceleration of every particle.
///
/// All methods compute the same field up to floating-point rounding. None of them partitions space:
/// the cost is quadratic in the number of particles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeMethod {
    /// Each unordered pair is visited once and both contributions are applied at once.
    ///
    /// Refer to [`BruteForcePairs`](crate::sequential::BruteForcePairs).
    #[default]
    BruteForcePairs,
    /// Each particle sums the pull of every other particle.
    ///
    /// Refer to [`BruteForce`](crate::sequential::BruteForce).
    BruteForce,
    /// [`ComputeMethod::BruteForce`] spread over rayon's thread pool.
    ///
    /// Refer to [`parallel::BruteForce`](crate::parallel::BruteForce).
    #[cfg(feature = "parallel")]
    ParallelBruteForce,
}

impl ComputeMethod {
    /// Returns the acceleration of every body of `bodies` under the gravity of all the others, in
    /// the same order.
    pub fn accelerations<P>(self, gravity: SoftenedGravity, bodies: &[P]) -> Vec<Vector>
    where
        P: Position<Vector = Vector> + Mass<Scalar = f64> + Sync,
    {
        match self {
            Self::BruteForcePairs => bodies.brute_force_pairs(gravity),
            Self::BruteForce => bodies.brute_force(gravity),
            #[cfg(feature = "parallel")]
            Self::ParallelBruteForce => {
                crate::parallel::ParallelCompute::par_brute_force(bodies, gravity)
            }
        }
    }
}

/// Computes the net gravitational acceleration acting on each particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForceAccumulator {
    /// The force law.
    pub gravity: SoftenedGravity,
    /// The algorithm used to apply it to every pair.
    pub method: ComputeMethod,
}

impl ForceAccumulator {
    /// Creates a new [`ForceAccumulator`].
    #[inline]
    pub const fn new(gravity: SoftenedGravity, method: ComputeMethod) -> Self {
        Self { gravity, method }
    }

    /// Replaces the acceleration of every particle with the one computed from the current
    /// positions. Accelerations from a previous pass are discarded.
    pub fn accumulate(&self, particles: &mut [Particle]) {
        let accelerations = self.method.accelerations(self.gravity, particles);

        for (particle, acceleration) in particles.iter_mut().zip(accelerations) {
            particle.acceleration = acceleration;
        }
    }
}
