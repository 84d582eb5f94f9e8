use crate::{sequential::sum_others, Between, Interaction};
use rayon::prelude::*;
use std::ops::AddAssign;

/// Trait to compute the interaction between particles using different parallel algorithms.
pub trait ParallelCompute<T>: Sized {
    /// Returns the interaction between these particles using a parallel brute-force algorithm.
    ///
    /// Refer to [`BruteForce`] for more information.
    #[inline]
    fn par_brute_force(self, interaction: T) -> <BruteForce<T> as Interaction<Self>>::Output
    where
        BruteForce<T>: Interaction<Self>,
    {
        BruteForce(interaction).compute(self)
    }
}

// Manual implementation for better linting.
impl<T, P> ParallelCompute<T> for &[P] {}

/// Brute-force algorithm using multiple CPU threads.
///
/// Equivalent to [`sequential::BruteForce`](crate::sequential::BruteForce) with the affected
/// particles spread over rayon's thread pool. Each thread works on its own copy of the
/// interaction.
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForce<T>(pub T);

impl<P, U, T> Interaction<&[P]> for BruteForce<T>
where
    P: Sync,
    U: AddAssign + Default + Send,
    T: for<'a> Interaction<Between<&'a P, &'a P>, Output = U> + Clone + Send + Sync,
{
    type Output = Vec<U>;

    #[inline]
    fn compute(&mut self, slice: &[P]) -> Self::Output {
        (0..slice.len())
            .into_par_iter()
            .map_with(self.0.clone(), |interaction, i| {
                sum_others(interaction, i, slice)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gravity::SoftenedGravity, sequential::SequentialCompute, Vector};

    #[test]
    fn matches_sequential() {
        let bodies: Vec<_> = (0..64)
            .map(|i| {
                let angle = i as f64 * 0.37;
                let position = Vector::new(angle.cos(), angle.sin()) * (20.0 + 3.0 * i as f64);
                (position, 1.0 + i as f64)
            })
            .collect();

        let gravity = SoftenedGravity::default();
        let parallel = bodies.par_brute_force(gravity);
        let sequential = bodies.brute_force(gravity);

        assert_eq!(parallel, sequential);
    }
}
