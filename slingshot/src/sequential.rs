use crate::{Between, Interaction, InteractionPair};
use std::ops::AddAssign;

/// Trait to compute the interaction between particles using different sequential algorithms.
pub trait SequentialCompute<T>: Sized {
    /// Returns the interaction between these particles using a brute-force algorithm.
    ///
    /// Refer to [`BruteForce`] for more information.
    #[inline]
    fn brute_force(self, interaction: T) -> <BruteForce<T> as Interaction<Self>>::Output
    where
        BruteForce<T>: Interaction<Self>,
    {
        BruteForce(interaction).compute(self)
    }

    /// Returns the interaction between these particles using a brute-force algorithm, only
    /// performing the computation over the combination of pairs.
    ///
    /// Refer to [`BruteForcePairs`] for more information.
    #[inline]
    fn brute_force_pairs(self, interaction: T) -> <BruteForcePairs<T> as Interaction<Self>>::Output
    where
        BruteForcePairs<T>: Interaction<Self>,
    {
        BruteForcePairs(interaction).compute(self)
    }
}

// Manual implementations for better linting.
impl<T, P> SequentialCompute<T> for &[P] {}

/// Brute-force algorithm using one CPU thread.
///
/// Every particle sums the interaction of every other particle on it, so each pair is computed
/// twice, once in each direction.
///
/// To use particles `P` with this algorithm, the interaction `T` should implement
/// [`Interaction<Between<&P, &P>>`].
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForce<T>(pub T);

impl<P, U, T> Interaction<&[P]> for BruteForce<T>
where
    U: AddAssign + Default,
    T: for<'a> Interaction<Between<&'a P, &'a P>, Output = U>,
{
    type Output = Vec<U>;

    #[inline]
    fn compute(&mut self, slice: &[P]) -> Self::Output {
        (0..slice.len())
            .map(|i| sum_others(&mut self.0, i, slice))
            .collect()
    }
}

/// Sums the interaction of every particle of `slice` on the particle at index `i`, skipping the
/// particle itself.
#[inline]
pub(crate) fn sum_others<P, U, T>(interaction: &mut T, i: usize, slice: &[P]) -> U
where
    U: AddAssign + Default,
    T: for<'a> Interaction<Between<&'a P, &'a P>, Output = U>,
{
    let affected = &slice[i];
    let mut sum = U::default();

    for (j, affecting) in slice.iter().enumerate() {
        if i != j {
            sum += interaction.compute(Between(affected, affecting));
        }
    }

    sum
}

/// Brute-force algorithm using one CPU thread, computing each pair only once.
///
/// For every pair `(i, j)` with `j < i`, the interaction returns the contribution on both
/// particles at once (see [`InteractionPair`]). Typically faster than [`BruteForce`] because it
/// performs the computation over the combination of pairs instead of over all the pairs.
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForcePairs<T>(pub T);

impl<P, U, T> Interaction<&[P]> for BruteForcePairs<T>
where
    U: AddAssign + Default,
    T: for<'a> InteractionPair<&'a P, Output = U>,
{
    type Output = Vec<U>;

    #[inline]
    fn compute(&mut self, slice: &[P]) -> Self::Output {
        let mut output: Vec<U> = std::iter::repeat_with(U::default)
            .take(slice.len())
            .collect();

        for i in 0..slice.len() {
            let mut output_i = U::default();

            for j in 0..i {
                let computed = self.0.compute_pair(Between(&slice[i], &slice[j]));

                output_i += computed.0;
                output[j] += computed.1;
            }

            output[i] += output_i;
        }

        output
    }
}
