mod softened;

pub use softened::SoftenedGravity;

/// Trait for types that can be located in space.
///
/// You can derive this trait if your type has a field named `position`.
pub trait Position {
    /// The type used to represent the position.
    type Vector;

    /// Returns the position of a particle.
    fn position(&self) -> Self::Vector;
}

/// Trait for an object that defines a mass.
///
/// You can derive this trait if your type has a field named `mass`.
///
/// # Example
///
/// ```
/// use slingshot::prelude::*;
///
/// #[derive(Position, Mass)]
/// struct Asteroid {
///     position: Vector,
///     mass: f64,
/// }
///
/// let ceres = Asteroid {
///     position: Vector::new(20.0, 40.0),
///     mass: 9.4,
/// };
///
/// assert_eq!(ceres.position(), Vector::new(20.0, 40.0));
/// assert_eq!(Mass::mass(&ceres), 9.4);
/// ```
pub trait Mass {
    /// The scalar type used to represent the mass of the particle.
    type Scalar;

    /// Returns the mass of the particle.
    fn mass(&self) -> Self::Scalar;
}

impl<V, S> Position for (V, S)
where
    V: Clone,
{
    type Vector = V;

    #[inline]
    fn position(&self) -> Self::Vector {
        self.0.clone()
    }
}

impl<V, S> Mass for (V, S)
where
    S: Clone,
{
    type Scalar = S;

    #[inline]
    fn mass(&self) -> Self::Scalar {
        self.1.clone()
    }
}
