use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A two-dimensional vector of `f64` components.
///
/// `Vector` is a plain value: every operation returns a new vector and leaves its operands
/// untouched. [`Vector::set`] is the only method that mutates, and it is meant to store the result
/// of a computation back into a slot.
///
/// Binary operators accept either another vector (component-wise) or a scalar, which is broadcast
/// to both components.
///
/// ```
/// use slingshot::Vector;
///
/// let v = Vector::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v + 1.0, Vector::new(4.0, 5.0));
/// assert_eq!(v * Vector::new(2.0, 0.5), Vector::new(6.0, 2.0));
/// assert_eq!(Vector::ZERO.normalize(), Vector::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    #[allow(missing_docs)]
    pub x: f64,
    #[allow(missing_docs)]
    pub y: f64,
}

impl Vector {
    /// All zeroes.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Copies the components of `value` into `self`. A scalar is broadcast to both components.
    #[inline]
    pub fn set(&mut self, value: impl Into<Vector>) -> &mut Self {
        *self = value.into();
        self
    }

    /// Computes the dot product of `self` and `rhs`.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Computes the z component of the cross product of `self` and `rhs` extended to 3D.
    #[inline]
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Computes the length of `self`.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the squared length of `self`.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns `self` scaled to a length of 1.
    ///
    /// A vector of length 0 has no direction and the zero vector is returned instead.
    #[inline]
    pub fn normalize(self) -> Self {
        let length = self.length();

        if length == 0.0 {
            Self::ZERO
        } else {
            self / length
        }
    }

    /// Returns `self` with the same direction and the given length. The zero vector stays zero.
    #[inline]
    pub fn set_length(self, length: f64) -> Self {
        self.normalize() * length
    }

    /// Returns `self` rescaled to `max` if it is longer than `max`, `self` otherwise.
    #[inline]
    pub fn truncate(self, max: f64) -> Self {
        if self.length() > max {
            self.set_length(max)
        } else {
            self
        }
    }

    /// Linear interpolation between `self` and `rhs`: `s = 0` gives `self`, `s = 1` gives `rhs`.
    #[inline]
    pub fn lerp(self, rhs: Self, s: f64) -> Self {
        self + (rhs - self) * s
    }

    /// Computes the Euclidean distance between `self` and `rhs`.
    #[inline]
    pub fn distance(self, rhs: Self) -> f64 {
        self.distance_squared(rhs).sqrt()
    }

    /// Computes the squared Euclidean distance between `self` and `rhs`.
    #[inline]
    pub fn distance_squared(self, rhs: Self) -> f64 {
        (self - rhs).length_squared()
    }

    /// Returns a vector containing the absolute value of each component of `self`.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Returns `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

macro_rules! impl_op {
    ($op: ident, $fn: ident, $op_assign: ident, $fn_assign: ident, $sym: tt) => {
        impl $op for Vector {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                Self::new(self.x $sym rhs.x, self.y $sym rhs.y)
            }
        }

        impl $op<f64> for Vector {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: f64) -> Self {
                Self::new(self.x $sym rhs, self.y $sym rhs)
            }
        }

        impl $op<Vector> for f64 {
            type Output = Vector;

            #[inline]
            fn $fn(self, rhs: Vector) -> Vector {
                Vector::new(self $sym rhs.x, self $sym rhs.y)
            }
        }

        impl<T> $op_assign<T> for Vector
        where
            Vector: $op<T, Output = Vector>,
        {
            #[inline]
            fn $fn_assign(&mut self, rhs: T) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_op!(Add, add, AddAssign, add_assign, +);
impl_op!(Sub, sub, SubAssign, sub_assign, -);
impl_op!(Mul, mul, MulAssign, mul_assign, *);
impl_op!(Div, div, DivAssign, div_assign, /);

impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::iter::Sum for Vector {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<f64> for Vector {
    #[inline]
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<[f64; 2]> for Vector {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for [f64; 2] {
    #[inline]
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

#[cfg(feature = "glam")]
impl From<glam::DVec2> for Vector {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(feature = "glam")]
impl From<Vector> for glam::DVec2 {
    #[inline]
    fn from(v: Vector) -> Self {
        glam::DVec2::new(v.x, v.y)
    }
}
