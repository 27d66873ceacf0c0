use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Trait defined over generic points P which themselves are generic over their `Scalar`.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy.
///
/// `Default` is expected to yield the origin.
pub trait Point: Copy + PartialEq + Default
where
    Self: Add<Self, Output = Self>,
    Self: Sub<Self, Output = Self>,
    Self: Mul<<Self as Point>::Scalar, Output = Self>,
{
    type Scalar: Float + Default + Debug;

    /// Number of coordinate axes
    const DIM: usize;
}

/// Points that can be measured. Needed for everything that accumulates distances.
pub trait PointNorm: Point {
    /// Squared L2 norm of the point interpreted as a vector
    fn squared_norm(&self) -> Self::Scalar;

    /// L2 norm of the point interpreted as a vector
    fn norm(&self) -> Self::Scalar {
        self.squared_norm().sqrt()
    }

    /// Straight-line distance between `self` and `other`
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).norm()
    }
}
