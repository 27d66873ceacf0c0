//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to use `nalgebra::SVector<T, D>`
//! as a `Point`. Add `nalgebra` as a direct dependency to construct the vectors
//! in your own code.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::Vector3;
//! use arclen::ArcLengthCurve;
//!
//! let curve = ArcLengthCurve::from_points(
//!     Vector3::new(0.0f32, 0.0, 0.0),
//!     Vector3::new(1.0, 1.0, 0.0),
//!     Vector3::new(2.0, -1.0, 0.0),
//!     Vector3::new(3.0, 0.0, 1.0),
//! );
//!
//! let halfway = curve.position_at_distance(curve.total_length() / 2.0);
//! # let _ = halfway;
//! ```
//!
//! The scalar type must satisfy `nalgebra::RealField` and `num_traits::Float`
//! (e.g. `f32` or `f64`).

use core::fmt::Debug;

use nalgebra::{RealField, SVector};
use num_traits::Float;

use crate::point::{Point, PointNorm};

impl<T, const D: usize> Point for SVector<T, D>
where
    T: RealField + Float + Default + Debug,
    SVector<T, D>: Default,
{
    type Scalar = T;
    const DIM: usize = D;
}

impl<T, const D: usize> PointNorm for SVector<T, D>
where
    T: RealField + Float + Default + Debug,
    SVector<T, D>: Default,
{
    fn squared_norm(&self) -> T {
        self.norm_squared()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use crate::{ArcLengthCurve, PointNorm};

    #[test]
    fn svector_walks_like_point_n() {
        let curve = ArcLengthCurve::from_points(
            Vector3::new(0f64, 0.0, 0.0),
            Vector3::new(1f64, 0.0, 0.0),
            Vector3::new(2f64, 0.0, 0.0),
            Vector3::new(3f64, 0.0, 0.0),
        );
        assert!((curve.total_length() - 3.0).abs() < 1e-9);
        let p = curve.position_at_distance(1.5);
        assert!((p - Vector3::new(1.5, 0.0, 0.0)).squared_norm() < 1e-9);
    }
}
