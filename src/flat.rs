//! Construction from flat coordinate buffers, the layout foreign callers hand across
//! (`[x0, y0, z0, x1, y1, z1, ...]` for the four control points in order).

use core::fmt;
use core::fmt::Debug;

use num_traits::Float;

use super::arc_length::ArcLengthCurve;
use super::point::Point;
use super::point_generic::PointN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatPointsError {
    /// The buffer does not hold exactly four points.
    WrongLength { expected: usize, found: usize },
    /// The coordinate at `index` is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for FlatPointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatPointsError::WrongLength { expected, found } => write!(
                f,
                "expected {} coordinates for four control points, found {}",
                expected, found
            ),
            FlatPointsError::NonFinite { index } => {
                write!(f, "coordinate {} is not a finite number", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FlatPointsError {}

impl<T, const N: usize> ArcLengthCurve<PointN<T, N>>
where
    T: Float + Default + Debug,
{
    /// Builds a curve from `4 * DIM` coordinates laid out point after point.
    ///
    /// ```rust
    /// use arclen::ArcLengthCurve;
    ///
    /// let coords = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0];
    /// let curve = ArcLengthCurve::<arclen::Point3<f32>>::from_flat(&coords).unwrap();
    /// assert!((curve.total_length() - 3.0).abs() < 1e-4);
    /// ```
    pub fn from_flat(coords: &[T]) -> Result<Self, FlatPointsError> {
        let dim = <PointN<T, N> as Point>::DIM;
        let expected = 4 * dim;
        if coords.len() != expected {
            return Err(FlatPointsError::WrongLength {
                expected,
                found: coords.len(),
            });
        }
        if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
            return Err(FlatPointsError::NonFinite { index });
        }

        let mut points = [PointN::default(); 4];
        for (point, chunk) in points.iter_mut().zip(coords.chunks_exact(dim.max(1))) {
            for (axis, value) in chunk.iter().enumerate() {
                point[axis] = *value;
            }
        }

        let [start, ctrl1, ctrl2, end] = points;
        Ok(Self::from_points(start, ctrl1, ctrl2, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point3, PointNorm, EPSILON};

    #[test]
    fn from_flat_reads_points_in_order() {
        let coords = [0f64, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0];
        let curve = ArcLengthCurve::<Point3<f64>>::from_flat(&coords).unwrap();
        let points = curve.bezier().control_points();
        assert_eq!(points[0], PointN::new([0.0, 0.0, 0.0]));
        assert_eq!(points[3], PointN::new([3.0, 0.0, 0.0]));
        let p = curve.position_at_distance(1.5);
        assert!((p - PointN::new([1.5, 0.0, 0.0])).squared_norm() < EPSILON);
    }

    #[test]
    fn from_flat_rejects_wrong_length() {
        let coords = [0f32; 11];
        let err = ArcLengthCurve::<Point3<f32>>::from_flat(&coords).unwrap_err();
        assert_eq!(
            err,
            FlatPointsError::WrongLength {
                expected: 12,
                found: 11
            }
        );
    }

    #[test]
    fn from_flat_rejects_non_finite() {
        let mut coords = [1f32; 12];
        coords[7] = f32::NAN;
        let err = ArcLengthCurve::<Point3<f32>>::from_flat(&coords).unwrap_err();
        assert_eq!(err, FlatPointsError::NonFinite { index: 7 });

        coords[7] = 0.0;
        coords[2] = f32::INFINITY;
        let err = ArcLengthCurve::<Point3<f32>>::from_flat(&coords).unwrap_err();
        assert_eq!(err, FlatPointsError::NonFinite { index: 2 });
    }
}
