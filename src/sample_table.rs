//! Chord-length lookup table: samples of a curve paired with the distance travelled to reach them.

use core::slice;

use num_traits::{Float, One, Zero};
use tinyvec::TinyVec;

use super::cubic_bezier::{scalar, CubicBezier};
use super::point::{Point, PointNorm};

/// Tables up to this size are stored inline, longer ones spill to the heap.
pub const INLINE_SAMPLES: usize = 16;

/// A point on the curve and the polyline distance accumulated from the curve's start up to it.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Sample<P: Point> {
    pub position: P,
    pub distance: P::Scalar,
}

/// Ordered samples with non-decreasing `distance`, built once and read-only afterwards.
/// May be empty for degenerate curves.
#[derive(Debug, Clone)]
pub struct SampleTable<P: Point> {
    samples: TinyVec<[Sample<P>; INLINE_SAMPLES]>,
}

impl<P> SampleTable<P>
where
    P: PointNorm,
{
    /// Samples `bezier` at `count` evenly spaced parameters, the first at t = 0 and the last at t = 1,
    /// accumulating the straight distance between consecutive samples.
    /// The first sample accumulates its distance from the curve's start point.
    /// A single sample is taken at t = 0, which avoids dividing by `count - 1 = 0`.
    pub fn build(bezier: &CubicBezier<P>, count: usize) -> Self {
        let mut samples = TinyVec::with_capacity(count);
        if count == 1 {
            log::trace!("single sample table, sampling t = 0 only");
            samples.push(Sample {
                position: bezier.eval(P::Scalar::zero()),
                distance: P::Scalar::zero(),
            });
            return SampleTable { samples };
        }

        let last_index = scalar::<P>(count.saturating_sub(1) as f64);
        let mut distance = P::Scalar::zero();
        let mut last = bezier.start;

        for i in 0..count {
            let t = scalar::<P>(i as f64) / last_index;
            let position = bezier.eval(t);
            distance = distance + position.distance(last);
            samples.push(Sample { position, distance });
            last = position;
        }

        SampleTable { samples }
    }
}

impl<P> SampleTable<P>
where
    P: Point,
{
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Sample<P>] {
        &self.samples
    }

    pub fn iter(&self) -> slice::Iter<'_, Sample<P>> {
        self.samples.iter()
    }

    /// Distance accumulated up to the last sample, 0 for an empty table.
    pub fn total_length(&self) -> P::Scalar {
        self.samples
            .last()
            .map(|sample| sample.distance)
            .unwrap_or_else(P::Scalar::zero)
    }

    /// Index of the first sample whose distance is not less than `distance`,
    /// `len()` if there is none.
    pub fn lower_bound(&self, distance: P::Scalar) -> usize {
        self.samples.partition_point(|sample| sample.distance < distance)
    }

    /// The pair of neighbouring sample indices `(current, next)` that brackets `distance`.
    /// Indices are clamped to the table so queries before the start report `(0, 1)` and
    /// queries past the end report `(len - 2, len - 1)`.
    /// Returns None if the table has fewer than two samples.
    pub fn interval_at(&self, distance: P::Scalar) -> Option<(usize, usize)> {
        let len = self.samples.len();
        if len < 2 {
            return None;
        }
        let next = self.lower_bound(distance).clamp(1, len - 1);
        Some((next - 1, next))
    }

    /// Position reached after travelling `distance` along the sampled polyline.
    ///
    /// Queries before the first sample return the first position, queries beyond the last
    /// sample return the last position. Tables with fewer than two samples answer with the origin.
    pub fn position_at(&self, distance: P::Scalar) -> P {
        let len = self.samples.len();
        if len < 2 {
            return P::default();
        }

        let next = self.lower_bound(distance);
        if next == 0 {
            return self.samples[0].position;
        }
        if next == len {
            return self.samples[len - 1].position;
        }

        let current = &self.samples[next - 1];
        let next = &self.samples[next];
        let span = next.distance - current.distance;

        // samples at (effectively) the same distance snap to the current one
        let mut t = P::Scalar::zero();
        if span > P::Scalar::epsilon() {
            t = ((distance - current.distance) / span)
                .max(P::Scalar::zero())
                .min(P::Scalar::one());
        }

        current.position * (P::Scalar::one() - t) + next.position * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point3, PointN, EPSILON};

    fn straight_line() -> CubicBezier<Point3<f64>> {
        CubicBezier::new(
            PointN::new([0f64, 0.0, 0.0]),
            PointN::new([1f64, 0.0, 0.0]),
            PointN::new([2f64, 0.0, 0.0]),
            PointN::new([3f64, 0.0, 0.0]),
        )
    }

    #[test]
    fn build_spans_whole_parameter_range() {
        let bezier = straight_line();
        let table = SampleTable::build(&bezier, 60);
        assert_eq!(table.len(), 60);

        let first = table.as_slice()[0];
        assert_eq!(first.position, bezier.start);
        assert_eq!(first.distance, 0.0);

        let last = table.as_slice()[59];
        assert!((last.position - bezier.end).squared_norm() < EPSILON);
        assert!((table.total_length() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn distances_are_non_decreasing() {
        // a loop with a cusp-like turn back on itself
        let bezier = CubicBezier::new(
            PointN::new([0f64, 0.0, 0.0]),
            PointN::new([4f64, 3.0, -1.0]),
            PointN::new([-4f64, 3.0, 1.0]),
            PointN::new([0f64, 0.0, 0.0]),
        );
        let table = SampleTable::build(&bezier, 137);
        for pair in table.as_slice().windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        let mut previous = 0.0;
        for sample in table.iter() {
            assert!(sample.distance >= previous);
            previous = sample.distance;
        }
        assert_eq!(previous, table.total_length());
    }

    #[test]
    fn empty_and_single_tables() {
        let bezier = straight_line();

        let empty = SampleTable::build(&bezier, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.total_length(), 0.0);
        assert_eq!(empty.interval_at(1.0), None);
        assert_eq!(empty.position_at(1.0), PointN::new([0.0, 0.0, 0.0]));

        let single = SampleTable::build(&bezier, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single.as_slice()[0].position, bezier.start);
        assert_eq!(single.total_length(), 0.0);
        assert_eq!(single.interval_at(1.0), None);
        assert_eq!(single.position_at(1.0), PointN::new([0.0, 0.0, 0.0]));
    }

    #[test]
    fn lower_bound_finds_first_not_less() {
        let table = SampleTable::build(&straight_line(), 4);
        // distances are 0, 1, 2, 3
        assert_eq!(table.lower_bound(-1.0), 0);
        assert_eq!(table.lower_bound(0.0), 0);
        assert_eq!(table.lower_bound(0.5), 1);
        assert_eq!(table.lower_bound(1.0), 1);
        assert_eq!(table.lower_bound(3.5), 4);
    }

    #[test]
    fn interval_is_clamped_to_table() {
        let table = SampleTable::build(&straight_line(), 4);
        assert_eq!(table.interval_at(-10.0), Some((0, 1)));
        assert_eq!(table.interval_at(1.5), Some((1, 2)));
        assert_eq!(table.interval_at(10.0), Some((2, 3)));
    }

    #[test]
    fn position_interpolates_between_samples() {
        let table = SampleTable::build(&straight_line(), 4);
        let p = table.position_at(1.25);
        assert!((p - PointN::new([1.25, 0.0, 0.0])).squared_norm() < EPSILON);
        assert_eq!(table.position_at(-1.0), PointN::new([0.0, 0.0, 0.0]));
        assert_eq!(table.position_at(100.0), table.as_slice()[3].position);
    }

    #[test]
    fn coincident_samples_do_not_blow_up() {
        // all control points equal: every sample sits at the same place and distance
        let p = PointN::new([2f32, 2.0, 2.0]);
        let table = SampleTable::build(&CubicBezier::new(p, p, p, p), 5);
        assert_eq!(table.total_length(), 0.0);
        // d = 0 matches the first sample, anything beyond clamps to the last
        assert_eq!(table.position_at(0.0), p);
        assert_eq!(table.position_at(3.0), p);
        assert_eq!(table.position_at(-3.0), p);
    }

    #[test]
    fn spans_below_epsilon_snap_to_current_sample() {
        // 0 < span <= f32::EPSILON between the first two samples, a regular span after
        let mut samples = TinyVec::new();
        for (x, distance) in [(0f32, 0f32), (1.0, 5e-8), (2.0, 1.0)] {
            samples.push(Sample {
                position: PointN::new([x, 0.0, 0.0]),
                distance,
            });
        }
        let table = SampleTable { samples };
        let origin = PointN::new([0f32, 0.0, 0.0]);

        assert_eq!(table.interval_at(2e-8), Some((0, 1)));
        assert_eq!(table.position_at(2e-8), origin);
        assert_eq!(table.position_at(5e-8), origin);

        let p = table.position_at(0.5);
        assert!((p - PointN::new([1.5, 0.0, 0.0])).squared_norm() < 1e-10);
    }
}
