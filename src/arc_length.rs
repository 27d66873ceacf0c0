//! Arc-length parameterization of a cubic Bezier curve.

use alloc::vec::Vec;

use num_traits::{Float, NumCast, ToPrimitive};

use super::cubic_bezier::{scalar, CubicBezier};
use super::options::SamplingOptions;
use super::point::PointNorm;
use super::sample_table::{Sample, SampleTable};

/// A cubic Bezier curve that is traversed by travelled distance instead of by its parameter t.
///
/// All sampling happens eagerly in the constructor: a cheap polyline estimate of the length
/// decides how many samples to take, then the curve is sampled evenly in t while the chord
/// distances between consecutive samples are accumulated. Afterwards the curve is immutable and
/// every query is a binary search over the sample table followed by a linear interpolation.
///
/// # Examples
/// ```rust
/// use arclen::{ArcLengthCurve, PointN, PointNorm};
///
/// let curve = ArcLengthCurve::from_points(
///     PointN::new([0.0, 0.0, 0.0]),
///     PointN::new([1.0, 0.0, 0.0]),
///     PointN::new([2.0, 0.0, 0.0]),
///     PointN::new([3.0, 0.0, 0.0]),
/// );
///
/// assert!((curve.total_length() - 3.0f64).abs() < 1e-9);
/// let p = curve.position_at_distance(1.5);
/// assert!((p - PointN::new([1.5, 0.0, 0.0])).squared_norm() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ArcLengthCurve<P: PointNorm> {
    bezier: CubicBezier<P>,
    options: SamplingOptions,
    table: SampleTable<P>,
}

impl<P> ArcLengthCurve<P>
where
    P: PointNorm,
{
    /// Samples `bezier` with the default density of ~20 samples per unit of length.
    pub fn new(bezier: CubicBezier<P>) -> Self {
        Self::with_options(bezier, SamplingOptions::default())
    }

    /// Builds the curve from its four control points.
    pub fn from_points(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        Self::new(CubicBezier::new(start, ctrl1, ctrl2, end))
    }

    /// Samples `bezier` as configured by `options`.
    pub fn with_options(bezier: CubicBezier<P>, options: SamplingOptions) -> Self {
        let estimate = bezier.estimate_length(options.estimate_steps, options.estimate_stride);
        let count = sample_count(estimate, &options);
        let table = SampleTable::build(&bezier, count);

        log::debug!(
            "sampled cubic bezier: estimate={:?} samples={} length={:?}",
            estimate,
            count,
            table.total_length()
        );

        ArcLengthCurve {
            bezier,
            options,
            table,
        }
    }

    pub fn bezier(&self) -> &CubicBezier<P> {
        &self.bezier
    }

    pub fn options(&self) -> &SamplingOptions {
        &self.options
    }

    pub fn samples(&self) -> &[Sample<P>] {
        self.table.as_slice()
    }

    pub fn sample_count(&self) -> usize {
        self.table.len()
    }

    /// True if the table is too small to answer distance queries,
    /// i.e. the curve is (close to) a single point.
    pub fn is_degenerate(&self) -> bool {
        self.table.len() < 2
    }

    /// Total (chord) length of the curve, 0 for degenerate curves.
    pub fn total_length(&self) -> P::Scalar {
        self.table.total_length()
    }

    /// Position reached after travelling `distance` from the start of the curve.
    /// Distances outside `[0, total_length()]` clamp to the nearest end.
    /// Degenerate curves answer with the origin.
    pub fn position_at_distance(&self, distance: P::Scalar) -> P {
        self.table.position_at(distance)
    }

    /// Indices of the two samples that bracket `distance`, see [`SampleTable::interval_at`].
    pub fn interval_at(&self, distance: P::Scalar) -> Option<(usize, usize)> {
        self.table.interval_at(distance)
    }

    /// Positions spaced evenly along the arc, `resolution` per unit of length,
    /// always including both ends. Degenerate curves yield no positions.
    /// The count is capped by the curve's `max_samples`.
    pub fn uniform_positions(&self, resolution: P::Scalar) -> Vec<P> {
        if self.is_degenerate() {
            return Vec::new();
        }

        let total = self.total_length();
        let count = (total * resolution)
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(self.options.max_samples)
            .max(2);
        let last_index = scalar::<P>((count - 1) as f64);

        (0..count)
            .map(|i| {
                let at = total * scalar::<P>(i as f64) / last_index;
                self.position_at_distance(at)
            })
            .collect()
    }

    /// The same curve traversed from its end to its start, re-sampled with the same options.
    pub fn reversed(&self) -> Self {
        Self::with_options(self.bezier.reverse(), self.options)
    }
}

/// `floor(estimate * samples_per_unit)`, capped by `max_samples`.
/// Estimates that cannot be turned into a count (NaN, infinite, negative) yield no samples,
/// finite counts beyond `usize` are capped like any other.
fn sample_count<S>(estimate: S, options: &SamplingOptions) -> usize
where
    S: Float,
{
    let density = <S as NumCast>::from(options.samples_per_unit).unwrap_or_else(S::zero);
    let wanted = (estimate * density).floor();
    let count = match wanted.to_usize() {
        Some(count) => count,
        None if wanted.is_finite() && wanted > S::zero() => usize::MAX,
        None => {
            log::warn!("length estimate cannot be sampled, leaving the table empty");
            0
        }
    };
    if count > options.max_samples {
        log::warn!(
            "{} samples requested, capping the table at {}",
            count,
            options.max_samples
        );
    }
    count.min(options.max_samples)
}
