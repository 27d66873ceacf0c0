use num_traits::{Float, NumCast, One, Zero};

use super::point::{Point, PointNorm};

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Returns the same geometry traversed from `end` to `start`.
    pub fn reverse(&self) -> Self {
        CubicBezier {
            start: self.end,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            end: self.start,
        }
    }

    /// Evaluate the curve at t by direct evaluation of the Bernstein polynomials.
    /// Values of t outside [0, 1] extrapolate the curve.
    pub fn eval(&self, t: P::Scalar) -> P {
        let three = scalar::<P>(3.0);
        let one_t = P::Scalar::one() - t;
        let b0 = one_t * one_t * one_t;
        let b1 = three * one_t * one_t * t;
        let b2 = three * one_t * t * t;
        let b3 = t * t * t;

        self.start * b0 + self.ctrl1 * b1 + self.ctrl2 * b2 + self.end * b3
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }
}

impl<P> CubicBezier<P>
where
    P: PointNorm,
{
    /// Cheap, coarse estimate of the curve length.
    /// Lays a grid of `nsteps` intervals over [0, 1] and walks every `stride`-th grid point,
    /// summing the straight distances between them, starting from `start`.
    /// The result is a polyline underestimate of the true length and only meant for sizing.
    pub fn estimate_length(&self, nsteps: usize, stride: usize) -> P::Scalar {
        let nsteps = nsteps.max(1);
        let steps = scalar::<P>(nsteps as f64);
        let mut last = self.start;
        let mut length = P::Scalar::zero();

        for i in (0..=nsteps).step_by(stride.max(1)) {
            let t = scalar::<P>(i as f64) / steps;
            let position = self.eval(t);
            length = length + position.distance(last);
            last = position;
        }

        length
    }

    /// Approximates the arc length of the curve by flattening it with `nsteps` straight line segments.
    /// Remember arclen also works by linear approximation, not the integral, so we have to accept error!
    pub fn arclen(&self, nsteps: usize) -> P::Scalar {
        let nsteps = nsteps.max(1);
        let steps = scalar::<P>(nsteps as f64);
        let mut prev = self.start;
        let mut arclen = P::Scalar::zero();

        for i in 1..=nsteps {
            let p = self.eval_casteljau(scalar::<P>(i as f64) / steps);
            arclen = arclen + p.distance(prev);
            prev = p;
        }
        arclen
    }
}

/// Converts a literal into the curve's scalar type.
/// Every literal used by this crate is exactly representable in f32 and f64.
#[inline]
pub(crate) fn scalar<P: Point>(value: f64) -> P::Scalar {
    <P::Scalar as NumCast>::from(value).unwrap_or_else(P::Scalar::nan)
}
