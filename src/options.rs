//! Tunables for building the arc-length sample table.

/// Samples taken per unit of estimated curve length.
pub const DEFAULT_SAMPLES_PER_UNIT: f64 = 20.0;
/// Intervals of the fine grid the cheap length estimate is laid on (`t = i / 14`).
pub const DEFAULT_ESTIMATE_STEPS: usize = 14;
/// Only every `stride`-th grid point is evaluated by the estimate (8 points by default).
pub const DEFAULT_ESTIMATE_STRIDE: usize = 2;
/// Upper bound on any table or position list built from a curve.
/// At the default density this covers curves up to ~52 000 units long.
pub const DEFAULT_MAX_SAMPLES: usize = 1 << 20;

/// Controls how densely an [`ArcLengthCurve`](crate::ArcLengthCurve) samples its curve.
///
/// The defaults reproduce the fixed policy of ~20 samples per unit of length,
/// sized from an 8 point polyline estimate, capped at [`DEFAULT_MAX_SAMPLES`].
///
/// ```rust
/// use arclen::SamplingOptions;
///
/// let options = SamplingOptions::default()
///     .with_samples_per_unit(50.0)
///     .with_max_samples(4096);
/// assert_eq!(options.max_samples, 4096);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SamplingOptions {
    /// Samples per unit of estimated length; the table holds `floor(estimate * samples_per_unit)` samples.
    pub samples_per_unit: f64,
    /// Fine grid resolution of the length estimate.
    pub estimate_steps: usize,
    /// Stride over the fine grid for the length estimate.
    pub estimate_stride: usize,
    /// Hard cap on the table size and on the number of
    /// [`uniform_positions`](crate::ArcLengthCurve::uniform_positions).
    pub max_samples: usize,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        SamplingOptions {
            samples_per_unit: DEFAULT_SAMPLES_PER_UNIT,
            estimate_steps: DEFAULT_ESTIMATE_STEPS,
            estimate_stride: DEFAULT_ESTIMATE_STRIDE,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl SamplingOptions {
    pub fn with_samples_per_unit(mut self, samples_per_unit: f64) -> Self {
        self.samples_per_unit = samples_per_unit;
        self
    }

    pub fn with_estimate_resolution(mut self, steps: usize, stride: usize) -> Self {
        self.estimate_steps = steps;
        self.estimate_stride = stride;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }
}
