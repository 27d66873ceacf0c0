//! Arc-length parameterized cubic Bezier curves.
//!
//! A cubic Bezier curve is naturally evaluated by its parameter `t`, but equal steps in `t`
//! do not cover equal distances on the curve. [`ArcLengthCurve`] samples the curve once at
//! construction, accumulating the chord length between neighbouring samples, and afterwards
//! answers "where am I after travelling `d`?" by binary search and linear interpolation.
//!
//! The crate is `#![no_std]` (it needs `alloc` for the sample table) and generic over the point
//! type through the small [`Point`]/[`PointNorm`] traits. [`PointN`] is provided as a ready to
//! use N-dimensional point, [`Point3`] is its three dimensional alias.
//!
//! ```rust
//! use arclen::{ArcLengthCurve, Point3};
//!
//! let curve = ArcLengthCurve::from_points(
//!     Point3::new([-3.0f32, -3.0, 0.0]),
//!     Point3::new([3.0, -3.0, 0.0]),
//!     Point3::new([-3.0, 3.0, 0.0]),
//!     Point3::new([3.0, 3.0, 0.0]),
//! );
//!
//! let total = curve.total_length();
//! let quarter = curve.position_at_distance(total * 0.25);
//! # let _ = quarter;
//! ```
#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod adapters;
pub mod arc_length;
pub mod cubic_bezier;
pub mod flat;
pub mod options;
pub mod point;
pub mod point_generic;
pub mod sample_table;

pub use arc_length::ArcLengthCurve;
pub use cubic_bezier::CubicBezier;
pub use flat::FlatPointsError;
pub use options::SamplingOptions;
pub use point::{Point, PointNorm};
pub use point_generic::{Point3, PointN};
pub use sample_table::{Sample, SampleTable};

/// Tolerance used when comparing (squared) distances in tests and examples.
pub const EPSILON: f64 = 1e-10;
