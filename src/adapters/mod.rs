//! Optional adapters for external math libraries.
//!
//! Enable feature flags (e.g. `nalgebra`) to add `Point`/`PointNorm` impls for
//! external vector types, so their vectors can be walked by arc length directly.

#[cfg(feature = "nalgebra")]
pub mod nalgebra;
