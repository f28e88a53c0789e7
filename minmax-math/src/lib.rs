//! # minmax-math
//!
//! Range arithmetic for uniform (min-max) quantization.
//!
//! This crate provides [`ValueRange`], the `[min, max]` interval of a weight
//! array together with the affine maps between that interval and `[0, 1]`.
//! It also holds the curve sampling helpers used to build test signals.
//!
//! **No external dependencies** (besides `thiserror` for error types).

pub mod range;
pub mod sampling;

pub use range::{interpolate, span_fraction, RangeError, ValueRange};
pub use sampling::{centered_window, linspace};
