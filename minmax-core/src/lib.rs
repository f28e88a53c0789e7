//! # minmax-core
//!
//! Uniform (min-max) quantization of `f64` weight arrays into 8- or 16-bit
//! unsigned integers, and the inverse reconstruction.
//!
//! Key types:
//! - [`QuantizationCodec`]: stateless `quantize` / `dequantize` pair
//! - [`Quantized`]: integer levels bundled with the `w_min` / `w_max` needed to invert them
//! - [`BitWidth`]: the supported output widths (8 or 16)
//! - [`QuantizedElement`]: integer element types accepted by [`QuantizationCodec::dequantize_slice`]
//! - [`ReconstructionStats`]: error of a reconstruction against its source
//!
//! Levels that would land one past the largest representable value (the
//! maximum input element) saturate to `2^bits - 1`.

pub mod bits;
pub mod codec;
pub mod element;
pub mod error;
mod parallel;
pub mod quantized;
pub mod stats;

pub use bits::BitWidth;
pub use codec::{dequantize, quantize, QuantizationCodec};
pub use element::QuantizedElement;
pub use error::QuantizationError;
pub use quantized::{Quantized, QuantizedArray};
pub use stats::ReconstructionStats;
