use minmax_math::RangeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantizationError {
    #[error("Unsupported quantization bit width: {0} (expected 8 or 16)")]
    UnsupportedBitWidth(u32),
    #[error("Cannot quantize: every value equals {0}, so the range has zero width")]
    DegenerateRange(f64),
    #[error("Unsupported quantized element type: {0}-bit integers (expected 8 or 16)")]
    UnsupportedQuantizedType(u32),
    #[error("Cannot quantize an empty array")]
    EmptyInput,
    #[error("Non-finite value at index {0}")]
    NonFiniteValue(usize),
    #[error("Invalid scale parameters: w_min {w_min} must be finite and below w_max {w_max}")]
    InvalidRange { w_min: f64, w_max: f64 },
    #[error("Length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),
}

impl From<RangeError> for QuantizationError {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::Empty => Self::EmptyInput,
            RangeError::NonFinite { index } => Self::NonFiniteValue(index),
            RangeError::Degenerate { value } => Self::DegenerateRange(value),
            RangeError::InvalidBounds { min, max } => Self::InvalidRange { w_min: min, w_max: max },
        }
    }
}
