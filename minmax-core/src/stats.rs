use crate::QuantizationError;
use serde::Serialize;

/// Slack added to the step bound to absorb `f64` rounding in the affine maps,
/// in units of machine epsilon times the largest input magnitude.
const ROUNDING_ULPS: f64 = 16.0;

/// Error of a reconstruction measured against its source array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReconstructionStats {
    pub len: usize,
    pub max_abs_error: f64,
    pub mean_abs_error: f64,
    /// Quantization step the reconstruction was produced with.
    pub step: f64,
    /// Largest `|x|` in the source array.
    pub magnitude: f64,
}

impl ReconstructionStats {
    pub fn compare(original: &[f64], reconstructed: &[f64], step: f64) -> Result<Self, QuantizationError> {
        if original.len() != reconstructed.len() {
            return Err(QuantizationError::LengthMismatch(original.len(), reconstructed.len()));
        }

        let mut max_abs_error = 0.0f64;
        let mut sum_abs_error = 0.0f64;
        let mut magnitude = 0.0f64;
        for (&x, &x_hat) in original.iter().zip(reconstructed) {
            let err = (x - x_hat).abs();
            max_abs_error = max_abs_error.max(err);
            sum_abs_error += err;
            magnitude = magnitude.max(x.abs());
        }

        let len = original.len();
        let mean_abs_error = if len == 0 { 0.0 } else { sum_abs_error / len as f64 };

        Ok(Self {
            len,
            max_abs_error,
            mean_abs_error,
            step,
            magnitude,
        })
    }

    /// Whether every element was reconstructed to within one quantization step.
    pub fn within_step(&self) -> bool {
        self.max_abs_error <= self.step + ROUNDING_ULPS * f64::EPSILON * self.magnitude
    }
}
