use crate::parallel::map_elements;
use crate::{BitWidth, QuantizationError, Quantized, QuantizedArray, QuantizedElement};
use log::{debug, log_enabled, trace, Level};
use minmax_math::{interpolate, ValueRange};

/// Uniform (min-max) quantizer and its inverse.
///
/// Quantize: `q = floor((x - w_min) / (w_max - w_min) · 2^bits)`
/// Dequantize: `x̂ = w_min + (q / 2^bits) · (w_max - w_min)`
///
/// The maximum element has normalized position exactly `1.0` and would map to
/// `2^bits`, one past the largest level. It saturates to `2^bits - 1` instead
/// of wrapping to zero.
///
/// # Example
/// ```
/// use minmax_core::QuantizationCodec;
///
/// let codec = QuantizationCodec;
/// let q = codec.quantize(&[0.0, 0.5, 1.0], 8).unwrap();
/// assert_eq!(q.values.as_u8(), Some(&[0u8, 128, 255][..]));
///
/// let w = codec.dequantize(&q);
/// assert_eq!(w, vec![0.0, 0.5, 0.99609375]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantizationCodec;

impl QuantizationCodec {
    /// Quantize `w` to `bits` (8 or 16) bits per element.
    pub fn quantize(&self, w: &[f64], bits: u32) -> Result<Quantized, QuantizationError> {
        let width = BitWidth::try_from(bits)?;
        self.quantize_with(w, width)
    }

    pub fn quantize_with(&self, w: &[f64], width: BitWidth) -> Result<Quantized, QuantizationError> {
        let range = ValueRange::of(w)?;

        let values = match width {
            BitWidth::Eight => QuantizedArray::U8(quantize_levels::<u8>(w, &range, width)),
            BitWidth::Sixteen => QuantizedArray::U16(quantize_levels::<u16>(w, &range, width)),
        };

        debug!(
            "quantized {} values to {} over [{}, {}]",
            w.len(),
            width,
            range.min(),
            range.max()
        );
        if log_enabled!(Level::Trace) {
            let max_level = width.max_level();
            let saturated = values.to_levels().iter().filter(|&&q| q == max_level).count();
            trace!("{} values at the top level {}", saturated, max_level);
        }

        Ok(Quantized {
            values,
            w_min: range.min(),
            w_max: range.max(),
        })
    }

    /// Reconstruct weights from a bundled [`Quantized`] value.
    pub fn dequantize(&self, quantized: &Quantized) -> Vec<f64> {
        let (w_min, w_max) = (quantized.w_min, quantized.w_max);
        match &quantized.values {
            QuantizedArray::U8(values) => dequantize_levels(values, 8, w_min, w_max),
            QuantizedArray::U16(values) => dequantize_levels(values, 16, w_min, w_max),
        }
    }

    /// Reconstruct weights from loose integer levels and scale parameters.
    ///
    /// The bit width is inferred from the element type `T`; anything other
    /// than an 8- or 16-bit integer is rejected.
    pub fn dequantize_slice<T: QuantizedElement>(
        &self,
        values: &[T],
        w_min: f64,
        w_max: f64,
    ) -> Result<Vec<f64>, QuantizationError> {
        match T::BITS {
            8 | 16 => Ok(dequantize_levels(values, T::BITS, w_min, w_max)),
            other => Err(QuantizationError::UnsupportedQuantizedType(other)),
        }
    }
}

/// Quantize `w` to `bits` bits. Shorthand for [`QuantizationCodec::quantize`].
pub fn quantize(w: &[f64], bits: u32) -> Result<Quantized, QuantizationError> {
    QuantizationCodec.quantize(w, bits)
}

/// Shorthand for [`QuantizationCodec::dequantize_slice`].
pub fn dequantize<T: QuantizedElement>(
    values: &[T],
    w_min: f64,
    w_max: f64,
) -> Result<Vec<f64>, QuantizationError> {
    QuantizationCodec.dequantize_slice(values, w_min, w_max)
}

fn quantize_levels<T: QuantizedElement>(w: &[f64], range: &ValueRange, width: BitWidth) -> Vec<T> {
    let levels = width.levels() as f64;
    let max_level = width.max_level();

    map_elements(w, |&x| {
        let raw = (range.normalize(x) * levels).floor();
        // raw == 2^bits for the maximum element (and for values within
        // rounding distance of it)
        let level = if raw >= levels { max_level } else { raw as u32 };
        T::from_level(level)
    })
}

fn dequantize_levels<T: QuantizedElement>(values: &[T], bits: u32, w_min: f64, w_max: f64) -> Vec<f64> {
    let levels = (1u64 << bits) as f64;
    // Scale parameters come straight from the caller and are not re-validated.
    map_elements(values, |&q| interpolate(w_min, w_max, q.to_f64() / levels))
}
