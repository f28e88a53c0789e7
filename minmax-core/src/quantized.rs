use crate::BitWidth;
use minmax_math::span_fraction;
use serde::{Deserialize, Serialize};

/// Quantized levels at one of the supported widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantizedArray {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

impl QuantizedArray {
    pub fn bit_width(&self) -> BitWidth {
        match self {
            QuantizedArray::U8(_) => BitWidth::Eight,
            QuantizedArray::U16(_) => BitWidth::Sixteen,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            QuantizedArray::U8(values) => values.len(),
            QuantizedArray::U16(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Level at `index`, widened to `u32`.
    pub fn get(&self, index: usize) -> Option<u32> {
        match self {
            QuantizedArray::U8(values) => values.get(index).map(|&q| q as u32),
            QuantizedArray::U16(values) => values.get(index).map(|&q| q as u32),
        }
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            QuantizedArray::U8(values) => Some(values),
            QuantizedArray::U16(_) => None,
        }
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        match self {
            QuantizedArray::U16(values) => Some(values),
            QuantizedArray::U8(_) => None,
        }
    }

    /// All levels widened to `u32`, in order.
    pub fn to_levels(&self) -> Vec<u32> {
        match self {
            QuantizedArray::U8(values) => values.iter().map(|&q| q as u32).collect(),
            QuantizedArray::U16(values) => values.iter().map(|&q| q as u32).collect(),
        }
    }
}

/// Output of [`quantize`](crate::quantize): the levels together with the
/// `w_min` / `w_max` scale parameters observed at quantization time.
///
/// Neither half means anything without the other, so they travel as one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantized {
    pub values: QuantizedArray,
    pub w_min: f64,
    pub w_max: f64,
}

impl Quantized {
    pub fn bit_width(&self) -> BitWidth {
        self.values.bit_width()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Quantization step `(w_max - w_min) / 2^bits`: the worst-case
    /// reconstruction error.
    pub fn step(&self) -> f64 {
        span_fraction(self.w_min, self.w_max, self.bit_width().levels() as f64)
    }

    /// Reconstruct approximate weights. See [`QuantizationCodec::dequantize`](crate::QuantizationCodec::dequantize).
    pub fn dequantize(&self) -> Vec<f64> {
        crate::QuantizationCodec.dequantize(self)
    }

    pub fn into_parts(self) -> (QuantizedArray, f64, f64) {
        (self.values, self.w_min, self.w_max)
    }
}
