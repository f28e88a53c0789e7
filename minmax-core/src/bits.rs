use crate::QuantizationError;
use serde::{Deserialize, Serialize};

/// Output width of a quantized array.
///
/// Serialized as the plain bit count (`8` or `16`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitWidth {
    Eight,
    Sixteen,
}

impl BitWidth {
    pub fn bits(self) -> u32 {
        match self {
            BitWidth::Eight => 8,
            BitWidth::Sixteen => 16,
        }
    }

    /// Number of buckets, `2^bits`.
    pub fn levels(self) -> u32 {
        1 << self.bits()
    }

    /// Largest representable level, `2^bits - 1`.
    pub fn max_level(self) -> u32 {
        self.levels() - 1
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = QuantizationError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitWidth::Eight),
            16 => Ok(BitWidth::Sixteen),
            other => Err(QuantizationError::UnsupportedBitWidth(other)),
        }
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> Self {
        width.bits()
    }
}

impl std::fmt::Display for BitWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
