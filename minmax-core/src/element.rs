/// Unsigned integer type that can hold quantized levels.
///
/// `BITS` is what [`dequantize_slice`](crate::QuantizationCodec::dequantize_slice)
/// inspects to infer the bit width; only 8- and 16-bit types are accepted there.
pub trait QuantizedElement: Copy + Send + Sync + 'static {
    const BITS: u32;

    /// Narrow a level already clamped to `[0, 2^BITS)`.
    fn from_level(level: u32) -> Self;

    fn to_f64(self) -> f64;
}

macro_rules! impl_quantized_element {
    ($($ty:ty => $bits:expr),*) => {
        $(
            impl QuantizedElement for $ty {
                const BITS: u32 = $bits;

                #[inline]
                fn from_level(level: u32) -> Self {
                    level as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_quantized_element!(u8 => 8, u16 => 16, u32 => 32, u64 => 64);
