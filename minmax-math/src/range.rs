use thiserror::Error;

/// Closed interval `[min, max]` observed over a weight array.
///
/// Invariant: both bounds are finite and `min < max`. A zero-width range has
/// no affine map onto `[0, 1]`, so it is rejected at construction.
///
/// The width `max - min` may exceed `f64::MAX` even though both bounds are
/// finite (e.g. `[-1e308, 1e308]`). The affine maps stay finite for such
/// ranges by working on halved operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Cannot compute the range of an empty array")]
    Empty,
    #[error("Non-finite value at index {index}")]
    NonFinite { index: usize },
    #[error("All values are equal to {value}; the range has zero width")]
    Degenerate { value: f64 },
    #[error("Invalid bounds: min {min} must be finite and below max {max}")]
    InvalidBounds { min: f64, max: f64 },
}

impl ValueRange {
    /// Build a range from explicit bounds (e.g. scale parameters recorded by
    /// an earlier quantization).
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::InvalidBounds { min, max });
        }
        if min == max {
            return Err(RangeError::Degenerate { value: min });
        }
        if min > max {
            return Err(RangeError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Scan `values` once for its minimum and maximum.
    pub fn of(values: &[f64]) -> Result<Self, RangeError> {
        if values.is_empty() {
            return Err(RangeError::Empty);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (index, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(RangeError::NonFinite { index });
            }
            min = min.min(val);
            max = max.max(val);
        }

        Self::new(min, max)
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval, `max - min`. Positive, but `+inf` when the
    /// bounds are further apart than `f64::MAX`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `(max - min) / divisor` without overflowing on wide ranges.
    #[inline]
    pub fn span_fraction(&self, divisor: f64) -> f64 {
        span_fraction(self.min, self.max, divisor)
    }

    /// Map `x` to its normalized position `(x - min) / (max - min)`.
    ///
    /// Values inside the range land in `[0, 1]`; `normalize(max)` is exactly
    /// `1.0`.
    #[inline]
    pub fn normalize(&self, x: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            (x - self.min) / span
        } else {
            (x / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }

    /// Inverse of [`normalize`](Self::normalize): `min + t * (max - min)`.
    #[inline]
    pub fn denormalize(&self, t: f64) -> f64 {
        interpolate(self.min, self.max, t)
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// `min + t * (max - min)` for raw scale parameters that have not been
/// checked as a [`ValueRange`].
///
/// When `max - min` overflows, the product is split into two halves so every
/// intermediate stays finite.
#[inline]
pub fn interpolate(min: f64, max: f64, t: f64) -> f64 {
    let span = max - min;
    if span.is_finite() {
        min + t * span
    } else {
        let half = t * (max / 2.0 - min / 2.0);
        (min + half) + half
    }
}

/// `(max - min) / divisor` for raw scale parameters, finite whenever both
/// bounds are finite and `divisor >= 2`.
#[inline]
pub fn span_fraction(min: f64, max: f64, divisor: f64) -> f64 {
    let span = max - min;
    if span.is_finite() {
        span / divisor
    } else {
        max / divisor - min / divisor
    }
}
