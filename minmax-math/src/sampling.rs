use std::ops::Range;

/// `n` evenly spaced samples over `[start, end]`, both end points included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the last sample so rounding in `step` never overshoots `end`.
            out[n - 1] = end;
            out
        }
    }
}

/// Index window `[len·(0.5 - delta), len·(0.5 + delta))` around the middle of
/// a sampled curve, clamped to `0..len`.
///
/// A small `delta` zooms in far enough that individual quantization levels
/// become visible.
pub fn centered_window(len: usize, delta: f64) -> Range<usize> {
    let delta = delta.max(0.0);
    let n = len as f64;
    let lo = (n * (0.5 - delta)).floor().max(0.0) as usize;
    let hi = (n * (0.5 + delta)).floor().min(n) as usize;
    lo.min(hi)..hi
}
