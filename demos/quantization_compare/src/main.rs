use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::info;
use minmax_core::{QuantizationCodec, ReconstructionStats};
use minmax_math::{centered_window, linspace};
use std::f64::consts::PI;
use std::time::Instant;

/// Compare a sampled curve against its 16-bit and 8-bit reconstructions.
///
/// Prints the three series side by side over a narrow window around the
/// middle of the curve, where the 8-bit staircase is plainly visible, then
/// the error statistics for the whole array.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of points sampled along the x axis
    #[arg(long, default_value_t = 1_000_000)]
    points: usize,

    /// First x value
    #[arg(long, default_value_t = -PI, allow_hyphen_values = true)]
    start: f64,

    /// Last x value
    #[arg(long, default_value_t = PI, allow_hyphen_values = true)]
    end: f64,

    /// Half-width of the displayed window, as a fraction of the curve length
    #[arg(long, default_value_t = 1.2e-4)]
    delta: f64,

    /// Maximum number of rows printed from the window
    #[arg(long, default_value_t = 40)]
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.points >= 2, "need at least two points, got {}", args.points);
    ensure!(args.start < args.end, "start {} must be below end {}", args.start, args.end);

    println!("=== Uniform Quantization: 16-bit vs 8-bit ===\n");
    println!("  Points: {}", args.points);
    println!("  Range:  [{:.6}, {:.6}]\n", args.start, args.end);

    let xs = linspace(args.start, args.end, args.points);
    let w = &xs;
    let codec = QuantizationCodec;

    let start = Instant::now();
    let q16 = codec.quantize(w, 16).context("quantize to 16 bits")?;
    let q8 = codec.quantize(w, 8).context("quantize to 8 bits")?;
    let w_16bit = codec.dequantize(&q16);
    let w_8bit = codec.dequantize(&q8);
    info!("round trips finished in {:.2?}", start.elapsed());

    let window = centered_window(args.points, args.delta);
    let stride = (window.len() / args.rows.max(1)).max(1);

    println!("{:>14} {:>14} {:>14} {:>14}", "x", "original", "16-bit", "8-bit");
    for i in window.clone().step_by(stride) {
        println!(
            "{:>14.8} {:>14.8} {:>14.8} {:>14.8}",
            xs[i], w[i], w_16bit[i], w_8bit[i]
        );
    }
    println!("  ({} of {} window points shown)\n", window.len().div_ceil(stride), window.len());

    for (label, quantized, reconstructed) in [("16-bit", &q16, &w_16bit), ("8-bit", &q8, &w_8bit)] {
        let stats = ReconstructionStats::compare(w, reconstructed, quantized.step())
            .with_context(|| format!("compare {} reconstruction", label))?;
        println!(
            "{:>6}: step {:.3e} | max error {:.3e} | mean error {:.3e} | {}",
            label,
            stats.step,
            stats.max_abs_error,
            stats.mean_abs_error,
            if stats.within_step() { "within one step" } else { "STEP BOUND VIOLATED" }
        );
    }

    Ok(())
}
