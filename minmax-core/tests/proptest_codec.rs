use minmax_core::{dequantize, quantize, QuantizationError, QuantizedArray, ReconstructionStats};
use proptest::prelude::*;

fn non_constant(values: &[f64]) -> bool {
    values.iter().any(|&v| v != values[0])
}

// Property 1: reconstruction error is bounded by one quantization step
proptest! {
    #[test]
    fn prop_roundtrip_within_step(
        values in prop::collection::vec(-1.0e6f64..1.0e6f64, 2..1000),
        bits in prop_oneof![Just(8u32), Just(16u32)]
    ) {
        prop_assume!(non_constant(&values));

        let q = quantize(&values, bits).unwrap();
        let reconstructed = q.dequantize();
        let stats = ReconstructionStats::compare(&values, &reconstructed, q.step()).unwrap();

        prop_assert!(
            stats.within_step(),
            "Max error {} exceeds step {} ({} bits)",
            stats.max_abs_error, stats.step, bits
        );
    }
}

// Property 1b: the step bound also holds for magnitudes up to f64::MAX, where
// `w_max - w_min` itself overflows
proptest! {
    #[test]
    fn prop_roundtrip_extreme_magnitudes(
        values in prop::collection::vec(prop::num::f64::NORMAL, 2..200),
        bits in prop_oneof![Just(8u32), Just(16u32)]
    ) {
        prop_assume!(non_constant(&values));

        let q = quantize(&values, bits).unwrap();
        let max_level = (1u32 << bits) - 1;
        let levels = q.values.to_levels();
        for (i, &x) in values.iter().enumerate() {
            if x == q.w_max {
                prop_assert_eq!(levels[i], max_level, "Maximum at index {} not saturated", i);
            }
        }

        let step = q.step();
        prop_assert!(step.is_finite(), "Step overflowed for [{}, {}]", q.w_min, q.w_max);

        let reconstructed = q.dequantize();
        prop_assert!(reconstructed.iter().all(|v| v.is_finite()), "Non-finite reconstruction");

        let stats = ReconstructionStats::compare(&values, &reconstructed, step).unwrap();
        prop_assert!(
            stats.within_step(),
            "Max error {} exceeds step {} ({} bits)",
            stats.max_abs_error, stats.step, bits
        );
    }
}

// Property 2: saturated levels stay in [0, 2^bits - 1], maximum maps to the top level
proptest! {
    #[test]
    fn prop_levels_saturate(
        values in prop::collection::vec(-500.0f64..500.0f64, 2..500),
        bits in prop_oneof![Just(8u32), Just(16u32)]
    ) {
        prop_assume!(non_constant(&values));

        let q = quantize(&values, bits).unwrap();
        let max_level = (1u32 << bits) - 1;
        prop_assert_eq!(q.len(), values.len());

        let levels = q.values.to_levels();
        for (i, &level) in levels.iter().enumerate() {
            prop_assert!(level <= max_level, "Level {} at index {} above {}", level, i, max_level);
            if values[i] == q.w_max {
                prop_assert_eq!(level, max_level);
            }
            if values[i] == q.w_min {
                prop_assert_eq!(level, 0);
            }
        }

        match (&q.values, bits) {
            (QuantizedArray::U8(_), 8) | (QuantizedArray::U16(_), 16) => {}
            (other, _) => prop_assert!(false, "Wrong element width {:?} for {} bits", other.bit_width(), bits),
        }
    }
}

// Property 3: dequantize is monotonic non-decreasing in its level
proptest! {
    #[test]
    fn prop_dequantize_monotonic(
        w_min in -1.0e4f64..1.0e4,
        width in 1.0e-6f64..1.0e4,
        a in any::<u16>(),
        b in any::<u16>()
    ) {
        let w_max = w_min + width;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let out = dequantize(&[lo, hi], w_min, w_max).unwrap();
        prop_assert!(out[0] <= out[1], "{} -> {} but {} -> {}", lo, out[0], hi, out[1]);

        let lo8 = (lo >> 8) as u8;
        let hi8 = (hi >> 8) as u8;
        let out8 = dequantize(&[lo8, hi8], w_min, w_max).unwrap();
        prop_assert!(out8[0] <= out8[1]);
    }
}

// Property 4: constant arrays never quantize
proptest! {
    #[test]
    fn prop_constant_is_degenerate(value in -1.0e6f64..1.0e6, len in 1usize..200) {
        let w = vec![value; len];
        prop_assert_eq!(quantize(&w, 8), Err(QuantizationError::DegenerateRange(value)));
        prop_assert_eq!(quantize(&w, 16), Err(QuantizationError::DegenerateRange(value)));
    }
}

// Property 5: determinism (same input always produces same output)
proptest! {
    #[test]
    fn prop_determinism(values in prop::collection::vec(-100.0f64..100.0f64, 2..200)) {
        prop_assume!(non_constant(&values));

        let q1 = quantize(&values, 8).unwrap();
        let q2 = quantize(&values, 8).unwrap();
        prop_assert_eq!(&q1, &q2, "Non-deterministic quantization");
        prop_assert_eq!(q1.dequantize(), q2.dequantize(), "Non-deterministic reconstruction");
    }
}
