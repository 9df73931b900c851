//! Test fixtures for the sdsdot kernel and wrapper.

#[cfg(test)]
mod tests {
    use crate::blas::sdsdot::code::*;
    use crate::strided::stride2offset;

    #[test]
    fn test_ndarray_unit_strides() {
        let x: [f32; 8] = [4.0, 2.0, -3.0, 5.0, -1.0, 2.0, -5.0, 6.0];
        let y: [f32; 8] = [2.0, 6.0, -1.0, -4.0, 8.0, 8.0, 2.0, -3.0];

        let dot = sdsdot_ndarray(8, 0.0, &x, 1, 0, &y, 1, 0);
        assert_eq!(dot, -17.0);

        let x: [f32; 3] = [3.0, -4.0, 1.0];
        let y: [f32; 3] = [1.0, -2.0, 3.0];

        let dot = sdsdot_ndarray(3, 0.0, &x, 1, 0, &y, 1, 0);
        assert_eq!(dot, 14.0);
    }

    #[test]
    fn test_ndarray_scalar_bias() {
        let x: [f32; 8] = [4.0, 2.0, -3.0, 5.0, -1.0, 2.0, -5.0, 6.0];
        let y: [f32; 8] = [2.0, 6.0, -1.0, -4.0, 8.0, 8.0, 2.0, -3.0];

        let dot = sdsdot_ndarray(8, 10.0, &x, 1, 0, &y, 1, 0);
        assert_eq!(dot, -7.0);

        let x: [f32; 3] = [3.0, -4.0, 1.0];
        let y: [f32; 3] = [1.0, -2.0, 3.0];

        let dot = sdsdot_ndarray(3, -10.0, &x, 1, 0, &y, 1, 0);
        assert_eq!(dot, 4.0);
    }

    #[test]
    fn test_ndarray_empty_returns_scalar() {
        let x: [f32; 3] = [3.0, -4.0, 1.0];
        let y: [f32; 3] = [1.0, -2.0, 3.0];

        assert_eq!(sdsdot_ndarray(0, 0.0, &x, 1, 0, &y, 1, 0), 0.0);
        assert_eq!(sdsdot_ndarray(-4, 0.0, &x, 1, 0, &y, 1, 0), 0.0);
        assert_eq!(sdsdot_ndarray(0, 3.14, &x, 1, 0, &y, 1, 0), 3.14f64 as f32);
        assert_eq!(sdsdot_ndarray(-4, 3.14, &x, 1, 0, &y, 1, 0), 3.14f64 as f32);
    }

    #[test]
    fn test_ndarray_scalar_narrowing_can_overflow_to_infinity() {
        let x: [f32; 1] = [1.0];
        let y: [f32; 1] = [1.0];

        // A finite f64 past the f32 range narrows to infinity, not an error
        assert_eq!(sdsdot_ndarray(0, 1.0e39, &x, 1, 0, &y, 1, 0), f32::INFINITY);
        assert_eq!(
            sdsdot_ndarray(-1, f64::NEG_INFINITY, &x, 1, 0, &y, 1, 0),
            f32::NEG_INFINITY
        );
    }

    #[test]
    fn test_ndarray_x_stride() {
        let x: [f32; 5] = [2.0, -3.0, -5.0, 7.0, 6.0];
        let y: [f32; 6] = [8.0, 2.0, -3.0, 3.0, -4.0, 1.0];

        // logical x = [2, -5, 6], y = [8, 2, -3]
        let dot = sdsdot_ndarray(3, 0.0, &x, 2, 0, &y, 1, 0);
        assert_eq!(dot, -12.0);
    }

    #[test]
    fn test_ndarray_x_offset() {
        let x: [f32; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y: [f32; 6] = [6.0, 7.0, 8.0, 9.0, 10.0, 11.0];

        // logical x = [2, 4, 6], y = [6, 7, 8]
        let dot = sdsdot_ndarray(3, 0.0, &x, 2, 1, &y, 1, 0);
        assert_eq!(dot, 88.0);
    }

    #[test]
    fn test_ndarray_y_stride() {
        let x: [f32; 5] = [2.0, -3.0, -5.0, 7.0, 6.0];
        let y: [f32; 6] = [8.0, 2.0, -3.0, 3.0, -4.0, 1.0];

        // logical x = [2, -3, -5], y = [8, -3, -4]
        let dot = sdsdot_ndarray(3, 0.0, &x, 1, 0, &y, 2, 0);
        assert_eq!(dot, 45.0);
    }

    #[test]
    fn test_ndarray_y_offset() {
        let x: [f32; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y: [f32; 6] = [6.0, 7.0, 8.0, 9.0, 10.0, 11.0];

        // logical x = [1, 3, 5], y = [9, 10, 11]
        let dot = sdsdot_ndarray(3, 0.0, &x, 2, 0, &y, 1, 3);
        assert_eq!(dot, 94.0);
    }

    #[test]
    fn test_ndarray_negative_strides() {
        let x: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: [f32; 5] = [6.0, 7.0, 8.0, 9.0, 10.0];

        // logical x = [5, 3, 1], y = [8, 7, 6]
        let dot = sdsdot_ndarray(3, 0.0, &x, -2, 4, &y, -1, 2);
        assert_eq!(dot, 67.0);
    }

    #[test]
    fn test_ndarray_mixed_sign_strides() {
        let x: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: [f32; 5] = [6.0, 7.0, 8.0, 9.0, 10.0];

        // logical x = [1, 3, 5], y = [9, 8, 7]
        let dot = sdsdot_ndarray(3, 0.0, &x, 2, 0, &y, -1, 3);
        assert_eq!(dot, 68.0);
    }

    #[test]
    fn test_ndarray_reversed_traversal_matches_forward() {
        let x: [f32; 8] = [4.0, 2.0, -3.0, 5.0, -1.0, 2.0, -5.0, 6.0];
        let y: [f32; 8] = [2.0, 6.0, -1.0, -4.0, 8.0, 8.0, 2.0, -3.0];

        // Same logical elements walked in opposite directions; with
        // integer-valued data the double accumulator is exact, so the
        // results must be identical
        let forward = sdsdot_ndarray(4, 0.0, &x, 2, 0, &y, 2, 0);
        let backward = sdsdot_ndarray(4, 0.0, &x, -2, 6, &y, -2, 6);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_ndarray_unrolled_path_exact_sums() {
        // Lengths exercising both the remainder pass and the block loop
        for &len in &[100usize, 240] {
            let x: Vec<f32> = (0..len).map(|i| i as f32).collect();
            let y: Vec<f32> = (0..len).map(|i| (len - i) as f32).collect();
            let expected: f64 = x
                .iter()
                .zip(y.iter())
                .map(|(a, b)| *a as f64 * *b as f64)
                .sum();

            let dot = sdsdot_ndarray(len as i64, 0.0, &x, 1, 0, &y, 1, 0);
            assert_eq!(dot, expected as f32);
        }
    }

    #[test]
    fn test_ndarray_short_unit_stride_lengths() {
        // n < 5 returns straight from the remainder pass
        for n in 1..=7i64 {
            let x: [f32; 7] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
            let y: [f32; 7] = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
            let expected: f64 = (0..n as usize)
                .map(|i| x[i] as f64 * y[i] as f64)
                .sum();

            let dot = sdsdot_ndarray(n, 0.0, &x, 1, 0, &y, 1, 0);
            assert_eq!(dot, expected as f32);
        }
    }

    #[test]
    fn test_extended_accumulation_beats_f32_summation() {
        // 2^24 + 1 + 1 is not representable step-by-step in f32 (each +1
        // rounds away), but a double accumulator holds it exactly and the
        // final narrowing lands on the representable 2^24 + 2
        let x: [f32; 3] = [16777216.0, 1.0, 1.0];
        let y: [f32; 3] = [1.0, 1.0, 1.0];

        let dot = sdsdot_ndarray(3, 0.0, &x, 1, 0, &y, 1, 0);
        assert_eq!(dot, 16777218.0);

        let naive_f32: f32 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
        assert_eq!(naive_f32, 16777216.0);
    }

    #[test]
    fn test_wrapper_unit_strides() {
        let x: [f32; 5] = [4.0, 2.0, -3.0, 5.0, -1.0];
        let y: [f32; 5] = [2.0, 6.0, -1.0, -4.0, 8.0];

        assert_eq!(sdsdot(5, 0.0, &x, 1, &y, 1), -5.0);
    }

    #[test]
    fn test_wrapper_empty_returns_scalar() {
        let x: [f32; 3] = [3.0, -4.0, 1.0];
        let y: [f32; 3] = [1.0, -2.0, 3.0];

        assert_eq!(sdsdot(0, 3.14, &x, 1, &y, 1), 3.14f64 as f32);
        assert_eq!(sdsdot(-4, 3.14, &x, 1, &y, 1), 3.14f64 as f32);
    }

    #[test]
    fn test_wrapper_positive_stride_matches_kernel() {
        let x: [f32; 5] = [2.0, -3.0, -5.0, 7.0, 6.0];
        let y: [f32; 6] = [8.0, 2.0, -3.0, 3.0, -4.0, 1.0];

        let via_wrapper = sdsdot(3, 0.0, &x, 2, &y, 1);
        let via_kernel = sdsdot_ndarray(3, 0.0, &x, 2, 0, &y, 1, 0);
        assert_eq!(via_wrapper, via_kernel);
        assert_eq!(via_wrapper, -12.0);
    }

    #[test]
    fn test_wrapper_negative_stride_anchors_at_end() {
        let x: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: [f32; 5] = [6.0, 7.0, 8.0, 9.0, 10.0];

        let via_wrapper = sdsdot(3, 0.0, &x, -2, &y, -1);
        let via_kernel = sdsdot_ndarray(
            3,
            0.0,
            &x,
            -2,
            stride2offset(3, -2),
            &y,
            -1,
            stride2offset(3, -1),
        );
        assert_eq!(via_wrapper, via_kernel);
        assert_eq!(via_wrapper, 67.0);
    }

    #[test]
    fn test_variants_agree_on_unit_stride_input() {
        let x: [f32; 8] = [4.0, 2.0, -3.0, 5.0, -1.0, 2.0, -5.0, 6.0];
        let y: [f32; 8] = [2.0, 6.0, -1.0, -4.0, 8.0, 8.0, 2.0, -3.0];

        // Integer-valued data keeps every variant exact regardless of
        // association order
        assert_eq!(sdsdot_original(0.0, &x, &y), -17.0);
        assert_eq!(sdsdot_unrolled(0.0, &x, &y), -17.0);
        #[cfg(target_arch = "x86_64")]
        assert_eq!(sdsdot_x86_64_sse2(0.0, &x, &y), -17.0);
    }
}
