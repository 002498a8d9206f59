//! Property-based tests for the fused alternate-half dot kernels.
//!
//! Invariants checked for arbitrary inputs:
//! - every 16-bit code decodes to a finite value equal to the golden decode
//! - the dispatched kernel reproduces the lane/tree summation order exactly
//! - the dispatched kernel stays within rounding distance of the golden sum
//! - the checked entry point rejects buffers that do not cover every row

use proptest::prelude::*;

use shdot_kernels::{alt_half_to_f32, as_alt_half, shdotxf_table, KernelError, MAX_FUSION};
use shdot_scalar_ops::blas::scalar_alt_half_to_f32;

const LANES: usize = 8;

/// One fused task: shared `x`, `fusion` rows laid out at `2 * stride`.
#[derive(Debug, Clone)]
struct Task {
    fusion: usize,
    n: usize,
    stride: usize,
    x: Vec<f32>,
    codes: Vec<u16>,
}

/// Finite codes with magnitude in [2^-14, 2^5) so products stay well inside f32.
fn arb_code() -> impl Strategy<Value = u16> {
    (any::<bool>(), 1u16..=19, 0u16..1024)
        .prop_map(|(neg, exp, mant)| ((neg as u16) << 15) | (exp << 10) | mant)
}

fn arb_task() -> impl Strategy<Value = Task> {
    (1..=MAX_FUSION, 0usize..80, 0usize..3).prop_flat_map(|(fusion, n, pad)| {
        // smallest stride whose doubled value still separates rows of length n
        let stride = (n + 1) / 2 + pad;
        let len = 2 * stride * (fusion - 1) + n;
        (
            prop::collection::vec(-4.0f32..4.0, n),
            prop::collection::vec(arb_code(), len),
        )
            .prop_map(move |(x, codes)| Task { fusion, n, stride, x, codes })
    })
}

fn tree_order_reference(x: &[f32], row: &[u16], n: usize) -> f32 {
    let mut acc = [0.0f32; LANES];
    let bulk = n - n % LANES;
    for base in (0..bulk).step_by(LANES) {
        for l in 0..LANES {
            acc[l] = x[base + l].mul_add(alt_half_to_f32(row[base + l]), acc[l]);
        }
    }
    for i in bulk..n {
        acc[0] = x[i].mul_add(alt_half_to_f32(row[i]), acc[0]);
    }
    let s: [f32; 4] = std::array::from_fn(|i| acc[i] + acc[i + 4]);
    (s[0] + s[1]) + (s[2] + s[3])
}

proptest! {
    #[test]
    fn prop_decode_matches_golden(code in any::<u16>()) {
        let got = alt_half_to_f32(code);
        prop_assert!(got.is_finite());
        prop_assert_eq!(got.to_bits(), scalar_alt_half_to_f32(code).to_bits());
    }

    #[test]
    fn prop_kernel_matches_tree_order(task in arb_task()) {
        let Task { fusion, n, stride, x, codes } = task;
        let mut sum = vec![f32::NAN; fusion];
        shdotxf_table().call(&x, as_alt_half(&codes), stride, &mut sum, n).unwrap();
        for r in 0..fusion {
            let start = 2 * stride * r;
            let want = tree_order_reference(&x, &codes[start..start + n], n);
            prop_assert_eq!(sum[r].to_bits(), want.to_bits(), "row {} of {}", r, fusion);
        }
    }

    #[test]
    fn prop_kernel_close_to_golden(task in arb_task()) {
        let Task { fusion, n, stride, x, codes } = task;
        let mut sum = vec![0.0f32; fusion];
        shdotxf_table().call(&x, as_alt_half(&codes), stride, &mut sum, n).unwrap();
        for r in 0..fusion {
            let start = 2 * stride * r;
            let row = &codes[start..start + n];
            let exact: f64 = x
                .iter()
                .zip(row)
                .map(|(&a, &c)| a as f64 * scalar_alt_half_to_f32(c) as f64)
                .sum();
            let mag: f64 = x
                .iter()
                .zip(row)
                .map(|(&a, &c)| (a as f64 * scalar_alt_half_to_f32(c) as f64).abs())
                .sum();
            let tol = mag * 1e-5 + 1e-6;
            prop_assert!(
                (sum[r] as f64 - exact).abs() <= tol,
                "row {}: got {}, want {} (tol {})", r, sum[r], exact, tol
            );
        }
    }

    #[test]
    fn prop_short_rows_rejected(task in arb_task()) {
        let Task { fusion, n, stride, x, codes } = task;
        prop_assume!(n > 0);
        let truncated = &codes[..codes.len() - 1];
        let mut sum = vec![0.0f32; fusion];
        let err = shdotxf_table()
            .call(&x, as_alt_half(truncated), stride, &mut sum, n)
            .unwrap_err();
        let is_rows_too_short = matches!(err, KernelError::RowsTooShort { .. });
        prop_assert!(is_rows_too_short, "{:?}", err);
    }
}
