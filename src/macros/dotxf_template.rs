/// Fused dot-product template: one `x` stream against `F` alternate-half rows.
///
/// Computes `sum[i] = Σ_k x[k] * decode(y[i * 2 * stride + k])` for
/// `i in 0..F`.
///
/// Loop structure:
/// - Bulk: one 8-wide `x` load per step, shared by all `F` rows; each row
///   decodes 8 codes and FMAs into its own 8-lane accumulator.
/// - Remainder: scalar `x`, single-code decode, FMA into lane 0 only.
/// - Reduction: fold high 4 lanes onto low 4, then two pairwise passes.
///
/// `F` is a const generic so the row loops fully unroll and the accumulator
/// set is a fixed `[V; F]` register array.
#[macro_export]
macro_rules! define_shdotxf {
    ($isa:ident $(, $feat:literal)*) => {
        /// Fused dot products against `F` rows.
        ///
        /// `stride` is in single-equivalent units; rows sit `2 * stride`
        /// codes apart.
        ///
        /// # Safety
        /// - `x` must be valid for reads of `n` floats
        /// - for each `i < F`, `y.add(i * 2 * stride)` must be valid for reads of `n` codes
        /// - `sum` must be valid for writes of `F` floats
        /// - the CPU must support the backend's target features
        #[allow(clippy::needless_range_loop)]
        $(#[target_feature(enable = $feat)])*
        pub unsafe fn shdotxf<const F: usize>(
            x: *const f32,
            y: *const $crate::AltHalf,
            stride: usize,
            sum: *mut f32,
            n: usize,
        ) {
            const LANES: usize = $crate::simd_primitive!($isa, f32, lanes);

            let row_stride = stride.wrapping_add(stride);
            let mut rows = [y; F];
            for r in 1..F {
                rows[r] = rows[r - 1].wrapping_add(row_stride);
            }

            let mut acc = [$crate::simd_primitive!($isa, f32, zero); F];

            let mut xp = x;
            let mut remaining = n;
            while remaining >= LANES {
                let vx = $crate::simd_primitive!($isa, f32, loadu, xp);
                xp = xp.add(LANES);
                for r in 0..F {
                    let vy = $crate::simd_primitive!($isa, alt_half, decode_x8, rows[r]);
                    rows[r] = rows[r].add(LANES);
                    acc[r] = $crate::simd_primitive!($isa, f32, fma, vx, vy, acc[r]);
                }
                remaining -= LANES;
            }

            while remaining != 0 {
                let vx = *xp;
                xp = xp.add(1);
                for r in 0..F {
                    let vy = $crate::simd_primitive!($isa, alt_half, decode_x1, rows[r]);
                    rows[r] = rows[r].add(1);
                    acc[r] = $crate::simd_primitive!($isa, f32, fma_lane0, vx, vy, acc[r]);
                }
                remaining -= 1;
            }

            for r in 0..F {
                *sum.add(r) = $crate::simd_primitive!($isa, f32, reduce_sum, acc[r]);
            }
        }
    };
}
