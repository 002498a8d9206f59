/// Maps abstract lane operations to a concrete backend.
///
/// # Architecture
/// This macro is the "Layer 1" of the macro architecture. Kernel templates
/// are written once against these names and expanded per backend:
/// - `portable`: `[f32; 8]` arrays, lane-wise bit reinterpretation
/// - `avx2`: `__m256` / `__m128i` intrinsics (x86_64, AVX2 + FMA)
///
/// # Usage
/// ```ignore
/// simd_primitive!(portable, f32, fma, a, b, c) // -> [c[i] + a[i] * b[i]; 8]
/// simd_primitive!(avx2, f32, fma, a, b, c)     // -> _mm256_fmadd_ps(a, b, c)
/// ```
#[macro_export]
macro_rules! simd_primitive {
    // ========================================================================
    // Portable (lane arrays)
    // ========================================================================

    // --- f32 Compute Primitives ---
    (portable, f32, lanes) => { 8 };
    (portable, f32, zero) => { [0.0f32; 8] };
    (portable, f32, loadu, $p:expr) => { $crate::cpu_kernels::portable::loadu_x8($p) };
    (portable, f32, storeu, $p:expr, $v:expr) => { $crate::cpu_kernels::portable::storeu_x8($p, $v) };
    (portable, f32x4, storeu, $p:expr, $v:expr) => { $crate::cpu_kernels::portable::storeu_x4($p, $v) };
    (portable, f32, fma, $a:expr, $b:expr, $c:expr) => { $crate::cpu_kernels::portable::fma_x8($a, $b, $c) };
    // Lane 0 only: acc[0] += x * y
    (portable, f32, fma_lane0, $x:expr, $y:expr, $acc:expr) => { $crate::cpu_kernels::portable::fma_lane0($x, $y, $acc) };
    (portable, f32, reduce_sum, $v:expr) => { $crate::cpu_kernels::portable::reduce_sum_x8($v) };

    // --- Alternate-half decode ---
    (portable, alt_half, decode_x8, $p:expr) => { $crate::cpu_kernels::portable::load_decode_x8($p) };
    (portable, alt_half, decode_x4, $p:expr) => { $crate::cpu_kernels::portable::load_decode_x4($p) };
    (portable, alt_half, decode_x1, $p:expr) => { (*$p).to_f32() };

    // ========================================================================
    // AVX2 Implementation
    // ========================================================================

    // --- f32 Compute Primitives ---
    (avx2, f32, lanes) => { 8 };
    (avx2, f32, zero) => { std::arch::x86_64::_mm256_setzero_ps() };
    (avx2, f32, loadu, $p:expr) => { std::arch::x86_64::_mm256_loadu_ps($p) };
    (avx2, f32, storeu, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_ps($p, $v) };
    (avx2, f32x4, storeu, $p:expr, $v:expr) => { std::arch::x86_64::_mm_storeu_ps($p, $v) };
    (avx2, f32, fma, $a:expr, $b:expr, $c:expr) => { std::arch::x86_64::_mm256_fmadd_ps($a, $b, $c) };
    // x sits in lane 0 with the other lanes zeroed, y's other lanes decode code 0
    (avx2, f32, fma_lane0, $x:expr, $y:expr, $acc:expr) => {
        std::arch::x86_64::_mm256_fmadd_ps(
            std::arch::x86_64::_mm256_setr_ps($x, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            $y,
            $acc,
        )
    };
    (avx2, f32, reduce_sum, $v:expr) => { $crate::cpu_kernels::avx2::reduce_sum_x8($v) };

    // --- Alternate-half decode ---
    (avx2, alt_half, decode_x8, $p:expr) => {
        $crate::cpu_kernels::avx2::alt_half_to_f32_x8(
            std::arch::x86_64::_mm_loadu_si128($p as *const std::arch::x86_64::__m128i),
        )
    };
    (avx2, alt_half, decode_x4, $p:expr) => {
        $crate::cpu_kernels::avx2::alt_half_to_f32_x4(
            std::arch::x86_64::_mm_loadl_epi64($p as *const std::arch::x86_64::__m128i),
        )
    };
    // Single code zero-extended into lane 0
    (avx2, alt_half, decode_x1, $p:expr) => {
        $crate::cpu_kernels::avx2::alt_half_to_f32_x8(
            std::arch::x86_64::_mm_cvtsi32_si128((*$p).to_bits() as i32),
        )
    };
}
