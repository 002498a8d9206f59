//! AVX2 + FMA backend (x86_64 only).
//!
//! The decode follows the same lane algorithm as the portable backend, with
//! the two 16-bit interleaves done by `vpunpcklwd` and the normal/denormal
//! pick done by `vblendvps`.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "x86_64")]
use crate::alt_half::{DENORM_CUTOFF, EXP_OFFSET, MAGIC_BIAS, MAGIC_MASK, SIGN_MASK};

/// Narrow converter: the low 4 codes of `half` to 4 singles.
#[cfg(target_arch = "x86_64")]
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn alt_half_to_f32_x4(half: __m128i) -> __m128 {
    let zero = _mm_setzero_si128();
    let word = _mm_unpacklo_epi16(zero, half);
    let shl1_half = _mm_add_epi16(half, half);
    let shl1_nonsign = _mm_add_epi32(word, word);

    let sign = _mm_and_si128(word, _mm_set1_epi32(SIGN_MASK as i32));
    let shr3_nonsign = _mm_srli_epi32(shl1_nonsign, 4);
    let norm_nonsign = _mm_add_epi32(shr3_nonsign, _mm_set1_epi32(EXP_OFFSET as i32));

    let denorm_raw = _mm_unpacklo_epi16(shl1_half, _mm_set1_epi16(MAGIC_MASK as i16));
    let denorm_nonsign = _mm_sub_ps(_mm_castsi128_ps(denorm_raw), _mm_set1_ps(MAGIC_BIAS));

    let denorm_mask = _mm_cmpgt_epi32(_mm_set1_epi32(DENORM_CUTOFF as i32), shr3_nonsign);
    let nonsign = _mm_blendv_ps(
        _mm_castsi128_ps(norm_nonsign),
        denorm_nonsign,
        _mm_castsi128_ps(denorm_mask),
    );
    _mm_or_ps(nonsign, _mm_castsi128_ps(sign))
}

/// Wide converter: 8 codes of `half` to 8 singles.
///
/// `vpermq` copies codes 0..4 into the low 128-bit lane and codes 4..8 into
/// the high one, so the per-lane unpacks see two independent 4-code halves.
#[cfg(target_arch = "x86_64")]
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn alt_half_to_f32_x8(half: __m128i) -> __m256 {
    let half = _mm256_permute4x64_epi64(_mm256_castsi128_si256(half), 0b01_01_00_00);
    let zero = _mm256_setzero_si256();
    let word = _mm256_unpacklo_epi16(zero, half);
    let shl1_half = _mm256_add_epi16(half, half);
    let shl1_nonsign = _mm256_add_epi32(word, word);

    let sign = _mm256_and_si256(word, _mm256_set1_epi32(SIGN_MASK as i32));
    let shr3_nonsign = _mm256_srli_epi32(shl1_nonsign, 4);
    let norm_nonsign = _mm256_add_epi32(shr3_nonsign, _mm256_set1_epi32(EXP_OFFSET as i32));

    let denorm_raw = _mm256_unpacklo_epi16(shl1_half, _mm256_set1_epi16(MAGIC_MASK as i16));
    let denorm_nonsign =
        _mm256_sub_ps(_mm256_castsi256_ps(denorm_raw), _mm256_set1_ps(MAGIC_BIAS));

    let denorm_mask = _mm256_cmpgt_epi32(_mm256_set1_epi32(DENORM_CUTOFF as i32), shr3_nonsign);
    let nonsign = _mm256_blendv_ps(
        _mm256_castsi256_ps(norm_nonsign),
        denorm_nonsign,
        _mm256_castsi256_ps(denorm_mask),
    );
    _mm256_or_ps(nonsign, _mm256_castsi256_ps(sign))
}

/// Collapse 8 lanes: fold the high 128 bits, then two `hadd` passes.
#[cfg(target_arch = "x86_64")]
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn reduce_sum_x8(v: __m256) -> f32 {
    let hi = _mm256_extractf128_ps(v, 1);
    let lo = _mm256_castps256_ps128(v);
    let s = _mm_add_ps(lo, hi);
    let s = _mm_hadd_ps(s, s);
    let s = _mm_hadd_ps(s, s);
    _mm_cvtss_f32(s)
}

// Expand AVX2 fused kernels and bulk conversion
#[cfg(target_arch = "x86_64")]
crate::expand_isa_impls!(avx2_f32, avx2, "avx2", "fma");
