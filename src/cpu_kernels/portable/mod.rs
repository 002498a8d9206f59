//! Portable lane-array backend.
//!
//! Vectors are plain `[f32; W]` / `[u32; W]` arrays and every step of the
//! decode is a lane-wise integer or float operation on reinterpreted bits.
//! The fused kernel uses the same FMA per lane and the same reduction tree
//! as the AVX2 backend, so both produce bit-identical sums.

use crate::alt_half::{DENORM_CUTOFF, EXP_OFFSET, MAGIC_BIAS, MAGIC_MASK, SIGN_MASK};
use crate::AltHalf;
use std::array::from_fn;

pub const LANES: usize = 8;

pub type F32x8 = [f32; LANES];
pub type F32x4 = [f32; 4];

/// Decode `W` alternate-half codes lane by lane.
#[inline(always)]
pub fn decode_lanes<const W: usize>(codes: [u16; W]) -> [f32; W] {
    let widened: [u32; W] = from_fn(|i| (codes[i] as u32) << 16);
    let sign: [u32; W] = from_fn(|i| widened[i] & SIGN_MASK);
    let shr3_nonsign: [u32; W] = from_fn(|i| widened[i].wrapping_add(widened[i]) >> 4);
    let norm_nonsign: [u32; W] = from_fn(|i| shr3_nonsign[i] + EXP_OFFSET);

    let shl1_half: [u16; W] = from_fn(|i| codes[i].wrapping_add(codes[i]));
    let denorm_nonsign: [u32; W] = from_fn(|i| {
        let raw = f32::from_bits(((MAGIC_MASK as u32) << 16) | shl1_half[i] as u32);
        (raw - MAGIC_BIAS).to_bits()
    });

    let denorm_mask: [u32; W] =
        from_fn(|i| ((shr3_nonsign[i] < DENORM_CUTOFF) as u32).wrapping_neg());

    from_fn(|i| {
        let nonsign =
            (denorm_nonsign[i] & denorm_mask[i]) | (norm_nonsign[i] & !denorm_mask[i]);
        f32::from_bits(nonsign | sign[i])
    })
}

/// Narrow converter: 4 codes.
#[inline(always)]
pub fn decode_x4(codes: [u16; 4]) -> F32x4 {
    decode_lanes(codes)
}

/// Wide converter: 8 codes, decoded as two independent 4-lane halves.
#[inline(always)]
pub fn decode_x8(codes: [u16; 8]) -> F32x8 {
    let lo = decode_x4([codes[0], codes[1], codes[2], codes[3]]);
    let hi = decode_x4([codes[4], codes[5], codes[6], codes[7]]);
    [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
}

#[inline(always)]
pub unsafe fn load_decode_x8(p: *const AltHalf) -> F32x8 {
    decode_x8(std::ptr::read_unaligned(p as *const [u16; 8]))
}

#[inline(always)]
pub unsafe fn load_decode_x4(p: *const AltHalf) -> F32x4 {
    decode_x4(std::ptr::read_unaligned(p as *const [u16; 4]))
}

#[inline(always)]
pub unsafe fn loadu_x8(p: *const f32) -> F32x8 {
    std::ptr::read_unaligned(p as *const F32x8)
}

#[inline(always)]
pub unsafe fn storeu_x8(p: *mut f32, v: F32x8) {
    std::ptr::write_unaligned(p as *mut F32x8, v)
}

#[inline(always)]
pub unsafe fn storeu_x4(p: *mut f32, v: F32x4) {
    std::ptr::write_unaligned(p as *mut F32x4, v)
}

/// `c + a * b` per lane, single rounding.
#[inline(always)]
pub fn fma_x8(a: F32x8, b: F32x8, c: F32x8) -> F32x8 {
    from_fn(|i| a[i].mul_add(b[i], c[i]))
}

/// Accumulate one product into lane 0 only.
#[inline(always)]
pub fn fma_lane0(x: f32, y: f32, mut acc: F32x8) -> F32x8 {
    acc[0] = x.mul_add(y, acc[0]);
    acc
}

/// Fold high half onto low half, then two pairwise passes.
#[inline(always)]
pub fn reduce_sum_x8(v: F32x8) -> f32 {
    let s: F32x4 = from_fn(|i| v[i] + v[i + 4]);
    let h = [s[0] + s[1], s[2] + s[3]];
    h[0] + h[1]
}

crate::expand_isa_impls!(portable_f32, portable);
