//! Bulk alternate-half → f32 conversion.

use crate::cpu_kernels::{get_isa_level, portable::portable_f32, IsaLevel};
use crate::error::{KernelError, KernelResult};
use crate::AltHalf;

#[cfg(target_arch = "x86_64")]
use crate::cpu_kernels::avx2::avx2_f32;

/// Decode `src` into `dst`. Lengths must match.
pub fn convert_alt_half_to_f32(src: &[AltHalf], dst: &mut [f32]) -> KernelResult<()> {
    if src.len() != dst.len() {
        return Err(KernelError::LengthMismatch { src: src.len(), dst: dst.len() });
    }
    let n = src.len();
    // SAFETY: both slices hold n elements; get_isa_level only selects
    // backends the CPU supports.
    unsafe {
        match get_isa_level() {
            #[cfg(target_arch = "x86_64")]
            IsaLevel::Avx2 => avx2_f32::convert(src.as_ptr(), dst.as_mut_ptr(), n),
            _ => portable_f32::convert(src.as_ptr(), dst.as_mut_ptr(), n),
        }
    }
    Ok(())
}

/// Reinterpret raw 16-bit codes as [`AltHalf`] without copying.
pub fn as_alt_half(codes: &[u16]) -> &[AltHalf] {
    // SAFETY: AltHalf is repr(transparent) over u16.
    unsafe { std::slice::from_raw_parts(codes.as_ptr() as *const AltHalf, codes.len()) }
}
