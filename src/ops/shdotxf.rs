//! Fused f32 × alternate-half dot products, fusion factors 1..=8.
//!
//! Three ways in:
//! - `shdotxf1` .. `shdotxf8`: raw pointer entry points, no validation.
//! - [`shdotxf`]: slice entry point for a const `F`, checks every extent.
//! - [`ShdotxfTable`]: per-backend function table indexed by `F - 1`, for
//!   callers that pick the fusion factor themselves.
//!
//! Row `i` starts `i * 2 * stride` codes after `y`. `stride` is given in
//! single-equivalent units and doubled to step through the half-width rows.

use crate::cpu_kernels::{get_isa_level, portable::portable_f32, IsaLevel};
use crate::error::{KernelError, KernelResult};
use crate::AltHalf;

#[cfg(target_arch = "x86_64")]
use crate::cpu_kernels::avx2::avx2_f32;

/// Largest fusion factor with a dedicated routine.
pub const MAX_FUSION: usize = 8;

/// Signature shared by every routine of the family.
pub type ShdotxfFn = unsafe fn(
    x: *const f32,
    y: *const AltHalf,
    stride: usize,
    sum: *mut f32,
    n: usize,
);

/// Half-element offset of row `row`. Row 0 sits at `y` for any stride.
#[inline]
pub fn row_offset(stride: usize, row: usize) -> Option<usize> {
    if row == 0 {
        return Some(0);
    }
    stride.checked_mul(2)?.checked_mul(row)
}

/// Dispatches to the selected backend for a fixed `F`.
///
/// # Safety
/// Same contract as `shdotxf1` .. `shdotxf8`.
#[inline]
unsafe fn dispatch_shdotxf<const F: usize>(
    x: *const f32,
    y: *const AltHalf,
    stride: usize,
    sum: *mut f32,
    n: usize,
) {
    match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        IsaLevel::Avx2 => avx2_f32::shdotxf::<F>(x, y, stride, sum, n),
        _ => portable_f32::shdotxf::<F>(x, y, stride, sum, n),
    }
}

macro_rules! define_named_shdotxf {
    ($($name:ident => $fusion:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Fused dot products of `x` against ", stringify!($fusion), " alternate-half row(s).")]
            ///
            /// # Safety
            /// - `x` must be valid for reads of `n` floats
            /// - row `i` (`y.add(i * 2 * stride)`) must be valid for reads of `n` codes
            #[doc = concat!("- `sum` must be valid for writes of ", stringify!($fusion), " floats")]
            pub unsafe fn $name(
                x: *const f32,
                y: *const AltHalf,
                stride: usize,
                sum: *mut f32,
                n: usize,
            ) {
                dispatch_shdotxf::<$fusion>(x, y, stride, sum, n)
            }
        )+
    };
}

define_named_shdotxf! {
    shdotxf1 => 1,
    shdotxf2 => 2,
    shdotxf3 => 3,
    shdotxf4 => 4,
    shdotxf5 => 5,
    shdotxf6 => 6,
    shdotxf7 => 7,
    shdotxf8 => 8,
}

/// Check that the buffers cover an `F`-row task of length `n`.
pub fn check_extents(
    fusion: usize,
    x_len: usize,
    y_len: usize,
    stride: usize,
    sum_len: usize,
    n: usize,
) -> KernelResult<()> {
    if fusion == 0 || fusion > MAX_FUSION {
        return Err(KernelError::FusionFactor { fusion, max: MAX_FUSION });
    }
    if sum_len < fusion {
        return Err(KernelError::OutputTooShort { len: sum_len, required: fusion });
    }
    if x_len < n {
        return Err(KernelError::InputTooShort { len: x_len, required: n });
    }
    if n == 0 {
        return Ok(());
    }
    for row in 0..fusion {
        let required = row_offset(stride, row)
            .and_then(|off| off.checked_add(n))
            .ok_or(KernelError::StrideOverflow { stride, fusion })?;
        if y_len < required {
            return Err(KernelError::RowsTooShort { row, len: y_len, required });
        }
    }
    Ok(())
}

/// Checked fused dot products for a compile-time fusion factor.
///
/// Writes `sum[..F]`; `sum[F..]` is left untouched.
pub fn shdotxf<const F: usize>(
    x: &[f32],
    y: &[AltHalf],
    stride: usize,
    sum: &mut [f32],
    n: usize,
) -> KernelResult<()> {
    check_extents(F, x.len(), y.len(), stride, sum.len(), n)?;
    // SAFETY: extents validated above; the dispatched backend is supported
    // by the running CPU (get_isa_level only selects supported backends).
    unsafe { dispatch_shdotxf::<F>(x.as_ptr(), y.as_ptr(), stride, sum.as_mut_ptr(), n) };
    Ok(())
}

/// Per-backend function table, `functions[F - 1]` handles `F` rows.
#[derive(Debug, Clone, Copy)]
pub struct ShdotxfTable {
    pub isa: IsaLevel,
    /// Largest fusion factor in `functions`.
    pub fusion: usize,
    pub functions: [ShdotxfFn; MAX_FUSION],
}

static PORTABLE_TABLE: ShdotxfTable = ShdotxfTable {
    isa: IsaLevel::Portable,
    fusion: MAX_FUSION,
    functions: [
        portable_f32::shdotxf::<1>,
        portable_f32::shdotxf::<2>,
        portable_f32::shdotxf::<3>,
        portable_f32::shdotxf::<4>,
        portable_f32::shdotxf::<5>,
        portable_f32::shdotxf::<6>,
        portable_f32::shdotxf::<7>,
        portable_f32::shdotxf::<8>,
    ],
};

#[cfg(target_arch = "x86_64")]
static AVX2_TABLE: ShdotxfTable = ShdotxfTable {
    isa: IsaLevel::Avx2,
    fusion: MAX_FUSION,
    functions: [
        avx2_f32::shdotxf::<1>,
        avx2_f32::shdotxf::<2>,
        avx2_f32::shdotxf::<3>,
        avx2_f32::shdotxf::<4>,
        avx2_f32::shdotxf::<5>,
        avx2_f32::shdotxf::<6>,
        avx2_f32::shdotxf::<7>,
        avx2_f32::shdotxf::<8>,
    ],
};

impl ShdotxfTable {
    /// Table for a specific backend. `None` when the CPU cannot run it.
    pub fn for_isa(isa: IsaLevel) -> Option<&'static ShdotxfTable> {
        if !isa.is_supported() {
            return None;
        }
        match isa {
            #[cfg(target_arch = "x86_64")]
            IsaLevel::Avx2 => Some(&AVX2_TABLE),
            IsaLevel::Portable => Some(&PORTABLE_TABLE),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Routine for `fusion` rows.
    pub fn get(&self, fusion: usize) -> KernelResult<ShdotxfFn> {
        if fusion == 0 || fusion > self.fusion {
            return Err(KernelError::FusionFactor { fusion, max: self.fusion });
        }
        Ok(self.functions[fusion - 1])
    }

    /// Checked call with a runtime fusion factor of `sum.len()`.
    pub fn call(
        &self,
        x: &[f32],
        y: &[AltHalf],
        stride: usize,
        sum: &mut [f32],
        n: usize,
    ) -> KernelResult<()> {
        let fusion = sum.len();
        let kernel = self.get(fusion)?;
        check_extents(fusion, x.len(), y.len(), stride, sum.len(), n)?;
        // SAFETY: extents validated above; tables are only handed out for
        // backends the CPU supports.
        unsafe { kernel(x.as_ptr(), y.as_ptr(), stride, sum.as_mut_ptr(), n) };
        Ok(())
    }
}

/// Table for the backend picked by [`get_isa_level`].
pub fn shdotxf_table() -> &'static ShdotxfTable {
    ShdotxfTable::for_isa(get_isa_level()).unwrap_or(&PORTABLE_TABLE)
}
