//! Alternate half precision.
//!
//! Same 1/5/10 bit layout as IEEE binary16 (exponent bias 15), except that
//! exponent code 31 is an ordinary finite exponent: there is no Infinity and
//! no NaN. The largest magnitude is therefore `(2 - 2^-10) * 2^16 = 131008`.
//!
//! Every code widens exactly into binary32, which has strictly more exponent
//! range and mantissa precision.

use half::f16;

/// Sign bit of the widened lane.
pub(crate) const SIGN_MASK: u32 = 0x8000_0000;
/// Rebias from half (15) to single (127) exponent, pre-shifted to bit 23.
pub(crate) const EXP_OFFSET: u32 = 0x3800_0000;
/// High half of the denormal magic number (0.25f as binary32).
pub(crate) const MAGIC_MASK: u16 = 0x3E80;
pub(crate) const MAGIC_BIAS: f32 = 0.25;
/// Shifted exponent+mantissa fields below this value are denormals.
pub(crate) const DENORM_CUTOFF: u32 = 0x0080_0000;

/// One alternate-half code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct AltHalf(u16);

impl AltHalf {
    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3C00);
    /// 131008.0
    pub const MAX: Self = Self(0x7FFF);
    /// -131008.0
    pub const MIN: Self = Self(0xFFFF);
    /// 2^-24
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);

    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & 0x8000 != 0
    }

    /// Raw 5-bit exponent field.
    #[inline]
    pub const fn exponent_bits(self) -> u16 {
        (self.0 >> 10) & 0x1F
    }

    /// Raw 10-bit mantissa field.
    #[inline]
    pub const fn mantissa_bits(self) -> u16 {
        self.0 & 0x03FF
    }

    #[inline]
    pub const fn is_subnormal(self) -> bool {
        self.exponent_bits() == 0 && self.mantissa_bits() != 0
    }

    /// Exact widening to binary32.
    #[inline(always)]
    pub fn to_f32(self) -> f32 {
        alt_half_to_f32(self.0)
    }

    /// Reinterpret as IEEE binary16.
    ///
    /// Codes with exponent field 31 are finite here but Inf/NaN in IEEE, so
    /// they have no counterpart and yield `None`.
    pub fn to_ieee_f16(self) -> Option<f16> {
        if self.exponent_bits() == 0x1F {
            None
        } else {
            Some(f16::from_bits(self.0))
        }
    }

    /// Reinterpret a finite IEEE binary16 value. Bits are kept as-is.
    pub fn from_ieee_f16(value: f16) -> Option<Self> {
        if value.is_finite() {
            Some(Self(value.to_bits()))
        } else {
            None
        }
    }
}

impl From<AltHalf> for f32 {
    #[inline(always)]
    fn from(value: AltHalf) -> Self {
        value.to_f32()
    }
}

impl From<u16> for AltHalf {
    #[inline(always)]
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

/// Single-lane branchless decode.
///
/// Both the normal and the denormal candidate are always computed; the
/// result is picked with a lane mask so no branch depends on the input.
#[inline(always)]
pub fn alt_half_to_f32(code: u16) -> f32 {
    let widened = (code as u32) << 16;
    let sign = widened & SIGN_MASK;
    let shl1_nonsign = widened.wrapping_add(widened);
    let shr3_nonsign = shl1_nonsign >> 4;

    let norm = shr3_nonsign + EXP_OFFSET;

    let shl1_half = code.wrapping_add(code);
    let denorm_raw = f32::from_bits(((MAGIC_MASK as u32) << 16) | shl1_half as u32);
    let denorm = (denorm_raw - MAGIC_BIAS).to_bits();

    let denorm_mask = ((shr3_nonsign < DENORM_CUTOFF) as u32).wrapping_neg();
    let nonsign = (denorm & denorm_mask) | (norm & !denorm_mask);
    f32::from_bits(nonsign | sign)
}
