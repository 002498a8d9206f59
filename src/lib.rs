//! shdot-kernels: fused f32 × alternate-half dot-product microkernels.
//!
//! This crate provides:
//! - **Exact Decode**: branchless widening of alternate-half codes (IEEE-like
//!   binary16 without Inf/NaN) to f32, portable and AVX2
//! - **Fused Dot Family**: `shdotxf1` .. `shdotxf8` share one `x` stream
//!   across up to eight strided half-precision rows
//! - **Runtime Backend Selection**: AVX2+FMA when available, portable lane
//!   arrays otherwise, overridable with `SHDOT_ISA`
//!
//! # Quick Start
//!
//! ```
//! use shdot_kernels::{shdotxf, AltHalf};
//!
//! let x = [1.0f32; 9];
//! let y: Vec<AltHalf> = (1..=9u16)
//!     .map(|v| AltHalf::from_ieee_f16(half::f16::from_f32(v as f32)).unwrap())
//!     .collect();
//! let mut sum = [0.0f32; 1];
//! shdotxf::<1>(&x, &y, 0, &mut sum, 9).unwrap();
//! assert_eq!(sum[0], 45.0);
//! ```

#[macro_use]
pub mod macros;

pub mod alt_half;
pub mod cpu_kernels;
pub mod error;
pub mod ops;

pub use alt_half::{alt_half_to_f32, AltHalf};
pub use cpu_kernels::portable::{decode_lanes, decode_x4, decode_x8};
pub use cpu_kernels::{get_isa_level, parse_isa_override, IsaLevel, ISA_ENV_VAR};
pub use error::{KernelError, KernelResult};
pub use ops::{
    as_alt_half, check_extents, convert_alt_half_to_f32, row_offset, shdotxf, shdotxf1,
    shdotxf2, shdotxf3, shdotxf4, shdotxf5, shdotxf6, shdotxf7, shdotxf8, shdotxf_table,
    ShdotxfFn, ShdotxfTable, MAX_FUSION,
};
