//! Macro system for shdot-kernels.
//!
//! Follows a strict 3-layer architecture:
//! 1. simd_primitive! (Backend Primitives)
//! 2. define_shdotxf! / define_convert_ops! (Kernel Templates)
//! 3. expand_isa_impls! (Per-Backend Expansion)

#[macro_use]
pub mod simd_primitive;
#[macro_use]
pub mod dotxf_template;
#[macro_use]
pub mod convert_template;
#[macro_use]
pub mod expand;
