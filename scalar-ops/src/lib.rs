//! Scalar reference implementations: `extern "C"` pure scalar functions.
//!
//! These serve as the golden reference for correctness testing of the
//! fused alternate-half kernels: decode straight from the format definition
//! and plain left-to-right accumulation, no FMA, no lane tree.
//!
//! Every function here is `#[no_mangle] pub extern "C"` so the routines can be
//! located by symbol name in the binary.
//!
//! This crate is compiled with `opt-level = 1` (configured in the workspace
//! root Cargo.toml) to keep the loop structure of the reference intact.

pub mod blas;
