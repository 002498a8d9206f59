//! # CPU Kernel Macro Architecture
//!
//! 3-layer macro system for backend-dispatched kernels:
//!
//! ## Layer 1: `simd_primitive!` (src/macros/simd_primitive.rs)
//! Maps abstract lane ops to a backend: `simd_primitive!(avx2, f32, fma, a, b, c)`.
//! Covers portable lane arrays and AVX2+FMA.
//!
//! ## Layer 2: kernel templates (src/macros/dotxf_template.rs, convert_template.rs)
//! `define_shdotxf!` (fused dot family) and `define_convert_ops!` (bulk decode),
//! parameterized by backend.
//!
//! ## Layer 3: `expand_isa_impls!` (src/macros/expand.rs)
//! Generates per-backend modules: `expand_isa_impls!(avx2_f32, avx2, "avx2", "fma")`.
//!
//! ## Dispatch (this file)
//! Runtime backend selection via `get_isa_level()`, resolved once and
//! overridable with `SHDOT_ISA=auto|portable|avx2`.

pub mod avx2;
pub mod portable;

use crate::error::{KernelError, KernelResult};
use std::sync::OnceLock;

/// Environment variable that overrides backend detection.
pub const ISA_ENV_VAR: &str = "SHDOT_ISA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsaLevel {
    /// Lane arrays, any target.
    Portable,
    /// AVX2 + FMA (x86_64).
    Avx2,
}

impl IsaLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Portable => "portable",
            Self::Avx2 => "avx2",
        }
    }

    /// Whether the running CPU can execute this backend.
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Portable => true,
            Self::Avx2 => has_avx2_fma(),
        }
    }
}

static ISA_LEVEL: OnceLock<IsaLevel> = OnceLock::new();

pub fn get_isa_level() -> IsaLevel {
    *ISA_LEVEL.get_or_init(select_isa_level)
}

/// Parse an `SHDOT_ISA` value. `Ok(None)` means auto-detect.
pub fn parse_isa_override(value: &str) -> KernelResult<Option<IsaLevel>> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    if value.eq_ignore_ascii_case("portable") || value.eq_ignore_ascii_case("scalar") {
        return Ok(Some(IsaLevel::Portable));
    }
    if value.eq_ignore_ascii_case("avx2") {
        return Ok(Some(IsaLevel::Avx2));
    }
    Err(KernelError::InvalidIsaOverride(value.to_string()))
}

fn select_isa_level() -> IsaLevel {
    let detected = detect_isa_features();
    let level = match std::env::var(ISA_ENV_VAR) {
        Ok(value) => match parse_isa_override(&value) {
            Ok(Some(forced)) if forced.is_supported() => forced,
            Ok(Some(forced)) => {
                log::warn!(
                    "{ISA_ENV_VAR}={} not supported on this CPU, using {}",
                    forced.name(),
                    detected.name()
                );
                detected
            }
            Ok(None) => detected,
            Err(err) => {
                log::warn!("{err}, using {}", detected.name());
                detected
            }
        },
        Err(_) => detected,
    };
    log::info!("shdot kernels: selected {} backend", level.name());
    level
}

#[cfg(target_arch = "x86_64")]
fn has_avx2_fma() -> bool {
    is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
}

#[cfg(not(target_arch = "x86_64"))]
fn has_avx2_fma() -> bool {
    false
}

fn detect_isa_features() -> IsaLevel {
    if has_avx2_fma() {
        IsaLevel::Avx2
    } else {
        IsaLevel::Portable
    }
}
