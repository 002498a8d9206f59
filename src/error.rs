use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("unsupported fusion factor {fusion} (expected 1..={max})")]
    FusionFactor { fusion: usize, max: usize },
    #[error("x too short: {len} < {required}")]
    InputTooShort { len: usize, required: usize },
    #[error("y does not cover row {row}: {len} < {required}")]
    RowsTooShort { row: usize, len: usize, required: usize },
    #[error("sum too short: {len} < {required}")]
    OutputTooShort { len: usize, required: usize },
    #[error("row offset overflow: stride {stride} with fusion factor {fusion}")]
    StrideOverflow { stride: usize, fusion: usize },
    #[error("invalid SHDOT_ISA override: {0}")]
    InvalidIsaOverride(String),
    #[error("conversion length mismatch: src {src} != dst {dst}")]
    LengthMismatch { src: usize, dst: usize },
}

pub type KernelResult<T> = Result<T, KernelError>;
