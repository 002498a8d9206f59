pub mod convert;
pub mod shdotxf;

pub use convert::{as_alt_half, convert_alt_half_to_f32};
pub use shdotxf::{
    check_extents, row_offset, shdotxf, shdotxf1, shdotxf2, shdotxf3, shdotxf4, shdotxf5,
    shdotxf6, shdotxf7, shdotxf8, shdotxf_table, ShdotxfFn, ShdotxfTable, MAX_FUSION,
};
