/// Bulk alternate-half → f32 conversion template.
///
/// 8-wide chunks through the wide converter, at most one 4-wide chunk
/// through the narrow converter, then single codes.
#[macro_export]
macro_rules! define_convert_ops {
    ($isa:ident $(, $feat:literal)*) => {
        /// # Safety
        /// `src` readable and `dst` writable for `n` elements; the CPU must
        /// support the backend's target features.
        $(#[target_feature(enable = $feat)])*
        pub unsafe fn convert(src: *const $crate::AltHalf, dst: *mut f32, n: usize) {
            const LANES: usize = $crate::simd_primitive!($isa, f32, lanes);
            let mut i = 0;
            while i + LANES <= n {
                let v = $crate::simd_primitive!($isa, alt_half, decode_x8, src.add(i));
                $crate::simd_primitive!($isa, f32, storeu, dst.add(i), v);
                i += LANES;
            }
            if i + 4 <= n {
                let v = $crate::simd_primitive!($isa, alt_half, decode_x4, src.add(i));
                $crate::simd_primitive!($isa, f32x4, storeu, dst.add(i), v);
                i += 4;
            }
            while i < n {
                *dst.add(i) = (*src.add(i)).to_f32();
                i += 1;
            }
        }
    };
}
