/// Alternate-half decode from the format definition:
/// `(-1)^s * 2^(e-15) * (1 + m/1024)`, or `(-1)^s * 2^-14 * (m/1024)` when `e == 0`.
///
/// Exponent 31 is an ordinary finite exponent.
#[no_mangle]
#[inline(never)]
pub extern "C" fn scalar_alt_half_to_f32(code: u16) -> f32 {
    let sign = if code & 0x8000 != 0 { -1.0f64 } else { 1.0 };
    let exp = ((code >> 10) & 0x1F) as i32;
    let mant = (code & 0x03FF) as f64;
    let value = if exp == 0 {
        mant / 1024.0 * 2f64.powi(-14)
    } else {
        (1.0 + mant / 1024.0) * 2f64.powi(exp - 15)
    };
    // exact: at most 11 significant bits, exponent well inside f32 range
    (sign * value) as f32
}

macro_rules! define_scalar_shdotxf {
    ($($name:ident => $fusion:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Dot products of `x` against ", stringify!($fusion), " alternate-half row(s):")]
            /// `sum[i] = Σ_k x[k] * decode(y[i * 2 * stride_y + k])`, accumulated
            /// left to right.
            ///
            /// # Safety
            /// `x` readable for `n` floats, every row readable for `n` codes,
            #[doc = concat!("`sum` writable for ", stringify!($fusion), " floats.")]
            #[no_mangle]
            #[inline(never)]
            pub unsafe extern "C" fn $name(
                x: *const f32,
                y: *const u16,
                stride_y: usize,
                sum: *mut f32,
                n: usize,
            ) {
                let row_stride = stride_y * 2;
                let mut acc = [0.0f32; $fusion];
                for k in 0..n {
                    let vx = *x.add(k);
                    for (r, a) in acc.iter_mut().enumerate() {
                        *a += vx * scalar_alt_half_to_f32(*y.add(r * row_stride + k));
                    }
                }
                for (r, a) in acc.iter().enumerate() {
                    *sum.add(r) = *a;
                }
            }
        )+
    };
}

define_scalar_shdotxf! {
    scalar_shdotxf1 => 1,
    scalar_shdotxf2 => 2,
    scalar_shdotxf3 => 3,
    scalar_shdotxf4 => 4,
    scalar_shdotxf5 => 5,
    scalar_shdotxf6 => 6,
    scalar_shdotxf7 => 7,
    scalar_shdotxf8 => 8,
}
