#![allow(dead_code)]

use rand::Rng;

/// Fused dot GFLOPS: 2 * fusion * n / duration / 1e9
pub fn shdotxf_gflops(fusion: usize, n: usize, duration_secs: f64) -> f64 {
    shdotxf_flops(fusion, n) as f64 / duration_secs / 1e9
}

/// FLOPs of one fused call (multiply-add = 2 ops)
pub fn shdotxf_flops(fusion: usize, n: usize) -> u64 {
    2 * fusion as u64 * n as u64
}

/// Bytes streamed by one fused call: x once (f32) plus every row (u16)
pub fn shdotxf_read_bytes(fusion: usize, n: usize) -> u64 {
    n as u64 * 4 + fusion as u64 * n as u64 * 2
}

/// Memory throughput GiB/s
pub fn throughput_gibs(bytes: usize, duration_secs: f64) -> f64 {
    bytes as f64 / duration_secs / (1024.0 * 1024.0 * 1024.0)
}

/// Random f32 vector in [-1.0, 1.0)
pub fn random_f32_vec(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Random finite alternate-half codes with |value| in [2^-8, 2^3)
pub fn random_alt_half_codes(n: usize) -> Vec<u16> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let sign = (rng.gen::<bool>() as u16) << 15;
            let exp = rng.gen_range(7u16..=17);
            let mant = rng.gen_range(0u16..1024);
            sign | (exp << 10) | mant
        })
        .collect()
}

/// Every code, including denormals and exponent 31
pub fn all_alt_half_codes() -> Vec<u16> {
    (0..=u16::MAX).collect()
}
