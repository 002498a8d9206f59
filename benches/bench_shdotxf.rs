//! Fused alternate-half dot benchmarks
//!
//! Kernels: shdotxf1..8 (dispatched), portable backend, golden scalar loop,
//! bulk decode
//! Report: Elements = 2 * F * n FLOPs, Bytes for decode

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use shdot_kernels::{
    as_alt_half, convert_alt_half_to_f32, get_isa_level, shdotxf_table, IsaLevel, ShdotxfTable,
    MAX_FUSION,
};

#[path = "utils.rs"]
mod utils;

const LENGTHS: &[usize] = &[
    64,    // short rows, remainder dominated
    1027,  // odd tail
    4096,  // typical hidden size
    16384, // larger than L1 for F=8
];

/// Row-major block of `fusion` rows, row pitch `2 * stride` codes.
fn make_rows(fusion: usize, n: usize) -> (usize, Vec<u16>) {
    let stride = n.div_ceil(2);
    let codes = utils::random_alt_half_codes(2 * stride * (fusion - 1) + n);
    (stride, codes)
}

fn bench_fusion_table(c: &mut Criterion, group_name: &str, table: &'static ShdotxfTable) {
    let mut group = c.benchmark_group(group_name);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for &n in LENGTHS {
        let x = utils::random_f32_vec(n);
        for fusion in 1..=MAX_FUSION {
            group.throughput(Throughput::Elements(utils::shdotxf_flops(fusion, n)));
            let (stride, codes) = make_rows(fusion, n);
            let y = as_alt_half(&codes);
            let mut sum = vec![0.0f32; fusion];
            group.bench_with_input(
                BenchmarkId::new(format!("f{fusion}"), n),
                &n,
                |bench, &n| {
                    bench.iter(|| {
                        table
                            .call(black_box(&x), black_box(y), stride, &mut sum, n)
                            .unwrap();
                        black_box(&sum);
                    });
                },
            );
        }
    }
    group.finish();
}

/// Dispatched backend (AVX2+FMA where available)
fn bench_shdotxf_dispatched(c: &mut Criterion) {
    let name = format!("shdotxf/{}", get_isa_level().name());
    bench_fusion_table(c, &name, shdotxf_table());
}

/// Portable lane arrays, for comparison with the dispatched backend
fn bench_shdotxf_portable(c: &mut Criterion) {
    if get_isa_level() == IsaLevel::Portable {
        return;
    }
    if let Some(table) = ShdotxfTable::for_isa(IsaLevel::Portable) {
        bench_fusion_table(c, "shdotxf/portable", table);
    }
}

/// Golden left-to-right scalar loop
fn bench_shdotxf_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("shdotxf/scalar");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for &n in LENGTHS {
        let x = utils::random_f32_vec(n);
        for fusion in [1usize, 4, 8] {
            group.throughput(Throughput::Elements(utils::shdotxf_flops(fusion, n)));
            let (stride, codes) = make_rows(fusion, n);
            let mut sum = vec![0.0f32; fusion];
            let kernel = match fusion {
                1 => shdot_scalar_ops::blas::scalar_shdotxf1,
                4 => shdot_scalar_ops::blas::scalar_shdotxf4,
                _ => shdot_scalar_ops::blas::scalar_shdotxf8,
            };
            group.bench_with_input(
                BenchmarkId::new(format!("f{fusion}"), n),
                &n,
                |bench, &n| {
                    bench.iter(|| {
                        unsafe {
                            kernel(
                                black_box(x.as_ptr()),
                                black_box(codes.as_ptr()),
                                stride,
                                sum.as_mut_ptr(),
                                n,
                            )
                        };
                        black_box(&sum);
                    });
                },
            );
        }
    }
    group.finish();
}

/// Bulk decode of every code
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let codes = utils::all_alt_half_codes();
    let src = as_alt_half(&codes);
    let mut dst = vec![0.0f32; src.len()];
    group.throughput(Throughput::Bytes((src.len() * 6) as u64));
    group.bench_function(get_isa_level().name(), |bench| {
        bench.iter(|| {
            convert_alt_half_to_f32(black_box(src), &mut dst).unwrap();
            black_box(&dst);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_shdotxf_dispatched,
    bench_shdotxf_portable,
    bench_shdotxf_scalar,
    bench_convert,
);
criterion_main!(benches);
