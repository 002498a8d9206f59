//! Fused dot demo: backend selection plus one shdotxf call per fusion factor
//!
//! RUST_LOG=info cargo run --example fused_dot
//! SHDOT_ISA=portable RUST_LOG=info cargo run --example fused_dot

use half::f16;
use shdot_kernels::{get_isa_level, shdotxf, shdotxf_table, AltHalf, IsaLevel, MAX_FUSION};

fn encode(values: impl IntoIterator<Item = f32>) -> Vec<AltHalf> {
    values
        .into_iter()
        .map(|v| {
            AltHalf::from_ieee_f16(f16::from_f32(v))
                .unwrap_or_else(|| panic!("{v} has no finite half encoding"))
        })
        .collect()
}

fn main() {
    env_logger::init();

    println!("=== shdot backend ===");
    let level = get_isa_level();
    println!("  Selected: {}", level.name());
    for isa in [IsaLevel::Portable, IsaLevel::Avx2] {
        let mark = if isa.is_supported() { "✅" } else { "❌" };
        println!("  {mark} {}", isa.name());
    }

    println!("\n=== shdotxf1: ones · [1..9] ===");
    let x = [1.0f32; 9];
    let y = encode((1..=9).map(|v| v as f32));
    let mut sum = [0.0f32; 1];
    match shdotxf::<1>(&x, &y, 0, &mut sum, 9) {
        Ok(()) => println!("  sum = {} (expect 45)", sum[0]),
        Err(e) => println!("  failed: {e}"),
    }

    println!("\n=== shdotxf1..{MAX_FUSION}: row r holds r + 1 ===");
    let n = 37;
    let stride = n;
    let x = vec![0.5f32; n];
    let mut rows = Vec::new();
    for r in 0..MAX_FUSION {
        let mut row = encode(std::iter::repeat((r + 1) as f32).take(n));
        row.resize(2 * stride, AltHalf::ZERO);
        rows.extend(row);
    }
    let table = shdotxf_table();
    for fusion in 1..=MAX_FUSION {
        let mut sum = vec![0.0f32; fusion];
        match table.call(&x, &rows, stride, &mut sum, n) {
            Ok(()) => println!("  F={fusion}: {sum:?}"),
            Err(e) => println!("  F={fusion}: failed: {e}"),
        }
    }

    println!("\n=== exponent 31 is finite ===");
    println!("  AltHalf::MAX = {}", AltHalf::MAX.to_f32());
    println!("  as IEEE f16  = {:?}", AltHalf::MAX.to_ieee_f16());
}
