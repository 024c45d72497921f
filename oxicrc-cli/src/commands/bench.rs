//! Bench command implementation.
//!
//! Prints a markdown throughput table for CRC-64 (poly 0x42F0E1EBA9EA3693)
//! in both conventions over buffers from 100 bytes upward.

use crate::utils::{create_progress_bar, format_len};
use oxicrc_core::{Backend, CrcParams, crc_calc_with};
use std::hint::black_box;
use std::time::Instant;

const GIB: f64 = (1u64 << 30) as f64;

/// Options for the bench command.
pub struct BenchOptions {
    pub max_size: u64,
    pub budget: u64,
    pub table: bool,
    pub progress: bool,
}

pub fn cmd_bench(options: &BenchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let reflected = CrcParams::new(64, 0x42F0E1EBA9EA3693, u64::MAX, true, true, u64::MAX)?;
    let normal = CrcParams::new(64, 0x42F0E1EBA9EA3693, u64::MAX, false, false, u64::MAX)?;
    let backend = if options.table {
        Backend::Table
    } else {
        Backend::detect()
    };

    let sizes = ladder(options.max_size);
    let pb = create_progress_bar(sizes.len() as u64, options.progress);
    let mut rows = Vec::with_capacity(sizes.len());
    for len in sizes {
        pb.set_message(format_len(len));
        let buf: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let iterations = (options.budget / len).max(1);
        let r = throughput(&reflected, backend, &buf, iterations);
        let n = throughput(&normal, backend, &buf, iterations);
        tracing::debug!(len, iterations, "bench row");
        rows.push((len, r, n));
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("Backend: {}\n", backend);
    println!("| Length | Reflected | Non-Reflected |");
    println!("| --- | :-: | :-: |");
    for (len, r, n) in rows {
        println!("| {} | {:.2} | {:.2} |", format_len(len), r, n);
    }
    Ok(())
}

/// 100 bytes, then every power of ten up to `max_size`.
fn ladder(max_size: u64) -> Vec<u64> {
    std::iter::successors(Some(100u64), |len| len.checked_mul(10))
        .take_while(|&len| len <= max_size)
        .collect()
}

/// GiB/s over `iterations` passes.
fn throughput(params: &CrcParams, backend: Backend, buf: &[u8], iterations: u64) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(crc_calc_with(backend, params, params.init(), black_box(buf)));
    }
    let seconds = start.elapsed().as_secs_f64().max(f64::EPSILON);
    (buf.len() as u64 * iterations) as f64 / seconds / GIB
}
