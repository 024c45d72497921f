//! Throughput benchmarks for the CRC engines
//!
//! This benchmark suite evaluates:
//! - CRC-64 reflected and non-reflected across the 100 B .. 10 MB ladder
//! - Table engine vs fold engine on the same inputs
//! - Narrow widths, which share the 64-bit fold path
//! - Combine operator construction and application

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxicrc_core::{Backend, CrcModel, CrcParams, crc_calc, crc_calc_with, crc_combine};
use std::hint::black_box;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Counting bytes, wrapping at 256
    pub fn sequential(size: usize) -> Vec<u8> {
        (0..size).map(|i| i as u8).collect()
    }
}

/// Powers of ten from 100 bytes up
mod data_sizes {
    pub const LADDER: [(&str, usize); 6] = [
        ("100B", 100),
        ("1KB", 1_000),
        ("10KB", 10_000),
        ("100KB", 100_000),
        ("1MB", 1_000_000),
        ("10MB", 10_000_000),
    ];
}

fn crc64(refin: bool) -> CrcParams {
    CrcParams::new(64, 0x42F0E1EBA9EA3693, u64::MAX, refin, refin, u64::MAX)
        .expect("CRC-64 parameters are valid")
}

/// Benchmark reflected and non-reflected CRC-64 across the size ladder
fn bench_crc64_sizes(c: &mut Criterion) {
    for (group_name, refin) in [("crc64_reflected", true), ("crc64_non_reflected", false)] {
        let params = crc64(refin);
        let mut group = c.benchmark_group(group_name);

        for (size_name, size) in data_sizes::LADDER {
            let data = test_data::sequential(size);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
                b.iter(|| {
                    let checksum = crc_calc(&params, params.init(), black_box(data));
                    black_box(checksum);
                });
            });
        }

        group.finish();
    }
}

/// Compare the table engine with the fold engine
fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("backends");
    let params = crc64(true);

    for size in [256usize, 4 * 1024, 64 * 1024, 1024 * 1024] {
        let data = test_data::sequential(size);
        group.throughput(Throughput::Bytes(size as u64));

        for backend in [Backend::Table, Backend::Clmul] {
            group.bench_with_input(BenchmarkId::new(backend.name(), size), &data, |b, data| {
                b.iter(|| {
                    let checksum = crc_calc_with(backend, &params, params.init(), black_box(data));
                    black_box(checksum);
                });
            });
        }
    }

    group.finish();
}

/// Narrow and odd widths run through the same fold path
fn bench_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("widths");
    let data = test_data::sequential(64 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for model in [
        CrcModel::CRC_8_SMBUS,
        CrcModel::CRC_16_IBM_SDLC,
        CrcModel::CRC_24_OPENPGP,
        CrcModel::CRC_32_ISCSI,
        CrcModel::CRC_40_GSM,
    ] {
        let params = model.params().expect("catalog models are valid");
        group.bench_with_input(BenchmarkId::from_parameter(model.name), &data, |b, data| {
            b.iter(|| black_box(crc_calc(&params, params.init(), black_box(data))));
        });
    }

    group.finish();
}

/// Combine cost grows with the bit length of the second buffer
fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    let params = crc64(true);

    for len in [1u64, 1 << 10, 1 << 20, 1 << 40, u64::MAX] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                black_box(crc_combine(
                    &params,
                    black_box(0x0123_4567_89AB_CDEF),
                    black_box(0xFEDC_BA98_7654_3210),
                    len,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_crc64_sizes,
    bench_backends,
    bench_widths,
    bench_combine
);
criterion_main!(benches);
