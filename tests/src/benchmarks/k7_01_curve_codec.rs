//! # K7-01 Curve Codec Benchmarks
//!
//! Decoding dominates: secp256k1 and bn254 take a square root per id,
//! ed25519 and the opaque curves are copies.

use super::small_secret;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use k7_01_curve_codec::{decode, encode, secret_to_point, CurveCodecApi, CurveCodecService};
use k7_02_address_derivation::{AddressDerivationApi, AddressDerivationService};
use shared_types::{CurveKind, TokenId};
use std::time::Duration;

fn token_ids(curve: CurveKind, count: u64) -> Vec<TokenId> {
    (1..=count)
        .filter_map(|v| k7_01_curve_codec::secret_to_token_id(curve, &small_secret(v)).ok())
        .collect()
}

pub fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("k7-01-codec");
    group.measurement_time(Duration::from_secs(5));

    for curve in CurveKind::ALL {
        let Ok(point) = secret_to_point(curve, &small_secret(0xdead_beef)) else {
            continue;
        };
        let Ok(id) = encode(&point) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("encode", curve), &point, |b, p| {
            b.iter(|| black_box(encode(p)))
        });
        group.bench_with_input(BenchmarkId::new("decode", curve), &id, |b, id| {
            b.iter(|| black_box(decode(curve, id.as_bytes())))
        });
    }

    group.finish();
}

pub fn bench_decode_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("k7-01-decode-batch");
    group.measurement_time(Duration::from_secs(10));
    let service = CurveCodecService::new();

    for size in [10u64, 100, 1000] {
        let ids = token_ids(CurveKind::Secp256k1, size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("secp256k1", size), &ids, |b, ids| {
            b.iter(|| black_box(service.decode_batch(CurveKind::Secp256k1, ids)))
        });
    }

    group.finish();
}

pub fn bench_addresses(c: &mut Criterion) {
    let mut group = c.benchmark_group("k7-02-addresses");
    let service = AddressDerivationService::default();

    for curve in [CurveKind::Secp256k1, CurveKind::Ed25519] {
        let secret = small_secret(42);
        group.bench_function(BenchmarkId::new("secret_to_addresses", curve), |b| {
            b.iter(|| black_box(service.secret_to_addresses(curve, &secret)))
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_encode_decode(c);
    bench_decode_batch(c);
    bench_addresses(c);
}
