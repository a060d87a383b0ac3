//! # Key721 Benchmarks
//!
//! | Subsystem | Hot path |
//! |-----------|----------|
//! | k7-01 Curve Codec | token id decode (square root) |
//! | k7-02 Address Derivation | secret to every address |
//! | k7-03 Confidential Reveal | X25519 + Deoxys-II open |

use criterion::{criterion_group, criterion_main, Criterion};
use k7_tests::benchmarks::{k7_01_curve_codec, k7_03_reveal};

fn codec(c: &mut Criterion) {
    k7_01_curve_codec::register_benchmarks(c);
}

fn reveal(c: &mut Criterion) {
    k7_03_reveal::register_benchmarks(c);
}

criterion_group!(benches, codec, reveal);
criterion_main!(benches);
