//! # Key721 Benchmarks
//!
//! Each module exposes `register_benchmarks`, wired up in
//! `benches/k7_benchmarks.rs`.

pub mod k7_01_curve_codec;
pub mod k7_03_reveal;

/// Secret holding `v` in its last eight bytes.
pub fn small_secret(v: u64) -> shared_types::SecretScalar {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&v.to_be_bytes());
    shared_types::SecretScalar::from_bytes(bytes)
}
