//! # K7-03 Confidential Reveal Benchmarks
//!
//! One seal and one reveal each cost a single X25519 agreement plus
//! Deoxys-II over 32 bytes.

use super::small_secret;
use criterion::{black_box, BatchSize, Criterion};
use k7_03_confidential_reveal::{derive_key, RevealPolicy, RevealSealer, RevealSession};
use shared_crypto::EphemeralKeyPair;
use shared_types::CurveKind;

pub fn bench_key_schedule(c: &mut Criterion) {
    let shared = [0x5au8; 32];
    c.bench_function("k7-03/derive_key", |b| b.iter(|| black_box(derive_key(&shared))));
}

pub fn bench_seal(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let holder = EphemeralKeyPair::generate(&mut rng).public_bytes();
    let secret = small_secret(7);
    let sealer = RevealSealer::new();

    c.bench_function("k7-03/seal", |b| {
        b.iter_batched(
            || EphemeralKeyPair::generate(&mut rand::thread_rng()),
            |contract| black_box(sealer.seal(&secret, contract, &holder)),
            BatchSize::SmallInput,
        )
    });
}

pub fn bench_reveal(c: &mut Criterion) {
    let secret = small_secret(7);
    let id = k7_01_curve_codec::secret_to_token_id(CurveKind::Secp256k1, &secret).ok();

    c.bench_function("k7-03/reveal_verified", |b| {
        b.iter_batched(
            || {
                let mut rng = rand::thread_rng();
                let session =
                    RevealSession::generate(CurveKind::Secp256k1, RevealPolicy::default(), &mut rng);
                let sealed = RevealSealer::new().seal(
                    &secret,
                    EphemeralKeyPair::generate(&mut rng),
                    &session.local_public(),
                );
                (session, sealed)
            },
            |(mut session, sealed)| {
                if let Ok(sealed) = sealed {
                    black_box(session.reveal(sealed, id.as_ref()).is_ok());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_key_schedule(c);
    bench_seal(c);
    bench_reveal(c);
}
