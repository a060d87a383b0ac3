//! # Property Tests
//!
//! Invariants that must hold for arbitrary secrets and tampering.

#[cfg(test)]
mod tests {
    use k7_01_curve_codec::{decode, encode, secret_to_point, CodecError};
    use k7_03_confidential_reveal::{
        RevealError, RevealPolicy, RevealSealer, RevealSession, SealedReveal, SEALED_SECRET_LEN,
    };
    use proptest::prelude::*;
    use shared_crypto::EphemeralKeyPair;
    use shared_types::{CurveKind, SecretScalar};

    fn curve() -> impl Strategy<Value = CurveKind> {
        prop::sample::select(CurveKind::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Test: every derived point survives encode -> decode
        #[test]
        fn prop_decode_contains_point(curve in curve(), bytes in any::<[u8; 32]>()) {
            let secret = SecretScalar::from_bytes(bytes);
            match secret_to_point(curve, &secret) {
                Ok(point) => {
                    let id = encode(&point).unwrap();
                    let candidates = decode(curve, id.as_bytes()).unwrap();
                    prop_assert!(candidates.contains(&point));
                }
                // Only a secret that reduces to zero has no point.
                Err(e) => prop_assert_eq!(e, CodecError::InvalidScalar(curve)),
            }
        }

        /// Test: decode never panics on arbitrary ids
        #[test]
        fn prop_decode_total(curve in curve(), bytes in any::<[u8; 32]>()) {
            match decode(curve, &bytes) {
                Ok(candidates) => prop_assert!(!candidates.is_empty()),
                Err(e) => prop_assert_eq!(e, CodecError::PointNotOnCurve(curve)),
            }
        }

        /// Test: flipping any ciphertext bit fails authentication
        #[test]
        fn prop_tampering_is_detected(
            secret in any::<[u8; 32]>(),
            index in 0usize..SEALED_SECRET_LEN,
            bit in 0u8..8,
        ) {
            let mut rng = rand::thread_rng();
            let mut session =
                RevealSession::generate(CurveKind::Mock, RevealPolicy::default(), &mut rng);
            let sealed = RevealSealer::new()
                .seal(
                    &SecretScalar::from_bytes(secret),
                    EphemeralKeyPair::generate(&mut rng),
                    &session.local_public(),
                )
                .unwrap();
            prop_assert_eq!(sealed.ciphertext().len(), SEALED_SECRET_LEN);

            let mut bytes = sealed.ciphertext().to_vec();
            bytes[index] ^= 1 << bit;
            let tampered = SealedReveal::new(*sealed.contract_ephemeral_public(), bytes);
            prop_assert_eq!(
                session.reveal(tampered, None).unwrap_err(),
                RevealError::AuthenticationFailure
            );
        }

        /// Test: an honest seal always opens to the same secret
        #[test]
        fn prop_seal_then_reveal(secret in any::<[u8; 32]>()) {
            let mut rng = rand::thread_rng();
            let secret = SecretScalar::from_bytes(secret);
            let mut session =
                RevealSession::generate(CurveKind::X25519, RevealPolicy::default(), &mut rng);
            let sealed = RevealSealer::new()
                .seal(&secret, EphemeralKeyPair::generate(&mut rng), &session.local_public())
                .unwrap();
            let revealed = session.reveal(sealed, None).unwrap();
            prop_assert_eq!(revealed.secret(), &secret);
        }
    }
}
