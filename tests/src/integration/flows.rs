//! # Integration Test Flows
//!
//! The full token lifecycle across all three subsystems:
//!
//! 1. **Mint**: the issuer derives the token id from a secret (k7-01)
//! 2. **Inspect**: anyone maps the id to chain addresses (k7-02)
//! 3. **Burn**: the holder sends an ephemeral key, the contract seals the
//!    secret into a `BurnEvent` (k7-03)
//! 4. **Reveal**: the holder fetches the event and opens it (k7-03)

#[cfg(test)]
mod tests {
    use k7_01_curve_codec::{secret_to_token_id, CurveCodecApi, CurveCodecService};
    use k7_02_address_derivation::{AddressDerivationApi, AddressDerivationService};
    use k7_03_confidential_reveal::{
        BurnEventSource, ConfidentialRevealApi, InMemoryBurnEvents, RevealError, RevealPhase,
        RevealPolicy, RevealSealer, RevealService, RevealSession,
    };
    use shared_types::{Chain, CurveKind, SecretScalar, TokenId};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn random_secret() -> SecretScalar {
        let mut bytes = [0u8; 32];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        // Stay below every group order.
        bytes[0] &= 0x0f;
        SecretScalar::from_bytes(bytes)
    }

    /// Mint on `curve`, burn to a fresh session, and return the pieces.
    async fn mint_and_burn(
        curve: CurveKind,
        secret: &SecretScalar,
    ) -> (RevealService<InMemoryBurnEvents>, RevealSession, TokenId) {
        let mut rng = rand::thread_rng();
        let token_id = secret_to_token_id(curve, secret).unwrap();

        let service =
            RevealService::new(InMemoryBurnEvents::new(), RevealPolicy::default()).unwrap();
        let session = service.begin(curve, &mut rng);

        let event = RevealSealer::new()
            .burn(token_id, secret, &session.local_public(), &mut rng)
            .unwrap();
        service.source().insert(event).await;

        (service, session, token_id)
    }

    // =============================================================================
    // LIFECYCLE
    // =============================================================================

    /// Test: mint -> burn -> reveal recovers the secret on every curve
    #[tokio::test]
    async fn test_full_lifecycle_on_every_curve() {
        for curve in CurveKind::ALL {
            let secret = random_secret();
            let (service, session, token_id) = mint_and_burn(curve, &secret).await;

            let revealed = service.reveal(session, &token_id).await.unwrap();
            assert!(revealed.verified, "{curve} reveal not verified");
            assert_eq!(revealed.token_id, Some(token_id));
            assert_eq!(revealed.secret(), &secret);
        }
    }

    /// Test: the revealed secret controls the addresses the token id shows
    #[tokio::test]
    async fn test_revealed_secret_controls_token_addresses() {
        let addresses = AddressDerivationService::default();
        for curve in [CurveKind::Secp256k1, CurveKind::Ed25519] {
            let secret = random_secret();
            let (service, session, token_id) = mint_and_burn(curve, &secret).await;

            let from_id = addresses.token_id_to_addresses(curve, &token_id).unwrap();
            let revealed = service.reveal(session, &token_id).await.unwrap();
            let from_secret = addresses
                .secret_to_addresses(curve, revealed.secret())
                .unwrap();

            // Same sets, possibly in another order for secp256k1's two roots.
            assert_eq!(from_id.len(), from_secret.len());
            for set in &from_secret {
                assert!(from_id.contains(set), "{curve}: {set:?} missing");
            }
        }
    }

    /// Test: a session kept across restarts via its secret still reveals
    #[tokio::test]
    async fn test_resumed_session_reveals() {
        let mut rng = rand::thread_rng();
        let secret = random_secret();
        let curve = CurveKind::Bn254;
        let token_id = secret_to_token_id(curve, &secret).unwrap();

        let holder = shared_crypto::EphemeralKeyPair::generate(&mut rng);
        let holder_public = holder.public_bytes();
        let stored = *holder.secret_bytes();
        drop(holder);

        let event = RevealSealer::new()
            .burn(token_id, &secret, &holder_public, &mut rng)
            .unwrap();
        let source: InMemoryBurnEvents = std::iter::once(event).collect();
        let service = RevealService::new(source, RevealPolicy::default()).unwrap();

        let session = service.resume(curve, stored);
        assert_eq!(session.local_public(), holder_public);
        let revealed = service.reveal(session, &token_id).await.unwrap();
        assert_eq!(revealed.secret(), &secret);
    }

    // =============================================================================
    // FAILURE PATHS
    // =============================================================================

    #[tokio::test]
    async fn test_reveal_of_unburned_token_fails() {
        let secret = random_secret();
        let (service, session, _) = mint_and_burn(CurveKind::Mock, &secret).await;
        let other = TokenId::from_bytes([0x42; 32]);
        assert_eq!(
            service.reveal(session, &other).await.unwrap_err(),
            RevealError::EventNotFound(other)
        );
    }

    /// Test: an event sealed for one holder cannot be opened by another
    #[tokio::test]
    async fn test_stolen_event_does_not_open() {
        let secret = random_secret();
        let (service, _victim, token_id) = mint_and_burn(CurveKind::Ed25519, &secret).await;

        let thief = service.begin(CurveKind::Ed25519, &mut rand::thread_rng());
        assert_eq!(
            service.reveal(thief, &token_id).await.unwrap_err(),
            RevealError::AuthenticationFailure
        );
    }

    /// Test: an issuer that minted the wrong id for the secret is caught
    #[tokio::test]
    async fn test_mismatched_mint_is_detected() {
        let mut rng = rand::thread_rng();
        let curve = CurveKind::Secp256k1;
        let secret = random_secret();
        let bogus_id = secret_to_token_id(curve, &random_secret()).unwrap();

        let service =
            RevealService::new(InMemoryBurnEvents::new(), RevealPolicy::default()).unwrap();
        let session = service.begin(curve, &mut rng);
        let event = RevealSealer::new()
            .burn(bogus_id, &secret, &session.local_public(), &mut rng)
            .unwrap();
        service.source().insert(event).await;

        assert_eq!(
            service.reveal(session, &bogus_id).await.unwrap_err(),
            RevealError::TokenIdMismatch
        );
    }

    #[tokio::test]
    async fn test_session_phase_after_service_reveal() {
        let secret = random_secret();
        let (service, mut session, token_id) = mint_and_burn(CurveKind::X25519, &secret).await;
        assert_eq!(session.phase(), RevealPhase::Awaiting);

        let event = service.source().burn_event(&token_id).await.unwrap().unwrap();
        let (_, sealed) = event.into_sealed().unwrap();
        session.reveal(sealed, Some(&token_id)).unwrap();
        assert_eq!(session.phase(), RevealPhase::Revealed);
    }

    // =============================================================================
    // KNOWN VECTORS
    // =============================================================================

    /// Test: the secp256k1 secret 1 maps to the well-known generator addresses
    #[test]
    fn test_generator_vectors() {
        let one = SecretScalar::from_hex(
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        let sets = AddressDerivationService::default()
            .secret_to_addresses(CurveKind::Secp256k1, &one)
            .unwrap();
        assert_eq!(
            sets[0].get(Chain::Eth),
            Some("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf")
        );
        assert_eq!(sets[0].get(Chain::Btc), Some("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"));
        assert_eq!(sets[0].get(Chain::Key721Id), sets[1].get(Chain::Key721Id));
    }

    #[test]
    fn test_codec_service_batch_matches_single_decode() {
        let codec = CurveCodecService::new();
        let ids: Vec<TokenId> = (1u8..=20)
            .map(|v| {
                let mut bytes = [0u8; 32];
                bytes[31] = v;
                secret_to_token_id(CurveKind::Bn254, &SecretScalar::from_bytes(bytes)).unwrap()
            })
            .collect();

        let batch = codec.decode_batch(CurveKind::Bn254, &ids);
        for (id, result) in ids.iter().zip(batch) {
            assert_eq!(result, codec.decode(CurveKind::Bn254, id.as_bytes()));
        }
    }
}
