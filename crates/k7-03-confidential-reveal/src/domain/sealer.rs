//! # Reveal Sealer
//!
//! The issuing contract's half of the protocol: seal a token's secret to
//! the holder's burn-time public key. Used by mock contracts and tests.

use crate::domain::errors::RevealError;
use crate::domain::key_exchange::agree;
use crate::domain::nonce::reveal_nonce;
use crate::domain::sealed::{BurnEvent, SealedReveal};
use rand::{CryptoRng, RngCore};
use shared_crypto::{encrypt, EphemeralKeyPair};
use shared_types::{SecretScalar, TokenId};
use tracing::debug;

/// Seals secrets the way the issuing contract does.
#[derive(Debug, Default, Clone, Copy)]
pub struct RevealSealer;

impl RevealSealer {
    pub fn new() -> Self {
        Self
    }

    /// Seal `secret` for `holder_public` using the contract ephemeral pair.
    pub fn seal(
        &self,
        secret: &SecretScalar,
        contract: EphemeralKeyPair,
        holder_public: &[u8; 32],
    ) -> Result<SealedReveal, RevealError> {
        let contract_public = contract.public_bytes();
        let key = agree(contract, holder_public)?;
        let nonce = reveal_nonce(holder_public);

        let ciphertext =
            encrypt(&key, &nonce, secret.as_bytes()).map_err(|_| RevealError::SealingFailed)?;
        Ok(SealedReveal::new(contract_public, ciphertext))
    }

    /// Burn `token_id`: generate a contract ephemeral pair and emit the event.
    pub fn burn<R: RngCore + CryptoRng>(
        &self,
        token_id: TokenId,
        secret: &SecretScalar,
        holder_public: &[u8; 32],
        rng: &mut R,
    ) -> Result<BurnEvent, RevealError> {
        let contract = EphemeralKeyPair::generate(rng);
        let sealed = self.seal(secret, contract, holder_public)?;
        debug!(token_id = %token_id, "sealed reveal for burn");
        Ok(BurnEvent::new(token_id, &sealed))
    }
}
