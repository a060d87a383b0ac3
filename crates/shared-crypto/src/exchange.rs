//! # X25519 Key Exchange
//!
//! Ephemeral Diffie-Hellman pairs for the burn-time reveal. A pair is
//! consumed by `diffie_hellman`, so one ephemeral secret serves exactly one
//! exchange.

use crate::CryptoError;
use rand::{CryptoRng, RngCore};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

/// X25519 public key length in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Single-use X25519 key pair.
pub struct EphemeralKeyPair {
    secret: StaticSecret,
    public: PublicKey,
}

impl EphemeralKeyPair {
    /// Generate a fresh pair from an exclusively borrowed CSPRNG.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = StaticSecret::random_from_rng(rng);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Rebuild a pair from a stored secret (for example one printed by a
    /// key generation tool before the burn transaction was sent).
    pub fn from_secret_bytes(bytes: [u8; 32]) -> Self {
        let secret = StaticSecret::from(bytes);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Public half, as sent to the peer.
    pub fn public_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.public.to_bytes()
    }

    /// Secret half. Only for handing the key to its owner.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.secret.to_bytes())
    }

    /// Consume the pair and compute the shared secret with `peer`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::NonContributory` when `peer` is a low-order
    /// point and the result is all zeros.
    pub fn diffie_hellman(
        self,
        peer: &[u8; PUBLIC_KEY_SIZE],
    ) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
        let shared = self.secret.diffie_hellman(&PublicKey::from(*peer));
        if !shared.was_contributory() {
            return Err(CryptoError::NonContributory);
        }
        Ok(Zeroizing::new(*shared.as_bytes()))
    }
}

impl std::fmt::Debug for EphemeralKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemeralKeyPair")
            .field("public", &self.public.as_bytes())
            .finish_non_exhaustive()
    }
}

/// X25519 base-point multiplication of a (clamped) secret.
pub fn x25519_public_key(secret: &[u8; 32]) -> [u8; PUBLIC_KEY_SIZE] {
    let secret = StaticSecret::from(*secret);
    PublicKey::from(&secret).to_bytes()
}
