//! # Key Schedule
//!
//! `key = HMAC-SHA-512/256(KDF_CONTEXT, X25519(local secret, peer public))`

use crate::domain::errors::RevealError;
use shared_crypto::{hmac_sha512_256, EphemeralKeyPair, SecretKey};

/// HMAC key separating the reveal key schedule from any other use of the
/// shared secret.
pub const KDF_CONTEXT: &[u8] = b"MRAE_Box_Deoxys-II-256-128";

/// Cipher key for an X25519 shared secret.
pub fn derive_key(shared: &[u8; 32]) -> SecretKey {
    SecretKey::from_bytes(hmac_sha512_256(KDF_CONTEXT, shared))
}

/// Consume `local` and derive the cipher key shared with `peer`.
///
/// Low-order peers are reported as `AuthenticationFailure`.
pub fn agree(local: EphemeralKeyPair, peer: &[u8; 32]) -> Result<SecretKey, RevealError> {
    let shared = local
        .diffie_hellman(peer)
        .map_err(|_| RevealError::AuthenticationFailure)?;
    Ok(derive_key(&shared))
}
