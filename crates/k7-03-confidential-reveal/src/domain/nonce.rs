//! # Reveal Nonce

use shared_crypto::{keccak256, Nonce, NONCE_SIZE};

/// `keccak256(holder public)[..15]`.
///
/// Both sides compute it from the public key the holder sent with the burn
/// call, so it never travels in the event.
pub fn reveal_nonce(holder_public: &[u8; 32]) -> Nonce {
    let digest = keccak256(holder_public);
    let mut bytes = [0u8; NONCE_SIZE];
    bytes.copy_from_slice(&digest[..NONCE_SIZE]);
    Nonce::from_bytes(bytes)
}
