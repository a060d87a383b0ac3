//! # Ed25519 Keys
//!
//! RFC 8032 public keys from 32-byte seeds.

use ed25519_dalek::SigningKey;

/// Compressed Edwards public key for a 32-byte seed.
pub fn ed25519_public_key(seed: &[u8; 32]) -> [u8; 32] {
    SigningKey::from_bytes(seed).verifying_key().to_bytes()
}
