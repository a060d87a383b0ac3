//! # ed25519 Encoding
//!
//! The token id is the RFC 8032 compressed public key, byte for byte.

use shared_crypto::ed25519_public_key;
use shared_types::{SecretScalar, TokenId};

pub fn encode(point: &[u8; 32]) -> TokenId {
    TokenId::from_bytes(*point)
}

pub fn decode(id: &TokenId) -> [u8; 32] {
    *id.as_bytes()
}

/// Public key for a 32-byte seed.
pub fn from_secret(secret: &SecretScalar) -> [u8; 32] {
    ed25519_public_key(secret.as_bytes())
}
