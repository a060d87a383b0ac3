//! # Hashing
//!
//! One-shot digests used for token ids, addresses and the reveal key schedule.

use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512_256};
use sha3::Keccak256;

/// 256-bit digest output.
pub type Hash = [u8; 32];

type HmacSha512_256 = Hmac<Sha512_256>;

/// Keccak-256 (the Ethereum variant, not NIST SHA3-256).
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// SHA-256.
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// SHA-512 truncated to 256 bits, with its own initial values.
pub fn sha512_256(data: &[u8]) -> Hash {
    Sha512_256::digest(data).into()
}

/// RIPEMD-160 of SHA-256, the Bitcoin public key hash.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// HMAC over SHA-512/256.
pub fn hmac_sha512_256(key: &[u8], message: &[u8]) -> Hash {
    let mut mac =
        HmacSha512_256::new_from_slice(key).expect("HMAC key size is always valid");
    mac.update(message);
    mac.finalize().into_bytes().into()
}
