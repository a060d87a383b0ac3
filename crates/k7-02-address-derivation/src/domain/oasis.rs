//! # Oasis Addresses
//!
//! Staking account addresses for ed25519 keys: a version byte and the
//! first 20 bytes of a context-separated SHA-512/256, in bech32.

use crate::domain::errors::AddressError;
use bech32::{ToBase32, Variant};
use shared_crypto::sha512_256;

const CONTEXT: &[u8] = b"oasis-core/address: staking";
const VERSION: u8 = 0;
const HRP: &str = "oasis";

/// Raw 21-byte address, `version || sha512_256(context || version || pk)[..20]`.
pub fn oasis_address_bytes(public_key: &[u8; 32]) -> [u8; 21] {
    let mut preimage = Vec::with_capacity(CONTEXT.len() + 1 + public_key.len());
    preimage.extend_from_slice(CONTEXT);
    preimage.push(VERSION);
    preimage.extend_from_slice(public_key);
    let digest = sha512_256(&preimage);

    let mut out = [0u8; 21];
    out[0] = VERSION;
    out[1..].copy_from_slice(&digest[..20]);
    out
}

/// Bech32 rendering with the `oasis` prefix.
pub fn oasis_address(public_key: &[u8; 32]) -> Result<String, AddressError> {
    let raw = oasis_address_bytes(public_key);
    Ok(bech32::encode(HRP, raw.to_base32(), Variant::Bech32)?)
}
