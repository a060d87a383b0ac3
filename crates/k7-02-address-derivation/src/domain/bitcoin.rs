//! # Bitcoin Addresses
//!
//! Both forms hash the SEC1 compressed public key.

use crate::domain::errors::AddressError;
use bech32::{u5, ToBase32, Variant};
use shared_crypto::hash160;

const P2PKH_VERSION: u8 = 0x00;
const SEGWIT_HRP: &str = "bc";
const WITNESS_V0: u8 = 0;

/// Legacy pay-to-pubkey-hash, Base58Check with version 0.
pub fn p2pkh_address(compressed: &[u8; 33]) -> String {
    bs58::encode(hash160(compressed))
        .with_check_version(P2PKH_VERSION)
        .into_string()
}

/// Native segwit v0 pay-to-witness-pubkey-hash (BIP-173).
pub fn segwit_address(compressed: &[u8; 33]) -> Result<String, AddressError> {
    let program = hash160(compressed);
    let mut data = vec![u5::try_from_u8(WITNESS_V0)?];
    data.extend(program.to_base32());
    Ok(bech32::encode(SEGWIT_HRP, data, Variant::Bech32)?)
}
