//! # Opaque Curves
//!
//! x25519 and mock token ids are not decoded; the id is carried as is.
//! x25519 ids are Montgomery u coordinates, mock ids are keccak256 of the
//! secret.

use shared_crypto::{keccak256, x25519_public_key};
use shared_types::{SecretScalar, TokenId};

/// x25519 token id: the clamped secret's public key.
pub fn x25519_id(secret: &SecretScalar) -> TokenId {
    TokenId::from_bytes(x25519_public_key(secret.as_bytes()))
}

/// Mock token id: `keccak256(secret)`.
pub fn mock_id(secret: &SecretScalar) -> TokenId {
    TokenId::from_bytes(keccak256(secret.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one() -> SecretScalar {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        SecretScalar::from_bytes(bytes)
    }

    #[test]
    fn test_x25519_id_is_public_key() {
        assert_eq!(
            x25519_id(&one()).to_hex(),
            "0xfd3384e132ad02a56c78f45547ee40038dc79002b90d29ed90e08eee762ae715"
        );
    }

    #[test]
    fn test_mock_id_is_keccak_of_secret() {
        assert_eq!(
            mock_id(&one()).to_hex(),
            "0xb10e2d527612073b26eecdfd717e6a320cf44b4afac2b0732d9fcbe2b7fa0cf6"
        );
    }
}
