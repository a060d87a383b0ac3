//! # Sealed Reveals and Burn Events

use crate::domain::errors::RevealError;
use serde::{Deserialize, Serialize};
use shared_crypto::TAG_SIZE;
use shared_types::secret::SECRET_LEN;
use shared_types::{CurveKind, SecretScalar, TokenId};

/// Ciphertext length for a sealed 32-byte secret.
pub const SEALED_SECRET_LEN: usize = SECRET_LEN + TAG_SIZE;

fn parse_hex(field: &'static str, s: &str) -> Result<Vec<u8>, RevealError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|_| RevealError::InvalidHex(field))
}

fn parse_public(s: &str) -> Result<[u8; 32], RevealError> {
    let bytes = parse_hex("contract public key", s)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| RevealError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        })
}

/// The contract's answer to a burn: its ephemeral public key and the
/// sealed secret. Not `Clone`; a sealed reveal is opened once.
#[derive(Debug, PartialEq, Eq)]
pub struct SealedReveal {
    contract_ephemeral_public: [u8; 32],
    ciphertext: Vec<u8>,
}

impl SealedReveal {
    pub fn new(contract_ephemeral_public: [u8; 32], ciphertext: Vec<u8>) -> Self {
        Self {
            contract_ephemeral_public,
            ciphertext,
        }
    }

    /// Parse the hex fields of a `RevealSecret` event. `0x` is optional.
    pub fn from_hex(contract_public: &str, ciphertext: &str) -> Result<Self, RevealError> {
        Ok(Self::new(
            parse_public(contract_public)?,
            parse_hex("ciphertext", ciphertext)?,
        ))
    }

    pub fn contract_ephemeral_public(&self) -> &[u8; 32] {
        &self.contract_ephemeral_public
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }
}

/// A parsed `RevealSecret(token_id, contract_public, ciphertext)` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnEvent {
    pub token_id: TokenId,
    /// `0x`-prefixed hex of the contract's ephemeral X25519 public key.
    pub contract_ephemeral_public: String,
    /// `0x`-prefixed hex of `ciphertext || tag`.
    pub ciphertext_hex: String,
}

impl BurnEvent {
    pub fn new(token_id: TokenId, sealed: &SealedReveal) -> Self {
        Self {
            token_id,
            contract_ephemeral_public: format!("0x{}", hex::encode(sealed.contract_ephemeral_public)),
            ciphertext_hex: format!("0x{}", hex::encode(&sealed.ciphertext)),
        }
    }

    /// Split into the token id and the sealed reveal.
    pub fn into_sealed(self) -> Result<(TokenId, SealedReveal), RevealError> {
        let sealed = SealedReveal::from_hex(&self.contract_ephemeral_public, &self.ciphertext_hex)?;
        Ok((self.token_id, sealed))
    }
}

/// A secret recovered from a sealed reveal.
#[derive(Debug)]
pub struct RevealedSecret {
    pub curve: CurveKind,
    /// The burned token, when the caller supplied it.
    pub token_id: Option<TokenId>,
    /// Whether the secret was checked against `token_id`.
    pub verified: bool,
    secret: SecretScalar,
}

impl RevealedSecret {
    pub(crate) fn new(
        curve: CurveKind,
        token_id: Option<TokenId>,
        verified: bool,
        secret: SecretScalar,
    ) -> Self {
        Self {
            curve,
            token_id,
            verified,
            secret,
        }
    }

    pub fn secret(&self) -> &SecretScalar {
        &self.secret
    }

    pub fn into_secret(self) -> SecretScalar {
        self.secret
    }
}
