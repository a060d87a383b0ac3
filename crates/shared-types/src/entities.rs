//! # Core Identity Entities
//!
//! Defines the token identifier, curve selector and address types.

use crate::errors::EncodingError;
use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Width of every token identifier, in bytes.
pub const TOKEN_ID_LEN: usize = 32;

// =============================================================================
// TOKEN ID
// =============================================================================

/// A 256-bit token identifier.
///
/// Wire form is `0x` followed by exactly 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId([u8; TOKEN_ID_LEN]);

impl TokenId {
    pub const fn from_bytes(bytes: [u8; TOKEN_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build from a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncodingError> {
        let arr: [u8; TOKEN_ID_LEN] =
            bytes
                .try_into()
                .map_err(|_| EncodingError::InvalidLength {
                    expected: TOKEN_ID_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    /// Parse the `0x`-prefixed hex wire form.
    ///
    /// Upper-case digits are accepted on input; output is always lowercase.
    pub fn from_hex(s: &str) -> Result<Self, EncodingError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(EncodingError::MissingHexPrefix)?;
        if digits.len() != TOKEN_ID_LEN * 2 {
            return Err(EncodingError::InvalidLength {
                expected: TOKEN_ID_LEN,
                actual: digits.len() / 2,
            });
        }
        let bytes = hex::decode(digits).map_err(|e| EncodingError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Parse an unsigned decimal number below 2^256.
    ///
    /// Surrounding whitespace is ignored; an empty string is not zero.
    pub fn from_decimal(s: &str) -> Result<Self, EncodingError> {
        let digits = s.trim();
        if digits.is_empty() {
            return Err(EncodingError::InvalidDecimal("empty string".into()));
        }
        let value = U256::from_dec_str(digits)
            .map_err(|e| EncodingError::InvalidDecimal(format!("{e:?}")))?;
        let mut bytes = [0u8; TOKEN_ID_LEN];
        value.to_big_endian(&mut bytes);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; TOKEN_ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Decimal rendering, as block explorers show token ids.
    pub fn to_decimal(&self) -> String {
        U256::from_big_endian(&self.0).to_string()
    }
}

impl From<[u8; TOKEN_ID_LEN]> for TokenId {
    fn from(bytes: [u8; TOKEN_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for TokenId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.to_hex())
    }
}

impl FromStr for TokenId {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// CURVE KIND
// =============================================================================

/// The closed set of curves a token id can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Secp256k1,
    Bn254,
    Ed25519,
    X25519,
    /// Test-only curve; the id is a hash of the secret.
    Mock,
}

impl CurveKind {
    pub const ALL: [CurveKind; 5] = [
        CurveKind::Secp256k1,
        CurveKind::Bn254,
        CurveKind::Ed25519,
        CurveKind::X25519,
        CurveKind::Mock,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CurveKind::Secp256k1 => "secp256k1",
            CurveKind::Bn254 => "bn254",
            CurveKind::Ed25519 => "ed25519",
            CurveKind::X25519 => "x25519",
            CurveKind::Mock => "mock",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveKind {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EncodingError::UnsupportedCurve(s.to_string()))
    }
}

// =============================================================================
// ADDRESSES
// =============================================================================

/// Address formats derivable from a curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    #[serde(rename = "eth")]
    Eth,
    #[serde(rename = "btc")]
    Btc,
    #[serde(rename = "segwit")]
    Segwit,
    #[serde(rename = "oasis")]
    Oasis,
    #[serde(rename = "secp256k1_xy")]
    Secp256k1Xy,
    #[serde(rename = "secp256k1_compact")]
    Secp256k1Compact,
    #[serde(rename = "key721_id")]
    Key721Id,
}

impl Chain {
    pub const ALL: [Chain; 7] = [
        Chain::Eth,
        Chain::Btc,
        Chain::Segwit,
        Chain::Oasis,
        Chain::Secp256k1Xy,
        Chain::Secp256k1Compact,
        Chain::Key721Id,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Chain::Eth => "eth",
            Chain::Btc => "btc",
            Chain::Segwit => "segwit",
            Chain::Oasis => "oasis",
            Chain::Secp256k1Xy => "secp256k1_xy",
            Chain::Secp256k1Compact => "secp256k1_compact",
            Chain::Key721Id => "key721_id",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EncodingError::UnsupportedChain(s.to_string()))
    }
}

/// A rendered address tagged with the chain it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub chain: Chain,
    pub value: String,
}

impl Address {
    pub fn new(chain: Chain, value: impl Into<String>) -> Self {
        Self {
            chain,
            value: value.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.chain, self.value)
    }
}
